use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::records::Medal;

#[derive(Debug, Clone, Copy)]
struct MedalValues {
    gold: i64,
    silver: i64,
    bronze: i64,
}

/// Year-scoped medal-to-points table. Immutable once built; the aggregators
/// take it by reference so the lookup stays a pure per-row function.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    by_year: HashMap<u16, MedalValues>,
}

static STANDARD: Lazy<ScoringTable> = Lazy::new(|| {
    ScoringTable::from_rows(&[
        (2012, 20, 15, 10),
        (2016, 12, 8, 6),
        (2020, 15, 12, 7),
    ])
});

impl ScoringTable {
    /// Build a table from (year, gold, silver, bronze) rows.
    pub fn from_rows(rows: &[(u16, i64, i64, i64)]) -> ScoringTable {
        let by_year = rows
            .iter()
            .map(|&(year, gold, silver, bronze)| {
                (
                    year,
                    MedalValues {
                        gold,
                        silver,
                        bronze,
                    },
                )
            })
            .collect();
        ScoringTable { by_year }
    }

    /// The fixed production table for the supported years.
    pub fn standard() -> &'static ScoringTable {
        &STANDARD
    }

    /// Points for a medal label in a given year. An unknown year, an unknown
    /// label, or an empty label resolves to 0 instead of failing.
    pub fn points(&self, medal_label: &str, year: u16) -> i64 {
        let Some(values) = self.by_year.get(&year) else {
            return 0;
        };
        match Medal::parse(medal_label) {
            Some(Medal::Gold) => values.gold,
            Some(Medal::Silver) => values.silver,
            Some(Medal::Bronze) => values.bronze,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScoringTable;

    #[test]
    fn standard_table_values() {
        let table = ScoringTable::standard();
        assert_eq!(table.points("GOLD", 2012), 20);
        assert_eq!(table.points("SILVER", 2012), 15);
        assert_eq!(table.points("BRONZE", 2012), 10);
        assert_eq!(table.points("GOLD", 2016), 12);
        assert_eq!(table.points("SILVER", 2016), 8);
        assert_eq!(table.points("BRONZE", 2016), 6);
        assert_eq!(table.points("GOLD", 2020), 15);
        assert_eq!(table.points("SILVER", 2020), 12);
        assert_eq!(table.points("BRONZE", 2020), 7);
    }

    #[test]
    fn lookup_is_case_insensitive_in_medal() {
        let table = ScoringTable::standard();
        assert_eq!(table.points("gold", 2012), table.points("GOLD", 2012));
        assert_eq!(table.points("Silver", 2020), 12);
    }

    #[test]
    fn unknown_inputs_resolve_to_zero() {
        let table = ScoringTable::standard();
        assert_eq!(table.points("GOLD", 2008), 0);
        assert_eq!(table.points("PLATINUM", 2016), 0);
        assert_eq!(table.points("", 2012), 0);
        assert_eq!(table.points("BRONZE", 0), 0);
    }

    #[test]
    fn same_medal_scores_differently_per_year() {
        let table = ScoringTable::standard();
        assert_ne!(table.points("GOLD", 2012), table.points("GOLD", 2016));
        assert_ne!(table.points("GOLD", 2016), table.points("GOLD", 2020));
    }
}
