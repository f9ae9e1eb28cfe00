use std::cmp::Ordering;
use std::collections::HashMap;

use crate::medal_points::ScoringTable;
use crate::records::{AthleteRecord, Medal, MedalRecord};

/// Cumulative scored performance for one exact (name, sport) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthletePerformance {
    pub name: String,
    pub sport: String,
    pub total_points: i64,
    pub gold_medals: u32,
    pub silver_medals: u32,
    pub bronze_medals: u32,
}

/// Athlete rows match medal rows on (id, sport, event, year), with sport and
/// event compared case-insensitively.
pub(crate) type MedalKey = (u32, String, String, u16);

pub(crate) fn medal_index(medals: &[MedalRecord]) -> HashMap<MedalKey, Vec<&MedalRecord>> {
    let mut index: HashMap<MedalKey, Vec<&MedalRecord>> = HashMap::new();
    for medal in medals {
        let key = (
            medal.id,
            medal.sport.to_uppercase(),
            medal.event.to_uppercase(),
            medal.year,
        );
        index.entry(key).or_default().push(medal);
    }
    index
}

pub(crate) fn athlete_medal_key(athlete: &AthleteRecord) -> MedalKey {
    (
        athlete.id,
        athlete.sport.to_uppercase(),
        athlete.event.to_uppercase(),
        athlete.competition_year,
    )
}

/// Running sum of earned points and per-medal counts for one group key.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct MedalTally {
    pub(crate) points: i64,
    pub(crate) gold: u32,
    pub(crate) silver: u32,
    pub(crate) bronze: u32,
}

impl MedalTally {
    pub(crate) fn add(&mut self, medal: &MedalRecord, table: &ScoringTable) {
        self.points += table.points(&medal.medal, medal.year);
        match Medal::parse(&medal.medal) {
            Some(Medal::Gold) => self.gold += 1,
            Some(Medal::Silver) => self.silver += 1,
            Some(Medal::Bronze) => self.bronze += 1,
            None => {}
        }
    }

    pub(crate) fn merge(&mut self, other: MedalTally) {
        self.points += other.points;
        self.gold += other.gold;
        self.silver += other.silver;
        self.bronze += other.bronze;
    }
}

/// Join combined athlete records to medal records and sum earned points and
/// medal counts per exact (name, sport) pair. An athlete row without a
/// matching medal row contributes nothing and produces no output row.
pub fn aggregate_athlete_performance(
    athletes: &[AthleteRecord],
    medals: &[MedalRecord],
    table: &ScoringTable,
) -> Vec<AthletePerformance> {
    let index = medal_index(medals);

    let mut groups: HashMap<(String, String), MedalTally> = HashMap::new();
    for athlete in athletes {
        let Some(matched) = index.get(&athlete_medal_key(athlete)) else {
            continue;
        };
        let tally = groups
            .entry((athlete.name.clone(), athlete.sport.clone()))
            .or_default();
        for medal in matched {
            tally.add(medal, table);
        }
    }

    let mut rows: Vec<AthletePerformance> = groups
        .into_iter()
        .map(|((name, sport), tally)| AthletePerformance {
            name,
            sport,
            total_points: tally.points,
            gold_medals: tally.gold,
            silver_medals: tally.silver,
            bronze_medals: tally.bronze,
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.sport.cmp(&b.sport)));
    rows
}

fn athlete_rank_order(a: &AthletePerformance, b: &AthletePerformance) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then(b.gold_medals.cmp(&a.gold_medals))
        .then(b.silver_medals.cmp(&a.silver_medals))
        .then(b.bronze_medals.cmp(&a.bronze_medals))
        .then_with(|| a.name.to_uppercase().cmp(&b.name.to_uppercase()))
        // Names equal under uppercase would otherwise leave the order
        // undefined; fall back to the exact bytes.
        .then_with(|| a.name.cmp(&b.name))
}

/// Pick the top-ranked athlete of every sport. Sports partition
/// case-insensitively; the winner list carries uppercased names and is
/// ordered by uppercased sport. Sports with no aggregated rows are absent.
pub fn best_athletes_per_sport(rows: &[AthletePerformance]) -> Vec<String> {
    let mut by_sport: HashMap<String, Vec<&AthletePerformance>> = HashMap::new();
    for row in rows {
        by_sport
            .entry(row.sport.to_uppercase())
            .or_default()
            .push(row);
    }

    let mut winners: Vec<(String, String)> = by_sport
        .into_iter()
        .filter_map(|(sport_key, mut group)| {
            group.sort_by(|a, b| athlete_rank_order(a, b));
            group
                .first()
                .map(|winner| (sport_key, winner.name.to_uppercase()))
        })
        .collect();
    winners.sort_by(|a, b| a.0.cmp(&b.0));
    winners.into_iter().map(|(_, name)| name).collect()
}
