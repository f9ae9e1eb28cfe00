use serde::Deserialize;

/// Competition years the scoring table covers. Medal rows outside this set
/// are dropped at load time.
pub const SUPPORTED_YEARS: &[u16] = &[2012, 2016, 2020];

/// Countries eligible for the coach ranking, in output order.
pub const ALLOWED_COUNTRIES: &[&str] = &["CHINA", "INDIA", "USA"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AthleteRecord {
    pub id: u32,
    pub name: String,
    pub sport: String,
    pub event: String,
    pub country: String,
    pub coach_id: Option<u32>,
    pub competition_year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MedalRecord {
    pub id: u32,
    pub sport: String,
    pub event: String,
    // Raw label as carried by the source; expected GOLD/SILVER/BRONZE in any
    // casing but preserved verbatim, possibly empty.
    pub medal: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CoachRecord {
    pub id: u32,
    pub name: String,
    pub sport: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Case-insensitive label match. No trimming; anything but the three
    /// known labels (including empty) is None.
    pub fn parse(label: &str) -> Option<Medal> {
        match label.to_uppercase().as_str() {
            "GOLD" => Some(Medal::Gold),
            "SILVER" => Some(Medal::Silver),
            "BRONZE" => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// Union of the per-year athlete batches into one table. Every row is kept
/// as-is; an athlete competing in several years stays one row per year.
pub fn combine_athletes(batches: Vec<Vec<AthleteRecord>>) -> Vec<AthleteRecord> {
    let total = batches.iter().map(Vec::len).sum();
    let mut combined = Vec::with_capacity(total);
    for batch in batches {
        combined.extend(batch);
    }
    combined
}
