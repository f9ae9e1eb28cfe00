use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use serde::Deserialize;

use crate::records::{AthleteRecord, CoachRecord, MedalRecord, SUPPORTED_YEARS, combine_athletes};

/// All input rows for one run, with the yearly athlete files already combined.
#[derive(Debug, Clone)]
pub struct GamesDataset {
    pub athletes: Vec<AthleteRecord>,
    pub coaches: Vec<CoachRecord>,
    pub medals: Vec<MedalRecord>,
}

#[derive(Debug, Deserialize)]
struct AthleteRow {
    id: u32,
    name: String,
    sport: String,
    event: String,
    country: String,
    coach_id: Option<u32>,
}

const ATHLETE_COLUMNS: &[&str] = &["id", "name", "sport", "event", "country", "coach_id"];
const COACH_COLUMNS: &[&str] = &["id", "name", "sport"];
const MEDAL_COLUMNS: &[&str] = &["id", "sport", "event", "medal", "year"];

/// Load one yearly athlete file and stamp every row with that year.
pub fn load_athletes(path: &Path, year: u16) -> Result<Vec<AthleteRecord>> {
    let mut reader = open_csv(path)?;
    require_columns(&mut reader, path, ATHLETE_COLUMNS)?;

    let mut rows = Vec::new();
    for (idx, row) in reader.deserialize::<AthleteRow>().enumerate() {
        let row = row.with_context(|| format!("decode athlete row {} in {}", idx + 1, path.display()))?;
        rows.push(AthleteRecord {
            id: row.id,
            name: row.name,
            sport: row.sport,
            event: row.event,
            country: row.country,
            coach_id: row.coach_id,
            competition_year: year,
        });
    }
    Ok(rows)
}

pub fn load_coaches(path: &Path) -> Result<Vec<CoachRecord>> {
    let mut reader = open_csv(path)?;
    require_columns(&mut reader, path, COACH_COLUMNS)?;

    let mut rows = Vec::new();
    for (idx, row) in reader.deserialize::<CoachRecord>().enumerate() {
        let row = row.with_context(|| format!("decode coach row {} in {}", idx + 1, path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load medal rows, keeping only the years the scoring table covers.
pub fn load_medals(path: &Path) -> Result<Vec<MedalRecord>> {
    let mut reader = open_csv(path)?;
    require_columns(&mut reader, path, MEDAL_COLUMNS)?;

    let mut rows = Vec::new();
    for (idx, row) in reader.deserialize::<MedalRecord>().enumerate() {
        let row = row.with_context(|| format!("decode medal row {} in {}", idx + 1, path.display()))?;
        if SUPPORTED_YEARS.contains(&row.year) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Load every input file. The yearly athlete files are independent, so they
/// decode in parallel before the batches are combined.
pub fn load_all_inputs(
    athlete_sources: &[(PathBuf, u16)],
    coaches_path: &Path,
    medals_path: &Path,
) -> Result<GamesDataset> {
    let batches = athlete_sources
        .par_iter()
        .map(|(path, year)| load_athletes(path, *year))
        .collect::<Result<Vec<_>>>()?;

    let coaches = load_coaches(coaches_path)?;
    let medals = load_medals(medals_path)?;

    Ok(GamesDataset {
        athletes: combine_athletes(batches),
        coaches,
        medals,
    })
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    csv::Reader::from_path(path).with_context(|| format!("open csv {}", path.display()))
}

fn require_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    path: &Path,
    required: &[&str],
) -> Result<()> {
    let headers = reader
        .headers()
        .with_context(|| format!("read csv header in {}", path.display()))?;
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} is missing required column(s): {}",
            path.display(),
            missing.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_are_named() {
        let mut reader = csv::Reader::from_reader("id,name\n1,Alice\n".as_bytes());
        let err = require_columns(&mut reader, Path::new("athletes.csv"), ATHLETE_COLUMNS)
            .expect_err("header check should fail");
        let message = err.to_string();
        assert!(message.contains("sport"));
        assert!(message.contains("country"));
        assert!(message.contains("coach_id"));
    }

    #[test]
    fn complete_header_passes() {
        let mut reader = csv::Reader::from_reader("id,name,sport\n".as_bytes());
        require_columns(&mut reader, Path::new("coaches.csv"), COACH_COLUMNS)
            .expect("header check should pass");
    }
}
