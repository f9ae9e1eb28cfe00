use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::athlete_rankings::{MedalTally, athlete_medal_key, medal_index};
use crate::medal_points::ScoringTable;
use crate::records::{ALLOWED_COUNTRIES, AthleteRecord, CoachRecord, MedalRecord};

/// Ranked list length per country.
pub const TOP_COACH_LIMIT: usize = 5;

/// Cumulative scored performance for one (coach, country) pair, summed
/// across years and across every sport the coach's athletes competed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachPerformance {
    pub coach_name: String,
    pub country: String,
    pub total_points: i64,
    pub total_gold: u32,
    pub total_silver: u32,
    pub total_bronze: u32,
}

/// Credit medals to coaches via their athletes and sum per (coach, country).
///
/// Only athletes from the allow-list countries qualify, and only when their
/// coach_id names a coach in the same sport. The joined rows are
/// deduplicated over every column before anything is summed, so duplicate
/// source rows reaching the same (coach, athlete, medal) combination through
/// equal join paths count once.
pub fn aggregate_coach_performance(
    athletes: &[AthleteRecord],
    coaches: &[CoachRecord],
    medals: &[MedalRecord],
    table: &ScoringTable,
) -> Vec<CoachPerformance> {
    let eligible: Vec<AthleteRecord> = athletes
        .iter()
        .filter_map(|athlete| {
            let country = athlete.country.to_uppercase();
            if !ALLOWED_COUNTRIES.contains(&country.as_str()) {
                return None;
            }
            // The country column carries the uppercased value downstream.
            let mut filtered = athlete.clone();
            filtered.country = country;
            Some(filtered)
        })
        .collect();

    let mut athletes_by_coach: HashMap<(String, u32), Vec<&AthleteRecord>> = HashMap::new();
    for athlete in &eligible {
        // No coach_id: the athlete credits no coach.
        let Some(coach_id) = athlete.coach_id else {
            continue;
        };
        athletes_by_coach
            .entry((athlete.sport.to_uppercase(), coach_id))
            .or_default()
            .push(athlete);
    }

    let medals_by_key = medal_index(medals);

    // First stage: per-year sums keyed by (coach name, country, year).
    let mut seen: HashSet<(&CoachRecord, &AthleteRecord, &MedalRecord)> = HashSet::new();
    let mut yearly: HashMap<(String, String, u16), MedalTally> = HashMap::new();
    for coach in coaches {
        let Some(group) = athletes_by_coach.get(&(coach.sport.to_uppercase(), coach.id)) else {
            continue;
        };
        for athlete in group {
            let Some(matched) = medals_by_key.get(&athlete_medal_key(athlete)) else {
                continue;
            };
            for medal in matched {
                if !seen.insert((coach, *athlete, *medal)) {
                    continue;
                }
                let tally = yearly
                    .entry((
                        coach.name.to_uppercase(),
                        athlete.country.clone(),
                        athlete.competition_year,
                    ))
                    .or_default();
                tally.add(medal, table);
            }
        }
    }

    // Second stage: fold the yearly sums into cumulative totals.
    let mut totals: HashMap<(String, String), MedalTally> = HashMap::new();
    for ((coach_name, country, _year), tally) in yearly {
        totals.entry((coach_name, country)).or_default().merge(tally);
    }

    let mut rows: Vec<CoachPerformance> = totals
        .into_iter()
        .map(|((coach_name, country), tally)| CoachPerformance {
            coach_name,
            country,
            total_points: tally.points,
            total_gold: tally.gold,
            total_silver: tally.silver,
            total_bronze: tally.bronze,
        })
        .collect();
    rows.sort_by(|a, b| {
        a.coach_name
            .cmp(&b.coach_name)
            .then_with(|| a.country.cmp(&b.country))
    });
    rows
}

fn coach_rank_order(a: &CoachPerformance, b: &CoachPerformance) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then(b.total_gold.cmp(&a.total_gold))
        .then(b.total_silver.cmp(&a.total_silver))
        .then(b.total_bronze.cmp(&a.total_bronze))
        .then_with(|| a.coach_name.cmp(&b.coach_name))
}

/// Top five coaches of every allow-list country, one flat list in the
/// allow-list's declared country order, each country's slice rank-ordered.
/// Countries with no aggregated rows contribute nothing.
pub fn top_coaches_by_country(rows: &[CoachPerformance]) -> Vec<String> {
    let mut out = Vec::new();
    for country in ALLOWED_COUNTRIES {
        let mut group: Vec<&CoachPerformance> =
            rows.iter().filter(|row| row.country == *country).collect();
        group.sort_by(|a, b| coach_rank_order(a, b));
        out.extend(
            group
                .into_iter()
                .take(TOP_COACH_LIMIT)
                .map(|row| row.coach_name.clone()),
        );
    }
    out
}
