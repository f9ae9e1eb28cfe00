use std::env;

use crate::athlete_rankings::{aggregate_athlete_performance, best_athletes_per_sport};
use crate::coach_rankings::{aggregate_coach_performance, top_coaches_by_country};
use crate::medal_points::ScoringTable;
use crate::records::{AthleteRecord, CoachRecord, MedalRecord};

/// Final output of a run: uppercased athlete names ordered by sport, then
/// coach names ordered by country priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingsReport {
    pub best_athletes: Vec<String>,
    pub top_coaches: Vec<String>,
}

/// Run both ranking paths over the combined inputs. The paths share only
/// immutable rows, so they run side by side.
pub fn run_rankings(
    athletes: &[AthleteRecord],
    coaches: &[CoachRecord],
    medals: &[MedalRecord],
    table: &ScoringTable,
) -> RankingsReport {
    let (best_athletes, top_coaches) = rayon::join(
        || best_athletes_per_sport(&aggregate_athlete_performance(athletes, medals, table)),
        || top_coaches_by_country(&aggregate_coach_performance(athletes, coaches, medals, table)),
    );

    RankingsReport {
        best_athletes,
        top_coaches,
    }
}

pub fn build_ranking_pool() -> Option<rayon::ThreadPool> {
    let threads = ranking_parallelism();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .ok()
}

pub fn with_ranking_pool<T>(pool: &Option<rayon::ThreadPool>, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    if let Some(pool) = pool.as_ref() {
        pool.install(action)
    } else {
        action()
    }
}

fn ranking_parallelism() -> usize {
    env::var("RANKING_PARALLELISM")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(4)
        .clamp(1, 32)
}
