use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use podium_rankings::athlete_rankings::{aggregate_athlete_performance, best_athletes_per_sport};
use podium_rankings::coach_rankings::aggregate_coach_performance;
use podium_rankings::medal_points::ScoringTable;
use podium_rankings::pipeline::run_rankings;
use podium_rankings::records::{AthleteRecord, CoachRecord, MedalRecord, SUPPORTED_YEARS};

const SPORTS: &[(&str, &str)] = &[
    ("Fencing", "Sabre"),
    ("Swimming", "100m Freestyle"),
    ("Archery", "Individual"),
    ("Athletics", "Marathon"),
    ("Judo", "Lightweight"),
];

const COUNTRIES: &[&str] = &["CHINA", "INDIA", "USA", "BRAZIL", "JAPAN", "FRANCE"];

const LABELS: &[&str] = &["Gold", "Silver", "Bronze", "gold", "Participation"];

fn synthetic_dataset(
    athletes_per_year: usize,
) -> (Vec<AthleteRecord>, Vec<CoachRecord>, Vec<MedalRecord>) {
    let mut rng = StdRng::seed_from_u64(17);
    let coach_count = (athletes_per_year / 10).max(5) as u32;

    let coaches: Vec<CoachRecord> = (1..=coach_count)
        .map(|id| {
            let (sport, _) = SPORTS[rng.gen_range(0..SPORTS.len())];
            CoachRecord {
                id,
                name: format!("Coach {id}"),
                sport: sport.to_string(),
            }
        })
        .collect();

    let mut athletes = Vec::new();
    let mut medals = Vec::new();
    for year in SUPPORTED_YEARS {
        for id in 1..=athletes_per_year as u32 {
            let (sport, event) = SPORTS[rng.gen_range(0..SPORTS.len())];
            athletes.push(AthleteRecord {
                id,
                name: format!("Athlete {}", rng.gen_range(0..athletes_per_year)),
                sport: sport.to_string(),
                event: event.to_string(),
                country: COUNTRIES[rng.gen_range(0..COUNTRIES.len())].to_string(),
                coach_id: if rng.gen_bool(0.85) {
                    Some(rng.gen_range(1..=coach_count))
                } else {
                    None
                },
                competition_year: *year,
            });
            if rng.gen_bool(0.4) {
                medals.push(MedalRecord {
                    id,
                    sport: sport.to_string(),
                    event: event.to_string(),
                    medal: LABELS[rng.gen_range(0..LABELS.len())].to_string(),
                    year: *year,
                });
            }
        }
    }

    (athletes, coaches, medals)
}

fn bench_scoring_lookup(c: &mut Criterion) {
    let table = ScoringTable::standard();
    c.bench_function("scoring_lookup", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for year in [2012u16, 2016, 2020, 2008] {
                for label in ["GOLD", "silver", "Bronze", "Participation", ""] {
                    total += table.points(black_box(label), black_box(year));
                }
            }
            black_box(total);
        })
    });
}

fn bench_athlete_aggregate(c: &mut Criterion) {
    let (athletes, _, medals) = synthetic_dataset(2_000);
    c.bench_function("athlete_aggregate", |b| {
        b.iter(|| {
            let rows = aggregate_athlete_performance(
                black_box(&athletes),
                black_box(&medals),
                ScoringTable::standard(),
            );
            black_box(rows.len());
        })
    });
}

fn bench_athlete_rank(c: &mut Criterion) {
    let (athletes, _, medals) = synthetic_dataset(2_000);
    let rows = aggregate_athlete_performance(&athletes, &medals, ScoringTable::standard());
    c.bench_function("athlete_rank", |b| {
        b.iter(|| {
            let winners = best_athletes_per_sport(black_box(&rows));
            black_box(winners.len());
        })
    });
}

fn bench_coach_aggregate(c: &mut Criterion) {
    let (athletes, coaches, medals) = synthetic_dataset(2_000);
    c.bench_function("coach_aggregate", |b| {
        b.iter(|| {
            let rows = aggregate_coach_performance(
                black_box(&athletes),
                black_box(&coaches),
                black_box(&medals),
                ScoringTable::standard(),
            );
            black_box(rows.len());
        })
    });
}

fn bench_full_rankings(c: &mut Criterion) {
    let (athletes, coaches, medals) = synthetic_dataset(2_000);
    c.bench_function("full_rankings", |b| {
        b.iter(|| {
            let report = run_rankings(
                black_box(&athletes),
                black_box(&coaches),
                black_box(&medals),
                ScoringTable::standard(),
            );
            black_box(report.best_athletes.len() + report.top_coaches.len());
        })
    });
}

criterion_group!(
    perf,
    bench_scoring_lookup,
    bench_athlete_aggregate,
    bench_athlete_rank,
    bench_coach_aggregate,
    bench_full_rankings
);
criterion_main!(perf);
