use std::path::PathBuf;

use anyhow::{Result, anyhow};

use podium_rankings::games_dataset;
use podium_rankings::medal_points::ScoringTable;
use podium_rankings::pipeline::{self, build_ranking_pool, with_ranking_pool};
use podium_rankings::records::SUPPORTED_YEARS;
use podium_rankings::results_export;

struct RunArgs {
    athlete_sources: Vec<(PathBuf, u16)>,
    coaches_path: PathBuf,
    medals_path: PathBuf,
    output_path: PathBuf,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = parse_run_args()?;

    let pool = build_ranking_pool();
    let (dataset, report) = with_ranking_pool(&pool, || {
        games_dataset::load_all_inputs(
            &args.athlete_sources,
            &args.coaches_path,
            &args.medals_path,
        )
        .map(|dataset| {
            let report = pipeline::run_rankings(
                &dataset.athletes,
                &dataset.coaches,
                &dataset.medals,
                ScoringTable::standard(),
            );
            (dataset, report)
        })
    })?;

    results_export::write_report(&args.output_path, &report)?;

    println!("Rankings complete");
    for (path, year) in &args.athlete_sources {
        let count = dataset
            .athletes
            .iter()
            .filter(|athlete| athlete.competition_year == *year)
            .count();
        println!("athletes {}: {} rows ({})", year, count, path.display());
    }
    println!("coaches: {} rows", dataset.coaches.len());
    println!("medals: {} rows in supported years", dataset.medals.len());
    println!("best athletes: {} sports", report.best_athletes.len());
    println!("top coaches: {} names", report.top_coaches.len());
    println!("output: {}", args.output_path.display());

    Ok(())
}

fn parse_run_args() -> Result<RunArgs> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 6 {
        return Err(anyhow!(
            "expected 6 arguments: <athletes-2012> <athletes-2016> <athletes-2020> <coaches> <medals> <output>, got {}",
            args.len()
        ));
    }

    let athlete_sources = SUPPORTED_YEARS
        .iter()
        .zip(&args[..3])
        .map(|(year, path)| (PathBuf::from(path), *year))
        .collect::<Vec<_>>();

    Ok(RunArgs {
        athlete_sources,
        coaches_path: PathBuf::from(&args[3]),
        medals_path: PathBuf::from(&args[4]),
        output_path: PathBuf::from(&args[5]),
    })
}
