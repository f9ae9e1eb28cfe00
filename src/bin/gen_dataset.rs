use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use podium_rankings::records::{ALLOWED_COUNTRIES, SUPPORTED_YEARS};

const SPORT_EVENTS: &[(&str, &[&str])] = &[
    ("Fencing", &["Sabre", "Epee", "Foil"]),
    ("Swimming", &["100m Freestyle", "200m Medley", "400m Relay"]),
    ("Archery", &["Individual", "Team"]),
    ("Athletics", &["100m Sprint", "Marathon", "Long Jump"]),
    ("Judo", &["Lightweight", "Heavyweight"]),
    ("Shooting", &["10m Air Rifle", "Trap"]),
];

const FIRST_NAMES: &[&str] = &[
    "Alice", "Boris", "Chen", "Diya", "Elena", "Farid", "Grace", "Hiro", "Ishaan", "Jade",
    "Kiran", "Lena", "Marco", "Nadia", "Omar", "Priya", "Quinn", "Rosa", "Sana", "Tariq",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Bauer", "Chen", "Dube", "Evans", "Fischer", "Gupta", "Herrera", "Ito", "Joshi",
    "Khan", "Lopez", "Mehta", "Novak", "O'Neill", "Okafor", "Patel", "Rao", "Singh", "Tanaka",
    "Ueda", "Wang", "Xu", "Zhang",
];

const OTHER_COUNTRIES: &[&str] = &["BRAZIL", "JAPAN", "KENYA", "FRANCE", "ITALY", "CANADA"];

const MEDAL_LABELS: &[&str] = &["Gold", "Silver", "Bronze", "gold", "SILVER", "bronze"];

fn main() -> Result<()> {
    let out_dir = arg_value("--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demo_data"));
    let athletes_per_year = arg_value("--athletes")
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(150)
        .clamp(20, 5000);
    let seed = arg_value("--seed")
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(7);

    let mut rng = StdRng::seed_from_u64(seed);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let coach_count = (athletes_per_year / 10).max(9) as u32;
    let mut coach_rows = Vec::new();
    for coach_id in 1..=coach_count {
        let (sport, _) = SPORT_EVENTS[rng.gen_range(0..SPORT_EVENTS.len())];
        coach_rows.push(vec![
            coach_id.to_string(),
            draw_name(&mut rng),
            sport.to_string(),
        ]);
    }
    write_csv(&out_dir.join("coaches.csv"), &["id", "name", "sport"], &coach_rows)?;

    let mut medal_rows = Vec::new();
    for year in SUPPORTED_YEARS {
        let mut athlete_rows = Vec::new();
        for id in 1..=athletes_per_year as u32 {
            let sport_idx = rng.gen_range(0..SPORT_EVENTS.len());
            let (sport, events) = SPORT_EVENTS[sport_idx];
            let event = events[rng.gen_range(0..events.len())];
            let country = draw_country(&mut rng);
            let coach_id = draw_coach_id(&mut rng, coach_count);
            athlete_rows.push(vec![
                id.to_string(),
                draw_name(&mut rng),
                vary_case(sport, &mut rng),
                vary_case(event, &mut rng),
                country,
                coach_id,
            ]);

            if rng.gen_bool(0.4) {
                let medals = if rng.gen_bool(0.2) { 2 } else { 1 };
                for _ in 0..medals {
                    medal_rows.push(vec![
                        id.to_string(),
                        vary_case(sport, &mut rng),
                        vary_case(event, &mut rng),
                        MEDAL_LABELS[rng.gen_range(0..MEDAL_LABELS.len())].to_string(),
                        year.to_string(),
                    ]);
                }
            }
        }
        write_csv(
            &out_dir.join(format!("athletes_{year}.csv")),
            &["id", "name", "sport", "event", "country", "coach_id"],
            &athlete_rows,
        )?;
    }

    // Noise rows: ids nobody holds, a retired label, and years outside the
    // scoring table that the loader drops.
    for _ in 0..athletes_per_year / 10 {
        let (sport, events) = SPORT_EVENTS[rng.gen_range(0..SPORT_EVENTS.len())];
        let event = events[rng.gen_range(0..events.len())];
        let year = match rng.gen_range(0..4) {
            0 => 2008,
            1 => 2024,
            _ => SUPPORTED_YEARS[rng.gen_range(0..SUPPORTED_YEARS.len())],
        };
        let label = if rng.gen_bool(0.3) {
            "Participation"
        } else {
            MEDAL_LABELS[rng.gen_range(0..MEDAL_LABELS.len())]
        };
        medal_rows.push(vec![
            rng.gen_range(90_000..99_000u32).to_string(),
            sport.to_string(),
            event.to_string(),
            label.to_string(),
            year.to_string(),
        ]);
    }
    write_csv(
        &out_dir.join("medals.csv"),
        &["id", "sport", "event", "medal", "year"],
        &medal_rows,
    )?;

    println!("Demo dataset written to {}", out_dir.display());
    println!("athletes: {athletes_per_year} per year");
    println!("coaches: {coach_count}");
    println!("medals: {}", medal_rows.len());
    println!("seed: {seed}");
    Ok(())
}

fn arg_value(flag: &str) -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    None
}

fn draw_name(rng: &mut StdRng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

fn draw_country(rng: &mut StdRng) -> String {
    if rng.gen_bool(0.6) {
        ALLOWED_COUNTRIES[rng.gen_range(0..ALLOWED_COUNTRIES.len())].to_string()
    } else {
        OTHER_COUNTRIES[rng.gen_range(0..OTHER_COUNTRIES.len())].to_string()
    }
}

fn draw_coach_id(rng: &mut StdRng, coach_count: u32) -> String {
    if rng.gen_bool(0.12) {
        // Some athletes report no coach.
        return String::new();
    }
    if rng.gen_bool(0.05) {
        // Dangling reference, the coach file has no such id.
        return (coach_count + rng.gen_range(1..20)).to_string();
    }
    rng.gen_range(1..=coach_count).to_string()
}

fn vary_case(value: &str, rng: &mut StdRng) -> String {
    match rng.gen_range(0..5) {
        0 => value.to_uppercase(),
        1 => value.to_lowercase(),
        _ => value.to_string(),
    }
}

fn write_csv(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(header)
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
