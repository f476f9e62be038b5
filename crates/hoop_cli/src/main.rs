//! Career simulator CLI: benchmarks a historical dataset, generates a career
//! trajectory, then plays every season game by game with live events.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use hoop_core::{
    compute_benchmarks, Archetype, CareerSummary, Position, SeasonSimulator, SimRng,
    TickOutcome, Tier, TrajectoryGenerator, GAMES_PER_SEASON,
};
use hoop_core::season::EventNotice;

#[derive(Parser)]
#[command(name = "hoop_cli")]
#[command(about = "Simulate a basketball career from historical data", long_about = None)]
struct Cli {
    /// Historical stats CSV (player, position, age, ppg, rpg, apg, ...)
    #[arg(long)]
    csv: PathBuf,

    /// Position to play (PG, SG, SF, PF, C)
    #[arg(long, default_value = "PG")]
    position: String,

    /// Archetype name (unrecognized names fall back to All-Around)
    #[arg(long, default_value = "All-Around")]
    archetype: String,

    /// RNG seed; the same seed replays the same career
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Age in the rookie season
    #[arg(long, default_value = "22")]
    starting_age: u8,

    /// Career length in seasons
    #[arg(long, default_value = "15")]
    years: usize,

    /// Games per season
    #[arg(long, default_value_t = GAMES_PER_SEASON)]
    games: u32,

    /// Print every game's box line instead of season summaries only
    #[arg(long)]
    verbose_games: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let (records, stats) = dataset_builder::load_records(&cli.csv)
        .with_context(|| format!("loading dataset {}", cli.csv.display()))?;
    println!(
        "📊 Loaded {} records from {} ({} rows skipped)",
        stats.parsed,
        cli.csv.display(),
        stats.failed
    );

    let benchmarks = compute_benchmarks(&records);
    if benchmarks.is_empty() {
        bail!("no position in the dataset has enough records to benchmark");
    }

    let Some(position) = Position::from_label(&cli.position) else {
        bail!("unknown position '{}' (expected PG, SG, SF, PF or C)", cli.position);
    };
    let archetype = Archetype::parse_or_default(&cli.archetype);

    println!(
        "\n🏀 {} {} | age {} | {} seasons | seed {}",
        archetype,
        position,
        cli.starting_age,
        cli.years,
        cli.seed
    );

    let generator = TrajectoryGenerator::new(&benchmarks);
    let mut rng = SimRng::seed_from_u64(cli.seed);
    let trajectory =
        generator.generate(position, archetype, cli.starting_age, cli.years, &mut rng);

    println!("\n=== Projected Trajectory ===");
    println!("{:>4} {:>4} {:>6} {:>6} {:>6} {:>6} {:>6}  Tier", "Yr", "Age", "PPG", "RPG", "APG", "MPG", "GP");
    for year in &trajectory {
        println!(
            "{:>4} {:>4} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6}  {}",
            year.year,
            year.age,
            year.ppg,
            year.rpg,
            year.apg,
            year.mpg,
            year.games_played,
            year.tier.label()
        );
    }

    let summary = CareerSummary::from_years(&trajectory);

    let mut simulator = SeasonSimulator::new(cli.games, cli.years as u32, cli.seed);
    simulator.start_career(trajectory);

    println!("\n=== Playing It Out ===");
    loop {
        match simulator.tick() {
            TickOutcome::Game(log) => {
                for notice in &log.notices {
                    print_notice(log.season, log.game, notice);
                }
                if cli.verbose_games {
                    println!(
                        "  S{} G{:>2}: {} pts, {} reb, {} ast",
                        log.season, log.game, log.points, log.rebounds, log.assists
                    );
                }
            }
            TickOutcome::SeasonEnd(season) => {
                println!(
                    "Season {:>2}: {:>4.1} ppg, {:>4.1} rpg, {:>4.1} apg over {} games",
                    season.season, season.ppg, season.rpg, season.apg, season.games_played
                );
            }
            TickOutcome::SeasonStart { .. } => {}
            TickOutcome::CareerEnd | TickOutcome::Noop => break,
        }
    }

    print_summary(&summary);
    Ok(())
}

fn print_notice(season: u32, game: u32, notice: &EventNotice) {
    match notice {
        EventNotice::Triggered { title, duration } => {
            println!("  📰 S{} G{}: {} ({} games)", season, game, title, duration);
        }
        EventNotice::Expired { title } => {
            println!("  ⏳ S{} G{}: {} has run its course", season, game, title);
        }
    }
}

fn print_summary(summary: &CareerSummary) {
    println!("\n=== Career Summary ===");
    println!(
        "   {} seasons, {} games, peak {:.1} ppg in year {}",
        summary.years_played, summary.total_games, summary.peak_ppg, summary.peak_year
    );
    println!(
        "   Career line: {:.1} / {:.1} / {:.1}",
        summary.career_ppg, summary.career_rpg, summary.career_apg
    );
    println!(
        "   Totals: {:.0} points, {:.0} rebounds, {:.0} assists",
        summary.total_points, summary.total_rebounds, summary.total_assists
    );
    for (tier, count) in &summary.tier_counts {
        println!("   {:>2} season(s) as {}", count, tier.label());
    }

    let verdict = if summary.peak_ppg >= 25.0 {
        "A generational star! 🌟"
    } else if summary.peak_ppg >= 20.0 {
        "An All-Star calibre career."
    } else if summary.peak_ppg >= 15.0 {
        "A solid starter's career."
    } else if summary.tier_counts.contains_key(&Tier::ElitePlayer) {
        "Flashes of brilliance."
    } else {
        "A respected role player."
    };
    println!("\n   {}", verdict);
}
