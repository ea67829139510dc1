//! Enejistats CLI
//!
//! Drives the client core from the terminal: a scripted live stat-entry
//! session, leaderboard pages from the sample dataset, and reference
//! catalog dumps.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use es_core::data::{get_club_catalog, get_countries, get_position_catalog, get_scout_fixtures};
use es_core::leaderboard::{sample_entries, Leaderboard};
use es_core::models::MatchSetup;
use es_core::roster;
use es_core::ScoutSession;

#[derive(Parser)]
#[command(name = "es_cli")]
#[command(about = "Drive the Enejistats client core from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted live stat-entry session and print the payload
    Session {
        /// Roster search term for the tracked player
        #[arg(long, default_value = "doe")]
        player: String,
    },

    /// Print a page of the sample leaderboard
    Leaderboard {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Filter by name or position
        #[arg(long)]
        filter: Option<String>,

        /// Sample dataset seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Dump a reference catalog
    Catalog {
        /// countries | positions | clubs | fixtures
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Session { player } => run_session(&player),
        Commands::Leaderboard { page, filter, seed } => {
            run_leaderboard(page, filter.as_deref().unwrap_or(""), seed)
        }
        Commands::Catalog { name } => dump_catalog(&name),
    }
}

fn run_session(term: &str) -> Result<()> {
    let fixtures = get_scout_fixtures();
    let hits = roster::search(&fixtures.players, term);
    let Some(player) = hits.first() else {
        bail!("no roster player matches {term:?}");
    };

    let mut session = ScoutSession::new();
    session.select_player((*player).clone());
    println!("Tracking: {}", player.summary());

    session.clock.start();
    // Scripted first quarter-hour: the driver thread is skipped so the demo
    // finishes instantly.
    for _ in 0..(14 * 60 + 30) {
        session.clock.tick();
    }

    let script: [(&str, i64); 6] = [
        ("shotsOn", 1),
        ("goals", 1),
        ("shortPassesSuccessful", 8),
        ("shortPassesUnsuccessful", 2),
        ("tackles", 1),
        ("fouls", 1),
    ];
    for (metric, delta) in script {
        session.update_metric(metric, delta);
        println!(
            "{:>5}  {:+} {:<24} rating {:.1}",
            session.clock.display(),
            delta,
            metric,
            session.live_rating()
        );
    }

    let sub_time = session.record_substitution()?;
    println!("Substituted at {sub_time} ({})", session.clock.half());

    let setup = MatchSetup {
        home_team: fixtures.teams[0].clone(),
        away_team: fixtures.teams[1].clone(),
        match_date: Some(chrono::Local::now().date_naive()),
        league: fixtures.leagues[0].clone(),
    };
    let payload = session.build_submission(&setup)?;
    println!("\nSubmission payload:");
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn run_leaderboard(page: usize, filter: &str, seed: u64) -> Result<()> {
    let mut board = Leaderboard::new(sample_entries(seed));
    board.goto_page(page);
    let view = board.visible(filter);

    println!("Week {}, page {}/{}", board.week(), view.page, view.page_count);
    for entry in &view.entries {
        println!("{:>3}  {:<12} {:<12} {:>5.1}", entry.rank, entry.name, entry.position, entry.score);
    }
    if view.entries.is_empty() {
        println!("(no entries)");
    }
    Ok(())
}

fn dump_catalog(name: &str) -> Result<()> {
    match name {
        "countries" => {
            for country in get_countries() {
                println!("{country}");
            }
        }
        "positions" => {
            let catalog = get_position_catalog();
            for (category, entries) in [
                ("goalkeeper", &catalog.goalkeeper),
                ("defender", &catalog.defender),
                ("midfielder", &catalog.midfielder),
                ("attacker", &catalog.attacker),
            ] {
                println!("[{category}]");
                for entry in entries {
                    println!("  {}", entry.text);
                }
            }
        }
        "clubs" => {
            let catalog = get_club_catalog();
            for (tier, clubs) in [
                ("npfl", &catalog.npfl),
                ("nnl1", &catalog.nnl1),
                ("nnl2", &catalog.nnl2),
                ("academy", &catalog.academy),
                ("general", &catalog.general),
            ] {
                println!("[{tier}]");
                for club in clubs {
                    println!("  {club}");
                }
            }
        }
        "fixtures" => {
            let fixtures = get_scout_fixtures();
            println!("{}", serde_json::to_string_pretty(fixtures)?);
        }
        other => bail!("unknown catalog {other:?} (expected countries|positions|clubs|fixtures)"),
    }
    Ok(())
}
