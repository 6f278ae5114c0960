// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::file;
use crate::params::{DEFAULT_SNAPSHOT_FILE, Params};
use crate::runner::{self, Progress, RunOutcome};
use crate::stats::{eras, head_to_head};

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut sink = ConsoleProgress { quiet: params.quiet };
    let outcome = runner::run(&params, Some(&mut sink))?;

    if !params.quiet {
        print_summary(&outcome);
    }
    Ok(())
}

struct ConsoleProgress {
    quiet: bool,
}

impl Progress for ConsoleProgress {
    fn update_status(&mut self, msg: &str) {
        if !self.quiet {
            println!("{msg}...");
        }
    }
    fn log(&mut self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                params.input = PathBuf::from(v);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.out = file::resolve_out_path(&v, DEFAULT_SNAPSHOT_FILE)?;
            }
            "--compact" => params.compact = true,
            "-q" | "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn print_summary(outcome: &RunOutcome) {
    let snap = &outcome.snapshot;

    println!();
    println!("Wrote {}", outcome.snapshot_path.display());
    println!("  Seasons:  {} ({})", snap.metadata.total_seasons, snap.metadata.year_range);
    println!("  Managers: {}", snap.manager_stats.len());

    let mut by_titles: Vec<_> = snap
        .manager_stats
        .iter()
        .filter(|m| m.championships > 0)
        .collect();
    by_titles.sort_by(|a, b| {
        b.championships.cmp(&a.championships).then(a.manager.cmp(&b.manager))
    });
    if !by_titles.is_empty() {
        println!("  Top champions:");
        for m in by_titles.iter().take(3) {
            println!("    {}: {} championship(s)", m.manager, m.championships);
        }
    }

    for era in eras::era_summaries(&snap.seasons) {
        if let Some(dominant) = &era.dominant_manager {
            println!(
                "  {}: {} seasons, led by {} ({} title(s))",
                era.name, era.seasons, dominant, era.championships
            );
        }
    }

    let records = head_to_head::tally(&snap.seasons, head_to_head::TallyOptions::default());
    let top = records
        .values()
        .filter(|r| r.playoff_meetings > 0)
        .max_by_key(|r| r.playoff_meetings);
    if let Some(top) = top {
        println!(
            "  Top playoff rivalry: {} vs {} ({} meetings, {}-{})",
            top.manager1, top.manager2, top.playoff_meetings, top.manager1_wins, top.manager2_wins
        );
    }
}
