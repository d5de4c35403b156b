//! rom-prune CLI
//!
//! Prunes an archived ROM collection down to one canonical dump per game.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_prune_core::{GoodTools, NamingConvention, NoIntro};
use rom_prune_lib::repack::{RepackPlan, execute_repack, plan_repack};
use rom_prune_lib::scanner::scan_collection;
use rom_prune_lib::settings;

#[derive(Parser)]
#[command(name = "rom-prune")]
#[command(
    about = "Keep the best dump of each game from an archived ROM collection",
    long_about = None
)]
struct Cli {
    /// Directory of source containers, relative to the collection root
    #[arg(long = "src_dir")]
    src_dir: PathBuf,

    /// Directory for pruned containers, relative to the collection root
    #[arg(long = "dest_dir")]
    dest_dir: PathBuf,

    /// Show what would be repackaged without writing anything
    #[arg(short = 'n', long = "dry_run")]
    dry_run: bool,

    /// Print the full ranking for every game before repackaging
    #[arg(long)]
    debug: bool,

    /// Internet Archive collection: No-Intro names in standalone zip files
    #[arg(long)]
    ia: bool,

    /// Collection root (defaults to settings.toml, then the current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let convention: &dyn NamingConvention = if cli.ia { &NoIntro } else { &GoodTools };
    let root = settings::resolve_collection_root(cli.root);
    let src_dir = root.join(&cli.src_dir);
    let dest_dir = root.join(&cli.dest_dir);

    println!(
        "Pruning {} collection in: {}",
        convention.name(),
        src_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if cli.dry_run {
        println!(
            "{}",
            "Dry run: no containers will be written".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    let outcome = match scan_collection(&src_dir, convention, &|container| {
        println!("Inspecting {}", container.display());
    }) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!(
                "{} Error reading directory: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return ExitCode::FAILURE;
        }
    };
    for warning in &outcome.warnings {
        eprintln!(
            "  {} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            warning,
        );
    }

    let plan = plan_repack(outcome.groups, convention, &dest_dir);
    if cli.debug {
        print_rankings(&plan);
    }

    println!();
    let summary = execute_repack(&plan, convention, cli.dry_run, &|destination| {
        println!("Creating {}", destination.display());
    });

    println!();
    println!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()),);
    println!(
        "  {} {} containers scanned, {} games kept",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        outcome.containers_scanned,
        plan.actions.len(),
    );
    if summary.created > 0 {
        let verb = if cli.dry_run { "to create" } else { "created" };
        println!(
            "  {} {} containers {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.created,
            verb,
        );
    }
    if summary.skipped_existing > 0 {
        println!(
            "  {} {} already present",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.skipped_existing,
        );
    }
    for error in &summary.errors {
        println!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            error,
        );
    }

    ExitCode::SUCCESS
}

/// One block per game: every eligible dump with its score, best first.
fn print_rankings(plan: &RepackPlan) {
    for action in &plan.actions {
        println!();
        println!(
            "{}",
            action.group_key.if_supports_color(Stdout, |t| t.bold()),
        );
        for ranked in &action.ranking {
            println!(
                "  {} {}",
                format!("{:>8.1}", ranked.score).if_supports_color(Stdout, |t| t.dimmed()),
                ranked.entry_name,
            );
        }
    }
}
