use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use plex_retitle::emit;
use plex_retitle::extract;
use plex_retitle::normalize::normalize_path;
use plex_retitle::repo;

#[derive(Parser)]
#[command(name = "plex-retitle")]
#[command(about = "Derive episode titles from file names and emit SQL updates for a Plex library")]
struct Args {
    /// Plex library database file
    database: PathBuf,

    /// Path prefix of the episodes to retitle, e.g. /media/Series/BluRay/Star_Trek
    path_prefix: String,

    /// Include episodes which already have a title
    #[arg(long)]
    force: bool,

    /// Print current titles alongside proposed ones before the SQL
    #[arg(long)]
    show_current: bool,

    /// Ignore text between parenthesis when proposing a title
    #[arg(long)]
    ignore_parenthesis_content: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let prefix = normalize_path(&args.path_prefix);

    let conn = repo::open_library(&args.database)?;
    let mut episodes = repo::find_episodes(&conn, &prefix)?;

    extract::extract_titles(&mut episodes, args.ignore_parenthesis_content);

    if args.show_current {
        emit::show_current(&episodes, args.force);
    }
    let summary = emit::emit_update_sql(&episodes, args.force);

    eprintln!("{:=<60}", "");
    eprintln!("Matched {} episodes under {}", episodes.len(), prefix);
    eprintln!("  UPDATE statements: {}", summary.statements);
    eprintln!("  Extraction failures: {}", summary.failures);
    eprintln!("  Skipped (already titled): {}", summary.skipped);
    eprintln!("{:=<60}", "");

    Ok(())
}
