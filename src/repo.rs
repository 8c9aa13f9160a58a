//! Read-only access to the Plex library database.
//!
//! Candidate episodes are found by a prefix match on `media_parts.file`,
//! joined through `media_items` to the `metadata_items` row that owns the
//! title. The match is a plain string prefix, not path-segment-aware:
//! `/media/Series` also matches `/media/Series2`. Known limitation.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

use crate::models::Episode;

const COUNT_QUERY: &str = "SELECT COUNT(*)
   FROM media_parts mp
   JOIN media_items mi ON mp.media_item_id = mi.id
   JOIN metadata_items md ON mi.metadata_item_id = md.id
  WHERE mp.file LIKE ?1 ESCAPE '\\'";

const EPISODE_QUERY: &str = "SELECT md.id, mp.file, md.title, md.title_sort, md.\"index\"
   FROM media_parts mp
   JOIN media_items mi ON mp.media_item_id = mi.id
   JOIN metadata_items md ON mi.metadata_item_id = md.id
  WHERE mp.file LIKE ?1 ESCAPE '\\'";

/// Open the library database read-only.
///
/// The tool only ever emits SQL text, never executes it. A missing or
/// unreadable database file fails here, before any query runs.
pub fn open_library(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to open library database {}", path.display()))
}

/// Escape LIKE metacharacters so the prefix always matches literally.
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn scan_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Scanning library [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb
}

/// All episodes whose stored file path starts with the given prefix.
pub fn find_episodes(conn: &Connection, prefix: &str) -> Result<Vec<Episode>> {
    let pattern = format!("{}%", escape_like(prefix));

    let count: i64 = conn
        .query_row(COUNT_QUERY, params![pattern], |row| row.get(0))
        .context("failed to count matching episodes")?;

    let pb = scan_progress(count as u64);
    let mut stmt = conn.prepare(EPISODE_QUERY)?;
    let mut rows = stmt.query(params![pattern])?;

    let mut episodes = Vec::with_capacity(count as usize);
    while let Some(row) = rows.next()? {
        episodes.push(Episode::from_row(row)?);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(episodes)
}
