//! SQL emission and diagnostic reporting.
//!
//! The UPDATE statements go to stdout for human review; nothing here touches
//! the database.

use crate::models::Episode;

/// Emission counts for the end-of-run summary.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub statements: usize,
    pub failures: usize,
    pub skipped: usize,
}

/// Escape a value for embedding in a single-quoted SQL literal.
/// File names legitimately contain apostrophes.
pub fn sql_quote(text: &str) -> String {
    text.replace('\'', "''")
}

/// The UPDATE statement applying an episode's proposed title.
pub fn update_statement(ep: &Episode) -> String {
    format!(
        "UPDATE metadata_items SET title = '{}' WHERE id = {};",
        sql_quote(&ep.new_title),
        ep.id
    )
}

/// Error line for a file the extractor could not match.
pub fn error_line(ep: &Episode) -> String {
    format!("ERROR finding episode in [{}]", ep.file)
}

/// Diagnostic line for the --show-current listing. A null episode index
/// renders as empty brackets.
pub fn current_line(ep: &Episode) -> String {
    let index = ep.index.map(|i| i.to_string()).unwrap_or_default();
    format!(
        "id=[{}] index=[{}] new_title=[{}] old_title=[{}] old_title_sort=[{}] file=[{}]",
        ep.id, index, ep.new_title, ep.old_title, ep.old_title_sort, ep.file
    )
}

/// Print one UPDATE statement, or one error line for a failed extraction,
/// per episode passing the update filter. Already-titled episodes are
/// silently skipped unless force is on.
pub fn emit_update_sql(episodes: &[Episode], force: bool) -> EmitSummary {
    let mut summary = EmitSummary::default();
    for ep in episodes {
        if !ep.needs_update(force) {
            summary.skipped += 1;
            continue;
        }
        if ep.new_title.is_empty() {
            println!("{}", error_line(ep));
            summary.failures += 1;
        } else {
            println!("{}", update_statement(ep));
            summary.statements += 1;
        }
    }
    summary
}

/// Print the current state of every episode passing the update filter.
pub fn show_current(episodes: &[Episode], force: bool) {
    for ep in episodes {
        if ep.needs_update(force) {
            println!("{}", current_line(ep));
        }
    }
}
