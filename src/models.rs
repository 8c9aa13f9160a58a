//! Core data model for the retitling pipeline.

use rusqlite::Row;

/// Candidate episode row from the Plex library database.
///
/// `new_title` starts empty and is filled in by the extractor; an empty
/// value after extraction means the file name did not match the naming
/// convention.
#[derive(Clone, Debug)]
pub struct Episode {
    pub id: i64,
    pub file: String,
    pub new_title: String,
    pub old_title: String,
    pub old_title_sort: String,
    pub index: Option<i64>,
}

impl Episode {
    /// Build an episode from a query row laid out as
    /// (id, file, title, title_sort, "index").
    ///
    /// NULL title columns coalesce to the empty string, so a NULL title
    /// counts as missing for the update filter.
    pub fn from_row(row: &Row) -> rusqlite::Result<Episode> {
        Ok(Episode {
            id: row.get(0)?,
            file: row.get(1)?,
            new_title: String::new(),
            old_title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            old_title_sort: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            index: row.get(4)?,
        })
    }

    /// Shared filter for the emitter and the reporter: only episodes
    /// missing a title are considered, unless force mode is on.
    pub fn needs_update(&self, force: bool) -> bool {
        self.old_title.is_empty() || force
    }
}
