//! Title extraction from episode file names.
//!
//! Files are expected to be named `<series> - s01e01 - <episode title>.mkv`;
//! the proposed title is everything after the season/episode marker, cleaned
//! up for human consumption.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Episode;

// ============================================================================
// REGEX PATTERNS
// ============================================================================

/// Season/episode marker: "s01e01" (any case, any digit count) followed by
/// the " - " separator. The final `.` consumes the one character between the
/// hyphen and the title, so the title itself starts right after the match.
static EPISODE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?[sS]\d+[eE]\d+ -.").unwrap());

/// One parenthetical span, up to the next closing parenthesis.
static PAREN_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Trailing .mkv extension (the only container this tool handles).
static MKV_EXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.mkv$").unwrap());

/// Runs of spaces and underscores, collapsed to a single space.
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ _]+").unwrap());

// ============================================================================
// EXTRACTION
// ============================================================================

/// Derive a proposed episode title from a stored file path.
///
/// Returns the empty string when the path carries no season/episode marker;
/// the emitter reports those as extraction failures.
pub fn propose_title(file: &str, ignore_parenthesis_content: bool) -> String {
    let marker = match EPISODE_MARKER.find(file) {
        Some(m) => m,
        None => return String::new(),
    };

    let mut title = file[marker.end()..].trim().to_string();
    if ignore_parenthesis_content {
        title = PAREN_SPAN.replace_all(&title, " ").trim().to_string();
    }
    title = MKV_EXT.replace(&title, "").to_string();
    SPACE_RUNS.replace_all(&title, " ").trim().to_string()
}

/// Fill in the proposed title for every candidate episode.
pub fn extract_titles(episodes: &mut [Episode], ignore_parenthesis_content: bool) {
    for ep in episodes.iter_mut() {
        ep.new_title = propose_title(&ep.file, ignore_parenthesis_content);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const STAR_TREK: &str = "/media/Series/BluRay/Star_Trek_The_Original_Series (1966-1969) {imdb-tt0060028}/Season 01/Star_Trek_The_Original_Series (1966) - s01e01 - Man_Trap_The (1966-09-08).mkv";

    #[test]
    fn test_title_from_full_path() {
        assert_eq!(propose_title(STAR_TREK, false), "Man Trap The (1966-09-08)");
    }

    #[test]
    fn test_parenthesis_content_stripped() {
        assert_eq!(propose_title(STAR_TREK, true), "Man Trap The");
    }

    #[test]
    fn test_multiple_parenthetical_spans() {
        assert_eq!(
            propose_title("show - s01e01 - Man Trap (The) (1966-09-08).mkv", true),
            "Man Trap"
        );
    }

    #[test]
    fn test_underscores_and_space_runs_collapse() {
        assert_eq!(
            propose_title("show - s02e10 - The__Quiet_ _Earth.mkv", false),
            "The Quiet Earth"
        );
    }

    #[test]
    fn test_uppercase_marker() {
        assert_eq!(propose_title("show - S01E05 - Charlie X.mkv", false), "Charlie X");
    }

    #[test]
    fn test_mkv_extension_stripped() {
        assert_eq!(propose_title("show - s01e01 - Pilot.mkv", false), "Pilot");
        // Only a trailing extension is removed
        assert_eq!(
            propose_title("show - s01e01 - The.mkv Story", false),
            "The.mkv Story"
        );
    }

    #[test]
    fn test_no_marker_yields_empty() {
        assert_eq!(propose_title("Random_Clip.mkv", false), "");
        assert_eq!(propose_title("/media/Extras/Behind the Scenes.mkv", true), "");
    }

    #[test]
    fn test_extract_titles_mutates_all() {
        let mut episodes = vec![
            Episode {
                id: 1,
                file: "show - s01e01 - Pilot.mkv".to_string(),
                new_title: String::new(),
                old_title: String::new(),
                old_title_sort: String::new(),
                index: Some(1),
            },
            Episode {
                id: 2,
                file: "Random_Clip.mkv".to_string(),
                new_title: String::new(),
                old_title: String::new(),
                old_title_sort: String::new(),
                index: None,
            },
        ];
        extract_titles(&mut episodes, false);
        assert_eq!(episodes[0].new_title, "Pilot");
        assert_eq!(episodes[1].new_title, "");
    }
}
