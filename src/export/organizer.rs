//! Output directory layout and file naming

use crate::model::Playlist;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Manages the export directory
pub struct OutputOrganizer {
    output_dir: PathBuf,
    summary_file_name: String,
}

impl OutputOrganizer {
    pub fn new(output_dir: PathBuf, summary_file_name: String) -> Self {
        Self {
            output_dir,
            summary_file_name,
        }
    }

    /// Create the output directory if it does not exist yet
    pub fn init(&self) -> Result<()> {
        if self.output_dir.is_dir() {
            log::debug!("Output directory already exists: {:?}", self.output_dir);
            return Ok(());
        }

        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.output_dir))?;

        log::info!("Created output directory: {:?}", self.output_dir);
        Ok(())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of a playlist's own CSV: `<type label>_<sanitized name>.csv`
    pub fn playlist_path(&self, playlist: &Playlist) -> PathBuf {
        let file_name = format!(
            "{}_{}.csv",
            playlist.type_label(),
            sanitize_file_name(&playlist.name)
        );
        self.output_dir.join(file_name)
    }

    /// Path of the aggregate CSV
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file_name)
    }
}

/// Keep letters, numbers, spaces, hyphens and underscores, then trim
pub fn sanitize_file_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|&c| is_letter_or_number(c) || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim().to_string()
}

/// Letter (L*) or number (N*) general category. Combining marks are
/// excluded even where `char::is_alphanumeric` accepts them.
fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaylistKind;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_strips_path_characters() {
        assert_eq!(sanitize_file_name("  Road Trip  "), "Road Trip");
        assert_eq!(sanitize_file_name("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
        assert_eq!(sanitize_file_name("Chill - 2024_mix!"), "Chill - 2024_mix");
        assert_eq!(sanitize_file_name("我喜欢的音乐 ♥"), "我喜欢的音乐");
        assert_eq!(sanitize_file_name("..."), "");
    }

    #[test]
    fn test_sanitized_names_use_allowed_characters_only() {
        let inputs = ["x/y", "\t tab\n", "emoji 🎵 list", "日本語-リスト_1", "a.b,c;d"];
        for input in inputs {
            let cleaned = sanitize_file_name(input);
            assert!(cleaned
                .chars()
                .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_'));
        }
    }

    #[test]
    fn test_sanitize_drops_combining_marks() {
        // Thai "สวัสดี": the vowel and tone marks are Mn
        assert_eq!(sanitize_file_name("สวัสดี"), "สวสด");
        // Devanagari "हिंदी": vowel signs and anusvara are Mn/Mc
        assert_eq!(sanitize_file_name("हिंदी"), "हद");
        assert_eq!(sanitize_file_name("e\u{301}te\u{301}"), "ete");
        assert_eq!(sanitize_file_name("Ⅻ ½ ٣"), "Ⅻ ½ ٣");
    }

    #[test]
    fn test_playlist_path() {
        let organizer = OutputOrganizer::new(PathBuf::from("out"), "all.csv".to_string());
        let playlist = Playlist {
            id: 1,
            name: "Road Trip/2".to_string(),
            kind: PlaylistKind::Subscribed,
        };

        assert_eq!(
            organizer.playlist_path(&playlist),
            PathBuf::from("out").join("我收藏的_Road Trip2.csv")
        );
        assert_eq!(organizer.summary_path(), PathBuf::from("out").join("all.csv"));
    }

    #[test]
    fn test_init_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exported");
        let organizer = OutputOrganizer::new(dir.clone(), "all.csv".to_string());

        organizer.init().unwrap();
        assert!(dir.is_dir());
        organizer.init().unwrap();
        assert!(dir.is_dir());
    }
}
