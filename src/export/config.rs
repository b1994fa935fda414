//! Export configuration

use std::path::PathBuf;

/// Database location inside the user's home directory
pub const DEFAULT_DATABASE: &str = "~/AppData/Local/NetEase/CloudMusic/Library/webdb.dat";

/// Output folder, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "exported_playlists";

/// File name of the aggregate export
pub const SUMMARY_FILE_NAME: &str = "所有歌单汇总.csv";

/// Configuration for the export process
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path to the client's `webdb.dat`
    pub database_path: PathBuf,

    /// Directory receiving the CSV files
    pub output_dir: PathBuf,

    /// File name of the aggregate CSV inside `output_dir`
    pub summary_file_name: String,
}

impl ExportConfig {
    /// Fixed locations: the client database under the home directory and
    /// `exported_playlists/` in the working directory
    pub fn default_paths() -> Self {
        let database = shellexpand::tilde(DEFAULT_DATABASE);

        Self {
            database_path: PathBuf::from(database.as_ref()),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            summary_file_name: SUMMARY_FILE_NAME.to_string(),
        }
    }

    /// Read from a different database file
    pub fn with_database(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }

    /// Write into a different directory
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::default_paths()
    }
}
