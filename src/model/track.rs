/// A single song's metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track ID (`tid`)
    pub id: i64,

    /// Track title
    pub title: String,

    /// Artist names, in stored order
    pub artists: Vec<String>,

    /// Album name, if the record carries one
    pub album: Option<String>,
}

impl Track {
    /// Artist names as shown in the artist column
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}
