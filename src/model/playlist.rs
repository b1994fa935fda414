/// Whether a playlist was made by the user or subscribed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    /// Self-created playlist
    Created,

    /// Playlist owned by someone else that the user subscribed to
    Subscribed,
}

impl PlaylistKind {
    pub fn from_subscribed(subscribed: bool) -> Self {
        if subscribed {
            PlaylistKind::Subscribed
        } else {
            PlaylistKind::Created
        }
    }

    /// Label used in the type column and as the file name prefix
    pub fn label(&self) -> &'static str {
        match self {
            PlaylistKind::Created => "我创建的",
            PlaylistKind::Subscribed => "我收藏的",
        }
    }
}

/// A playlist read from the client database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist ID (`pid`)
    pub id: i64,

    /// Display name
    pub name: String,

    pub kind: PlaylistKind,
}

impl Playlist {
    /// Name used when the stored record has none
    pub fn fallback_name(id: i64) -> String {
        format!("Unknown_Playlist_{}", id)
    }

    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(PlaylistKind::from_subscribed(true).label(), "我收藏的");
        assert_eq!(PlaylistKind::from_subscribed(false).label(), "我创建的");
    }

    #[test]
    fn test_fallback_name() {
        assert_eq!(Playlist::fallback_name(42), "Unknown_Playlist_42");
    }
}
