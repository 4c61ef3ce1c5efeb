//! Torrent reference detection for pasted and dropped text.
//!
//! # Design
//! - Classification is a case-sensitive prefix test on the trimmed text.
//! - No URL parsing or magnet validation happens here; the add dialog and the
//!   backend own final validation.

/// Prefixes that mark text as a torrent reference.
pub const REFERENCE_PREFIXES: [&str; 3] = ["magnet:", "http://", "https://"];

/// Whether `text` identifies a torrent (magnet link or HTTP(S) URL).
#[must_use]
pub fn is_torrent_reference(text: &str) -> bool {
    let trimmed = text.trim();
    REFERENCE_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Trimmed text that passed [`is_torrent_reference`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TorrentReference(String);

impl TorrentReference {
    /// Classify `text`, keeping the trimmed value on a match.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        is_torrent_reference(text).then(|| Self(text.trim().to_string()))
    }

    /// Borrow the trimmed reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the trimmed reference.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}
