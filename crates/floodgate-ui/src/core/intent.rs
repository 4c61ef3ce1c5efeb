//! Modal intents handed to the UI store.

/// Tabs of the add-torrents dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddTorrentsTab {
    /// Add by magnet link or URL.
    ByUrl,
}

/// One pre-filled row of the add-by-url dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddByUrlRequest {
    /// Row index inside the dialog.
    pub id: u32,
    /// Magnet link or URL shown in the row.
    pub value: String,
}

/// Command asking the UI store to open a modal dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalIntent {
    /// Open the add-torrents dialog.
    AddTorrents {
        /// Tab to activate.
        tab: AddTorrentsTab,
        /// Rows to pre-fill.
        urls: Vec<AddByUrlRequest>,
    },
}

impl ModalIntent {
    /// Open the add-by-url tab pre-filled with a single row.
    #[must_use]
    pub fn add_by_url(value: impl Into<String>) -> Self {
        Self::AddTorrents {
            tab: AddTorrentsTab::ByUrl,
            urls: vec![AddByUrlRequest {
                id: 0,
                value: value.into(),
            }],
        }
    }

    /// Pre-filled rows carried by the intent.
    #[must_use]
    pub fn urls(&self) -> &[AddByUrlRequest] {
        match self {
            Self::AddTorrents { urls, .. } => urls,
        }
    }

    /// Editable row values for the dialog; always at least one row.
    #[must_use]
    pub fn row_values(&self) -> Vec<String> {
        let mut rows = self
            .urls()
            .iter()
            .map(|request| request.value.clone())
            .collect::<Vec<_>>();
        if rows.is_empty() {
            rows.push(String::new());
        }
        rows
    }
}

/// URLs to submit from the dialog rows: trimmed, blanks dropped.
#[must_use]
pub fn submitted_urls(rows: &[String]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| {
            let trimmed = row.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{AddByUrlRequest, AddTorrentsTab, ModalIntent, submitted_urls};

    #[test]
    fn add_by_url_builds_single_row_with_zero_id() {
        let intent = ModalIntent::add_by_url("magnet:?xt=urn:btih:abc");
        assert_eq!(
            intent,
            ModalIntent::AddTorrents {
                tab: AddTorrentsTab::ByUrl,
                urls: vec![AddByUrlRequest {
                    id: 0,
                    value: "magnet:?xt=urn:btih:abc".to_string(),
                }],
            }
        );
        assert_eq!(intent.urls().len(), 1);
    }

    #[test]
    fn row_values_never_empty() {
        let empty = ModalIntent::AddTorrents {
            tab: AddTorrentsTab::ByUrl,
            urls: Vec::new(),
        };
        assert_eq!(empty.row_values(), vec![String::new()]);
        assert_eq!(
            ModalIntent::add_by_url("http://x").row_values(),
            vec!["http://x".to_string()]
        );
    }

    #[test]
    fn submitted_urls_trims_and_drops_blanks() {
        let rows = vec![
            " magnet:?xt=urn:btih:a ".to_string(),
            "   ".to_string(),
            "https://example.com/b.torrent".to_string(),
        ];
        assert_eq!(
            submitted_urls(&rows),
            vec![
                "magnet:?xt=urn:btih:a".to_string(),
                "https://example.com/b.torrent".to_string(),
            ]
        );
    }
}
