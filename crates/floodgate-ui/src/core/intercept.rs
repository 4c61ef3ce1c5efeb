//! Decisions for the global paste and drag-and-drop interceptors.
//!
//! # Design
//! - The DOM layer extracts plain values (target kind, payload strings, advertised
//!   types) and asks these functions what to do.
//! - [`Interception::Capture`] means "prevent default and dispatch the intent";
//!   [`Interception::Ignore`] leaves the browser's default handling alone.
//! - Paste respects editable targets; drop is intercepted regardless of target.

use crate::core::intent::ModalIntent;
use crate::core::reference::TorrentReference;

/// Plain-text media type.
pub const TEXT_PLAIN: &str = "text/plain";
/// URI-list media type.
pub const TEXT_URI_LIST: &str = "text/uri-list";
/// Drop effect advertised while dragging a reference over the page.
pub const DROP_EFFECT_COPY: &str = "copy";

/// Kind of element that received a paste event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasteTarget {
    /// `<input>` element.
    TextInput,
    /// `<textarea>` element.
    TextArea,
    /// Element with directly editable content.
    ContentEditable,
    /// Anything else (body, buttons, static content).
    Other,
}

impl PasteTarget {
    /// Whether the browser's native paste should be left alone.
    #[must_use]
    pub const fn accepts_text(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Outcome of inspecting a paste or drop event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interception {
    /// Leave the event untouched.
    Ignore,
    /// Prevent default handling and dispatch the intent.
    Capture(ModalIntent),
}

impl Interception {
    fn from_text(text: &str) -> Self {
        TorrentReference::detect(text).map_or(Self::Ignore, |reference| {
            Self::Capture(ModalIntent::add_by_url(reference.into_inner()))
        })
    }
}

/// Outcome of inspecting a drag-over event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOverOutcome {
    /// Prevent default to allow the drop and show a copy cursor.
    AllowCopy,
    /// Leave the default (drop disallowed).
    Default,
}

/// Decide how to handle a paste event.
#[must_use]
pub fn paste_outcome(target: PasteTarget, text: Option<&str>) -> Interception {
    if target.accepts_text() {
        return Interception::Ignore;
    }
    text.map_or(Interception::Ignore, Interception::from_text)
}

/// Decide whether a drag-over should allow a drop, based on the advertised media types.
#[must_use]
pub fn drag_over_outcome<I, S>(types: I) -> DragOverOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let droppable = types
        .into_iter()
        .any(|kind| matches!(kind.as_ref(), TEXT_PLAIN | TEXT_URI_LIST));
    if droppable {
        DragOverOutcome::AllowCopy
    } else {
        DragOverOutcome::Default
    }
}

/// Decide how to handle a drop, preferring plain text over the URI list.
///
/// Empty payloads count as absent.
#[must_use]
pub fn drop_outcome(plain: Option<&str>, uri_list: Option<&str>) -> Interception {
    let text = plain
        .filter(|value| !value.is_empty())
        .or_else(|| uri_list.filter(|value| !value.is_empty()));
    text.map_or(Interception::Ignore, Interception::from_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intent::AddByUrlRequest;

    fn captured_urls(outcome: &Interception) -> Vec<AddByUrlRequest> {
        match outcome {
            Interception::Capture(intent) => intent.urls().to_vec(),
            Interception::Ignore => Vec::new(),
        }
    }

    #[test]
    fn paste_outside_inputs_captures_trimmed_magnet() {
        let outcome = paste_outcome(PasteTarget::Other, Some("  magnet:?xt=urn:btih:abc123  "));
        assert_eq!(
            captured_urls(&outcome),
            vec![AddByUrlRequest {
                id: 0,
                value: "magnet:?xt=urn:btih:abc123".to_string(),
            }]
        );
    }

    #[test]
    fn paste_into_editable_targets_is_ignored() {
        for target in [
            PasteTarget::TextInput,
            PasteTarget::TextArea,
            PasteTarget::ContentEditable,
        ] {
            assert_eq!(
                paste_outcome(target, Some("  magnet:?xt=urn:btih:abc123  ")),
                Interception::Ignore
            );
        }
    }

    #[test]
    fn paste_without_reference_is_ignored() {
        assert_eq!(paste_outcome(PasteTarget::Other, None), Interception::Ignore);
        assert_eq!(
            paste_outcome(PasteTarget::Other, Some("hello world")),
            Interception::Ignore
        );
        assert_eq!(paste_outcome(PasteTarget::Other, Some("")), Interception::Ignore);
    }

    #[test]
    fn drag_over_allows_text_payloads_only() {
        assert_eq!(drag_over_outcome(["Files", TEXT_PLAIN]), DragOverOutcome::AllowCopy);
        assert_eq!(drag_over_outcome([TEXT_URI_LIST]), DragOverOutcome::AllowCopy);
        assert_eq!(drag_over_outcome(["Files"]), DragOverOutcome::Default);
        assert_eq!(drag_over_outcome(Vec::<String>::new()), DragOverOutcome::Default);
    }

    #[test]
    fn drop_falls_back_to_uri_list() {
        let outcome = drop_outcome(None, Some("https://example.com/a.torrent"));
        assert_eq!(
            captured_urls(&outcome),
            vec![AddByUrlRequest {
                id: 0,
                value: "https://example.com/a.torrent".to_string(),
            }]
        );
        let empty_plain = drop_outcome(Some(""), Some("http://x/b.torrent"));
        assert_eq!(captured_urls(&empty_plain).len(), 1);
    }

    #[test]
    fn drop_prefers_plain_text() {
        let outcome = drop_outcome(Some(" magnet:?xt=urn:btih:ff "), Some("https://other"));
        assert_eq!(
            captured_urls(&outcome)[0].value,
            "magnet:?xt=urn:btih:ff".to_string()
        );
        assert_eq!(
            drop_outcome(Some("hello world"), Some("https://other")),
            Interception::Ignore
        );
    }

    #[test]
    fn drop_of_plain_words_is_not_captured() {
        assert_eq!(drop_outcome(Some("hello world"), None), Interception::Ignore);
        assert_eq!(drop_outcome(None, None), Interception::Ignore);
    }
}
