//! Query-string import of add-by-url requests.
//!
//! Shared links of the form `?action=add-urls&url=<encoded>` open the add dialog
//! directly. The `url` value is passed through as decoded, without trimming or
//! reference detection.

use crate::core::intent::ModalIntent;
use std::borrow::Cow;

/// `action` value that requests the add-by-url dialog.
pub const ADD_URLS_ACTION: &str = "add-urls";

/// Look up the first value of `key` in a query string, with or without the leading `?`.
///
/// Decoding matches `URLSearchParams`: `+` becomes a space and percent escapes
/// decode as UTF-8, replacing invalid sequences.
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(raw_key) == key).then(|| decode_component(raw_value))
        })
}

/// Build the add-by-url intent requested by the query string, if any.
#[must_use]
pub fn add_urls_intent(query: &str) -> Option<ModalIntent> {
    if query_param(query, "action").as_deref() != Some(ADD_URLS_ACTION) {
        return None;
    }
    query_param(query, "url").map(ModalIntent::add_by_url)
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{add_urls_intent, query_param};
    use crate::core::intent::ModalIntent;

    #[test]
    fn decodes_url_parameter() {
        assert_eq!(
            add_urls_intent("?action=add-urls&url=http%3A%2F%2Fx"),
            Some(ModalIntent::add_by_url("http://x"))
        );
    }

    #[test]
    fn passes_value_through_without_detection() {
        assert_eq!(
            add_urls_intent("action=add-urls&url=ftp%3A%2F%2Fnot-a-torrent"),
            Some(ModalIntent::add_by_url("ftp://not-a-torrent"))
        );
        assert_eq!(
            add_urls_intent("?url=%20%20magnet%3A%3Fxt&action=add-urls"),
            Some(ModalIntent::add_by_url("  magnet:?xt"))
        );
    }

    #[test]
    fn requires_matching_action_and_url() {
        assert_eq!(add_urls_intent("?action=add-files&url=http%3A%2F%2Fx"), None);
        assert_eq!(add_urls_intent("?action=add-urls"), None);
        assert_eq!(add_urls_intent("?url=http%3A%2F%2Fx"), None);
        assert_eq!(add_urls_intent(""), None);
    }

    #[test]
    fn empty_url_value_still_counts_as_present() {
        assert_eq!(
            add_urls_intent("?action=add-urls&url="),
            Some(ModalIntent::add_by_url(""))
        );
    }

    #[test]
    fn query_param_uses_first_occurrence_and_plus_as_space() {
        assert_eq!(query_param("?a=1&a=2", "a").as_deref(), Some("1"));
        assert_eq!(query_param("q=hello+world", "q").as_deref(), Some("hello world"));
        assert_eq!(query_param("flag&x=1", "flag").as_deref(), Some(""));
        assert_eq!(query_param("x=1", "y"), None);
    }
}
