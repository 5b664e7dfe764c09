//! Reading patterns from, and writing them to, a page URL.

use url::Url;

use crate::{compact, legacy, Pattern};

/// Query parameter carrying the compact share string.
pub const QUERY_PARAM: &str = "p";

/// Where a loaded pattern list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// The compact query parameter.
    Query,
    /// The legacy base64 fragment.
    Fragment,
    /// Nothing usable; the fallback list.
    Fallback,
}

/// Load the pattern list from a URL, preferring the query parameter named
/// `param`, then a legacy fragment. Empty values count as absent.
pub fn load_from_url(url: &Url, param: &str) -> (Vec<Pattern>, Source) {
    let encoded = url
        .query_pairs()
        .find(|(key, value)| key == param && !value.is_empty());
    if let Some((_, encoded)) = encoded {
        return (compact::decode(&encoded), Source::Query);
    }

    match url.fragment() {
        Some(fragment) if !fragment.is_empty() => {
            (legacy::load_legacy(fragment), Source::Fragment)
        }
        _ => (vec![Pattern::fallback()], Source::Fallback),
    }
}

/// Like [`load_from_url`] for a URL given as text. Text that isn't a URL
/// yields the fallback list.
pub fn load_from_str(url: &str, param: &str) -> (Vec<Pattern>, Source) {
    match Url::parse(url) {
        Ok(url) => load_from_url(&url, param),
        Err(err) => {
            tracing::warn!(url, error = %err, "not a URL, using the default pattern");
            (vec![Pattern::fallback()], Source::Fallback)
        }
    }
}

/// `base` with its `param` query parameter set to the encoded `patterns`.
/// Other query parameters are preserved; a legacy fragment is dropped.
pub fn share_url(base: &Url, param: &str, patterns: &[Pattern]) -> Url {
    let mut url = base.clone();
    let others: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(others)
        .append_pair(param, &compact::encode(patterns));
    url.set_fragment(None);
    url
}
