//! Shared query infrastructure: the [`Query`] trait and the parameter formatting helpers.

use url::Url;

/// Separator used by the API for multi-valued parameters (`departmentIds=1|6`).
pub const LIST_SEPARATOR: &str = "|";

/// Date form accepted by the `metadataDate` parameter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trait implemented by every options type that contributes query parameters.
pub trait Query {
    /// Returns the parameters in emission order, before percent-encoding.
    fn to_query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// A query without parameters leaves the URL untouched (no trailing `?`).
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_query_pairs();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in pairs.iter() {
                serializer.append_pair(key, value);
            }
        }
        url
    }
}

/// Pushes `key=value` when the value is present. Booleans render as
/// `true`/`false`, integers in decimal.
pub(crate) fn push_optional<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

/// Pushes the list joined by [`LIST_SEPARATOR`]. An empty list is treated as absent.
pub(crate) fn push_list<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    values: &[T],
) {
    if values.is_empty() {
        return;
    }
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);
    pairs.push((key, joined));
}
