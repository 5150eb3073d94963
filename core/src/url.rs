//! URL composition helpers.
//!
//! Base addresses are never validated; a malformed base simply produces a
//! malformed URL that the transport will reject.

use crate::error::ApiError;

/// Join `base` and `path` with exactly one separating slash.
///
/// An empty `path` yields `base` without trailing slashes, so re-joining an
/// already joined address with `""` is stable.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}

/// Percent-encode a single path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// A present query-parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl QueryValue {
    fn render(&self) -> String {
        match self {
            QueryValue::Str(s) => s.clone(),
            QueryValue::Int(n) => n.to_string(),
            QueryValue::Float(n) => n.to_string(),
            QueryValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

/// Form-encode the present parameters as `?k=v&...`, in slice order.
///
/// `None` omits the parameter entirely; an empty string is still emitted.
/// Returns `""` when nothing is present.
///
/// # Errors
///
/// Returns `ApiError::QueryEncoding` if the pairs cannot be form-encoded.
/// Values are rendered to strings first, so in practice this does not fail.
pub fn format_query(params: &[(&str, Option<QueryValue>)]) -> Result<String, ApiError> {
    let pairs: Vec<(&str, String)> = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (*key, v.render())))
        .collect();
    if pairs.is_empty() {
        return Ok(String::new());
    }
    let encoded = serde_urlencoded::to_string(&pairs)?;
    Ok(format!("?{encoded}"))
}
