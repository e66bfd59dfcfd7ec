//! Text cleaning helpers

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip diacritics: decompose to NFD and drop the combining marks
///
/// `"São Paulo"` becomes `"Sao Paulo"`, `"Criança"` becomes `"Crianca"`.
#[must_use]
pub fn fold_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Trimmed value, or `None` when absent or blank
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
