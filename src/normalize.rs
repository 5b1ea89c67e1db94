use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// 2(3) => 2*(3)
static BEFORE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9)]) *\(").expect("literal regex is valid"));

// (2)3 => (2)*3
static AFTER_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\) *([0-9(])").expect("literal regex is valid"));

/// Makes implicit multiplication explicit.
///
/// A digit or `)` followed by `(` gets a `*` before the `(`, and a `)` followed by a digit
/// or `(` gets a `*` after the `)`. Spaces between the two are dropped. Each pass is a single
/// non-overlapping scan, and normalizing twice gives the same text as normalizing once.
///
/// # Examples
/// ```
/// assert_eq!(dice_expr::normalize("3(3)"), "3*(3)");
/// assert_eq!(dice_expr::normalize("(3) 3"), "(3)*3");
/// assert_eq!(dice_expr::normalize("1 + 2"), "1 + 2");
/// ```
pub fn normalize(s: &str) -> Cow<'_, str> {
    match BEFORE_OPEN.replace_all(s, "${1}*(") {
        Cow::Borrowed(s) => AFTER_CLOSE.replace_all(s, ")*${1}"),
        Cow::Owned(s) => Cow::Owned(AFTER_CLOSE.replace_all(&s, ")*${1}").into_owned()),
    }
}
