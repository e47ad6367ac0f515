use std::borrow::Cow;

/// Removes `_` digit separators from numeric text.
///
/// Every underscore must sit between two ASCII digits, so `1_000` and
/// `1_000.5` are accepted while `_1`, `1_`, `1__0` and `1_.5` are not.
///
/// # Examples
///
/// ```ignore
/// use filecrunch::utils::strip_digit_separators;
///
/// assert_eq!(strip_digit_separators("1_000.5").as_deref(), Some("1000.5"));
/// assert_eq!(strip_digit_separators("1__0"), None);
/// ```
pub fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let is_digit = |at: Option<usize>| {
        at.and_then(|i| bytes.get(i))
            .is_some_and(u8::is_ascii_digit)
    };
    let separated = text
        .match_indices('_')
        .all(|(i, _)| is_digit(i.checked_sub(1)) && is_digit(Some(i + 1)));
    separated.then(|| Cow::Owned(text.replace('_', "")))
}
