//! DatoTid token handling.

/// Reduce a combined `YYYY-MM-DDThh:mm:ssZ` token to its date part.
///
/// Splits on the first `T` and returns the portion before it. A token
/// without a `T` passes through whole and empty input stays empty; there
/// is no invalid-input error path.
///
/// # Examples
/// ```
/// use fnux_extractor::dates::date_only;
///
/// assert_eq!(date_only("2024-01-24T10:00:00Z"), "2024-01-24");
/// assert_eq!(date_only("2024-01-24"), "2024-01-24");
/// assert_eq!(date_only(""), "");
/// ```
pub fn date_only(token: &str) -> &str {
    match token.split_once('T') {
        Some((date, _)) => date,
        None => token,
    }
}
