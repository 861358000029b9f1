/// Returns true if the URL contains at least one of the keywords
///
/// Matching is a case-insensitive substring test against the whole absolute
/// URL string, so `https://example.com/HELP-center` matches `help`.
///
/// # Examples
///
/// ```
/// use pulse_modules::url::matches_topic;
///
/// let keywords = ["help", "docs", "support"];
/// assert!(matches_topic("https://example.com/Docs/intro", &keywords));
/// assert!(!matches_topic("https://example.com/pricing", &keywords));
/// ```
pub fn matches_topic<S: AsRef<str>>(url: &str, keywords: &[S]) -> bool {
    let lowered = url.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.as_ref().to_lowercase()))
}
