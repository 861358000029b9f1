use url::Url;

/// Extracts the domain of a URL as its origin: scheme, host and port
///
/// Path, query and fragment are ignored. The host is lowercased by URL parsing
/// and default ports are omitted, so `https://Example.com:443/a` and
/// `https://example.com/b` share the origin `https://example.com`.
///
/// # Returns
///
/// * `Some(String)` - The serialized origin
/// * `None` - If the URL has an opaque origin (no host)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pulse_modules::url::extract_origin;
///
/// let url = Url::parse("https://EXAMPLE.COM/docs?page=2").unwrap();
/// assert_eq!(extract_origin(&url), Some("https://example.com".to_string()));
/// ```
pub fn extract_origin(url: &Url) -> Option<String> {
    let origin = url.origin();
    if origin.is_tuple() {
        Some(origin.ascii_serialization())
    } else {
        None
    }
}

/// Returns true if both URLs have the same scheme, host and port
pub fn same_domain(a: &Url, b: &Url) -> bool {
    match (extract_origin(a), extract_origin(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
