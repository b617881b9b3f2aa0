//! Domain extraction from raw URL field input.

/// Extracts the domain name from a URL typed into a form field.
///
/// The input is not parsed as a URL. It is split on `/` the same way
/// the page always has:
/// - when the input contains `://`, the domain is the third segment
///   (everything after `scheme://` up to the next `/`)
/// - otherwise the domain is the first segment
///
/// Anything from the first `:` (port) and then from the first `?` (query)
/// onwards is stripped from the candidate.
///
/// Malformed input is not rejected; the result may be empty or meaningless.
///
/// # Examples
///
/// ```
/// use form_guard::utils::extract_domain;
///
/// assert_eq!(extract_domain("https://www.asos.com/path?x=1"), "www.asos.com");
/// assert_eq!(extract_domain("www.asos.com:8080"), "www.asos.com");
/// assert_eq!(extract_domain("notaurl"), "notaurl");
/// ```
pub fn extract_domain(url: &str) -> &str {
    let segment = if url.contains("://") {
        url.split('/').nth(2).unwrap_or_default()
    } else {
        url.split('/').next().unwrap_or_default()
    };

    let without_port = segment.split(':').next().unwrap_or_default();
    without_port.split('?').next().unwrap_or_default()
}
