use url::Url;

/// Accepts absolute http(s) URLs. Returns the WHATWG serialisation with the
/// fragment removed, so scheme and host come back lowercased and an empty
/// path as `/`.
pub fn normalize_playable_url(input: &str) -> Option<String> {
    let mut parsed = Url::parse(input).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    parsed.set_fragment(None);
    Some(parsed.into())
}

/// `#RRGGBB`, either case.
pub fn is_valid_color_hex(input: &str) -> bool {
    input.len() == 7
        && input.starts_with('#')
        && input[1..].chars().all(|c| c.is_ascii_hexdigit())
}
