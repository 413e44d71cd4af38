//! Hostname-derived prefix suggestion

/// Derive a prefix suggestion from the hostname an alias is being created
/// for. Keeps only the registrable label, ignoring subdomain and TLD:
/// `www.groupon.com` suggests `groupon`.
///
/// Single-label hostnames pass through unchanged, without sanitization.
pub fn suggest_prefix(hostname: &str) -> String {
    if hostname.is_empty() {
        return String::new();
    }

    if !hostname.contains('.') {
        return hostname.to_string();
    }

    let parts: Vec<&str> = hostname.split('.').collect();
    convert_to_id(parts[parts.len() - 2])
}

/// Sanitize a string into an identifier-safe token: lowercase, with runs of
/// non-alphanumeric characters collapsed into a single `-` and separators
/// trimmed from both ends.
pub fn convert_to_id(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_separator = false;

    for c in s.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomain_and_tld_stripped() {
        assert_eq!(suggest_prefix("www.groupon.com"), "groupon");
        assert_eq!(suggest_prefix("groupon.com"), "groupon");
        assert_eq!(suggest_prefix("app.shop.example.io"), "example");
    }

    #[test]
    fn test_second_to_last_label_rule() {
        // Label positions, not semantic TLD parsing
        assert_eq!(suggest_prefix("shop.example.co.uk"), "co");
    }

    #[test]
    fn test_empty_hostname() {
        assert_eq!(suggest_prefix(""), "");
    }

    #[test]
    fn test_single_label_passes_through_unsanitized() {
        assert_eq!(suggest_prefix("localhost"), "localhost");
        // The sanitizer only runs when a dot is present
        assert_eq!(suggest_prefix("LocalHost"), "LocalHost");
        assert_eq!(suggest_prefix("intra_net"), "intra_net");
    }

    #[test]
    fn test_dotted_hostname_is_sanitized() {
        assert_eq!(suggest_prefix("My-Shop.Example.com"), "example");
        assert_eq!(suggest_prefix("www.big__store.com"), "big-store");
    }

    #[test]
    fn test_convert_to_id() {
        assert_eq!(convert_to_id("Groupon"), "groupon");
        assert_eq!(convert_to_id("big  store"), "big-store");
        assert_eq!(convert_to_id("--edge--"), "edge");
        assert_eq!(convert_to_id("a.b.c"), "a-b-c");
        assert_eq!(convert_to_id(""), "");
    }
}
