//! Shared utility functions

/// Safely truncate a string at a UTF-8 boundary
pub fn safe_truncate(s: &str, max_bytes: usize) -> &str {
    if max_bytes >= s.len() { return s; }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Short preview of extracted text for the success payload.
/// Appends "..." only when the text was actually cut.
pub fn preview(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        s.to_string()
    } else {
        format!("{}...", safe_truncate(s, max_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate_ascii() {
        assert_eq!(safe_truncate("hello", 3), "hel");
        assert_eq!(safe_truncate("hello", 10), "hello");
        assert_eq!(safe_truncate("hello", 5), "hello");
    }

    #[test]
    fn test_safe_truncate_utf8() {
        // a rupee sign is 3 bytes; cutting inside it must back up to the boundary
        let s = "\u{20B9}100";
        assert_eq!(safe_truncate(s, 2), "");
        assert_eq!(safe_truncate(s, 3), "\u{20B9}");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 500), "short");
        let long = "x".repeat(600);
        let p = preview(&long, 500);
        assert_eq!(p.len(), 503);
        assert!(p.ends_with("..."));
    }
}
