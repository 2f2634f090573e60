//! # Path Sanitization
//!
//! Normalizes user-supplied mount paths before they are embedded in URLs.

/// Strip surrounding whitespace and slashes from a mount path
///
/// Mount paths arrive from form fields and URL fragments with stray
/// whitespace and slash runs (`"/secret/"`, `"  kv "`, `"///ssh///"`).
/// The backend expects the bare segment. Interior slashes are preserved.
/// Any input is accepted; an all-slash or all-whitespace input returns the
/// empty string.
///
/// Applying the function twice gives the same result as applying it once.
///
/// # Example
///
/// ```
/// use path_help::paths::sanitize_path;
///
/// assert_eq!(sanitize_path("  /a/b/  "), "a/b");
/// assert_eq!(sanitize_path("///x///"), "x");
/// ```
#[must_use]
pub fn sanitize_path(path: &str) -> String {
    path.trim_matches(|c: char| c == '/' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path_strips_whitespace_and_slashes() {
        let cases = vec![
            ("", ""),
            ("kv", "kv"),
            ("  /a/b/  ", "a/b"),
            ("///x///", "x"),
            ("/secret/", "secret"),
            ("  ssh  ", "ssh"),
            ("a/b/c", "a/b/c"),
            ("/ /x", "x"),
            ("////", ""),
            ("   ", ""),
            ("auth/ldap", "auth/ldap"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                sanitize_path(input),
                expected,
                "sanitize_path({:?}) should be {:?}",
                input,
                expected
            );
        }
    }

    #[test]
    fn test_sanitize_path_is_idempotent() {
        let inputs = vec!["", "kv", "  /a/b/  ", "///x///", "/ /mixed/ /", "a b/c d"];

        for input in inputs {
            let once = sanitize_path(input);
            let twice = sanitize_path(&once);
            assert_eq!(
                once, twice,
                "sanitize_path should be idempotent for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_sanitize_path_output_has_no_surrounding_junk() {
        let inputs = vec!["/a/", " b ", "//c d//", "\t/e/\n", "f"];

        for input in inputs {
            let output = sanitize_path(input);
            assert!(
                !output.starts_with('/') && !output.ends_with('/'),
                "Output {:?} should have no leading or trailing slash",
                output
            );
            assert_eq!(
                output,
                output.trim(),
                "Output {:?} should have no leading or trailing whitespace",
                output
            );
        }
    }
}
