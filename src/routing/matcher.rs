//! Route matching logic.
//!
//! # Responsibilities
//! - Match path prefix (case-sensitive)
//! - Match whole path (case-sensitive)
//! - Hand the unmatched remainder to the next routing level
//!
//! # Design Decisions
//! - Paths are matched without their leading slash
//! - Empty prefix = always matches (wildcard)
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths against a pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the part of `path` left over after this pattern, or `None`.
    fn strip<'a>(&self, path: &'a str) -> Option<&'a str>;

    /// Pattern text, for diagnostics.
    fn pattern(&self) -> &str;

    /// Whether the pattern must consume the whole path.
    fn is_exact(&self) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(self.prefix.as_str())
    }

    fn pattern(&self) -> &str {
        &self.prefix
    }

    fn is_exact(&self) -> bool {
        false
    }
}

/// Matches one path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        (path == self.path).then_some("")
    }

    fn pattern(&self) -> &str {
        &self.path
    }

    fn is_exact(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("secret-backend/");

        assert_eq!(matcher.strip("secret-backend/status"), Some("status"));
        assert_eq!(matcher.strip("secret-backend/"), Some(""));
        assert_eq!(matcher.strip("secret-backend"), None);
        assert_eq!(matcher.strip("Secret-Backend/status"), None); // Case sensitive
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let matcher = PathPrefixMatcher::new("");
        assert_eq!(matcher.strip(""), Some(""));
        assert_eq!(matcher.strip("foo/bar"), Some("foo/bar"));
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactPathMatcher::new("login/");

        assert_eq!(matcher.strip("login/"), Some(""));
        assert_eq!(matcher.strip("login/extra"), None);
        assert_eq!(matcher.strip("login"), None);
        assert!(matcher.is_exact());
    }
}
