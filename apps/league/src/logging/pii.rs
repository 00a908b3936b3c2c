use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for redaction. All are vetted literals.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Quoted literals: `'...'` or `"..."`
    pub fn quoted() -> &'static Regex {
        static QUOTED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r#"'[^']*'|"[^"]*""#).unwrap()
        });
        &QUOTED_REGEX
    }

    /// PostgreSQL key detail values: `=(...)`
    pub fn key_values() -> &'static Regex {
        static KEY_VALUES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"=\([^)]*\)").unwrap()
        });
        &KEY_VALUES_REGEX
    }
}

/// Masks row values that a database error may echo back.
///
/// Quoted literals become `'***'` and PostgreSQL `Key (col)=(value)` details
/// become `=(***)`. Identifiers such as table and constraint names survive.
pub fn redact(input: &str) -> String {
    let unquoted = PiiRegexRegistry::quoted().replace_all(input, "'***'");
    PiiRegexRegistry::key_values()
        .replace_all(&unquoted, "=(***)")
        .into_owned()
}

/// Display wrapper that redacts on format.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

/// Personal names keep their initial only.
pub struct RedactedName<'a>(pub &'a str);

impl fmt::Display for RedactedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.chars().next() {
            Some(initial) => write!(f, "{initial}***"),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for RedactedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
