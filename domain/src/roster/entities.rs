//! Roster value object

use serde::{Deserialize, Serialize};

/// Ordered list of candidate names for a session.
///
/// Names are trimmed and never empty. Duplicates are kept: two students
/// with the same name are two separate draw units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Parse free roster text, one name per line.
    ///
    /// ```
    /// use podium_domain::Roster;
    ///
    /// let roster = Roster::parse("  Ada \n\nGrace\r\n  \nAda");
    /// assert_eq!(roster.names(), ["Ada", "Grace", "Ada"]);
    /// ```
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(Into::into)
            .map(|name: String| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render back to roster text (one name per line).
    pub fn to_text(&self) -> String {
        self.names.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_blank_lines() {
        let roster = Roster::parse("\n  Alice  \n\t\nBob\n\n  Carol");
        assert_eq!(roster.names(), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let roster = Roster::parse("Sam\nAlex\nSam");
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.names(), ["Sam", "Alex", "Sam"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let roster = Roster::parse("Alice\r\nBob\r\n");
        assert_eq!(roster.names(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(Roster::parse("").is_empty());
        assert!(Roster::parse("   \n \n").is_empty());
    }

    #[test]
    fn test_parse_never_yields_empty_names_and_keeps_order() {
        let samples = [
            "a\n\nb\n c \n",
            "\n\n\n",
            "  x\ty  \nz",
            "one\r\n\r\ntwo\r\n   three   ",
        ];
        for text in samples {
            let roster = Roster::parse(text);
            assert!(roster.names().iter().all(|n| !n.is_empty()));
            let expected: Vec<&str> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            assert_eq!(roster.names(), expected.as_slice());
        }
    }

    #[test]
    fn test_from_names_filters_blank() {
        let roster = Roster::from_names(["Ann", "  ", " Ben "]);
        assert_eq!(roster.names(), ["Ann", "Ben"]);
        assert_eq!(roster.to_text(), "Ann\nBen");
    }
}
