//! Console output formatter for one-shot commands

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use podium_domain::{GroupSuggestion, OutputFormat, PresentationType, format_clock};
use serde::Serialize;

/// Formats command results for console display
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format suggestions as colored text
    pub fn format_suggestions(total: usize, suggestions: &[GroupSuggestion]) -> String {
        let mut output = Self::header(&format!("Group sizes for {} students", total));

        if suggestions.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "Not enough students to split into groups.".yellow()
            ));
            return output;
        }

        for suggestion in suggestions {
            let fit = if suggestion.remainder == 0 {
                "exact".green().to_string()
            } else {
                format!("{} left over", suggestion.remainder)
                    .yellow()
                    .to_string()
            };
            output.push_str(&format!(
                "\n  {} groups of {}  ({})",
                suggestion.group_count.to_string().bold(),
                suggestion.size.to_string().bold(),
                fit
            ));
        }
        output.push('\n');
        output
    }

    /// Format groups as colored text
    pub fn format_groups(groups: &[Vec<String>], excluded: usize) -> String {
        let mut output = Self::header(&format!("{} groups", groups.len()));

        for (i, members) in groups.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n",
                format!("── Group {} ──", i + 1).cyan().bold()
            ));
            output.push_str(&Self::indent(&members.join("\n"), "  "));
            output.push('\n');
        }

        if excluded > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!("{} student(s) not assigned", excluded).dimmed()
            ));
        }
        output
    }

    /// Format saved list names as text
    pub fn format_lists(names: &[String]) -> String {
        if names.is_empty() {
            return format!("{}\n", "No saved lists.".dimmed());
        }
        let mut output = Self::header("Saved lists");
        output.push('\n');
        for name in names {
            output.push_str(&format!("  * {}\n", name));
        }
        output
    }

    /// Format presentation types as text
    pub fn format_types(types: &[PresentationType]) -> String {
        if types.is_empty() {
            return format!("{}\n", "No presentation types.".dimmed());
        }
        let mut output = Self::header("Presentation types");
        for presentation_type in types {
            output.push_str(&format!(
                "\n{} {}\n",
                presentation_type.name.yellow().bold(),
                format!("({})", format_clock(presentation_type.default_duration_seconds)).dimmed()
            ));
            let description = presentation_type.description_lines().join("\n");
            if !description.is_empty() {
                output.push_str(&Self::indent(&description, "  "));
                output.push('\n');
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Serialize)]
struct SuggestionsJson<'a> {
    total: usize,
    suggestions: &'a [GroupSuggestion],
}

#[derive(Serialize)]
struct GroupsJson<'a> {
    groups: &'a [Vec<String>],
    excluded: usize,
}

impl OutputFormatter for ConsoleFormatter {
    fn suggestions(&self, total: usize, suggestions: &[GroupSuggestion]) -> String {
        match self.format {
            OutputFormat::Text => Self::format_suggestions(total, suggestions),
            OutputFormat::Json => Self::format_json(&SuggestionsJson { total, suggestions }),
        }
    }

    fn groups(&self, groups: &[Vec<String>], excluded: usize) -> String {
        match self.format {
            OutputFormat::Text => Self::format_groups(groups, excluded),
            OutputFormat::Json => Self::format_json(&GroupsJson { groups, excluded }),
        }
    }

    fn lists(&self, names: &[String]) -> String {
        match self.format {
            OutputFormat::Text => Self::format_lists(names),
            OutputFormat::Json => Self::format_json(names),
        }
    }

    fn types(&self, types: &[PresentationType]) -> String {
        match self.format {
            OutputFormat::Text => Self::format_types(types),
            OutputFormat::Json => Self::format_json(types),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_domain::suggest;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_suggestions_text() {
        plain();
        let text = ConsoleFormatter::format_suggestions(12, &suggest(12));
        assert!(text.contains("Group sizes for 12 students"));
        assert!(text.contains("6 groups of 2  (exact)"));
        assert!(text.contains("2 groups of 5  (2 left over)"));
    }

    #[test]
    fn test_suggestions_empty_class() {
        plain();
        let text = ConsoleFormatter::format_suggestions(3, &[]);
        assert!(text.contains("Not enough students"));
    }

    #[test]
    fn test_groups_text_lists_members() {
        plain();
        let groups = vec![
            vec!["Ann".to_string(), "Ben".to_string()],
            vec!["Cal".to_string(), "Dee".to_string()],
        ];
        let text = ConsoleFormatter::format_groups(&groups, 1);
        assert!(text.contains("── Group 2 ──"));
        assert!(text.contains("  Dee"));
        assert!(text.contains("1 student(s) not assigned"));
    }

    #[test]
    fn test_json_output() {
        let formatter = ConsoleFormatter::new(OutputFormat::Json);
        let json: serde_json::Value =
            serde_json::from_str(&formatter.suggestions(12, &suggest(12))).unwrap();
        assert_eq!(json["total"], 12);
        assert_eq!(json["suggestions"][0]["size"], 2);
        assert_eq!(json["suggestions"][0]["group_count"], 6);

        let json: serde_json::Value =
            serde_json::from_str(&formatter.lists(&["A".to_string()])).unwrap();
        assert_eq!(json, serde_json::json!(["A"]));
    }

    #[test]
    fn test_types_text() {
        plain();
        let types = vec![PresentationType {
            name: "Lightning".to_string(),
            description: "Five slides\nNo questions".to_string(),
            default_duration_seconds: 180,
        }];
        let text = ConsoleFormatter::format_types(&types);
        assert!(text.contains("Lightning (03:00)"));
        assert!(text.contains("  No questions"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
