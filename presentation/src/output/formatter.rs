//! Output formatter trait

use podium_domain::{GroupSuggestion, PresentationType};

/// Trait for formatting one-shot command results
pub trait OutputFormatter {
    /// Group size suggestions for `total` names
    fn suggestions(&self, total: usize, suggestions: &[GroupSuggestion]) -> String;

    /// Randomized groups, with the number of names left out
    fn groups(&self, groups: &[Vec<String>], excluded: usize) -> String;

    /// Saved roster names
    fn lists(&self, names: &[String]) -> String;

    /// Presentation types
    fn types(&self, types: &[PresentationType]) -> String;
}
