//! Group size suggestions

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Group sizes considered when suggesting
pub const SUGGESTED_SIZES: RangeInclusive<usize> = 2..=6;

/// Below this many names no split is suggested
pub const MIN_SUGGESTION_TOTAL: usize = 4;

/// One feasible way to split a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSuggestion {
    pub size: usize,
    pub group_count: usize,
    /// Names left over when every group has exactly `size` members
    pub remainder: usize,
}

/// Suggest group sizes for `total` names, tightest fit first.
///
/// Ties keep ascending size order.
///
/// ```
/// use podium_domain::groups::suggestion::suggest;
///
/// let sizes: Vec<usize> = suggest(12).iter().map(|s| s.size).collect();
/// assert_eq!(sizes, vec![2, 3, 4, 6, 5]);
/// ```
pub fn suggest(total: usize) -> Vec<GroupSuggestion> {
    if total < MIN_SUGGESTION_TOTAL {
        return Vec::new();
    }

    let mut suggestions: Vec<GroupSuggestion> = SUGGESTED_SIZES
        .map(|size| GroupSuggestion {
            size,
            group_count: total / size,
            remainder: total % size,
        })
        .filter(|s| s.group_count >= 2)
        .collect();

    // stable: equal remainders stay in size order
    suggestions.sort_by_key(|s| s.remainder);
    suggestions
}
