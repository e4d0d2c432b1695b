//! Presentation types: named bundles of a description and a default
//! timer duration (e.g. "Lightning talk", "Book report").

pub mod presentation_type;
