//! Draw-without-replacement domain.
//!
//! - [`engine::DrawEngine`]: partition of the roster into available/chosen
//! - [`history::DrawHistory`]: timestamped log of draws, newest shown first

pub mod engine;
pub mod history;
