//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod picker_controller;
pub mod roster_store;
pub mod type_catalog;
