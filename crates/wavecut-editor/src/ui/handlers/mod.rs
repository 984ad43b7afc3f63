//! Message handlers organized by feature
//!
//! Each sub-module provides handler methods on WavecutApp.

pub mod export;
pub mod import;
pub mod notice;
pub mod selection;
