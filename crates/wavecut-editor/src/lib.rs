//! Wavecut editor - waveform viewer and range exporter
//!
//! Library half of the binary so the controller, config and UI handlers can
//! be tested without opening a window.

pub mod config;
pub mod notice;
pub mod selection;
pub mod ui;
