//! User interface modules for the wavecut editor

pub mod app;
pub mod handlers;
pub mod message;

pub use app::WavecutApp;
pub use message::Message;
