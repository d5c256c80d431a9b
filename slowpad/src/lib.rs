//! slowPad — a minimal plain-text editor for the Slow Computer
//!
//! The editing model lives here, free of any widget code: [`pad::Pad`]
//! owns the document, the text buffer and whichever prompt is waiting
//! for an answer. The egui front end in `app.rs` only renders that state
//! and forwards clicks and keys.

pub mod buffer;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod fileio;
pub mod pad;
pub mod prompt;

pub use config::PadConfig;
pub use error::{PadError, Result};
pub use pad::Pad;
pub use prompt::{Deferred, Prompt, UserChoice};
