//! Password generation that guarantees every selected character class
//! appears, with strength scoring, a bounded session history and
//! terminal/file/clipboard output.
//!
//! ```no_run
//! use passforge::entropy::Source;
//! use passforge::pass::{GenerationRequest, score_strength, synthesize};
//!
//! let mut rng = Source::default();
//! let password = synthesize(&GenerationRequest::all(20), &mut rng).unwrap();
//! println!("{} ({})", password.value(), score_strength(password.value()).label);
//! ```

pub mod cli;
pub mod entropy;
mod error;
pub mod exits;
pub mod history;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
