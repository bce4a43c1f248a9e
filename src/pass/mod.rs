//! Password generation, strength scoring and output.

pub mod charset;
mod generate;
pub mod output;
mod request;
pub mod strength;

pub use charset::{CharClass, CharacterPool};
pub use generate::{GeneratedPassword, generate_batch, synthesize};
pub use output::{ClipboardSink, PasswordSink, WriterSink};
pub use request::{GenerationRequest, InvalidRequest};
pub use strength::{Strength, StrengthScore, entropy_bits, score_strength};
