//! Parsers and validators for specific command-line values

mod color;
pub use color::*;
mod filename;
pub use filename::*;
mod quality;
pub use quality::*;
mod ratio;
pub use ratio::*;
