//! Pads an image's canvas to a target aspect ratio.
//!
//! The original image is centered on a larger canvas and the new margins are
//! filled with a solid or transparent color. See [`operations::pad`] for the
//! transformation itself; everything else is argument handling and file I/O.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod image;
pub mod operations;
pub mod plan;
pub mod utils;
