pub mod composite;
pub mod pad;

pub use pad::{pad, pad_geometry, PadAxis, PadGeometry};
