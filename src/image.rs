use image::{DynamicImage, ImageFormat};

/// A decoded image together with the properties we carry over to the output
#[derive(Debug, Clone)]
pub struct Image {
    /// Format the input was decoded from, if it was recognized
    pub format: Option<ImageFormat>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}
