use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::RgbaImage;

use crate::{encoders, error::PadError, pad_err, pad_try, plan::Modifiers};

/// Writes the padded pixels to `path` as PNG.
///
/// If encoding or writing fails after the file was created, the file is removed
/// so that a failed run does not leave a truncated PNG behind.
pub fn encode(
    pixels: &RgbaImage,
    icc: Option<&[u8]>,
    path: &Path,
    modifiers: &Modifiers,
) -> Result<(), PadError> {
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| pad_err!(Output, "unable to open image `{}': {error}", path.display()))?;

    if let Err(error) = encode_inner(pixels, icc, file, modifiers) {
        if let Err(remove_error) = std::fs::remove_file(path) {
            log::warn!(
                "unable to remove partially written `{}': {remove_error}",
                path.display()
            );
        }
        return Err(error);
    }

    log::info!(
        "wrote {}x{} PNG to `{}'",
        pixels.width(),
        pixels.height(),
        path.display()
    );
    Ok(())
}

fn encode_inner(
    pixels: &RgbaImage,
    icc: Option<&[u8]>,
    file: File,
    modifiers: &Modifiers,
) -> Result<(), PadError> {
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);
    encoders::png::encode(pixels, icc, &mut writer, modifiers)?;
    // The buffers would be flushed on drop, but that would not report any errors.
    pad_try!(Output, writer.flush());
    Ok(())
}
