use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Suffix appended to the input's name when no output path is given
pub const PADDED_SUFFIX: &str = "_padded";

/// Derives the default output path: the input with its extension removed,
/// followed by `_padded.png`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut stem = strip_extension(input);
    stem.push(PADDED_SUFFIX);
    stem.push(".png");
    PathBuf::from(stem)
}

/// Keeps paths that already end in `.png` (in any letter case) and otherwise
/// replaces the extension with `.png`, appending it if there is none.
pub fn with_png_extension(output: &Path) -> PathBuf {
    if has_png_suffix(output.as_os_str()) {
        return output.to_path_buf();
    }
    let mut stem = strip_extension(output);
    stem.push(".png");
    PathBuf::from(stem)
}

fn has_png_suffix(path: &OsStr) -> bool {
    let bytes = path.as_encoded_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".png")
}

/// Removes the last extension of the final path component.
/// Leading dots of hidden files are not treated as extensions.
fn strip_extension(path: &Path) -> OsString {
    let mut stripped = path.to_path_buf();
    if path.extension().is_some() {
        stripped.set_extension("");
    }
    stripped.into_os_string()
}
