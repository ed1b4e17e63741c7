use std::path::{Path, PathBuf};

use crate::{error::PadError, pad_err};

/// Path of the source image, checked to exist before anything else is done with it.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFileArg {
    pub path: PathBuf,
}

impl InputFileArg {
    pub fn parse(input: &Path) -> Result<Self, PadError> {
        if input.as_os_str().is_empty() {
            return Err(pad_err!(Input, "no input image given"));
        }
        if !input.is_file() {
            return Err(pad_err!(
                Input,
                "unable to open image `{}': No such file",
                input.display()
            ));
        }
        Ok(Self {
            path: input.to_path_buf(),
        })
    }
}
