use std::path::PathBuf;

use crate::arg_parsers::{AspectRatio, FillColor, InputFileArg, Quality};
use crate::decode::decode;
use crate::error::PadError;
use crate::encode;
use crate::operations::pad;

/// Everything needed for one run, validated up front
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub input_file: InputFileArg,
    pub output_file: PathBuf,
    pub ratio: AspectRatio,
    pub fill: FillColor,
    pub modifiers: Modifiers,
}

/// Settings that affect only how the result is written
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Modifiers {
    pub quality: Option<Quality>,
    /// Drop the source's ICC profile instead of copying it to the output
    pub strip: bool,
}

impl ExecutionPlan {
    /// Decodes the input, pads it and writes the PNG.
    /// Nothing is written unless decoding and padding succeed.
    pub fn execute(&self) -> Result<(), PadError> {
        let image = decode(&self.input_file.path)?;
        let padded = pad(&image.pixels, self.ratio, self.fill)?;
        encode::encode(
            &padded,
            image.icc.as_deref(),
            &self.output_file,
            &self.modifiers,
        )
    }

    /// Human-readable summary printed after a successful run
    pub fn confirmation(&self) -> String {
        format!(
            "Padded image to {} ratio, saved to: {}",
            self.ratio,
            self.output_file.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn plan_for(input: &Path, output: PathBuf) -> ExecutionPlan {
        ExecutionPlan {
            input_file: InputFileArg::parse(input).unwrap(),
            output_file: output,
            ratio: AspectRatio::default(),
            fill: FillColor::new(0, 0, 255, 255),
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_execute_pads_to_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tall.png");
        RgbaImage::from_pixel(100, 200, Rgba([9, 9, 9, 255]))
            .save(&input)
            .unwrap();
        let output = dir.path().join("tall_padded.png");

        let plan = plan_for(&input, output.clone());
        plan.execute().unwrap();

        let written = image::open(&output).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (400, 200));
        assert_eq!(written.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(written.get_pixel(150, 0), &Rgba([9, 9, 9, 255]));
        assert_eq!(written.get_pixel(249, 199), &Rgba([9, 9, 9, 255]));
        assert_eq!(written.get_pixel(250, 199), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_undecodable_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"\x89PNG but not really").unwrap();
        let output = dir.path().join("broken_padded.png");

        let err = plan_for(&input, output.clone()).execute().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Input);
        assert!(!output.exists());
    }

    fn write_with_icc(path: &Path, icc: &[u8]) {
        let mut buf = Vec::new();
        crate::encoders::png::encode(
            &RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255])),
            Some(icc),
            &mut buf,
            &Modifiers::default(),
        )
        .unwrap();
        std::fs::write(path, buf).unwrap();
    }

    #[test]
    fn test_icc_profile_follows_strip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tagged.png");
        let icc = b"profile bytes".to_vec();
        write_with_icc(&input, &icc);

        let kept = dir.path().join("kept.png");
        plan_for(&input, kept.clone()).execute().unwrap();
        assert_eq!(decode(&kept).unwrap().icc, Some(icc));

        let stripped = dir.path().join("stripped.png");
        let mut plan = plan_for(&input, stripped.clone());
        plan.modifiers.strip = true;
        plan.execute().unwrap();
        assert_eq!(decode(&stripped).unwrap().icc, None);
    }

    #[test]
    fn test_confirmation() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let plan = plan_for(file.path(), PathBuf::from("out.png"));
        assert_eq!(
            plan.confirmation(),
            "Padded image to 2:1 ratio, saved to: out.png"
        );
    }
}
