//! Command-line surface.
//!
//! Numbers are accepted as plain signed integers here and range-checked
//! by the typed parsers in `arg_parsers`, so that out-of-range values are
//! reported with the option they came from rather than as clap usage errors.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    arg_parse_err::SpaceSeparated,
    arg_parsers::{AspectRatio, FillColor, InputFileArg, Quality},
    error::PadError,
    plan::{ExecutionPlan, Modifiers},
    utils::filename::{default_output_path, with_png_extension},
};

#[derive(Parser, Debug)]
#[command(
    name = "picture-padding",
    version,
    about = "Pad an image to a target aspect ratio, keeping the original centered",
    long_about = "Pad an image to a target aspect ratio. The original is centered on a larger \
                  canvas and the added margins are filled with a solid or transparent color. \
                  The result is always written as PNG so that transparency is preserved."
)]
pub struct Cli {
    /// Input image path
    pub input: PathBuf,

    /// Output image path; a non-PNG extension is replaced with .png
    /// [default: <input without extension>_padded.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target aspect ratio as width and height
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["W", "H"],
        default_values_t = [2, 1],
        allow_negative_numbers = true
    )]
    pub ratio: Vec<i64>,

    /// Fill color for the added margins as red, green, blue and alpha (0-255)
    #[arg(
        short,
        long,
        num_args = 4,
        value_names = ["R", "G", "B", "A"],
        default_values_t = [0, 0, 0, 0],
        allow_negative_numbers = true
    )]
    pub color: Vec<i64>,

    /// PNG compression quality, imagemagick style: tens digit is the zlib level, units digit the filter
    #[arg(short, long, allow_negative_numbers = true)]
    pub quality: Option<f64>,

    /// Do not copy the input's ICC color profile to the output
    #[arg(long)]
    pub strip: bool,
}

impl TryFrom<Cli> for ExecutionPlan {
    type Error = PadError;

    /// Validates every value before the input image is touched.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let ratio = AspectRatio::try_from(cli.ratio.as_slice())
            .map_err(|e| e.into_pad_error("ratio", SpaceSeparated(&cli.ratio)))?;
        let fill = FillColor::try_from(cli.color.as_slice())
            .map_err(|e| e.into_pad_error("color", SpaceSeparated(&cli.color)))?;
        let quality = cli
            .quality
            .map(|q| Quality::try_from(q).map_err(|e| e.into_pad_error("quality", q)))
            .transpose()?;

        let input_file = InputFileArg::parse(&cli.input)?;
        let output_file = match &cli.output {
            Some(requested) => {
                let output = with_png_extension(requested);
                if &output != requested {
                    log::warn!(
                        "output must be PNG to keep transparency, writing `{}' instead of `{}'",
                        output.display(),
                        requested.display()
                    );
                }
                output
            }
            None => default_output_path(&input_file.path),
        };

        Ok(ExecutionPlan {
            input_file,
            output_file,
            ratio,
            fill,
            modifiers: Modifiers {
                quality,
                strip: cli.strip,
            },
        })
    }
}
