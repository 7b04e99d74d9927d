use std::path::PathBuf;

use clap::Args;
use stegobmp_core::Rect;

use crate::CliResult;

/// Cuts a region out of a BMP image and rotates it clockwise by 90 degrees
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct CropRotateArgs {
    /// BMP image to crop, used readonly
    #[arg(value_name = "in-bmp")]
    pub input: PathBuf,

    /// The cropped and rotated image will be stored as this file
    #[arg(value_name = "out-bmp")]
    pub output: PathBuf,

    /// Left edge of the region
    pub x: i32,

    /// Top edge of the region, counted from the top of the image
    pub y: i32,

    /// Width of the region
    pub width: u32,

    /// Height of the region
    pub height: u32,
}

impl CropRotateArgs {
    pub fn run(self) -> CliResult<()> {
        stegobmp_core::commands::crop_rotate(
            &self.input,
            &self.output,
            Rect::new(self.x, self.y, self.width, self.height),
        )
    }
}
