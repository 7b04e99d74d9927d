use std::path::Path;

use crate::bitmap::{Rect, Rotation};
use crate::Result;

/// cuts `region` out of `input`, rotates it clockwise by 90° and saves it as `output`
pub fn crop_rotate(input: &Path, output: &Path, region: Rect) -> Result<()> {
    crate::api::crop_rotate::prepare()
        .from_image(input)
        .into_image(output)
        .with_region(region)
        .with_rotation(Rotation::Clockwise90)
        .execute()
}

pub fn insert(input: &Path, output: &Path, key: &Path, message: &Path) -> Result<()> {
    crate::api::insert::prepare()
        .with_image(input)
        .with_output(output)
        .with_key(key)
        .with_message(message)
        .execute()
}

pub fn extract(input: &Path, key: &Path, message: &Path) -> Result<()> {
    crate::api::extract::prepare()
        .from_secret_image(input)
        .with_key(key)
        .into_message_file(message)
        .execute()
}
