use std::path::{Path, PathBuf};

use crate::bitmap::{Rect, Rotation};
use crate::{Result, SteganoError};

use super::{load_image, save_image};

pub fn prepare() -> CropRotateApi {
    CropRotateApi::default()
}

#[derive(Debug)]
pub struct CropRotateApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    region: Option<Rect>,
    rotation: Rotation,
}

impl Default for CropRotateApi {
    fn default() -> Self {
        Self {
            image: None,
            output: None,
            region: None,
            rotation: Rotation::Clockwise90,
        }
    }
}

impl CropRotateApi {
    /// The source image, used readonly
    pub fn from_image(mut self, image: impl AsRef<Path>) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The file the transformed image is saved to
    pub fn into_image(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// The region to cut out, in top-down coordinates
    pub fn with_region(mut self, region: Rect) -> Self {
        self.region = Some(region);
        self
    }

    /// Defaults to [`Rotation::Clockwise90`]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(region) = self.region else {
            return Err(SteganoError::RegionNotSet);
        };

        let transformed = load_image(&image)?
            .crop(region)?
            .rotate(self.rotation)?;

        save_image(&transformed, &output)
    }
}
