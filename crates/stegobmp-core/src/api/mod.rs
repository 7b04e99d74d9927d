//! Builder style entry points, one per operation.
//!
//! Each builder is created with `prepare()`, gets its files and parameters set
//! and finally runs with `execute()`, which opens and closes all files itself.

pub mod crop_rotate;
pub mod extract;
pub mod insert;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::error;

use crate::bitmap::BmpImage;
use crate::error::{FileRole, Result, SteganoError};

pub(crate) fn open_file(role: FileRole, path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        error!("Error opening {role} file {path:?}: {source}");
        SteganoError::OpenFile {
            role,
            path: path.to_path_buf(),
            source,
        }
    })
}

pub(crate) fn create_file(role: FileRole, path: &Path) -> Result<File> {
    File::create(path).map_err(|source| {
        error!("Error creating {role} file {path:?}: {source}");
        SteganoError::OpenFile {
            role,
            path: path.to_path_buf(),
            source,
        }
    })
}

pub(crate) fn load_image(path: &Path) -> Result<BmpImage> {
    let file = open_file(FileRole::Input, path)?;
    Ok(BmpImage::load(&mut BufReader::new(file))?)
}

pub(crate) fn save_image(image: &BmpImage, path: &Path) -> Result<()> {
    let file = create_file(FileRole::Output, path)?;
    Ok(image.save(&mut BufWriter::new(file))?)
}
