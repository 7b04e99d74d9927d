use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::FileRole;
use crate::stego;
use crate::{Result, SteganoError};

use super::{load_image, open_file, save_image};

pub fn prepare() -> InsertApi {
    InsertApi::default()
}

#[derive(Default, Debug)]
pub struct InsertApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    key: Option<PathBuf>,
    message: Option<PathBuf>,
}

impl InsertApi {
    /// The carrier image, used readonly
    pub fn with_image(mut self, image: impl AsRef<Path>) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The file the image with the hidden message is saved to
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Text file with one `x y channel` entry per bit
    pub fn with_key(mut self, key: impl AsRef<Path>) -> Self {
        self.key = Some(key.as_ref().to_path_buf());
        self
    }

    /// Text file with the message to hide
    pub fn with_message(mut self, message: impl AsRef<Path>) -> Self {
        self.message = Some(message.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(key) = self.key else {
            return Err(SteganoError::KeyNotSet);
        };
        let Some(message) = self.message else {
            return Err(SteganoError::MessageNotSet);
        };

        let key = open_file(FileRole::Key, &key)?;
        let message = open_file(FileRole::Message, &message)?;
        let mut carrier = load_image(&image)?;

        stego::write_message(&mut carrier, BufReader::new(key), message)?;

        save_image(&carrier, &output)
    }
}
