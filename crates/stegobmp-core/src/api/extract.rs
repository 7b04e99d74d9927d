use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::FileRole;
use crate::stego;
use crate::{Result, SteganoError};

use super::{create_file, load_image, open_file};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    secret_image: Option<PathBuf>,
    key: Option<PathBuf>,
    message: Option<PathBuf>,
}

impl ExtractApi {
    /// This is the image that contains the hidden message
    pub fn from_secret_image(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The key the message was hidden with
    pub fn with_key(mut self, key: impl AsRef<Path>) -> Self {
        self.key = Some(key.as_ref().to_path_buf());
        self
    }

    /// This is the file the unveiled message is written to
    pub fn into_message_file(mut self, message: impl AsRef<Path>) -> Self {
        self.message = Some(message.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(secret_image) = self.secret_image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(key) = self.key else {
            return Err(SteganoError::KeyNotSet);
        };
        let Some(message) = self.message else {
            return Err(SteganoError::MessageNotSet);
        };

        let key = open_file(FileRole::Key, &key)?;
        let image = load_image(&secret_image)?;
        let message = create_file(FileRole::Message, &message)?;

        Ok(stego::read_message(
            &image,
            BufReader::new(key),
            BufWriter::new(message),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::bitmap::{BmpImage, Size};
    use crate::error::StegoError;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.bmp");
        let key = temp_dir.path().join("key.txt");
        let message = temp_dir.path().join("message.txt");
        let secret = temp_dir.path().join("secret.bmp");
        let unveiled = temp_dir.path().join("unveiled.txt");
        BmpImage::new(Size::new(8, 8))
            .unwrap()
            .save(&mut fs::File::create(&carrier).unwrap())
            .unwrap();
        let entries: String = (0..64)
            .flat_map(|p| ["R", "G", "B"].map(|c| format!("{} {} {c}\n", p % 8, p / 8)))
            .collect();
        fs::write(&key, entries).unwrap();
        fs::write(&message, "HIDE ME, NOW.").unwrap();

        crate::api::insert::prepare()
            .with_image(&carrier)
            .with_key(&key)
            .with_message(&message)
            .with_output(&secret)
            .execute()
            .expect("Failed to hide the message");

        crate::api::extract::prepare()
            .from_secret_image(&secret)
            .with_key(&key)
            .into_message_file(&unveiled)
            .execute()
            .expect("Failed to unveil the message");

        assert_eq!(fs::read_to_string(unveiled).unwrap(), "HIDE ME, NOW.");
    }

    #[test]
    fn key_outside_of_the_image_fails() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("carrier.bmp");
        let key = temp_dir.path().join("key.txt");
        BmpImage::new(Size::new(1, 1))
            .unwrap()
            .save(&mut fs::File::create(&carrier).unwrap())
            .unwrap();
        fs::write(&key, "0 0 R\n1 0 R\n").unwrap();

        let result = prepare()
            .from_secret_image(&carrier)
            .with_key(&key)
            .into_message_file(temp_dir.path().join("unveiled.txt"))
            .execute();

        assert!(matches!(
            result,
            Err(SteganoError::Stego(StegoError::IllegalArguments))
        ));
    }
}
