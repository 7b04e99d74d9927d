use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from a BMP image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// BMP image that contains the hidden message
    #[arg(value_name = "in-bmp")]
    pub input: PathBuf,

    /// Key file the message was hidden with
    #[arg(value_name = "key-txt")]
    pub key: PathBuf,

    /// The unveiled message will be stored as this file
    #[arg(value_name = "msg-txt")]
    pub message: PathBuf,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        stegobmp_core::commands::extract(&self.input, &self.key, &self.message)
    }
}
