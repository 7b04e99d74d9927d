use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a BMP image
#[derive(Args, Debug)]
pub struct InsertArgs {
    /// Carrier BMP image, used readonly
    #[arg(value_name = "in-bmp")]
    pub input: PathBuf,

    /// The image with the hidden message will be stored as this file
    #[arg(value_name = "out-bmp")]
    pub output: PathBuf,

    /// Key file, one `x y R|G|B` entry per hidden bit
    #[arg(value_name = "key-txt")]
    pub key: PathBuf,

    /// Message file, capital letters, space, period and comma only
    #[arg(value_name = "msg-txt")]
    pub message: PathBuf,
}

impl InsertArgs {
    pub fn run(self) -> CliResult<()> {
        stegobmp_core::commands::insert(&self.input, &self.output, &self.key, &self.message)
    }
}
