use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    CropRotate(crop_rotate::CropRotateArgs),
    Insert(insert::InsertArgs),
    Extract(extract::ExtractArgs),
}

impl Commands {
    pub fn run(self) -> crate::CliResult<()> {
        match self {
            Commands::CropRotate(args) => args.run(),
            Commands::Insert(args) => args.run(),
            Commands::Extract(args) => args.run(),
        }
    }
}
