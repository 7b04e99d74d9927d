//! # Stegobmp Core API
//!
//! Reads and writes 24-bit uncompressed BMP images, crops and rotates them,
//! and hides text messages in their color channels at positions given by a key.
//!
//! - [`bitmap`] holds the image container and the geometric transforms
//! - [`stego`] holds the key driven LSB codec
//! - [`api`] and [`commands`] bundle both into file based operations
//!
//! # Usage Examples
//!
//! ## Crop and rotate an image
//!
//! ```rust,no_run
//! use stegobmp_core::bitmap::Rect;
//!
//! stegobmp_core::api::crop_rotate::prepare()
//!     .from_image("lena.bmp")
//!     .into_image("lena-cropped.bmp")
//!     .with_region(Rect::new(10, 20, 100, 50))
//!     .execute()
//!     .expect("Failed to crop and rotate image");
//! ```
//!
//! ## Hide a message inside an image
//!
//! ```rust,no_run
//! stegobmp_core::api::insert::prepare()
//!     .with_image("lena.bmp")
//!     .with_key("key.txt")         // one `x y R|G|B` entry per hidden bit
//!     .with_message("message.txt") // capital letters, space, period and comma
//!     .with_output("lena-secret.bmp")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust,no_run
//! stegobmp_core::api::extract::prepare()
//!     .from_secret_image("lena-secret.bmp")
//!     .with_key("key.txt")
//!     .into_message_file("message.txt")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bitmap;
pub mod commands;
pub mod error;
pub mod stego;

pub use crate::bitmap::{BmpImage, Position, Rect, Rotation, Size};
pub use crate::error::{BmpError, FileRole, Result, SteganoError, StegoError};
pub use crate::stego::Channel;
