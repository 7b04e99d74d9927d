//! Key driven LSB steganography for bitmaps.
//!
//! A message is hidden letter by letter. Every letter is a 5 bit code (see
//! [`LetterCodec`]) and every bit goes into the least significant bit of the
//! color channel the next key entry points at.

mod channel;
mod key;
mod letter;
mod lsb_codec;

use std::io::{BufRead, Read, Write};

pub use crate::error::StegoError;
pub use channel::{BitCarrier, Channel, HideBit};
pub use key::{KeyEntry, KeyReader};
pub use letter::{LetterCodec, BITS_PER_LETTER, TERMINATOR};
pub use lsb_codec::KeyedLsbCodec;

use crate::bitmap::BmpImage;

pub type Result<T> = std::result::Result<T, StegoError>;

/// hides `message` in `image` at the positions given by `key`
pub fn write_message<K: BufRead, M: Read>(image: &mut BmpImage, key: K, message: M) -> Result<()> {
    KeyedLsbCodec::default().hide(image, &mut KeyReader::new(key), message)
}

/// unveils a message from `image` by reading the positions given by `key`
pub fn read_message<K: BufRead, W: Write>(image: &BmpImage, key: K, message: W) -> Result<()> {
    KeyedLsbCodec::default().unveil(image, &mut KeyReader::new(key), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::{Position, Size};

    #[test]
    fn should_hide_a_letter_where_the_key_points_to() {
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();
        let key = "0 0 R\n0 0 G\n0 0 B\n1 0 R\n1 0 G";

        write_message(&mut image, key.as_bytes(), "A".as_bytes()).unwrap();

        assert_eq!(image.pixel(Position::new(0, 0)).unwrap(), &[0, 0, 1]);
        assert_eq!(image.pixel(Position::new(1, 0)).unwrap(), &[0, 0, 0]);

        // the terminator did not fit, the letter is still readable
        let mut message = Vec::new();
        read_message(&image, key.as_bytes(), &mut message).unwrap();
        assert_eq!(message, b"A");

        let mut message = Vec::new();
        read_message(&image, "".as_bytes(), &mut message).unwrap();
        assert!(message.is_empty());
    }
}
