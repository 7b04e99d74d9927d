use std::io::{BufRead, BufReader, Read, Write};

use log::{debug, warn};

use super::key::KeyReader;
use super::letter::{LetterCodec, BITS_PER_LETTER, TERMINATOR};
use super::{BitCarrier, Result};
use crate::error::StegoError;

/// Hides letters bit by bit at the carrier positions a key dictates, least significant bit first.
///
/// ## Example of usage
/// ```rust
/// use stegobmp_core::bitmap::{BmpImage, Size};
/// use stegobmp_core::stego::{KeyReader, KeyedLsbCodec};
///
/// let mut image = BmpImage::new(Size::new(4, 4)).expect("Cannot create image");
/// let key = "0 0 R 0 0 G 0 0 B 1 0 R 1 0 G 1 0 B 2 0 R 2 0 G 2 0 B 3 0 R";
///
/// let codec = KeyedLsbCodec::default();
/// codec
///     .hide(&mut image, &mut KeyReader::new(key.as_bytes()), "A".as_bytes())
///     .expect("Cannot hide message");
///
/// let mut unveiled = Vec::new();
/// codec
///     .unveil(&image, &mut KeyReader::new(key.as_bytes()), &mut unveiled)
///     .expect("Cannot unveil message");
/// assert_eq!(unveiled, b"A");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyedLsbCodec<'c> {
    letters: &'c LetterCodec,
}

impl Default for KeyedLsbCodec<'static> {
    fn default() -> Self {
        Self::new(LetterCodec::shared())
    }
}

impl<'c> KeyedLsbCodec<'c> {
    pub fn new(letters: &'c LetterCodec) -> Self {
        Self { letters }
    }

    /// Hides every byte of `message`, followed by a terminator.
    ///
    /// Bytes outside the letter alphabet are hidden as terminator. A terminator that
    /// does not fit into the key anymore is dropped without an error.
    pub fn hide<C, K, M>(&self, carrier: &mut C, key: &mut KeyReader<K>, message: M) -> Result<()>
    where
        C: BitCarrier + ?Sized,
        K: BufRead,
        M: Read,
    {
        let mut hidden = 0usize;
        for letter in BufReader::new(message).bytes() {
            let letter = letter.map_err(|source| StegoError::MessageRead { source })?;
            if !self.letters.is_encodable(letter) {
                warn!("{letter:#04x} is not part of the letter alphabet, hiding it as terminator");
            }
            self.hide_letter(carrier, key, self.letters.encode(letter))?;
            hidden += 1;
        }

        if let Err(e) = self.hide_letter(carrier, key, TERMINATOR) {
            debug!("terminator was not hidden: {e}");
        }
        debug!("hid {hidden} letters");

        Ok(())
    }

    /// Reads letters until a terminator shows up or the key runs out.
    pub fn unveil<C, K, W>(&self, carrier: &C, key: &mut KeyReader<K>, mut message: W) -> Result<()>
    where
        C: BitCarrier + ?Sized,
        K: BufRead,
        W: Write,
    {
        let mut code = 0u8;
        let mut bits = 0usize;
        let mut unveiled = 0usize;

        while let Some(entry) = key.next_entry() {
            let bit = carrier.get_bit(entry.pos(), entry.channel)?;
            code |= u8::from(bit) << bits;
            bits += 1;

            if bits == BITS_PER_LETTER {
                let Some(letter) = self.letters.decode(code) else {
                    debug!("terminator found after {unveiled} letters");
                    break;
                };
                message
                    .write_all(&[letter])
                    .map_err(|source| StegoError::MessageWrite { source })?;
                unveiled += 1;
                code = 0;
                bits = 0;
            }
        }

        message
            .flush()
            .map_err(|source| StegoError::MessageWrite { source })
    }

    fn hide_letter<C, K>(&self, carrier: &mut C, key: &mut KeyReader<K>, code: u8) -> Result<()>
    where
        C: BitCarrier + ?Sized,
        K: BufRead,
    {
        for i in 0..BITS_PER_LETTER {
            let entry = key.next_entry().ok_or(StegoError::KeyRead)?;
            carrier.put_bit(entry.pos(), entry.channel, (code >> i) & 1 == 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::test_utils::prepare_coordinate_image;
    use crate::bitmap::{BmpImage, Position, Size};
    use crate::stego::Channel;

    /// `count` key entries over all channels of all pixels, row by row
    fn linear_key(width: u32, count: usize) -> String {
        let mut key = String::new();
        for i in 0..count {
            let pixel = i / 3;
            let channel = ['B', 'G', 'R'][i % 3];
            key.push_str(&format!(
                "{} {} {}\n",
                pixel as u32 % width,
                pixel as u32 / width,
                channel
            ));
        }
        key
    }

    fn hide(image: &mut BmpImage, key: &str, message: &str) -> Result<()> {
        KeyedLsbCodec::default().hide(image, &mut KeyReader::new(key.as_bytes()), message.as_bytes())
    }

    fn unveil(image: &BmpImage, key: &str) -> Result<String> {
        let mut buf = Vec::new();
        KeyedLsbCodec::default().unveil(image, &mut KeyReader::new(key.as_bytes()), &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn should_hide_and_unveil_a_message() {
        let message = "HELLO, WORLD.";
        let key = linear_key(8, 5 * (message.len() + 1));
        let mut image = prepare_coordinate_image(8, 8);

        hide(&mut image, &key, message).unwrap();

        assert_eq!(unveil(&image, &key).unwrap(), message);
    }

    #[test]
    fn bits_are_hidden_least_significant_first() {
        let key = "0 0 R\n0 0 G\n0 0 B\n1 0 R\n1 0 G";
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();

        // C = 3 = 0b00011
        hide(&mut image, key, "C").unwrap();

        assert!(image.get_bit(Position::new(0, 0), Channel::Red).unwrap());
        assert!(image.get_bit(Position::new(0, 0), Channel::Green).unwrap());
        assert!(!image.get_bit(Position::new(0, 0), Channel::Blue).unwrap());
        assert!(!image.get_bit(Position::new(1, 0), Channel::Red).unwrap());
        assert!(!image.get_bit(Position::new(1, 0), Channel::Green).unwrap());
    }

    #[test]
    fn missing_room_for_the_terminator_is_not_an_error() {
        let key = linear_key(2, 7);
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();

        assert!(hide(&mut image, &key, "Z").is_ok());
    }

    #[test]
    fn terminator_outside_of_the_image_is_not_an_error() {
        let key = "0 0 R\n0 0 G\n0 0 B\n1 0 R\n1 0 G\n5 5 R\n";
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();

        assert!(hide(&mut image, key, "A").is_ok());
        assert_eq!(unveil(&image, &key[..key.len() - 6]).unwrap(), "A");
    }

    #[test]
    fn malformed_key_for_the_terminator_is_not_an_error() {
        let key = "0 0 R\n0 0 G\n0 0 B\n1 0 R\n1 0 G\n0 0 Q\n";
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();

        assert!(hide(&mut image, key, "A").is_ok());
        assert_eq!(unveil(&image, key).unwrap(), "A");
    }

    #[test]
    fn running_out_of_key_for_a_letter_fails() {
        let key = linear_key(2, 9);
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();

        assert!(matches!(
            hide(&mut image, &key, "AB"),
            Err(StegoError::KeyRead)
        ));
    }

    #[test]
    fn malformed_key_while_hiding_fails() {
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();

        assert!(matches!(
            hide(&mut image, "0 0 R\n0 0 Y\n", "A"),
            Err(StegoError::KeyRead)
        ));
    }

    #[test]
    fn key_outside_of_the_image_fails() {
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();

        assert!(matches!(
            hide(&mut image, "0 0 R\n2 0 R\n", "A"),
            Err(StegoError::IllegalArguments)
        ));
        assert!(matches!(
            unveil(&image, "0 0 R\n0 -1 R\n"),
            Err(StegoError::IllegalArguments)
        ));
    }

    #[test]
    fn unknown_letters_end_the_message() {
        let message = "AB\nCD";
        let key = linear_key(8, 5 * (message.len() + 1));
        let mut image = prepare_coordinate_image(8, 8);

        hide(&mut image, &key, message).unwrap();

        assert_eq!(unveil(&image, &key).unwrap(), "AB");
    }

    #[test]
    fn unveil_stops_when_the_key_runs_out() {
        let message = "ABCDEF";
        let key = linear_key(8, 5 * (message.len() + 1));
        let mut image = prepare_coordinate_image(8, 8);
        hide(&mut image, &key, message).unwrap();

        // 3 complete letters and a few bits of the 4th
        let short_key = linear_key(8, 17);
        assert_eq!(unveil(&image, &short_key).unwrap(), "ABC");
        assert_eq!(unveil(&image, "").unwrap(), "");
    }

    #[test]
    fn codes_outside_the_alphabet_end_the_message() {
        let mut image = BmpImage::new(Size::new(2, 2)).unwrap();
        let key = linear_key(2, 5);
        // 31 = 0b11111
        for entry in KeyReader::new(key.as_bytes()) {
            image.put_bit(entry.pos(), entry.channel, true).unwrap();
        }

        assert_eq!(unveil(&image, &key).unwrap(), "");
    }

    #[test]
    fn codec_can_use_its_own_letter_tables() {
        let letters = LetterCodec::new();
        let codec = KeyedLsbCodec::new(&letters);
        let key = linear_key(4, 15);
        let mut image = BmpImage::new(Size::new(4, 4)).unwrap();

        codec
            .hide(&mut image, &mut KeyReader::new(key.as_bytes()), &b"OK"[..])
            .unwrap();
        let mut unveiled = Vec::new();
        codec
            .unveil(&image, &mut KeyReader::new(key.as_bytes()), &mut unveiled)
            .unwrap();

        assert_eq!(unveiled, b"OK");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failing_message_writer_is_reported() {
        let key = linear_key(4, 10);
        let mut image = BmpImage::new(Size::new(4, 4)).unwrap();
        hide(&mut image, &key, "A").unwrap();

        let result = KeyedLsbCodec::default().unveil(
            &image,
            &mut KeyReader::new(key.as_bytes()),
            BrokenWriter,
        );
        assert!(matches!(result, Err(StegoError::MessageWrite { .. })));
    }
}
