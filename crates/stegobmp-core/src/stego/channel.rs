use crate::bitmap::{BmpImage, Position};

use super::Result;

/// A color channel, its value is the offset of the color inside a stored pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Blue = 0,
    Green = 1,
    Red = 2,
}

impl Channel {
    pub const fn offset(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for Channel {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            'R' => Ok(Channel::Red),
            'G' => Ok(Channel::Green),
            'B' => Ok(Channel::Blue),
            other => Err(other),
        }
    }
}

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// Single bit access to the color channels of a carrier.
pub trait BitCarrier {
    /// replaces the least significant bit of a color channel
    fn put_bit(&mut self, pos: Position, channel: Channel, bit: bool) -> Result<()>;

    /// the least significant bit of a color channel
    fn get_bit(&self, pos: Position, channel: Channel) -> Result<bool>;
}

impl BitCarrier for BmpImage {
    fn put_bit(&mut self, pos: Position, channel: Channel, bit: bool) -> Result<()> {
        let pixel = self.pixel_mut(pos)?;
        pixel[channel.offset()].hide_bit(bit);

        Ok(())
    }

    fn get_bit(&self, pos: Position, channel: Channel) -> Result<bool> {
        let pixel = self.pixel(pos)?;

        Ok(pixel[channel.offset()] & 1 == 1)
    }
}
