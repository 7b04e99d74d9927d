//! On-disk headers of a Windows bitmap, little endian and packed.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// `BM`
pub const BMP_TYPE_TAG: u16 = 0x4d42;
pub const BI_RGB: u32 = 0;
pub const TRUECOLOR_BIT_COUNT: u16 = 24;

/// the 14 byte `BITMAPFILEHEADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub type_tag: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// byte offset of the pixel data from the start of the file
    pub pixel_data_offset: u32,
}

impl FileHeader {
    pub const SIZE: u32 = 14;

    pub fn read_from<R: Read>(r: &mut R) -> std::io::Result<Self> {
        Ok(Self {
            type_tag: r.read_u16::<LittleEndian>()?,
            file_size: r.read_u32::<LittleEndian>()?,
            reserved1: r.read_u16::<LittleEndian>()?,
            reserved2: r.read_u16::<LittleEndian>()?,
            pixel_data_offset: r.read_u32::<LittleEndian>()?,
        })
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_u16::<LittleEndian>(self.type_tag)?;
        w.write_u32::<LittleEndian>(self.file_size)?;
        w.write_u16::<LittleEndian>(self.reserved1)?;
        w.write_u16::<LittleEndian>(self.reserved2)?;
        w.write_u32::<LittleEndian>(self.pixel_data_offset)
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            type_tag: BMP_TYPE_TAG,
            file_size: 0,
            reserved1: 0,
            reserved2: 0,
            pixel_data_offset: FileHeader::SIZE + InfoHeader::SIZE,
        }
    }
}

/// the 40 byte `BITMAPINFOHEADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// negative for top-down row order
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    /// 0 is allowed for uncompressed images
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub const SIZE: u32 = 40;

    pub fn read_from<R: Read>(r: &mut R) -> std::io::Result<Self> {
        Ok(Self {
            header_size: r.read_u32::<LittleEndian>()?,
            width: r.read_i32::<LittleEndian>()?,
            height: r.read_i32::<LittleEndian>()?,
            planes: r.read_u16::<LittleEndian>()?,
            bit_count: r.read_u16::<LittleEndian>()?,
            compression: r.read_u32::<LittleEndian>()?,
            image_size: r.read_u32::<LittleEndian>()?,
            x_pixels_per_meter: r.read_i32::<LittleEndian>()?,
            y_pixels_per_meter: r.read_i32::<LittleEndian>()?,
            colors_used: r.read_u32::<LittleEndian>()?,
            colors_important: r.read_u32::<LittleEndian>()?,
        })
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_u32::<LittleEndian>(self.header_size)?;
        w.write_i32::<LittleEndian>(self.width)?;
        w.write_i32::<LittleEndian>(self.height)?;
        w.write_u16::<LittleEndian>(self.planes)?;
        w.write_u16::<LittleEndian>(self.bit_count)?;
        w.write_u32::<LittleEndian>(self.compression)?;
        w.write_u32::<LittleEndian>(self.image_size)?;
        w.write_i32::<LittleEndian>(self.x_pixels_per_meter)?;
        w.write_i32::<LittleEndian>(self.y_pixels_per_meter)?;
        w.write_u32::<LittleEndian>(self.colors_used)?;
        w.write_u32::<LittleEndian>(self.colors_important)
    }
}

impl Default for InfoHeader {
    fn default() -> Self {
        Self {
            header_size: InfoHeader::SIZE,
            width: 0,
            height: 0,
            planes: 1,
            bit_count: TRUECOLOR_BIT_COUNT,
            compression: BI_RGB,
            image_size: 0,
            // 72 dpi
            x_pixels_per_meter: 2835,
            y_pixels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn file_header_is_14_bytes_little_endian() {
        let header = FileHeader {
            file_size: 0x0102_0304,
            pixel_data_offset: 54,
            ..FileHeader::default()
        };
        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), FileHeader::SIZE as usize);
        assert_eq!(&buf[0..2], b"BM");
        assert_eq!(&buf[2..6], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buf[10..14], &[54, 0, 0, 0]);
    }

    #[test]
    fn info_header_keeps_the_sign_of_the_height() {
        let header = InfoHeader {
            width: 3,
            height: -2,
            image_size: 24,
            ..InfoHeader::default()
        };
        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), InfoHeader::SIZE as usize);
        assert_eq!(&buf[8..12], &(-2i32).to_le_bytes());

        let parsed = InfoHeader::read_from(&mut Cursor::new(buf)).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn short_header_is_an_unexpected_eof() {
        let err = FileHeader::read_from(&mut Cursor::new(vec![b'B', b'M', 0, 0])).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
