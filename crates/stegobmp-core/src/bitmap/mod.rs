//! 24-bit uncompressed Windows bitmaps.
//!
//! The pixel rows are held in one flat buffer in bottom-up order, as they are
//! stored on disk. All coordinates handed in by callers are top-down, the
//! conversion between both happens inside `BmpImage` only.
//!
//! ## Example of usage
//! ```rust
//! use std::io::Cursor;
//! use stegobmp_core::bitmap::{BmpImage, Position, Size};
//!
//! let mut image = BmpImage::new(Size::new(3, 2)).expect("Cannot create image");
//! image.pixel_mut(Position::new(2, 0)).unwrap()[2] = 0xff;
//!
//! let mut file = Cursor::new(Vec::new());
//! image.save(&mut file).expect("Cannot save image");
//!
//! let loaded = BmpImage::load(&mut file).expect("Cannot load image");
//! assert_eq!(loaded.pixel(Position::new(2, 0)).unwrap(), &[0, 0, 0xff]);
//! ```

pub mod header;
mod transform;

use std::fmt;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

use log::{debug, error};

pub use crate::error::BmpError;
pub use header::{FileHeader, InfoHeader};
pub use transform::Rotation;

use header::{BI_RGB, TRUECOLOR_BIT_COUNT};

pub type Result<T> = std::result::Result<T, BmpError>;

/// blue, green and red, in that order
pub type Bgr = [u8; 3];

pub const BYTES_PER_PIXEL: usize = 3;

/// top-down image coordinate, signed so that keys and regions can be validated as given
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// a region with its upper left corner at `pos`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: Position,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            pos: Position::new(x, y),
            size: Size::new(width, height),
        }
    }
}

/// Bytes of one pixel row including the padding to the next multiple of 4.
/// `None` if that does not fit into memory at all.
pub fn row_byte_size(width: u32) -> Option<usize> {
    let row = (width as usize).checked_mul(BYTES_PER_PIXEL)?;
    Some(row.checked_add(3)? & !3)
}

pub struct BmpImage {
    file_header: FileHeader,
    info_header: InfoHeader,
    size: Size,
    row_byte_size: usize,
    pixels: Vec<u8>,
}

impl fmt::Debug for BmpImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BmpImage")
            .field("size", &self.size)
            .field("row_byte_size", &self.row_byte_size)
            .field("content_byte_size", &self.pixels.len())
            .finish()
    }
}

impl BmpImage {
    /// creates a black image with default headers
    pub fn new(size: Size) -> Result<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(BmpError::IllegalArguments);
        }

        Self::with_headers(FileHeader::default(), InfoHeader::default(), size)
    }

    /// Reads a bitmap from the very beginning of `reader`.
    ///
    /// A declared image size of zero in the info header is replaced by the size
    /// computed from the dimensions, any other value is trusted and determines
    /// the byte size of a row.
    pub fn load<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        reader.rewind().map_err(read_error)?;

        let file_header = FileHeader::read_from(reader).map_err(read_error)?;
        let info_header = InfoHeader::read_from(reader).map_err(read_error)?;

        if info_header.bit_count != TRUECOLOR_BIT_COUNT {
            return Err(invalid_data(format!(
                "only 24-bit images are supported, found {} bits per pixel",
                info_header.bit_count
            )));
        }
        if info_header.compression != BI_RGB {
            return Err(invalid_data("compressed images are not supported"));
        }
        let width = u32::try_from(info_header.width)
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| invalid_data("image width must be positive"))?;
        let height = info_header.height.unsigned_abs();
        if height == 0 {
            return Err(invalid_data("image height must not be zero"));
        }
        let size = Size::new(width, height);

        let min_row_byte_size = row_byte_size(width).ok_or(BmpError::MemoryAllocation)?;
        let content_byte_size = match info_header.image_size {
            0 => min_row_byte_size
                .checked_mul(height as usize)
                .ok_or(BmpError::MemoryAllocation)?,
            declared => declared as usize,
        };
        let row_byte_size = content_byte_size / height as usize;
        if row_byte_size < width as usize * BYTES_PER_PIXEL {
            return Err(invalid_data("declared image size is too small for its dimensions"));
        }

        // a declared size beyond the end of the stream must not be allocated
        let stream_len = reader.seek(SeekFrom::End(0)).map_err(read_error)?;
        let available = stream_len.saturating_sub(u64::from(file_header.pixel_data_offset));
        if content_byte_size as u64 > available {
            return Err(read_error(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("{content_byte_size} bytes of pixel data declared, {available} present"),
            )));
        }

        let mut pixels = alloc_pixels(content_byte_size)?;
        reader
            .seek(SeekFrom::Start(u64::from(file_header.pixel_data_offset)))
            .map_err(read_error)?;
        reader.read_exact(&mut pixels).map_err(read_error)?;
        // bytes behind the last complete row belong to no pixel
        pixels.truncate(row_byte_size * height as usize);

        debug!(
            "loaded bitmap {}x{} ({} bytes per row, stored {})",
            width,
            height,
            row_byte_size,
            if info_header.height < 0 {
                "top-down"
            } else {
                "bottom-up"
            }
        );

        Ok(Self {
            file_header,
            info_header,
            size,
            row_byte_size,
            pixels,
        })
    }

    /// Writes the bitmap to the very beginning of `writer`, pixel data right after the headers.
    ///
    /// Offsets, sizes and dimensions in the headers are recomputed, rows are always
    /// written bottom-up with a positive height.
    pub fn save<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        writer.rewind().map_err(write_error)?;

        let headers_size = FileHeader::SIZE + InfoHeader::SIZE;
        let content_byte_size =
            u32::try_from(self.pixels.len()).map_err(|_| too_large_to_write())?;
        let file_header = FileHeader {
            pixel_data_offset: headers_size,
            file_size: headers_size
                .checked_add(content_byte_size)
                .ok_or_else(too_large_to_write)?,
            ..self.file_header
        };
        let info_header = InfoHeader {
            header_size: InfoHeader::SIZE,
            width: i32::try_from(self.size.width).map_err(|_| too_large_to_write())?,
            height: i32::try_from(self.size.height).map_err(|_| too_large_to_write())?,
            image_size: content_byte_size,
            ..self.info_header
        };

        file_header.write_to(writer).map_err(write_error)?;
        info_header.write_to(writer).map_err(write_error)?;
        writer.write_all(&self.pixels).map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        debug!(
            "saved bitmap {}x{} ({} bytes)",
            self.size.width, self.size.height, file_header.file_size
        );

        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn row_byte_size(&self) -> usize {
        self.row_byte_size
    }

    pub fn content_byte_size(&self) -> usize {
        self.pixels.len()
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    /// the pixel at a top-down position
    pub fn pixel(&self, pos: Position) -> Result<&Bgr> {
        let offset = self.pixel_offset(pos)?;
        <&Bgr>::try_from(&self.pixels[offset..offset + BYTES_PER_PIXEL])
            .map_err(|_| BmpError::IllegalArguments)
    }

    /// the pixel at a top-down position, for modification
    pub fn pixel_mut(&mut self, pos: Position) -> Result<&mut Bgr> {
        let offset = self.pixel_offset(pos)?;
        <&mut Bgr>::try_from(&mut self.pixels[offset..offset + BYTES_PER_PIXEL])
            .map_err(|_| BmpError::IllegalArguments)
    }

    /// Allocates an empty image of `size` that carries over the headers of `self`.
    pub(crate) fn derive_with_size(&self, size: Size) -> Result<Self> {
        Self::with_headers(self.file_header, self.info_header, size)
    }

    fn with_headers(file_header: FileHeader, info_header: InfoHeader, size: Size) -> Result<Self> {
        let row_byte_size = row_byte_size(size.width).ok_or(BmpError::MemoryAllocation)?;
        let content_byte_size = row_byte_size
            .checked_mul(size.height as usize)
            .ok_or(BmpError::MemoryAllocation)?;

        Ok(Self {
            file_header,
            info_header,
            size,
            row_byte_size,
            pixels: alloc_pixels(content_byte_size)?,
        })
    }

    /// The pixel bytes of the top-down row `y`, without padding.
    ///
    /// `y` must be smaller than the height.
    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let start = self.row_start(y);
        &self.pixels[start..start + self.size.width as usize * BYTES_PER_PIXEL]
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.row_start(y);
        let end = start + self.size.width as usize * BYTES_PER_PIXEL;
        &mut self.pixels[start..end]
    }

    pub(crate) fn pixel_buffer(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixel_buffer_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn pixel_offset(&self, pos: Position) -> Result<usize> {
        let (Ok(x), Ok(y)) = (u32::try_from(pos.x), u32::try_from(pos.y)) else {
            return Err(BmpError::IllegalArguments);
        };
        if x >= self.size.width || y >= self.size.height {
            return Err(BmpError::IllegalArguments);
        }

        Ok(self.row_start(y) + x as usize * BYTES_PER_PIXEL)
    }

    /// top-down row to the offset of the bottom-up stored row
    fn row_start(&self, y: u32) -> usize {
        let stored_row = self.size.height - y - 1;
        stored_row as usize * self.row_byte_size
    }
}

fn alloc_pixels(len: usize) -> Result<Vec<u8>> {
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(len).map_err(|e| {
        error!("Cannot allocate {len} bytes of pixel data: {e}");
        BmpError::MemoryAllocation
    })?;
    pixels.resize(len, 0);

    Ok(pixels)
}

fn read_error(source: std::io::Error) -> BmpError {
    error!("Error reading bitmap: {source}");
    BmpError::FileRead { source }
}

fn write_error(source: std::io::Error) -> BmpError {
    error!("Error writing bitmap: {source}");
    BmpError::FileWrite { source }
}

fn invalid_data<E>(reason: E) -> BmpError
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    read_error(std::io::Error::new(ErrorKind::InvalidData, reason))
}

fn too_large_to_write() -> BmpError {
    write_error(std::io::Error::new(
        ErrorKind::InvalidInput,
        "image is too large for a bitmap header",
    ))
}
