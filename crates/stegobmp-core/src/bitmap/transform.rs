use super::{BmpError, BmpImage, Rect, Result, Size, BYTES_PER_PIXEL};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// same as cloning the image
    #[default]
    None,
    Clockwise90,
}

impl TryFrom<u8> for Rotation {
    type Error = BmpError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Rotation::None),
            1 => Ok(Rotation::Clockwise90),
            _ => Err(BmpError::IllegalArguments),
        }
    }
}

/// Geometric transforms, the source image stays untouched and a new image is returned.
impl BmpImage {
    /// copies the image into a freshly allocated one
    pub fn try_clone(&self) -> Result<Self> {
        let mut dst = self.derive_with_size(self.size)?;

        if dst.row_byte_size == self.row_byte_size {
            dst.pixel_buffer_mut().copy_from_slice(self.pixel_buffer());
        } else {
            // a declared image size may have widened the source rows
            for y in 0..self.size.height {
                dst.row_mut(y).copy_from_slice(self.row(y));
            }
        }

        Ok(dst)
    }

    /// Cuts out `region`, given in top-down coordinates.
    ///
    /// Fails with [`BmpError::IllegalArguments`] if `region` reaches beyond the image,
    /// and also if it is empty, as a bitmap needs at least one pixel in each direction.
    pub fn crop(&self, region: Rect) -> Result<Self> {
        let Rect { pos, size } = region;
        let (Ok(left), Ok(top)) = (u32::try_from(pos.x), u32::try_from(pos.y)) else {
            return Err(BmpError::IllegalArguments);
        };
        if size.width == 0
            || size.height == 0
            || u64::from(left) + u64::from(size.width) > u64::from(self.size.width)
            || u64::from(top) + u64::from(size.height) > u64::from(self.size.height)
        {
            return Err(BmpError::IllegalArguments);
        }

        let mut dst = self.derive_with_size(size)?;
        let start = left as usize * BYTES_PER_PIXEL;
        let end = start + size.width as usize * BYTES_PER_PIXEL;
        for y in 0..size.height {
            dst.row_mut(y).copy_from_slice(&self.row(top + y)[start..end]);
        }

        Ok(dst)
    }

    pub fn rotate(&self, rotation: Rotation) -> Result<Self> {
        match rotation {
            Rotation::None => self.try_clone(),
            Rotation::Clockwise90 => self.rotate_clockwise_90(),
        }
    }

    /// Pixel `(x, y)` of the result is pixel `(y, height - 1 - x)` of the source.
    fn rotate_clockwise_90(&self) -> Result<Self> {
        let rotated = Size::new(self.size.height, self.size.width);
        let mut dst = self.derive_with_size(rotated)?;

        for y in 0..rotated.height {
            let src_column = y as usize * BYTES_PER_PIXEL;
            let dst_row = dst.row_mut(y);
            for (x, dst_pixel) in dst_row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let src_row = self.row(self.size.height - 1 - x as u32);
                dst_pixel.copy_from_slice(&src_row[src_column..src_column + BYTES_PER_PIXEL]);
            }
        }

        Ok(dst)
    }
}
