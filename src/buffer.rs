/*!
The iteration buffer handed to colouring and texture upload.

[`bytemuck`](https://docs.rs/bytemuck/latest/bytemuck/) gives the byte view used for
uploads, so callers never cast the counts themselves.
*/

use std::ops::{Deref, DerefMut};

use crate::{
    error::{Error, Result},
    screen,
};

/// Row-major iteration counts for a fixed grid. Index `i` is pixel `(i % width, i / width)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationBuffer {
    size: screen::Size,
    counts: Vec<u32>,
}

impl IterationBuffer {
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            counts: vec![0; size.area()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn row(&self, y: u32) -> &[u32] {
        let width = self.size.width as usize;
        let start = y as usize * width;
        &self.counts[start..start + width]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.counts)
    }

    /// Replicate every count into a `factor`×`factor` block.
    pub fn upscaled(&self, factor: u32) -> Result<IterationBuffer> {
        if factor == 0 {
            return Err(Error::InvalidUpscale);
        }
        let (width, height) = self
            .size
            .width
            .checked_mul(factor)
            .zip(self.size.height.checked_mul(factor))
            .ok_or(Error::InvalidUpscale)?;
        let size = screen::Size::new(width, height);
        let factor = factor as usize;
        let mut counts = Vec::with_capacity(size.area());
        for y in 0..self.size.height {
            let row = self.row(y);
            for _ in 0..factor {
                for &count in row {
                    counts.extend(std::iter::repeat(count).take(factor));
                }
            }
        }
        debug_assert_eq!(counts.len(), size.area());
        Ok(IterationBuffer { size, counts })
    }
}

impl Deref for IterationBuffer {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.counts
    }
}

impl DerefMut for IterationBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> IterationBuffer {
        let mut buffer = IterationBuffer::new(screen::Size::new(2, 2));
        buffer.copy_from_slice(&[1, 2, 3, 4]);
        buffer
    }

    #[test]
    fn rows_are_contiguous() {
        let buffer = two_by_two();
        assert_eq!(buffer.row(0), &[1, 2]);
        assert_eq!(buffer.row(1), &[3, 4]);
    }

    #[test]
    fn upscale_replicates_blocks() {
        let upscaled = two_by_two().upscaled(2).unwrap();
        assert_eq!(upscaled.size(), screen::Size::new(4, 4));
        assert_eq!(
            &*upscaled,
            &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
        assert_eq!(two_by_two().upscaled(1).unwrap(), two_by_two());
        assert!(two_by_two().upscaled(0).is_err());
    }

    #[test]
    fn upscale_that_overflows_the_size_is_rejected() {
        assert!(matches!(
            two_by_two().upscaled(u32::MAX),
            Err(Error::InvalidUpscale)
        ));
    }

    #[test]
    fn byte_view_covers_every_count() {
        let buffer = two_by_two();
        assert_eq!(buffer.as_bytes().len(), 4 * std::mem::size_of::<u32>());
        assert_eq!(&buffer.as_bytes()[..4], &1u32.to_ne_bytes());
    }
}
