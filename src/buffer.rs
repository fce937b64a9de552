//! Image buffers and 2x2 block tiling
//!
//! [`ImageBuffer`] owns a contiguous row-major sample array and carries its
//! own dimensions, so call sites never repeat `width * height` arithmetic.
//! [`BlockGrid`] turns the 2x2 tiling used by 4:2:0 subsampling into an
//! iterator that hands out the meta index and the 4 source indices per
//! block, keeping the even-dimension invariant enforceable at one boundary.

use crate::error::PipelineError;

/// Validated image dimensions
///
/// Construction is the single validation point for the pipeline: both
/// dimensions must be positive and even so the image tiles exactly into
/// 2x2 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Validate width and height for 4:2:0 processing
    pub fn new(width: usize, height: usize) -> Result<Self, PipelineError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(PipelineError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count (`width * height`)
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Dimensions of the meta-sample grid: half the width and height
    ///
    /// Not revalidated: half of an even dimension may be odd, and the
    /// meta grid is never tiled again.
    #[inline]
    pub const fn half(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }
}

/// Owned row-major sample buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> ImageBuffer<T> {
    /// Allocate a buffer of `width * height` default-valued samples
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Build a buffer from an existing sample slice
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`. Callers validate lengths
    /// at pipeline entry before any buffer is built.
    pub fn from_slice(width: usize, height: usize, data: &[T]) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "buffer size mismatch: expected {}, got {}",
            width * height,
            data.len()
        );
        Self {
            width,
            height,
            data: data.to_vec(),
        }
    }

    /// Buffer width in samples
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in samples
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the samples as a flat row-major slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the samples
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the buffer, returning the sample vector
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> std::ops::Index<usize> for ImageBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> std::ops::IndexMut<usize> for ImageBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// One 2x2 block of a full-resolution image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Row-major index into the half-resolution meta grid
    pub meta_index: usize,
    /// Full-resolution source indices in raster order:
    /// top-left, top-right, bottom-left, bottom-right
    pub source: [usize; 4],
}

/// Row-major iteration over the 2x2 blocks of an image
///
/// For block-row `i` in `[0, height/2)` and block-col `j` in
/// `[0, width/2)`, the source block origin is `(2i, 2j)`.
#[derive(Debug, Clone, Copy)]
pub struct BlockGrid {
    width: usize,
    height: usize,
}

impl BlockGrid {
    /// Tile validated dimensions into 2x2 blocks
    pub fn new(dims: Dimensions) -> Self {
        Self {
            width: dims.width(),
            height: dims.height(),
        }
    }

    /// Number of blocks (`width/2 * height/2`)
    #[inline]
    pub fn block_count(&self) -> usize {
        (self.width / 2) * (self.height / 2)
    }

    /// Iterate over all blocks in meta raster order
    pub fn blocks(&self) -> impl Iterator<Item = Block> {
        let width = self.width;
        let half_width = self.width / 2;
        let half_height = self.height / 2;

        (0..half_height).flat_map(move |i| {
            (0..half_width).map(move |j| {
                let origin = i * 2 * width + j * 2;
                Block {
                    meta_index: i * half_width + j,
                    source: [origin, origin + 1, origin + width, origin + width + 1],
                }
            })
        })
    }
}
