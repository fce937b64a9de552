//! Container and raw stream I/O
//!
//! External collaborators of the pipeline: a BMP header reader that
//! validates the signature and reports decoded width/height, and
//! readers/writers for headerless raw RGB streams (packed `width * height`
//! triples, row-major, no padding, no color profile). The core transform
//! never inspects container bytes; it receives width/height as plain
//! integers.

use bytes::Buf;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::pixel::RgbPixel;

/// Byte length of the BMP header fields this reader consumes
pub const BMP_HEADER_LEN: usize = 30;

/// Errors from the container/raw I/O layer
///
/// These never reach the core pipeline.
#[derive(Debug, thiserror::Error)]
pub enum BmpError {
    /// First two bytes are not `"BM"`
    #[error("not a BMP file: signature {0:02x?} (expected \"BM\")")]
    InvalidSignature([u8; 2]),

    /// File ends before the header fields do
    #[error("truncated BMP header: expected {expected} bytes, got {actual}")]
    TruncatedHeader {
        /// Bytes required for the header fields
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decoded BMP header fields (all little-endian on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    /// Size of the BMP file in bytes
    pub file_size: u32,
    /// Offset from the start of the file to the pixel data
    pub data_offset: u32,
    /// Size of the DIB header
    pub header_size: u32,
    /// Image width in pixels
    pub width: i32,
    /// Image height in pixels
    pub height: i32,
    /// Number of color planes
    pub planes: u16,
    /// Bits per pixel
    pub bits_per_pixel: u16,
}

impl BmpHeader {
    /// Parse the header from the leading bytes of a BMP file
    ///
    /// Only the signature is validated; all other fields are reported to
    /// the caller as decoded.
    pub fn parse(bytes: &[u8]) -> Result<Self, BmpError> {
        if bytes.len() < BMP_HEADER_LEN {
            return Err(BmpError::TruncatedHeader {
                expected: BMP_HEADER_LEN,
                actual: bytes.len(),
            });
        }

        let mut buf = bytes;
        let signature = [buf.get_u8(), buf.get_u8()];
        if &signature != b"BM" {
            return Err(BmpError::InvalidSignature(signature));
        }

        let file_size = buf.get_u32_le();
        let _reserved = buf.get_u32_le();
        let data_offset = buf.get_u32_le();
        let header_size = buf.get_u32_le();
        let width = buf.get_i32_le();
        let height = buf.get_i32_le();
        let planes = buf.get_u16_le();
        let bits_per_pixel = buf.get_u16_le();

        Ok(Self {
            file_size,
            data_offset,
            header_size,
            width,
            height,
            planes,
            bits_per_pixel,
        })
    }

    /// Read and parse the header from the start of a reader
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, BmpError> {
        let mut bytes = [0u8; BMP_HEADER_LEN];
        let mut filled = 0;
        while filled < BMP_HEADER_LEN {
            let n = reader.read(&mut bytes[filled..])?;
            if n == 0 {
                return Err(BmpError::TruncatedHeader {
                    expected: BMP_HEADER_LEN,
                    actual: filled,
                });
            }
            filled += n;
        }
        Self::parse(&bytes)
    }

    /// Open a BMP file and read its header
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BmpError> {
        let mut file = File::open(path)?;
        Self::read_from(&mut file)
    }
}

/// Read a headerless raw RGB stream of exactly `pixel_count` triples
pub fn read_raw_rgb<P: AsRef<Path>>(path: P, pixel_count: usize) -> Result<Vec<RgbPixel>, BmpError> {
    let mut file = File::open(path)?;
    let mut bytes = vec![0u8; pixel_count * 3];
    file.read_exact(&mut bytes)?;

    Ok(bytes
        .chunks_exact(3)
        .map(|c| RgbPixel::new(c[0], c[1], c[2]))
        .collect())
}

/// Write pixels as a headerless raw RGB stream (`width * height * 3` bytes)
pub fn write_raw_rgb<P: AsRef<Path>>(path: P, pixels: &[RgbPixel]) -> Result<(), BmpError> {
    let mut bytes = Vec::with_capacity(pixels.len() * 3);
    for p in pixels {
        bytes.extend_from_slice(&[p.r, p.g, p.b]);
    }

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}
