//! SVG to packed bitmap icon converter.
//!
//! Converts vector icons into compact fixed-bit-width grayscale bitmaps that
//! can be embedded in C source form. The core is a sub-byte packing codec
//! with integrated lossy quantization:
//!
//! - `bitstream`: LSB-first packing and unpacking of fixed-width codes
//! - `quant`: lossy 8-bit to N-bit mapping with exact integer rescaling
//! - `codec`: validated bit widths and whole-buffer encode/decode
//! - `header`: the source-embeddable `BitmapIcon` artifact
//! - `raster`: SVG input boundary producing 8-bit coverage samples
//!
//! Pipeline: SVG -> rasterize -> quantize and pack -> header artifact, with
//! the symmetric unpack-and-dequantize path for PNG/BMP preview output.

pub mod bitstream;
pub mod codec;
pub mod error;
pub mod header;
pub mod quant;
pub mod raster;

pub use bitstream::{BitPacker, BitUnpacker};
pub use codec::BitWidth;
pub use error::{Error, Result};
pub use header::IconDescriptor;
pub use quant::Quantizer;
