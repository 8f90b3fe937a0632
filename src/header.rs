//! Source-embeddable icon artifact.
//!
//! The persisted unit is a C header declaring the packed bitmap bytes and a
//! `BitmapIcon` aggregate describing them. Consumers carry the matching
//! struct definition:
//!
//! ```c
//! typedef struct {
//!     uint8_t width;
//!     uint8_t height;
//!     uint8_t bpp;
//!     uint8_t *bitmap;
//! } BitmapIcon;
//! ```

use crate::codec::BitWidth;
use crate::error::{Error, Result};

/// Packed icon bitmap plus the metadata needed to interpret it.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDescriptor {
    width: u32,
    height: u32,
    bpp: BitWidth,
    data: Vec<u8>,
}

impl IconDescriptor {
    /// Bundle packed bytes with their dimensions and bit depth.
    ///
    /// The buffer length must be exactly `ceil(width * height * bpp / 8)`.
    pub fn new(width: u32, height: u32, bpp: BitWidth, data: Vec<u8>) -> Result<Self> {
        let expected = bpp.packed_len(width as usize * height as usize);
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(IconDescriptor {
            width,
            height,
            bpp,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bpp(&self) -> BitWidth {
        self.bpp
    }

    /// The packed bitmap bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels the bitmap encodes.
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Render the descriptor as C header text named `name`.
///
/// The layout is the embedded-icon convention: an include guard derived from
/// the uppercased name, the packed bytes as a `uint8_t` array formatted
/// `0x%02x` and wrapped 16 to a line, and a `BitmapIcon` aggregate
/// referencing the array.
pub fn render(icon: &IconDescriptor, name: &str) -> String {
    let guard = format!("__{}_H__", name.to_uppercase());

    let mut out = String::new();
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n", guard));
    out.push('\n');
    out.push_str("#include \"BitmapIcon.h\"\n");
    out.push('\n');

    out.push_str(&format!("static uint8_t {}_bitmap[] = {{\n", name));
    for (i, byte) in icon.data().iter().enumerate() {
        if i % 16 == 0 {
            out.push_str("    ");
        }
        out.push_str(&format!("0x{:02x}", byte));
        if i + 1 == icon.data().len() {
            break;
        }
        out.push_str(", ");
        if i % 16 == 15 {
            out.push('\n');
        }
    }
    out.push_str("\n};\n");
    out.push('\n');

    out.push_str(&format!("static BitmapIcon {} = {{\n", name));
    out.push_str(&format!(
        "    {}, {}, {}, {}_bitmap\n",
        icon.width(),
        icon.height(),
        icon.bpp().bits(),
        name
    ));
    out.push_str("};\n");

    out.push('\n');
    out.push_str(&format!("#endif // {}\n", guard));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width4() -> BitWidth {
        BitWidth::new(4).unwrap()
    }

    #[test]
    fn test_descriptor_validates_length() {
        // 4x4 pixels at 4 bpp pack into exactly 8 bytes.
        assert!(IconDescriptor::new(4, 4, width4(), vec![0; 8]).is_ok());
        assert_eq!(
            IconDescriptor::new(4, 4, width4(), vec![0; 7]),
            Err(Error::SizeMismatch {
                expected: 8,
                actual: 7
            })
        );

        // 3 pixels at 2 bpp still need one full byte.
        let w2 = BitWidth::new(2).unwrap();
        assert!(IconDescriptor::new(3, 1, w2, vec![0; 1]).is_ok());
    }

    #[test]
    fn test_header_layout() {
        let bpp = BitWidth::new(8).unwrap();
        let icon = IconDescriptor::new(4, 2, bpp, (0..8).collect()).unwrap();
        let text = render(&icon, "arrow");

        assert!(text.starts_with("#ifndef __ARROW_H__\n#define __ARROW_H__\n"));
        assert!(text.contains("#include \"BitmapIcon.h\"\n"));
        assert!(text.contains("static uint8_t arrow_bitmap[] = {\n"));
        assert!(text.contains("    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07\n};\n"));
        assert!(text.contains("static BitmapIcon arrow = {\n    4, 2, 8, arrow_bitmap\n};\n"));
        assert!(text.ends_with("#endif // __ARROW_H__\n"));
    }

    #[test]
    fn test_header_wraps_at_16_bytes() {
        let bpp = BitWidth::new(8).unwrap();
        let icon = IconDescriptor::new(17, 1, bpp, (0..17).collect()).unwrap();
        let text = render(&icon, "strip");

        // 16 entries per line, the 17th starts a fresh indented line.
        assert!(text.contains("0x0f, \n    0x10\n};\n"));
    }

    #[test]
    fn test_header_empty_bitmap() {
        let bpp = BitWidth::new(1).unwrap();
        let icon = IconDescriptor::new(0, 0, bpp, Vec::new()).unwrap();
        let text = render(&icon, "blank");
        assert!(text.contains("static uint8_t blank_bitmap[] = {\n\n};\n"));
    }
}
