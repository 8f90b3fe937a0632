//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Artifact written for the converted icon
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    /// C header with the packed bitmap and a BitmapIcon descriptor
    #[default]
    Header,
    /// Decoded grayscale preview as PNG
    Png,
    /// Decoded grayscale preview as BMP
    Bmp,
}

impl OutputFormat {
    /// File extension for the artifact this format writes.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Header => "h",
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "svgicon")]
#[command(version, about = "SVG to packed bitmap icon converter", long_about = None)]
pub struct Args {
    /// Icon width in pixels
    #[arg(long, default_value_t = 32)]
    pub width: u32,

    /// Icon height in pixels
    #[arg(long, default_value_t = 32)]
    pub height: u32,

    /// Bits per pixel (1, 2, 4, 8)
    #[arg(short, long, default_value_t = 8)]
    pub bpp: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Header)]
    pub format: OutputFormat,

    /// Input SVG file
    pub svg: PathBuf,

    /// Output name: file name stem and C identifier for the header artifact
    pub name: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
