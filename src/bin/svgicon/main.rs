//! svgicon - SVG to packed bitmap icon converter
//!
//! Pipeline: SVG -> rasterize to 8-bit coverage samples -> quantize to N-bit
//! codes -> pack LSB-first -> emit a C header artifact, or decode back for a
//! PNG/BMP preview of the quantized result.

mod args;

use args::{Args, OutputFormat};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use svgicon::codec::{self, BitWidth};
use svgicon::header::{self, IconDescriptor};
use svgicon::raster;

fn main() -> Result<(), String> {
    let args = Args::parse();

    // Reject invalid configuration before any work happens; a failure here
    // exits non-zero with no partial artifact written.
    let bpp = BitWidth::new(args.bpp).map_err(|e| e.to_string())?;
    if args.width == 0 || args.height == 0 {
        return Err(format!(
            "Invalid dimensions {}x{}: width and height must be non-zero",
            args.width, args.height
        ));
    }

    if args.verbose {
        eprintln!("Loading: {}", args.svg.display());
    }
    let samples = raster::rasterize(&args.svg, args.width, args.height)?;

    let packed = codec::encode(&samples, bpp);
    if args.verbose {
        eprintln!(
            "  {} samples packed into {} bytes at {} bpp",
            samples.len(),
            packed.len(),
            bpp
        );
    }

    let icon =
        IconDescriptor::new(args.width, args.height, bpp, packed).map_err(|e| e.to_string())?;

    let path = PathBuf::from(format!("{}.{}", args.name, args.format.extension()));
    match args.format {
        OutputFormat::Header => write_header(&icon, &args.name, &path)?,
        OutputFormat::Png | OutputFormat::Bmp => write_preview(&icon, &path)?,
    }
    if args.verbose {
        eprintln!("  Written {}", path.display());
    }

    Ok(())
}

/// Render the icon as a C header and write it to `path`.
fn write_header(icon: &IconDescriptor, name: &str, path: &Path) -> Result<(), String> {
    let text = header::render(icon, name);
    let mut file =
        File::create(path).map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Decode the packed bitmap back to 8-bit samples and write a single-channel
/// preview image. The sink receives the dequantized buffer, never the packed
/// form, so the preview shows exactly what the quantization kept.
fn write_preview(icon: &IconDescriptor, path: &Path) -> Result<(), String> {
    let samples =
        codec::decode(icon.data(), icon.bpp(), icon.sample_count()).map_err(|e| e.to_string())?;
    let img = image::GrayImage::from_raw(icon.width(), icon.height(), samples)
        .ok_or_else(|| "Decoded sample count does not match the icon dimensions".to_string())?;
    img.save(path)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
