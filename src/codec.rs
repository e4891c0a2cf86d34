//! PNG boundary: decode captures into [`Bitmap`]s and encode results back.

use crate::bitmap::Bitmap;
use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};

/// Decode any 8/16-bit PNG into an RGBA8 bitmap.
pub fn decode_png(bytes: &[u8]) -> Result<Bitmap> {
    let mut decoder = Decoder::new(bytes);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let raw = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match info.color_type {
        ColorType::Rgba => raw.to_vec(),
        ColorType::Rgb => raw
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        ColorType::Grayscale => raw.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        ColorType::GrayscaleAlpha => raw
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        ColorType::Indexed => {
            return Err(Error::CodecError("indexed PNG was not expanded".into()));
        }
    };

    Bitmap::new(info.width, info.height, rgba)
}

/// Encode a bitmap as an RGBA8 PNG.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, bitmap.width(), bitmap.height());
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(bitmap.data())?;
        writer.finish()?;
    }
    Ok(out)
}

/// PNG-encode and base64 the bitmap for embedding in a JSON report.
pub fn encode_png_base64(bitmap: &Bitmap) -> Result<String> {
    Ok(STANDARD.encode(encode_png(bitmap)?))
}
