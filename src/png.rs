/// Minimal PNG encoder
///
/// Emits 8-bit truecolor (color type 2) images with no interlacing and the
/// "none" scanline filter, which is all the icon generator needs. The chunk
/// container is assembled by hand; the IDAT payload goes through a real
/// zlib stream at maximum compression so the files stay small.
use anyhow::Result;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

use crate::raster::PixelGrid;

/// Fixed 8-byte file signature every PNG starts with.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;

/// Serialize `grid` into a complete PNG byte stream.
///
/// The grid must be rectangular (every row the same length); ragged grids
/// are not validated and produce corrupt output.
pub fn encode(grid: &PixelGrid) -> Result<Vec<u8>> {
    let width = grid.width() as u32;
    let height = grid.height() as u32;

    // IHDR: dimensions plus fixed format fields, big-endian
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(BIT_DEPTH);
    ihdr.push(COLOR_TYPE_RGB);
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method

    // Raw scanlines: filter byte 0 ("none") then RGB triples per row
    let mut raw = Vec::with_capacity(grid.height() * (1 + 3 * grid.width()));
    for row in grid.rows() {
        raw.push(0);
        for &(r, g, b) in row {
            raw.extend_from_slice(&[r, g, b]);
        }
    }

    let mut compressor = ZlibEncoder::new(Vec::new(), Compression::best());
    compressor.write_all(&raw)?;
    let idat = compressor.finish()?;

    let mut png = Vec::with_capacity(SIGNATURE.len() + idat.len() + 64);
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr);
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Append one chunk: big-endian data length, type tag, data, then the
/// CRC32 computed over tag and data.
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
}
