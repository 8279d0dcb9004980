//! PNG export of generated matrices

use crate::io::error::{AlgorithmError, Result, WithPath, invalid_input, invalid_parameter};
use crate::model::{ColourMatrix, Inventory};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` into RGBA bytes
///
/// The leading `#` is optional. Alpha defaults to opaque.
pub fn parse_hex_colour(colour_id: &str) -> Option<[u8; 4]> {
    let hex = colour_id.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |start: usize, len: usize| -> Option<u8> {
        let digits = hex.get(start..start + len)?;
        let value = u8::from_str_radix(digits, 16).ok()?;
        // Short form repeats each digit (#abc == #aabbcc)
        Some(if len == 1 { value * 17 } else { value })
    };

    match hex.len() {
        3 => Some([channel(0, 1)?, channel(1, 1)?, channel(2, 1)?, 255]),
        6 => Some([channel(0, 2)?, channel(2, 2)?, channel(4, 2)?, 255]),
        8 => Some([
            channel(0, 2)?,
            channel(2, 2)?,
            channel(4, 2)?,
            channel(6, 2)?,
        ]),
        _ => None,
    }
}

/// RGBA colour for every inventory entry, in index order
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidColour`] for the first colour id that is
/// not a hex value
pub fn palette_from_inventory(inventory: &Inventory) -> Result<Vec<[u8; 4]>> {
    inventory
        .entries()
        .iter()
        .map(|entry| {
            parse_hex_colour(&entry.colour_id).ok_or_else(|| AlgorithmError::InvalidColour {
                colour_id: entry.colour_id.clone(),
            })
        })
        .collect()
}

/// Pixel length of `cells` squares of `cell_size`, or `None` past `u32`
fn pixel_extent(cells: usize, cell_size: u32) -> Option<u32> {
    u32::try_from(cells).ok()?.checked_mul(cell_size)
}

/// Export the matrix as a PNG with one `cell_size` square per panel
///
/// Rows of the matrix run top to bottom, columns left to right.
///
/// # Errors
///
/// Returns an error if:
/// - The matrix has no cells, `cell_size` is zero or the image size overflows `u32`
/// - A colour index is out of bounds for the palette
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_matrix_as_png(
    matrix: &ColourMatrix,
    palette: &[[u8; 4]],
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    if matrix.is_empty() {
        return Err(invalid_input(&"Matrix has no cells to export"));
    }
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least one pixel",
        ));
    }

    let too_large = || invalid_parameter("cell_size", &cell_size, &"image dimensions overflow");
    let width = pixel_extent(matrix.minor_count(), cell_size).ok_or_else(too_large)?;
    let height = pixel_extent(matrix.major_count(), cell_size).ok_or_else(too_large)?;
    let mut img = ImageBuffer::new(width, height);

    for ((row, col), &colour) in matrix.as_array().indexed_iter() {
        let rgba = palette
            .get(colour)
            .copied()
            .ok_or(AlgorithmError::InvalidColourIndex {
                index: colour,
                colour_count: palette.len(),
            })?;

        let origin_x = col as u32 * cell_size;
        let origin_y = row as u32 * cell_size;
        for dy in 0..cell_size {
            for dx in 0..cell_size {
                img.put_pixel(origin_x + dx, origin_y + dy, Rgba(rgba));
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
