use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Int32Array;

pub mod clipper;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod utils;

use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_offset::{ClipperOffset, OffsetOptions};
use crate::clipper::enums::{ClipType, EndType, JoinType, PolyFillType, PolyType};
use crate::clipper::utils as clipper_utils;
use crate::error::{ConfigurationError, Result};
use crate::geometry::point::Point;
use crate::geometry::Paths64;

/// Installs the console log sink and, when enabled, the panic hook.
#[wasm_bindgen]
pub fn init_logger() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if utils::wasm_logger::init(log::LevelFilter::Debug).is_err() {
        wasm_log!("logger already installed");
    }
}

/// Reads the packed layout `[count, offset_0 .. offset_n-1, x0, y0, x1, y1, ...]`,
/// where offsets index the data section and each path runs to the next offset.
pub fn unpack_paths(buff: &[i32]) -> Result<Paths64> {
    let count = match buff.first() {
        Some(&count) if count >= 0 => count as usize,
        Some(_) => return Err(ConfigurationError::MalformedBuffer.into()),
        None => return Ok(Paths64::new()),
    };
    let header_len = 1 + count;
    if buff.len() < header_len {
        return Err(ConfigurationError::MalformedBuffer.into());
    }

    let data = &buff[header_len..];
    let mut result = Paths64::with_capacity(count);
    for i in 0..count {
        let start = usize::try_from(buff[1 + i]).map_err(|_| ConfigurationError::MalformedBuffer)?;
        let end = if i + 1 < count {
            usize::try_from(buff[2 + i]).map_err(|_| ConfigurationError::MalformedBuffer)?
        } else {
            data.len()
        };
        if start > end || end > data.len() || (end - start) % 2 != 0 {
            return Err(ConfigurationError::MalformedBuffer.into());
        }

        result.push(
            data[start..end]
                .chunks_exact(2)
                .map(|chunk| Point::new(chunk[0] as i64, chunk[1] as i64))
                .collect(),
        );
    }

    Ok(result)
}

/// Inverse of [`unpack_paths`]. Fails when a coordinate does not fit in `i32`.
pub fn pack_paths(nested: &[Vec<Point<i64>>]) -> Result<Vec<i32>> {
    let m = nested.len();
    let total_points: usize = nested.iter().map(|v| v.len()).sum();
    let header_len = 1 + m;
    let mut out = Vec::with_capacity(header_len + total_points * 2);
    out.resize(header_len, 0);
    out[0] = m as i32;

    let mut running: usize = 0;
    for (i, arr) in nested.iter().enumerate() {
        out[1 + i] = running as i32;
        running += arr.len() * 2;
    }

    for arr in nested {
        for p in arr {
            match (i32::try_from(p.x), i32::try_from(p.y)) {
                (Ok(x), Ok(y)) => {
                    out.push(x);
                    out.push(y);
                }
                _ => return Err(ConfigurationError::CoordinateOutOfRange { x: p.x, y: p.y }.into()),
            }
        }
    }

    Ok(out)
}

/// Boolean operation over packed closed paths; returns the packed closed result.
pub fn clip_polygons(subject: &[i32], clip: &[i32], clip_type: u8, fill_type: u8) -> Result<Vec<i32>> {
    let clip_type = ClipType::try_from(clip_type)?;
    let fill_type = PolyFillType::try_from(fill_type)?;

    let mut clipper = Clipper::new();
    clipper.add_paths(&unpack_paths(subject)?, PolyType::Subject, false)?;
    clipper.add_paths(&unpack_paths(clip)?, PolyType::Clip, false)?;
    let solution = clipper.execute(clip_type, fill_type)?;

    pack_paths(&solution.closed)
}

pub fn offset_polygons(
    paths: &[i32],
    delta: f64,
    join_type: u8,
    end_type: u8,
    miter_limit: f64,
    arc_tolerance: f64,
) -> Result<Vec<i32>> {
    let join_type = JoinType::try_from(join_type)?;
    let end_type = EndType::try_from(end_type)?;
    let options = OffsetOptions::new(miter_limit, arc_tolerance, false, false)?;

    let mut offset = ClipperOffset::with_options(options);
    offset.add_paths(&unpack_paths(paths)?, join_type, end_type);

    pack_paths(&offset.execute(delta)?)
}

fn to_int32_array(result: Result<Vec<i32>>, operation: &str) -> Int32Array {
    let packed = result.unwrap_or_else(|err| {
        warn!("{} failed: {}", operation, err);
        Vec::new()
    });
    let out = Int32Array::new_with_length(packed.len() as u32);
    out.copy_from(&packed);
    out
}

#[wasm_bindgen]
pub fn clip_polygons_wasm(subject: &[i32], clip: &[i32], clip_type: u8, fill_type: u8) -> Int32Array {
    to_int32_array(
        clip_polygons(subject, clip, clip_type, fill_type),
        "clip_polygons",
    )
}

#[wasm_bindgen]
pub fn offset_polygons_wasm(
    paths: &[i32],
    delta: f64,
    join_type: u8,
    end_type: u8,
    miter_limit: f64,
    arc_tolerance: f64,
) -> Int32Array {
    to_int32_array(
        offset_polygons(paths, delta, join_type, end_type, miter_limit, arc_tolerance),
        "offset_polygons",
    )
}

/// Signed area of one flat `[x0, y0, x1, y1, ...]` path.
#[wasm_bindgen]
pub fn polygon_area_wasm(path: &[i32]) -> f64 {
    let points: Vec<Point<i64>> = path
        .chunks_exact(2)
        .map(|chunk| Point::new(chunk[0] as i64, chunk[1] as i64))
        .collect();
    clipper_utils::area(&points)
}
