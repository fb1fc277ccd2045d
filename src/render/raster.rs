use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::foundation::error::{WordrankError, WordrankResult};

/// Rasterized frame, premultiplied RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixels, as PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }
}

/// Render an SVG document to pixels at its intrinsic size.
///
/// Text is shaped with the system font database, loaded once per process.
pub fn rasterize_svg(svg: &str) -> WordrankResult<FrameRGBA> {
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| WordrankError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

fn to_px(v: f32) -> WordrankResult<u32> {
    const MAX_DIM: u32 = 16_384;
    if !v.is_finite() || v <= 0.0 {
        return Err(WordrankError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(WordrankError::render(format!(
            "svg raster size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Arc::new(db)
    })
    .clone()
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
