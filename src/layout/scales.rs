use crate::{
    foundation::core::{Canvas, Point},
    text::ranker::RankedList,
    transform::linear::LinearScale,
};

/// Geometry the scales are derived from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutSpec {
    pub canvas: Canvas,
    pub left_pad: f64,
    pub right_pad: f64,
    /// `[min, max]` font size in pixels.
    pub font_range: [f64; 2],
}

/// Where and how large a ranked word should end up.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Target {
    pub position: Point,
    pub font_size: f64,
}

impl Target {
    /// Equal within floating point noise.
    pub fn approx_eq(&self, other: &Target) -> bool {
        const EPS: f64 = 1e-9;
        (self.position.x - other.position.x).abs() <= EPS
            && (self.position.y - other.position.y).abs() <= EPS
            && (self.font_size - other.font_size).abs() <= EPS
    }
}

/// Font-size-by-count and x-by-rank mappings for one ranked list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Scales {
    pub font: LinearScale,
    pub x: LinearScale,
    /// Shared vertical baseline for every word.
    pub baseline_y: f64,
}

impl Scales {
    pub fn target(&self, index: usize, count: u32) -> Target {
        Target {
            position: Point::new(self.x.apply(index as f64), self.baseline_y),
            font_size: self.font.apply(f64::from(count)),
        }
    }
}

/// Derive scales from `list`. Returns `None` for an empty list, which has nothing to place.
///
/// Horizontal position is a function of rank index only, so words are evenly spaced no
/// matter how skewed the counts are.
pub fn build_scales(list: &RankedList, layout: &LayoutSpec) -> Option<Scales> {
    let (lo, hi) = list.count_extent()?;
    let font = LinearScale::new([f64::from(lo), f64::from(hi)], layout.font_range);

    let last_index = list.len().saturating_sub(1).max(1);
    let x = LinearScale::new(
        [0.0, last_index as f64],
        [layout.left_pad, layout.canvas.width - layout.right_pad],
    );

    Some(Scales {
        font,
        x,
        baseline_y: layout.canvas.center_y(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scales.rs"]
mod tests;
