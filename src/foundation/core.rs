pub use kurbo::Point;

/// Host clock reading in milliseconds.
///
/// The engine never reads a clock on its own; every time-dependent call takes the host's
/// current `Millis`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn saturating_add(self, other: Millis) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Millis) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Clock reading of frame `frame` when sampling at `fps` frames per second.
    pub fn from_frame(frame: u64, fps: u32) -> Self {
        if fps == 0 {
            return Self::ZERO;
        }
        Self(frame.saturating_mul(1000) / u64::from(fps))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn center_y(self) -> f64 {
        self.height / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
