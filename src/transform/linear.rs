//! Linear mapping helpers.

/// Linearly interpolate between two scalars. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear mapping from a numeric domain onto an output range.
///
/// A degenerate domain (`lo == hi`) is widened to `[lo - 1, hi + 1]` at construction, so
/// mapping never divides by zero. Inputs outside the domain extrapolate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        let [lo, hi] = domain;
        let domain = if lo == hi {
            [lo - 1.0, hi + 1.0]
        } else {
            domain
        };
        Self { domain, range }
    }

    /// Domain after degenerate widening.
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        lerp(r0, r1, (x - d0) / (d1 - d0))
    }

    /// Inverse mapping. A zero-width range maps everything back to the domain start.
    pub fn invert(&self, y: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if r0 == r1 {
            return d0;
        }
        lerp(d0, d1, (y - r0) / (r1 - r0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
