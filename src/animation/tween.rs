use crate::{
    animation::ease::Ease,
    foundation::core::{Millis, Point},
    transform::linear::lerp,
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

/// A time-bounded interpolation of one value.
///
/// `value_at` is a pure function of the clock, so a tween can be sampled at any time and
/// in any order.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start: Millis,
    pub duration: Millis,
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    pub fn new(from: T, to: T, start: Millis, duration: Millis, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// A tween that already sits at `value`.
    pub fn hold(value: T, start: Millis) -> Self {
        Self::new(value.clone(), value, start, Millis::ZERO, Ease::Linear)
    }

    /// Linear time progress in `[0, 1]`. Zero-length tweens are complete immediately.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration.0 == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_f64() / self.duration.as_f64()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Millis) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.end()
    }

    pub fn end(&self) -> Millis {
        self.start.saturating_add(self.duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
