//! Easing curves, tweens and the per-entity transition driver.

pub(crate) mod driver;
pub(crate) mod ease;
pub(crate) mod tween;
