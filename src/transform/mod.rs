/// Linear scales and scalar interpolation.
pub mod linear;
