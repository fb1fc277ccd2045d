pub(crate) mod scales;
