pub(crate) mod visualization;
