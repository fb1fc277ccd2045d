//! Keyed scene state and its reconciliation against ranked lists.

pub(crate) mod model;
pub(crate) mod reconcile;
