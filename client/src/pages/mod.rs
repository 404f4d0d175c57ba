//! Top-level routed pages.

pub mod launch;
