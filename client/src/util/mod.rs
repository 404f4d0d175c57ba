//! Browser glue shared by pages and components.

pub mod timers;
