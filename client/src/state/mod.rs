//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Page state proper (countdown, transcript, leads) lives in `launchpad` and is
//! mirrored into signals by the launch page. These modules hold only what is
//! local to the browser shell: the active tab and the toast queue.

pub mod toasts;
pub mod ui;
