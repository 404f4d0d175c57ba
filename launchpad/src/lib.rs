//! Launch page logic for the chatbot launch demo.
//!
//! This crate holds everything the launch page does that does not touch the
//! DOM: the countdown to launch, the scripted reveal that follows it, and the
//! canned-response chat widget with its lead form. It compiles natively so the
//! timer-driven behavior can be tested against virtual time, and to WASM where
//! the `client` crate plugs in browser timers and renders the state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`clock`] | Epoch-millisecond time source |
//! | [`scheduler`] | Timer seam, RAII cancel handles, and [`scheduler::ManualScheduler`] |
//! | [`countdown`] | Remaining-time breakdown and the one-way ready transition |
//! | [`reveal`] | Reveal steps and the constant cue plan |
//! | [`sequencer`] | Page [`sequencer::Stage`] machine and its timer-owning driver |
//! | [`rules`] | Ordered first-match keyword rules |
//! | [`chat`] | Transcript and per-session chat state |
//! | [`leads`] | Lead form, captured records, validation |
//! | [`notify`] | Toast notification seam |
//! | [`widget`] | Timer-owning chat driver (delayed replies, lead submit) |
//! | [`analytics`] | Mock dashboard figures derived from the session |
//! | [`labels`] | Human-readable time and date labels |
//! | [`config`] | Timing constants for a launch session |

pub mod analytics;
pub mod chat;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod labels;
pub mod leads;
pub mod notify;
pub mod reveal;
pub mod rules;
pub mod scheduler;
pub mod sequencer;
pub mod widget;
