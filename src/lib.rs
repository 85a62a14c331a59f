//! habitquest - gamified habit tracking
//!
//! Users check in on daily habits, earn XP and coins, climb levels and keep
//! streaks alive. A static marketplace shows streak "proof tokens" other
//! users have listed.
//!
//! ## Layout
//!
//! - [`progression`]: the rules. Pure transitions over a profile and its
//!   habits (`add_habit`, `check_in`) plus the level curve.
//! - [`session`]: the state container a shell drives; holds the current
//!   state and today's date for one run.
//! - [`seed`]: read-only mock content used to start a session.
//! - [`dashboard`]: summaries for display.
//! - [`config`]: `.habitquest/config.toml` loading.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod progression;
pub mod seed;
pub mod session;

pub use domain::*;
