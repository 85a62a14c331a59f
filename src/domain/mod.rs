//! Core domain types for habitquest

mod habit;
mod ledger;
mod market;
mod profile;

pub use habit::{CheckInState, ColorTag, Habit, HabitCategory, HabitId, PROOF_TOKEN_MIN_STREAK};
pub use ledger::{SourceShare, XpLedger, XpLogEntry, XpSource};
pub use market::{ListingStatus, MarketplaceListing, RewardItem};
pub use profile::Profile;
