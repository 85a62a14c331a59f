//! Static seed content for a new session
//!
//! Everything here is read once at startup. The progression engine copies
//! the profile and habits into its state; the ledger, listings and rewards
//! are only displayed.

use chrono::{Days, NaiveDate};

use crate::domain::{
    Habit, HabitCategory, HabitId, ListingStatus, MarketplaceListing, Profile, RewardItem,
    XpLedger, XpLogEntry, XpSource,
};
use crate::progression::ProgressionState;

pub const DEFAULT_LEDGER_DAYS: u32 = 30;

/// Immutable seed data bundle
#[derive(Debug, Clone)]
pub struct SeedContent {
    pub profile: Profile,
    pub habits: Vec<Habit>,
    pub xp_log: XpLedger,
    pub listings: Vec<MarketplaceListing>,
    pub rewards: Vec<RewardItem>,
}

impl SeedContent {
    /// Mock content anchored on `today`
    pub fn mock(today: NaiveDate) -> Self {
        Self::mock_with_ledger_days(today, DEFAULT_LEDGER_DAYS)
    }

    pub fn mock_with_ledger_days(today: NaiveDate, ledger_days: u32) -> Self {
        Self {
            profile: mock_profile(),
            habits: mock_habits(today),
            xp_log: mock_xp_log(today, ledger_days),
            listings: mock_listings(),
            rewards: mock_rewards(),
        }
    }

    /// Initial engine state built from the seeded profile and habits
    pub fn initial_state(&self) -> ProgressionState {
        ProgressionState::new(self.profile.clone(), self.habits.clone())
    }
}

fn mock_profile() -> Profile {
    Profile::new("u1", "ShadowSlayer99", 1450, 450).with_badges([
        "Early Bird",
        "Consistency King",
        "Iron Will",
    ])
}

fn seeded_habit(
    id: &str,
    name: &str,
    category: HabitCategory,
    current_streak: u32,
    max_streak: u32,
    last_checked_in: Option<NaiveDate>,
) -> Habit {
    Habit {
        current_streak,
        max_streak,
        last_checked_in,
        ..Habit::new(HabitId::new(id), name, category)
    }
}

fn mock_habits(today: NaiveDate) -> Vec<Habit> {
    vec![
        seeded_habit("h1", "Morning 2km Run", HabitCategory::Run, 14, 21, Some(today)),
        seeded_habit("h2", "Study Java DSA", HabitCategory::Study, 8, 12, None),
        seeded_habit("h3", "LeetCode Daily", HabitCategory::Code, 3, 30, Some(today)),
    ]
}

/// One entry per day ending on `today`, with a fixed repeating pattern of
/// amounts (10-49 XP) and roughly a third of days marked as streak bonuses
fn mock_xp_log(today: NaiveDate, days: u32) -> XpLedger {
    let entries = (0..days)
        .filter_map(|i| {
            let date = today.checked_sub_days(Days::new(u64::from(days - 1 - i)))?;
            let amount = 10 + (i * 17 + 7) % 40;
            let source = if i % 10 >= 7 {
                XpSource::StreakBonus
            } else {
                XpSource::CheckIn
            };
            Some(XpLogEntry {
                date,
                amount,
                source,
            })
        })
        .collect();
    XpLedger::new(entries)
}

fn mock_listings() -> Vec<MarketplaceListing> {
    vec![
        MarketplaceListing {
            id: "m1".to_string(),
            habit_id: HabitId::new("h1"),
            habit_name: "Elite Runner".to_string(),
            streak_length: 100,
            price: 1500,
            seller_name: "ProAthlete".to_string(),
            status: ListingStatus::Available,
        },
        MarketplaceListing {
            id: "m2".to_string(),
            habit_id: HabitId::new("h2"),
            habit_name: "Java Master".to_string(),
            streak_length: 50,
            price: 800,
            seller_name: "CodeGeek".to_string(),
            status: ListingStatus::Available,
        },
    ]
}

fn mock_rewards() -> Vec<RewardItem> {
    [
        ("XP Booster (2x)", 200),
        ("Flame Aura Profile", 500),
        ("Amazon Voucher", 2500),
    ]
    .into_iter()
    .map(|(title, price)| RewardItem {
        title: title.to_string(),
        price,
    })
    .collect()
}
