//! Marketplace display data
//!
//! Listings and rewards are static; nothing here buys or sells.

use serde::{Deserialize, Serialize};

use super::HabitId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Available,
    Sold,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Sold => "SOLD",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A streak proof token offered by another user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub id: String,
    pub habit_id: HabitId,
    pub habit_name: String,
    pub streak_length: u32,
    pub price: u32,
    pub seller_name: String,
    pub status: ListingStatus,
}

impl MarketplaceListing {
    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Available
    }
}

/// An item in the coin reward shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub title: String,
    pub price: u32,
}
