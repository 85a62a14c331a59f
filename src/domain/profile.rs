use std::collections::BTreeSet;

use serde::Serialize;

use crate::progression::derive_level;

/// The acting user's progression state
///
/// `level` is stored alongside `experience` for readers, but it can only
/// change through [`Profile::award`], which re-derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    experience: u32,
    level: u32,
    currency: u32,
    pub badges: BTreeSet<String>,
}

impl Profile {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        experience: u32,
        currency: u32,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            experience,
            level: derive_level(experience),
            currency,
            badges: BTreeSet::new(),
        }
    }

    pub fn with_badges<I, S>(mut self, badges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.badges.extend(badges.into_iter().map(Into::into));
        self
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn currency(&self) -> u32 {
        self.currency
    }

    pub fn can_afford(&self, price: u32) -> bool {
        self.currency >= price
    }

    /// Add experience and coins, then re-derive the level
    pub(crate) fn award(&mut self, experience: u32, currency: u32) {
        self.experience = self.experience.saturating_add(experience);
        self.currency = self.currency.saturating_add(currency);
        self.level = derive_level(self.experience);
    }
}
