use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What produced an XP gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum XpSource {
    CheckIn,
    StreakBonus,
    Marketplace,
}

impl XpSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckIn => "CHECK_IN",
            Self::StreakBonus => "STREAK_BONUS",
            Self::Marketplace => "MARKETPLACE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckIn => "Check-ins",
            Self::StreakBonus => "Bonuses",
            Self::Marketplace => "Market",
        }
    }

    pub fn all() -> &'static [XpSource] {
        &[Self::CheckIn, Self::StreakBonus, Self::Marketplace]
    }
}

/// One historical XP gain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpLogEntry {
    pub date: NaiveDate,
    pub amount: u32,
    pub source: XpSource,
}

/// Share of the ledger's XP coming from one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceShare {
    pub source: XpSource,
    pub amount: u32,
    /// Fraction of the total, 0.0 - 1.0
    pub share: f64,
}

/// Read-only XP history shown on the dashboard
#[derive(Debug, Clone, Default, Serialize)]
pub struct XpLedger {
    entries: Vec<XpLogEntry>,
}

impl XpLedger {
    /// Build a ledger, ordering entries by date
    pub fn new(mut entries: Vec<XpLogEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    pub fn entries(&self) -> &[XpLogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Daily series as `(MM/DD, amount)` pairs for the XP chart
    pub fn daily_series(&self) -> Vec<(String, u32)> {
        self.entries
            .iter()
            .map(|e| (e.date.format("%m/%d").to_string(), e.amount))
            .collect()
    }

    pub fn by_source(&self) -> Vec<SourceShare> {
        let total = self.total();
        XpSource::all()
            .iter()
            .map(|source| {
                let amount = self
                    .entries
                    .iter()
                    .filter(|e| e.source == *source)
                    .map(|e| e.amount)
                    .sum();
                let share = if total == 0 {
                    0.0
                } else {
                    f64::from(amount) / f64::from(total)
                };
                SourceShare {
                    source: *source,
                    amount,
                    share,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, amount: u32, source: XpSource) -> XpLogEntry {
        XpLogEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            source,
        }
    }

    #[test]
    fn test_ledger_sorted_and_labelled() {
        let ledger = XpLedger::new(vec![
            entry("2026-02-02", 20, XpSource::CheckIn),
            entry("2026-02-01", 10, XpSource::StreakBonus),
        ]);
        let series = ledger.daily_series();
        assert_eq!(series[0], ("02/01".to_string(), 10));
        assert_eq!(series[1], ("02/02".to_string(), 20));
        assert_eq!(ledger.total(), 30);
    }

    #[test]
    fn test_source_shares() {
        let ledger = XpLedger::new(vec![
            entry("2026-02-01", 30, XpSource::CheckIn),
            entry("2026-02-02", 10, XpSource::StreakBonus),
        ]);
        let shares = ledger.by_source();
        assert_eq!(shares.len(), 3);
        assert!((shares[0].share - 0.75).abs() < f64::EPSILON);
        assert!((shares[1].share - 0.25).abs() < f64::EPSILON);
        assert_eq!(shares[2].amount, 0);
    }

    #[test]
    fn test_empty_ledger_has_zero_shares() {
        let ledger = XpLedger::default();
        assert!(ledger.is_empty());
        assert!(ledger.by_source().iter().all(|s| s.share == 0.0));
    }
}
