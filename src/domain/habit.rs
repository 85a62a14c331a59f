use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current streak a habit needs before it can mint a proof token
pub const PROOF_TOKEN_MIN_STREAK: u32 = 30;

/// Unique identifier for a habit within a profile's collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    /// Length of generated identifiers
    const GENERATED_LEN: usize = 9;

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a short random identifier
    pub fn generate() -> Self {
        let simple = uuid::Uuid::new_v4().simple().to_string();
        Self(simple[..Self::GENERATED_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HabitId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The kind of activity a habit tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitCategory {
    Run,
    Study,
    Gym,
    Code,
    Meditate,
}

impl HabitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Run => "RUN",
            Self::Study => "STUDY",
            Self::Gym => "GYM",
            Self::Code => "CODE",
            Self::Meditate => "MEDITATE",
        }
    }

    /// Parse a category name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RUN" => Some(Self::Run),
            "STUDY" => Some(Self::Study),
            "GYM" => Some(Self::Gym),
            "CODE" => Some(Self::Code),
            "MEDITATE" => Some(Self::Meditate),
            _ => None,
        }
    }

    pub fn all() -> &'static [HabitCategory] {
        &[
            Self::Run,
            Self::Study,
            Self::Gym,
            Self::Code,
            Self::Meditate,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Run => "Running",
            Self::Study => "Study",
            Self::Gym => "Gym",
            Self::Code => "Coding",
            Self::Meditate => "Meditation",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Run => "🔥",
            Self::Study => "📖",
            Self::Gym => "🏋",
            Self::Code => "💻",
            Self::Meditate => "🌬",
        }
    }

    /// Accent colour assigned to new habits of this category
    pub fn color_tag(&self) -> ColorTag {
        match self {
            Self::Run => ColorTag::Orange,
            Self::Study => ColorTag::Blue,
            Self::Gym => ColorTag::Red,
            Self::Code => ColorTag::Green,
            Self::Meditate => ColorTag::Indigo,
        }
    }
}

impl std::fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display accent for a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Orange,
    Blue,
    Red,
    Green,
    #[default]
    Indigo,
}

impl ColorTag {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Orange => "#f97316",
            Self::Blue => "#3b82f6",
            Self::Red => "#ef4444",
            Self::Green => "#10b981",
            Self::Indigo => "#818cf8",
        }
    }

    /// Look up a colour by hex value, falling back to the default accent
    pub fn from_hex(hex: &str) -> Self {
        match hex.trim().to_ascii_lowercase().as_str() {
            "#f97316" => Self::Orange,
            "#3b82f6" => Self::Blue,
            "#ef4444" => Self::Red,
            "#10b981" => Self::Green,
            _ => Self::default(),
        }
    }
}

/// Where a habit stands relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInState {
    NeverCheckedIn,
    CheckedInToday,
    CheckedInBeforeToday,
}

/// A trackable recurring activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub category: HabitCategory,
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_checked_in: Option<NaiveDate>,
    pub color: ColorTag,
}

impl Habit {
    /// Create a fresh habit with no check-ins
    pub fn new(id: HabitId, name: impl Into<String>, category: HabitCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            current_streak: 0,
            max_streak: 0,
            last_checked_in: None,
            color: category.color_tag(),
        }
    }

    pub fn check_in_state(&self, today: NaiveDate) -> CheckInState {
        match self.last_checked_in {
            None => CheckInState::NeverCheckedIn,
            Some(day) if day >= today => CheckInState::CheckedInToday,
            Some(_) => CheckInState::CheckedInBeforeToday,
        }
    }

    pub fn is_done_on(&self, today: NaiveDate) -> bool {
        self.check_in_state(today) == CheckInState::CheckedInToday
    }

    /// Whether this habit's streak is long enough to list as a proof token
    pub fn is_proof_token_eligible(&self) -> bool {
        self.current_streak >= PROOF_TOKEN_MIN_STREAK
    }

    /// Name shortened for chart labels
    pub fn short_name(&self) -> String {
        const MAX_CHARS: usize = 10;
        if self.name.chars().count() > MAX_CHARS {
            let head: String = self.name.chars().take(MAX_CHARS).collect();
            format!("{}...", head)
        } else {
            self.name.clone()
        }
    }
}
