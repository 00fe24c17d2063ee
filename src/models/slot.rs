use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shown when a reservation cannot be granted, whether the slot is full or unknown.
pub const FULL_MESSAGE: &str = "申し訳ありません。この回は満席です。";

// ── Database rows ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, sqlx::FromRow)]
pub struct Slot {
    pub name: String,
    pub remaining: i64,
    pub capacity: i64,
}

/// A default slot inserted at startup if its name is not present yet.
#[derive(Debug, Clone)]
pub struct SlotSeed {
    pub name: String,
    pub capacity: i64,
}

impl SlotSeed {
    pub fn new(name: impl Into<String>, capacity: i64) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

// ── View models ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SlotAvailability {
    pub name: String,
    pub remaining: i64,
    pub capacity: i64,
    /// No seats left
    pub disabled: bool,
    /// At least 60% of the seats are still free
    pub recommend: bool,
}

impl From<Slot> for SlotAvailability {
    fn from(s: Slot) -> Self {
        Self {
            disabled: s.remaining <= 0,
            recommend: i128::from(s.remaining) * 5 >= i128::from(s.capacity) * 3,
            name: s.name,
            remaining: s.remaining,
            capacity: s.capacity,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReservationForm {
    /// Visitor name
    pub name: String,
    /// Visitor grade, e.g. "5th"
    pub grade: String,
    /// Name of the slot to reserve
    pub slot: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationOutcome {
    Confirmed { visitor: String, slot: String },
    Full,
}

impl ReservationOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Confirmed { visitor, slot } => {
                format!("{visitor} さん、{slot} の参加が確定しました！")
            }
            Self::Full => FULL_MESSAGE.to_string(),
        }
    }
}
