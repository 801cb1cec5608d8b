//! Shift period model.
//!
//! A shift period (turno) is a fixed time-of-day bracket used both for
//! labor classification and as a pricing key.

use serde::{Deserialize, Serialize};

/// Represents a time-of-day bracket a shift can fall into.
///
/// The four daily brackets are produced by classification. [`ShiftPeriod::Extra`]
/// is synthetic: it is only ever used as a pricing key and never comes out of
/// the classifier.
///
/// # Example
///
/// ```
/// use shift_engine::models::ShiftPeriod;
///
/// let period: ShiftPeriod = serde_json::from_str("\"madrugada\"").unwrap();
/// assert_eq!(period, ShiftPeriod::Madrugada);
/// assert!(period.is_daily());
/// assert!(!ShiftPeriod::Extra.is_daily());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftPeriod {
    /// Early hours, 00:00 until the morning boundary.
    Madrugada,
    /// Morning.
    Manha,
    /// Afternoon.
    Tarde,
    /// Evening and night, until midnight.
    Noite,
    /// Overtime pricing context. Not a time-of-day bracket.
    Extra,
}

impl ShiftPeriod {
    /// The four brackets a day is divided into, in chronological order.
    pub const DAILY: [ShiftPeriod; 4] = [
        ShiftPeriod::Madrugada,
        ShiftPeriod::Manha,
        ShiftPeriod::Tarde,
        ShiftPeriod::Noite,
    ];

    /// Returns true for the brackets that classification can produce.
    pub fn is_daily(self) -> bool {
        !matches!(self, ShiftPeriod::Extra)
    }

    /// The configuration key for this period.
    pub fn key(self) -> &'static str {
        match self {
            ShiftPeriod::Madrugada => "madrugada",
            ShiftPeriod::Manha => "manha",
            ShiftPeriod::Tarde => "tarde",
            ShiftPeriod::Noite => "noite",
            ShiftPeriod::Extra => "extra",
        }
    }

    /// The label shown on UI badges.
    pub fn label(self) -> &'static str {
        match self {
            ShiftPeriod::Madrugada => "Turno Madrugada",
            ShiftPeriod::Manha => "Turno Manhã",
            ShiftPeriod::Tarde => "Turno Tarde",
            ShiftPeriod::Noite => "Turno Noite",
            ShiftPeriod::Extra => "Hora Extra",
        }
    }
}

impl std::fmt::Display for ShiftPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
