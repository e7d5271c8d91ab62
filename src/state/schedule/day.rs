use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday of the schedule grid, in the grid's fixed left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mo,
    Di,
    Mi,
    Do,
    Fr,
    Sa,
}

impl Weekday {
    /// Fixed day order used by every geometry pass.
    pub const ORDER: [Weekday; 6] = [
        Weekday::Mo,
        Weekday::Di,
        Weekday::Mi,
        Weekday::Do,
        Weekday::Fr,
        Weekday::Sa,
    ];

    /// Two-letter day code as shown in column headers.
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Mo => "Mo",
            Weekday::Di => "Di",
            Weekday::Mi => "Mi",
            Weekday::Do => "Do",
            Weekday::Fr => "Fr",
            Weekday::Sa => "Sa",
        }
    }

    /// Parse a two-letter day code.
    pub fn from_code(code: &str) -> Option<Weekday> {
        Weekday::ORDER
            .iter()
            .copied()
            .find(|day| day.code() == code.trim())
    }

    /// Position of this day in the fixed order.
    pub fn order_index(self) -> usize {
        Weekday::ORDER
            .iter()
            .position(|day| *day == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for day in Weekday::ORDER {
            assert_eq!(Weekday::from_code(day.code()), Some(day));
        }
        assert_eq!(Weekday::from_code("Su"), None);
    }

    #[test]
    fn test_order_index_matches_order() {
        assert_eq!(Weekday::Mo.order_index(), 0);
        assert_eq!(Weekday::Sa.order_index(), 5);
    }
}
