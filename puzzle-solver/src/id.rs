//! Puzzle identifiers

use crate::error::RegistrationError;
use std::fmt;

/// First year of the puzzle calendar
pub const BASE_YEAR: u16 = 2015;
/// Number of calendar years supported (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Puzzles per year (days 1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Identifies one daily puzzle by calendar year and day
///
/// Ordering is chronological: by year, then by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    /// The calendar year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
}

impl PuzzleId {
    /// Create an identifier without validation
    ///
    /// `const` so it can be used inside `inventory::submit!`.
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// Create an identifier, rejecting years and days outside the calendar
    pub fn checked(year: u16, day: u8) -> Result<Self, RegistrationError> {
        let id = Self::new(year, day);
        if id.is_valid() {
            Ok(id)
        } else {
            Err(RegistrationError::InvalidPuzzleId { year, day })
        }
    }

    /// Whether the year and day fall inside the supported calendar
    pub const fn is_valid(&self) -> bool {
        self.year >= BASE_YEAR
            && self.year < BASE_YEAR + MAX_YEARS
            && self.day >= 1
            && self.day <= DAYS_PER_YEAR
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_day() {
        assert_eq!(PuzzleId::new(2023, 5).to_string(), "2023/05");
        assert_eq!(PuzzleId::new(2015, 25).to_string(), "2015/25");
    }

    #[test]
    fn test_calendar_bounds() {
        assert!(PuzzleId::checked(2015, 1).is_ok());
        assert!(PuzzleId::checked(2034, 25).is_ok());
        assert_eq!(
            PuzzleId::checked(2014, 1),
            Err(RegistrationError::InvalidPuzzleId { year: 2014, day: 1 })
        );
        assert!(PuzzleId::checked(2035, 1).is_err());
        assert!(PuzzleId::checked(2023, 0).is_err());
        assert!(PuzzleId::checked(2023, 26).is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut ids = vec![
            PuzzleId::new(2024, 1),
            PuzzleId::new(2023, 12),
            PuzzleId::new(2023, 5),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                PuzzleId::new(2023, 5),
                PuzzleId::new(2023, 12),
                PuzzleId::new(2024, 1),
            ]
        );
    }
}
