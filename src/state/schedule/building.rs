use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Weekday;

/// One room column inside a building's grid, identified by (day, position
/// among that day's columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    /// Day this column belongs to.
    pub day: Weekday,
    /// Room shown in the column header.
    pub room: String,
}

/// A named schedule instance (e.g. one physical location) with its own grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g. "Villa", "Kolibri")
    pub name: String,
    /// Room columns, grouped by day in insertion order within each day.
    pub columns: Vec<DayColumn>,
}

impl Building {
    /// Create a new building with no columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Create a building seeded with one `room` column per weekday.
    pub fn with_default_columns(name: impl Into<String>, room: &str) -> Self {
        let mut building = Building::new(name);
        for day in Weekday::ORDER {
            building.append_column(day, room);
        }
        building
    }

    /// Rooms of `day`'s columns, in column order.
    pub fn rooms_for_day(&self, day: Weekday) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|col| col.day == day)
            .map(|col| col.room.as_str())
            .collect()
    }

    /// Number of columns for `day`.
    pub fn column_count(&self, day: Weekday) -> usize {
        self.columns.iter().filter(|col| col.day == day).count()
    }

    /// Header text of column (`day`, `index`), e.g. "Mo 101".
    pub fn header_label(&self, day: Weekday, index: usize) -> Option<String> {
        self.rooms_for_day(day)
            .get(index)
            .map(|room| format!("{} {}", day.code(), room))
    }

    /// Room of column (`day`, `index`) with the day code stripped, used as the
    /// export room field.
    pub fn room_at(&self, day: Weekday, index: usize) -> Option<&str> {
        self.rooms_for_day(day).get(index).copied()
    }

    /// Per-day visible column counts in fixed day order. Hidden days count as
    /// zero so the geometry reflows around them.
    pub fn visible_column_counts(&self, hidden_days: &[Weekday]) -> Vec<(Weekday, usize)> {
        Weekday::ORDER
            .iter()
            .map(|&day| {
                let count = if hidden_days.contains(&day) {
                    0
                } else {
                    self.column_count(day)
                };
                (day, count)
            })
            .collect()
    }

    /// Find the column index for `room` on `day`.
    ///
    /// First pass matches `room` as a substring of the header text, second
    /// pass compares against the header with the day code stripped. Returns
    /// `None` when no column matches.
    pub fn find_column(&self, day: Weekday, room: &str) -> Option<usize> {
        let room = room.trim();
        if room.is_empty() {
            return None;
        }
        let rooms = self.rooms_for_day(day);
        let labels: Vec<String> = rooms
            .iter()
            .map(|r| format!("{} {}", day.code(), r))
            .collect();

        if let Some(index) = labels.iter().position(|label| label.contains(room)) {
            return Some(index);
        }
        labels
            .iter()
            .position(|label| label.replace(day.code(), "").trim() == room)
    }

    /// Insert a column for `room` at position `index` within `day`'s group,
    /// clamped to the end of the group. Returns the index actually used.
    pub fn insert_column_at(&mut self, day: Weekday, index: usize, room: impl Into<String>) -> usize {
        let count = self.column_count(day);
        let index = index.min(count);

        // Translate the within-day index into a position in the flat list:
        // after all earlier days' columns plus `index` columns of this day.
        let mut flat = index;
        for &d in Weekday::ORDER.iter().take(day.order_index()) {
            flat += self.column_count(d);
        }

        self.columns.insert(
            flat,
            DayColumn {
                day,
                room: room.into(),
            },
        );
        index
    }

    /// Append a column for `room` at the end of `day`'s group.
    pub fn append_column(&mut self, day: Weekday, room: impl Into<String>) -> usize {
        let index = self.column_count(day);
        self.insert_column_at(day, index, room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_column_exact_and_stripped() {
        let mut building = Building::new("Villa");
        building.append_column(Weekday::Mo, "101");
        building.append_column(Weekday::Mo, "Aula");

        assert_eq!(building.find_column(Weekday::Mo, "101"), Some(0));
        assert_eq!(building.find_column(Weekday::Mo, "Aula"), Some(1));
        assert_eq!(building.find_column(Weekday::Mo, "202"), None);
        assert_eq!(building.find_column(Weekday::Di, "101"), None);
    }

    #[test]
    fn test_insert_keeps_day_grouping() {
        let mut building = Building::new("Villa");
        building.append_column(Weekday::Mo, "101");
        building.append_column(Weekday::Di, "201");
        let index = building.append_column(Weekday::Mo, "102");

        assert_eq!(index, 1);
        assert_eq!(building.rooms_for_day(Weekday::Mo), vec!["101", "102"]);
        assert_eq!(building.rooms_for_day(Weekday::Di), vec!["201"]);
        // Flat order keeps Monday's group contiguous ahead of Tuesday.
        assert_eq!(building.columns[1].day, Weekday::Mo);
        assert_eq!(building.columns[2].day, Weekday::Di);
    }

    #[test]
    fn test_hidden_day_counts_as_zero() {
        let building = Building::with_default_columns("Villa", "101");
        let counts = building.visible_column_counts(&[Weekday::Mi]);
        assert_eq!(counts[2], (Weekday::Mi, 0));
        assert_eq!(counts[0], (Weekday::Mo, 1));
    }
}
