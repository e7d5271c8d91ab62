use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use super::{ActivityBlock, Building, GridSettings, Weekday};

/// The top-level schedule container: every building grid, every block, and
/// the grid settings they share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Schema version for future compatibility
    pub version: String,
    /// Schedule name
    pub name: String,
    /// Grid settings shared by all buildings
    pub settings: GridSettings,
    /// All buildings (ordered as displayed)
    pub buildings: Vec<Building>,
    /// All activity blocks across buildings
    pub blocks: Vec<ActivityBlock>,
    /// Days currently toggled off in every building
    #[serde(default)]
    pub hidden_days: Vec<Weekday>,

    /// Path of the schedule file (not serialized - set on load)
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: "Untitled Schedule".to_string(),
            settings: GridSettings::default(),
            buildings: vec![
                Building::with_default_columns("Villa", "101"),
                Building::with_default_columns("Kolibri", "K1"),
            ],
            blocks: Vec::new(),
            hidden_days: Vec::new(),
            file_path: None,
        }
    }
}

impl Schedule {
    /// Create a new schedule with default settings
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Find a building by ID
    pub fn find_building(&self, id: Uuid) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    /// Find a building by ID, mutably
    pub fn building_mut(&mut self, id: Uuid) -> Option<&mut Building> {
        self.buildings.iter_mut().find(|b| b.id == id)
    }

    /// Find a building by display name
    pub fn find_building_by_name(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name == name)
    }

    /// Find a block by ID
    pub fn find_block(&self, id: Uuid) -> Option<&ActivityBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Find a block by ID, mutably
    pub fn block_mut(&mut self, id: Uuid) -> Option<&mut ActivityBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Add a block to the schedule
    pub fn add_block(&mut self, block: ActivityBlock) -> Uuid {
        let id = block.id;
        self.blocks.push(block);
        id
    }

    /// Remove a block by ID
    pub fn remove_block(&mut self, id: Uuid) -> bool {
        let len = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() < len
    }

    /// Whether a day is currently hidden
    pub fn is_day_hidden(&self, day: Weekday) -> bool {
        self.hidden_days.contains(&day)
    }

    /// Toggle a day's visibility across all buildings. Returns the new
    /// hidden state.
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        if let Some(index) = self.hidden_days.iter().position(|d| *d == day) {
            self.hidden_days.remove(index);
            false
        } else {
            self.hidden_days.push(day);
            true
        }
    }

    /// Blocks that are currently visible (their day is not hidden).
    pub fn visible_blocks(&self) -> impl Iterator<Item = &ActivityBlock> {
        self.blocks
            .iter()
            .filter(|b| !self.hidden_days.contains(&b.day))
    }

    /// Insert a column at `index` within a building's day group and shift the
    /// column index of every block in that building/day at `index` or later
    /// by one. Returns the index actually used.
    pub fn insert_column_at(
        &mut self,
        building_id: Uuid,
        day: Weekday,
        index: usize,
        room: impl Into<String>,
    ) -> Option<usize> {
        let building = self.building_mut(building_id)?;
        let inserted = building.insert_column_at(day, index, room);
        for block in self
            .blocks
            .iter_mut()
            .filter(|b| b.building_id == building_id && b.day == day)
        {
            if block.col_index >= inserted {
                block.col_index += 1;
            }
        }
        Some(inserted)
    }

    /// Find the column for `room` on (building, day), creating it at the end
    /// of the day's group when missing. Returns the column index, or `None`
    /// when the building does not exist.
    pub fn ensure_column(
        &mut self,
        building_id: Uuid,
        day: Weekday,
        room: &str,
    ) -> Option<usize> {
        let building = self.find_building(building_id)?;
        if let Some(index) = building.find_column(day, room) {
            return Some(index);
        }
        let end = building.column_count(day);
        self.insert_column_at(building_id, day, end, room)
    }

    /// Move a block to a named room's column on its current day, creating the
    /// column when missing. Returns false when the block or building is gone.
    pub fn move_block_to_room(&mut self, id: Uuid, room: &str) -> bool {
        let Some((building_id, day)) = self.find_block(id).map(|b| (b.building_id, b.day)) else {
            return false;
        };
        let Some(col_index) = self.ensure_column(building_id, day, room) else {
            return false;
        };
        if let Some(block) = self.block_mut(id) {
            block.col_index = col_index;
            block.room_label = room.trim().to_string();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = Schedule::default();
        assert_eq!(schedule.buildings.len(), 2);
        assert_eq!(schedule.buildings[0].name, "Villa");
        assert_eq!(schedule.buildings[1].name, "Kolibri");
        assert_eq!(schedule.buildings[0].column_count(Weekday::Mo), 1);
        assert!(schedule.find_building_by_name("Kolibri").is_some());
        assert!(schedule.find_building_by_name("Schloss").is_none());
    }

    #[test]
    fn test_insert_column_shifts_only_later_blocks() {
        let mut schedule = Schedule::default();
        let building_id = schedule.buildings[0].id;
        // Three more Monday columns so blocks can sit at indices 0..=3.
        for room in ["102", "103", "104"] {
            schedule
                .insert_column_at(building_id, Weekday::Mo, usize::MAX, room)
                .unwrap();
        }

        let mut ids = Vec::new();
        for col in 0..4 {
            let block =
                ActivityBlock::new(building_id, Weekday::Mo, col, 45.0, 30.0, format!("S{col}"));
            ids.push(schedule.add_block(block));
        }
        // A block on another day must never shift.
        let tuesday =
            schedule.add_block(ActivityBlock::new(building_id, Weekday::Di, 0, 45.0, 30.0, "Di"));

        let inserted = schedule
            .insert_column_at(building_id, Weekday::Mo, 2, "Neu")
            .unwrap();
        assert_eq!(inserted, 2);

        let cols: Vec<usize> = ids
            .iter()
            .map(|id| schedule.find_block(*id).unwrap().col_index)
            .collect();
        // Indices < 2 unchanged, >= 2 incremented by exactly one.
        assert_eq!(cols, vec![0, 1, 3, 4]);
        assert_eq!(schedule.find_block(tuesday).unwrap().col_index, 0);
    }

    #[test]
    fn test_ensure_column_appends_at_end_of_day_group() {
        let mut schedule = Schedule::default();
        let building_id = schedule.buildings[0].id;

        // Existing room resolves without inserting.
        assert_eq!(schedule.ensure_column(building_id, Weekday::Mo, "101"), Some(0));
        assert_eq!(schedule.find_building(building_id).unwrap().column_count(Weekday::Mo), 1);

        // Unknown room appends a new column after all Monday columns.
        assert_eq!(schedule.ensure_column(building_id, Weekday::Mo, "Aula"), Some(1));
        let building = schedule.find_building(building_id).unwrap();
        assert_eq!(building.rooms_for_day(Weekday::Mo), vec!["101", "Aula"]);
    }

    #[test]
    fn test_move_block_to_room_creates_missing_column() {
        let mut schedule = Schedule::default();
        let building_id = schedule.buildings[0].id;
        let id = schedule.add_block(ActivityBlock::new(building_id, Weekday::Mo, 0, 45.0, 30.0, "Kunst"));

        // Existing room: block moves to its column.
        assert!(schedule.move_block_to_room(id, "101"));
        assert_eq!(schedule.find_block(id).unwrap().col_index, 0);

        // Unknown room: a column is created at the end and the block follows.
        assert!(schedule.move_block_to_room(id, "Werkraum"));
        let block = schedule.find_block(id).unwrap();
        assert_eq!(block.col_index, 1);
        assert_eq!(block.room_label, "Werkraum");
        assert_eq!(
            schedule.find_building(building_id).unwrap().rooms_for_day(Weekday::Mo),
            vec!["101", "Werkraum"]
        );
    }

    #[test]
    fn test_toggle_day_round_trip() {
        let mut schedule = Schedule::default();
        assert!(schedule.toggle_day(Weekday::Sa));
        assert!(schedule.is_day_hidden(Weekday::Sa));
        assert!(!schedule.toggle_day(Weekday::Sa));
        assert!(!schedule.is_day_hidden(Weekday::Sa));
    }

    #[test]
    fn test_visible_blocks_skip_hidden_days() {
        let mut schedule = Schedule::default();
        let building_id = schedule.buildings[0].id;
        schedule.add_block(ActivityBlock::new(building_id, Weekday::Mo, 0, 45.0, 30.0, "A"));
        schedule.add_block(ActivityBlock::new(building_id, Weekday::Di, 0, 45.0, 30.0, "B"));
        schedule.toggle_day(Weekday::Di);

        let visible: Vec<&str> = schedule
            .visible_blocks()
            .map(|b| b.subject.as_str())
            .collect();
        assert_eq!(visible, vec!["A"]);
    }
}
