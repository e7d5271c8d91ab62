use std::fs;
use std::io;
use std::path::Path;

use super::Schedule;

impl Schedule {
    // =========================================================================
    // Save/Load
    // =========================================================================

    /// Save the schedule to its file
    #[allow(dead_code)]
    pub fn save(&self) -> io::Result<()> {
        let path = self
            .file_path
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Schedule path not set"))?;
        self.save_to(path)
    }

    /// Save the schedule to a specific file
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Load a schedule from a file
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let mut schedule: Schedule = serde_json::from_str(&json)?;
        schedule.file_path = Some(path.to_path_buf());
        Ok(schedule)
    }

    /// Save the current schedule to a new file (adopting the path)
    pub fn save_as(&mut self, path: &Path) -> io::Result<()> {
        self.file_path = Some(path.to_path_buf());
        self.save_to(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActivityBlock, Weekday};

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");

        let mut schedule = Schedule::new("Test Schedule");
        let building_id = schedule.buildings[0].id;
        schedule.add_block(ActivityBlock::new(
            building_id,
            Weekday::Mi,
            0,
            107.0,
            90.0,
            "Biologie",
        ));
        schedule.save_to(&path).unwrap();

        let loaded = Schedule::load(&path).unwrap();
        assert_eq!(loaded.name, schedule.name);
        assert_eq!(loaded.blocks.len(), 1);
        assert_eq!(loaded.blocks[0].subject, "Biologie");
        assert_eq!(loaded.file_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_save_without_path_fails() {
        let schedule = Schedule::default();
        assert!(schedule.save().is_err());
    }
}
