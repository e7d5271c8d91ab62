use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_BLOCK_COLOR;

use super::Weekday;

/// A draggable rectangle representing one scheduled lesson/event.
///
/// `top` is the rendered vertical offset (after compensation);
/// `original_top` is the uncompensated offset the geometry derives rows from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityBlock {
    /// Unique identifier
    pub id: Uuid,
    /// Building whose grid this block sits in.
    pub building_id: Uuid,
    /// Day of the column the block occupies.
    pub day: Weekday,
    /// Position among the day's columns.
    pub col_index: usize,
    /// Rendered vertical offset in pixels.
    pub top: f64,
    /// Uncompensated vertical offset. Absent only for blocks imported from
    /// legacy snapshots; the next reposition pass seeds it from `top`.
    #[serde(default)]
    pub original_top: Option<f64>,
    /// Block height in pixels.
    pub height: f64,
    /// Subject line (first display line).
    pub subject: String,
    /// Teacher line.
    #[serde(default)]
    pub teacher: String,
    /// Student group line.
    #[serde(default)]
    pub students: String,
    /// Room label shown inside the block.
    #[serde(default)]
    pub room_label: String,
    /// Displayed time range text ("HH:MM-HH:MM"); may drift from geometry.
    #[serde(default)]
    pub time_label: String,
    /// Background fill, hex or rgb()/rgba() string.
    #[serde(default = "default_color")]
    pub color: String,
    /// Whether the current `top` already has compensation applied.
    #[serde(default)]
    pub compensated: bool,
}

fn default_color() -> String {
    DEFAULT_BLOCK_COLOR.to_string()
}

impl ActivityBlock {
    /// Create a block at an uncompensated offset.
    pub fn new(
        building_id: Uuid,
        day: Weekday,
        col_index: usize,
        original_top: f64,
        height: f64,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            building_id,
            day,
            col_index,
            top: original_top,
            original_top: Some(original_top),
            height,
            subject: subject.into(),
            teacher: String::new(),
            students: String::new(),
            room_label: String::new(),
            time_label: String::new(),
            color: default_color(),
            compensated: false,
        }
    }

    /// The block's display text, one line per non-empty field, in the order
    /// the block renders them. Export scans this text for a time range.
    pub fn display_text(&self) -> String {
        let mut lines = vec![self.subject.as_str()];
        for line in [
            self.teacher.as_str(),
            self.students.as_str(),
            self.room_label.as_str(),
            self.time_label.as_str(),
        ] {
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        lines.join("\n")
    }
}
