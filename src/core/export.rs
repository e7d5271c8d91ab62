//! Spreadsheet export: flatten the visible blocks into records and ship them
//! to the local export service.
//!
//! Times are reconstructed preferentially from the block's own displayed
//! text; the grid geometry is the fallback when the text is missing or
//! implausible. The service contract is a form-encoded POST of the JSON
//! record list plus a CSRF token, answered with the spreadsheet bytes.

use log::{info, warn};
use serde::Serialize;
use std::time::Duration;

use crate::constants::{EXPORT_PROBE_TIMEOUT_MS, EXPORT_SERVER_BASE};
use crate::state::Schedule;

use super::color;
use super::geometry::GridMetrics;
use super::timegrid;

/// File name offered for the downloaded spreadsheet.
pub const EXPORT_FILE_NAME: &str = "schedule_export.xlsx";

/// One exported activity, flat for the spreadsheet generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub subject: String,
    pub students: String,
    pub teacher: String,
    pub room: String,
    pub room_display: String,
    pub building: String,
    pub day: String,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    /// Minutes
    pub duration: u32,
    /// "#rrggbb"
    pub color: String,
}

/// Collect every visible block into export records, building by building in
/// display order.
pub fn collect_schedule_data(schedule: &Schedule) -> Vec<ExportRecord> {
    let metrics = GridMetrics::from_settings(&schedule.settings);
    let mut records = Vec::new();

    for building in &schedule.buildings {
        for block in schedule
            .visible_blocks()
            .filter(|b| b.building_id == building.id)
        {
            let (start_min, end_min) = block_time_range(block, schedule, &metrics);
            let room = building
                .room_at(block.day, block.col_index)
                .unwrap_or_else(|| {
                    warn!(
                        "block {} references missing column {} {} in {}",
                        block.id,
                        block.day,
                        block.col_index,
                        building.name
                    );
                    ""
                })
                .to_string();

            records.push(ExportRecord {
                subject: block.subject.clone(),
                students: block.students.clone(),
                teacher: block.teacher.clone(),
                room: room.clone(),
                room_display: room,
                building: building.name.clone(),
                day: block.day.code().to_string(),
                start_time: timegrid::minutes_to_time(start_min),
                end_time: timegrid::minutes_to_time(end_min),
                duration: end_min.saturating_sub(start_min),
                color: color::rgb_to_hex(&block.color),
            });
        }
    }

    records
}

/// Reconstruct a block's time range: the displayed text wins when it scans as
/// a plausible `HH:MM-HH:MM`, otherwise derive it from the block's geometry.
fn block_time_range(
    block: &crate::state::ActivityBlock,
    schedule: &Schedule,
    metrics: &GridMetrics,
) -> (u32, u32) {
    if let Some((start, end)) = timegrid::scan_time_range(&block.display_text()) {
        if timegrid::plausible_range(start, end) {
            return (start, end);
        }
        warn!(
            "block {} shows implausible time range {}-{}; using geometry",
            block.id, start, end
        );
    }

    let original_top = block.original_top.unwrap_or(block.top);
    let row = metrics.row_at(original_top);
    let start = schedule.settings.minutes_for_row(row);
    let span = metrics.row_span_for_height(block.height);
    let end = start + span as u32 * schedule.settings.time_interval_min;
    (start, end)
}

/// Probe the export service's liveness endpoint with a short timeout.
pub async fn check_server_availability(client: &reqwest::Client) -> bool {
    let probe = client
        .get(format!("{EXPORT_SERVER_BASE}/"))
        .timeout(Duration::from_millis(EXPORT_PROBE_TIMEOUT_MS))
        .send()
        .await;
    match probe {
        Ok(response) => response.status().is_success(),
        Err(err) => {
            warn!("export server probe failed: {err}");
            false
        }
    }
}

/// Send the records to the export service and return the spreadsheet bytes.
pub async fn export_to_excel(
    client: &reqwest::Client,
    records: &[ExportRecord],
    csrf_token: &str,
) -> Result<Vec<u8>, String> {
    let payload = serde_json::to_string(records)
        .map_err(|err| format!("failed to serialize schedule data: {err}"))?;
    info!("exporting {} records to {}", records.len(), EXPORT_SERVER_BASE);

    let response = client
        .post(format!("{EXPORT_SERVER_BASE}/export_to_excel"))
        .form(&[("schedule_data", payload.as_str()), ("csrf_token", csrf_token)])
        .send()
        .await
        .map_err(|err| format!("network error: {err}"))?;

    if !response.status().is_success() {
        return Err(format!("export server returned {}", response.status()));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|err| format!("failed to read spreadsheet response: {err}"))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActivityBlock, Weekday};

    fn schedule_with_block(time_label: &str) -> (Schedule, uuid::Uuid) {
        let mut schedule = Schedule::new("Export Test");
        let building_id = schedule.buildings[0].id;
        let metrics = GridMetrics::from_settings(&schedule.settings);
        let mut block = ActivityBlock::new(
            building_id,
            Weekday::Mo,
            0,
            metrics.top_for_row(0),
            metrics.height_for_rows(18),
            "Mathematik",
        );
        block.teacher = "Frau Weber".to_string();
        block.students = "Gruppe A".to_string();
        block.time_label = time_label.to_string();
        block.color = "rgb(255,0,0)".to_string();
        let id = schedule.add_block(block);
        (schedule, id)
    }

    #[test]
    fn test_time_extracted_from_block_text() {
        let (schedule, _) = schedule_with_block("09:00-10:30");
        let records = collect_schedule_data(&schedule);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start_time, "09:00");
        assert_eq!(records[0].end_time, "10:30");
        assert_eq!(records[0].duration, 90);
        assert_eq!(records[0].color, "#ff0000");
        assert_eq!(records[0].room, "101");
        assert_eq!(records[0].day, "Mo");
    }

    #[test]
    fn test_geometry_fallback_without_time_text() {
        let (schedule, _) = schedule_with_block("");
        let records = collect_schedule_data(&schedule);
        // Row 0 starts at grid start; 18 rows of 5 minutes.
        assert_eq!(records[0].start_time, "09:00");
        assert_eq!(records[0].end_time, "10:30");
        assert_eq!(records[0].duration, 90);
    }

    #[test]
    fn test_backwards_time_text_falls_back_to_geometry() {
        let (schedule, _) = schedule_with_block("10:30-09:00");
        let records = collect_schedule_data(&schedule);
        assert_eq!(records[0].start_time, "09:00");
        assert_eq!(records[0].end_time, "10:30");
    }

    #[test]
    fn test_hidden_day_blocks_are_skipped() {
        let (mut schedule, _) = schedule_with_block("09:00-10:30");
        schedule.toggle_day(Weekday::Mo);
        assert!(collect_schedule_data(&schedule).is_empty());
    }

    #[test]
    fn test_payload_field_names() {
        let (schedule, _) = schedule_with_block("09:00-10:30");
        let records = collect_schedule_data(&schedule);
        let json = serde_json::to_string(&records).unwrap();
        for field in [
            "subject",
            "students",
            "teacher",
            "room_display",
            "building",
            "start_time",
            "end_time",
            "duration",
        ] {
            assert!(json.contains(field), "missing field {field}");
        }
    }
}
