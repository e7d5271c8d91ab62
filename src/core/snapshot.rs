//! Static HTML snapshots of the schedule.
//!
//! A "final" snapshot is a display-only page; an "intermediate" snapshot
//! additionally embeds the schedule JSON so the editor can load it back.
//! Blocks carry the same data attributes the editor works with
//! (`data-day`, `data-col-index`, `data-building`, `data-original-top`,
//! `data-compensated`), so a snapshot stays inspectable.

use chrono::Local;

use crate::state::Schedule;

use super::color;
use super::compensation::CompensationSettings;
use super::geometry::{self, GridMetrics};

/// Whether a snapshot keeps the editable state embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Display-only page.
    Final,
    /// Page with the schedule JSON embedded for reloading.
    Intermediate,
}

impl SnapshotKind {
    /// Default file name offered in the save dialog.
    pub fn default_file_name(self) -> &'static str {
        match self {
            SnapshotKind::Final => "final_schedule.html",
            SnapshotKind::Intermediate => "intermediate_schedule.html",
        }
    }
}

const EMBED_OPEN: &str = "<script id=\"gridplan-schedule\" type=\"application/json\">";
const EMBED_CLOSE: &str = "</script>";

/// Render the schedule as a standalone HTML page.
pub fn render_snapshot(
    schedule: &Schedule,
    comp: &CompensationSettings,
    kind: SnapshotKind,
) -> String {
    let metrics = GridMetrics::from_settings(&schedule.settings);
    let row_count = schedule.settings.row_count();
    let pitch = metrics.row_pitch();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&schedule.name)));
    html.push_str(
        "<style>\n\
         body { font-family: Arial, sans-serif; background: #fff; color: #222; }\n\
         .schedule-container { position: relative; border: 1px solid #ddd; margin-bottom: 24px; }\n\
         .grid-header { position: absolute; top: 0; text-align: center; font-size: 11px; \
         font-weight: bold; border-left: 1px solid #ddd; overflow: hidden; }\n\
         .time-cell { position: absolute; left: 0; font-size: 10px; color: #666; \
         text-align: right; padding-right: 4px; box-sizing: border-box; }\n\
         .activity-block { position: absolute; font-size: 10px; overflow: hidden; \
         border-radius: 3px; border: 1px solid rgba(0,0,0,0.25); box-sizing: border-box; \
         padding: 1px 3px; }\n\
         </style>\n</head>\n<body>\n",
    );
    html.push_str(&format!(
        "<!-- gridplan snapshot, generated {} -->\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    for building in &schedule.buildings {
        let counts = building.visible_column_counts(&schedule.hidden_days);
        let spans = geometry::day_spans(&metrics, &counts);
        let total_width = metrics.time_col_width
            + spans.last().map(|span| span.end_px).unwrap_or(0.0);
        let total_height = metrics.header_height + row_count as f64 * pitch;

        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&building.name)));
        html.push_str(&format!(
            "<div class=\"schedule-container\" data-building=\"{}\" \
             style=\"width: {:.0}px; height: {:.0}px;\">\n",
            escape_html(&building.name),
            total_width,
            total_height
        ));

        // Day/room headers.
        for &(day, count) in &counts {
            for col in 0..count {
                let left = geometry::left_for_column(&metrics, &spans, day, col);
                let label = building
                    .header_label(day, col)
                    .unwrap_or_else(|| day.code().to_string());
                html.push_str(&format!(
                    "<div class=\"grid-header\" style=\"left: {:.1}px; width: {:.1}px; \
                     height: {:.1}px; line-height: {:.1}px;\">{}</div>\n",
                    left,
                    metrics.day_col_width,
                    metrics.header_height,
                    metrics.header_height,
                    escape_html(&label)
                ));
            }
        }

        // Time labels on every quarter hour.
        for row in 0..row_count {
            let minutes = schedule.settings.minutes_for_row(row);
            if minutes % 15 != 0 {
                continue;
            }
            html.push_str(&format!(
                "<div class=\"time-cell\" style=\"top: {:.1}px; width: {:.0}px; \
                 height: {:.1}px;\">{}</div>\n",
                metrics.top_for_row(row),
                metrics.time_col_width,
                metrics.cell_height,
                super::timegrid::minutes_to_time(minutes)
            ));
        }

        // Blocks at compensated positions.
        for block in schedule
            .visible_blocks()
            .filter(|b| b.building_id == building.id)
        {
            let left = geometry::left_for_column(&metrics, &spans, block.day, block.col_index);
            let original_top = block.original_top.unwrap_or(block.top);
            let row = metrics.row_at(original_top);
            let top = original_top - geometry::compensation_offset(row, comp);
            let text_color = color::contrast_text_color(&block.color);

            html.push_str(&format!(
                "<div class=\"activity-block\" data-day=\"{}\" data-col-index=\"{}\" \
                 data-building=\"{}\" data-original-top=\"{:.1}\" data-compensated=\"true\" \
                 style=\"left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; \
                 background-color: {}; color: {};\">",
                block.day.code(),
                block.col_index,
                escape_html(&building.name),
                original_top,
                left,
                top,
                metrics.day_col_width,
                block.height,
                escape_html(&block.color),
                text_color
            ));
            let mut first = true;
            for line in block.display_text().lines() {
                if !first {
                    html.push_str("<br>");
                }
                if first {
                    html.push_str(&format!("<strong>{}</strong>", escape_html(line)));
                } else {
                    html.push_str(&escape_html(line));
                }
                first = false;
            }
            html.push_str("</div>\n");
        }

        html.push_str("</div>\n");
    }

    if kind == SnapshotKind::Intermediate {
        if let Ok(json) = serde_json::to_string(schedule) {
            html.push_str(EMBED_OPEN);
            // "</" must not terminate the script element early.
            html.push_str(&json.replace("</", "<\\/"));
            html.push_str(EMBED_CLOSE);
            html.push('\n');
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Recover the schedule embedded in an intermediate snapshot.
pub fn extract_embedded_schedule(html: &str) -> Option<Schedule> {
    let start = html.find(EMBED_OPEN)? + EMBED_OPEN.len();
    let end = start + html[start..].find(EMBED_CLOSE)?;
    serde_json::from_str(&html[start..end]).ok()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActivityBlock, Weekday};

    fn sample_schedule() -> Schedule {
        let mut schedule = Schedule::new("Snapshot Test");
        let building_id = schedule.buildings[0].id;
        let mut block = ActivityBlock::new(building_id, Weekday::Mo, 0, 45.0, 90.0, "Chemie");
        block.time_label = "09:00-10:30".to_string();
        schedule.add_block(block);
        schedule
    }

    #[test]
    fn test_final_snapshot_contains_blocks_and_attributes() {
        let schedule = sample_schedule();
        let html = render_snapshot(&schedule, &CompensationSettings::default(), SnapshotKind::Final);
        assert!(html.contains("<h2>Villa</h2>"));
        assert!(html.contains("data-day=\"Mo\""));
        assert!(html.contains("data-original-top=\"45.0\""));
        assert!(html.contains("<strong>Chemie</strong>"));
        assert!(!html.contains("gridplan-schedule"));
    }

    #[test]
    fn test_intermediate_snapshot_round_trips() {
        let schedule = sample_schedule();
        let html = render_snapshot(
            &schedule,
            &CompensationSettings::default(),
            SnapshotKind::Intermediate,
        );
        let recovered = extract_embedded_schedule(&html).expect("embedded schedule");
        assert_eq!(recovered.name, schedule.name);
        assert_eq!(recovered.blocks.len(), 1);
        assert_eq!(recovered.blocks[0].subject, "Chemie");
    }

    #[test]
    fn test_final_snapshot_has_no_embedded_state() {
        let schedule = sample_schedule();
        let html = render_snapshot(&schedule, &CompensationSettings::default(), SnapshotKind::Final);
        assert!(extract_embedded_schedule(&html).is_none());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
