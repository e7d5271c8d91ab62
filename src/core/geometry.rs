//! Grid geometry: the pixel ↔ (day, column, row) transforms and the
//! per-row compensation pass.
//!
//! All functions are stateless over an explicit [`GridMetrics`] value; the
//! reposition pass mutates blocks in place the way the renderer expects
//! (`top = original_top - compensation(row)`).

use log::warn;

use crate::state::{ActivityBlock, GridSettings, Weekday};

use super::compensation::CompensationSettings;

/// Pixel metrics of one building's rendered grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Height of one row cell in pixels.
    pub cell_height: f64,
    /// Width of one day sub-column in pixels.
    pub day_col_width: f64,
    /// Width of the leading time column in pixels.
    pub time_col_width: f64,
    /// Height of the header row in pixels.
    pub header_height: f64,
    /// Cell border thickness in pixels.
    pub border_width: f64,
    /// Container left padding in pixels.
    pub pad_left: f64,
    /// Container top padding in pixels.
    pub pad_top: f64,
}

impl GridMetrics {
    /// Metrics for a grid rendered with `settings` and no container padding.
    pub fn from_settings(settings: &GridSettings) -> Self {
        Self {
            cell_height: settings.cell_height,
            day_col_width: settings.day_col_width,
            time_col_width: settings.time_col_width,
            header_height: settings.header_height,
            border_width: settings.border_width,
            pad_left: 0.0,
            pad_top: 0.0,
        }
    }

    /// Vertical distance between consecutive row tops.
    pub fn row_pitch(&self) -> f64 {
        self.cell_height + self.border_width
    }

    /// Uncompensated top offset of `row`.
    pub fn top_for_row(&self, row: usize) -> f64 {
        self.header_height + self.pad_top + row as f64 * self.row_pitch()
    }

    /// Row whose cell contains the uncompensated offset `top` (floor),
    /// clamped to zero.
    pub fn row_at(&self, top: f64) -> usize {
        let row = ((top - self.header_height - self.pad_top) / self.row_pitch()).floor();
        row.max(0.0) as usize
    }

    /// Row nearest to the offset `top` (round), clamped to zero. Used by the
    /// drop path so a block released just above a boundary still lands on the
    /// nearest row.
    pub fn row_at_rounded(&self, top: f64) -> usize {
        let row = ((top - self.header_height - self.pad_top) / self.row_pitch()).round();
        row.max(0.0) as usize
    }

    /// Pixel height of a block spanning `rows` rows. Internal borders count
    /// at half thickness.
    pub fn height_for_rows(&self, rows: usize) -> f64 {
        let internal_borders = rows.saturating_sub(1);
        rows as f64 * self.cell_height + internal_borders as f64 * self.border_width * 0.5
    }

    /// Number of rows covered by a block of pixel `height` (ceil, at least 1).
    pub fn row_span_for_height(&self, height: f64) -> usize {
        let span = (height / (self.cell_height + self.border_width * 0.5)).ceil();
        (span.max(1.0)) as usize
    }
}

/// Horizontal pixel interval `[start_px, end_px)` one day's visible columns
/// occupy, measured from the left edge of the first day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySpan {
    pub day: Weekday,
    pub start_px: f64,
    pub end_px: f64,
}

impl DaySpan {
    pub fn width(&self) -> f64 {
        self.end_px - self.start_px
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.start_px && offset < self.end_px
    }
}

/// A grid slot addressed by day, column index, and row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub day: Weekday,
    pub col_index: usize,
    pub row_index: usize,
}

/// Accumulate visible-column widths per day, in fixed day order, into spans.
/// A day whose columns are all hidden yields a zero-width span.
pub fn day_spans(metrics: &GridMetrics, visible_counts: &[(Weekday, usize)]) -> Vec<DaySpan> {
    let mut spans = Vec::with_capacity(visible_counts.len());
    let mut cursor = 0.0;
    for &(day, count) in visible_counts {
        let width = count as f64 * metrics.day_col_width;
        spans.push(DaySpan {
            day,
            start_px: cursor,
            end_px: cursor + width,
        });
        cursor += width;
    }
    spans
}

/// Number of visible columns a span covers.
fn visible_columns(metrics: &GridMetrics, span: &DaySpan) -> usize {
    (span.width() / metrics.day_col_width).round() as usize
}

/// Pick the span containing `offset`. Falls back to the last non-degenerate
/// span (an all-hidden day never claims a pointer), then to the first day.
fn span_for_offset<'a>(spans: &'a [DaySpan], offset: f64) -> Option<&'a DaySpan> {
    spans
        .iter()
        .find(|span| span.contains(offset))
        .or_else(|| spans.iter().rev().find(|span| span.width() > 0.0))
        .or_else(|| spans.first())
}

/// Pixel → grid: locate the (day, column, row) slot under an absolute
/// `(left, top)` point inside the building container.
///
/// The row uses the floor rule; the column index clamps into the day's
/// visible range (0 for an empty day).
pub fn position_from_pixels(
    metrics: &GridMetrics,
    spans: &[DaySpan],
    left: f64,
    top: f64,
) -> Option<GridPosition> {
    let span = span_for_offset(spans, day_offset(metrics, left))?;
    let col_index = column_within_span(metrics, span, day_offset(metrics, left));
    Some(GridPosition {
        day: span.day,
        col_index,
        row_index: metrics.row_at(top),
    })
}

/// Offset of `left` within the day-column area (0 at the first day column).
pub fn day_offset(metrics: &GridMetrics, left: f64) -> f64 {
    (left - metrics.time_col_width - metrics.pad_left).max(0.0)
}

/// Column index within `span` for a day-area `offset`, clamped to the span's
/// visible columns.
pub fn column_within_span(metrics: &GridMetrics, span: &DaySpan, offset: f64) -> usize {
    let within_day = (offset - span.start_px).max(0.0);
    let mut col = (within_day / metrics.day_col_width).floor() as usize;
    let visible = visible_columns(metrics, span);
    if visible > 0 && col >= visible {
        col = visible - 1;
    }
    if visible == 0 {
        col = 0;
    }
    col
}

/// Grid → pixel: left edge of column (`day`, `col_index`), summing the widths
/// of all preceding days' visible columns plus preceding columns of the day.
pub fn left_for_column(
    metrics: &GridMetrics,
    spans: &[DaySpan],
    day: Weekday,
    col_index: usize,
) -> f64 {
    let day_start = spans
        .iter()
        .find(|span| span.day == day)
        .map(|span| span.start_px)
        .unwrap_or(0.0);
    metrics.pad_left + metrics.time_col_width + day_start + col_index as f64 * metrics.day_col_width
}

/// The empirical downward correction for `row`: `row^exponent * factor`.
pub fn compensation_offset(row: usize, settings: &CompensationSettings) -> f64 {
    (row as f64).powf(settings.exponent) * settings.factor
}

/// Full reposition pass: recompute every block's rendered `top` from its
/// uncompensated offset and mark it compensated.
///
/// The row is always derived from `original_top`, never from the compensated
/// `top`. Blocks without a recorded `original_top` are seeded from the current
/// rendered `top` — that bakes any previously applied compensation into the
/// "true" offset, so it is logged.
pub fn apply_compensation_pass(
    blocks: &mut [ActivityBlock],
    metrics: &GridMetrics,
    settings: &CompensationSettings,
) {
    for block in blocks.iter_mut() {
        let original_top = match block.original_top {
            Some(top) => top,
            None => {
                warn!(
                    "block {} has no recorded original top; seeding from rendered top {:.1}",
                    block.id, block.top
                );
                block.original_top = Some(block.top);
                block.top
            }
        };
        let row = metrics.row_at(original_top);
        block.top = original_top - compensation_offset(row, settings);
        block.compensated = true;
    }
}

/// Reposition a block for a new time range: derive the uncompensated top from
/// the start row and the height from the covered row span, and clear the
/// compensated flag so the next pass reapplies the curve.
pub fn set_block_time_range(
    block: &mut ActivityBlock,
    metrics: &GridMetrics,
    settings: &GridSettings,
    start_min: u32,
    end_min: u32,
) {
    let start_row = settings.row_for_minutes(start_min);
    let end_row = settings.row_for_minutes(end_min);
    let rows = end_row.saturating_sub(start_row).max(1);

    block.original_top = Some(metrics.top_for_row(start_row));
    block.top = metrics.top_for_row(start_row);
    block.height = metrics.height_for_rows(rows);
    block.compensated = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Building, GridSettings};
    use uuid::Uuid;

    fn metrics() -> GridMetrics {
        GridMetrics::from_settings(&GridSettings::default())
    }

    fn spans_for(counts: &[(Weekday, usize)]) -> Vec<DaySpan> {
        day_spans(&metrics(), counts)
    }

    #[test]
    fn test_day_spans_accumulate_in_fixed_order() {
        let building = Building::with_default_columns("Villa", "101");
        let counts = building.visible_column_counts(&[]);
        let spans = spans_for(&counts);
        assert_eq!(spans.len(), 6);
        assert_eq!(spans[0].start_px, 0.0);
        assert_eq!(spans[0].end_px, 100.0);
        assert_eq!(spans[5].start_px, 500.0);
    }

    #[test]
    fn test_hidden_day_is_zero_width_and_skipped() {
        let counts = vec![
            (Weekday::Mo, 2),
            (Weekday::Di, 0),
            (Weekday::Mi, 1),
            (Weekday::Do, 0),
            (Weekday::Fr, 0),
            (Weekday::Sa, 0),
        ];
        let m = metrics();
        let spans = spans_for(&counts);
        assert_eq!(spans[1].width(), 0.0);

        // A point far right of everything falls back to the last
        // non-degenerate day, not a hidden one.
        let pos = position_from_pixels(&m, &spans, 2000.0, 100.0).unwrap();
        assert_eq!(pos.day, Weekday::Mi);
        assert_eq!(pos.col_index, 0);
    }

    #[test]
    fn test_pixel_grid_round_trip_for_every_visible_column() {
        let m = metrics();
        let counts = vec![
            (Weekday::Mo, 2),
            (Weekday::Di, 1),
            (Weekday::Mi, 3),
            (Weekday::Do, 1),
            (Weekday::Fr, 2),
            (Weekday::Sa, 1),
        ];
        let spans = spans_for(&counts);
        for &(day, count) in &counts {
            for col in 0..count {
                // An interior point of the column must map back to it.
                let left = left_for_column(&m, &spans, day, col) + m.day_col_width / 2.0;
                let top = m.top_for_row(4) + 1.0;
                let pos = position_from_pixels(&m, &spans, left, top).unwrap();
                assert_eq!(pos.day, day, "day mismatch for {day} col {col}");
                assert_eq!(pos.col_index, col, "col mismatch for {day} col {col}");
                assert_eq!(pos.row_index, 4);
            }
        }
    }

    #[test]
    fn test_column_clamps_to_visible_range() {
        let m = metrics();
        let spans = spans_for(&[(Weekday::Mo, 2)]);
        // Inside Monday but beyond its last column: clamp to count - 1.
        let col = column_within_span(&m, &spans[0], 199.9);
        assert_eq!(col, 1);
        let col = column_within_span(&m, &spans[0], -10.0);
        assert_eq!(col, 0);
    }

    #[test]
    fn test_row_floor_and_round_disagree_near_boundary() {
        let m = metrics();
        // Just under one pitch above row 3's top.
        let top = m.top_for_row(3) - 1.0;
        assert_eq!(m.row_at(top), 2);
        assert_eq!(m.row_at_rounded(top), 3);
    }

    #[test]
    fn test_compensation_monotonic_for_exponent_ge_one() {
        let settings = CompensationSettings {
            factor: 0.4,
            exponent: 1.02,
        };
        let mut previous = -1.0;
        for row in 0..200 {
            let value = compensation_offset(row, &settings);
            assert!(value >= previous, "not monotonic at row {row}");
            previous = value;
        }
    }

    #[test]
    fn test_compensation_pass_derives_row_from_original_top() {
        let m = metrics();
        let settings = CompensationSettings::default();
        let original = m.top_for_row(10);
        let mut blocks = vec![ActivityBlock::new(
            Uuid::new_v4(),
            Weekday::Mo,
            0,
            original,
            90.0,
            "Sport",
        )];

        apply_compensation_pass(&mut blocks, &m, &settings);
        let expected = original - compensation_offset(10, &settings);
        assert!((blocks[0].top - expected).abs() < 1e-9);
        assert!(blocks[0].compensated);

        // A second pass must not drift: same original, same rendered top.
        apply_compensation_pass(&mut blocks, &m, &settings);
        assert!((blocks[0].top - expected).abs() < 1e-9);
        assert_eq!(blocks[0].original_top, Some(original));
    }

    #[test]
    fn test_compensation_pass_seeds_missing_original_top() {
        let m = metrics();
        let settings = CompensationSettings::default();
        let mut block = ActivityBlock::new(Uuid::new_v4(), Weekday::Di, 0, 120.0, 30.0, "Musik");
        block.original_top = None;
        block.top = 120.0;
        let mut blocks = vec![block];

        apply_compensation_pass(&mut blocks, &m, &settings);
        assert_eq!(blocks[0].original_top, Some(120.0));
    }

    #[test]
    fn test_set_block_time_range() {
        let m = metrics();
        let settings = GridSettings::default();
        let mut block = ActivityBlock::new(Uuid::new_v4(), Weekday::Mo, 0, 45.0, 15.0, "Deutsch");

        // 09:00-10:30 covers 18 five-minute rows from row 0.
        set_block_time_range(&mut block, &m, &settings, 540, 630);
        assert_eq!(block.original_top, Some(m.top_for_row(0)));
        assert_eq!(block.height, m.height_for_rows(18));
        assert!(!block.compensated);

        // Height accounts for internal borders at half width.
        assert!((block.height - (18.0 * 15.0 + 17.0 * 0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_row_span_inverts_height() {
        let m = metrics();
        for rows in 1..40 {
            let height = m.height_for_rows(rows);
            assert_eq!(m.row_span_for_height(height), rows);
        }
    }
}
