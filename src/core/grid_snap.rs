//! Snapping a dragged block onto the grid.
//!
//! The primary path scans every visible cell for the one nearest to the
//! block's position under a weighted distance (horizontal misses cost double)
//! and takes that cell's (day, column, row) directly. When no cells are
//! visible it falls back to the offset-arithmetic transform with a rounded
//! row, so a release near a boundary still lands on the nearest row.

use crate::state::ActivityBlock;

use super::geometry::{
    self, DaySpan, GridMetrics, GridPosition,
};

/// Outcome of snapping a point to the grid: the slot plus its pixel anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub position: GridPosition,
    /// Left edge of the snapped column.
    pub left: f64,
    /// Uncompensated top of the snapped row.
    pub top: f64,
}

/// Find the visible cell whose center minimizes `2*|Δx| + |Δy|` from
/// `(left, top)`. Returns `None` when the grid has no visible cells.
pub fn find_closest_cell(
    metrics: &GridMetrics,
    spans: &[DaySpan],
    row_count: usize,
    left: f64,
    top: f64,
) -> Option<GridPosition> {
    let mut best: Option<(f64, GridPosition)> = None;

    for span in spans {
        let visible = (span.width() / metrics.day_col_width).round() as usize;
        for col in 0..visible {
            let cell_left = geometry::left_for_column(metrics, spans, span.day, col);
            let center_x = cell_left + metrics.day_col_width / 2.0;
            for row in 0..row_count {
                let center_y = metrics.top_for_row(row) + metrics.cell_height / 2.0;
                let distance = 2.0 * (left - center_x).abs() + (top - center_y).abs();
                let candidate = GridPosition {
                    day: span.day,
                    col_index: col,
                    row_index: row,
                };
                match best {
                    Some((best_distance, _)) if distance >= best_distance => {}
                    _ => best = Some((distance, candidate)),
                }
            }
        }
    }

    best.map(|(_, position)| position)
}

/// Snap `(left, top)` to the grid: nearest visible cell, or the offset-based
/// fallback when the grid has no cells to measure against.
pub fn snap_to_grid(
    metrics: &GridMetrics,
    spans: &[DaySpan],
    row_count: usize,
    left: f64,
    top: f64,
) -> Option<SnapResult> {
    let position = match find_closest_cell(metrics, spans, row_count, left, top) {
        Some(position) => position,
        None => {
            let fallback = geometry::position_from_pixels(metrics, spans, left, top)?;
            GridPosition {
                row_index: metrics.row_at_rounded(top),
                ..fallback
            }
        }
    };

    Some(SnapResult {
        position,
        left: geometry::left_for_column(metrics, spans, position.day, position.col_index),
        top: metrics.top_for_row(position.row_index),
    })
}

/// Apply a snap result to a dropped block.
///
/// The uncompensated top is recomputed exactly from the snapped row — never
/// by inverting the compensation curve against the rendered top — so repeated
/// drags cannot accumulate drift. The compensated flag is cleared so the next
/// reposition pass applies fresh compensation.
pub fn apply_drop(block: &mut ActivityBlock, snap: &SnapResult) {
    block.day = snap.position.day;
    block.col_index = snap.position.col_index;
    block.original_top = Some(snap.top);
    block.top = snap.top;
    block.compensated = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compensation::CompensationSettings;
    use crate::core::geometry::{apply_compensation_pass, day_spans};
    use crate::state::{GridSettings, Weekday};
    use uuid::Uuid;

    fn setup() -> (GridMetrics, Vec<DaySpan>, usize) {
        let settings = GridSettings::default();
        let metrics = GridMetrics::from_settings(&settings);
        let counts = vec![
            (Weekday::Mo, 2),
            (Weekday::Di, 1),
            (Weekday::Mi, 0),
            (Weekday::Do, 1),
            (Weekday::Fr, 0),
            (Weekday::Sa, 0),
        ];
        let spans = day_spans(&metrics, &counts);
        (metrics, spans, settings.row_count())
    }

    #[test]
    fn test_snap_picks_weighted_nearest_cell() {
        let (metrics, spans, rows) = setup();
        // A point slightly inside Monday's second column, near row 3.
        let left = metrics.time_col_width + 100.0 + 12.0;
        let top = metrics.top_for_row(3) + 4.0;
        let snap = snap_to_grid(&metrics, &spans, rows, left, top).unwrap();
        assert_eq!(snap.position.day, Weekday::Mo);
        assert_eq!(snap.position.col_index, 1);
        assert_eq!(snap.position.row_index, 3);
        assert_eq!(snap.left, metrics.time_col_width + 100.0);
    }

    #[test]
    fn test_horizontal_distance_weighs_double() {
        let (metrics, spans, _) = setup();
        // A probe 70px from column 0's center and 30px from column 1's:
        // weighted distances 140 vs 60, column 1 wins.
        let col0_center_x = metrics.time_col_width + 50.0;
        let row0_center_y = metrics.top_for_row(0) + metrics.cell_height / 2.0;
        let probe = find_closest_cell(
            &metrics,
            &spans,
            10,
            col0_center_x + 70.0,
            row0_center_y,
        )
        .unwrap();
        assert_eq!(probe.col_index, 1);
        assert_eq!(probe.day, Weekday::Mo);
    }

    #[test]
    fn test_fallback_when_no_cells_visible() {
        let settings = GridSettings::default();
        let metrics = GridMetrics::from_settings(&settings);
        let counts: Vec<(Weekday, usize)> =
            Weekday::ORDER.iter().map(|&day| (day, 0)).collect();
        let spans = day_spans(&metrics, &counts);

        // No visible cells anywhere: offset fallback with rounded row.
        let top = metrics.top_for_row(5) - 1.0;
        let snap = snap_to_grid(&metrics, &spans, settings.row_count(), 90.0, top).unwrap();
        assert_eq!(snap.position.day, Weekday::Mo);
        assert_eq!(snap.position.col_index, 0);
        assert_eq!(snap.position.row_index, 5);
    }

    #[test]
    fn test_repeated_drops_do_not_drift() {
        let (metrics, spans, rows) = setup();
        let comp = CompensationSettings::default();
        let mut block = ActivityBlock::new(
            Uuid::new_v4(),
            Weekday::Mo,
            0,
            metrics.top_for_row(20),
            45.0,
            "Physik",
        );

        // Dropping at the same pointer position over and over, with a full
        // compensation pass between drops, must keep the uncompensated top
        // pinned to the same row forever.
        let pointer_left = metrics.time_col_width + 10.0;
        let pointer_top = metrics.top_for_row(30) + 2.0;
        let expected_original = metrics.top_for_row(30);

        for _ in 0..5 {
            let snap = snap_to_grid(&metrics, &spans, rows, pointer_left, pointer_top).unwrap();
            apply_drop(&mut block, &snap);
            assert_eq!(block.original_top, Some(expected_original));

            let mut pass = [block.clone()];
            apply_compensation_pass(&mut pass, &metrics, &comp);
            [block] = pass;
            assert_eq!(block.original_top, Some(expected_original));
        }
    }
}
