//! Shared UI constants: colors, panel sizing, grid defaults, and timing.
//! These values were previously scattered across the view code and now live
//! in a dedicated module.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_GRID: &str = "#22c55e";
pub const ACCENT_EXPORT: &str = "#3b82f6";
pub const ACCENT_DANGER: &str = "#ef4444";

// Grid metric defaults. The pixel values match the generated schedule pages
// this editor replaces: 15px cells on a 5-minute pitch starting at 09:00.
pub const DEFAULT_CELL_HEIGHT_PX: f64 = 15.0;
pub const DEFAULT_DAY_COL_WIDTH_PX: f64 = 100.0;
pub const DEFAULT_TIME_COL_WIDTH_PX: f64 = 80.0;
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 45.0;
pub const DEFAULT_BORDER_WIDTH_PX: f64 = 0.5;
pub const DEFAULT_TIME_INTERVAL_MIN: u32 = 5;
pub const DEFAULT_GRID_START_MIN: u32 = 9 * 60;
pub const DEFAULT_GRID_END_MIN: u32 = 19 * 60 + 45;

// Compensation curve defaults, tunable from the settings panel.
pub const DEFAULT_COMPENSATION_FACTOR: f64 = 0.4;
pub const DEFAULT_COMPENSATION_EXPONENT: f64 = 1.02;

/// File name of the persisted compensation settings (fixed key, one per user).
pub const COMPENSATION_SETTINGS_FILE: &str = "gridplan_compensation.json";

// Interaction timing: a mouse-down waits this long before it becomes a drag,
// so a double-click can claim the event instead; after a double-click the
// block refuses to drag for the suppression window.
pub const CLICK_DRAG_DELAY_MS: u64 = 200;
pub const DOUBLE_CLICK_DRAG_SUPPRESS_MS: u64 = 500;

/// Base URL of the external spreadsheet export service.
pub const EXPORT_SERVER_BASE: &str = "http://localhost:5000";
pub const EXPORT_PROBE_TIMEOUT_MS: u64 = 2000;

/// Preset block fill colors offered in the create/edit dialog palette.
pub const PRESET_BLOCK_COLORS: [&str; 9] = [
    "#FFD3D3", // light red
    "#FFE9D3", // light orange
    "#FFFBD3", // light yellow
    "#E3FFD3", // light green
    "#D3FFFB", // light cyan
    "#D3DEFF", // light blue
    "#EED3FF", // light violet
    "#FFD3F4", // light pink
    "#D3D3D3", // light gray
];

pub const DEFAULT_BLOCK_COLOR: &str = "#FFFBD3";
