//! Grid snapping for component positions and sizes.

use serde::{Deserialize, Serialize};

/// Default logical grid spacing.
pub const DEFAULT_GRID_SIZE: i32 = 10;

/// Snap a position coordinate to the grid by truncating toward zero.
pub fn snap_position(value: i32, grid_size: i32) -> i32 {
    (value / grid_size) * grid_size
}

/// Snap a size to the nearest grid multiple.
///
/// Sizes round to nearest while positions truncate; the asymmetry is
/// deliberate, so that shrinking a component past a half-cell grows it back to
/// the closer multiple instead of always collapsing downward.
pub fn snap_size(value: i32, grid_size: i32) -> i32 {
    ((value + grid_size / 2) / grid_size) * grid_size
}

/// Grid configuration for snapping and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    grid_size: i32,
    pub snap_to_grid: bool,
    pub show_grid: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snap_to_grid: true,
            show_grid: true,
        }
    }
}

impl GridSettings {
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Set the logical grid spacing. Out-of-range values are a caller error,
    /// clamped at this boundary rather than propagated.
    pub fn set_grid_size(&mut self, grid_size: i32) {
        self.grid_size = grid_size.max(1);
    }
}
