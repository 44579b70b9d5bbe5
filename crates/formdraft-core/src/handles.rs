//! Resize handles: placement, hit testing, and the per-handle resize math.

use crate::camera::CanvasPoint;
use crate::component::{Bounds, MIN_SIZE};
use crate::snap::{snap_position, snap_size};
use serde::{Deserialize, Serialize};

/// Edge length of a handle square, in canvas units.
pub const HANDLE_SIZE: i32 = 8;

/// The eight resize handles around a selected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    Nw,
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
}

impl ResizeHandle {
    /// All handles, corners before edges (hit-test priority order).
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Nw,
        ResizeHandle::Ne,
        ResizeHandle::Sw,
        ResizeHandle::Se,
        ResizeHandle::N,
        ResizeHandle::E,
        ResizeHandle::S,
        ResizeHandle::W,
    ];

    /// Center of this handle on the given bounds.
    pub fn center(self, bounds: Bounds) -> CanvasPoint {
        let mid_x = bounds.x + bounds.width / 2;
        let mid_y = bounds.y + bounds.height / 2;
        match self {
            ResizeHandle::Nw => CanvasPoint::new(bounds.x, bounds.y),
            ResizeHandle::N => CanvasPoint::new(mid_x, bounds.y),
            ResizeHandle::Ne => CanvasPoint::new(bounds.right(), bounds.y),
            ResizeHandle::E => CanvasPoint::new(bounds.right(), mid_y),
            ResizeHandle::Se => CanvasPoint::new(bounds.right(), bounds.bottom()),
            ResizeHandle::S => CanvasPoint::new(mid_x, bounds.bottom()),
            ResizeHandle::Sw => CanvasPoint::new(bounds.x, bounds.bottom()),
            ResizeHandle::W => CanvasPoint::new(bounds.x, mid_y),
        }
    }
}

/// Find the handle (if any) under a canvas point, for a component with the
/// given bounds. Each handle is an 8x8 square centered on its anchor.
pub fn hit_test(bounds: Bounds, point: CanvasPoint) -> Option<ResizeHandle> {
    let tolerance = HANDLE_SIZE / 2;
    ResizeHandle::ALL.into_iter().find(|handle| {
        let center = handle.center(bounds);
        (point.x - center.x).abs() <= tolerance && (point.y - center.y).abs() <= tolerance
    })
}

/// Recompute bounds for a drag of `handle` to `mouse` (canvas space).
///
/// Handles on the left/top clamp the moving edge so the opposite edge stays
/// at least `MIN_SIZE` away; handles on the right/bottom clamp the size
/// directly.
pub fn resize(bounds: Bounds, handle: ResizeHandle, mouse: CanvasPoint) -> Bounds {
    let right = bounds.right();
    let bottom = bounds.bottom();

    let mut new = bounds;
    match handle {
        ResizeHandle::Nw => {
            new.x = mouse.x.min(right - MIN_SIZE);
            new.y = mouse.y.min(bottom - MIN_SIZE);
            new.width = right - new.x;
            new.height = bottom - new.y;
        }
        ResizeHandle::N => {
            new.y = mouse.y.min(bottom - MIN_SIZE);
            new.height = bottom - new.y;
        }
        ResizeHandle::Ne => {
            new.y = mouse.y.min(bottom - MIN_SIZE);
            new.width = (mouse.x - bounds.x).max(MIN_SIZE);
            new.height = bottom - new.y;
        }
        ResizeHandle::E => {
            new.width = (mouse.x - bounds.x).max(MIN_SIZE);
        }
        ResizeHandle::Se => {
            new.width = (mouse.x - bounds.x).max(MIN_SIZE);
            new.height = (mouse.y - bounds.y).max(MIN_SIZE);
        }
        ResizeHandle::S => {
            new.height = (mouse.y - bounds.y).max(MIN_SIZE);
        }
        ResizeHandle::Sw => {
            new.x = mouse.x.min(right - MIN_SIZE);
            new.width = right - new.x;
            new.height = (mouse.y - bounds.y).max(MIN_SIZE);
        }
        ResizeHandle::W => {
            new.x = mouse.x.min(right - MIN_SIZE);
            new.width = right - new.x;
        }
    }
    new
}

/// Full resize pipeline: per-handle recompute, optional grid snap (position
/// truncates, size rounds), then the minimum-size clamp.
///
/// Snap happens before the clamp; clamping first could leave a sub-grid size
/// that the snap then shrinks below the minimum again.
pub fn resize_with_snap(
    bounds: Bounds,
    handle: ResizeHandle,
    mouse: CanvasPoint,
    grid: Option<i32>,
) -> Bounds {
    let mut new = resize(bounds, handle, mouse);

    if let Some(grid_size) = grid {
        new.x = snap_position(new.x, grid_size);
        new.y = snap_position(new.y, grid_size);
        new.width = snap_size(new.width, grid_size);
        new.height = snap_size(new.height, grid_size);
    }

    new.width = new.width.max(MIN_SIZE);
    new.height = new.height.max(MIN_SIZE);
    new
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Bounds {
        Bounds::new(50, 50, 100, 30)
    }

    #[test]
    fn test_handle_centers() {
        let bounds = base();
        assert_eq!(ResizeHandle::Nw.center(bounds), CanvasPoint::new(50, 50));
        assert_eq!(ResizeHandle::Se.center(bounds), CanvasPoint::new(150, 80));
        assert_eq!(ResizeHandle::N.center(bounds), CanvasPoint::new(100, 50));
        assert_eq!(ResizeHandle::W.center(bounds), CanvasPoint::new(50, 65));
    }

    #[test]
    fn test_hit_test_tolerance() {
        let bounds = base();
        assert_eq!(
            hit_test(bounds, CanvasPoint::new(50, 50)),
            Some(ResizeHandle::Nw)
        );
        assert_eq!(
            hit_test(bounds, CanvasPoint::new(54, 46)),
            Some(ResizeHandle::Nw)
        );
        assert_eq!(
            hit_test(bounds, CanvasPoint::new(146, 84)),
            Some(ResizeHandle::Se)
        );
        assert_eq!(hit_test(bounds, CanvasPoint::new(60, 60)), None);
    }

    #[test]
    fn test_se_resize_grows() {
        let new = resize(base(), ResizeHandle::Se, CanvasPoint::new(200, 120));
        assert_eq!(new, Bounds::new(50, 50, 150, 70));
    }

    #[test]
    fn test_se_resize_clamps_to_min() {
        // Dragging the SE handle past the NW corner must clamp, not flip.
        let new = resize(base(), ResizeHandle::Se, CanvasPoint::new(40, 40));
        assert_eq!(new, Bounds::new(50, 50, MIN_SIZE, MIN_SIZE));
    }

    #[test]
    fn test_nw_resize_moves_origin() {
        let new = resize(base(), ResizeHandle::Nw, CanvasPoint::new(30, 40));
        assert_eq!(new, Bounds::new(30, 40, 120, 40));
    }

    #[test]
    fn test_nw_resize_clamps_against_opposite_edge() {
        let new = resize(base(), ResizeHandle::Nw, CanvasPoint::new(500, 500));
        assert_eq!(new.x, 150 - MIN_SIZE);
        assert_eq!(new.y, 80 - MIN_SIZE);
        assert_eq!(new.width, MIN_SIZE);
        assert_eq!(new.height, MIN_SIZE);
    }

    #[test]
    fn test_edge_handles_keep_orthogonal_axis() {
        let east = resize(base(), ResizeHandle::E, CanvasPoint::new(180, 999));
        assert_eq!(east, Bounds::new(50, 50, 130, 30));

        let north = resize(base(), ResizeHandle::N, CanvasPoint::new(999, 40));
        assert_eq!(north, Bounds::new(50, 40, 100, 40));

        let west = resize(base(), ResizeHandle::W, CanvasPoint::new(30, 0));
        assert_eq!(west, Bounds::new(30, 50, 120, 30));

        let south = resize(base(), ResizeHandle::S, CanvasPoint::new(0, 95));
        assert_eq!(south, Bounds::new(50, 50, 100, 45));
    }

    #[test]
    fn test_sw_resize() {
        let new = resize(base(), ResizeHandle::Sw, CanvasPoint::new(40, 100));
        assert_eq!(new, Bounds::new(40, 50, 110, 50));
    }

    #[test]
    fn test_all_handles_respect_min_size() {
        let bounds = base();
        let far_points = [
            CanvasPoint::new(-500, -500),
            CanvasPoint::new(500, 500),
            CanvasPoint::new(bounds.x + 1, bounds.y + 1),
        ];
        for handle in ResizeHandle::ALL {
            for &point in &far_points {
                let new = resize_with_snap(bounds, handle, point, None);
                assert!(
                    new.width >= MIN_SIZE && new.height >= MIN_SIZE,
                    "{handle:?} at {point:?} produced {new:?}"
                );
            }
        }
    }

    #[test]
    fn test_snap_positions_and_sizes() {
        let new = resize_with_snap(base(), ResizeHandle::Se, CanvasPoint::new(177, 103), Some(10));
        // Raw result is (50, 50, 127, 53): position already on grid,
        // width rounds to 130, height rounds to 50.
        assert_eq!(new, Bounds::new(50, 50, 130, 50));
    }

    #[test]
    fn test_snap_then_clamp_order() {
        // Snapping a 20-wide result down to a 4-grid keeps 20; a 15-grid
        // would round 20 up to 30. Either way the clamp runs after the snap.
        let new = resize_with_snap(base(), ResizeHandle::Se, CanvasPoint::new(0, 0), Some(15));
        assert!(new.width >= MIN_SIZE);
        assert!(new.height >= MIN_SIZE);
        let fine = resize_with_snap(base(), ResizeHandle::Se, CanvasPoint::new(0, 0), Some(4));
        assert_eq!(fine.width, MIN_SIZE);
        assert_eq!(fine.height, MIN_SIZE);
    }
}
