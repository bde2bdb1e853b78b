/// Mouse-drag rotation control
use nalgebra::Point2;

use crate::config::ViewerConfig;
use crate::transform::RotationState;

/// Pointer position in window pixel coordinates
pub type PointerPosition = Point2<f64>;

/// Mouse buttons held during a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl PointerButtons {
    pub const NONE: PointerButtons = PointerButtons {
        primary: false,
        secondary: false,
        middle: false,
    };

    pub const PRIMARY: PointerButtons = PointerButtons {
        primary: true,
        secondary: false,
        middle: false,
    };
}

/// Turns pointer motion into rotation.
///
/// A drag of `d` pixels across a window of size `W` rotates by
/// `d / W * degrees_per_window` degrees: vertical motion turns about X,
/// horizontal motion about Y. Z is never touched by pointer input.
#[derive(Debug, Clone)]
pub struct DragController {
    rotation: RotationState,
    last: PointerPosition,
    window_size: f64,
    radians_per_window: f64,
}

impl DragController {
    pub fn new(window_size: f64, degrees_per_window: f64) -> Self {
        Self {
            rotation: RotationState::zero(),
            last: PointerPosition::origin(),
            window_size,
            radians_per_window: degrees_per_window.to_radians(),
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(f64::from(config.window_size), config.degrees_per_window)
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Position of the last drag event; the origin before any drag
    pub fn last_position(&self) -> PointerPosition {
        self.last
    }

    /// Apply the motion from `last` to `current` if the button is held
    pub fn on_pointer_drag(
        &mut self,
        current: PointerPosition,
        last: PointerPosition,
        button_down: bool,
    ) -> RotationState {
        if button_down {
            let delta = current - last;
            self.rotation.rotate(
                delta.y / self.window_size * self.radians_per_window,
                delta.x / self.window_size * self.radians_per_window,
                0.0,
            );
        }
        self.rotation
    }

    /// Handle a pointer move, tracking the previous drag position.
    ///
    /// The tracked position only advances while the button is held, so the
    /// first drag after a release measures from where the last drag ended.
    pub fn on_pointer_move(
        &mut self,
        current: PointerPosition,
        button_down: bool,
    ) -> RotationState {
        let rotation = self.on_pointer_drag(current, self.last, button_down);
        if button_down {
            self.last = current;
        }
        rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    fn controller() -> DragController {
        DragController::from_config(&ViewerConfig::default())
    }

    #[test]
    fn test_button_up_changes_nothing() {
        let mut c = controller();
        for (x, y) in [(10.0, 20.0), (590.0, 3.0), (-40.0, 1000.0)] {
            let r = c.on_pointer_move(PointerPosition::new(x, y), false);
            assert_eq!(r, RotationState::zero());
        }
        assert_eq!(c.last_position(), PointerPosition::origin());
    }

    #[test]
    fn test_drag_delta() {
        let mut c = controller();
        let r = c.on_pointer_drag(
            PointerPosition::new(130.0, 80.0),
            PointerPosition::new(100.0, 200.0),
            true,
        );
        assert_abs_diff_eq!(r.x, -120.0 / 600.0 * TAU, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 30.0 / 600.0 * TAU, epsilon = 1e-12);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn test_deltas_are_frame_to_frame() {
        let mut c = controller();
        c.on_pointer_move(PointerPosition::new(0.0, 0.0), true);
        c.on_pointer_move(PointerPosition::new(60.0, 0.0), true);
        let r = c.on_pointer_move(PointerPosition::new(90.0, 0.0), true);
        assert_abs_diff_eq!(r.y, 90.0 / 600.0 * TAU, epsilon = 1e-12);
        assert_eq!(c.last_position(), PointerPosition::new(90.0, 0.0));
    }

    #[test]
    fn test_first_drag_measures_from_origin() {
        let mut c = controller();
        let r = c.on_pointer_move(PointerPosition::new(300.0, 150.0), true);
        assert_abs_diff_eq!(r.x, 0.25 * TAU, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 0.5 * TAU, epsilon = 1e-12);
    }

    #[test]
    fn test_angles_accumulate_unbounded() {
        let mut c = controller();
        let mut x = 0.0;
        for _ in 0..10 {
            x += 600.0;
            c.on_pointer_move(PointerPosition::new(x, 0.0), true);
        }
        assert_abs_diff_eq!(c.rotation().y, 10.0 * TAU, epsilon = 1e-9);
    }

    #[test]
    fn test_release_keeps_last_drag_position() {
        let mut c = controller();
        c.on_pointer_move(PointerPosition::new(100.0, 100.0), true);
        c.on_pointer_move(PointerPosition::new(500.0, 500.0), false);
        let before = *c.rotation();
        let r = c.on_pointer_move(PointerPosition::new(110.0, 100.0), true);
        assert_abs_diff_eq!(r.y - before.y, 10.0 / 600.0 * TAU, epsilon = 1e-12);
        assert_abs_diff_eq!(r.x, before.x, epsilon = 1e-12);
    }
}
