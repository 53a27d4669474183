use bevy::prelude::*;
use logofield_core::PointerState;

/// Pointer activity reported by the host, in host display coordinates.
///
/// Host adapters only ever produce these; the tracker consumes them at the
/// start of the next tick, so the physics pass never sees a half-applied update.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor at `display`, measured from the top-left of a surface currently
    /// shown at `display_size`
    Moved { display: Vec2, display_size: Vec2 },
    Pressed,
    Released,
    /// Cursor left the surface; also releases the pointer
    Left,
}

/// Latest pointer sample in simulation space. Last write wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
    pointer: PointerState,
}

impl InputTracker {
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn apply(&mut self, event: &PointerEvent, surface_size: Vec2) {
        match *event {
            PointerEvent::Moved {
                display,
                display_size,
            } => {
                if let Some(position) = display_to_surface(display, display_size, surface_size) {
                    self.pointer.position = position;
                }
            }
            PointerEvent::Pressed => self.pointer.engaged = true,
            PointerEvent::Released | PointerEvent::Left => self.pointer.engaged = false,
        }
    }
}

/// Map a display-space point onto the logical surface.
///
/// The surface is stretched to `display_size`, so the per-axis scale factor is
/// `display_size / surface_size`. A collapsed display (zero width or height)
/// has no meaningful mapping.
pub fn display_to_surface(display: Vec2, display_size: Vec2, surface_size: Vec2) -> Option<Vec2> {
    if display_size.x <= 0.0 || display_size.y <= 0.0 {
        return None;
    }
    let scale = display_size / surface_size;
    Some(display / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_scaled_display_maps_to_surface_units() {
        // surface shown at half size
        let p = display_to_surface(Vec2::new(200.0, 150.0), Vec2::new(400.0, 300.0), SURFACE);
        assert_eq!(p, Some(Vec2::new(400.0, 300.0)));

        // stretched non-uniformly
        let p = display_to_surface(Vec2::new(1600.0, 300.0), Vec2::new(1600.0, 600.0), SURFACE);
        assert_eq!(p, Some(Vec2::new(800.0, 300.0)));
    }

    #[test]
    fn test_collapsed_display_ignored() {
        let mut tracker = InputTracker::default();
        tracker.apply(
            &PointerEvent::Moved {
                display: Vec2::new(10.0, 10.0),
                display_size: Vec2::new(800.0, 600.0),
            },
            SURFACE,
        );
        tracker.apply(
            &PointerEvent::Moved {
                display: Vec2::new(50.0, 50.0),
                display_size: Vec2::new(0.0, 600.0),
            },
            SURFACE,
        );
        assert_eq!(tracker.pointer().position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_engagement_follows_buttons_and_leave() {
        let mut tracker = InputTracker::default();
        assert!(!tracker.pointer().engaged);

        tracker.apply(&PointerEvent::Pressed, SURFACE);
        assert!(tracker.pointer().engaged);

        tracker.apply(&PointerEvent::Released, SURFACE);
        assert!(!tracker.pointer().engaged);

        tracker.apply(&PointerEvent::Pressed, SURFACE);
        tracker.apply(&PointerEvent::Left, SURFACE);
        assert!(!tracker.pointer().engaged);
    }

    #[test]
    fn test_last_move_wins() {
        let mut tracker = InputTracker::default();
        let display_size = Vec2::new(800.0, 600.0);
        for x in [10.0, 20.0, 30.0] {
            tracker.apply(
                &PointerEvent::Moved {
                    display: Vec2::new(x, 5.0),
                    display_size,
                },
                SURFACE,
            );
        }
        assert_eq!(tracker.pointer().position, Vec2::new(30.0, 5.0));
    }
}
