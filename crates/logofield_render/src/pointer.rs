use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowEvent};
use logofield_sim::PointerEvent;

/// The pointer event a window event stands for, if any.
///
/// Any mouse button engages the pointer.
pub fn pointer_event(event: &WindowEvent, display_size: Vec2) -> Option<PointerEvent> {
    match event {
        WindowEvent::CursorMoved(moved) => Some(PointerEvent::Moved {
            display: moved.position,
            display_size,
        }),
        WindowEvent::MouseButtonInput(input) => Some(match input.state {
            ButtonState::Pressed => PointerEvent::Pressed,
            ButtonState::Released => PointerEvent::Released,
        }),
        WindowEvent::CursorLeft(_) => Some(PointerEvent::Left),
        _ => None,
    }
}

fn event_window(event: &WindowEvent) -> Option<Entity> {
    match event {
        WindowEvent::CursorMoved(moved) => Some(moved.window),
        WindowEvent::MouseButtonInput(input) => Some(input.window),
        WindowEvent::CursorLeft(left) => Some(left.window),
        _ => None,
    }
}

/// Forward primary-window cursor and button input as [`PointerEvent`]s, in
/// the order the window reported them.
pub fn capture_pointer_events(
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut window_events: EventReader<WindowEvent>,
    mut pointer_events: EventWriter<PointerEvent>,
) {
    let Ok((primary, window)) = windows.get_single() else {
        window_events.clear();
        return;
    };
    let display_size = Vec2::new(window.width(), window.height());

    for event in window_events.read() {
        if event_window(event) != Some(primary) {
            continue;
        }
        if let Some(pointer) = pointer_event(event, display_size) {
            pointer_events.send(pointer);
        }
    }
}
