use std::cell::Cell;
use std::rc::Rc;

use raylib::prelude::*;
use tracing::{debug, trace};

use crate::controller::PresentationController;
use crate::state::Navigation;
use crate::viewer::Layout;

/// The two on-screen navigation controls.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavButton {
    Previous,
    Next,
}

impl NavButton {
    pub fn label(self) -> &'static str {
        match self {
            NavButton::Previous => "Previous slide",
            NavButton::Next => "Next slide",
        }
    }
}

/// Raw input gathered from the window during one frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputEvent {
    Key(KeyboardKey),
    Button(NavButton),
}

/// Only the arrow keys and the two buttons navigate; everything else is
/// dropped.
pub fn map_event(event: InputEvent) -> Option<Navigation> {
    match event {
        InputEvent::Key(KeyboardKey::KEY_RIGHT) => Some(Navigation::Advance),
        InputEvent::Key(KeyboardKey::KEY_LEFT) => Some(Navigation::Retreat),
        InputEvent::Button(NavButton::Next) => Some(Navigation::Advance),
        InputEvent::Button(NavButton::Previous) => Some(Navigation::Retreat),
        InputEvent::Key(_) => None,
    }
}

// --- Poll the window for this frame's events ---
pub fn poll_events(rl: &mut RaylibHandle, layout: &Layout) -> Vec<InputEvent> {
    let mut events = Vec::new();

    while let Some(key) = rl.get_key_pressed() {
        events.push(InputEvent::Key(key));
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if let Some(button) = layout.button_at(rl.get_mouse_position()) {
            events.push(InputEvent::Button(button));
        }
    }

    events
}

/// Tracks how many input bindings are currently attached.
#[derive(Default)]
pub struct Listeners {
    active: Rc<Cell<usize>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach input to `controller` for as long as the returned guard lives.
    pub fn attach<'c, S>(
        &self,
        controller: &'c mut PresentationController<S>,
    ) -> InputBinding<'c, S> {
        self.active.set(self.active.get() + 1);
        debug!(active = self.active.get(), "input listener attached");
        InputBinding {
            controller,
            active: Rc::clone(&self.active),
        }
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }
}

/// Scoped input registration. Dropping it, on any path, detaches the
/// listener.
pub struct InputBinding<'c, S> {
    controller: &'c mut PresentationController<S>,
    active: Rc<Cell<usize>>,
}

impl<S> InputBinding<'_, S> {
    /// Forward one raw event. Returns true when it triggered a navigation.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match map_event(event) {
            Some(navigation) => {
                self.controller.apply(navigation);
                true
            }
            None => {
                trace!(?event, "ignored input");
                false
            }
        }
    }

    pub fn controller(&self) -> &PresentationController<S> {
        self.controller
    }
}

impl<S> Drop for InputBinding<'_, S> {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        debug!(active = self.active.get(), "input listener released");
    }
}
