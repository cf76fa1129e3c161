use super::controls::{Button, Knob};
use super::input_report::{InputFrame, InputReport};

/// Classification for button state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEventKind {
    Pressed,
    Released,
}

/// Information about a button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: Button,
    pub kind: ButtonEventKind,
}

/// Keeps the previous and current input frames and answers edge queries
/// between them.
///
/// Before the first report arrives both frames are
/// [`InputFrame::Uninitialized`]; knob changes are never reported against an
/// uninitialized previous frame, so the first real report does not look like
/// every knob jumped.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: InputFrame,
    current: InputFrame,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `report` the current frame, shifting the old one into `previous`.
    pub fn push(&mut self, report: InputReport) {
        self.previous = std::mem::replace(&mut self.current, InputFrame::Received(report));
    }

    #[allow(dead_code)]
    pub fn previous(&self) -> &InputFrame {
        &self.previous
    }

    pub fn current(&self) -> &InputFrame {
        &self.current
    }

    pub fn was_pressed(&self, button: Button) -> bool {
        self.current.report().pressed(button) && !self.previous.report().pressed(button)
    }

    pub fn was_released(&self, button: Button) -> bool {
        !self.current.report().pressed(button) && self.previous.report().pressed(button)
    }

    /// The new knob value if it moved since the previous frame.
    pub fn knob_if_changed(&self, knob: Knob) -> Option<f64> {
        if self.previous.is_null_sentinel() {
            return None;
        }
        let old = self.previous.report().raw(knob);
        let new = self.current.report().raw(knob);
        (old != new).then(|| self.current.report().value(knob))
    }

    /// All button transitions between the previous and current frame.
    pub fn button_events(&self) -> impl Iterator<Item = ButtonEvent> + '_ {
        Button::ALL.into_iter().filter_map(move |button| {
            let kind = if self.was_pressed(button) {
                ButtonEventKind::Pressed
            } else if self.was_released(button) {
                ButtonEventKind::Released
            } else {
                return None;
            };
            Some(ButtonEvent { button, kind })
        })
    }
}
