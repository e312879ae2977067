use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so components can update
/// presentation state (list offsets) during the render pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A screen that turns terminal events into core actions.
///
/// Screens never touch `App` directly. They read it through props and
/// ask for changes by returning an `Action` for `core::action::update`.
pub trait EventHandler {
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Action>;
}
