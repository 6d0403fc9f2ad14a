//! Event reduction for the session loop
//!
//! [`LoopState`] holds exactly the state the poll loop mutates: the slot
//! currently selected for display and the terminal quit flag. It is plain
//! data so the loop semantics can be tested without a window; the session
//! feeds it events translated from the host event queue.

use crate::assets::AssetSlot;
use crate::input::{KeyBindings, KeySymbol};
use sdl2::event::Event;

/// An input event the session loop reacts to
///
/// Everything else in the host event queue is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The user asked to close the session
    Quit,
    /// A key went down
    KeyDown(KeySymbol),
}

impl SessionEvent {
    /// Translate a host event; returns `None` for events the loop ignores
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match event {
            Event::Quit { .. } => Some(Self::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => Some(Self::KeyDown(KeySymbol::from_keycode(*keycode))),
            _ => None,
        }
    }
}

/// Mutable state of one running session loop
///
/// The loop drains all pending events through [`LoopState::process`], then
/// blits the asset named by [`LoopState::selection`], then checks
/// [`LoopState::should_quit`]. A quit event therefore ends the loop only
/// after the iteration that saw it has presented its frame.
#[derive(Debug, Clone)]
pub struct LoopState {
    selection: AssetSlot,
    quit_requested: bool,
}

impl LoopState {
    /// Fresh loop state displaying the default asset
    pub fn new() -> Self {
        Self {
            selection: AssetSlot::Default,
            quit_requested: false,
        }
    }

    /// Apply one event
    pub fn process(&mut self, event: SessionEvent, bindings: &KeyBindings) {
        match event {
            SessionEvent::Quit => {
                log::info!("Quit requested");
                self.quit_requested = true;
            }
            SessionEvent::KeyDown(symbol) => {
                self.selection = bindings.resolve(symbol);
                log::debug!("Key {:?} selects {:?}", symbol, self.selection);
            }
        }
    }

    /// The slot currently selected for display
    pub fn selection(&self) -> AssetSlot {
        self.selection
    }

    /// Whether a quit event has been seen
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_default_slot() {
        let state = LoopState::new();
        assert_eq!(state.selection(), AssetSlot::Default);
        assert!(!state.should_quit());
    }

    #[test]
    fn last_recognized_key_wins() {
        let bindings = KeyBindings::arrows();
        let mut state = LoopState::new();
        state.process(SessionEvent::KeyDown(KeySymbol::Up), &bindings);
        state.process(SessionEvent::KeyDown(KeySymbol::Left), &bindings);
        assert_eq!(state.selection(), AssetSlot::Left);
    }

    #[test]
    fn unrecognized_key_resets_to_default() {
        let bindings = KeyBindings::arrows();
        let mut state = LoopState::new();
        state.process(SessionEvent::KeyDown(KeySymbol::Up), &bindings);
        state.process(SessionEvent::KeyDown(KeySymbol::Other), &bindings);
        assert_eq!(state.selection(), AssetSlot::Default);
    }

    #[test]
    fn quit_sets_the_terminal_flag_without_touching_selection() {
        let bindings = KeyBindings::arrows();
        let mut state = LoopState::new();
        state.process(SessionEvent::KeyDown(KeySymbol::Right), &bindings);
        state.process(SessionEvent::Quit, &bindings);
        assert!(state.should_quit());
        assert_eq!(state.selection(), AssetSlot::Right);
    }
}
