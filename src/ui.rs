//! Level-complete overlay and its commands
//!
//! The host owns the actual widgets; this tracks what they should show and
//! applies button presses to the session.

use crate::sim::{GameEvent, GameState};

/// Buttons on the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Replay the current level with a new layout
    RestartLevel,
    /// Continue to the next level
    NextLevel,
    /// Abandon the run and start from level 1
    Quit,
}

impl UiCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiCommand::RestartLevel => "Restart",
            UiCommand::NextLevel => "Next Level",
            UiCommand::Quit => "Quit",
        }
    }
}

/// Overlay visibility and text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub visible: bool,
    pub text: String,
}

impl Overlay {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// React to a frame's events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::LevelComplete { level } = event {
                self.show(format!("Level {level} Complete!"));
            }
        }
    }

    /// Apply a button press to the session and hide the overlay
    pub fn apply(&mut self, command: UiCommand, state: &mut GameState) {
        log::debug!("UI command: {}", command.as_str());
        match command {
            UiCommand::RestartLevel => state.restart_level(),
            UiCommand::NextLevel => state.next_level(),
            UiCommand::Quit => state.reset_session(),
        }
        self.hide();
    }
}
