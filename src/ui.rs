//! HUD and overlay text
//!
//! Pure helpers; the web host copies their output into the DOM.

use crate::sim::GamePhase;

/// Overlay panels drawn over the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    StartMenu,
    GameOver,
}

impl Overlay {
    /// DOM element id of the panel
    pub fn element_id(&self) -> &'static str {
        match self {
            Overlay::StartMenu => "start-menu",
            Overlay::GameOver => "game-over",
        }
    }

    pub const ALL: [Overlay; 2] = [Overlay::StartMenu, Overlay::GameOver];
}

/// Which overlay belongs to a phase (none while playing)
pub fn overlay_for(phase: GamePhase) -> Option<Overlay> {
    match phase {
        GamePhase::Waiting => Some(Overlay::StartMenu),
        GamePhase::Playing => None,
        GamePhase::GameOver => Some(Overlay::GameOver),
    }
}

/// "1 point", "7 points"
pub fn score_label(score: u32) -> String {
    if score == 1 {
        format!("{} point", score)
    } else {
        format!("{} points", score)
    }
}

/// End-of-game verdict for a final score
pub fn rating(score: u32) -> &'static str {
    match score {
        0 => "Warm-up done! Try again!",
        1..=4 => "Good start! Keep practising!",
        5..=9 => "Well played! You're improving!",
        10..=19 => "Excellent ball control!",
        _ => "Football legend! Champion!",
    }
}
