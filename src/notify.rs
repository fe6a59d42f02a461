//! Completion messages for the embedding page
//!
//! The simulation only queues [`GameEvent`]s. Hosts turn them into
//! [`CompletionMessage`]s and hand them to a [`Notifier`].

use serde::Serialize;

use crate::consts::{BLOCK_ID, GAME_TYPE};
use crate::sim::{GameEvent, GameState};

/// Message type tag understood by the embedding page
pub const MESSAGE_TYPE: &str = "BLOCK_COMPLETION";

/// Extra payload attached to a finished session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionData {
    pub final_score: u32,
    pub game_type: &'static str,
}

/// Message posted when a session starts or ends
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub block_id: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CompletionData>,
}

impl From<GameEvent> for CompletionMessage {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Started => Self {
                kind: MESSAGE_TYPE,
                block_id: BLOCK_ID,
                completed: false,
                score: None,
                data: None,
            },
            GameEvent::Ended { score } => Self {
                kind: MESSAGE_TYPE,
                block_id: BLOCK_ID,
                completed: true,
                score: Some(score),
                data: Some(CompletionData {
                    final_score: score,
                    game_type: GAME_TYPE,
                }),
            },
        }
    }
}

/// Outbound sink for completion messages (fire-and-forget)
pub trait Notifier {
    fn notify(&mut self, message: &CompletionMessage);
}

/// Notifier that only logs, for native runs
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &CompletionMessage) {
        match serde_json::to_string(message) {
            Ok(json) => log::info!("Completion message: {}", json),
            Err(e) => log::warn!("Could not encode completion message: {}", e),
        }
    }
}

/// Drain pending events from `state` into `notifier`
///
/// Returns the drained events so the host can react to them as well.
pub fn dispatch_events<N: Notifier + ?Sized>(
    state: &mut GameState,
    notifier: &mut N,
) -> Vec<GameEvent> {
    let events = state.drain_events();
    for event in &events {
        notifier.notify(&CompletionMessage::from(*event));
    }
    events
}
