//! State shared between the CLI thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use radiant_core::commands::PlayerCommand;
use radiant_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Stop the game loop after the current frame.
    Shutdown,
}

/// Handles held by the host while the loop runs.
///
/// The sender sits behind a `Mutex` because `mpsc::Sender` is not `Sync`.
/// The latest snapshot is shared with the loop thread, which overwrites it
/// after every frame.
pub struct AppState {
    /// `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns false if no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Clone of the most recent snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(GameLoopCommand::Shutdown));

        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);
        assert!(state.send(GameLoopCommand::PlayerCommand(
            PlayerCommand::ResetSession
        )));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::PlayerCommand(PlayerCommand::ResetSession))
        ));

        drop(rx);
        assert!(!state.send(GameLoopCommand::Shutdown));
    }
}
