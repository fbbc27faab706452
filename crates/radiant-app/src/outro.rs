//! Outro collaborator: asked once per finished session whether to play again.

use radiant_core::enums::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutroChoice {
    Restart,
    Quit,
}

/// Answers the restart-or-quit question shown after a win or a game over.
pub trait OutroPrompt {
    fn choose(&mut self, outcome: GamePhase, display_score: u32) -> OutroChoice;
}

/// Restarts a fixed number of times, then quits.
#[derive(Debug, Clone)]
pub struct RestartBudget {
    remaining: u32,
}

impl RestartBudget {
    pub fn new(restarts: u32) -> Self {
        Self {
            remaining: restarts,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl OutroPrompt for RestartBudget {
    fn choose(&mut self, outcome: GamePhase, display_score: u32) -> OutroChoice {
        let choice = if self.remaining > 0 {
            self.remaining -= 1;
            OutroChoice::Restart
        } else {
            OutroChoice::Quit
        };
        tracing::info!(?outcome, display_score, ?choice, remaining = self.remaining, "outro");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_budget_runs_out() {
        let mut prompt = RestartBudget::new(2);
        assert_eq!(prompt.choose(GamePhase::GameOver, 10), OutroChoice::Restart);
        assert_eq!(prompt.choose(GamePhase::Win, 9999), OutroChoice::Restart);
        assert_eq!(prompt.remaining(), 0);
        assert_eq!(prompt.choose(GamePhase::GameOver, 0), OutroChoice::Quit);
        assert_eq!(prompt.choose(GamePhase::GameOver, 0), OutroChoice::Quit);
    }

    #[test]
    fn test_zero_budget_quits_immediately() {
        let mut prompt = RestartBudget::new(0);
        assert_eq!(prompt.choose(GamePhase::Win, 9999), OutroChoice::Quit);
    }
}
