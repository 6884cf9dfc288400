//! State machine for tracking the sign-and-upload run
//!
//! The run is strictly linear, so the machine only records which step the
//! process is in and when each step started. Nothing is persisted; a run
//! either completes or fails within one invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Run state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    Initial,
    Signing,
    Uploading,
    Success,
    Failed,
}

impl RunState {
    /// Terminal states end the run
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Success | RunState::Failed)
    }
}

/// State transition with timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateTransition {
    pub from: RunState,
    pub to: RunState,
    pub timestamp: DateTime<Utc>,
}

/// In-memory state machine for one publishing run
pub struct RunStateMachine {
    current_state: RunState,
    transitions: Vec<StateTransition>,
    error: Option<String>,
}

impl Default for RunStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStateMachine {
    /// Create a new state machine in the initial state
    pub fn new() -> Self {
        Self {
            current_state: RunState::Initial,
            transitions: Vec::new(),
            error: None,
        }
    }

    /// Transition to a new state
    pub fn transition(&mut self, to: RunState) {
        self.transitions.push(StateTransition {
            from: self.current_state,
            to,
            timestamp: Utc::now(),
        });
        self.current_state = to;
    }

    /// Transition to the failed state, recording the failure message
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.transition(RunState::Failed);
    }

    /// Get current state
    pub fn state(&self) -> RunState {
        self.current_state
    }

    /// Get last error message (if failed)
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Get elapsed time between the first and last transition, in milliseconds
    pub fn elapsed_ms(&self) -> i64 {
        match (self.transitions.first(), self.transitions.last()) {
            (Some(first), Some(last)) => {
                (last.timestamp - first.timestamp).num_milliseconds()
            }
            _ => 0,
        }
    }

    /// Get transition history as a human-readable string
    pub fn history(&self) -> String {
        self.transitions
            .iter()
            .map(|t| format!("{}: {:?} → {:?}", t.timestamp.to_rfc3339(), t.from, t.to))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_machine() {
        let state_machine = RunStateMachine::new();

        assert_eq!(state_machine.state(), RunState::Initial);
        assert!(!state_machine.state().is_terminal());
        assert!(state_machine.last_error().is_none());
    }

    #[test]
    fn test_transition() {
        let mut state_machine = RunStateMachine::new();

        state_machine.transition(RunState::Signing);
        assert_eq!(state_machine.state(), RunState::Signing);

        state_machine.transition(RunState::Uploading);
        assert_eq!(state_machine.state(), RunState::Uploading);
    }

    #[test]
    fn test_fail_records_error() {
        let mut state_machine = RunStateMachine::new();

        state_machine.transition(RunState::Signing);
        state_machine.fail("Bad Request: bad file");

        assert_eq!(state_machine.state(), RunState::Failed);
        assert!(state_machine.state().is_terminal());
        assert_eq!(state_machine.last_error(), Some("Bad Request: bad file"));
    }

    #[test]
    fn test_terminal_states() {
        assert!(RunState::Success.is_terminal());
        assert!(RunState::Failed.is_terminal());
        assert!(!RunState::Initial.is_terminal());
        assert!(!RunState::Signing.is_terminal());
        assert!(!RunState::Uploading.is_terminal());
    }

    #[test]
    fn test_elapsed_ms() {
        let mut state_machine = RunStateMachine::new();
        assert_eq!(state_machine.elapsed_ms(), 0);

        state_machine.transition(RunState::Signing);
        state_machine.transition(RunState::Success);

        assert!(state_machine.elapsed_ms() >= 0);
    }

    #[test]
    fn test_history() {
        let mut state_machine = RunStateMachine::new();

        state_machine.transition(RunState::Signing);
        state_machine.transition(RunState::Uploading);

        let history = state_machine.history();
        assert!(history.contains("Initial → Signing"));
        assert!(history.contains("Signing → Uploading"));
    }
}
