//! The session controller: owns the single "a game is in progress" flag,
//! gates action submission, and turns backend responses into presentation
//! updates.

use crate::backend::{Backend, InitialState};
use crate::error::Error;
use crate::grid::{Coordinate, PositionTracker};
use crate::Action;

/// Status shown when a tracked step deviated from its deterministic reading.
pub const SLIPPED_STATUS: &str = "HAHAHAHAHAH! You Slipped!! 🤣🤣🤣";
/// Status shown when a tracked step landed where the action intended.
pub const ADVANCED_STATUS: &str = "One step closer to the target 😮😮😮";
/// Acknowledgment shown after an unconditional restart.
pub const RESET_STATUS: &str = "Game Reset!";

/// Per-environment session parameters: the greeting and terminal status
/// lines, and whether grid position is tracked for slip classification.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub start_status: &'static str,
    pub over_status: &'static str,
    pub track_position: bool,
}

impl SessionConfig {
    pub fn frozen_lake() -> Self {
        Self {
            start_status: "Start on the icy surface 🥶🥶🥶",
            over_status: "GAME OVER!",
            track_position: true,
        }
    }

    pub fn lunar_lander() -> Self {
        Self {
            start_status: "Preparing for landing 🚀",
            over_status: "GAME OVER! 🚀",
            track_position: false,
        }
    }
}

/// What one controller operation wants the presentation sink to change.
/// `None` fields leave the corresponding surface untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    /// Base64-encoded PNG frame.
    pub image: Option<String>,
    pub status: Option<String>,
    pub last_move: Option<String>,
}

/// One play-through against a backend, from reset to termination.
#[derive(Debug)]
pub struct Session<B> {
    backend: B,
    config: SessionConfig,
    running: bool,
    tracker: Option<PositionTracker>,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B, config: SessionConfig) -> Self {
        Self {
            backend,
            config,
            running: false,
            tracker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The agent's believed grid position, when tracked.
    pub fn position(&self) -> Option<Coordinate> {
        self.tracker.map(|t| t.current())
    }

    /// Begins a session. No-op when a game is already in progress; otherwise
    /// resets the environment and, on success, marks the session running.
    pub fn start(&mut self) -> Result<Option<Update>, Error> {
        if self.running {
            return Ok(None);
        }

        let initial = self.backend.reset()?;
        let image = self.begin(initial);

        Ok(Some(Update {
            image,
            status: Some(self.config.start_status.to_string()),
            last_move: None,
        }))
    }

    /// Resets unconditionally; a finished and an in-progress game both
    /// restart. On failure the session state is left unchanged.
    pub fn restart(&mut self) -> Result<Update, Error> {
        let initial = self.backend.reset()?;
        let image = self.begin(initial);

        Ok(Update {
            image,
            status: Some(RESET_STATUS.to_string()),
            last_move: None,
        })
    }

    /// Forwards one action to the backend. Actions arriving while no game is
    /// in progress are dropped without a network call. A `done` result ends
    /// the session.
    pub fn submit_action(&mut self, action: Action) -> Result<Option<Update>, Error> {
        if !self.running {
            return Ok(None);
        }

        let result = self.backend.step(action)?;
        tracing::info!(action, state = ?result.state, done = result.done, "step completed");

        let mut update = Update {
            image: result.image,
            status: None,
            last_move: Some(format!("Last Move: {}", result.move_label)),
        };

        if let (Some(tracker), Some(index)) = (self.tracker.as_mut(), result.state.index()) {
            let slipped = tracker.observe(action, index);
            update.status = Some(if slipped { SLIPPED_STATUS } else { ADVANCED_STATUS }.to_string());
        }

        if result.done {
            self.running = false;
            update.status = Some(self.config.over_status.to_string());
        }

        Ok(Some(update))
    }

    fn begin(&mut self, initial: InitialState) -> Option<String> {
        self.running = true;
        self.tracker = if self.config.track_position {
            initial
                .state
                .index()
                .map(Coordinate::from_index)
                .map(PositionTracker::new)
        } else {
            None
        };

        initial.image
    }
}
