use gym_arcade::{Action, Backend, Error, InitialState, RawState, StepResult};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// In-memory stand-in for a simulation backend: replays a scripted sequence
/// of reset and step outcomes and records what it was asked to do.
#[derive(Default)]
pub struct ScriptedBackend {
    resets: RefCell<VecDeque<Result<InitialState, Error>>>,
    steps: RefCell<VecDeque<Result<StepResult, Error>>>,
    reset_calls: Cell<usize>,
    step_calls: Cell<usize>,
    last_action: Cell<Option<Action>>,
}

#[allow(dead_code)]
impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset(self, result: Result<InitialState, Error>) -> Self {
        self.resets.borrow_mut().push_back(result);
        self
    }

    pub fn with_step(self, result: Result<StepResult, Error>) -> Self {
        self.steps.borrow_mut().push_back(result);
        self
    }

    pub fn reset_calls(&self) -> usize {
        self.reset_calls.get()
    }

    pub fn step_calls(&self) -> usize {
        self.step_calls.get()
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action.get()
    }
}

impl Backend for ScriptedBackend {
    fn reset(&self) -> Result<InitialState, Error> {
        self.reset_calls.set(self.reset_calls.get() + 1);
        self.resets
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reset outcome left"))
    }

    fn step(&self, action: Action) -> Result<StepResult, Error> {
        self.step_calls.set(self.step_calls.get() + 1);
        self.last_action.set(Some(action));
        self.steps
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted step outcome left"))
    }
}

#[allow(dead_code)]
pub fn grid_reset(index: i64) -> Result<InitialState, Error> {
    Ok(InitialState {
        image: Some("aGVsbG8=".to_string()),
        state: RawState::Index(index),
    })
}

#[allow(dead_code)]
pub fn lander_reset(state: &[f64]) -> Result<InitialState, Error> {
    Ok(InitialState {
        image: None,
        state: RawState::Vector(state.to_vec()),
    })
}

#[allow(dead_code)]
pub fn grid_step(move_label: &str, index: i64, done: bool) -> Result<StepResult, Error> {
    Ok(StepResult {
        image: None,
        move_label: move_label.to_string(),
        state: RawState::Index(index),
        done,
    })
}

#[allow(dead_code)]
pub fn lander_step(move_label: &str, state: &[f64], done: bool) -> Result<StepResult, Error> {
    Ok(StepResult {
        image: None,
        move_label: move_label.to_string(),
        state: RawState::Vector(state.to_vec()),
        done,
    })
}
