extern crate reqwest;
extern crate serde;
extern crate serde_json;

pub mod backend;
pub mod error;
pub mod grid;
pub mod input;
pub mod session;
pub mod ui;

pub use backend::{Backend, HttpBackend, InitialState, RawState, StepResult};
pub use error::Error;
pub use session::{Session, SessionConfig, Update};

/// Discrete control input understood by a backend simulation. Each
/// environment assigns its own meaning to the codes 0..=3; there is no
/// shared semantics across environments.
pub type Action = i32;
