//! Game play
//!
//! Word lists, the round state machine and multi-round sessions.

mod dictionary;
mod round;
mod session;

pub use dictionary::Dictionary;
pub use round::{Round, RoundError, RoundStatus, Submission, SubmitError, Turn};
pub use session::{GameData, Session, Statistics};
