//! Text console front end: input parsing, rendering, and the game loop.

pub mod input;
pub mod render;
mod session;

pub use input::{InputError, parse_move, validate_move};
pub use session::{Session, SessionError, Step};
