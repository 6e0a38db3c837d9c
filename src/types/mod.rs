//! Core types for Voidcore

mod cursor;
mod frame;
mod line;
mod phase;

pub use cursor::CursorState;
pub use frame::FrameOutput;
pub use line::{LineKind, TerminalLine};
pub use phase::Phase;
