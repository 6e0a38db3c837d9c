//! Core modules for Voidcore

pub mod cursor;
pub mod scroll;
pub mod store;
pub mod terminal;

pub use cursor::{CursorSampler, PointerEvent};
pub use scroll::{DocumentGeometry, ScrollEvent, ScrollSampler};
pub use store::{phase_from_progress, VoidStore};
pub use terminal::{CommandTable, NoopOpener, ResourceOpener, TerminalSession};
