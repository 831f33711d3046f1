//! Presentation module
//!
//! Turns a simulation state into backend-agnostic draw commands. Nothing
//! here mutates the state.

pub mod frame;
pub mod palette;

pub use frame::{DrawCmd, Frame, Hud, Layer, ScreenText, build_frame};
