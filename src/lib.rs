//! # symbios-turtle
//!
//! Deterministic L-System expansion and 2D turtle interpretation.
//!
//! A [`Grammar`] rewrites its axiom for a fixed number of generations; a
//! [`TurtleInterpreter`] walks the resulting symbols, driving a turtle with a
//! save/restore stack, and streams the line segments it draws into any
//! [`DrawingSink`]. [`LSystem`] wires the two together, and [`Definition`] loads
//! one from JSON. Painting the segments is left to the caller.

pub mod definition;
pub mod drawing;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod logging;
pub mod lsystem;
pub mod turtle;

pub use definition::*;
pub use drawing::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use lsystem::*;
pub use turtle::*;
