//! Interpreter that walks an L-System symbol sequence and drives a 2D turtle.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! register symbol-to-action mappings via [`TurtleInterpreter::set_action`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::interpret`] with any iterator of symbols and a [`DrawingSink`].

use crate::drawing::{Bounds, DrawingSink};
use crate::error::{LSystemError, Result};
use crate::grammar::Symbol;
use crate::turtle::{ActionKind, LEFT_TURN_SIGN, RIGHT_TURN_SIGN, StateStack, TurtleState};
use glam::Vec2;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Turn angle in degrees, shared by both turn actions.
    pub angle: f32,
    /// Where every run starts.
    pub start_position: Vec2,
    /// Initial heading in degrees. `0` points along `+X`.
    pub start_heading: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            angle: 90.0,
            start_position: Vec2::ZERO,
            start_heading: 0.0,
        }
    }
}

/// One non-noop action taken during a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceStep {
    /// Position of the symbol in the interpreted sequence.
    pub index: usize,
    pub symbol: Symbol,
    pub action: ActionKind,
}

/// What is left once a run reaches the end of its symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Turtle state after the last symbol.
    pub final_state: TurtleState,
    /// Number of symbols consumed.
    pub symbols: usize,
    /// Number of segments handed to the sink.
    pub segments: usize,
    /// Extent of every position the turtle visited, pen up or down.
    pub bounds: Bounds,
    /// Snapshots still saved at the end. Leftover pushes are not an error.
    pub unrestored: usize,
}

/// Interprets a symbol sequence into turtle motion.
#[derive(Clone, Debug)]
pub struct TurtleInterpreter {
    action_map: HashMap<Symbol, ActionKind>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    ///
    /// Every symbol is a no-op until mapped with [`set_action`](Self::set_action) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols).
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            action_map: HashMap::new(),
            config,
        }
    }

    /// Creates an interpreter with the conventional symbol set already registered.
    pub fn standard(config: TurtleConfig) -> Self {
        let mut interpreter = Self::new(config);
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol-to-action map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<Symbol, ActionKind>) -> Self {
        self.action_map = map;
        self
    }

    /// Assigns a single [`ActionKind`] to a symbol, replacing any previous mapping.
    pub fn set_action(&mut self, symbol: Symbol, action: ActionKind) {
        self.action_map.insert(symbol, action);
    }

    /// Registers the conventional symbol-to-action mappings.
    ///
    /// | Symbol     | Action          |
    /// |------------|-----------------|
    /// | `F`, `G`   | `draw_forward`  |
    /// | `+`        | `left_turn`     |
    /// | `-`        | `right_turn`    |
    /// | `[`        | `save_state`    |
    /// | `]`        | `restore_state` |
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', ActionKind::DrawForward),
            ('G', ActionKind::DrawForward),
            ('+', ActionKind::LeftTurn),
            ('-', ActionKind::RightTurn),
            ('[', ActionKind::SaveState),
            (']', ActionKind::RestoreState),
        ];

        for (sym, action) in mappings {
            self.set_action(sym, action);
        }
    }

    /// The action for `symbol`; unmapped symbols are [`ActionKind::Noop`].
    pub fn action(&self, symbol: Symbol) -> ActionKind {
        self.action_map
            .get(&symbol)
            .copied()
            .unwrap_or(ActionKind::Noop)
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// The fresh turtle every run starts from.
    pub fn initial_state(&self) -> TurtleState {
        TurtleState::new(self.config.start_position, self.config.start_heading)
    }

    /// Walks `symbols` once, left to right, streaming segments into `sink`.
    ///
    /// # Errors
    ///
    /// [`LSystemError::StackUnderflow`] when a `restore_state` symbol is reached with
    /// nothing saved. Segments emitted before that point have already reached the sink.
    pub fn interpret<I, S>(&self, symbols: I, unit: f32, sink: S) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Symbol>,
        S: DrawingSink,
    {
        self.interpret_with(symbols, unit, sink, |_| {})
    }

    /// Like [`interpret`](Self::interpret), also reporting every non-noop action to
    /// `on_action` before it is applied.
    pub fn interpret_with<I, S, F>(
        &self,
        symbols: I,
        unit: f32,
        mut sink: S,
        mut on_action: F,
    ) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Symbol>,
        S: DrawingSink,
        F: FnMut(TraceStep),
    {
        let mut turtle = self.initial_state();
        let mut stack = StateStack::new();
        let mut bounds = Bounds::at(turtle.position);
        let mut consumed = 0;
        let mut emitted = 0;

        for (index, symbol) in symbols.into_iter().enumerate() {
            consumed = index + 1;
            let action = self.action(symbol);
            if action == ActionKind::Noop {
                continue;
            }
            trace!(index, %symbol, %action, "turtle action");
            on_action(TraceStep {
                index,
                symbol,
                action,
            });

            match action {
                ActionKind::DrawForward => {
                    turtle.pen_down = true;
                    if let Some(segment) = turtle.move_forward(unit) {
                        sink.segment(segment);
                        emitted += 1;
                    }
                    bounds.include(turtle.position);
                }
                ActionKind::LeftTurn => turtle.turn(LEFT_TURN_SIGN * self.config.angle),
                ActionKind::RightTurn => turtle.turn(RIGHT_TURN_SIGN * self.config.angle),
                ActionKind::SaveState => stack.push(turtle),
                ActionKind::RestoreState => {
                    turtle = stack.pop().ok_or(LSystemError::StackUnderflow { index })?;
                }
                ActionKind::Noop => {}
            }
        }

        debug!(
            symbols = consumed,
            segments = emitted,
            unrestored = stack.depth(),
            "interpretation finished"
        );

        Ok(RunSummary {
            final_state: turtle,
            symbols: consumed,
            segments: emitted,
            bounds,
            unrestored: stack.depth(),
        })
    }
}
