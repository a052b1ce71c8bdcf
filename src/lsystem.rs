//! The expand-then-interpret façade.

use crate::drawing::{Drawing, DrawingSink};
use crate::error::Result;
use crate::grammar::{Grammar, Symbol};
use crate::interpreter::{RunSummary, TraceStep, TurtleConfig, TurtleInterpreter};
use crate::turtle::ActionKind;
use tracing::debug;

/// Order and unit used when the caller does not pick them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawDefaults {
    pub order: usize,
    pub unit: f32,
}

impl Default for DrawDefaults {
    fn default() -> Self {
        Self {
            order: 5,
            unit: 5.0,
        }
    }
}

/// Side channel of a traced run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    /// The fully expanded symbol string.
    pub expanded: String,
    /// Every non-noop action, in execution order.
    pub actions: Vec<TraceStep>,
}

/// A grammar together with the turtle that draws it.
///
/// Immutable after construction; every run gets its own turtle and stack, so a single
/// `LSystem` can serve any number of runs, including from several threads at once.
#[derive(Clone, Debug)]
pub struct LSystem {
    grammar: Grammar,
    interpreter: TurtleInterpreter,
    defaults: DrawDefaults,
}

impl LSystem {
    /// Creates an L-System using the standard action table.
    pub fn new(grammar: Grammar, config: TurtleConfig) -> Self {
        Self {
            grammar,
            interpreter: TurtleInterpreter::standard(config),
            defaults: DrawDefaults::default(),
        }
    }

    /// Merges `overrides` over the current action table.
    pub fn with_actions(
        mut self,
        overrides: impl IntoIterator<Item = (Symbol, ActionKind)>,
    ) -> Self {
        for (symbol, action) in overrides {
            self.interpreter.set_action(symbol, action);
        }
        self
    }

    /// Merges named overrides over the current action table.
    ///
    /// Fails on the first name that is not one of the six action kinds, so a bad
    /// table never reaches interpretation.
    pub fn with_action_names<N: AsRef<str>>(
        self,
        overrides: impl IntoIterator<Item = (Symbol, N)>,
    ) -> Result<Self> {
        let parsed = overrides
            .into_iter()
            .map(|(symbol, name)| Ok((symbol, ActionKind::parse_for(symbol, name.as_ref())?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_actions(parsed))
    }

    pub fn with_defaults(mut self, defaults: DrawDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn interpreter(&self) -> &TurtleInterpreter {
        &self.interpreter
    }

    pub fn defaults(&self) -> DrawDefaults {
        self.defaults
    }

    /// Expands `axiom` `order` times and returns it as a string.
    pub fn expand(&self, axiom: &str, order: usize) -> String {
        let input: Vec<Symbol> = axiom.chars().collect();
        self.grammar.expand(&input, order).into_iter().collect()
    }

    /// Expands `axiom` `order` times and interprets the result with step length `unit`.
    ///
    /// Symbols are derived lazily and segments reach `sink` as soon as they are drawn;
    /// the full expanded string is never held in memory.
    pub fn execute<S: DrawingSink>(
        &self,
        axiom: &str,
        order: usize,
        unit: f32,
        sink: S,
    ) -> Result<RunSummary> {
        debug!(axiom, order, unit, "executing");
        let input: Vec<Symbol> = axiom.chars().collect();
        self.interpreter
            .interpret(self.grammar.derive(&input, order), unit, sink)
    }

    /// Like [`execute`](Self::execute), also returning the expanded string and the
    /// per-symbol action log.
    pub fn execute_traced<S: DrawingSink>(
        &self,
        axiom: &str,
        order: usize,
        unit: f32,
        sink: S,
    ) -> Result<(RunSummary, Trace)> {
        let input: Vec<Symbol> = axiom.chars().collect();
        let expanded = self.grammar.expand(&input, order);
        let mut actions = Vec::new();
        let summary = self.interpreter.interpret_with(
            expanded.iter().copied(),
            unit,
            sink,
            |step| actions.push(step),
        )?;
        let trace = Trace {
            expanded: expanded.into_iter().collect(),
            actions,
        };
        Ok((summary, trace))
    }

    /// Runs the stored axiom with the stored default order and unit.
    pub fn demo<S: DrawingSink>(&self, sink: S) -> Result<RunSummary> {
        let axiom: String = self.grammar.axiom().iter().collect();
        self.execute(&axiom, self.defaults.order, self.defaults.unit, sink)
    }

    /// Runs the stored axiom and buffers the result.
    pub fn render(&self, order: usize, unit: f32) -> Result<Drawing> {
        let mut drawing = Drawing::new();
        self.interpreter.interpret(
            self.grammar.derive(self.grammar.axiom(), order),
            unit,
            &mut drawing,
        )?;
        Ok(drawing)
    }
}
