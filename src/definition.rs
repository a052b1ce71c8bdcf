//! Loading an [`LSystem`] from a JSON definition.
//!
//! ```json
//! {
//!   "angle": 25,
//!   "axiom": "X",
//!   "rules": { "X": "F+[[X]-X]-F[-FX]+X", "F": "FF" },
//!   "actions": { "X": "noop" },
//!   "draw": { "start_point": [0, 0], "start_heading": 90, "default_order": 5, "default_unit": 4 }
//! }
//! ```
//!
//! `rules`, `axiom` and `angle` are required. `actions` is merged over the standard
//! table and accepts both the full action names and their short forms (`draw`, `left`,
//! `right`, `push`, `pop`).

use crate::error::{LSystemError, Result};
use crate::grammar::{Grammar, single_char};
use crate::interpreter::TurtleConfig;
use crate::lsystem::{DrawDefaults, LSystem};
use glam::Vec2;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Drawing options carried alongside the grammar.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DrawSection {
    pub start_point: Option<[f32; 2]>,
    pub start_heading: Option<f32>,
    pub default_order: Option<usize>,
    pub default_unit: Option<f32>,
}

/// The raw record as it appears on disk.
///
/// Required fields are optional here so their absence can be reported as
/// [`LSystemError::MissingField`] rather than a generic parse error.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Definition {
    pub rules: Option<BTreeMap<String, String>>,
    pub axiom: Option<String>,
    pub angle: Option<f32>,
    #[serde(default)]
    pub actions: BTreeMap<String, String>,
    #[serde(default)]
    pub draw: DrawSection,
}

impl Definition {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading definition");
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validates the record and builds the [`LSystem`] it describes.
    pub fn build(&self) -> Result<LSystem> {
        let rules = self.rules.as_ref().ok_or(LSystemError::MissingField("rules"))?;
        let axiom = self.axiom.as_deref().ok_or(LSystemError::MissingField("axiom"))?;
        let angle = self.angle.ok_or(LSystemError::MissingField("angle"))?;

        let grammar = Grammar::from_string_rules(axiom, rules)?;

        let config = TurtleConfig {
            angle,
            start_position: self.draw.start_point.map(Vec2::from).unwrap_or(Vec2::ZERO),
            start_heading: self.draw.start_heading.unwrap_or(0.0),
        };

        let fallback = DrawDefaults::default();
        let defaults = DrawDefaults {
            order: self.draw.default_order.unwrap_or(fallback.order),
            unit: self.draw.default_unit.unwrap_or(fallback.unit),
        };

        let overrides = self
            .actions
            .iter()
            .map(|(key, name)| Ok((single_char(key)?, name.as_str())))
            .collect::<Result<Vec<_>>>()?;

        Ok(LSystem::new(grammar, config)
            .with_action_names(overrides)?
            .with_defaults(defaults))
    }
}

/// Reads and builds a definition file in one step.
pub fn load_lsystem(path: impl AsRef<Path>) -> Result<LSystem> {
    Definition::from_path(path)?.build()
}
