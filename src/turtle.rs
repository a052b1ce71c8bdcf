//! Turtle state and operations for 2D interpretation.

use crate::drawing::Segment;
use crate::error::LSystemError;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

/// Heading change applied by [`ActionKind::LeftTurn`], as a multiple of the angle.
/// Positive headings rotate counter-clockwise in a y-up frame.
pub const LEFT_TURN_SIGN: f32 = 1.0;

/// Heading change applied by [`ActionKind::RightTurn`], as a multiple of the angle.
pub const RIGHT_TURN_SIGN: f32 = -1.0;

/// The state of the drawing turtle.
///
/// A plain value: saving it onto the stack is a copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    /// Current position of the cursor.
    pub position: Vec2,

    /// Current heading in degrees, kept in `[0, 360)`. `0` points along `+X`.
    pub heading: f32,

    /// Whether forward moves leave a trail.
    pub pen_down: bool,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            pen_down: true,
        }
    }
}

impl TurtleState {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
            pen_down: true,
        }
    }

    /// Unit vector the turtle is facing.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }

    /// Moves `distance` along the current heading.
    ///
    /// Returns the traversed segment when the pen is down; pen-up moves emit nothing.
    pub fn move_forward(&mut self, distance: f32) -> Option<Segment> {
        let start = self.position;
        self.position += self.direction() * distance;
        self.pen_down.then(|| Segment::new(start, self.position))
    }

    /// Rotates by `delta` degrees.
    pub fn turn(&mut self, delta: f32) {
        self.heading = normalize_heading(self.heading + delta);
    }
}

/// Wraps `degrees` into `[0, 360)`.
///
/// `rem_euclid` alone can round a tiny negative input up to exactly `360.0`.
pub fn normalize_heading(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Saved turtle snapshots for `[` / `]`, scoped to one interpretation run.
#[derive(Clone, Debug, Default)]
pub struct StateStack {
    saved: Vec<TurtleState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: TurtleState) {
        self.saved.push(state);
    }

    /// Pops the most recent snapshot, `None` when nothing is saved.
    pub fn pop(&mut self) -> Option<TurtleState> {
        self.saved.pop()
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// What a symbol makes the turtle do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Put the pen down and move forward one unit (`F`, `G`).
    DrawForward,
    /// Turn by `+angle` (`+`).
    LeftTurn,
    /// Turn by `-angle` (`-`).
    RightTurn,
    /// Save the full turtle state onto the stack (`[`).
    SaveState,
    /// Restore the most recently saved turtle state (`]`).
    RestoreState,
    /// Symbol has no drawing meaning.
    #[default]
    Noop,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::DrawForward,
        ActionKind::LeftTurn,
        ActionKind::RightTurn,
        ActionKind::SaveState,
        ActionKind::RestoreState,
        ActionKind::Noop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ActionKind::DrawForward => "draw_forward",
            ActionKind::LeftTurn => "left_turn",
            ActionKind::RightTurn => "right_turn",
            ActionKind::SaveState => "save_state",
            ActionKind::RestoreState => "restore_state",
            ActionKind::Noop => "noop",
        }
    }

    /// Short name accepted alongside [`name`](Self::name) in definition files.
    pub fn short_name(self) -> Option<&'static str> {
        match self {
            ActionKind::DrawForward => Some("draw"),
            ActionKind::LeftTurn => Some("left"),
            ActionKind::RightTurn => Some("right"),
            ActionKind::SaveState => Some("push"),
            ActionKind::RestoreState => Some("pop"),
            ActionKind::Noop => None,
        }
    }

    /// Parses an action name for `symbol`, reporting the symbol on failure.
    pub fn parse_for(symbol: char, name: &str) -> Result<Self, LSystemError> {
        name.parse().map_err(|_| LSystemError::UnknownActionKind {
            symbol,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognised action name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownActionName(pub String);

impl fmt::Display for UnknownActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownActionName {}

impl FromStr for ActionKind {
    type Err = UnknownActionName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.short_name() == Some(s))
            .ok_or_else(|| UnknownActionName(s.to_string()))
    }
}
