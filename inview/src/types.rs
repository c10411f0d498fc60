use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::ConfigError;

/// A bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_xywh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Returns the same box moved by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::from_xywh(self.left + dx, self.top + dy, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Absolute scroll position of a scrolling box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub top: f64,
    pub left: f64,
}

impl ScrollOffset {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// One edge of the subject's box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// `+1` for top/left, `-1` for bottom/right: a positive offset always shrinks the box.
    pub fn sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => 1.0,
            Self::Bottom | Self::Right => -1.0,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Margin side, used for computed-style queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirY {
    #[default]
    None,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirX {
    #[default]
    None,
    Left,
    Right,
}

/// Scroll state of a context as of the last observed event.
///
/// `dir_y == ScrollDirY::None` exactly when `top_diff == 0` (and likewise for X).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub top: f64,
    pub left: f64,
    pub top_diff: f64,
    pub left_diff: f64,
    pub dir_y: ScrollDirY,
    pub dir_x: ScrollDirX,
}

impl ScrollSnapshot {
    /// A snapshot resting at `offset`, with no movement recorded.
    pub fn at(offset: ScrollOffset) -> Self {
        Self {
            top: offset.top,
            left: offset.left,
            ..Self::default()
        }
    }

    /// Computes the snapshot that follows `self` once the box is at `current`.
    pub fn advance(&self, current: ScrollOffset) -> Self {
        let top_diff = current.top - self.top;
        let left_diff = current.left - self.left;
        let dir_y = if top_diff == 0.0 {
            ScrollDirY::None
        } else if top_diff > 0.0 {
            ScrollDirY::Down
        } else {
            ScrollDirY::Up
        };
        let dir_x = if left_diff == 0.0 {
            ScrollDirX::None
        } else if left_diff > 0.0 {
            ScrollDirX::Right
        } else {
            ScrollDirX::Left
        };
        Self {
            top: current.top,
            left: current.left,
            top_diff,
            left_diff,
            dir_y,
            dir_x,
        }
    }
}

/// Per-axis scroll deltas treated as noise (see [`crate::InViewOptions::scroll_amount`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAmount {
    pub top: f64,
    pub left: f64,
}

impl ScrollAmount {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// True when either axis moved by a non-zero amount within its threshold.
    ///
    /// The axes are OR-ed: a small horizontal move suppresses a large vertical one.
    pub fn is_noise(&self, top_diff: f64, left_diff: f64) -> bool {
        let dy = abs(top_diff);
        let dx = abs(left_diff);
        (dy > 0.0 && dy <= self.top) || (dx > 0.0 && dx <= self.left)
    }
}

/// Which box a percentage offset is measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PercentageMode {
    /// The context's client box.
    #[default]
    Parent,
    /// The subject's own box.
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Self_,
}

impl FromStr for PercentageMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(Self::Parent),
            "self" => Ok(Self::Self_),
            other => Err(ConfigError::UnknownPercentageMode(other.to_string())),
        }
    }
}

/// The scrolling box a [`crate::Context`] wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target<N> {
    Document,
    Element(N),
}

/// Where an event listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventSource<N> {
    Document,
    Element(N),
    /// The window owning the document.
    Window,
}

impl<N> From<Target<N>> for EventSource<N> {
    fn from(target: Target<N>) -> Self {
        match target {
            Target::Document => Self::Document,
            Target::Element(node) => Self::Element(node),
        }
    }
}

/// Host-issued id of a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

pub(crate) fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// Rounds toward negative infinity without relying on `std`.
pub(crate) fn floor(v: f64) -> f64 {
    // Non-finite values and anything beyond 2^52 are already integral.
    if !v.is_finite() || abs(v) >= 4_503_599_627_370_496.0 {
        return v;
    }
    let t = v as i64 as f64;
    if t > v { t - 1.0 } else { t }
}
