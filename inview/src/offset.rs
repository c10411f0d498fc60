use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::fmt;

use crate::provider::GeometryProvider;
use crate::types::floor;
use crate::{ConfigError, Context, Edge, PercentageMode, Subject};

/// An offset computed on every evaluation from the current geometry.
pub type OffsetFn<P> = Rc<dyn Fn(&Subject<P>, &Context<P>) -> f64>;

/// An offset as supplied by the caller, before validation.
pub enum OffsetValue<P: GeometryProvider> {
    Number(f64),
    /// Must be a percentage, e.g. `"25%"`.
    Text(String),
    Function(OffsetFn<P>),
}

impl<P: GeometryProvider> OffsetValue<P> {
    pub fn function(f: impl Fn(&Subject<P>, &Context<P>) -> f64 + 'static) -> Self {
        Self::Function(Rc::new(f))
    }

    /// Validates the value for `edge`.
    pub fn validate(&self, edge: Edge) -> Result<Offset<P>, ConfigError> {
        match self {
            Self::Number(v) => Ok(Offset::Fixed(*v)),
            Self::Function(f) => Ok(Offset::Computed(Rc::clone(f))),
            Self::Text(text) => {
                if !text.ends_with('%') {
                    iwarn!(%edge, value = %text, "rejected non-percentage offset");
                    return Err(ConfigError::InvalidOffset {
                        edge,
                        value: text.clone(),
                    });
                }
                let Some(percent) = leading_integer(text) else {
                    iwarn!(%edge, value = %text, "rejected percentage offset");
                    return Err(ConfigError::InvalidPercentage {
                        edge,
                        value: text.clone(),
                    });
                };
                Ok(Offset::Percent(percent))
            }
        }
    }
}

impl<P: GeometryProvider> Clone for OffsetValue<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Number(v) => Self::Number(*v),
            Self::Text(s) => Self::Text(s.clone()),
            Self::Function(f) => Self::Function(Rc::clone(f)),
        }
    }
}

impl<P: GeometryProvider> From<f64> for OffsetValue<P> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl<P: GeometryProvider> From<i32> for OffsetValue<P> {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl<P: GeometryProvider> From<&str> for OffsetValue<P> {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<P: GeometryProvider> From<String> for OffsetValue<P> {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<P: GeometryProvider> fmt::Debug for OffsetValue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.debug_tuple("Number").field(v).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// A validated per-edge offset.
///
/// Positive values shrink the subject's effective box on every edge, negative values grow it.
pub enum Offset<P: GeometryProvider> {
    /// A distance in pixels.
    Fixed(f64),
    /// A percentage of the context's (or the subject's) height or width.
    Percent(i64),
    Computed(OffsetFn<P>),
}

impl<P: GeometryProvider> Offset<P> {
    /// The offset-adjusted, floored position of `edge`.
    pub fn resolve(
        &self,
        edge: Edge,
        subject: &Subject<P>,
        context: &Context<P>,
        mode: PercentageMode,
    ) -> f64 {
        let raw = raw_edge(edge, subject);
        let delta = match self {
            Self::Fixed(v) => *v,
            Self::Computed(f) => f(subject, context),
            Self::Percent(percent) => {
                let dimension = match (mode, edge.is_vertical()) {
                    (PercentageMode::Parent, true) => context.inner_height(),
                    (PercentageMode::Parent, false) => context.inner_width(),
                    (PercentageMode::Self_, true) => subject.height(false),
                    (PercentageMode::Self_, false) => subject.width(false),
                };
                dimension / 100.0 * (*percent as f64)
            }
        };
        floor(raw + delta * edge.sign())
    }
}

impl<P: GeometryProvider> Clone for Offset<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(v) => Self::Fixed(*v),
            Self::Percent(p) => Self::Percent(*p),
            Self::Computed(f) => Self::Computed(Rc::clone(f)),
        }
    }
}

impl<P: GeometryProvider> fmt::Debug for Offset<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Percent(p) => f.debug_tuple("Percent").field(p).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Offsets for each edge of the subject; `None` leaves the edge as measured.
pub struct EdgeOffsets<O> {
    pub top: Option<O>,
    pub left: Option<O>,
    pub bottom: Option<O>,
    pub right: Option<O>,
}

impl<O> EdgeOffsets<O> {
    pub fn get(&self, edge: Edge) -> Option<&O> {
        match edge {
            Edge::Top => self.top.as_ref(),
            Edge::Left => self.left.as_ref(),
            Edge::Bottom => self.bottom.as_ref(),
            Edge::Right => self.right.as_ref(),
        }
    }

    pub fn set(&mut self, edge: Edge, value: Option<O>) {
        let slot = match edge {
            Edge::Top => &mut self.top,
            Edge::Left => &mut self.left,
            Edge::Bottom => &mut self.bottom,
            Edge::Right => &mut self.right,
        };
        *slot = value;
    }

    /// Sets the same offset on all four edges.
    pub fn uniform(value: O) -> Self
    where
        O: Clone,
    {
        Self {
            top: Some(value.clone()),
            left: Some(value.clone()),
            bottom: Some(value.clone()),
            right: Some(value),
        }
    }
}

impl<O> Default for EdgeOffsets<O> {
    fn default() -> Self {
        Self {
            top: None,
            left: None,
            bottom: None,
            right: None,
        }
    }
}

impl<O: Clone> Clone for EdgeOffsets<O> {
    fn clone(&self) -> Self {
        Self {
            top: self.top.clone(),
            left: self.left.clone(),
            bottom: self.bottom.clone(),
            right: self.right.clone(),
        }
    }
}

impl<O: fmt::Debug> fmt::Debug for EdgeOffsets<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeOffsets")
            .field("top", &self.top)
            .field("left", &self.left)
            .field("bottom", &self.bottom)
            .field("right", &self.right)
            .finish()
    }
}

impl<P: GeometryProvider> EdgeOffsets<OffsetValue<P>> {
    /// Validates every configured edge; the first invalid one is reported.
    pub fn validate(&self) -> Result<EdgeOffsets<Offset<P>>, ConfigError> {
        let mut out = EdgeOffsets::default();
        for edge in Edge::ALL {
            if let Some(value) = self.get(edge) {
                out.set(edge, Some(value.validate(edge)?));
            }
        }
        Ok(out)
    }
}

impl<P: GeometryProvider> EdgeOffsets<Offset<P>> {
    /// Effective position of `edge`: the floored raw edge when no offset is set.
    pub fn resolve_edge(
        &self,
        edge: Edge,
        subject: &Subject<P>,
        context: &Context<P>,
        mode: PercentageMode,
    ) -> f64 {
        match self.get(edge) {
            Some(offset) => offset.resolve(edge, subject, context, mode),
            None => floor(raw_edge(edge, subject)),
        }
    }
}

fn raw_edge<P: GeometryProvider>(edge: Edge, subject: &Subject<P>) -> f64 {
    match edge {
        Edge::Top => subject.top(),
        Edge::Left => subject.left(),
        Edge::Bottom => subject.bottom(),
        Edge::Right => subject.right(),
    }
}

/// The integer at the start of `text`, after optional whitespace and a sign.
pub(crate) fn leading_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = digits[..len].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
