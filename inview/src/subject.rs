use alloc::rc::Rc;
use core::fmt;

use crate::provider::GeometryProvider;
use crate::{Side, Size};

/// The tracked element.
///
/// Nothing is cached: every query goes back to the host, so measurements taken by offset
/// functions during an evaluation see the current layout.
pub struct Subject<P: GeometryProvider> {
    host: Rc<P>,
    node: P::Node,
}

impl<P: GeometryProvider> Subject<P> {
    pub fn new(host: Rc<P>, node: P::Node) -> Self {
        Self { host, node }
    }

    pub fn node(&self) -> P::Node {
        self.node
    }

    pub fn top(&self) -> f64 {
        self.host.bounding_rect(self.node).top
    }

    pub fn left(&self) -> f64 {
        self.host.bounding_rect(self.node).left
    }

    pub fn right(&self) -> f64 {
        self.host.bounding_rect(self.node).right
    }

    pub fn bottom(&self) -> f64 {
        self.host.bounding_rect(self.node).bottom
    }

    /// Box height, plus the top and bottom margins when `with_margins` is set.
    pub fn height(&self, with_margins: bool) -> f64 {
        let height = self.host.bounding_rect(self.node).height;
        if !with_margins {
            return height;
        }
        height + self.margin(Side::Top) + self.margin(Side::Bottom)
    }

    /// Box width, plus the left and right margins when `with_margins` is set.
    pub fn width(&self, with_margins: bool) -> f64 {
        let width = self.host.bounding_rect(self.node).width;
        if !with_margins {
            return width;
        }
        width + self.margin(Side::Left) + self.margin(Side::Right)
    }

    /// Whether the element takes up layout space or produces any client rectangle.
    ///
    /// False for `display: none` and detached elements.
    pub fn is_rendered(&self) -> bool {
        let Size { width, height } = self.host.offset_size(self.node);
        width > 0.0 || height > 0.0 || self.host.client_rect_count(self.node) > 0
    }

    fn margin(&self, side: Side) -> f64 {
        self.host
            .computed_margin(self.node, side)
            .map_or(0.0, |raw| parse_length(&raw))
    }
}

impl<P: GeometryProvider> Clone for Subject<P> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            node: self.node,
        }
    }
}

impl<P: GeometryProvider> fmt::Debug for Subject<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

/// Reads the leading number of a CSS length (`"12.5px"` -> `12.5`); anything else is `0`.
pub(crate) fn parse_length(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}
