use alloc::rc::Rc;
use alloc::string::String;
use core::fmt::Debug;

use crate::{EventSource, ListenerId, Rect, ScrollOffset, Side, Size, Target};

/// A shared event listener registered with a host.
pub type Listener<E> = Rc<dyn Fn(&E)>;

/// The host capabilities the engine needs: geometry queries and event registration.
///
/// This crate never creates or destroys nodes. `Node` is a non-owning handle into whatever tree
/// the host manages (a DOM, a retained-mode widget tree, a test fixture, ...).
///
/// Queries are synchronous and infallible from the engine's point of view. Detached nodes should
/// report degenerate geometry (typically all zeros) rather than fail; if the host panics instead,
/// the panic propagates through the engine unchanged.
pub trait GeometryProvider {
    type Node: Copy + Eq + Debug;
    type Event: Clone;

    /// The node's border box in viewport coordinates.
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    /// The visible (client) size of a scrolling box.
    ///
    /// For [`Target::Document`] this is the root element's client box, not the full content.
    fn client_size(&self, target: Target<Self::Node>) -> Size;

    /// The absolute scroll offsets of a scrolling box.
    fn scroll_offset(&self, target: Target<Self::Node>) -> ScrollOffset;

    /// The raw computed margin value for one side (e.g. `"12px"`), if any.
    fn computed_margin(&self, node: Self::Node, side: Side) -> Option<String>;

    /// The layout size of the node (zero for `display: none` or detached nodes).
    fn offset_size(&self, node: Self::Node) -> Size;

    /// The number of client rectangles the node produces.
    fn client_rect_count(&self, node: Self::Node) -> usize;

    fn add_listener(
        &self,
        source: EventSource<Self::Node>,
        name: &str,
        listener: Listener<Self::Event>,
    ) -> ListenerId;

    fn remove_listener(&self, source: EventSource<Self::Node>, name: &str, id: ListenerId);
}
