use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use inview::{
    EventSource, GeometryProvider, Listener, ListenerId, Rect, ScrollOffset, Side, Size, Target,
};

/// Handle to an element owned by a [`SimHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

/// The event delivered to listeners registered on a [`SimHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimEvent {
    pub name: String,
    pub source: EventSource<NodeId>,
}

#[derive(Clone, Debug, Default)]
struct SimNode {
    /// Scroll container; `None` is the document.
    parent: Option<NodeId>,
    /// Position in the container's content coordinates.
    frame: Rect,
    /// Visible size when the element scrolls; defaults to the frame size.
    client: Option<Size>,
    scroll: ScrollOffset,
    margins: [Option<String>; 4],
    display_none: bool,
    detached: bool,
}

struct Registration {
    source: EventSource<NodeId>,
    name: String,
    id: ListenerId,
    listener: Listener<SimEvent>,
}

/// An in-memory document implementing [`GeometryProvider`].
///
/// Elements are laid out in the content coordinates of their scroll container (the document or
/// another element). Viewport coordinates are derived on every query from the container chain
/// and its scroll offsets, so scrolling never requires touching the elements themselves.
///
/// Hidden (`display: none`) and detached elements, and everything inside them, report all-zero
/// geometry.
pub struct SimHost {
    viewport: Cell<Size>,
    doc_scroll: Cell<ScrollOffset>,
    nodes: RefCell<Vec<SimNode>>,
    listeners: RefCell<Vec<Registration>>,
    next_listener: Cell<u64>,
}

impl SimHost {
    pub fn new(viewport: Size) -> Rc<Self> {
        Rc::new(Self {
            viewport: Cell::new(viewport),
            doc_scroll: Cell::new(ScrollOffset::default()),
            nodes: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        })
    }

    /// Adds an element at `frame` inside `parent` (or the document).
    pub fn add_element(&self, parent: Option<NodeId>, frame: Rect) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len() as u32);
        nodes.push(SimNode {
            parent,
            frame,
            ..SimNode::default()
        });
        id
    }

    pub fn set_frame(&self, node: NodeId, frame: Rect) {
        self.with_node(node, |n| n.frame = frame);
    }

    /// Overrides the visible size of a scrolling element (e.g. to account for a scrollbar).
    pub fn set_client_size(&self, node: NodeId, size: Size) {
        self.with_node(node, |n| n.client = Some(size));
    }

    pub fn set_margin(&self, node: NodeId, side: Side, value: Option<&str>) {
        self.with_node(node, |n| n.margins[side_index(side)] = value.map(ToString::to_string));
    }

    pub fn set_display_none(&self, node: NodeId, hidden: bool) {
        self.with_node(node, |n| n.display_none = hidden);
    }

    /// Removes the element from layout. Its handle stays valid and reports zero geometry.
    pub fn detach(&self, node: NodeId) {
        self.with_node(node, |n| n.detached = true);
    }

    pub fn viewport(&self) -> Size {
        self.viewport.get()
    }

    pub fn document_scroll(&self) -> ScrollOffset {
        self.doc_scroll.get()
    }

    /// Scrolls the document and dispatches its `scroll` event.
    pub fn scroll_document_to(&self, top: f64, left: f64) {
        self.doc_scroll.set(ScrollOffset::new(top, left));
        self.dispatch(EventSource::Document, "scroll");
    }

    /// Scrolls an element and dispatches its `scroll` event.
    pub fn scroll_element_to(&self, node: NodeId, top: f64, left: f64) {
        self.with_node(node, |n| n.scroll = ScrollOffset::new(top, left));
        self.dispatch(EventSource::Element(node), "scroll");
    }

    /// Resizes the viewport and dispatches the window `resize` event.
    pub fn resize(&self, viewport: Size) {
        self.viewport.set(viewport);
        self.dispatch(EventSource::Window, "resize");
    }

    pub fn fire_window_event(&self, name: &str) {
        self.dispatch(EventSource::Window, name);
    }

    /// Calls every listener registered for `name` on `source`, in registration order.
    ///
    /// Listeners may add or remove listeners while running; the set of listeners called is the
    /// one registered when dispatch started.
    pub fn dispatch(&self, source: EventSource<NodeId>, name: &str) {
        let matching = self
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.source == source && r.name == name)
            .map(|r| Rc::clone(&r.listener))
            .collect::<Vec<_>>();
        atrace!(?source, name, listeners = matching.len(), "SimHost::dispatch");
        let event = SimEvent {
            name: name.to_string(),
            source,
        };
        for listener in matching {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn with_node(&self, node: NodeId, f: impl FnOnce(&mut SimNode)) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node.0 as usize) {
            f(n);
        }
    }

    /// Viewport rect of `node`, or `None` when it (or a container) is not rendered.
    fn layout(&self, node: NodeId) -> Option<Rect> {
        let nodes = self.nodes.borrow();
        let n = nodes.get(node.0 as usize)?;
        if n.display_none || n.detached {
            return None;
        }
        let (origin_x, origin_y) = match n.parent {
            None => {
                let scroll = self.doc_scroll.get();
                (-scroll.left, -scroll.top)
            }
            Some(parent) => {
                let scroll = nodes.get(parent.0 as usize)?.scroll;
                let rect = self.layout(parent)?;
                (rect.left - scroll.left, rect.top - scroll.top)
            }
        };
        Some(n.frame.translate(origin_x, origin_y))
    }
}

impl GeometryProvider for SimHost {
    type Node = NodeId;
    type Event = SimEvent;

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.layout(node).unwrap_or_default()
    }

    fn client_size(&self, target: Target<NodeId>) -> Size {
        match target {
            Target::Document => self.viewport.get(),
            Target::Element(node) => {
                let Some(rect) = self.layout(node) else {
                    return Size::default();
                };
                self.nodes.borrow()[node.0 as usize]
                    .client
                    .unwrap_or(Size::new(rect.width, rect.height))
            }
        }
    }

    fn scroll_offset(&self, target: Target<NodeId>) -> ScrollOffset {
        match target {
            Target::Document => self.doc_scroll.get(),
            Target::Element(node) => self
                .nodes
                .borrow()
                .get(node.0 as usize)
                .map(|n| n.scroll)
                .unwrap_or_default(),
        }
    }

    fn computed_margin(&self, node: NodeId, side: Side) -> Option<String> {
        self.nodes
            .borrow()
            .get(node.0 as usize)?
            .margins[side_index(side)]
            .clone()
    }

    fn offset_size(&self, node: NodeId) -> Size {
        self.layout(node)
            .map(|r| Size::new(r.width, r.height))
            .unwrap_or_default()
    }

    fn client_rect_count(&self, node: NodeId) -> usize {
        usize::from(self.layout(node).is_some())
    }

    fn add_listener(
        &self,
        source: EventSource<NodeId>,
        name: &str,
        listener: Listener<SimEvent>,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push(Registration {
            source,
            name: name.to_string(),
            id,
            listener,
        });
        id
    }

    fn remove_listener(&self, source: EventSource<NodeId>, name: &str, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|r| !(r.id == id && r.source == source && r.name == name));
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Top => 0,
        Side::Right => 1,
        Side::Bottom => 2,
        Side::Left => 3,
    }
}
