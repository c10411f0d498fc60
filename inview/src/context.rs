use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::provider::{GeometryProvider, Listener};
use crate::{EventSource, ListenerId, ScrollDirX, ScrollDirY, ScrollSnapshot, Target};

/// The scrolling box (an element or the document) visibility is measured against.
///
/// A context tracks the scroll position of the box it wraps and refreshes it once per observed
/// event, before any handler runs.
pub struct Context<P: GeometryProvider> {
    host: Rc<P>,
    target: Target<P::Node>,
    snapshot: Cell<ScrollSnapshot>,
    last_event: RefCell<Option<P::Event>>,
}

/// Listener registrations made by [`Context::listen`].
///
/// Pass it back to [`Context::unlisten`] to remove them.
#[must_use = "dropping a Subscription leaves its listeners registered"]
#[derive(Debug)]
pub struct Subscription<N> {
    source: EventSource<N>,
    scroll: ListenerId,
    window: Vec<(String, ListenerId)>,
}

impl<N: Copy> Subscription<N> {
    pub fn source(&self) -> EventSource<N> {
        self.source
    }

    /// Names of the window events this subscription listens to.
    pub fn window_events(&self) -> impl Iterator<Item = &str> + '_ {
        self.window.iter().map(|(name, _)| name.as_str())
    }
}

impl<P: GeometryProvider> Context<P> {
    /// Wraps `target` and records its current scroll position.
    ///
    /// The first event therefore reports diffs against the position at construction, not zero.
    pub fn new(host: Rc<P>, target: Target<P::Node>) -> Rc<Self> {
        let snapshot = ScrollSnapshot::at(host.scroll_offset(target));
        Rc::new(Self {
            host,
            target,
            snapshot: Cell::new(snapshot),
            last_event: RefCell::new(None),
        })
    }

    pub fn target(&self) -> Target<P::Node> {
        self.target
    }

    pub fn is_document(&self) -> bool {
        matches!(self.target, Target::Document)
    }

    /// Viewport-relative top of the wrapped box (`0` for the document).
    pub fn top(&self) -> f64 {
        match self.target {
            Target::Document => 0.0,
            Target::Element(node) => self.host.bounding_rect(node).top,
        }
    }

    /// Viewport-relative left of the wrapped box (`0` for the document).
    pub fn left(&self) -> f64 {
        match self.target {
            Target::Document => 0.0,
            Target::Element(node) => self.host.bounding_rect(node).left,
        }
    }

    pub fn inner_height(&self) -> f64 {
        self.host.client_size(self.target).height
    }

    pub fn inner_width(&self) -> f64 {
        self.host.client_size(self.target).width
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot.get()
    }

    pub fn scroll_top(&self) -> f64 {
        self.snapshot.get().top
    }

    pub fn scroll_left(&self) -> f64 {
        self.snapshot.get().left
    }

    pub fn scroll_top_diff(&self) -> f64 {
        self.snapshot.get().top_diff
    }

    pub fn scroll_left_diff(&self) -> f64 {
        self.snapshot.get().left_diff
    }

    pub fn scroll_dir_y(&self) -> ScrollDirY {
        self.snapshot.get().dir_y
    }

    pub fn scroll_dir_x(&self) -> ScrollDirX {
        self.snapshot.get().dir_x
    }

    /// The raw event most recently seen by a listener installed with [`Context::listen`].
    pub fn last_event(&self) -> Option<P::Event> {
        self.last_event.borrow().clone()
    }

    /// Re-reads the scroll offsets and advances the snapshot.
    pub fn populate_scroll(&self) {
        let current = self.host.scroll_offset(self.target);
        let next = self.snapshot.get().advance(current);
        itrace!(
            top = next.top,
            left = next.left,
            top_diff = next.top_diff,
            left_diff = next.left_diff,
            "Context::populate_scroll"
        );
        self.snapshot.set(next);
    }

    /// Subscribes `handler` to the box's `scroll` event and to each of `window_events`.
    ///
    /// Every firing refreshes the scroll snapshot, stores the raw event, then calls `handler`.
    /// Listening again without [`Context::unlisten`] keeps both registrations alive.
    pub fn listen<S: AsRef<str>>(
        self: &Rc<Self>,
        handler: impl Fn(&P::Event) + 'static,
        window_events: &[S],
    ) -> Subscription<P::Node>
    where
        P: 'static,
    {
        let ctx: Weak<Self> = Rc::downgrade(self);
        let listener: Listener<P::Event> = Rc::new(move |event: &P::Event| {
            let Some(ctx) = ctx.upgrade() else {
                return;
            };
            ctx.populate_scroll();
            *ctx.last_event.borrow_mut() = Some(event.clone());
            handler(event);
        });

        let source = EventSource::from(self.target);
        let scroll = self
            .host
            .add_listener(source, "scroll", Rc::clone(&listener));
        let window = window_events
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let id = self
                    .host
                    .add_listener(EventSource::Window, name, Rc::clone(&listener));
                (String::from(name), id)
            })
            .collect::<Vec<_>>();
        idebug!(
            window_events = window.len(),
            document = self.is_document(),
            "Context::listen"
        );

        Subscription {
            source,
            scroll,
            window,
        }
    }

    /// Removes every listener registered by the matching [`Context::listen`] call.
    pub fn unlisten(&self, subscription: Subscription<P::Node>) {
        let Subscription {
            source,
            scroll,
            window,
        } = subscription;
        self.host.remove_listener(source, "scroll", scroll);
        for (name, id) in window {
            self.host.remove_listener(EventSource::Window, &name, id);
        }
        idebug!("Context::unlisten");
    }
}

impl<P: GeometryProvider> fmt::Debug for Context<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("target", &self.target)
            .field("snapshot", &self.snapshot.get())
            .finish_non_exhaustive()
    }
}
