use alloc::rc::Rc;
use core::fmt;

use crate::context::Subscription;
use crate::provider::GeometryProvider;
use crate::{
    Bounds, ConfigError, Context, Edge, EdgeOffsets, InViewOptions, Intersection, Offset,
    PercentageMode, ScrollAmount, Subject, Target, Visibility,
};

/// Watches one subject and reports its visibility inside a context on every scroll/window event.
///
/// This type is UI-agnostic:
/// - It does not own the nodes it watches.
/// - All geometry and event plumbing goes through a [`GeometryProvider`].
/// - Each event runs one synchronous evaluation, then invokes the callback.
///
/// Dropping the engine removes its listeners.
pub struct InView<P: GeometryProvider> {
    inner: Rc<Inner<P>>,
    subscription: Option<Subscription<P::Node>>,
}

struct Inner<P: GeometryProvider> {
    subject: Subject<P>,
    context: Rc<Context<P>>,
    offsets: EdgeOffsets<Offset<P>>,
    mode: PercentageMode,
    scroll_amount: ScrollAmount,
    callback: Rc<dyn Fn(Visibility)>,
}

impl<P: GeometryProvider + 'static> InView<P> {
    /// Validates `options`, then starts listening for `scroll` on the context and for
    /// `options.window_events` on the window.
    ///
    /// Nothing is registered with the host when validation fails.
    pub fn new(
        host: Rc<P>,
        subject: P::Node,
        callback: impl Fn(Visibility) + 'static,
        options: InViewOptions<P>,
    ) -> Result<Self, ConfigError> {
        let offsets = options.offset.validate()?;
        let target = options.context.map_or(Target::Document, Target::Element);
        idebug!(
            ?subject,
            ?target,
            mode = ?options.offset_percentage_mode,
            "InView::new"
        );

        let context = Context::new(Rc::clone(&host), target);
        let inner = Rc::new(Inner {
            subject: Subject::new(host, subject),
            context: Rc::clone(&context),
            offsets,
            mode: options.offset_percentage_mode,
            scroll_amount: options.scroll_amount.unwrap_or_default(),
            callback: Rc::new(callback),
        });

        let weak = Rc::downgrade(&inner);
        let subscription = context.listen(
            move |_event| {
                if let Some(inner) = weak.upgrade() {
                    inner.evaluate();
                }
            },
            options.window_events.as_slice(),
        );

        Ok(Self {
            inner,
            subscription: Some(subscription),
        })
    }
}

impl<P: GeometryProvider> InView<P> {
    /// Runs an evaluation now, against the last observed scroll snapshot.
    ///
    /// Returns the result passed to the callback, or `None` when the last scroll delta was
    /// filtered out as noise.
    pub fn recalculate(&self) -> Option<Visibility> {
        self.inner.evaluate()
    }

    /// Computes the current intersection without the noise filter and without calling back.
    pub fn intersection(&self) -> Intersection {
        self.inner.intersection()
    }

    /// Removes all listeners. Later calls do nothing.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.inner.context.unlisten(subscription);
        }
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn subject(&self) -> &Subject<P> {
        &self.inner.subject
    }

    pub fn context(&self) -> &Context<P> {
        &self.inner.context
    }
}

impl<P: GeometryProvider> Drop for InView<P> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<P: GeometryProvider> fmt::Debug for InView<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InView")
            .field("subject", &self.inner.subject)
            .field("context", &self.inner.context)
            .field("offsets", &self.inner.offsets)
            .field("mode", &self.inner.mode)
            .field("scroll_amount", &self.inner.scroll_amount)
            .field("listening", &self.subscription.is_some())
            .finish()
    }
}

impl<P: GeometryProvider> Inner<P> {
    fn evaluate(&self) -> Option<Visibility> {
        let snapshot = self.context.snapshot();
        if self
            .scroll_amount
            .is_noise(snapshot.top_diff, snapshot.left_diff)
        {
            itrace!(
                top_diff = snapshot.top_diff,
                left_diff = snapshot.left_diff,
                "InView: scroll below threshold"
            );
            return None;
        }

        let visibility = self.intersection().visibility();
        itrace!(
            visible = visibility.visible,
            top_left = visibility.top_left,
            top_right = visibility.top_right,
            bottom_left = visibility.bottom_left,
            bottom_right = visibility.bottom_right,
            "InView::evaluate"
        );
        (self.callback)(visibility);
        Some(visibility)
    }

    fn intersection(&self) -> Intersection {
        let parent_top = self.context.top();
        let parent_left = self.context.left();
        let parent = Bounds {
            top: parent_top,
            left: parent_left,
            bottom: parent_top + self.context.inner_height(),
            right: parent_left + self.context.inner_width(),
        };
        let child = Bounds {
            top: self.resolve_edge(Edge::Top),
            left: self.resolve_edge(Edge::Left),
            bottom: self.resolve_edge(Edge::Bottom),
            right: self.resolve_edge(Edge::Right),
        };
        Intersection::compute(parent, child)
    }

    fn resolve_edge(&self, edge: Edge) -> f64 {
        self.offsets
            .resolve_edge(edge, &self.subject, &self.context, self.mode)
    }
}
