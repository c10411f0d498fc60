use core::cell::Cell;

use inview::Visibility;

/// A change in a subject's `visible` state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    Enter(Visibility),
    Leave(Visibility),
}

impl Transition {
    pub fn visibility(&self) -> Visibility {
        match self {
            Self::Enter(v) | Self::Leave(v) => *v,
        }
    }

    pub fn is_enter(&self) -> bool {
        matches!(self, Self::Enter(_))
    }
}

/// Edge detector over a stream of [`Visibility`] results.
///
/// The first result only produces a transition when the subject is already visible; a subject
/// that starts hidden has not "left" anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnterLeave {
    visible: Option<bool>,
}

impl EnterLeave {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `v` and returns the transition it causes, if any.
    pub fn observe(&mut self, v: Visibility) -> Option<Transition> {
        let prev = self.visible.replace(v.visible);
        let transition = match (prev, v.visible) {
            (Some(true), false) => Some(Transition::Leave(v)),
            (Some(false) | None, true) => Some(Transition::Enter(v)),
            _ => None,
        };
        if transition.is_some() {
            atrace!(visible = v.visible, "EnterLeave: transition");
        }
        transition
    }

    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(false)
    }

    /// Forgets the last state; the next result is treated as the first.
    pub fn reset(&mut self) {
        self.visible = None;
    }
}

/// Adapts a transition handler into an engine callback.
///
/// ```ignore
/// let engine = InView::new(host, node, on_transition(|t| println!("{t:?}")), options)?;
/// ```
pub fn on_transition(f: impl Fn(Transition) + 'static) -> impl Fn(Visibility) + 'static {
    let state = Cell::new(EnterLeave::new());
    move |v| {
        let mut tracker = state.get();
        let transition = tracker.observe(v);
        state.set(tracker);
        if let Some(t) = transition {
            f(t);
        }
    }
}
