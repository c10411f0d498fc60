//! A headless engine that reports whether an element is inside the visible box of its
//! scrolling context, and which of its corners are.
//!
//! Typical uses are lazy loading, infinite scroll, and scroll-spy navigation: something should
//! happen when an element enters or leaves view.
//!
//! It is UI-agnostic. A host layer is expected to provide, via [`GeometryProvider`]:
//! - bounding boxes, client sizes, and scroll offsets
//! - computed margins and whether an element is rendered
//! - event listener registration for `scroll` and window events
//!
//! For a simulated host and enter/leave tracking, see the `inview-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod context;
mod error;
mod inview;
mod offset;
mod options;
mod provider;
mod subject;
mod types;
mod visibility;


pub use context::{Context, Subscription};
pub use error::ConfigError;
pub use inview::InView;
pub use offset::{EdgeOffsets, Offset, OffsetFn, OffsetValue};
pub use options::{DEFAULT_WINDOW_EVENTS, InViewOptions};
pub use provider::{GeometryProvider, Listener};
pub use subject::Subject;
pub use types::{
    Edge, EventSource, ListenerId, PercentageMode, Rect, ScrollAmount, ScrollDirX, ScrollDirY,
    ScrollOffset, ScrollSnapshot, Side, Size, Target,
};
pub use visibility::{Bounds, Intersection, Visibility};
