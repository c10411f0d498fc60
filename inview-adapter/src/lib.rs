//! Host-side helpers for the `inview` crate.
//!
//! The `inview` crate only knows about geometry through its `GeometryProvider` trait. This crate
//! provides small, framework-neutral pieces commonly needed around it:
//!
//! - [`SimHost`]: an in-memory document (viewport, nested scroll containers, listeners) for
//!   tests, demos, and headless hosts
//! - [`EnterLeave`]: turns visibility results into enter/leave transitions
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod sim;
mod tracker;


pub use sim::{NodeId, SimEvent, SimHost};
pub use tracker::{EnterLeave, Transition, on_transition};
