//! # hearth-domain
//!
//! Pure domain model for the hearth device node.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (named groupings of controllable parameters:
//!   lightbulb, switch, thermostat)
//! - Define **Parameters** (named, typed, boundable value slots)
//! - Define **Write batches** (ordered parameter/value pairs submitted as
//!   one update, tagged with the channel that originated them)
//! - Define **Events** (state-change records reflected to observers)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod event;
pub mod param;
pub mod value;
pub mod write;
