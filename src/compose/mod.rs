//! Combining producers together
//!
//! Each adaptor owns its upstream producer (or producers) by value and is
//! itself a producer. An adaptor implements [`BackProducer`](crate::BackProducer)
//! whenever its upstream does, so the same type serves both tiers.

mod chain;
mod map;
mod rev;
mod take;
mod zip;

// Re-export composition operations
pub use chain::{Chain, chain};
pub use map::{Filter, Map, filter, map};
pub use rev::{Rev, rev};
pub use take::{StepBy, Take, step_by, take};
pub use zip::{Enumerate, Zip, enumerate, zip};
