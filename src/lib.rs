//! # Lazyseq: Composable Lazy Sequences
//!
//! Wrap a data source behind a uniform producer contract and build chains of
//! transformation stages without materializing intermediate results, while
//! keeping O(1) length queries wherever the source supports them.
//!
//! ## Core Traits
//!
//! - **[`Producer`]**: A single-pass cursor with a static fast-length capability
//! - **[`BackProducer`]**: A producer that can also be pulled from the back
//!
//! ## Wrappers
//!
//! - **[`Forward`]**: Adaptors and terminal operations for forward-only producers
//! - **[`Bidi`]**: The same for bidirectional producers, plus `rev()` and an eager `take()`
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let evens_squared = range(0u32, 10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x);
//! assert_eq!(evens_squared.to_vec(), vec![0, 4, 16, 36, 64]);
//!
//! // Length survives composition unless a stage makes it unknowable.
//! let pairs = range(0u32, 10).zip(from_bidirectional(&["a", "b", "c"]));
//! assert_eq!(pairs.len(), Some(3));
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`from_forward(&c)`](build::from_forward), [`from_bidirectional(&c)`](build::from_bidirectional) - Clone elements out of a container
//! - [`from_forward_ref(&mut c)`](build::from_forward_ref), [`from_bidirectional_ref(&mut c)`](build::from_bidirectional_ref) - Yield [`Slot`](build::Slot)s for in-place mutation
//! - [`range(a, b)`](build::range), [`range_from(a)`](build::range_from) - Half-open integer ranges
//! - [`repeat(v)`](build::repeat), [`repeat_n(v, n)`](build::repeat_n), [`once(v)`](build::once) - Single and repeated values
//!
//! **Consuming:**
//! - `fold`, `sum`, `product`, `count`, `collect`, `nth`, or a plain `for` loop

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod bidi;
mod error;
mod forward;
mod producer;

pub mod build;
pub mod compose;
pub mod consume;
pub mod iter;
pub mod prelude;

pub use bidi::Bidi;
pub use error::{Result, SeqError};
pub use forward::Forward;
pub use producer::{BackProducer, IntoProducer, Producer};
