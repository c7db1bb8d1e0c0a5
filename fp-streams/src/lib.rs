//! Functional Core: Streams
//!
//! Infinite sequences defined by corecursion and consumed lazily:
//! - Streams as explicit state machines (cursor + step)
//! - The canonical `naturals` stream
//! - Bounded consumption helpers

// Modules
pub mod corecursion; // Corecursive streams

pub use corecursion::{Naturals, Steps, Stream, naturals, naturals_from};
