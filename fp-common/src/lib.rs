//! # Functional Core: Lists
//!
//! A value-semantic list and the fold-based combinator algebra built on it.
//!
//! ## Modules
//!
//! - [`list`]: the [`List`] type, `front`/`rest` decomposition and the right
//!   fold with everything derived from it
//! - [`additive`]: the capability bound behind generic [`sum`]
//!
//! ## Design Principles
//!
//! 1. **Value semantics**: list-producing operations take lists by value and
//!    return new ones; no caller ever observes a mutation
//! 2. **One primitive**: the combinators are derived from [`fold`]
//! 3. **Fail fast**: `front`/`rest` of an empty list panic instead of
//!    returning a sentinel

pub mod additive;
pub mod list;

// Re-export main types for convenience
pub use additive::Additive;
pub use list::{
    List, add_to_front, append, empty, fold, front, identity, is_empty, map, map_direct, render,
    rest, reverse, sum, uncons,
};
