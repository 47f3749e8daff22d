//! # extset
//!
//! Extended sets for Rust: immutable values that are either a finite set
//! of elements or the complement of a finite set over an unbounded
//! universe.
//!
//! ## Overview
//!
//! A classic finite set cannot say "every string except these two".
//! [`ExtendedSet`] can: it pairs a finite backing set with a
//! `complementary` flag, and every set-algebra operation (complement,
//! union, intersection, subtraction) stays closed over that
//! representation, so no infinite collection is ever materialized.
//!
//! - **Membership**: `contains`, `contains_all`, `contains_any`
//! - **Algebra**: `complement`, `union`, `intersect`, `subtract`,
//!   plus the `!`, `|`, `&`, and `-` operators
//! - **Immutability**: every operation returns a new value; backing
//!   sets are structurally shared, so `clone` and `complement` never
//!   copy elements
//! - **Canonical form**: the empty and full sets have a unique
//!   representation, so equality and hashing are reliable regardless of
//!   how a value was built
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for the backing-set pointer,
//!   making `ExtendedSet<T>` `Send + Sync` for thread-safe sharing
//! - `fxhash`: use `rustc-hash` for faster backing-set hashing
//!
//! ## Example
//!
//! ```rust
//! use extset::ExtendedSet;
//!
//! let weekend = ExtendedSet::of(["Sat", "Sun"]);
//! let weekdays = weekend.complement();
//!
//! assert!(weekdays.contains("Mon"));
//! assert!(!weekdays.contains("Sat"));
//!
//! // The algebra is closed: the union of a finite set and a
//! // complementary set is still representable.
//! assert_eq!(weekend.union(&weekdays), ExtendedSet::full());
//! assert_eq!(weekend.intersect(&weekdays), ExtendedSet::empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use extset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;

pub use set::DefaultHashBuilder;
pub use set::ExtendedSet;
