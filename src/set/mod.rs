//! Extended (finite-or-complementary) sets.
//!
//! This module provides [`ExtendedSet`], an immutable set that is either
//! a finite set of elements or the complement of a finite set, "every
//! possible value except these". Both shapes share one representation:
//! a finite backing set plus a `complementary` flag, kept in canonical
//! form so that structurally equal sets are representation-equal.
//!
//! # Structural Sharing
//!
//! The backing set lives behind a reference-counted pointer. Cloning a
//! value, taking its complement, or returning an operand unchanged from
//! a short-circuited operation shares the backing set instead of
//! copying it.
//!
//! # Examples
//!
//! ```rust
//! use extset::ExtendedSet;
//!
//! let blocked = ExtendedSet::of(["10.0.0.1", "10.0.0.2"]);
//! let allowed = blocked.complement();
//!
//! assert!(allowed.contains("192.168.0.1"));
//! assert!(!allowed.contains("10.0.0.1"));
//!
//! // Narrow the allowed set further without ever enumerating it.
//! let restricted = allowed.subtract(&ExtendedSet::of(["192.168.0.99"]));
//! assert!(restricted.is_complementary());
//! assert!(!restricted.contains("192.168.0.99"));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Hash Builder Type Alias
// =============================================================================

/// Hash state used by the backing sets.
///
/// When the `fxhash` feature is enabled, this is
/// [`rustc_hash::FxBuildHasher`], a fast non-cryptographic hasher.
///
/// When the `fxhash` feature is disabled (default), this is the
/// standard library's [`RandomState`](std::collections::hash_map::RandomState).
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash state used by the backing sets.
///
/// When the `fxhash` feature is enabled, this is
/// `rustc_hash::FxBuildHasher`, a fast non-cryptographic hasher.
///
/// When the `fxhash` feature is disabled (default), this is the
/// standard library's [`RandomState`](std::collections::hash_map::RandomState).
#[cfg(not(feature = "fxhash"))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod extended;

pub use extended::ExtendedSet;

// =============================================================================
// Tests
// =============================================================================
