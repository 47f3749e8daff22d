//! Immutable extended set: a finite set or the complement of one.
//!
//! This module provides [`ExtendedSet`], the value type re-exported at
//! the crate root. See the [module documentation](super) for an
//! overview.
//!
//! # Representation
//!
//! An `ExtendedSet` is a finite backing set plus a `complementary`
//! flag. When the flag is clear the value denotes exactly the backing
//! set; when it is set, the value denotes the whole universe of the
//! element type minus the backing set. Every operation reduces to
//! ordinary finite-set operations on the backing sets, so the algebra
//! is closed without ever enumerating a complement.
//!
//! # Canonical Form
//!
//! All constructors and operations route empty-backing results through
//! [`ExtendedSet::empty`] and [`ExtendedSet::full`], so the two trivial
//! sets each have exactly one representation. Equality and hashing
//! therefore depend only on the denoted set, never on the sequence of
//! operations that produced a value.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Not, Sub};

use super::{DefaultHashBuilder, ReferenceCounter};

/// The finite backing set shared by both shapes of an extended set.
type Backing<T> = HashSet<T, DefaultHashBuilder>;

// =============================================================================
// ExtendedSet Definition
// =============================================================================

/// An immutable set that is either finite or the complement of a
/// finite set.
///
/// `ExtendedSet` extends ordinary finite sets with those infinite sets
/// that can be written as "everything except these elements". Both
/// shapes use the same representation, a finite set of `items` and a
/// `complementary` flag, and all operations stay closed over it.
///
/// Values are immutable: every operation returns a new value, and the
/// backing set is structurally shared through a reference-counted
/// pointer, so `clone` and `complement` never copy elements.
///
/// # Time Complexity
///
/// | Operation        | Complexity       |
/// |------------------|------------------|
/// | `empty` / `full` | O(1)             |
/// | `of`             | O(n)             |
/// | `contains`       | O(1) expected    |
/// | `contains_all`   | O(n) expected    |
/// | `contains_any`   | O(n) expected    |
/// | `complement`     | O(1)             |
/// | `clone`          | O(1)             |
/// | `intersect`      | O(n + m)         |
/// | `union`          | O(n + m)         |
/// | `subtract`       | O(n + m)         |
///
/// where n and m are the sizes of the *backing* sets, regardless of
/// whether the denoted sets are finite or complementary.
///
/// # Examples
///
/// ```rust
/// use extset::ExtendedSet;
///
/// let weekend = ExtendedSet::of(["Sat", "Sun"]);
/// assert!(weekend.contains("Sat"));
/// assert!(weekend.is_finite());
///
/// let weekdays = ExtendedSet::complement_of(["Sat", "Sun"]);
/// assert!(weekdays.contains("Mon"));
/// assert!(!weekdays.contains("Sat"));
/// assert!(weekdays.is_complementary());
///
/// assert_eq!(weekend.complement(), weekdays);
/// ```
pub struct ExtendedSet<T> {
    items: ReferenceCounter<Backing<T>>,
    complementary: bool,
}

// =============================================================================
// Construction
// =============================================================================

impl<T> ExtendedSet<T> {
    /// Returns the canonical empty set.
    ///
    /// The empty set is the unique finite set with no elements. Every
    /// operation that produces an empty result yields this same
    /// canonical form, so comparing against `empty()` is reliable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set: ExtendedSet<i32> = ExtendedSet::empty();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&1));
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: ReferenceCounter::new(Backing::default()),
            complementary: false,
        }
    }

    /// Returns the canonical full set, the complement of the empty set.
    ///
    /// The full set contains every value of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set: ExtendedSet<i32> = ExtendedSet::full();
    /// assert!(set.is_full());
    /// assert!(set.contains(&1));
    /// ```
    #[must_use]
    pub fn full() -> Self {
        Self {
            items: ReferenceCounter::new(Backing::default()),
            complementary: true,
        }
    }
}

impl<T: Eq + Hash> ExtendedSet<T> {
    /// Creates a finite set containing a single element.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to include in the set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set = ExtendedSet::singleton(42);
    /// assert!(set.contains(&42));
    /// assert!(!set.contains(&0));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::of(std::iter::once(element))
    }

    /// Creates a finite set containing exactly the distinct given
    /// elements.
    ///
    /// Duplicates collapse silently, and an empty input yields the
    /// canonical [`empty`](Self::empty) set.
    ///
    /// # Arguments
    ///
    /// * `elements` - The elements of the finite set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set = ExtendedSet::of(["Mon", "Tue", "Mon"]);
    /// assert_eq!(set, ExtendedSet::of(["Tue", "Mon"]));
    /// assert_eq!(set.items().len(), 2);
    ///
    /// let none: ExtendedSet<i32> = ExtendedSet::of([]);
    /// assert!(none.is_empty());
    /// ```
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_parts(elements.into_iter().collect(), false)
    }

    /// Creates a complementary set: every value of the element type
    /// except the distinct given elements.
    ///
    /// Duplicates collapse silently, and an empty input yields the
    /// canonical [`full`](Self::full) set.
    ///
    /// # Arguments
    ///
    /// * `elements` - The elements excluded from the set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set = ExtendedSet::complement_of(["Mon"]);
    /// assert!(set.contains("Tue"));
    /// assert!(!set.contains("Mon"));
    ///
    /// let all: ExtendedSet<i32> = ExtendedSet::complement_of([]);
    /// assert!(all.is_full());
    /// ```
    #[must_use]
    pub fn complement_of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_parts(elements.into_iter().collect(), true)
    }

    /// Canonicalizing constructor: empty backing sets collapse to the
    /// trivial values, everything else is stored as given.
    fn from_parts(items: Backing<T>, complementary: bool) -> Self {
        if items.is_empty() {
            if complementary { Self::full() } else { Self::empty() }
        } else {
            Self {
                items: ReferenceCounter::new(items),
                complementary,
            }
        }
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<T> ExtendedSet<T> {
    /// Returns the backing set, without the `complementary` flag.
    ///
    /// For finite sets these are the members; for complementary sets
    /// these are the *excluded* elements. The returned reference is
    /// read-only; the backing set of a constructed value never
    /// changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set = ExtendedSet::complement_of(["Mon"]);
    /// assert!(set.items().contains("Mon"));
    /// assert!(!set.contains("Mon"));
    /// ```
    #[must_use]
    pub fn items(&self) -> &HashSet<T, DefaultHashBuilder> {
        &self.items
    }

    /// Returns `true` if this set is a complement of a finite set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// assert!(ExtendedSet::complement_of(["Mon"]).is_complementary());
    /// assert!(!ExtendedSet::of(["Mon"]).is_complementary());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_complementary(&self) -> bool {
        self.complementary
    }

    /// Returns `true` if this set is a finite set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// assert!(ExtendedSet::of(["Mon"]).is_finite());
    /// assert!(!ExtendedSet::complement_of(["Mon"]).is_finite());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        !self.complementary
    }

    /// Returns `true` if this set is the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set: ExtendedSet<i32> = ExtendedSet::empty();
    /// assert!(set.is_empty());
    /// assert!(!set.is_full());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.complementary && self.items.is_empty()
    }

    /// Returns `true` if this set is the full set, the complement of
    /// the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set: ExtendedSet<i32> = ExtendedSet::full();
    /// assert!(set.is_full());
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.complementary && self.items.is_empty()
    }

    /// Returns `true` if this set is trivial: either empty or full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let empty: ExtendedSet<i32> = ExtendedSet::empty();
    /// let full: ExtendedSet<i32> = ExtendedSet::full();
    /// assert!(empty.is_trivial());
    /// assert!(full.is_trivial());
    /// assert!(!ExtendedSet::singleton(1).is_trivial());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Membership
// =============================================================================

impl<T: Eq + Hash> ExtendedSet<T> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// For a finite set this means the element is in the backing set;
    /// for a complementary set it means the element is *not* among the
    /// excluded ones.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to check for
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let set = ExtendedSet::of(["hello".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// assert!(set.complement().contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains(element) != self.complementary
    }

    /// Returns `true` if the set contains every element of the input.
    ///
    /// An empty input is vacuously true. For a finite set this is a
    /// subset check against the backing set; for a complementary set it
    /// holds iff none of the input elements are excluded.
    ///
    /// # Arguments
    ///
    /// * `elements` - The elements to check for
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let weekdays = ExtendedSet::complement_of(["Sat", "Sun"]);
    /// assert!(weekdays.contains_all(&["Mon", "Tue"]));
    /// assert!(!weekdays.contains_all(&["Mon", "Sat"]));
    ///
    /// let none: [&&str; 0] = [];
    /// assert!(weekdays.contains_all(none));
    /// ```
    #[must_use]
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        if self.complementary {
            !elements
                .into_iter()
                .any(|element| self.items.contains(element))
        } else {
            elements
                .into_iter()
                .all(|element| self.items.contains(element))
        }
    }

    /// Returns `true` if the set contains at least one element of the
    /// input, or if the input is empty.
    ///
    /// The empty input is `true` by convention, mirroring the vacuous
    /// truth of [`contains_all`](Self::contains_all). For a finite set
    /// this is an intersection test against the backing set; for a
    /// complementary set it holds unless *every* input element is
    /// excluded.
    ///
    /// # Arguments
    ///
    /// * `elements` - The elements to check for
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let weekend = ExtendedSet::of(["Sat", "Sun"]);
    /// assert!(weekend.contains_any(&["Mon", "Sun"]));
    /// assert!(!weekend.contains_any(&["Mon", "Tue"]));
    ///
    /// let none: [&&str; 0] = [];
    /// assert!(weekend.contains_any(none));
    /// ```
    #[must_use]
    pub fn contains_any<'a, I>(&self, elements: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut elements = elements.into_iter().peekable();
        if elements.peek().is_none() {
            return true;
        }

        if self.complementary {
            !elements.all(|element| self.items.contains(element))
        } else {
            elements.any(|element| self.items.contains(element))
        }
    }
}

// =============================================================================
// Algebra
// =============================================================================

impl<T> ExtendedSet<T> {
    /// Returns the complement of this set.
    ///
    /// Flips the `complementary` flag while sharing the backing set, so
    /// no elements are copied. Trivial sets route through the canonical
    /// [`empty`](Self::empty) and [`full`](Self::full) values. Applying
    /// `complement` twice yields a value equal to the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let weekend = ExtendedSet::of(["Sat", "Sun"]);
    /// let weekdays = weekend.complement();
    ///
    /// assert!(weekdays.contains("Mon"));
    /// assert_eq!(weekdays.complement(), weekend);
    /// ```
    #[must_use]
    pub fn complement(&self) -> Self {
        if self.items.is_empty() {
            if self.complementary {
                Self::empty()
            } else {
                Self::full()
            }
        } else {
            Self {
                items: ReferenceCounter::clone(&self.items),
                complementary: !self.complementary,
            }
        }
    }
}

impl<T: Clone + Eq + Hash> ExtendedSet<T> {
    /// Returns the intersection of this set and the other.
    ///
    /// Trivial operands short-circuit without touching any elements:
    /// intersecting with [`empty`](Self::empty) yields the empty set,
    /// and intersecting with [`full`](Self::full) returns the other
    /// operand unchanged. Otherwise one finite-set operation on the two
    /// backing sets produces the result, which is then canonicalized.
    ///
    /// This operation is commutative.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to intersect with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let weekend = ExtendedSet::of(["Sat", "Sun"]);
    /// let not_sunday = ExtendedSet::complement_of(["Sun"]);
    ///
    /// // finite ∩ complementary stays finite
    /// assert_eq!(weekend.intersect(&not_sunday), ExtendedSet::of(["Sat"]));
    ///
    /// // complementary ∩ complementary stays complementary
    /// let not_saturday = ExtendedSet::complement_of(["Sat"]);
    /// assert_eq!(
    ///     not_sunday.intersect(&not_saturday),
    ///     ExtendedSet::complement_of(["Sat", "Sun"]),
    /// );
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if self.items.is_empty() {
            // empty ∩ x = empty, full ∩ x = x
            return if self.complementary {
                other.clone()
            } else {
                self.clone()
            };
        }
        if other.items.is_empty() {
            return if other.complementary {
                self.clone()
            } else {
                other.clone()
            };
        }

        let result_items = match (self.complementary, other.complementary) {
            (false, false) => intersection_items(&self.items, &other.items),
            (false, true) => difference_items(&self.items, &other.items),
            (true, false) => difference_items(&other.items, &self.items),
            (true, true) => union_items(&self.items, &other.items),
        };

        Self::from_parts(result_items, self.complementary && other.complementary)
    }

    /// Returns the union of this set and the other.
    ///
    /// The dual of [`intersect`](Self::intersect) by De Morgan's law.
    /// Trivial operands short-circuit: a union with
    /// [`empty`](Self::empty) returns the other operand unchanged, and
    /// a union with [`full`](Self::full) yields the full set.
    ///
    /// This operation is commutative.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let weekend = ExtendedSet::of(["Sat", "Sun"]);
    /// let not_sunday = ExtendedSet::complement_of(["Sun"]);
    ///
    /// // An element is in the union unless it is excluded by the
    /// // complementary side and not supplied by the finite side.
    /// assert_eq!(weekend.union(&not_sunday), ExtendedSet::full());
    ///
    /// let not_monday = ExtendedSet::complement_of(["Mon", "Sun"]);
    /// assert_eq!(
    ///     not_sunday.union(&not_monday),
    ///     ExtendedSet::complement_of(["Sun"]),
    /// );
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.items.is_empty() {
            // empty ∪ x = x, full ∪ x = full
            return if self.complementary {
                self.clone()
            } else {
                other.clone()
            };
        }
        if other.items.is_empty() {
            return if other.complementary {
                other.clone()
            } else {
                self.clone()
            };
        }

        let result_items = match (self.complementary, other.complementary) {
            (false, false) => union_items(&self.items, &other.items),
            (false, true) => difference_items(&other.items, &self.items),
            (true, false) => difference_items(&self.items, &other.items),
            (true, true) => intersection_items(&self.items, &other.items),
        };

        Self::from_parts(result_items, self.complementary || other.complementary)
    }

    /// Returns the elements of this set that are not in the other.
    ///
    /// Defined as `self.intersect(&other.complement())`.
    ///
    /// # Arguments
    ///
    /// * `other` - The set to subtract
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extset::ExtendedSet;
    ///
    /// let weekend = ExtendedSet::of(["Sat", "Sun"]);
    /// let lost = ExtendedSet::of(["Sat", "Mon"]);
    ///
    /// assert_eq!(weekend.subtract(&lost), ExtendedSet::of(["Sun"]));
    /// ```
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.intersect(&other.complement())
    }
}

// =============================================================================
// Finite-Set Primitives
// =============================================================================

fn intersection_items<T>(first: &Backing<T>, second: &Backing<T>) -> Backing<T>
where
    T: Clone + Eq + Hash,
{
    first.intersection(second).cloned().collect()
}

fn union_items<T>(first: &Backing<T>, second: &Backing<T>) -> Backing<T>
where
    T: Clone + Eq + Hash,
{
    first.union(second).cloned().collect()
}

fn difference_items<T>(first: &Backing<T>, second: &Backing<T>) -> Backing<T>
where
    T: Clone + Eq + Hash,
{
    first.difference(second).cloned().collect()
}

// =============================================================================
// Operators
// =============================================================================

impl<T> Not for &ExtendedSet<T> {
    type Output = ExtendedSet<T>;

    /// Returns the complement of the set, like
    /// [`complement`](ExtendedSet::complement).
    fn not(self) -> ExtendedSet<T> {
        self.complement()
    }
}

impl<T: Clone + Eq + Hash> BitAnd for &ExtendedSet<T> {
    type Output = ExtendedSet<T>;

    /// Returns the intersection of the two sets, like
    /// [`intersect`](ExtendedSet::intersect).
    fn bitand(self, other: Self) -> ExtendedSet<T> {
        self.intersect(other)
    }
}

impl<T: Clone + Eq + Hash> BitOr for &ExtendedSet<T> {
    type Output = ExtendedSet<T>;

    /// Returns the union of the two sets, like
    /// [`union`](ExtendedSet::union).
    fn bitor(self, other: Self) -> ExtendedSet<T> {
        self.union(other)
    }
}

impl<T: Clone + Eq + Hash> Sub for &ExtendedSet<T> {
    type Output = ExtendedSet<T>;

    /// Returns the difference of the two sets, like
    /// [`subtract`](ExtendedSet::subtract).
    fn sub(self, other: Self) -> ExtendedSet<T> {
        self.subtract(other)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ExtendedSet<T> {
    fn clone(&self) -> Self {
        Self {
            items: ReferenceCounter::clone(&self.items),
            complementary: self.complementary,
        }
    }
}

impl<T> Default for ExtendedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Eq + Hash> FromIterator<T> for ExtendedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Eq + Hash> PartialEq for ExtendedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.complementary == other.complementary
            && (ReferenceCounter::ptr_eq(&self.items, &other.items)
                || *self.items == *other.items)
    }
}

impl<T: Eq + Hash> Eq for ExtendedSet<T> {}

impl<T: Eq + Hash> Hash for ExtendedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.complementary.hash(state);
        self.items.len().hash(state);

        // Element hashes are combined commutatively so that the
        // iteration order of the backing set cannot leak into the
        // result.
        let mut combined: u64 = 0;
        for element in self.items.iter() {
            let mut element_hasher = DefaultHasher::new();
            element.hash(&mut element_hasher);
            combined = combined.wrapping_add(element_hasher.finish());
        }
        state.write_u64(combined);
    }
}

impl<T: fmt::Debug> fmt::Debug for ExtendedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.complementary {
            formatter.write_str("~")?;
        }
        formatter.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ExtendedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.complementary {
            write!(formatter, "~")?;
        }
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self.items.iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Thread-Safety Assertions
// =============================================================================

// Rc backing keeps values single-threaded; the arc feature must restore
// Send/Sync.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ExtendedSet<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ExtendedSet<String>: Send, Sync);

#[cfg(feature = "arc")]
mod thread_safety_verification {
    use super::ExtendedSet;

    static_assertions::assert_impl_all!(ExtendedSet<i32>: Send, Sync);
    static_assertions::assert_impl_all!(ExtendedSet<String>: Send, Sync);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod canonical_representation_tests {
    use super::{ExtendedSet, ReferenceCounter};
    use rstest::rstest;

    #[rstest]
    fn test_empty_backing_collapses_to_trivial_values() {
        let from_of: ExtendedSet<i32> = ExtendedSet::of([]);
        let from_complement_of: ExtendedSet<i32> = ExtendedSet::complement_of([]);

        assert!(from_of.is_empty());
        assert!(!from_of.is_complementary());
        assert!(from_complement_of.is_full());
        assert!(from_complement_of.is_complementary());
    }

    #[rstest]
    fn test_operations_route_trivial_results_through_canonical_form() {
        let set = ExtendedSet::of([1, 2]);

        let drained = set.subtract(&set);
        assert!(drained.is_empty());
        assert!(!drained.is_complementary());

        let saturated = set.union(&set.complement());
        assert!(saturated.is_full());
        assert!(saturated.is_complementary());
    }

    #[rstest]
    fn test_complement_shares_backing_set() {
        let set = ExtendedSet::of([1, 2, 3]);
        let complemented = set.complement();

        assert!(ReferenceCounter::ptr_eq(&set.items, &complemented.items));
        assert!(complemented.complementary);
    }

    #[rstest]
    fn test_clone_shares_backing_set() {
        let set = ExtendedSet::of([1, 2, 3]);
        let cloned = set.clone();

        assert!(ReferenceCounter::ptr_eq(&set.items, &cloned.items));
        assert_eq!(set, cloned);
    }

    #[rstest]
    fn test_trivial_operands_return_operands_unchanged() {
        let set = ExtendedSet::of([1, 2]);
        let full = ExtendedSet::full();

        let intersected = set.intersect(&full);
        assert!(ReferenceCounter::ptr_eq(&set.items, &intersected.items));

        let unioned = ExtendedSet::empty().union(&set);
        assert!(ReferenceCounter::ptr_eq(&set.items, &unioned.items));
    }

    #[rstest]
    fn test_duplicates_collapse_in_backing_set() {
        let set = ExtendedSet::of(["Mon", "Mon", "Mon"]);
        assert_eq!(set.items.len(), 1);
    }
}
