//! # Persistent List
//!
//! A value-semantic sequence with a right fold from which every other
//! combinator is derived.
//!
//! ## Philosophy
//!
//! Every list-producing operation takes its list arguments **by value** and
//! returns a new list. A caller that wants to keep a list clones it before
//! passing it on; the clone is an independent value, so nothing a callee does
//! can be observed through it.
//!
//! `map`, `sum`, `append`, `reverse`, `identity` and the textual rendering
//! are all folds:
//!
//! | Operation   | Definition                                                  |
//! |-------------|-------------------------------------------------------------|
//! | `map`       | `fold(\|x, acc\| add_to_front(f(x), acc), empty(), l)`      |
//! | `sum`       | `fold(\|x, acc\| x + acc, zero, l)`                         |
//! | `append`    | `fold(add_to_front, second, first)`                         |
//! | `reverse`   | `fold(\|x, acc\| append(acc, [x]), empty(), l)`             |
//! | `identity`  | `fold(add_to_front, empty(), l)`                            |
//!
//! [`map_direct`] is the one combinator written against `front`/`rest`
//! instead.
//!
//! ## Example
//!
//! ```
//! use fp_common::list::{add_to_front, append, empty, map, sum};
//!
//! let l = add_to_front(6, add_to_front(5, add_to_front(3, empty())));
//! assert_eq!(l.to_string(), "6 5 3 ");
//! assert_eq!(sum(l.clone()), 14);
//!
//! let twice = append(l.clone(), l.clone());
//! assert_eq!(twice.to_string(), "6 5 3 6 5 3 ");
//! assert_eq!(sum(twice), 28);
//!
//! let signed = map(|i| format!("+{i}"), l);
//! assert_eq!(signed.to_string(), "+6 +5 +3 ");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use im::Vector;
use tracing::debug;

use crate::additive::Additive;

/// Lists longer than this get a debug event from [`reverse`], which is
/// quadratic.
const LONG_REVERSE: usize = 1 << 12;

/// A finite, ordered, value-semantic sequence.
///
/// Decomposition is only ever "front" and "rest". Storage is an
/// [`im::Vector`], so [`Clone`] shares structure instead of copying elements;
/// the observable behaviour is that of an independent copy.
pub struct List<T> {
    items: Vector<T>,
}

impl<T: Clone> List<T> {
    /// Creates a list with zero elements. Same as [`empty`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

// Manual implementations: `im::Vector` only provides these for `T: Clone`.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: Clone> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Clone + Eq> Eq for List<T> {}

impl<T: Clone + Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Renders every element followed by a single space, front to back.
///
/// The right fold visits the last element first, so the rendering folds over
/// the reversed list to emit the elements in their original order.
impl<T: Clone + fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fold(
            |value, written: fmt::Result| {
                written?;
                write!(f, "{value} ")
            },
            Ok(()),
            reverse(self.clone()),
        )
    }
}

impl<T: Clone> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Returns the list with zero elements.
#[inline]
#[must_use]
pub fn empty<T: Clone>() -> List<T> {
    List::new()
}

/// Returns true iff the list has zero elements.
#[inline]
#[must_use]
pub fn is_empty<T: Clone>(list: &List<T>) -> bool {
    list.is_empty()
}

/// Returns the first element.
///
/// # Panics
///
/// Calling `front` on an empty list is a caller bug. It panics; check
/// [`is_empty`] first or use [`uncons`].
///
/// # Example
/// ```
/// use fp_common::list::{add_to_front, empty, front};
/// assert_eq!(front(&add_to_front('a', empty())), 'a');
/// ```
#[track_caller]
#[must_use]
pub fn front<T: Clone>(list: &List<T>) -> T {
    match list.items.front() {
        Some(value) => value.clone(),
        None => panic!("front called on an empty list"),
    }
}

/// Returns a new list without the first element.
///
/// # Panics
///
/// Panics on an empty list, for the same reason as [`front`].
#[track_caller]
#[must_use]
pub fn rest<T: Clone>(mut list: List<T>) -> List<T> {
    if list.items.pop_front().is_none() {
        panic!("rest called on an empty list");
    }
    list
}

/// Returns a new list with `value` prepended.
#[inline]
#[must_use]
pub fn add_to_front<T: Clone>(value: T, mut list: List<T>) -> List<T> {
    list.items.push_front(value);
    list
}

/// Splits a list into its front and rest, or `None` if it is empty.
///
/// # Example
/// ```
/// use fp_common::list::{List, uncons};
///
/// let (head, tail) = uncons(List::from(vec![1, 2])).unwrap();
/// assert_eq!((head, tail), (1, List::from(vec![2])));
/// assert!(uncons(List::<i32>::new()).is_none());
/// ```
#[must_use]
pub fn uncons<T: Clone>(mut list: List<T>) -> Option<(T, List<T>)> {
    let head = list.items.pop_front()?;
    Some((head, list))
}

/// Right fold.
///
/// `fold(f, seed, [])` is `seed`, and `fold(f, seed, [x0, x1, .., xn])` is
/// `f(x0, fold(f, seed, [x1, .., xn]))`. `f` is therefore applied to `xn`
/// first and to `x0` last. The walk runs from the back of the list without
/// recursing, so list length is not limited by stack depth.
///
/// # Example
/// ```
/// use fp_common::list::{List, fold};
///
/// let shape = fold(|x, acc| format!("({x} . {acc})"), "nil".to_string(), List::from(vec![1, 2, 3]));
/// assert_eq!(shape, "(1 . (2 . (3 . nil)))");
/// ```
pub fn fold<T, U, F>(mut f: F, seed: U, list: List<T>) -> U
where
    T: Clone,
    F: FnMut(T, U) -> U,
{
    let mut items = list.items;
    let mut acc = seed;
    while let Some(value) = items.pop_back() {
        acc = f(value, acc);
    }
    acc
}

/// Applies `f` to every element, preserving order.
///
/// Built on [`fold`], so `f` sees the elements back to front.
#[must_use]
pub fn map<T, U, F>(mut f: F, list: List<T>) -> List<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(T) -> U,
{
    fold(|value, acc| add_to_front(f(value), acc), empty(), list)
}

/// Applies `f` to every element, preserving order.
///
/// The `f(front) :: map(f, rest)` formulation: same result as [`map`], but
/// `f` sees the elements front to back.
#[must_use]
pub fn map_direct<T, U, F>(mut f: F, list: List<T>) -> List<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(T) -> U,
{
    let mut mapped = Vector::new();
    let mut remaining = list;
    while let Some((value, tail)) = uncons(remaining) {
        mapped.push_back(f(value));
        remaining = tail;
    }
    List { items: mapped }
}

/// Adds every element to the additive identity.
///
/// # Example
/// ```
/// use fp_common::list::{List, sum};
/// use std::time::Duration;
///
/// let waits = List::from(vec![Duration::from_millis(5), Duration::from_millis(7)]);
/// assert_eq!(sum(waits), Duration::from_millis(12));
/// ```
#[must_use]
pub fn sum<T: Clone + Additive>(list: List<T>) -> T {
    fold(|value, acc| value + acc, T::zero(), list)
}

/// Returns the elements of `first` followed by the elements of `second`.
#[must_use]
pub fn append<T: Clone>(first: List<T>, second: List<T>) -> List<T> {
    fold(add_to_front, second, first)
}

/// Returns the elements in the opposite order.
///
/// Each element is appended to the accumulated result as a one-element
/// list, which makes this quadratic in the length of the list.
#[must_use]
pub fn reverse<T: Clone>(list: List<T>) -> List<T> {
    if list.len() > LONG_REVERSE {
        debug!(len = list.len(), "reversing a long list by repeated append");
    }
    fold(
        |value, acc| append(acc, add_to_front(value, empty())),
        empty(),
        list,
    )
}

/// Rebuilds the list by folding `add_to_front` over it. Returns an equal list.
#[must_use]
pub fn identity<T: Clone>(list: List<T>) -> List<T> {
    fold(add_to_front, empty(), list)
}

/// Returns the textual rendering: each element and a trailing space.
///
/// # Example
/// ```
/// use fp_common::list::{List, render};
/// assert_eq!(render(&List::from(vec!["a", "b"])), "a b ");
/// assert_eq!(render(&List::<u8>::new()), "");
/// ```
#[must_use]
pub fn render<T: Clone + fmt::Display>(list: &List<T>) -> String {
    list.to_string()
}
