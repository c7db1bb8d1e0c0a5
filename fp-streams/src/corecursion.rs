//! Corecursive streams.
//!
//! A stream is a value that, when invoked, produces one element together with
//! a new stream for "the rest". An infinite sequence is thus defined by finite
//! code and consumed one element at a time.
//!
//! Key mappings:
//! - `cons-stream` → [`Stream::unfold`] (seed + step function)
//! - `stream-car`/`stream-cdr` → [`Stream::invoke`], which returns both
//! - `(define (integers-from n) (cons-stream n (integers-from (+ n 1))))` →
//!   [`naturals_from`]
//!
//! Instead of a closure that refers to itself, a stream stores its cursor and
//! a plain `fn` step. Every invocation computes the next state from the
//! cursor alone, so a step costs O(1) no matter how far the stream has
//! advanced, and two stream values never share hidden state.
//!
//! # Bounding consumption
//!
//! Streams never end. Forcing "all" of one does not terminate and the library
//! cannot detect it: always bound the number of steps, with
//! [`Stream::prefix`], [`Stream::nth`] or `take` on [`Stream::steps`].

use std::fmt;

use tracing::debug;

// =============================================================================
// Streams
// =============================================================================

/// A corecursive stream: a state and the step that advances it.
///
/// # Example
///
/// ```
/// use fp_streams::corecursion::naturals;
///
/// let (zero, rest) = naturals().invoke();
/// let (one, rest) = rest.invoke();
/// let (two, _) = rest.invoke();
/// assert_eq!((zero, one, two), (0, 1, 2));
/// ```
pub struct Stream<S, T> {
    state: S,
    step: fn(&S) -> (T, S),
}

// Manual implementations: `T` is only produced, never stored.
impl<S: Clone, T> Clone for Stream<S, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            step: self.step,
        }
    }
}

impl<S: Copy, T> Copy for Stream<S, T> {}

impl<S: fmt::Debug, T> fmt::Debug for Stream<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").field("state", &self.state).finish()
    }
}

impl<S: Clone, T> Stream<S, T> {
    /// Creates a stream from a seed state and a step function.
    ///
    /// `step` receives the current state and returns the head together with
    /// the state of the tail.
    ///
    /// # Example
    ///
    /// ```
    /// use fp_streams::corecursion::Stream;
    ///
    /// let powers = Stream::unfold(1u64, |&n| (n, n * 2));
    /// assert_eq!(powers.prefix(5), vec![1, 2, 4, 8, 16]);
    /// ```
    #[must_use]
    pub const fn unfold(state: S, step: fn(&S) -> (T, S)) -> Self {
        Self { state, step }
    }

    /// Produces one element and the stream of the remaining elements.
    ///
    /// Does not change `self`: invoking the same stream twice yields the same
    /// head both times.
    #[must_use]
    pub fn invoke(&self) -> (T, Stream<S, T>) {
        let (head, next) = (self.step)(&self.state);
        (
            head,
            Stream {
                state: next,
                step: self.step,
            },
        )
    }

    /// Returns the current state, i.e. the cursor the next head is computed
    /// from.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the first `len` elements.
    ///
    /// Only the newest tail is kept between steps.
    #[must_use]
    pub fn prefix(&self, len: usize) -> Vec<T> {
        debug!(len, "forcing stream prefix");
        self.steps().take(len).collect()
    }

    /// Returns the head of the stream after `n` steps.
    #[must_use]
    pub fn nth(&self, n: usize) -> T {
        let mut stream = self.clone();
        for _ in 0..n {
            stream = stream.invoke().1;
        }
        stream.invoke().0
    }

    /// Returns an iterator over the stream's elements.
    ///
    /// The iterator never returns `None`; bound it with `take` or similar.
    #[must_use]
    pub fn steps(&self) -> Steps<S, T> {
        Steps {
            stream: self.clone(),
        }
    }
}

/// Infinite iterator over a [`Stream`], created by [`Stream::steps`].
pub struct Steps<S, T> {
    stream: Stream<S, T>,
}

impl<S: Clone, T> Iterator for Steps<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.stream.invoke();
        self.stream = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// =============================================================================
// Naturals
// =============================================================================

/// The stream type of [`naturals`] and [`naturals_from`].
pub type Naturals = Stream<i64, i64>;

/// One step of `naturals_from(i) = (i, naturals_from(i + 1))`.
///
/// The cursor wraps at `i64::MAX` so that invocation stays total.
fn natural_step(&cursor: &i64) -> (i64, i64) {
    (cursor, cursor.wrapping_add(1))
}

/// The stream `start, start + 1, start + 2, ...`.
#[must_use]
pub const fn naturals_from(start: i64) -> Naturals {
    Stream::unfold(start, natural_step)
}

/// The stream `0, 1, 2, ...`.
#[must_use]
pub const fn naturals() -> Naturals {
    naturals_from(0)
}

// =============================================================================
// Tests
// =============================================================================
