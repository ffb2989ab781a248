//! Error types for queue operations.

use core::fmt;

/// The queue has no elements to serve the requested operation.
///
/// Returned by `front`, `front_mut`, and `pop_front`. Callers that treat
/// "nothing to do" as normal flow can check [`Queue::is_empty`] first or
/// match on the `Err`.
///
/// [`Queue::is_empty`]: crate::Queue::is_empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueue;

impl fmt::Display for EmptyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is empty")
    }
}

impl std::error::Error for EmptyQueue {}

/// A cursor was dereferenced or advanced while at the end sentinel.
///
/// This signals iteration past `end`, a usage bug rather than a recoverable
/// condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOperation;

impl fmt::Display for InvalidOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor is at the end sentinel")
    }
}

impl std::error::Error for InvalidOperation {}

/// Node allocation could not be satisfied.
///
/// The attempted `try_push_back` had no effect; the queue is unchanged and
/// the rejected element is carried inside the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationFailure<T>(pub T);

impl<T> AllocationFailure<T> {
    /// Returns the element that could not be appended.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for AllocationFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue node allocation failed")
    }
}

impl<T: fmt::Debug> std::error::Error for AllocationFailure<T> {}
