/// Rejected operations on a [`SplineBuilder`](crate::SplineBuilder).
///
/// All variants are usage errors: retrying the same call will fail again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SplineError {
    /// A point was added after the curve was closed
    #[error("cannot add a point to a closed curve")]
    AddOnClosedCurve,
    /// `close` was called on a curve that is already closed
    #[error("curve is already closed")]
    AlreadyClosed,
    /// A path was requested before enough points constrain a segment
    #[error("not enough points or finalized segments to build a path")]
    InsufficientPoints,
}
