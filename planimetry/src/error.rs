use thiserror::Error;

use crate::geo_enums::GeoKind;

/// Failures surfaced by constructors and intersection queries.
///
/// Every error is call-site local and surfaced immediately; nothing is retried
/// or swallowed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeoError {
    /// A polygon ring needs at least 3 vertices.
    #[error("polygon ring requires at least 3 vertices, got {0}")]
    NotEnoughPoints(usize),
    /// The first and last vertices of a polygon ring must coincide.
    #[error("polygon ring is not closed: first and last vertices differ")]
    RingNotClosed,
    /// The requested ordered pair of variants has no intersection test.
    #[error("intersection of {0} with {1} is not supported")]
    UnsupportedGeometry(GeoKind, GeoKind),
    /// Angle involving a zero-magnitude point.
    #[error("angle with a zero-magnitude point is undefined")]
    UndefinedAngle,
}
