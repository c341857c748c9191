//! Planar geometric predicates and measures: points, segments and closed polygon rings.
//!
//! All types are plain values. Polygon rings are validated once at construction,
//! every query afterwards is a pure function of its inputs. Point coincidence is
//! exact structural equality; callers needing tolerance must apply it themselves.
//! Mixed-type intersection queries dispatch through the closed [`Geometry`] variant set.

mod error;

/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks of the library
pub mod primitives;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use geo_enums::{GeoKind, GeoRelation, Geometry};
#[doc(inline)]
pub use geo_traits::{CollidesWith, DistanceTo, Shape};
#[doc(inline)]
pub use primitives::{Point, Polygon, Rect, Segment};
