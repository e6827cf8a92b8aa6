/// Traits shared by the geometric primitives
pub mod geo_traits;

mod primitives;
mod relation;

#[doc(inline)]
pub use primitives::Rect;

#[doc(inline)]
pub use relation::Relation;
