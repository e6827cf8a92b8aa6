mod instance;
mod placement;
mod rectangle;
mod solution;

#[doc(inline)]
pub use instance::SPInstance;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use rectangle::Rectangle;

#[doc(inline)]
pub use solution::PairRelation;

#[doc(inline)]
pub use solution::SPSolution;

#[doc(inline)]
pub use solution::SolveQuality;
