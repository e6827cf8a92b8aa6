/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod tolerance;

#[doc(inline)]
pub use config::BigMConfig;
#[doc(inline)]
pub use config::PackerConfig;
#[doc(inline)]
pub use tolerance::Tolerance;
