mod big_int;
mod dispatch;
mod display;
mod error;
mod fibonacci;
mod magnitude;
mod mul;
mod ops;
#[cfg(feature = "serde")]
mod serialize;
mod sign;

pub use big_int::*;
pub use error::*;
pub use fibonacci::*;
pub use sign::*;
