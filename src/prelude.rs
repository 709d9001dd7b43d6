//! uintkit prelude.
//!
//! This module contains the most used types, traits, functions,
//! and macros that you can import easily as a group.
//!
//! ```
//! use uintkit::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::error::ParseUintError;

#[doc(no_inline)]
pub use crate::format::Format;

#[doc(no_inline)]
pub use crate::uint128::Uint128;

#[doc(no_inline)]
pub use num_traits::{Bounded, Num, One, Zero};
