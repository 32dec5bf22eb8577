// Licensed   under  the   Apache  License,   Version  2.0   <LICENSE-APACHE  or
// http://www.apache.org/licenses/LICENSE-2.0> or  the MIT  license <LICENSE-MIT
// or http://opensource.org/licenses/MIT>, at your option.  This file may not be
// copied, modified, or distributed except according to those terms.

//! Combination case checker
//!
//! Generates every concatenation of one symbol per group ([`combine`][]) and
//! checks labeled fixture cases against the generated output ([`verify`][]).
//! The [`Driver`][] ties fixture loading, parsing, and verification together
//! behind the command line interface.

pub mod case;
pub mod combine;
pub mod driver;
pub mod verify;

pub use crate::driver::{Driver, Error, ErrorKind, Result};
