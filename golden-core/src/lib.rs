#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod assistant;
mod domain;
mod error;
mod ports;
mod queries;

#[cfg(any(test, feature = "test"))]
mod test_helper;

pub use assistant::*;
pub use domain::*;
pub use error::{Error, LiteralError, Result};
pub use ports::*;
pub use queries::*;
