#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod adapter;
mod error;
mod settings;

pub use adapter::CsvAdapter;
pub use error::{Error, Result};
pub use settings::Settings;
