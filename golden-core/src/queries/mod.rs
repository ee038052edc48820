mod vessel;

pub use vessel::*;
