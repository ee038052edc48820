mod ids;
mod literal;
mod record;
mod value;

pub use ids::*;
pub use literal::*;
pub use record::*;
pub use value::*;
