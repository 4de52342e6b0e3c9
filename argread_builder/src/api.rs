mod reader;
mod structure;
mod value;

pub use reader::*;
pub use structure::*;
pub use value::*;
