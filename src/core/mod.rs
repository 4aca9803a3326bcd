// Core argument encoding and identifier types

mod types;
mod serialize;

pub use types::*;
pub use serialize::*;
