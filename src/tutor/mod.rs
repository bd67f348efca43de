pub mod canned;
pub mod error;
pub mod factory;
pub mod interface;
pub mod openai_compatible;
pub mod response;
#[cfg(test)]
pub mod testing;

pub use canned::*;
pub use error::*;
pub use factory::*;
pub use interface::*;
pub use openai_compatible::*;
pub use response::*;
