pub mod catalog;
pub mod data;
pub mod types;

pub use catalog::*;
pub use data::*;
pub use types::*;
