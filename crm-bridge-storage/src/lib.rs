pub mod memory;
pub mod postgres;
pub mod repositories;
pub mod rows;

pub use memory::*;
pub use repositories::*;
