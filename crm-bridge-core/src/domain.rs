pub mod bean;
pub mod criteria;
pub mod module;
pub mod record;
pub mod route;

pub use bean::*;
pub use criteria::*;
pub use module::*;
pub use record::*;
pub use route::*;
