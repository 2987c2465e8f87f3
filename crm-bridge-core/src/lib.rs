pub mod domain;
pub mod error;
pub mod legacy;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use legacy::*;
pub use traits::*;
