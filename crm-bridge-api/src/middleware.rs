pub mod legacy_redirect;

pub use legacy_redirect::*;
