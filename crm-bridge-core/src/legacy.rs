pub mod action_name_mapper;
pub mod condition;
pub mod filter_mapper;
pub mod list_view;
pub mod module_name_mapper;
pub mod record_list;
pub mod route_converter;
pub mod scope;
pub mod search_form;

pub use action_name_mapper::*;
pub use condition::*;
pub use filter_mapper::*;
pub use list_view::*;
pub use module_name_mapper::*;
pub use record_list::*;
pub use route_converter::*;
pub use scope::*;
pub use search_form::*;
