//! Command implementations.

mod extract;
mod info;
mod status;

pub use extract::execute_extract;
pub use info::execute_info;
pub use status::execute_status;
