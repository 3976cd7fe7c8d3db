//! Output formatting.

mod response;

pub use response::format_response;
