pub mod endpoint;
pub mod source;
pub mod target;
