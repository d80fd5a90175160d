pub mod duck;
pub mod parse;
pub mod request;
pub mod runtime;

pub use duck::{ADDRESSES_ENDPOINT, DuckClient};
