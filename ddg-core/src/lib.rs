pub mod codec;
pub mod config;
pub mod error;
pub mod types;

pub use codec::*;
pub use config::*;
pub use error::*;
pub use types::*;
