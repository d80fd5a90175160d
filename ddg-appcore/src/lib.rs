pub mod reset;
pub mod service;
pub mod settings;
pub mod setup;
pub mod terminal;

pub use reset::ResetOutcome;
pub use service::{AppService, Launch};
pub use terminal::Terminal;
