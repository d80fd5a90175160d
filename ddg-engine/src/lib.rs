pub mod engine;
pub mod session;
pub mod traits;

pub use engine::Generator;
pub use session::Generation;
pub use traits::{Clipboard, ClipboardOutcome, EmailSource};
