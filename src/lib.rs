pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod registry;
pub mod scheduler;
pub mod terminal;

pub use config::Config;
pub use error::{Result, TermfolioError};
pub use registry::ProjectRegistry;
pub use terminal::{SubmitOutcome, TerminalSession};
