pub mod state;

pub use state::{CommandHistoryEntry, SessionState};
