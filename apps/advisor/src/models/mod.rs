pub mod preferences;

pub use preferences::{Experience, Goal, StudentPreferences};
