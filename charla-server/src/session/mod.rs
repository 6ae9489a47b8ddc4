mod session;
mod session_command;
mod session_manager;

pub use session::Session;
pub use session_command::SessionCommand;
pub use session_manager::{LOBBY, SessionManager};
