mod app;
pub mod config;
mod session;
pub mod translate;
mod ws_handler;

pub use app::{AppState, router};
pub use session::{LOBBY, SessionCommand, SessionManager};
pub use ws_handler::ws_handler;
