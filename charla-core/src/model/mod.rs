mod conn;
mod signaling;

pub use conn::ConnId;
pub use signaling::{CandidateBlob, IceServerConfig, SessionDescription, SignalMessage};
