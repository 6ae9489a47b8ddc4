pub mod chat;
pub mod media;
pub mod negotiation;
pub mod speech;
pub mod translator;
pub mod transport;

pub use chat::{ChatChannel, Speaker, TranscriptEntry};
pub use media::{MediaChannel, MediaError};
pub use negotiation::{NegotiationError, Negotiator, NegotiatorConfig, PeerEvent, Phase};
pub use speech::{SpeechError, SpeechRecognizer, SpeechSynthesizer};
pub use translator::HttpTranslator;
pub use transport::{SignalReceiver, SignalSender, TransportError, connect};
