pub mod codec;
pub mod model;
pub mod translate;

pub use codec::{CodecError, decode, encode};
pub use model::{CandidateBlob, ConnId, IceServerConfig, SessionDescription, SignalMessage};
pub use translate::{LanguagePair, TranslationError, Translator};
