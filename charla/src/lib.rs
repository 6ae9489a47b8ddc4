pub use charla_core::model::ConnId;

pub mod model {
    pub use charla_core::model::*;
}

pub mod codec {
    pub use charla_core::codec::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use charla_server::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use charla_client::*;
}
