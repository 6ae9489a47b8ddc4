
pub use mock_translator::*;
pub use test_client::*;
