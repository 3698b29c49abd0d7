pub(crate) mod client;
pub(crate) mod deepl_client;
pub(crate) mod error;

pub use client::{ArticleResponse, Client};
pub use deepl_client::DeepLClient;
pub use error::{ClientError, Result as CliClientResult};
