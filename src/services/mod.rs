pub mod api_client;
pub mod token_store;

#[cfg(test)]
pub mod mock_api;

pub use api_client::{AdminApi, ApiClient, ApiError};
pub use token_store::{BrowserTokenStore, TokenStore};

#[cfg(test)]
pub use token_store::MemoryTokenStore;
