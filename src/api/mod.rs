pub mod client;
pub mod error;
pub mod models;
pub mod omglol;

pub use client::DnsApiClient;
pub use error::{ApiError, Result};
pub use models::DnsRecord;
pub use omglol::OmglolClient;
