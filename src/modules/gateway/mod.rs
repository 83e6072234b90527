mod api_client;
mod services;

pub use api_client::{ApiClient, ApiRequest, ApiType};
pub use services::{AuthGateway, VillaGateway, VillaNumberGateway};
