pub mod client;
pub mod endpoints;
pub mod loading;
pub mod request;
pub mod transport;

pub use client::ApiClient;
pub use loading::LoadingTracker;
pub use request::{ApiRequest, Method, RequestOptions};
pub use transport::{HttpTransport, Transport};
