// Adapters layer: concrete implementations for external systems (http backend, address bar, session).

pub mod address_bar;
pub mod http;
pub mod session;

pub use address_bar::InMemoryAddressBar;
pub use http::HttpJobBackend;
pub use session::StaticSession;
