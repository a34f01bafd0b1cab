// Adapters layer: concrete implementations for external systems (vendor HTTP form, HTML pages).

pub mod html;
pub mod http;

pub use http::HttpVendorClient;
