//! Adapters delivering inquiries to the endpoint.

mod http;

pub use http::HttpInquiryTransport;
