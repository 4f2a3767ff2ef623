//! HTTP client layer — `MoralisHttp`, one method per endpoint.

pub mod client;

pub use client::MoralisHttp;
