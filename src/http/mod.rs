//! HTTP client layer: `OpenSeaHttp`.

pub mod client;

pub use client::OpenSeaHttp;
