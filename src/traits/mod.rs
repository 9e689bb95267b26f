//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - sends a [`Request`] and returns the [`Response`]

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Method, Request, Response};
