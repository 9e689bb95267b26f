//! Implementations of the seams in [`crate::traits`].
//!
//! [`ReqwestHttpClient`] is the real transport; [`mock`] holds a scripted one
//! for tests.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
