//! Background page fetching.
//!
//! Fetches run as tokio tasks so the event loop never blocks on the network.
//!
//! # Architecture
//!
//! - `messages`: request/response types tagged with request ids
//! - `handler`: the worker that executes requests and absorbs failures

pub mod handler;
pub mod messages;

pub use handler::PageWorker;
pub use messages::{FetchRequest, FetchResponse, RequestId};
