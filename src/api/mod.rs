mod client;
mod endpoint;

pub use client::{ApiClient, Body};
pub use endpoint::{Endpoint, Method};
