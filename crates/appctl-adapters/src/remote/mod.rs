//! Control-plane adapters.

mod graphql;
mod memory;

pub use graphql::{ClientError, DEFAULT_ENDPOINT, GraphqlClient};
pub use memory::InMemoryControlPlane;
