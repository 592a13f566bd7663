pub mod config;
pub mod remote;
pub mod state;

pub use crate::domain::DomainError;
pub use config::ResourceConfig;
pub use remote::{RemoteApplication, RemoteError, RemoteErrorEntry, RemoteResult};
pub use state::ResourceState;
