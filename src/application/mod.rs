// Application layer - use cases and orchestration over the customer directory

pub mod error;
pub mod guard;
pub mod service;

pub use error::*;
pub use guard::*;
pub use service::*;
