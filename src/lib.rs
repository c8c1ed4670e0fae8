pub mod net;
pub mod config;
pub mod errors;
pub mod output;

pub use config::{InvokerConfig, InvokerConfigBuilder};
pub use errors::InvokerError;
pub use net::{fetch, invoke, CookieSet, HeaderSet, Request, Response};
