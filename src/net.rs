mod cookies;
mod fetch;
mod request;
mod response;

pub use cookies::{cookie_header, serialize_cookies};
pub use fetch::{fetch, invoke};
pub use request::{CookieSet, HeaderSet, Request};
pub use response::Response;
