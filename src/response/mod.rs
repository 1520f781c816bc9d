//! Request and response records handed back to callers.

pub mod record;
pub mod request;

pub use record::ResponseRecord;
pub use request::RequestRecord;
