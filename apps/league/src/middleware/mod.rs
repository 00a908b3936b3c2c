pub mod csrf;
pub mod request_trace;
pub mod structured_logger;

pub use csrf::CsrfProtect;
pub use request_trace::{RequestTrace, TraceId};
pub use structured_logger::StructuredLogger;
