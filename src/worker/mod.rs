//! Background worker for the catalog load.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation

pub mod handler;
pub mod messages;

pub use handler::BooklistWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
