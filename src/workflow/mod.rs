pub mod application_flow;
pub mod in_flight;
pub mod submission_ctx;

pub use application_flow::{ApplicationFlow, SubmissionReceipt};
pub use in_flight::{InFlight, InFlightGuard};
pub use submission_ctx::SubmissionCtx;
