//! Domain layer: strong types with validation and invariants (no I/O).

mod error;
mod response;
mod validation;
mod value;

pub use error::{ApiError, ApiErrorKind};
pub use response::{RejectDeleted, RejectEntry, SenderInfo, SendingStats, UserInfo};
pub use validation::ValidationError;
pub use value::ApiKey;
