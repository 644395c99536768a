//! Resource wrappers: thin method groups that marshal typed parameters into
//! one [`call`](crate::client::MandrillClient::call) each.

mod rejects;
mod users;

pub use rejects::Rejects;
pub use users::Users;
