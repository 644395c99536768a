//! Transport layer: wire-format details (key injection, request bodies,
//! response shapes).

mod call;
mod rejects;
mod users;

pub use call::{ErrorBody, TransportError, decode_error_body, encode_call_body};
pub use rejects::{
    decode_reject_delete, decode_reject_list, encode_reject_delete, encode_reject_list,
};
pub use users::{decode_ping, decode_senders, decode_user_info};
