#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod collection;
pub mod error;
pub mod json;
pub mod named;
pub mod protocol;

pub use collection::Errors;
pub use error::Error;
pub use json::{decode_field, expect_object};
pub use named::{Cause, NamedError};
pub use protocol::{append, append_error, drain};
