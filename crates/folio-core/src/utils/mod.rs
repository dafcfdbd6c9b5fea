//! Small data-structure helpers.

mod bounded;
mod text;

pub use bounded::BoundedBuffer;
pub use text::{char_len, skip_chars, take_chars};
