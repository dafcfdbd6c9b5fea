mod keys;
mod output;
#[allow(clippy::module_inception)]
mod terminal;

pub use keys::{KeyAction, map_key};
pub use output::Output;
pub use terminal::Terminal;
