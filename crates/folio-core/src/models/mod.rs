//! Data types shared between the core and its hosts.

mod output;
mod session;

pub use output::{FileKind, OutputBuffer, OutputLine, OutputLineData, Surface};
pub use session::{Session, Theme, UnknownTheme};
