//! Console front-end for vidplayer
//!
//! Parsing, rendering and the interactive loop. The player core never sees
//! text; this module is the only place that does.

pub mod command;
pub mod render;
mod repl;

pub use command::{parse, ConsoleCommand};
pub use render::Renderer;
pub use repl::Repl;
