//! Application module - the course page
//!
//! `page` holds the controller shared by every front end, `render` the
//! list contents, and the platform-specific views draw them either into
//! the terminal (no-WASM) or into the browser DOM (WASM).

pub mod page;
pub mod render;

#[cfg(feature = "no-wasm")]
pub mod terminal;
#[cfg(feature = "no-wasm")]
pub use terminal::{run, RunReport, TerminalView};

#[cfg(feature = "wasm")]
pub mod dom;
#[cfg(feature = "wasm")]
pub use dom::DomView;

#[cfg(test)]
#[path = "tests/fakes.rs"]
pub(crate) mod fakes;

pub use page::{CoursePage, SubmitOutcome};
pub use render::ListState;
