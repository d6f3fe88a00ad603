//! Session state for the CSV viewer.
//!
//! The presentation layer owns one [`SessionState`] and drives it from UI
//! events: input callbacks feed the mutually exclusive input slot, the
//! render button starts a ticketed parse, and the export menu dispatches
//! through [`ExportChoice`]. The parse and transform crates stay pure; this
//! crate is where their results are committed, superseded, or discarded.

pub mod error;
pub mod export;
pub mod logging;
pub mod state;

pub use error::{Result, SessionError};
pub use export::{ExportChoice, ExportOutput};
pub use logging::{LogConfig, init_logging};
pub use state::{ParseTicket, SessionState};
