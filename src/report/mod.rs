pub mod error;
pub mod render;
pub mod selection;

pub use error::ReportError;
pub use render::{render_json, render_text, write_report, OutputFormat, MODIFIED_MARKER};
pub use selection::{Fields, Flag, SelectionFlags};
