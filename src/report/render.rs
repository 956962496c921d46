use crate::buildinfo::VersionInfo;
use crate::report::error::ReportError;
use crate::report::selection::{Fields, SelectionFlags};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

/// Marker appended to text output when the tree was dirty.
pub const MODIFIED_MARKER: &str = "(modified)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flags(flags: &SelectionFlags) -> Self {
        if flags.json() {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Space-joined fields in the order version, revision, time, toolchain,
/// modified marker. Leading and trailing whitespace is trimmed; no newline.
pub fn render_text(info: &dyn VersionInfo, fields: Fields) -> String {
    let mut s = String::new();
    if fields.version {
        s.push_str(&info.version());
    }
    if fields.revision {
        s.push(' ');
        s.push_str(&info.revision());
    }
    if fields.time {
        s.push(' ');
        s.push_str(&info.time());
    }
    if fields.go_version {
        s.push(' ');
        s.push_str(&info.go_version());
    }
    if fields.modified && info.modified() {
        s.push(' ');
        s.push_str(MODIFIED_MARKER);
    }
    s.trim().to_string()
}

/// Compact JSON object holding the selected fields as strings; `Modified` is
/// `"true"` or `"false"`. No newline.
pub fn render_json(info: &dyn VersionInfo, fields: Fields) -> Result<String, ReportError> {
    let mut data: BTreeMap<&str, String> = BTreeMap::new();
    if fields.version {
        data.insert("Version", info.version());
    }
    if fields.revision {
        data.insert("Revision", info.revision());
    }
    if fields.time {
        data.insert("Time", info.time());
    }
    if fields.go_version {
        data.insert("GoVersion", info.go_version());
    }
    if fields.modified {
        data.insert("Modified", info.modified().to_string());
    }
    serde_json::to_string(&data).map_err(ReportError::Encode)
}

/// Renders one line for `flags` and writes it, newline-terminated, to `out`.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    info: &dyn VersionInfo,
    flags: &SelectionFlags,
) -> Result<(), ReportError> {
    let fields = flags.fields();
    let format = OutputFormat::from_flags(flags);
    debug!(?fields, ?format, "rendering version report");

    let line = match format {
        OutputFormat::Text => render_text(info, fields),
        OutputFormat::Json => render_json(info, fields)?,
    };
    writeln!(out, "{line}").map_err(ReportError::Write)
}
