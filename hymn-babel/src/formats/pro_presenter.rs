//! ProPresenter placeholder format
//!
//! Listed so users can see the target is planned; it previews and copies like
//! plain text and refuses to export.

use crate::format::Format;

/// Format implementation for ProPresenter (export not available)
pub struct ProPresenterFormat;

impl Format for ProPresenterFormat {
    fn name(&self) -> &str {
        "ProPresenter"
    }

    fn description(&self) -> &str {
        "Export to ProPresenter 6/7 format"
    }

    fn supports_export(&self) -> bool {
        false
    }
}
