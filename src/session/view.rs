use crate::analysis::AnalysisResult;
use crate::error::ErrorInfo;

pub const SUBMIT_LABEL_IDLE: &str = "Get Haircut Advice";
pub const SUBMIT_LABEL_BUSY: &str = "Analyzing Geometry...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary<'a> {
    pub name: &'a str,
    pub mime_type: &'a str,
    pub size: String,
}

/// What the window should show for the current session state.
#[derive(Debug, PartialEq)]
pub struct SessionView<'a, H> {
    pub file: Option<FileSummary<'a>>,
    pub preview: Option<&'a H>,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub result: Option<&'a AnalysisResult>,
    pub failure: Option<&'a ErrorInfo>,
}
