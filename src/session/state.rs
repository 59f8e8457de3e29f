use crate::analysis::AnalysisResult;
use crate::error::ErrorInfo;

/// Identity of one file selection within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileId(pub(crate) u64);

/// Tags an in-flight request with the selection it was issued for. A
/// completion is applied only if its ticket still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub(crate) request: u64,
    pub(crate) file: FileId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    FileChosen,
    Submitting(Ticket),
    Succeeded(AnalysisResult),
    Failed(ErrorInfo),
}

impl SessionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SessionState::Submitting(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            SessionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ErrorInfo> {
        match self {
            SessionState::Failed(info) => Some(info),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::FileChosen => "file_chosen",
            SessionState::Submitting(_) => "submitting",
            SessionState::Succeeded(_) => "succeeded",
            SessionState::Failed(_) => "failed",
        }
    }
}
