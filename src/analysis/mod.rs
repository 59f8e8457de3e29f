mod client;
mod types;

pub use client::AnalysisClient;
pub use types::{AnalysisResult, SelectedFile};

use crate::error::AnalysisError;
use std::future::Future;

/// The remote face-shape analysis service, as seen by the session.
pub trait AnalysisService: Send + Sync + 'static {
    /// Sends one photo for analysis and resolves once the service has
    /// answered or the request has failed.
    fn analyze(
        &self,
        file: SelectedFile,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> + Send;
}
