mod preview;
mod state;
mod view;

pub use preview::PreviewFactory;
pub use state::SessionState;
pub use view::SessionView;

use state::{FileId, Ticket};
use view::{FileSummary, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};

use crate::analysis::{AnalysisResult, AnalysisService, SelectedFile};
use crate::error::{AnalysisError, ErrorInfo, SelectionError};
use crate::utils::file_size::human_size;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

struct Selection<H> {
    id: FileId,
    file: SelectedFile,
    preview: H,
}

struct Completion {
    ticket: Ticket,
    outcome: Result<AnalysisResult, AnalysisError>,
}

/// Reports the outcome of one request exactly once. If the request task
/// ends without calling `finish` (panic, runtime shutdown) the drop reports
/// `Interrupted`, so the session never stays in `Submitting`.
struct CompletionGuard {
    sender: UnboundedSender<Completion>,
    ticket: Ticket,
    reported: bool,
}

impl CompletionGuard {
    fn finish(mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        self.reported = true;
        self.send(outcome);
    }

    fn send(&self, outcome: Result<AnalysisResult, AnalysisError>) {
        let completion = Completion {
            ticket: self.ticket,
            outcome,
        };
        if self.sender.send(completion).is_err() {
            debug!(
                request = self.ticket.request,
                "session gone before the analysis finished; dropping its result"
            );
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if !self.reported {
            self.send(Err(AnalysisError::Interrupted));
        }
    }
}

/// Lifecycle of one photo from selection to analysis result.
///
/// All state changes happen on the owner's thread through `choose_file`,
/// `submit`, `reset`, `poll` and `settle`. Requests run on the tokio runtime
/// and report back over a channel.
///
/// `in_flight` is the submission gate. It stays closed until the request's
/// completion has been drained, even when the photo was replaced or the
/// session reset in the meantime, so at most one request runs at a time.
pub struct UploadSession<S: AnalysisService, P: PreviewFactory> {
    state: SessionState,
    selection: Option<Selection<P::Handle>>,
    in_flight: Option<Ticket>,
    service: Arc<S>,
    previews: P,
    runtime: Handle,
    completion_tx: UnboundedSender<Completion>,
    completion_rx: UnboundedReceiver<Completion>,
    next_file_id: u64,
    next_request_id: u64,
}

impl<S: AnalysisService, P: PreviewFactory> UploadSession<S, P> {
    pub fn new(service: S, previews: P, runtime: Handle) -> Self {
        let (completion_tx, completion_rx) = unbounded_channel();
        Self {
            state: SessionState::Idle,
            selection: None,
            in_flight: None,
            service: Arc::new(service),
            previews,
            runtime,
            completion_tx,
            completion_rx,
            next_file_id: 0,
            next_request_id: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Takes `file` as the current photo. Allowed in every state; the result
    /// of a request still in flight for the previous photo is discarded.
    pub fn choose_file(&mut self, file: SelectedFile) -> Result<(), SelectionError> {
        if file.is_empty() {
            warn!(file = %file.name, "ignoring empty file");
            return Err(SelectionError::EmptyFile);
        }

        if self.state.is_submitting() {
            info!("photo replaced while an analysis was running; its result will be discarded");
        }
        let previous = self.state.name();

        // Release the old preview before creating the new one.
        self.selection = None;

        self.next_file_id += 1;
        let id = FileId(self.next_file_id);
        let preview = self.previews.create(&file);
        info!(
            file = %file.name,
            mime = %file.mime_type,
            size = file.len(),
            previous,
            "photo selected"
        );

        self.selection = Some(Selection { id, file, preview });
        self.state = SessionState::FileChosen;
        Ok(())
    }

    /// Starts an analysis of the current photo. Returns `false` without
    /// doing anything when there is no photo or a request is in flight.
    pub fn submit(&mut self) -> bool {
        if let Some(ticket) = self.in_flight {
            debug!(request = ticket.request, "submit ignored: analysis already in flight");
            return false;
        }
        let Some(selection) = &self.selection else {
            debug!("submit ignored: no photo selected");
            return false;
        };

        self.next_request_id += 1;
        let ticket = Ticket {
            request: self.next_request_id,
            file: selection.id,
        };
        let file = selection.file.clone();
        let service = Arc::clone(&self.service);
        let guard = CompletionGuard {
            sender: self.completion_tx.clone(),
            ticket,
            reported: false,
        };

        info!(file = %file.name, request = ticket.request, "submitting photo for analysis");
        self.state = SessionState::Submitting(ticket);
        self.in_flight = Some(ticket);

        self.runtime.spawn(async move {
            let outcome = service.analyze(file).await;
            guard.finish(outcome);
        });
        true
    }

    /// Back to `Idle`: drops the photo and its preview. The result of a
    /// request in flight is discarded once it arrives.
    pub fn reset(&mut self) {
        info!("resetting session");
        self.selection = None;
        self.state = SessionState::Idle;
    }

    /// Applies every finished request without blocking. Returns whether the
    /// view changed, either through a new state or a reopened gate.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completion_rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Waits until no request is in flight any more.
    pub async fn settle(&mut self) {
        while self.in_flight.is_some() {
            match self.completion_rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    fn apply(&mut self, completion: Completion) -> bool {
        let released = self.in_flight == Some(completion.ticket);
        if released {
            self.in_flight = None;
        }

        match &self.state {
            SessionState::Submitting(ticket) if *ticket == completion.ticket => {}
            _ => {
                debug!(
                    request = completion.ticket.request,
                    file = completion.ticket.file.0,
                    "discarding result of an abandoned request"
                );
                return released;
            }
        }

        self.state = match completion.outcome {
            Ok(result) => {
                info!(
                    face_shape = %result.face_shape,
                    styles = result.recommended_styles.len(),
                    "analysis complete"
                );
                SessionState::Succeeded(result)
            }
            Err(err) => {
                error!(error = %err, "analysis failed");
                SessionState::Failed(ErrorInfo::from(&err))
            }
        };
        true
    }

    pub fn current_view(&self) -> SessionView<'_, P::Handle> {
        let submitting = self.in_flight.is_some();
        SessionView {
            file: self.selection.as_ref().map(|selection| FileSummary {
                name: &selection.file.name,
                mime_type: &selection.file.mime_type,
                size: human_size(selection.file.len() as u64),
            }),
            preview: self.selection.as_ref().map(|selection| &selection.preview),
            submit_enabled: self.selection.is_some() && !submitting,
            submit_label: if submitting {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            result: self.state.result(),
            failure: self.state.failure(),
        }
    }
}
