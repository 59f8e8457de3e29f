use crate::analysis::SelectedFile;

/// Produces display handles for selected photos.
///
/// The session keeps at most one handle alive and drops it before asking
/// for the next one, so a handle's `Drop` is where its resources go back.
pub trait PreviewFactory {
    type Handle;

    fn create(&mut self, file: &SelectedFile) -> Self::Handle;
}
