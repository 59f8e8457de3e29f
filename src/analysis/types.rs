use crate::error::SelectionError;
use derivative::Derivative;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A photo picked by the user. The bytes are shared, never mutated; picking
/// another photo replaces the whole value.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    #[derivative(Debug = "ignore")]
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a photo from disk. The MIME type is guessed from the extension
    /// and falls back to `application/octet-stream`; the content is not
    /// checked.
    pub fn from_path(path: &Path) -> Result<Self, SelectionError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mime_type = image::ImageFormat::from_path(path)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME);

        Ok(Self::new(name, mime_type, bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Face-shape classification and the styles that go with it, in the order
/// the service ranked them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisResult {
    pub face_shape: String,
    pub description: String,
    pub recommended_styles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_path_guesses_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.jpg");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\xFF\xD8\xFFfake")
            .unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.name, "portrait.jpg");
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.len(), 7);
    }

    #[test]
    fn from_path_falls_back_for_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.xyz");
        std::fs::write(&path, b"hello").unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.mime_type, FALLBACK_MIME);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let result = SelectedFile::from_path(Path::new("/nonexistent/portrait.jpg"));
        assert!(matches!(result, Err(SelectionError::Read(_))));
    }

    #[test]
    fn debug_output_hides_bytes() {
        let file = SelectedFile::new("a.png", "image/png", vec![1, 2, 3]);
        let debug = format!("{:?}", file);
        assert!(debug.contains("a.png"));
        assert!(!debug.contains("bytes"));
    }

    #[test]
    fn result_ignores_unknown_fields_and_keeps_order() {
        let json = r#"{
            "face_shape": "Oval",
            "description": "Balanced proportions",
            "recommended_styles": ["Fade", "Pompadour"],
            "confidence": 0.9
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.face_shape, "Oval");
        assert_eq!(result.recommended_styles, vec!["Fade", "Pompadour"]);
    }

    #[test]
    fn result_requires_every_field() {
        let json = r#"{"face_shape": "Oval", "description": "Balanced proportions"}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }
}
