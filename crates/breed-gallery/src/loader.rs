//! Breed collection loader
//!
//! Fetches the breed document once through a [`BreedSource`] and decodes it
//! into the collection. Sources answer with a status code the way a `fetch`
//! would, so a missing file is a 404 rather than a transport failure.

use crate::error::{LoadError, LoadResult};
use crate::model::BreedRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Response to a resource fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl Response {
    /// Successful response with body
    #[inline]
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Response with status and empty body
    #[inline]
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Whether the status is in the 2xx range
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can serve the breed document
#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Fetch the resource at `path`
    ///
    /// # Errors
    /// Returns [`LoadError::Transport`] when the resource cannot be reached.
    async fn fetch(&self, path: &Path) -> LoadResult<Response>;
}

/// Serves files relative to a root directory
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Create source rooted at `root`
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl BreedSource for FileSource {
    async fn fetch(&self, path: &Path) -> LoadResult<Response> {
        let full = self.root.join(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(body) => Ok(Response::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Response::with_status(404)),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Ok(Response::with_status(403)),
            Err(e) => Err(LoadError::transport(full, e)),
        }
    }
}

/// In-memory source with fixed responses
///
/// Paths without a registered response answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    responses: HashMap<PathBuf, Response>,
}

impl StaticSource {
    /// Create empty source
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for `path`
    #[must_use]
    pub fn with_response(mut self, path: impl Into<PathBuf>, response: Response) -> Self {
        self.responses.insert(path.into(), response);
        self
    }
}

#[async_trait]
impl BreedSource for StaticSource {
    async fn fetch(&self, path: &Path) -> LoadResult<Response> {
        Ok(self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| Response::with_status(404)))
    }
}

/// Load the breed collection from `source`
///
/// # Errors
/// - [`LoadError::Status`] for a non-success response
/// - [`LoadError::Transport`] when the source is unreachable
/// - [`LoadError::Decode`] when the body is not a JSON array of records
pub async fn load_breeds<S>(source: &S, path: &Path) -> LoadResult<Vec<BreedRecord>>
where
    S: BreedSource + ?Sized,
{
    tracing::info!("Loading local dog data...");

    let response = source.fetch(path).await?;
    if !response.is_success() {
        return Err(LoadError::status(response.status));
    }

    let breeds: Vec<BreedRecord> =
        serde_json::from_str(&response.body).map_err(|e| LoadError::decode(path, e))?;

    tracing::info!("Breeds loaded: {}", breeds.len());
    Ok(breeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"[
        {"id": 1, "name": "Akita", "reference_image_id": "abc"},
        {"id": 2, "name": "Basenji"}
    ]"#;

    #[test]
    fn response_success_range() {
        assert!(Response::ok("").is_success());
        assert!(Response::with_status(204).is_success());
        assert!(!Response::with_status(304).is_success());
        assert!(!Response::with_status(404).is_success());
        assert!(!Response::with_status(199).is_success());
    }

    #[tokio::test]
    async fn load_from_static_source() {
        let source = StaticSource::new().with_response("dog-data.json", Response::ok(DATA));
        let breeds = load_breeds(&source, Path::new("dog-data.json")).await.unwrap();

        assert_eq!(breeds.len(), 2);
        assert_eq!(breeds[0].name, "Akita");
        assert_eq!(breeds[1].name, "Basenji");
    }

    #[tokio::test]
    async fn unregistered_path_is_404() {
        let source = StaticSource::new();
        let err = load_breeds(&source, Path::new("dog-data.json")).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[tokio::test]
    async fn server_error_status_fails() {
        let source = StaticSource::new().with_response(
            "dog-data.json",
            Response {
                status: 500,
                body: DATA.to_string(),
            },
        );
        let err = load_breeds(&source, Path::new("dog-data.json")).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn malformed_json_fails() {
        let source = StaticSource::new().with_response("dog-data.json", Response::ok("[{\"id\": 1,"));
        let err = load_breeds(&source, Path::new("dog-data.json")).await.unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[tokio::test]
    async fn non_array_document_fails() {
        let source =
            StaticSource::new().with_response("dog-data.json", Response::ok(r#"{"id": 1}"#));
        let err = load_breeds(&source, Path::new("dog-data.json")).await.unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[tokio::test]
    async fn empty_array_loads_empty_collection() {
        let source = StaticSource::new().with_response("dog-data.json", Response::ok("[]"));
        let breeds = load_breeds(&source, Path::new("dog-data.json")).await.unwrap();
        assert!(breeds.is_empty());
    }

    #[tokio::test]
    async fn file_source_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("dog-data.json"), DATA).await.unwrap();

        let source = FileSource::new(dir.path());
        let breeds = load_breeds(&source, Path::new("dog-data.json")).await.unwrap();
        assert_eq!(breeds.len(), 2);
    }

    #[tokio::test]
    async fn file_source_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());

        let response = source.fetch(Path::new("dog-data.json")).await.unwrap();
        assert_eq!(response.status, 404);
    }
}
