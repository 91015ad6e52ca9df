//! Host file-service contracts and lightweight adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde_json::Map;

use crate::types::{
    DigestAlgorithm, DownloadedFile, FileInfo, FileInfoRequest, OpenDocumentRequest,
    PreviewImagesRequest,
};

/// Object-safe boxed future used by [`FileHostService`] async methods.
pub type FileHostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for file download, preview, open, and inspection.
///
/// Failure values are host-defined strings and are propagated to callers
/// verbatim; implementations apply their own timeout and cancellation
/// semantics, if any.
pub trait FileHostService {
    /// Materializes a (possibly remote) URL as a session-local temporary file.
    fn download_to_local<'a>(
        &'a self,
        url: &'a str,
    ) -> FileHostFuture<'a, Result<DownloadedFile, String>>;

    /// Opens the host image previewer over a set of local image paths.
    fn preview_images<'a>(
        &'a self,
        request: PreviewImagesRequest,
    ) -> FileHostFuture<'a, Result<(), String>>;

    /// Opens a local document with the host document viewer.
    fn open_document<'a>(
        &'a self,
        request: OpenDocumentRequest,
    ) -> FileHostFuture<'a, Result<(), String>>;

    /// Retrieves size and optional digest for a local file path.
    fn get_file_info<'a>(
        &'a self,
        request: FileInfoRequest,
    ) -> FileHostFuture<'a, Result<FileInfo, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op file host for unsupported targets and baseline tests.
pub struct NoopFileHostService;

impl NoopFileHostService {
    fn unsupported_error(op: &str) -> String {
        format!("file host unavailable: {op}")
    }
}

impl FileHostService for NoopFileHostService {
    fn download_to_local<'a>(
        &'a self,
        _url: &'a str,
    ) -> FileHostFuture<'a, Result<DownloadedFile, String>> {
        Box::pin(async { Err(Self::unsupported_error("download_to_local")) })
    }

    fn preview_images<'a>(
        &'a self,
        _request: PreviewImagesRequest,
    ) -> FileHostFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unsupported_error("preview_images")) })
    }

    fn open_document<'a>(
        &'a self,
        _request: OpenDocumentRequest,
    ) -> FileHostFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unsupported_error("open_document")) })
    }

    fn get_file_info<'a>(
        &'a self,
        _request: FileInfoRequest,
    ) -> FileHostFuture<'a, Result<FileInfo, String>> {
        Box::pin(async { Err(Self::unsupported_error("get_file_info")) })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Seeded file record served by [`MemoryFileHostService`].
pub struct StubFile {
    /// Temporary path reported for the source URL.
    pub temp_path: String,
    /// Reported size in bytes.
    pub size: u64,
    /// MD5 digest string, when seeded.
    pub md5: Option<String>,
    /// SHA-1 digest string, when seeded.
    pub sha1: Option<String>,
}

impl StubFile {
    /// Seeds a record with a temp path and size, without digests.
    pub fn new(temp_path: impl Into<String>, size: u64) -> Self {
        Self {
            temp_path: temp_path.into(),
            size,
            md5: None,
            sha1: None,
        }
    }

    /// Attaches an MD5 digest to the record.
    pub fn with_md5(mut self, digest: impl Into<String>) -> Self {
        self.md5 = Some(digest.into());
        self
    }

    /// Attaches a SHA-1 digest to the record.
    pub fn with_sha1(mut self, digest: impl Into<String>) -> Self {
        self.sha1 = Some(digest.into());
        self
    }
}

#[derive(Debug, Default)]
struct MemoryHostState {
    by_url: HashMap<String, StubFile>,
    by_temp_path: HashMap<String, StubFile>,
    downloads: Vec<String>,
    previews: Vec<PreviewImagesRequest>,
    opened_documents: Vec<OpenDocumentRequest>,
    info_requests: Vec<FileInfoRequest>,
    fail_download: Option<String>,
    fail_preview: Option<String>,
    fail_open: Option<String>,
    fail_info: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory file host that serves seeded records and records every call.
///
/// Shared-handle semantics: clones observe the same state, so a test can keep
/// one handle for seeding/assertions while the facade under test owns another.
pub struct MemoryFileHostService {
    inner: Rc<RefCell<MemoryHostState>>,
}

impl MemoryFileHostService {
    /// Seeds a URL with the record served for downloads and inspections.
    pub fn register(&self, url: impl Into<String>, file: StubFile) {
        let mut state = self.inner.borrow_mut();
        state
            .by_temp_path
            .insert(file.temp_path.clone(), file.clone());
        state.by_url.insert(url.into(), file);
    }

    /// Makes the next `download_to_local` call fail with `error`.
    pub fn fail_next_download(&self, error: impl Into<String>) {
        self.inner.borrow_mut().fail_download = Some(error.into());
    }

    /// Makes the next `preview_images` call fail with `error`.
    pub fn fail_next_preview(&self, error: impl Into<String>) {
        self.inner.borrow_mut().fail_preview = Some(error.into());
    }

    /// Makes the next `open_document` call fail with `error`.
    pub fn fail_next_open(&self, error: impl Into<String>) {
        self.inner.borrow_mut().fail_open = Some(error.into());
    }

    /// Makes the next `get_file_info` call fail with `error`.
    pub fn fail_next_info(&self, error: impl Into<String>) {
        self.inner.borrow_mut().fail_info = Some(error.into());
    }

    /// URLs passed to `download_to_local`, in call order.
    pub fn downloads(&self) -> Vec<String> {
        self.inner.borrow().downloads.clone()
    }

    /// Recorded `preview_images` requests, in call order.
    pub fn previews(&self) -> Vec<PreviewImagesRequest> {
        self.inner.borrow().previews.clone()
    }

    /// Recorded `open_document` requests, in call order.
    pub fn opened_documents(&self) -> Vec<OpenDocumentRequest> {
        self.inner.borrow().opened_documents.clone()
    }

    /// Recorded `get_file_info` requests, in call order.
    pub fn info_requests(&self) -> Vec<FileInfoRequest> {
        self.inner.borrow().info_requests.clone()
    }
}

impl FileHostService for MemoryFileHostService {
    fn download_to_local<'a>(
        &'a self,
        url: &'a str,
    ) -> FileHostFuture<'a, Result<DownloadedFile, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.downloads.push(url.to_string());
            if let Some(error) = state.fail_download.take() {
                return Err(error);
            }
            match state.by_url.get(url) {
                Some(file) => Ok(DownloadedFile {
                    temp_path: file.temp_path.clone(),
                }),
                None => Err(format!("download failed: {url}")),
            }
        })
    }

    fn preview_images<'a>(
        &'a self,
        request: PreviewImagesRequest,
    ) -> FileHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.previews.push(request);
            match state.fail_preview.take() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        })
    }

    fn open_document<'a>(
        &'a self,
        request: OpenDocumentRequest,
    ) -> FileHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.opened_documents.push(request);
            match state.fail_open.take() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        })
    }

    fn get_file_info<'a>(
        &'a self,
        request: FileInfoRequest,
    ) -> FileHostFuture<'a, Result<FileInfo, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if let Some(error) = state.fail_info.take() {
                state.info_requests.push(request);
                return Err(error);
            }
            let file = state.by_temp_path.get(&request.file_path).cloned();
            let result = match file {
                Some(file) => {
                    let digest = match request.digest_algorithm {
                        Some(DigestAlgorithm::Md5) => file.md5.clone(),
                        Some(DigestAlgorithm::Sha1) => file.sha1.clone(),
                        None => None,
                    };
                    Ok(FileInfo {
                        size: file.size,
                        digest,
                        extra: Map::new(),
                    })
                }
                None => Err(format!("file info unavailable: {}", request.file_path)),
            };
            state.info_requests.push(request);
            result
        })
    }
}
