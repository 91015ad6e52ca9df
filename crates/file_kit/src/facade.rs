//! Host-backed file facade: classification predicates plus download,
//! preview, open, and inspection operations.

use file_host::{
    DigestAlgorithm, FileHostService, FileInfo, FileInfoRequest, OpenDocumentRequest,
    PreviewImagesRequest,
};

use crate::{catalog::TypeCatalog, error::FileAccessError, name::ext_name};

#[derive(Debug, Clone)]
/// File utility facade over a host file-service.
///
/// Classification is a pure lookup against the owned [`TypeCatalog`]. Every
/// host operation re-resolves the URL to a session-local temporary path from
/// scratch; nothing is cached between calls, and no retry or timeout is
/// imposed beyond whatever the host applies.
pub struct FileFacade<S> {
    host: S,
    catalog: TypeCatalog,
}

impl<S> FileFacade<S> {
    /// Creates a facade over `host` with the built-in type catalog.
    pub fn new(host: S) -> Self {
        Self::with_catalog(host, TypeCatalog::default())
    }

    /// Creates a facade over `host` with a caller-supplied catalog.
    pub fn with_catalog(host: S, catalog: TypeCatalog) -> Self {
        Self { host, catalog }
    }

    /// Replaces the type catalog wholesale.
    ///
    /// No merging and no validation; an empty catalog makes every predicate
    /// return `false`. Expected to be called once before use.
    pub fn set_catalog(&mut self, catalog: TypeCatalog) {
        self.catalog = catalog;
    }

    /// Returns the active type catalog.
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Tests whether the URL's extension is in `exts`, case-insensitively.
    pub fn is_type(&self, url: &str, exts: &[String]) -> bool {
        let ext = ext_name(url).to_ascii_lowercase();
        exts.iter().any(|candidate| *candidate == ext)
    }

    /// Image check.
    pub fn is_image(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.image)
    }

    /// Document check.
    pub fn is_document(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.document)
    }

    /// Video check.
    pub fn is_video(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.video)
    }

    /// Audio check.
    pub fn is_audio(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.audio)
    }

    /// Archive/compressed-file check.
    pub fn is_compress(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.compress)
    }

    /// Code-file check.
    pub fn is_code(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.code)
    }

    /// Excel check.
    pub fn is_excel(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.excel)
    }

    /// Word check.
    pub fn is_word(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.word)
    }

    /// PowerPoint check.
    pub fn is_ppt(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.ppt)
    }

    /// PDF check.
    pub fn is_pdf(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.pdf)
    }

    /// Plain-text check.
    pub fn is_text(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.text)
    }

    /// Markdown check.
    pub fn is_markdown(&self, url: &str) -> bool {
        self.is_type(url, &self.catalog.markdown)
    }

    /// Word, Excel, or PowerPoint.
    pub fn is_office(&self, url: &str) -> bool {
        self.is_word(url) || self.is_excel(url) || self.is_ppt(url)
    }

    /// Office or PDF.
    pub fn is_office_or_pdf(&self, url: &str) -> bool {
        self.is_office(url) || self.is_pdf(url)
    }
}

impl<S: FileHostService> FileFacade<S> {
    /// Materializes `url` as a session-local temporary path.
    ///
    /// # Errors
    ///
    /// Returns [`FileAccessError::EmptyReference`] without touching the host
    /// when `url` is empty; host failures are carried through unchanged.
    pub async fn resolve_local_path(&self, url: &str) -> Result<String, FileAccessError> {
        if url.is_empty() {
            return Err(FileAccessError::EmptyReference);
        }
        let downloaded = self
            .host
            .download_to_local(url)
            .await
            .map_err(FileAccessError::Host)?;
        Ok(downloaded.temp_path)
    }

    /// Resolves `url` locally, then opens it with the type-appropriate host
    /// action. The first failing stage wins; there is no partial-success
    /// state.
    pub async fn open_file(&self, url: &str) -> Result<(), FileAccessError> {
        let temp_path = self.resolve_local_path(url).await?;
        self.open_by_local_path(&temp_path).await
    }

    /// Opens an already-local path with the type-appropriate host action.
    ///
    /// Dispatch order is fixed: images go to the host image previewer (the
    /// single path serves as both `current` and the sole preview entry),
    /// office and PDF files go to the host document viewer, both with the
    /// save-capable overflow menu requested. Any other extension fails with
    /// [`FileAccessError::UnsupportedType`]; earlier revisions of this API
    /// left such calls pending forever, and the explicit error replaces that
    /// behavior.
    pub async fn open_by_local_path(&self, temp_path: &str) -> Result<(), FileAccessError> {
        if temp_path.is_empty() {
            return Err(FileAccessError::EmptyReference);
        }
        if self.is_image(temp_path) {
            return self
                .host
                .preview_images(PreviewImagesRequest {
                    urls: vec![temp_path.to_string()],
                    current: temp_path.to_string(),
                    show_menu: true,
                })
                .await
                .map_err(FileAccessError::Host);
        }
        if self.is_office_or_pdf(temp_path) {
            return self
                .host
                .open_document(OpenDocumentRequest {
                    file_path: temp_path.to_string(),
                    show_menu: true,
                })
                .await
                .map_err(FileAccessError::Host);
        }
        Err(FileAccessError::UnsupportedType {
            ext: ext_name(temp_path).to_ascii_lowercase(),
        })
    }

    /// Resolves `url` and returns the named digest, when the host reports
    /// one.
    pub async fn digest(
        &self,
        url: &str,
        algorithm: DigestAlgorithm,
    ) -> Result<Option<String>, FileAccessError> {
        let info = self.file_info(url, algorithm).await?;
        Ok(info.digest)
    }

    /// MD5 convenience wrapper over [`FileFacade::digest`].
    pub async fn md5(&self, url: &str) -> Result<Option<String>, FileAccessError> {
        self.digest(url, DigestAlgorithm::Md5).await
    }

    /// SHA-1 convenience wrapper over [`FileFacade::digest`].
    pub async fn sha1(&self, url: &str) -> Result<Option<String>, FileAccessError> {
        self.digest(url, DigestAlgorithm::Sha1).await
    }

    /// Resolves `url` and returns its size in bytes. No digest is requested
    /// from the host.
    pub async fn size(&self, url: &str) -> Result<u64, FileAccessError> {
        let temp_path = self.resolve_local_path(url).await?;
        let info = self
            .host
            .get_file_info(FileInfoRequest {
                file_path: temp_path,
                digest_algorithm: None,
            })
            .await
            .map_err(FileAccessError::Host)?;
        Ok(info.size)
    }

    /// Resolves `url` and returns the host's info record unmodified,
    /// requesting both size and the named digest.
    pub async fn file_info(
        &self,
        url: &str,
        algorithm: DigestAlgorithm,
    ) -> Result<FileInfo, FileAccessError> {
        let temp_path = self.resolve_local_path(url).await?;
        self.host
            .get_file_info(FileInfoRequest {
                file_path: temp_path,
                digest_algorithm: Some(algorithm),
            })
            .await
            .map_err(FileAccessError::Host)
    }
}
