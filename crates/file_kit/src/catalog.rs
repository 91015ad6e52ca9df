//! Extension tables backing type classification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named extension categories used by classification predicates.
///
/// Extensions are lowercase without a leading dot. Categories may overlap
/// (`pdf` belongs to both `document` and `pdf`). Consumers substitute a
/// catalog wholesale; no merging and no validation happen on substitution,
/// so an empty or malformed catalog silently classifies every URL as
/// nothing rather than failing.
pub struct TypeCatalog {
    /// Image extensions.
    pub image: Vec<String>,
    /// Document extensions.
    pub document: Vec<String>,
    /// Video extensions.
    pub video: Vec<String>,
    /// Audio extensions.
    pub audio: Vec<String>,
    /// Archive/compressed-file extensions.
    pub compress: Vec<String>,
    /// Source-code and plain-text-adjacent extensions.
    pub code: Vec<String>,
    /// Excel spreadsheet extensions.
    pub excel: Vec<String>,
    /// Word document extensions.
    pub word: Vec<String>,
    /// PowerPoint presentation extensions.
    pub ppt: Vec<String>,
    /// PDF extensions.
    pub pdf: Vec<String>,
    /// Plain-text extensions.
    pub text: Vec<String>,
    /// Markdown extensions.
    pub markdown: Vec<String>,
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self {
            image: list(&["jpg", "jpeg", "png", "gif", "bmp", "webp"]),
            document: list(&["pdf", "doc", "docx", "xls", "xlsx"]),
            video: list(&[
                "mp4", "avi", "mov", "rmvb", "flv", "3gp", "wmv", "mkv", "ts", "webm", "m4v",
            ]),
            audio: list(&["mp3", "wav", "wma", "ogg", "aac", "flac", "ape", "m4a"]),
            compress: list(&["zip", "rar", "7z", "tar", "gz", "bz2"]),
            code: list(&[
                "html", "css", "js", "json", "xml", "yaml", "yml", "sql", "java", "py", "php",
                "sh", "bat", "cmd", "ps1", "go", "ts", "vue", "jsx", "tsx", "less", "scss",
                "sass", "styl", "coffee", "md", "markdown", "txt",
            ]),
            excel: list(&["xls", "xlsx"]),
            word: list(&["doc", "docx"]),
            ppt: list(&["ppt", "pptx"]),
            pdf: list(&["pdf"]),
            text: list(&["txt"]),
            markdown: list(&["md", "markdown"]),
        }
    }
}
