// src/models/rendered_file.rs

/// A file's content wrapped for the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Forward-slash relative path, as written into the wrapper.
    pub path: String,
    pub text: String,
}
