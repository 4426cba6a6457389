//! Document upload: validation, decoding and drag-and-drop tracking
//!
//! Files are processed one at a time. A file that fails validation or cannot
//! be read is reported and skipped; it never blocks the files after it.
//!
//! Binary documents (PDF, Word, PowerPoint, Excel) are not parsed here. Their
//! bytes are read and discarded and a metadata placeholder stands in for the
//! content, so any real text extraction has to happen server-side.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::notify::{Notifier, Toast};
use crate::types::{AppError, Result, UploadedFile};

/// Largest accepted file, in bytes (10 MiB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types accepted by the uploader
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/plain",
    "text/markdown",
];

/// `accept` attribute of the file picker
pub const ACCEPT: &str = ".pdf,.docx,.pptx,.xlsx,.txt,.md";

/// How an accepted file's content is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    Text,
    Binary,
}

fn is_markdown_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".md")
}

/// Check type then size.
///
/// Browsers often report an empty MIME type for `.md` files, so the
/// extension is accepted as a fallback for markdown.
pub fn validate(name: &str, mime: &str, size: u64) -> Result<DecodeMode> {
    if !ALLOWED_MIME_TYPES.contains(&mime) && !is_markdown_name(name) {
        return Err(AppError::UnsupportedFileType {
            name: name.to_string(),
        });
    }
    if size > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            name: name.to_string(),
            size,
        });
    }

    if mime.starts_with("text/") || is_markdown_name(name) {
        Ok(DecodeMode::Text)
    } else {
        Ok(DecodeMode::Binary)
    }
}

/// Content recorded for a binary document
pub fn binary_placeholder(name: &str, mime: &str, size: u64) -> String {
    format!("[Binary file: {name}]\n\nFile type: {mime}\nSize: {size} bytes")
}

/// A file handed over by the picker or a drop event
#[async_trait(?Send)]
pub trait PickedFile {
    fn name(&self) -> String;
    fn mime(&self) -> String;
    fn size(&self) -> u64;
    async fn read_text(&self) -> Result<String>;
    async fn read_bytes(&self) -> Result<Vec<u8>>;
}

fn read_error(name: &str, err: wasm_bindgen::JsValue) -> AppError {
    let reason = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_string());
    AppError::FileRead {
        name: name.to_string(),
        reason,
    }
}

#[async_trait(?Send)]
impl PickedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn mime(&self) -> String {
        self.type_()
    }

    fn size(&self) -> u64 {
        // Blob sizes are whole numbers reported as f64
        web_sys::Blob::size(self) as u64
    }

    async fn read_text(&self) -> Result<String> {
        let value = JsFuture::from(self.text())
            .await
            .map_err(|e| read_error(&PickedFile::name(self), e))?;
        value.as_string().ok_or_else(|| AppError::FileRead {
            name: PickedFile::name(self),
            reason: "content is not text".to_string(),
        })
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        let buffer = JsFuture::from(self.array_buffer())
            .await
            .map_err(|e| read_error(&PickedFile::name(self), e))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Collect the files of a picker or drop `FileList`
pub fn file_list_to_vec(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

async fn ingest_one<F: PickedFile>(file: &F) -> Result<UploadedFile> {
    let name = file.name();
    let mime = file.mime();
    let size = file.size();

    let content = match validate(&name, &mime, size)? {
        DecodeMode::Text => file.read_text().await?,
        DecodeMode::Binary => {
            // Read so unreadable files are still reported, then discard
            let bytes = file.read_bytes().await?;
            tracing::debug!("Discarding {} bytes of {}", bytes.len(), name);
            binary_placeholder(&name, &mime, size)
        }
    };

    Ok(UploadedFile {
        name,
        content,
        mime,
    })
}

/// Validate and decode files in order, reporting each outcome.
///
/// Returns the accepted files; rejected ones only produce a toast.
pub async fn ingest_files<F: PickedFile>(
    files: Vec<F>,
    notifier: &dyn Notifier,
) -> Vec<UploadedFile> {
    let mut accepted = Vec::with_capacity(files.len());

    for file in &files {
        match ingest_one(file).await {
            Ok(uploaded) => {
                tracing::info!("Attached {} ({})", uploaded.name, uploaded.mime);
                notifier.notify(Toast::info(
                    "File uploaded",
                    format!("{} is ready for analysis", uploaded.name),
                ));
                accepted.push(uploaded);
            }
            Err(e) => {
                tracing::warn!("Rejected upload: {}", e);
                notifier.notify_error(&e);
            }
        }
    }

    accepted
}

/// Remove the file at `index`, keeping the others in order.
///
/// Out-of-range indices leave the list untouched.
pub fn remove_file(files: &mut Vec<UploadedFile>, index: usize) -> Option<UploadedFile> {
    (index < files.len()).then(|| files.remove(index))
}

/// Tracks whether a drag is hovering the chat view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    dragging: bool,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    pub fn dropped(&mut self) {
        self.dragging = false;
    }
}
