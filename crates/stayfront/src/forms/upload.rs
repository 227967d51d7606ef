use mime::Mime;
use serde::{Deserialize, Serialize};

use super::schema::FormValidationError;

/// Ceiling on accepted image uploads.
pub const MAX_IMAGE_BYTES: u64 = 1024 * 1024;

const ACCEPTED_IMAGE_PREFIXES: &[&str] = &["image/"];

const UNSUPPORTED_MESSAGE: &str = "File validation is not supported in this environment";
const SIZE_MESSAGE: &str = "File size must be less than 1 MB";
const TYPE_MESSAGE: &str = "File must be an image";

/// Whether the running environment can hand the validator real file objects.
///
/// Injected explicitly so the schema stays pure; callers in environments
/// with no concept of a binary file pass [`FileSupport::Unavailable`] and
/// every validation fails unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSupport {
    Available,
    Unavailable,
}

/// Reference to an uploaded binary: metadata only, never the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<Mime>,
    pub size_bytes: u64,
}

/// Wire shape for an upload reference submitted as JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReference {
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    pub size_bytes: u64,
}

impl From<UploadReference> for UploadedFile {
    fn from(reference: UploadReference) -> Self {
        // An unparsable content type is treated the same as a missing one.
        let content_type = reference
            .content_type
            .and_then(|raw| raw.parse::<Mime>().ok());
        Self {
            file_name: reference.file_name,
            content_type,
            size_bytes: reference.size_bytes,
        }
    }
}

/// Validated image upload reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Schema guarding image uploads: a size ceiling and a MIME type prefix
/// match, gated by the injected file capability.
#[derive(Debug, Clone)]
pub struct ImageUploadSchema {
    support: FileSupport,
    max_bytes: u64,
    accepted_prefixes: &'static [&'static str],
}

impl ImageUploadSchema {
    pub fn new(support: FileSupport) -> Self {
        Self {
            support,
            max_bytes: MAX_IMAGE_BYTES,
            accepted_prefixes: ACCEPTED_IMAGE_PREFIXES,
        }
    }

    pub fn support(&self) -> FileSupport {
        self.support
    }

    /// Validate an upload reference.
    ///
    /// Size and type violations aggregate comma-joined in that order, the
    /// same contract as the record schemas.
    pub fn validate(&self, file: &UploadedFile) -> Result<ImageUpload, FormValidationError> {
        if self.support == FileSupport::Unavailable {
            return Err(FormValidationError::from_messages(vec![
                UNSUPPORTED_MESSAGE.to_string(),
            ]));
        }

        let mut failures = Vec::new();

        if file.size_bytes > self.max_bytes {
            failures.push(SIZE_MESSAGE.to_string());
        }

        let content_type = file.content_type.as_ref().map(|mime| mime.essence_str());
        let is_image = content_type.is_some_and(|essence| {
            self.accepted_prefixes
                .iter()
                .any(|prefix| essence.starts_with(prefix))
        });
        if !is_image {
            failures.push(TYPE_MESSAGE.to_string());
        }

        if !failures.is_empty() {
            return Err(FormValidationError::from_messages(failures));
        }

        Ok(ImageUpload {
            file_name: file.file_name.clone(),
            content_type: content_type.unwrap_or_default().to_string(),
            size_bytes: file.size_bytes,
        })
    }
}
