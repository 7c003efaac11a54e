//! Syllabus file uploads: multipart parsing and text extraction (plain text or PDF).

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const ROLE_FIELD: &str = "role";
const SYLLABUS_FIELD: &str = "syllabus";

/// Fields collected from an upload form. The file is not decoded yet.
#[derive(Debug, Default)]
pub struct SyllabusUpload {
    pub role: String,
    pub file: Option<UploadedFile>,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn is_pdf(&self) -> bool {
        let pdf_type = self
            .content_type
            .as_deref()
            .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false);
        let pdf_name = self
            .file_name
            .as_deref()
            .map(|n| n.to_lowercase().ends_with(".pdf"))
            .unwrap_or(false);
        pdf_type || pdf_name
    }
}

/// Reads the `role` and `syllabus` fields; unknown fields are skipped.
pub async fn read_upload(mut multipart: Multipart) -> Result<SyllabusUpload, AppError> {
    let mut upload = SyllabusUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(ROLE_FIELD) => {
                upload.role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable role field: {e}")))?;
            }
            Some(SYLLABUS_FIELD) => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Unreadable syllabus field: {e}"))
                })?;
                upload.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            other => debug!("Ignoring multipart field {other:?}"),
        }
    }

    Ok(upload)
}

/// Decodes the uploaded syllabus into text. PDF extraction runs on the blocking pool.
pub async fn syllabus_text(file: UploadedFile) -> Result<String, AppError> {
    if !file.is_pdf() {
        return decode_plain_text(file.bytes);
    }

    let bytes = file.bytes;
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                warn!("PDF extraction panicked");
                AppError::UnprocessableEntity("Syllabus PDF could not be read".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| {
            warn!("PDF extraction failed: {e}");
            AppError::UnprocessableEntity("Syllabus PDF could not be read".to_string())
        })
}

fn decode_plain_text(bytes: Bytes) -> Result<String, AppError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| {
        AppError::UnprocessableEntity("Syllabus file must be UTF-8 text or a PDF".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: Option<&str>, content_type: Option<&str>, body: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: name.map(str::to_string),
            content_type: content_type.map(str::to_string),
            bytes: Bytes::from_static(body),
        }
    }

    #[test]
    fn test_pdf_detected_by_content_type() {
        assert!(file(Some("syllabus"), Some("application/PDF"), b"").is_pdf());
    }

    #[test]
    fn test_pdf_detected_by_extension() {
        assert!(file(Some("Syllabus.PDF"), None, b"").is_pdf());
    }

    #[test]
    fn test_text_file_is_not_pdf() {
        assert!(!file(Some("syllabus.txt"), Some("text/plain"), b"").is_pdf());
        assert!(!file(None, None, b"").is_pdf());
    }

    #[tokio::test]
    async fn test_plain_text_is_decoded() {
        let text = syllabus_text(file(Some("s.txt"), Some("text/plain"), b"DBMS and SQL"))
            .await
            .unwrap();
        assert_eq!(text, "DBMS and SQL");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unprocessable() {
        let err = syllabus_text(file(Some("s.txt"), None, &[0xff, 0xfe, 0x00]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unprocessable() {
        let err = syllabus_text(file(Some("s.pdf"), Some("application/pdf"), b"not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
