mod docx;
mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    Unsupported(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Extract plain text from file bytes based on the filename extension.
///
/// The extension match is case-insensitive on the last `.`-separated
/// segment of the filename. Unrecognized extensions yield
/// [`ExtractError::Unsupported`] without touching the bytes.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    let text = match ext.as_str() {
        "pdf" => pdf::extract_pdf(bytes)?,
        "docx" => docx::extract_docx(bytes)?,
        other => return Err(ExtractError::Unsupported(other.to_string())),
    };

    tracing::debug!("Extracted '{}' ({}): {} chars", filename, ext, text.chars().count());
    Ok(text)
}
