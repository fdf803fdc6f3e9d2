use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::ExtractError;

/// Extract paragraph text in document order, one line per paragraph.
///
/// Runs within a paragraph are concatenated without separators; paragraphs
/// are joined with a single newline. Empty paragraphs yield empty lines.
/// Tables and other non-paragraph content are skipped.
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    Ok(paragraphs.join("\n"))
}
