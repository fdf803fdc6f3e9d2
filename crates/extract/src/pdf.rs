use crate::ExtractError;

/// Extract all text from a PDF, pages concatenated in page order.
///
/// pdf-extract returns the whole document as one string; no separator
/// normalization is applied beyond what the parser emits.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a minimal PDF with one page per entry in `page_texts`.
    fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn extracts_single_page_text() {
        let bytes = build_pdf(&["Hello from a PDF"]);
        let text = extract_pdf(&bytes).unwrap();
        assert!(text.contains("Hello from a PDF"), "got: {text:?}");
    }

    #[test]
    fn pages_come_out_in_page_order() {
        let bytes = build_pdf(&["AAA", "BBB", "CCC"]);
        let text = extract_pdf(&bytes).unwrap();
        let a = text.find("AAA").expect("page 1 text missing");
        let b = text.find("BBB").expect("page 2 text missing");
        let c = text.find("CCC").expect("page 3 text missing");
        assert!(a < b && b < c, "pages out of order: {text:?}");
    }

    #[test]
    fn invalid_bytes_are_a_pdf_error() {
        let err = extract_pdf(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
