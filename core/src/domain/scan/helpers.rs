pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

const PRODUCT_LABEL: &str = "PRODUCT:";
const INGREDIENTS_LABEL: &str = "INGREDIENTS:";
const NOTES_PREVIEW_CHARS: usize = 200;

/// Product name and ingredient text read back from a label transcription.
///
/// Transcriptions follow `PRODUCT: <name>\nINGREDIENTS: <list>`. Text without
/// the product label is treated as a bare ingredient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTranscript<'a> {
    pub product_name: String,
    pub ingredients_text: &'a str,
}

impl<'a> LabelTranscript<'a> {
    pub fn parse(text: &'a str) -> Self {
        if !text.contains(PRODUCT_LABEL) {
            return Self {
                product_name: UNKNOWN_PRODUCT.to_string(),
                ingredients_text: text,
            };
        }

        let mut parts = text.split(INGREDIENTS_LABEL);
        let head = parts.next().unwrap_or_default();
        let product = head.replace(PRODUCT_LABEL, "");
        let product = product.trim();

        Self {
            product_name: if product.is_empty() {
                UNKNOWN_PRODUCT.to_string()
            } else {
                product.to_string()
            },
            ingredients_text: parts.next().unwrap_or(text),
        }
    }
}

/// Scan notes keep a short preview of the raw transcription.
pub fn transcription_notes(text: &str) -> String {
    let preview: String = text.chars().take(NOTES_PREVIEW_CHARS).collect();
    format!("AI Analysis: {preview}")
}
