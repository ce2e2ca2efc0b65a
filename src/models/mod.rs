pub mod document;
pub mod ocr_result;

pub use document::PdfDocument;
pub use ocr_result::{OcrResult, OCR_ERROR_MARKER, PAGE_SEPARATOR};
