//! 业务能力层 - 描述"我能做什么"，只处理单个文档

pub mod ocr_service;
pub mod pdf_service;
pub mod sample_generator;

pub use ocr_service::OcrService;
pub use pdf_service::PdfService;
pub use sample_generator::generate_sample_pdfs;
