//! 单个文档的 OCR 处理结果

use chrono::{DateTime, Local};
use std::fmt::Display;
use std::time::Duration;

/// 失败结果的识别文本前缀
pub const OCR_ERROR_MARKER: &str = "错误:";

/// 页与页之间的分隔符（空行）
pub const PAGE_SEPARATOR: &str = "\n\n";

/// 单个文档的处理结果
///
/// 处理器永远返回结果而不是错误：失败被收敛为
/// `pages == 0` 且 `extracted_text` 以 [`OCR_ERROR_MARKER`] 开头的结果。
#[derive(Debug, Clone)]
pub struct OcrResult {
    /// 文档名称
    pub file_name: String,

    /// 识别出的全文（逐页片段按 [`PAGE_SEPARATOR`] 拼接）
    pub extracted_text: String,

    /// 实际处理的页数（失败时为 0）
    pub pages: usize,

    /// 本文档处理耗时
    pub elapsed: Duration,

    /// 执行处理的工作线程标识
    pub worker_id: String,

    /// 完成时间
    pub completed_at: DateTime<Local>,
}

impl OcrResult {
    /// 构建成功结果
    pub fn success(
        file_name: impl Into<String>,
        extracted_text: String,
        pages: usize,
        elapsed: Duration,
        worker_id: String,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            extracted_text,
            pages,
            elapsed,
            worker_id,
            completed_at: Local::now(),
        }
    }

    /// 将处理中的错误收敛为失败结果
    pub fn failed(
        file_name: impl Into<String>,
        error: impl Display,
        elapsed: Duration,
        worker_id: String,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            extracted_text: format!("{} {}", OCR_ERROR_MARKER, error),
            pages: 0,
            elapsed,
            worker_id,
            completed_at: Local::now(),
        }
    }

    /// 是否为失败结果
    pub fn is_failed(&self) -> bool {
        self.extracted_text.starts_with(OCR_ERROR_MARKER)
    }

    /// 识别文本的字符数
    pub fn extracted_chars(&self) -> usize {
        self.extracted_text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_is_marked() {
        let result = OcrResult::failed("样例文档1", "文件不存在", Duration::from_millis(12), "ThreadId(1)".to_string());
        assert!(result.is_failed());
        assert_eq!(result.pages, 0);
        assert!(result.extracted_text.starts_with(OCR_ERROR_MARKER));
    }

    #[test]
    fn test_success_result_is_not_marked() {
        let result = OcrResult::success(
            "样例文档1",
            "第 1 页文本".to_string(),
            1,
            Duration::from_millis(450),
            "ThreadId(2)".to_string(),
        );
        assert!(!result.is_failed());
        assert_eq!(result.pages, 1);
        assert_eq!(result.extracted_chars(), "第 1 页文本".chars().count());
    }
}
