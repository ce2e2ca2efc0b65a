//! 模拟 OCR 处理器 - 业务能力层
//!
//! ## 职责
//!
//! 对单个文档执行模拟 OCR，内部是一条显式的分阶段挂起序列：
//!
//! 1. **元数据阶段**：随机挂起 50-150ms，然后从落盘文件读回真实页数
//! 2. **引擎启动阶段**：随机挂起 300-700ms，模拟 OCR 引擎初始化
//! 3. **逐页识别阶段**：每页随机挂起 100-300ms，产出一个页片段，
//!    片段按空行拼接成全文
//!
//! ## 错误收敛
//!
//! `process` 永远不向上抛错：协作者的任何失败（文件缺失、内容损坏）
//! 都被收敛为一个失败标记的 `OcrResult`（`pages == 0`），
//! 绝不影响批次中的其他文档。

use crate::error::{DocumentError, Result};
use crate::infrastructure::Jitter;
use crate::models::{OcrResult, PdfDocument, PAGE_SEPARATOR};
use crate::services::PdfService;
use std::time::Instant;
use tracing::warn;

/// 元数据阶段延迟区间（毫秒）
const METADATA_DELAY_MS: (u64, u64) = (50, 150);
/// 引擎启动阶段延迟区间（毫秒）
const ENGINE_DELAY_MS: (u64, u64) = (300, 700);
/// 每页识别延迟区间（毫秒）
const PAGE_DELAY_MS: (u64, u64) = (100, 300);

/// 模拟 OCR 处理器
#[derive(Clone)]
pub struct OcrService {
    pdf_service: PdfService,
    jitter: Jitter,
}

impl OcrService {
    pub fn new(pdf_service: PdfService, jitter: Jitter) -> Self {
        Self {
            pdf_service,
            jitter,
        }
    }

    /// 处理单个文档
    ///
    /// 记录整次调用的墙钟耗时和执行线程标识；失败被收敛为失败结果。
    pub async fn process(&self, doc: &PdfDocument) -> OcrResult {
        let started = Instant::now();

        let outcome = self.run_stages(doc).await;
        let worker_id = current_worker_id();
        let elapsed = started.elapsed();

        match outcome {
            Ok((text, pages)) => OcrResult::success(&doc.name, text, pages, elapsed, worker_id),
            Err(e) => {
                warn!("⚠️ 文档 {} 处理失败: {}", doc.name, e);
                OcrResult::failed(&doc.name, e, elapsed, worker_id)
            }
        }
    }

    /// 三个阶段严格按序执行；任何阶段失败都在 process 中收敛
    async fn run_stages(&self, doc: &PdfDocument) -> Result<(String, usize)> {
        // 阶段一：元数据读取
        self.jitter
            .pause(METADATA_DELAY_MS.0, METADATA_DELAY_MS.1)
            .await;
        let path = doc
            .file_path
            .as_deref()
            .ok_or_else(|| DocumentError::MissingPath {
                name: doc.name.clone(),
            })?;
        let pages = self.pdf_service.read_page_count(path).await?;

        // 阶段二：引擎启动
        self.jitter
            .pause(ENGINE_DELAY_MS.0, ENGINE_DELAY_MS.1)
            .await;

        // 阶段三：逐页识别
        let mut fragments = Vec::with_capacity(pages);
        for page in 1..=pages {
            self.jitter.pause(PAGE_DELAY_MS.0, PAGE_DELAY_MS.1).await;
            fragments.push(format!(
                "{} 第 {}/{} 页: {}",
                doc.name, page, pages, doc.content
            ));
        }

        Ok((fragments.join(PAGE_SEPARATOR), pages))
    }
}

/// 当前工作线程标识
fn current_worker_id() -> String {
    format!("{:?}", std::thread::current().id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OCR_ERROR_MARKER;
    use crate::services::generate_sample_pdfs;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> (PdfService, OcrService) {
        let pdf_service = PdfService::new(dir.path());
        let ocr = OcrService::new(pdf_service.clone(), Jitter::zero());
        (pdf_service, ocr)
    }

    #[tokio::test]
    async fn test_fragments_match_page_count() {
        let dir = TempDir::new().expect("创建临时目录失败");
        let (pdf_service, ocr) = service_in(&dir);

        let doc = pdf_service
            .create_pdf("样例文档1", "正文", 3)
            .await
            .expect("创建文档失败");

        let result = ocr.process(&doc).await;

        assert!(!result.is_failed());
        assert_eq!(result.pages, 3);

        let fragments: Vec<&str> = result.extracted_text.split(PAGE_SEPARATOR).collect();
        assert_eq!(fragments.len(), 3);
        for (idx, fragment) in fragments.iter().enumerate() {
            assert!(fragment.contains("样例文档1"), "片段应包含文档名");
            assert!(
                fragment.contains(&format!("第 {}/3 页", idx + 1)),
                "片段应包含页码: {}",
                fragment
            );
        }
    }

    #[tokio::test]
    async fn test_missing_file_becomes_failed_result() {
        let dir = TempDir::new().expect("创建临时目录失败");
        let (pdf_service, ocr) = service_in(&dir);

        let mut doc = pdf_service
            .create_pdf("样例文档1", "正文", 2)
            .await
            .expect("创建文档失败");

        // 处理前删除落盘文件，元数据阶段必然失败
        let path = doc.file_path.clone().expect("文件路径应已回填");
        tokio::fs::remove_file(&path).await.expect("删除失败");

        let result = ocr.process(&doc).await;
        assert!(result.is_failed());
        assert_eq!(result.pages, 0);
        assert!(result.extracted_text.starts_with(OCR_ERROR_MARKER));

        // 路径未设置同样收敛为失败结果
        doc.file_path = None;
        let result = ocr.process(&doc).await;
        assert!(result.is_failed());
        assert_eq!(result.pages, 0);
    }

    #[tokio::test]
    async fn test_true_page_count_overrides_declared() {
        let dir = TempDir::new().expect("创建临时目录失败");
        let (pdf_service, ocr) = service_in(&dir);

        // 落盘后的页数才是真实页数
        let created = pdf_service
            .create_pdf("样例文档1", "正文", 2)
            .await
            .expect("创建文档失败");

        let mut doc = created.clone();
        doc.pages = 99;

        let result = ocr.process(&doc).await;
        assert_eq!(result.pages, 2);
    }

    #[tokio::test]
    async fn test_generated_corpus_processes_cleanly() {
        let dir = TempDir::new().expect("创建临时目录失败");
        let (pdf_service, ocr) = service_in(&dir);

        let docs = generate_sample_pdfs(&pdf_service, 4).await.expect("生成失败");
        for doc in &docs {
            let result = ocr.process(doc).await;
            assert!(!result.is_failed());
            assert_eq!(result.pages, doc.pages);
            assert!(result.extracted_chars() > 0);
        }
    }
}
