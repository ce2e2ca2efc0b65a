//! 顺序策略 - 编排层
//!
//! 按语料顺序逐个处理，上一个文档完全结束后才开始下一个。
//! 单个文档失败只产出失败结果，不会中断批次。

use crate::models::PdfDocument;
use crate::orchestrator::StrategyRun;
use crate::services::OcrService;
use std::time::Instant;
use tracing::info;

/// 顺序执行整个批次
pub async fn run_sequential(ocr: &OcrService, docs: &[PdfDocument]) -> StrategyRun {
    let started = Instant::now();
    let total = docs.len();
    let mut results = Vec::with_capacity(total);

    for (idx, doc) in docs.iter().enumerate() {
        info!("[顺序 {}/{}] 开始处理: {}", idx + 1, total, doc.name);
        results.push(ocr.process(doc).await);
    }

    StrategyRun {
        results,
        wall: started.elapsed(),
    }
}
