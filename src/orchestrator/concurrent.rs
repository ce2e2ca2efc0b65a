//! 并发策略 - 编排层
//!
//! ## 职责
//!
//! 1. **全量启动**：不等待任何文档完成，先为每个文档 spawn 一个任务
//! 2. **统一汇合**：按启动顺序 join 全部任务，结果按语料顺序收集
//! 3. **失败隔离**：单个任务失败（包括 panic）只产出该文档的失败结果
//!
//! 不设并发上限：本工作负载是挂起等待而非计算，任务数即语料数。

use crate::models::{OcrResult, PdfDocument};
use crate::orchestrator::StrategyRun;
use crate::services::OcrService;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// 并发执行整个批次，全部完成后返回
pub async fn run_concurrent(ocr: &OcrService, docs: &[PdfDocument]) -> StrategyRun {
    let started = Instant::now();
    let total = docs.len();
    info!("🚀 并发启动 {} 个处理任务", total);

    let mut handles = Vec::with_capacity(total);
    for doc in docs {
        let ocr = ocr.clone();
        let doc = doc.clone();
        handles.push((doc.name.clone(), tokio::spawn(async move {
            ocr.process(&doc).await
        })));
    }

    let mut results = Vec::with_capacity(total);
    for (name, handle) in handles {
        results.push(join_one(name, handle).await);
    }

    StrategyRun {
        results,
        wall: started.elapsed(),
    }
}

/// 等待单个任务，panic 收敛为该文档的失败结果
async fn join_one(
    name: String,
    handle: tokio::task::JoinHandle<OcrResult>,
) -> OcrResult {
    match handle.await {
        Ok(result) => result,
        Err(e) => {
            error!("文档 {} 任务执行失败: {}", name, e);
            OcrResult::failed(name, e, Duration::ZERO, "unknown".to_string())
        }
    }
}
