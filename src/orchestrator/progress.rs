//! 带进度上报的并发策略 - 编排层
//!
//! 调度方式与并发策略完全一致，唯一区别：每个文档完成的瞬间，
//! 在任务内部按真实完成顺序触发一次进度回调。回调与结果汇总解耦，
//! 汇总仍按语料顺序收集。

use crate::models::{OcrResult, PdfDocument};
use crate::orchestrator::StrategyRun;
use crate::services::OcrService;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// 并发执行整个批次，每个文档完成时触发一次 on_complete
///
/// 回调参数为语料中的下标与该文档的结果；回调在任务内部执行，
/// 不会阻塞其他 in-flight 文档。
pub async fn run_concurrent_with_progress<F>(
    ocr: &OcrService,
    docs: &[PdfDocument],
    on_complete: F,
) -> StrategyRun
where
    F: Fn(usize, &OcrResult) + Send + Sync + 'static,
{
    let started = Instant::now();
    let total = docs.len();
    let on_complete = Arc::new(on_complete);
    info!("🚀 并发启动 {} 个处理任务（完成即上报）", total);

    let mut names = Vec::with_capacity(total);
    let mut handles = Vec::with_capacity(total);
    for (idx, doc) in docs.iter().enumerate() {
        let ocr = ocr.clone();
        let doc = doc.clone();
        let on_complete = on_complete.clone();

        names.push(doc.name.clone());
        handles.push(tokio::spawn(async move {
            let result = ocr.process(&doc).await;
            on_complete(idx, &result);
            result
        }));
    }

    let mut results = Vec::with_capacity(total);
    for (name, joined) in names.into_iter().zip(join_all(handles).await) {
        results.push(match joined {
            Ok(result) => result,
            Err(e) => join_one_failed(name, e),
        });
    }

    StrategyRun {
        results,
        wall: started.elapsed(),
    }
}

/// panic 收敛为该文档的失败结果，与并发策略语义一致
fn join_one_failed(name: String, e: tokio::task::JoinError) -> OcrResult {
    tracing::error!("文档 {} 任务执行失败: {}", name, e);
    OcrResult::failed(name, e, std::time::Duration::ZERO, "unknown".to_string())
}
