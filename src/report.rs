//! 结果汇总与报告输出 - 汇总层
//!
//! ## 职责
//!
//! 1. **汇总统计**：把一批结果折叠为 `RunSummary`
//! 2. **逐条输出**：每个文档一行（名称 / 页数 / 字符数 / 耗时 / 线程）
//! 3. **策略小结**：每个策略一段（总墙钟 / 总字符 / 总页数 / 平均耗时）
//!
//! 页数与字符数始终按条目相加；墙钟耗时来自编排层对整个批次的
//! 外侧测量，并发批次的墙钟远小于各条目耗时之和。

use crate::models::OcrResult;
use crate::orchestrator::StrategyRun;
use std::time::Duration;
use tracing::info;

/// 一次策略执行的汇总统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 结果条目数
    pub items: usize,
    /// 实际处理的总页数
    pub total_pages: usize,
    /// 识别文本总字符数
    pub total_chars: usize,
    /// 批次墙钟耗时
    pub wall: Duration,
}

impl RunSummary {
    /// 纯折叠：结果集 + 外侧测得的墙钟 → 汇总
    pub fn summarize(results: &[OcrResult], wall: Duration) -> Self {
        Self {
            items: results.len(),
            total_pages: results.iter().map(|r| r.pages).sum(),
            total_chars: results.iter().map(|r| r.extracted_chars()).sum(),
            wall,
        }
    }

    /// 平均每个文档的墙钟耗时
    pub fn avg_per_item(&self) -> Duration {
        if self.items == 0 {
            return Duration::ZERO;
        }
        self.wall / self.items as u32
    }
}

/// 输出一次策略执行的完整报告
pub fn print_run(label: &str, run: &StrategyRun, show_avg: bool) -> RunSummary {
    let summary = RunSummary::summarize(&run.results, run.wall);

    info!("\n{}", "=".repeat(60));
    info!("📊 {} 结果", label);
    info!("{}", "=".repeat(60));

    for result in &run.results {
        log_item_line(result);
    }

    log_summary_line(label, &summary, show_avg);

    summary
}

/// 每个文档一行
fn log_item_line(result: &OcrResult) {
    if result.is_failed() {
        info!(
            "❌ {} | {} | 耗时 {} ms | {}",
            result.file_name,
            result.extracted_text,
            result.elapsed.as_millis(),
            result.worker_id
        );
    } else {
        info!(
            "✓ {} | {} 页 | {} 字符 | 耗时 {} ms | {}",
            result.file_name,
            result.pages,
            result.extracted_chars(),
            result.elapsed.as_millis(),
            result.worker_id
        );
    }
}

/// 每个策略一段小结
fn log_summary_line(label: &str, summary: &RunSummary, show_avg: bool) {
    info!("{}", "─".repeat(60));
    info!(
        "✅ {}: {} 个文档 | 总墙钟 {} ms | 共 {} 字符 | 共 {} 页",
        label,
        summary.items,
        summary.wall.as_millis(),
        summary.total_chars,
        summary.total_pages
    );
    if show_avg {
        info!(
            "⏱️ 平均每个文档 {} ms",
            summary.avg_per_item().as_millis()
        );
    }
    info!("{}", "─".repeat(60));
}
