//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责资源创建和三种策略的依次执行。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建文档目录、共享随机源、各服务
//! 2. **语料准备**：生成样例文档后，从目录重新发现待处理语料
//! 3. **策略对比**：同一份语料依次跑顺序 / 并发 / 带进度并发
//! 4. **全局统计**：输出三种策略的汇总与加速比
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文档的细节，向下委托 orchestrator
//! - **资源所有者**：唯一持有 PdfService 与 OcrService 的模块
//! - **启动失败即终止**：语料无法生成时直接向上传播

use crate::config::Config;
use crate::infrastructure::Jitter;
use crate::models::PdfDocument;
use crate::orchestrator::{run_concurrent, run_concurrent_with_progress, run_sequential};
use crate::report::{self, RunSummary};
use crate::services::{generate_sample_pdfs, OcrService, PdfService};
use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    pdf_service: PdfService,
    ocr: OcrService,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        fs::create_dir_all(&config.pdf_folder)
            .await
            .with_context(|| format!("无法创建文档目录: {}", config.pdf_folder))?;

        // 共享随机源（设置了种子则延迟序列可复现）
        let jitter = match config.random_seed {
            Some(seed) => Jitter::from_seed(seed),
            None => Jitter::new(),
        };

        let pdf_service = PdfService::new(&config.pdf_folder);
        let ocr = OcrService::new(pdf_service.clone(), jitter);

        Ok(Self {
            config,
            pdf_service,
            ocr,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 生成样例语料（启动失败直接传播）
        generate_sample_pdfs(&self.pdf_service, self.config.sample_count)
            .await
            .context("样例文档生成失败")?;

        // 从目录重新发现待处理语料
        let docs = self.load_corpus().await?;

        if docs.is_empty() {
            warn!("⚠️ 没有找到待处理的文档，程序结束");
            return Ok(());
        }

        // 策略一：顺序
        let sequential = run_sequential(&self.ocr, &docs).await;
        let seq_summary = report::print_run("顺序处理", &sequential, false);

        // 策略二：并发
        let concurrent = run_concurrent(&self.ocr, &docs).await;
        let conc_summary = report::print_run("并发处理", &concurrent, false);

        // 策略三：带进度的并发
        let progress = run_concurrent_with_progress(&self.ocr, &docs, |_idx, result| {
            info!(
                "✓ 完成: {} ({} 页, 耗时 {} ms, {})",
                result.file_name,
                result.pages,
                result.elapsed.as_millis(),
                result.worker_id
            );
        })
        .await;
        let prog_summary = report::print_run("带进度的并发处理", &progress, true);

        print_final_stats(&seq_summary, &conc_summary, &prog_summary);

        Ok(())
    }

    /// 加载语料
    async fn load_corpus(&self) -> Result<Vec<PdfDocument>> {
        info!("\n📁 正在扫描待处理的文档...");
        let docs = self
            .pdf_service
            .load_all_pdf_files()
            .await
            .context("扫描文档目录失败")?;
        info!("✓ 找到 {} 个待处理的文档", docs.len());
        Ok(docs)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 模拟 OCR 并发策略对比");
    info!("📊 样例文档数量: {}", config.sample_count);
    info!("📁 文档目录: {}", config.pdf_folder);
    if let Some(seed) = config.random_seed {
        info!("🎲 随机种子: {}", seed);
    }
    info!("{}", "=".repeat(60));
}

fn print_final_stats(seq: &RunSummary, conc: &RunSummary, prog: &RunSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 三种策略对比");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("顺序处理:         {} ms", seq.wall.as_millis());
    info!("并发处理:         {} ms", conc.wall.as_millis());
    info!("带进度的并发处理: {} ms", prog.wall.as_millis());
    if conc.wall.as_millis() > 0 {
        info!(
            "⚡ 并发加速比: {:.2}x",
            seq.wall.as_secs_f64() / conc.wall.as_secs_f64()
        );
    }
    info!("{}", "=".repeat(60));
}
