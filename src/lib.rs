//! # PDF OCR Simulator
//!
//! 一个用于演示并发策略对批量 I/O 任务耗时影响的 Rust 应用程序：
//! 生成一批模拟 PDF 文档，用三种调度策略依次执行模拟 OCR，
//! 对比各策略的总耗时与汇总统计。
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有共享资源，只暴露能力
//! - `Jitter` - 唯一的共享随机源 owner，提供 pause() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文档
//! - `PdfService` - 文档创建 / 元数据读取 / 目录发现能力
//! - `OcrService` - 模拟 OCR 处理能力（分阶段延迟）
//! - `sample_generator` - 样例文档批量生成能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/sequential` - 顺序策略：逐个等待完成
//! - `orchestrator/concurrent` - 并发策略：全部启动后统一等待
//! - `orchestrator/progress` - 带进度的并发策略：完成即上报
//!
//! ### ④ 汇总层（Report）
//! - `report` - 结果汇总（RunSummary）与人类可读的报告输出
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod services;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, DocumentError, Result};
pub use infrastructure::Jitter;
pub use models::{OcrResult, PdfDocument, OCR_ERROR_MARKER, PAGE_SEPARATOR};
pub use orchestrator::{run_concurrent, run_concurrent_with_progress, run_sequential, StrategyRun};
pub use report::RunSummary;
pub use services::{generate_sample_pdfs, OcrService, PdfService};
