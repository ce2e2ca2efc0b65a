//! 编排层 - 三种批处理调度策略
//!
//! 三种策略消费同一份语料、调用同一个处理器，区别只在调度与上报：
//!
//! - [`run_sequential`]：逐个等待完成，总耗时 ≈ 各文档耗时之和
//! - [`run_concurrent`]：全部启动后统一等待，总耗时 ≈ 最慢文档的耗时
//! - [`run_concurrent_with_progress`]：同上，但每个文档完成的瞬间
//!   按真实完成顺序触发一次进度回调
//!
//! 墙钟耗时由编排层在整个批次外侧测量，而不是各文档耗时相加。

pub mod concurrent;
pub mod progress;
pub mod sequential;

pub use concurrent::run_concurrent;
pub use progress::run_concurrent_with_progress;
pub use sequential::run_sequential;

use crate::models::OcrResult;
use std::time::Duration;

/// 一次策略执行的产物：全部结果 + 批次墙钟耗时
#[derive(Debug)]
pub struct StrategyRun {
    /// 每个文档恰好一个结果（语料顺序）
    pub results: Vec<OcrResult>,

    /// 整个批次的墙钟耗时
    pub wall: Duration,
}
