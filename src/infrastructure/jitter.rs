//! 随机延迟提供者 - 基础设施层
//!
//! ## 职责
//!
//! 本模块是唯一持有共享随机源的模块，对外只暴露 pause() 能力：
//! 在给定区间内随机挂起当前任务，模拟 I/O 等待。
//!
//! ## 设计特点
//!
//! - **协作式挂起**：通过 `tokio::time::sleep` 只挂起发起调用的任务，
//!   不占用整个工作线程，保证大量任务可以同时 in-flight
//! - **并发安全**：多个任务可能同时取随机数，`StdRng` 放在
//!   `Arc<Mutex<_>>` 后面，锁在挂起前释放
//! - **可注入**：测试可用 `fixed` / `zero` 模式获得确定性延迟

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// 随机延迟提供者
#[derive(Clone)]
pub struct Jitter {
    mode: JitterMode,
}

#[derive(Clone)]
enum JitterMode {
    /// 在 [min, max] 内均匀取值
    Random(Arc<Mutex<StdRng>>),
    /// 固定毫秒数（用于确定性的耗时对比测试）
    Fixed(u64),
    /// 不挂起（用于纯逻辑测试）
    Zero,
}

impl Jitter {
    /// 创建随机延迟提供者（熵种子）
    pub fn new() -> Self {
        Self {
            mode: JitterMode::Random(Arc::new(Mutex::new(StdRng::from_entropy()))),
        }
    }

    /// 创建可复现的随机延迟提供者
    pub fn from_seed(seed: u64) -> Self {
        Self {
            mode: JitterMode::Random(Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))),
        }
    }

    /// 每次 pause 固定挂起 ms 毫秒，忽略传入区间
    pub fn fixed(ms: u64) -> Self {
        Self {
            mode: JitterMode::Fixed(ms),
        }
    }

    /// 每次 pause 立即返回
    pub fn zero() -> Self {
        Self {
            mode: JitterMode::Zero,
        }
    }

    /// 挂起当前任务 [min_ms, max_ms] 毫秒
    ///
    /// 只挂起发起调用的任务；锁只覆盖取随机数，不覆盖挂起本身。
    pub async fn pause(&self, min_ms: u64, max_ms: u64) {
        let ms = match &self.mode {
            JitterMode::Random(rng) => {
                let mut rng = rng.lock().unwrap();
                rng.gen_range(min_ms..=max_ms)
            }
            JitterMode::Fixed(ms) => *ms,
            JitterMode::Zero => return,
        };

        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_zero_jitter_returns_immediately() {
        let jitter = Jitter::zero();
        let start = Instant::now();
        jitter.pause(50, 150).await;
        assert!(start.elapsed() < Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_fixed_jitter_sleeps_given_ms() {
        let jitter = Jitter::fixed(30);
        let start = Instant::now();
        jitter.pause(50, 150).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(30));
        assert!(elapsed < Duration::from_millis(150));
    }

    #[tokio::test]
    async fn test_seeded_jitter_stays_in_range() {
        let jitter = Jitter::from_seed(42);
        let start = Instant::now();
        jitter.pause(10, 20).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_jitter_is_safe_to_share_across_tasks() {
        let jitter = Jitter::from_seed(7);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let jitter = jitter.clone();
            handles.push(tokio::spawn(async move {
                jitter.pause(1, 3).await;
            }));
        }
        for handle in handles {
            handle.await.expect("任务不应 panic");
        }
    }
}
