//! 基础设施层 - 持有共享资源，只暴露能力

pub mod jitter;

pub use jitter::Jitter;
