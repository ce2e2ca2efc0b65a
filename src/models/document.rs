//! 模拟 PDF 文档描述
//!
//! 一个待 OCR 处理的工作单元。文档以 TOML 文件的形式落盘，
//! 代替真实的二进制 PDF（文件内部格式不在本系统关注范围内）。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 模拟 PDF 文档
///
/// 由生成器创建，创建后不再修改；处理器按它逐个执行模拟 OCR。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfDocument {
    /// 文档名称
    pub name: String,

    /// 声明的页数
    pub pages: usize,

    /// 种子正文内容（每页模拟文本的来源）
    pub content: String,

    /// 落盘后的文件路径（加载时回填，不序列化）
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl PdfDocument {
    /// 创建新的文档描述
    pub fn new(name: impl Into<String>, pages: usize, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages,
            content: content.into(),
            file_path: None,
        }
    }
}
