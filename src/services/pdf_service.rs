//! 模拟 PDF 文档服务 - 业务能力层
//!
//! ## 职责
//!
//! 提供文档协作者的三个能力：
//!
//! 1. **创建文档**：把 `PdfDocument` 以 TOML 形式写入目录
//! 2. **读取元数据**：从落盘文件读回页数（OCR 第一阶段使用）
//! 3. **目录发现**：扫描目录，把所有文档读回为处理语料
//!
//! 待处理语料以"读回存储"的方式发现，而不是由生成器直接传递，
//! 单个文件读取失败只记录警告并跳过，不影响其余文档。

use crate::error::{DocumentError, Result};
use crate::models::PdfDocument;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// 模拟 PDF 文档服务
#[derive(Clone)]
pub struct PdfService {
    folder: PathBuf,
}

impl PdfService {
    /// 创建服务，文档全部存放在 folder 目录下
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// 文档存放目录
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// 创建一个模拟 PDF 文档并落盘
    pub async fn create_pdf(&self, name: &str, content: &str, pages: usize) -> Result<PdfDocument> {
        let mut doc = PdfDocument::new(name, pages, content);
        let path = self.folder.join(format!("{}.toml", name));

        let body = toml::to_string(&doc).map_err(|e| DocumentError::CreateFailed {
            name: name.to_string(),
            source: Box::new(e),
        })?;

        fs::write(&path, body)
            .await
            .map_err(|e| DocumentError::CreateFailed {
                name: name.to_string(),
                source: Box::new(e),
            })?;

        doc.file_path = Some(path);
        Ok(doc)
    }

    /// 读取落盘文档的页数（元数据能力）
    ///
    /// 文件缺失或内容损坏都会返回错误，由调用方决定如何收敛。
    pub async fn read_page_count(&self, path: &Path) -> Result<usize> {
        let doc = load_pdf_file(path).await?;
        Ok(doc.pages)
    }

    /// 扫描目录，读回所有待处理的文档
    ///
    /// 单个文件加载失败只记录警告并跳过。
    pub async fn load_all_pdf_files(&self) -> Result<Vec<PdfDocument>> {
        let mut documents = Vec::new();
        let mut entries = fs::read_dir(&self.folder)
            .await
            .map_err(|e| DocumentError::ReadFailed {
                path: self.folder.display().to_string(),
                source: Box::new(e),
            })?;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(DocumentError::ReadFailed {
                        path: self.folder.display().to_string(),
                        source: Box::new(e),
                    }
                    .into())
                }
            };

            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match load_pdf_file(&path).await {
                Ok(doc) => {
                    info!("正在加载: {} ({} 页)", doc.name, doc.pages);
                    documents.push(doc);
                }
                Err(e) => {
                    warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }

        // 目录遍历顺序不稳定，按名称排序保证语料顺序确定
        documents.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(documents)
    }
}

/// 从 TOML 文件加载数据并转换为 PdfDocument 对象
async fn load_pdf_file(path: &Path) -> Result<PdfDocument> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DocumentError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    let mut doc: PdfDocument =
        toml::from_str(&content).map_err(|e| DocumentError::ParseFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    // 设置文件路径
    doc.file_path = Some(path.to_path_buf());

    Ok(doc)
}
