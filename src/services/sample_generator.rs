//! 样例文档生成器 - 业务能力层
//!
//! 生成固定数量的样例文档作为处理语料。页数按 `1 + (i mod 3)`
//! 循环（i 从 1 开始），即 5 个文档的页数为 [2, 3, 1, 2, 3]，
//! 用来制造每个文档不同的模拟耗时。

use crate::error::Result;
use crate::models::PdfDocument;
use crate::services::PdfService;
use tracing::info;

/// 生成 count 个样例文档并落盘
///
/// 任何一个文档创建失败都视为启动失败，直接向上传播：
/// 语料不完整时没有对比价值。
pub async fn generate_sample_pdfs(pdf_service: &PdfService, count: usize) -> Result<Vec<PdfDocument>> {
    info!("📁 正在生成 {} 个样例文档...", count);

    let mut documents = Vec::with_capacity(count);

    for i in 1..=count {
        let pages = 1 + (i % 3);
        let name = format!("样例文档{}", i);
        let content = format!("这是 {} 的种子正文，用于生成每页的模拟识别文本。", name);

        let doc = pdf_service.create_pdf(&name, &content, pages).await?;
        documents.push(doc);
    }

    info!("✓ 样例文档生成完成: {} 个", documents.len());

    Ok(documents)
}
