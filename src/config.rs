/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 生成的样例文档数量
    pub sample_count: usize,
    /// 模拟 PDF 文件存放目录
    pub pdf_folder: String,
    /// 随机延迟种子（设置后每次运行延迟序列可复现）
    pub random_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_count: 5,
            pdf_folder: "output_pdf".to_string(),
            random_seed: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            sample_count: std::env::var("SAMPLE_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.sample_count),
            pdf_folder: std::env::var("PDF_FOLDER").unwrap_or(default.pdf_folder),
            random_seed: std::env::var("RANDOM_SEED").ok().and_then(|v| v.parse().ok()),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
