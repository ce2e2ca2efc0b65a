use std::fmt;

/// 统一的 Result 别名
pub type Result<T> = std::result::Result<T, AppError>;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文档相关错误
    Document(DocumentError),
    /// 配置错误
    Config(String),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Document(e) => write!(f, "文档错误: {}", e),
            AppError::Config(msg) => write!(f, "配置错误: {}", msg),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Document(e) => Some(e),
            AppError::Config(_) | AppError::Other(_) => None,
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(e: DocumentError) -> Self {
        AppError::Document(e)
    }
}

/// 文档相关错误
#[derive(Debug)]
pub enum DocumentError {
    /// 创建文档失败
    CreateFailed {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 读取文档失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 解析文档失败
    ParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 文档路径未设置
    MissingPath { name: String },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::CreateFailed { name, source } => {
                write!(f, "创建文档 {} 失败: {}", name, source)
            }
            DocumentError::ReadFailed { path, source } => {
                write!(f, "读取文档 {} 失败: {}", path, source)
            }
            DocumentError::ParseFailed { path, source } => {
                write!(f, "解析文档 {} 失败: {}", path, source)
            }
            DocumentError::MissingPath { name } => {
                write!(f, "文档 {} 的文件路径未设置", name)
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::CreateFailed { source, .. }
            | DocumentError::ReadFailed { source, .. }
            | DocumentError::ParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            DocumentError::MissingPath { .. } => None,
        }
    }
}
