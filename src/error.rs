//! rsuaparser 全局错误类型定义
//! 封装规则加载与编译阶段的所有错误，基于 thiserror 实现类型安全处理。
//! 提取阶段（extract）按设计永不报错，未命中一律以 None 表达。

use thiserror::Error;

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;

/// 全局错误枚举
#[derive(Error, Debug)]
pub enum RsuaparserError {
    // ===================== 规则相关错误 =====================
    /// 规则加载失败（本地规则文件读取/内容异常）
    #[error("Rule load failed: {0}")]
    RuleLoadError(String),

    /// 规则文件格式不支持（仅支持 yaml/yml/json 扩展名）
    #[error("Unsupported rule format: {0}")]
    RuleFormatError(String),

    // ===================== 编译相关错误 =====================
    /// 正则编译失败（携带原始规则正则与底层引擎诊断）
    #[error("Regex compilation failed for pattern `{pattern}`: {source}")]
    RegexCompileError {
        pattern: String,
        #[source]
        source: RegexError,
    },

    /// 未知的规则标志位（当前仅支持大小写不敏感标志 "i"）
    #[error("Unknown regex flag `{flag}` for pattern `{pattern}`")]
    UnknownRegexFlag { flag: String, pattern: String },

    /// 替换模板引用了正则中不存在的捕获组
    #[error("Replacement template references missing capture group ${group} in pattern `{pattern}`")]
    MissingCaptureGroup { group: usize, pattern: String },

    // ===================== 提取器相关错误 =====================
    /// 全局提取器未初始化（调用前需先执行 init_global_extractor）
    #[error("Global extractor not initialized")]
    ExtractorNotInitialized,

    /// 全局提取器重复初始化
    #[error("Global extractor already initialized")]
    ExtractorAlreadyInitialized,

    // ===================== 基础错误 =====================
    /// IO操作失败
    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),

    /// JSON解析失败
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    /// YAML解析失败
    #[error("YAML parse failed: {0}")]
    YamlError(#[from] SerdeYamlError),
}

/// 全局Result类型别名
pub type RsuaResult<T> = Result<T, RsuaparserError>;
