//! 规则编译器核心
//! 仅负责将原始规则正则编译为可执行模式：方言清理 → regex 编译。
//! 清理后仍无法编译的规则立即报错，保证规则库构建的原子性。

use regex::RegexBuilder;

use super::cleaner::PatternCleaner;
use super::pattern::CompiledPattern;
use crate::error::{RsuaResult, RsuaparserError};

/// 大小写不敏感标志位（regex_flag 的唯一合法取值）
const CASE_INSENSITIVE_FLAG: &str = "i";

/// 规则编译器
pub struct PatternCompiler;

impl PatternCompiler {
    /// 编译单条规则正则
    pub fn compile(raw_pattern: &str, case_insensitive: bool) -> RsuaResult<CompiledPattern> {
        let cleaned = PatternCleaner.clean(raw_pattern);
        let regex = RegexBuilder::new(&cleaned)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| RsuaparserError::RegexCompileError {
                pattern: raw_pattern.to_string(),
                source: e,
            })?;
        Ok(CompiledPattern::new(regex))
    }

    /// 解析规则标志位：None → 大小写敏感；"i" → 大小写不敏感；其余值一律拒绝
    pub fn parse_flag(flag: Option<&str>, pattern: &str) -> RsuaResult<bool> {
        match flag {
            None => Ok(false),
            Some(CASE_INSENSITIVE_FLAG) => Ok(true),
            Some(other) => Err(RsuaparserError::UnknownRegexFlag {
                flag: other.to_string(),
                pattern: pattern.to_string(),
            }),
        }
    }
}
