//! 编译后模式模型
//! 正则编译后的不可变结构，可跨线程共享并任意次复用

use regex::{Captures, Regex};

/// 编译后的正则模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    /// 显式捕获组数量（不含整体匹配的第0组）
    group_count: usize,
}

impl CompiledPattern {
    pub(crate) fn new(regex: Regex) -> Self {
        let group_count = regex.captures_len() - 1;
        Self { regex, group_count }
    }

    /// 匹配输入，返回捕获结果
    pub fn captures<'a>(&self, input: &'a str) -> Option<Captures<'a>> {
        self.regex.captures(input)
    }

    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// 显式捕获组数量
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// 规则描述（清理后的正则文本，用于日志输出）
    pub fn describe(&self) -> &str {
        self.regex.as_str()
    }
}
