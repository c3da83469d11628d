//! 字段解析器
//! 构建期根据替换模板与正则捕获组数量，为每个输出字段固化一种解析形态；
//! 提取期对命中结果做纯函数求值：字面量直出、捕获组回退、$k 模板替换。
//! 求值永不失败——缺失的捕获组一律降级为空替换或 None。
//!
//! 各域字段与捕获组的锚定关系（继承自 uap-core 规则库的书写约定）：
//! family类字段锚定第1组，版本字段v1..v4锚定第2..5组，
//! 设备model锚定第1组，设备brand无捕获组回退。

use regex::Captures;

use crate::error::{RsuaResult, RsuaparserError};

/// 取指定捕获组的非空内容（未参与匹配或匹配为空串均视为缺失）
fn group<'s>(caps: &Captures<'s>, index: usize) -> Option<&'s str> {
    caps.get(index).map(|g| g.as_str()).filter(|s| !s.is_empty())
}

/// 判断模板中是否存在 $k 形式的分组引用
fn has_group_ref(template: &str) -> bool {
    template
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == b'$' && w[1].is_ascii_digit())
}

/// 展开完整 $k 模板并清理首尾空白
fn expand_template(template: &str, caps: &Captures<'_>) -> String {
    let mut out = String::new();
    caps.expand(template, &mut out);
    out.trim().to_string()
}

/// 必填字段解析器（操作系统family、设备family）：支持完整 $k 模板
#[derive(Debug, Clone)]
pub enum RequiredFieldResolver {
    /// 字面量直出（含模板缺省且无可回退分组时的空字符串兜底）
    Literal(String),
    /// 回退到指定捕获组
    Capture(usize),
    /// 完整 $k 模板
    Template(String),
}

impl RequiredFieldResolver {
    /// 构建期决策：非空模板按是否含分组引用区分字面量/模板；
    /// 模板缺省时有足够分组则回退捕获组，否则空字符串兜底
    pub fn new(replacement: Option<String>, group_count: usize, fallback_group: usize) -> Self {
        match replacement.filter(|s| !s.trim().is_empty()) {
            Some(s) if has_group_ref(&s) => Self::Template(s),
            Some(s) => Self::Literal(s),
            None if group_count >= fallback_group => Self::Capture(fallback_group),
            None => Self::Literal(String::new()),
        }
    }

    /// 对命中结果求值
    pub fn resolve(&self, caps: &Captures<'_>) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Capture(i) => group(caps, *i).unwrap_or_default().to_string(),
            Self::Template(t) => expand_template(t, caps),
        }
    }
}

/// 可选字段解析器（操作系统v1-v4、设备brand/model）：支持完整模板，允许解析为 None
#[derive(Debug, Clone)]
pub enum OptionalFieldResolver {
    None,
    Literal(String),
    Capture(usize),
    Template(String),
}

impl OptionalFieldResolver {
    pub fn new(replacement: Option<String>, group_count: usize, fallback_group: usize) -> Self {
        match replacement.filter(|s| !s.trim().is_empty()) {
            Some(s) if has_group_ref(&s) => Self::Template(s),
            Some(s) => Self::Literal(s),
            None if group_count >= fallback_group => Self::Capture(fallback_group),
            None => Self::None,
        }
    }

    /// 无捕获组回退形态（设备brand：模板缺省即无值）
    pub fn without_fallback(replacement: Option<String>) -> Self {
        match replacement.filter(|s| !s.trim().is_empty()) {
            Some(s) if has_group_ref(&s) => Self::Template(s),
            Some(s) => Self::Literal(s),
            None => Self::None,
        }
    }

    pub fn resolve(&self, caps: &Captures<'_>) -> Option<String> {
        match self {
            Self::None => None,
            Self::Literal(s) => Some(s.clone()),
            Self::Capture(i) => group(caps, *i).map(str::to_string),
            Self::Template(t) => {
                let expanded = expand_template(t, caps);
                if expanded.is_empty() {
                    None
                } else {
                    Some(expanded)
                }
            }
        }
    }
}

/// 浏览器family解析器：仅支持 $1 受限模板
/// 模板引用 $1 而正则没有捕获组时在构建期报错
#[derive(Debug, Clone)]
pub enum BrowserFamilyResolver {
    Capture,
    Literal(String),
    Template(String),
}

impl BrowserFamilyResolver {
    pub fn new(
        replacement: Option<String>,
        group_count: usize,
        pattern: &str,
    ) -> RsuaResult<Self> {
        match replacement {
            Some(s) if s.contains("$1") => {
                if group_count < 1 {
                    Err(RsuaparserError::MissingCaptureGroup {
                        group: 1,
                        pattern: pattern.to_string(),
                    })
                } else {
                    Ok(Self::Template(s))
                }
            }
            Some(s) if !s.is_empty() => Ok(Self::Literal(s)),
            _ if group_count >= 1 => Ok(Self::Capture),
            _ => Ok(Self::Literal(String::new())),
        }
    }

    pub fn resolve(&self, caps: &Captures<'_>) -> String {
        match self {
            Self::Capture => group(caps, 1).unwrap_or_default().to_string(),
            Self::Literal(s) => s.clone(),
            Self::Template(t) => t.replace("$1", group(caps, 1).unwrap_or_default()),
        }
    }
}

/// 无模板字段解析器（浏览器v1-v4）：替换值原样直出，缺省回退同序捕获组
#[derive(Debug, Clone)]
pub enum LiteralFieldResolver {
    None,
    Literal(String),
    Capture(usize),
}

impl LiteralFieldResolver {
    pub fn new(replacement: Option<String>, group_count: usize, fallback_group: usize) -> Self {
        match replacement.filter(|s| !s.is_empty()) {
            Some(s) => Self::Literal(s),
            None if group_count >= fallback_group => Self::Capture(fallback_group),
            None => Self::None,
        }
    }

    pub fn resolve(&self, caps: &Captures<'_>) -> Option<String> {
        match self {
            Self::None => None,
            Self::Literal(s) => Some(s.clone()),
            Self::Capture(i) => group(caps, *i).map(str::to_string),
        }
    }
}
