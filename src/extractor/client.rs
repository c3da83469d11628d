//! 浏览器（客户端）域：规则编译、顺序匹配与结果组装

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::compiler::{
    BrowserFamilyResolver, CompiledPattern, LiteralFieldResolver, PatternCompiler,
};
use crate::error::RsuaResult;
use crate::rule::ClientRule;

/// 浏览器识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_minor: Option<String>,
}

impl Client {
    /// 未命中任何规则时调用方惯用的兜底值
    pub fn other() -> Self {
        Self {
            family: "Other".to_string(),
            major: None,
            minor: None,
            patch: None,
            patch_minor: None,
        }
    }
}

// ======== Display（用于 CLI / Report 输出） ========
impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut version = String::new();
        for part in [&self.major, &self.minor, &self.patch, &self.patch_minor] {
            match part {
                Some(v) => {
                    if !version.is_empty() {
                        version.push('.');
                    }
                    version.push_str(v);
                }
                None => break,
            }
        }
        if version.is_empty() {
            write!(f, "{}", self.family)
        } else {
            write!(f, "{} {}", self.family, version)
        }
    }
}

/// 编译后的单条浏览器规则
#[derive(Debug, Clone)]
struct CompiledClientRule {
    pattern: CompiledPattern,
    family: BrowserFamilyResolver,
    v1: LiteralFieldResolver,
    v2: LiteralFieldResolver,
    v3: LiteralFieldResolver,
    v4: LiteralFieldResolver,
}

/// 浏览器提取器：有序规则表，先到先得
#[derive(Debug, Clone)]
pub struct ClientExtractor {
    rules: Vec<CompiledClientRule>,
}

impl ClientExtractor {
    /// 按声明顺序逐条编译规则，任一条失败即整体失败
    pub fn from_rules(rules: Vec<ClientRule>) -> RsuaResult<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in &rules {
            compiled.push(Self::compile_rule(rule)?);
        }
        debug!("浏览器规则编译完成，共{}条", compiled.len());
        Ok(Self { rules: compiled })
    }

    fn compile_rule(rule: &ClientRule) -> RsuaResult<CompiledClientRule> {
        let case_insensitive = PatternCompiler::parse_flag(rule.regex_flag.as_deref(), &rule.regex)?;
        let pattern = PatternCompiler::compile(&rule.regex, case_insensitive)?;
        let groups = pattern.group_count();
        Ok(CompiledClientRule {
            family: BrowserFamilyResolver::new(rule.family_replacement.clone(), groups, &rule.regex)?,
            v1: LiteralFieldResolver::new(rule.v1_replacement.clone(), groups, 2),
            v2: LiteralFieldResolver::new(rule.v2_replacement.clone(), groups, 3),
            v3: LiteralFieldResolver::new(rule.v3_replacement.clone(), groups, 4),
            v4: LiteralFieldResolver::new(rule.v4_replacement.clone(), groups, 5),
            pattern,
        })
    }

    /// 顺序扫描规则表，返回首个命中规则解析出的结果；全部未命中返回 None
    pub fn extract(&self, user_agent: &str) -> Option<Client> {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(user_agent) {
                return Some(Client {
                    family: rule.family.resolve(&caps),
                    major: rule.v1.resolve(&caps),
                    minor: rule.v2.resolve(&caps),
                    patch: rule.v3.resolve(&caps),
                    patch_minor: rule.v4.resolve(&caps),
                });
            }
        }
        None
    }

    /// 规则条数
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
