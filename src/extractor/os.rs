//! 操作系统域：规则编译、顺序匹配与结果组装

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::compiler::{
    CompiledPattern, OptionalFieldResolver, PatternCompiler, RequiredFieldResolver,
};
use crate::error::RsuaResult;
use crate::rule::OsRule;

/// 操作系统识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Os {
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

impl Os {
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

impl fmt::Display for Os {
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

/// 编译后的单条操作系统规则
#[derive(Debug, Clone)]
struct CompiledOsRule {
    pattern: CompiledPattern,
    family: RequiredFieldResolver,
    v1: OptionalFieldResolver,
    v2: OptionalFieldResolver,
    v3: OptionalFieldResolver,
    v4: OptionalFieldResolver,
}

/// 操作系统提取器：有序规则表，先到先得
#[derive(Debug, Clone)]
pub struct OsExtractor {
    rules: Vec<CompiledOsRule>,
}

impl OsExtractor {
    /// 按声明顺序逐条编译规则，任一条失败即整体失败
    pub fn from_rules(rules: Vec<OsRule>) -> RsuaResult<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in &rules {
            compiled.push(Self::compile_rule(rule)?);
        }
        debug!("操作系统规则编译完成，共{}条", compiled.len());
        Ok(Self { rules: compiled })
    }

    fn compile_rule(rule: &OsRule) -> RsuaResult<CompiledOsRule> {
        let case_insensitive = PatternCompiler::parse_flag(rule.regex_flag.as_deref(), &rule.regex)?;
        let pattern = PatternCompiler::compile(&rule.regex, case_insensitive)?;
        let groups = pattern.group_count();
        Ok(CompiledOsRule {
            family: RequiredFieldResolver::new(rule.os_replacement.clone(), groups, 1),
            v1: OptionalFieldResolver::new(rule.os_v1_replacement.clone(), groups, 2),
            v2: OptionalFieldResolver::new(rule.os_v2_replacement.clone(), groups, 3),
            v3: OptionalFieldResolver::new(rule.os_v3_replacement.clone(), groups, 4),
            v4: OptionalFieldResolver::new(rule.os_v4_replacement.clone(), groups, 5),
            pattern,
        })
    }

    /// 顺序扫描规则表，返回首个命中规则解析出的结果；全部未命中返回 None
    pub fn extract(&self, user_agent: &str) -> Option<Os> {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(user_agent) {
                return Some(Os {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_version_slots_allow_full_templates() {
        // 操作系统版本槽支持完整 $k 模板（与浏览器版本槽的原样直出不同）
        let extractor = OsExtractor::from_rules(vec![OsRule {
            regex: r"Windows NT (\d+)\.(\d+)".to_string(),
            os_replacement: Some("Windows".to_string()),
            os_v1_replacement: Some("$1".to_string()),
            ..Default::default()
        }])
        .unwrap();

        let os = extractor
            .extract("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
            .unwrap();
        assert_eq!(os.family, "Windows");
        assert_eq!(os.major.as_deref(), Some("10"));
        // 模板缺省的版本槽回退锚定捕获组：minor锚定第3组，本例无第3组
        assert_eq!(os.minor, None);
    }

    #[test]
    fn test_underscore_version_extraction() {
        let extractor = OsExtractor::from_rules(vec![OsRule {
            regex: r"(iPhone OS|CPU OS) (\d+)_(\d+)".to_string(),
            os_replacement: Some("iOS".to_string()),
            ..Default::default()
        }])
        .unwrap();

        let os = extractor
            .extract("Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X)")
            .unwrap();
        assert_eq!(os.family, "iOS");
        assert_eq!(os.major.as_deref(), Some("14"));
        assert_eq!(os.minor.as_deref(), Some("6"));
    }
}
