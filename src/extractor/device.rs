//! 设备域：规则编译、顺序匹配与结果组装
//! 设备域的三个字段均支持完整 $k 模板；brand 无捕获组回退是规则库的既定约定

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::compiler::{
    CompiledPattern, OptionalFieldResolver, PatternCompiler, RequiredFieldResolver,
};
use crate::error::RsuaResult;
use crate::rule::DeviceRule;

/// 设备识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Device {
    /// 未命中任何规则时调用方惯用的兜底值
    pub fn other() -> Self {
        Self {
            family: "Other".to_string(),
            brand: None,
            model: None,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)
    }
}

/// 编译后的单条设备规则
#[derive(Debug, Clone)]
struct CompiledDeviceRule {
    pattern: CompiledPattern,
    family: RequiredFieldResolver,
    brand: OptionalFieldResolver,
    model: OptionalFieldResolver,
}

/// 设备提取器：有序规则表，先到先得
#[derive(Debug, Clone)]
pub struct DeviceExtractor {
    rules: Vec<CompiledDeviceRule>,
}

impl DeviceExtractor {
    /// 按声明顺序逐条编译规则，任一条失败即整体失败
    pub fn from_rules(rules: Vec<DeviceRule>) -> RsuaResult<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in &rules {
            compiled.push(Self::compile_rule(rule)?);
        }
        debug!("设备规则编译完成，共{}条", compiled.len());
        Ok(Self { rules: compiled })
    }

    fn compile_rule(rule: &DeviceRule) -> RsuaResult<CompiledDeviceRule> {
        let case_insensitive = PatternCompiler::parse_flag(rule.regex_flag.as_deref(), &rule.regex)?;
        let pattern = PatternCompiler::compile(&rule.regex, case_insensitive)?;
        let groups = pattern.group_count();
        Ok(CompiledDeviceRule {
            family: RequiredFieldResolver::new(rule.device_replacement.clone(), groups, 1),
            brand: OptionalFieldResolver::without_fallback(rule.brand_replacement.clone()),
            model: OptionalFieldResolver::new(rule.model_replacement.clone(), groups, 1),
            pattern,
        })
    }

    /// 顺序扫描规则表，返回首个命中规则解析出的结果；全部未命中返回 None
    pub fn extract(&self, user_agent: &str) -> Option<Device> {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(user_agent) {
                return Some(Device {
                    family: rule.family.resolve(&caps),
                    brand: rule.brand.resolve(&caps),
                    model: rule.model.resolve(&caps),
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
