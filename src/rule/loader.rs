//! 规则加载管理器
//! 负责从本地 YAML/JSON 规则文件或文本加载规则库。
//! 网络拉取与规则库更新不在本引擎职责内，由调用方自理。

use std::fs;
use std::path::Path;

use log::debug;

use super::model::RuleLibrary;
use crate::error::{RsuaResult, RsuaparserError};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 从本地规则文件加载（按扩展名分发：yaml/yml/json）
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RsuaResult<RuleLibrary> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        // 先校验格式再读文件，格式不支持时不产生IO
        let lib = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?)?,
            "json" => Self::from_json_str(&fs::read_to_string(path)?)?,
            other => {
                return Err(RsuaparserError::RuleFormatError(format!(
                    "unknown extension `{}` for {}",
                    other,
                    path.display()
                )))
            }
        };

        // 文件解析成功但一条规则都没有，基本可断定加载了错误的文件
        if lib.rule_count() == 0 {
            return Err(RsuaparserError::RuleLoadError(format!(
                "no rules found in {}",
                path.display()
            )));
        }

        Ok(lib)
    }

    /// 从YAML文本解析规则库（uap-core regexes.yaml 原生格式）
    pub fn from_yaml_str(content: &str) -> RsuaResult<RuleLibrary> {
        let lib: RuleLibrary = serde_yaml::from_str(content)?;
        Self::debug_count_rules(&lib);
        Ok(lib)
    }

    /// 从JSON文本解析规则库（regexes.yaml 的JSON转换产物）
    pub fn from_json_str(content: &str) -> RsuaResult<RuleLibrary> {
        let lib: RuleLibrary = serde_json::from_str(content)?;
        Self::debug_count_rules(&lib);
        Ok(lib)
    }

    // ===== 规则数量统计（debug日志） =====
    fn debug_count_rules(lib: &RuleLibrary) {
        debug!("===== 规则库加载统计 =====");
        debug!("  客户端规则数：{}", lib.user_agent_parsers.len());
        debug!("  操作系统规则数：{}", lib.os_parsers.len());
        debug!("  设备规则数：{}", lib.device_parsers.len());
        debug!("  规则总数：{}", lib.rule_count());
    }
}
