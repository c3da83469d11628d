//! 规则数据模型定义
//! 仅存储原始规则数据，无任何业务逻辑，支持序列化/反序列化。
//! 字段命名与 uap-core regexes.yaml 保持一致，官方规则库可直接反序列化。

use serde::{Deserialize, Serialize};

/// 浏览器（客户端）规则定义
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientRule {
    /// 匹配User-Agent的正则，命中即应用本条规则
    pub regex: String,
    /// 正则标志位（"i"表示大小写不敏感），缺省为大小写敏感
    #[serde(default)]
    pub regex_flag: Option<String>,
    /// family替换模板（仅支持$1受限引用）；缺省时取第1捕获组
    #[serde(default)]
    pub family_replacement: Option<String>,
    /// 主版本号替换值；缺省时取第2捕获组
    #[serde(default)]
    pub v1_replacement: Option<String>,
    /// 次版本号替换值；缺省时取第3捕获组
    #[serde(default)]
    pub v2_replacement: Option<String>,
    /// 补丁版本号替换值；缺省时取第4捕获组
    #[serde(default)]
    pub v3_replacement: Option<String>,
    /// 次补丁版本号替换值；缺省时取第5捕获组
    #[serde(default)]
    pub v4_replacement: Option<String>,
}

/// 操作系统规则定义
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OsRule {
    pub regex: String,
    #[serde(default)]
    pub regex_flag: Option<String>,
    /// family替换模板（支持完整$k模板）；缺省时取第1捕获组
    #[serde(default)]
    pub os_replacement: Option<String>,
    /// 主版本号替换模板；缺省时取第2捕获组
    #[serde(default)]
    pub os_v1_replacement: Option<String>,
    /// 次版本号替换模板；缺省时取第3捕获组
    #[serde(default)]
    pub os_v2_replacement: Option<String>,
    /// 补丁版本号替换模板；缺省时取第4捕获组
    #[serde(default)]
    pub os_v3_replacement: Option<String>,
    /// 次补丁版本号替换模板；缺省时取第5捕获组
    #[serde(default)]
    pub os_v4_replacement: Option<String>,
}

/// 设备规则定义
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceRule {
    pub regex: String,
    #[serde(default)]
    pub regex_flag: Option<String>,
    /// 设备family替换模板（支持完整$k模板）；缺省时取第1捕获组
    #[serde(default)]
    pub device_replacement: Option<String>,
    /// 品牌替换模板；缺省即无值，不回退捕获组
    #[serde(default)]
    pub brand_replacement: Option<String>,
    /// 型号替换模板；缺省时取第1捕获组
    #[serde(default)]
    pub model_replacement: Option<String>,
}

/// 完整规则库：三个域各自的有序规则表
/// 表内顺序即规则优先级，加载与构建全程原样保留，不做任何重排
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleLibrary {
    #[serde(default)]
    pub user_agent_parsers: Vec<ClientRule>,
    #[serde(default)]
    pub os_parsers: Vec<OsRule>,
    #[serde(default)]
    pub device_parsers: Vec<DeviceRule>,
}

impl RuleLibrary {
    /// 三个域的规则总条数
    pub fn rule_count(&self) -> usize {
        self.user_agent_parsers.len() + self.os_parsers.len() + self.device_parsers.len()
    }
}

// ======== 原始元组构造（构建API的最小输入形态） ========

/// 客户端规则元组：(regex, regex_flag, family, v1, v2, v3, v4)
pub type ClientRuleTuple = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// 操作系统规则元组：(regex, regex_flag, family, v1, v2, v3, v4)
pub type OsRuleTuple = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// 设备规则元组：(regex, regex_flag, device, brand, model)
pub type DeviceRuleTuple = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

impl From<ClientRuleTuple> for ClientRule {
    fn from((regex, regex_flag, family, v1, v2, v3, v4): ClientRuleTuple) -> Self {
        Self {
            regex,
            regex_flag,
            family_replacement: family,
            v1_replacement: v1,
            v2_replacement: v2,
            v3_replacement: v3,
            v4_replacement: v4,
        }
    }
}

impl From<OsRuleTuple> for OsRule {
    fn from((regex, regex_flag, family, v1, v2, v3, v4): OsRuleTuple) -> Self {
        Self {
            regex,
            regex_flag,
            os_replacement: family,
            os_v1_replacement: v1,
            os_v2_replacement: v2,
            os_v3_replacement: v3,
            os_v4_replacement: v4,
        }
    }
}

impl From<DeviceRuleTuple> for DeviceRule {
    fn from((regex, regex_flag, device, brand, model): DeviceRuleTuple) -> Self {
        Self {
            regex,
            regex_flag,
            device_replacement: device,
            brand_replacement: brand,
            model_replacement: model,
        }
    }
}
