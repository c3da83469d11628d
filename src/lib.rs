//! rsuaparser - 规则驱动的 User-Agent 识别引擎
//! 将 User-Agent 串识别为浏览器/操作系统/设备三类结构化结果。
//! 全部识别逻辑由有序规则表（uap-core regexes.yaml 形态）驱动，
//! 顺序即优先级、先到先得，无任何逐浏览器硬编码逻辑。

// 导出全局错误类型
pub use self::error::{RsuaResult, RsuaparserError};

// 导出规则模块核心接口
pub use self::rule::{ClientRule, DeviceRule, OsRule, RuleLibrary, RuleLoader};

// 导出编译模块核心接口
pub use self::compiler::{CompiledPattern, PatternCleaner, PatternCompiler};

// 导出提取模块核心接口（含免实例调用的简化接口）
pub use self::extractor::{
    Client, ClientExtractor, Device, DeviceExtractor, Os, OsExtractor, UaExtractor, UaProfile,
    global::{
        extract_client, extract_device, extract_os, extract_user_agent, init_global_extractor,
        init_global_extractor_from_file,
    },
};

// 声明所有子模块
pub mod compiler;
pub mod error;
pub mod extractor;
pub mod rule;
