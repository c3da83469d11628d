//! 规则模块：原始规则数据模型与本地规则库加载

pub mod loader;
pub mod model;

pub use loader::RuleLoader;
pub use model::{ClientRule, DeviceRule, OsRule, RuleLibrary};
