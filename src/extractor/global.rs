//! 全局提取器单例管理

use once_cell::sync::OnceCell;
use std::path::Path;

use super::client::Client;
use super::device::Device;
use super::extractor::{UaExtractor, UaProfile};
use super::os::Os;
use crate::error::{RsuaResult, RsuaparserError};
use crate::rule::RuleLibrary;

/// 全局提取器实例
static GLOBAL_EXTRACTOR: OnceCell<UaExtractor> = OnceCell::new();

/// 从规则库初始化全局提取器（重复初始化报错）
pub fn init_global_extractor(library: RuleLibrary) -> RsuaResult<()> {
    let extractor = UaExtractor::from_library(library)?;
    GLOBAL_EXTRACTOR
        .set(extractor)
        .map_err(|_| RsuaparserError::ExtractorAlreadyInitialized)
}

/// 从本地规则文件初始化全局提取器
pub fn init_global_extractor_from_file<P: AsRef<Path>>(path: P) -> RsuaResult<()> {
    let extractor = UaExtractor::from_file(path)?;
    GLOBAL_EXTRACTOR
        .set(extractor)
        .map_err(|_| RsuaparserError::ExtractorAlreadyInitialized)
}

/// 获取全局提取器
pub(crate) fn get_global_extractor() -> RsuaResult<&'static UaExtractor> {
    GLOBAL_EXTRACTOR
        .get()
        .ok_or(RsuaparserError::ExtractorNotInitialized)
}

// 对外暴露的简化接口（免持有提取器实例的调用方式）

/// 完整画像提取
pub fn extract_user_agent(user_agent: &str) -> RsuaResult<UaProfile> {
    Ok(get_global_extractor()?.extract(user_agent))
}

/// 浏览器域提取
pub fn extract_client(user_agent: &str) -> RsuaResult<Option<Client>> {
    Ok(get_global_extractor()?.extract_client(user_agent))
}

/// 操作系统域提取
pub fn extract_os(user_agent: &str) -> RsuaResult<Option<Os>> {
    Ok(get_global_extractor()?.extract_os(user_agent))
}

/// 设备域提取
pub fn extract_device(user_agent: &str) -> RsuaResult<Option<Device>> {
    Ok(get_global_extractor()?.extract_device(user_agent))
}
