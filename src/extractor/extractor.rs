//! 顶层提取器：聚合三个域的提取器，一次调用产出完整画像

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::client::{Client, ClientExtractor};
use super::device::{Device, DeviceExtractor};
use super::os::{Os, OsExtractor};
use crate::error::RsuaResult;
use crate::rule::{RuleLibrary, RuleLoader};

/// 一次提取的完整画像
/// 三个域相互独立，任一域未命中以 None 表达，互不影响
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaProfile {
    pub client: Option<Client>,
    pub os: Option<Os>,
    pub device: Option<Device>,
}

/// User-Agent 提取器
#[derive(Debug, Clone)]
pub struct UaExtractor {
    client: ClientExtractor,
    os: OsExtractor,
    device: DeviceExtractor,
}

impl UaExtractor {
    /// 从规则库构建：三个域全部急编译，任一条规则失败则整体失败
    pub fn from_library(library: RuleLibrary) -> RsuaResult<Self> {
        Ok(Self {
            client: ClientExtractor::from_rules(library.user_agent_parsers)?,
            os: OsExtractor::from_rules(library.os_parsers)?,
            device: DeviceExtractor::from_rules(library.device_parsers)?,
        })
    }

    /// 从本地规则文件构建
    pub fn from_file<P: AsRef<Path>>(path: P) -> RsuaResult<Self> {
        Self::from_library(RuleLoader::load_from_file(path)?)
    }

    /// 对同一User-Agent串依次执行三个域的提取
    pub fn extract(&self, user_agent: &str) -> UaProfile {
        UaProfile {
            client: self.client.extract(user_agent),
            os: self.os.extract(user_agent),
            device: self.device.extract(user_agent),
        }
    }

    /// 单域提取：浏览器
    pub fn extract_client(&self, user_agent: &str) -> Option<Client> {
        self.client.extract(user_agent)
    }

    /// 单域提取：操作系统
    pub fn extract_os(&self, user_agent: &str) -> Option<Os> {
        self.os.extract(user_agent)
    }

    /// 单域提取：设备
    pub fn extract_device(&self, user_agent: &str) -> Option<Device> {
        self.device.extract(user_agent)
    }
}
