//! 提取模块：按域划分的提取器与结构化识别结果

pub mod client;
pub mod device;
pub mod extractor;
pub mod global;
pub mod os;

pub use client::{Client, ClientExtractor};
pub use device::{Device, DeviceExtractor};
pub use extractor::{UaExtractor, UaProfile};
pub use os::{Os, OsExtractor};
