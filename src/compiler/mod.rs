//! 编译模块：规则正则的方言清理、编译与字段解析器构建

pub mod cleaner;
pub mod compiler;
pub mod pattern;
pub mod resolver;

pub use cleaner::PatternCleaner;
pub use compiler::PatternCompiler;
pub use pattern::CompiledPattern;
pub use resolver::{
    BrowserFamilyResolver, LiteralFieldResolver, OptionalFieldResolver, RequiredFieldResolver,
};
