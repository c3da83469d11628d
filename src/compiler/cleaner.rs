//! 正则方言清理器
//! uap-core 规则库面向旧式 PCRE 方言编写，喂给 regex 引擎前需要做三类翻译：
//! 1. 剥离非标准的字面量转义（如 `\ `、`\h`），丢弃反斜杠保留原字符
//! 2. Perl字符类翻译为显式ASCII字符集（\d/\D/\w/\W）
//! 3. 宽界重复放宽为开界重复（{0,N}/{1,N} 在N达三位数时改写为 */+）
//! 清理只做方言翻译，不修复结构性错误——仍无法编译的规则在构建期直接报错。

use std::borrow::Cow;

/// 正则方言清理器
#[derive(Debug, Default)]
pub struct PatternCleaner;

impl PatternCleaner {
    /// 完整清理流水线，输入无需改写时零拷贝返回
    pub fn clean<'a>(&self, pattern: &'a str) -> Cow<'a, str> {
        let escaped = self.clean_invalid_escapes(pattern);
        let translated = self.translate_perl_classes(&escaped);
        let relaxed = self.relax_wide_repetitions(&translated);
        if relaxed == pattern {
            Cow::Borrowed(pattern)
        } else {
            Cow::Owned(relaxed)
        }
    }

    /// 剥离regex方言不认识的转义：合法转义保留，其余丢弃反斜杠、保留原字符
    pub fn clean_invalid_escapes(&self, pattern: &str) -> String {
        let mut cleaned = String::with_capacity(pattern.len());
        let mut is_escaping = false;

        for c in pattern.chars() {
            if is_escaping {
                if Self::is_known_escape(c) {
                    cleaned.push('\\');
                }
                cleaned.push(c);
                is_escaping = false;
            } else if c == '\\' {
                is_escaping = true;
            } else {
                cleaned.push(c);
            }
        }

        // 末尾孤立的反斜杠原样保留，让编译期报错
        if is_escaping {
            cleaned.push('\\');
        }

        cleaned
    }

    // 保留集：ASCII标点 + regex方言认识的字符类/锚点/控制字符转义字母
    fn is_known_escape(c: char) -> bool {
        c.is_ascii_punctuation()
            || matches!(
                c,
                'd' | 'D'
                    | 'w'
                    | 'W'
                    | 's'
                    | 'S'
                    | 'b'
                    | 'B'
                    | 'A'
                    | 'z'
                    | 'n'
                    | 'r'
                    | 't'
                    | 'f'
                    | 'v'
                    | 'x'
                    | 'u'
                    | 'p'
                    | 'P'
            )
    }

    /// Perl字符类翻译为显式ASCII字符集
    /// regex 的字符集允许嵌套，类内出现同样适用
    pub fn translate_perl_classes(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len());
        let mut is_escaping = false;

        for c in pattern.chars() {
            if is_escaping {
                match c {
                    'd' => out.push_str("[0-9]"),
                    'D' => out.push_str("[^0-9]"),
                    'w' => out.push_str("[A-Za-z0-9_]"),
                    'W' => out.push_str("[^A-Za-z0-9_]"),
                    _ => {
                        out.push('\\');
                        out.push(c);
                    }
                }
                is_escaping = false;
            } else if c == '\\' {
                is_escaping = true;
            } else {
                out.push(c);
            }
        }

        if is_escaping {
            out.push('\\');
        }

        out
    }

    /// 宽界重复放宽：{0,N} → *、{1,N} → +（N为三位及以上数字）
    /// 窄界重复保持原样；转义的大括号与字符集内的大括号不是重复语法，不处理
    pub fn relax_wide_repetitions(&self, pattern: &str) -> String {
        let mut out = String::new();
        let mut from = 0;
        let mut escape = false;
        let mut in_class = 0usize;
        let mut it = pattern.char_indices();

        'scan: while let Some((idx, c)) = it.next() {
            match c {
                '\\' if !escape => {
                    escape = true;
                    continue;
                }
                '[' if !escape => in_class += 1,
                ']' if !escape => in_class = in_class.saturating_sub(1),
                '{' if !escape && in_class == 0 && idx > 0 => {
                    // 只识别 {0,N} 与 {1,N} 两种形态
                    let Some((_, low)) = it.next() else {
                        break;
                    };
                    if low != '0' && low != '1' {
                        escape = false;
                        continue;
                    }
                    if !matches!(it.next(), Some((_, ','))) {
                        escape = false;
                        continue;
                    }

                    let mut digits = 0;
                    for (end, rc) in it.by_ref() {
                        match rc {
                            '}' => {
                                if digits >= 3 {
                                    out.push_str(&pattern[from..idx]);
                                    out.push(if low == '0' { '*' } else { '+' });
                                    from = end + 1;
                                }
                                escape = false;
                                continue 'scan;
                            }
                            d if d.is_ascii_digit() => digits += 1,
                            _ => {
                                escape = false;
                                continue 'scan;
                            }
                        }
                    }
                    break;
                }
                _ => {}
            }
            escape = false;
        }

        if from == 0 {
            pattern.to_string()
        } else {
            out.push_str(&pattern[from..]);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn clean(pattern: &str) -> String {
        PatternCleaner.clean(pattern).into_owned()
    }

    #[test]
    fn test_valid_pattern_is_zero_copy() {
        // 无需改写的正则零拷贝透传
        let cleaned = PatternCleaner.clean("(Firefox)/([0-9]+)");
        assert!(matches!(cleaned, Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_unknown_escapes() {
        // 非标准字面量转义丢弃反斜杠；标点与已知转义保留
        assert_eq!(clean(r"a\ b"), "a b");
        assert_eq!(clean(r"\hx"), "hx");
        assert_eq!(clean(r"\!\/"), r"\!\/");
        assert_eq!(clean(r"\.\d\s"), r"\.[0-9]\s");
    }

    #[test]
    fn test_translate_perl_classes() {
        assert_eq!(clean(r"\dx"), "[0-9]x");
        assert_eq!(clean(r"\wx"), "[A-Za-z0-9_]x");
        assert_eq!(clean(r"\Dx"), "[^0-9]x");
        assert_eq!(clean(r"[\d]x"), "[[0-9]]x");
    }

    #[test]
    fn test_keep_narrow_repetitions() {
        assert_eq!(clean(".{0,2}x"), ".{0,2}x");
        assert_eq!(clean(".{0,20}x"), ".{0,20}x");
        assert_eq!(clean("(.{1,50})"), "(.{1,50})");
        assert_eq!(clean(".{0,}"), ".{0,}");
        assert_eq!(clean(".{1,}"), ".{1,}");
    }

    #[test]
    fn test_relax_wide_repetitions() {
        assert_eq!(clean("(.{0,100})"), "(.*)");
        assert_eq!(clean(".{1,300}x"), ".+x");
    }

    #[test]
    fn test_ignore_non_repetition_braces() {
        // 转义的大括号不是重复语法
        assert_eq!(clean(r"\{1,200}"), r"\{1,200}");
        // 字符集内的大括号不是重复语法
        assert_eq!(clean("[.{1,100}]"), "[.{1,100}]");
    }
}
