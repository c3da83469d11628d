//! 端到端集成测试：以内嵌的微型规则库驱动完整提取流程
//! 规则条目取自 uap-core regexes.yaml 的典型形态，覆盖三个域的
//! 字面量覆盖、捕获回退、$k模板与大小写不敏感匹配

use rsuaparser::{
    Client, ClientExtractor, ClientRule, Device, Os, RsuaparserError, RuleLibrary, RuleLoader,
    UaExtractor,
};

const MINI_RULES: &str = r#"
user_agent_parsers:
  - regex: '(Opera)/(\d+)\.(\d+)'
  - regex: '(Firefox)/(\d+)\.(\d+)(?:\.(\d+))?'
  - regex: '(Chromium)/(\d+)\.(\d+)'
    family_replacement: 'Chrome'
  - regex: '(Chrome)/(\d+)\.(\d+)'
os_parsers:
  - regex: '(Windows NT) (\d+)\.(\d+)'
    os_replacement: 'Windows'
  - regex: '(iPhone OS|CPU OS) (\d+)_(\d+)'
    os_replacement: 'iOS'
  - regex: '(Android) (\d+)(?:\.(\d+))?'
device_parsers:
  - regex: 'sm-(\w+)'
    regex_flag: 'i'
    device_replacement: 'Samsung $1'
    brand_replacement: 'Samsung'
    model_replacement: '$1'
  - regex: '(iPhone)'
    device_replacement: 'iPhone'
    brand_replacement: 'Apple'
    model_replacement: 'iPhone'
"#;

const FIREFOX_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0";
const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Mobile/15E148 Safari/604.1";
const GALAXY_UA: &str = "Mozilla/5.0 (Linux; Android 10; SM-G960F) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/89.0.4389.72 Mobile Safari/537.36";

fn build_extractor() -> UaExtractor {
    let _ = env_logger::builder().is_test(true).try_init();
    UaExtractor::from_library(RuleLoader::from_yaml_str(MINI_RULES).unwrap()).unwrap()
}

#[test]
fn test_full_profile_extraction() {
    let extractor = build_extractor();

    let profile = extractor.extract(FIREFOX_UA);
    assert_eq!(
        profile.client,
        Some(Client {
            family: "Firefox".to_string(),
            major: Some("89".to_string()),
            minor: Some("0".to_string()),
            patch: None,
            patch_minor: None,
        })
    );
    assert_eq!(
        profile.os,
        Some(Os {
            family: "Windows".to_string(),
            major: Some("10".to_string()),
            minor: Some("0".to_string()),
            patch: None,
            patch_minor: None,
        })
    );
    // 设备域未命中不影响其余两个域
    assert_eq!(profile.device, None);
}

#[test]
fn test_literal_family_override_is_capture_independent() {
    // family模板为纯字面量时，结果与捕获内容无关
    let extractor = build_extractor();
    let client = extractor
        .extract_client("Mozilla/5.0 (X11; Linux x86_64) Chromium/90.0.4430.93")
        .unwrap();
    assert_eq!(client.family, "Chrome");
    assert_eq!(client.major.as_deref(), Some("90"));
}

#[test]
fn test_case_insensitive_device_rule_keeps_subject_casing() {
    let extractor = build_extractor();
    let device = extractor.extract_device(GALAXY_UA).unwrap();
    assert_eq!(
        device,
        Device {
            family: "Samsung G960F".to_string(),
            brand: Some("Samsung".to_string()),
            model: Some("G960F".to_string()),
        }
    );
}

#[test]
fn test_absence_propagates_to_none() {
    // Android规则缺少次版本捕获时，minor为 None 而非空串
    let extractor = build_extractor();
    let os = extractor.extract_os(GALAXY_UA).unwrap();
    assert_eq!(os.family, "Android");
    assert_eq!(os.major.as_deref(), Some("10"));
    assert_eq!(os.minor, None);
}

#[test]
fn test_unmatched_subject_yields_none_and_caller_applies_other() {
    let extractor = build_extractor();
    let profile = extractor.extract("curl/7.64.1");
    assert_eq!(profile.client, None);
    assert_eq!(profile.os, None);
    assert_eq!(profile.device, None);

    // "Other"兜底是调用方策略，引擎本身不做替换
    let client = profile.client.unwrap_or_else(Client::other);
    assert_eq!(client.family, "Other");
    assert_eq!(client.major, None);
}

#[test]
fn test_first_match_wins() {
    // 两条规则都能命中时，结果必须来自先声明的那条
    let rules = vec![
        ClientRule::from((
            r"(Opera)/(\d+)".to_string(),
            None,
            None,
            None,
            None,
            None,
            None,
        )),
        ClientRule::from((
            r"(Opera)/(\d+)\.(\d+)".to_string(),
            None,
            None,
            None,
            None,
            None,
            None,
        )),
    ];
    let extractor = ClientExtractor::from_rules(rules).unwrap();

    let client = extractor.extract("Opera/9.1").unwrap();
    assert_eq!(client.family, "Opera");
    assert_eq!(client.major.as_deref(), Some("9"));
    // 后一条规则本可捕获到minor，但不应被执行
    assert_eq!(client.minor, None);
}

#[test]
fn test_extraction_is_deterministic() {
    let extractor = build_extractor();
    let first = extractor.extract(IPHONE_UA);
    for _ in 0..8 {
        assert_eq!(extractor.extract(IPHONE_UA), first);
    }
}

#[test]
fn test_extractor_is_shareable_across_threads() {
    let extractor = build_extractor();
    let expected = extractor.extract(GALAXY_UA);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..16 {
                    assert_eq!(extractor.extract(GALAXY_UA), expected);
                }
            });
        }
    });
}

#[test]
fn test_build_rejects_whole_library_on_bad_regex() {
    // 规则库中任一条目非法即整体拒绝，不产出半可用的提取器
    let mut library = RuleLoader::from_yaml_str(MINI_RULES).unwrap();
    library.user_agent_parsers.push(ClientRule {
        regex: "(unclosed".to_string(),
        ..Default::default()
    });

    let err = UaExtractor::from_library(library).unwrap_err();
    assert!(matches!(err, RsuaparserError::RegexCompileError { .. }));
}

#[test]
fn test_build_rejects_unknown_flag() {
    let library = RuleLibrary {
        device_parsers: vec![rsuaparser::DeviceRule {
            regex: r"(iPhone)".to_string(),
            regex_flag: Some("g".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let err = UaExtractor::from_library(library).unwrap_err();
    match err {
        RsuaparserError::UnknownRegexFlag { flag, .. } => assert_eq!(flag, "g"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_global_extractor_lifecycle() {
    // 初始化前调用报未初始化错误
    assert!(matches!(
        rsuaparser::extract_user_agent(FIREFOX_UA),
        Err(RsuaparserError::ExtractorNotInitialized)
    ));

    let library = RuleLoader::from_yaml_str(MINI_RULES).unwrap();
    rsuaparser::init_global_extractor(library.clone()).unwrap();

    let profile = rsuaparser::extract_user_agent(FIREFOX_UA).unwrap();
    assert_eq!(profile.client.unwrap().family, "Firefox");
    assert_eq!(
        rsuaparser::extract_os(FIREFOX_UA).unwrap().unwrap().family,
        "Windows"
    );

    // 重复初始化报错
    assert!(matches!(
        rsuaparser::init_global_extractor(library),
        Err(RsuaparserError::ExtractorAlreadyInitialized)
    ));
}
