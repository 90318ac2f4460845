use ini_doc::{from_str, from_str_with_config, Configuration, StructuralErrorKind};

#[test]
fn test_value_keeps_everything_after_first_separator() {
    let doc = from_str("[urls]\nhome = http://example.com/?a=b&c=d\n").unwrap();
    assert_eq!(
        doc.get_key_path("urls.home", '.'),
        Some("http://example.com/?a=b&c=d")
    );
}

#[test]
fn test_empty_value() {
    let doc = from_str("[s]\nempty =\n").unwrap();
    assert_eq!(doc.get_key_path("s.empty", '.'), Some(""));
    assert_eq!(doc.get_key_path("s.absent", '.'), None);
}

#[test]
fn test_whitespace_handling() {
    let input = "  [  spaced name  ]  \n   key   =   value with spaces   \n";

    let doc = from_str(input).unwrap();
    let section = doc.section("spaced name").unwrap();
    assert_eq!(
        section.properties().value("key"),
        Some("value with spaces")
    );

    let config = Configuration::new()
        .with_trim_sections(false)
        .with_trim_properties(false);
    let doc = from_str_with_config(input, &config).unwrap();
    let section = doc.section("  spaced name  ").unwrap();
    assert_eq!(
        section.properties().value("   key   "),
        Some("   value with spaces   ")
    );
}

#[test]
fn test_blank_lines_and_indentation_are_ignored() {
    let doc = from_str("\n\n   \n\t[s]\n\n\tk = v\n\n").unwrap();
    assert_eq!(doc.get_key_path("s.k", '.'), Some("v"));
}

#[test]
fn test_hash_and_semicolon_comments() {
    let doc = from_str("[s]\n; one\n# two\nk = v\n").unwrap();
    assert_eq!(
        doc.section("s").unwrap().properties().get("k").unwrap().comments(),
        ["one", "two"]
    );
}

#[test]
fn test_inline_comments() {
    let config = Configuration::new().with_allow_inline_comments(true);
    let input = "; above\n[server] ; main\nport = 8080 # default port\n";
    let doc = from_str_with_config(input, &config).unwrap();

    let server = doc.section("server").unwrap();
    assert_eq!(server.comments(), ["above", "main"]);
    let port = server.properties().get("port").unwrap();
    assert_eq!(port.value(), "8080");
    assert_eq!(port.comments(), ["default port"]);

    // the same text without the option keeps the comment in the value
    let plain = from_str("[server]\nport = 8080 # default port\n").unwrap();
    assert_eq!(
        plain.get_key_path("server.port", '.'),
        Some("8080 # default port")
    );
    // and rejects the trailing text after a header
    let err = from_str("[server] ; main\n").unwrap_err();
    assert_eq!(err.kind(), Some(StructuralErrorKind::InvalidLine));
}

#[test]
fn test_custom_recognition_tokens() {
    let config = Configuration::new()
        .with_comment_strings(&["--", "//"])
        .with_section_delimiters('{', '}')
        .with_key_value_assignment(':');

    let input = "-- first\n{section}\n// second\nkey: a:b\n";
    let doc = from_str_with_config(input, &config).unwrap();
    let section = doc.section("section").unwrap();
    assert_eq!(section.comments(), ["first"]);
    let key = section.properties().get("key").unwrap();
    assert_eq!(key.value(), "a:b");
    assert_eq!(key.comments(), ["second"]);

    // default tokens are no longer recognized
    let err = from_str_with_config("[section]\n", &config).unwrap_err();
    assert_eq!(err.kind(), Some(StructuralErrorKind::InvalidLine));
}

#[test]
fn test_structural_errors_report_position() {
    let cases = [
        ("[a]\n[a]\n", 2, StructuralErrorKind::DuplicateSection),
        ("[a]\nk=1\n\nk=2\n", 4, StructuralErrorKind::DuplicateProperty),
        ("[a]\n[]\n", 2, StructuralErrorKind::InvalidLine),
        ("[a]\n= v\n", 2, StructuralErrorKind::InvalidLine),
    ];
    for (input, line, kind) in cases {
        let err = from_str(input).unwrap_err();
        assert_eq!(err.line(), Some(line), "input {:?}", input);
        assert_eq!(err.kind(), Some(kind), "input {:?}", input);
    }

    let config = Configuration::new().with_allow_keys_without_section(false);
    let err = from_str_with_config("; c\nk = v\n", &config).unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.kind(), Some(StructuralErrorKind::PropertyWithoutSection));
    assert!(err.to_string().contains("k = v"));
}

#[test]
fn test_trailing_comments_are_dropped() {
    let doc = from_str("[s]\nk = v\n; end of file\n").unwrap();
    let section = doc.section("s").unwrap();
    assert!(section.comments().is_empty());
    assert!(section.properties().get("k").unwrap().comments().is_empty());
}
