#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Percent-encoding policy tests, cross-checked against independent
/// decoders (`percent-encoding`) and parsers (`url`)
use urlforge::UrlBuilder;

fn query_value(input: &str) -> String {
    let mut builder = UrlBuilder::new();
    let url = builder.append_query_param("q", input).build();
    url.strip_prefix("?q=").unwrap().to_string()
}

#[test]
fn test_space_is_percent_twenty_not_plus() {
    assert_eq!(query_value("hello world"), "hello%20world");
}

#[test]
fn test_unreserved_never_encoded() {
    let unreserved = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.~";
    assert_eq!(query_value(unreserved), unreserved);
}

#[test]
fn test_every_other_ascii_byte_encoded() {
    for byte in 0u8..=0x7f {
        let c = char::from(byte);
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~') {
            continue;
        }
        let encoded = query_value(&c.to_string());
        assert_eq!(encoded, format!("%{byte:02X}"), "byte 0x{byte:02X}");
    }
}

#[test]
fn test_multi_byte_characters_encoded_per_byte() {
    assert_eq!(query_value("é"), "%C3%A9");
    assert_eq!(query_value("日本"), "%E6%97%A5%E6%9C%AC");
    assert_eq!(query_value("☃"), "%E2%98%83");
}

#[test]
fn test_structural_separators_escaped_in_values() {
    // A value full of URL syntax cannot break the query structure
    assert_eq!(
        query_value("a=b&c?d#e/f"),
        "a%3Db%26c%3Fd%23e%2Ff"
    );
}

#[test]
fn test_decode_round_trip() {
    let inputs = [
        "plain",
        "hello world",
        "50% off & more",
        "key=value&other=thing",
        "Füße im Schnee ☃",
        "%20 already encoded",
    ];
    for input in inputs {
        let encoded = query_value(input);
        let decoded = percent_encoding::percent_decode_str(&encoded)
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, input);
    }
}

#[test]
fn test_only_query_values_are_encoded() {
    // Scheme, hostname, path and fragment pass through untouched
    let mut builder = UrlBuilder::new();
    let url = builder
        .set_scheme("https")
        .set_hostname("exämple.com")
        .append_path_segment("path with space")
        .set_fragment("frag ment")
        .build();
    assert_eq!(url, "https://exämple.com/path with space#frag ment");
}

#[test]
fn test_output_parses_with_url_crate() {
    let mut builder = UrlBuilder::new();
    let built = builder
        .set_scheme("https")
        .set_hostname("example.com")
        .set_port(8080)
        .append_path_segment("a")
        .append_path_segment("b")
        .append_query_param("q", "hello world")
        .set_fragment("top")
        .build();

    let parsed = url::Url::parse(&built).unwrap();
    assert_eq!(parsed.scheme(), "https");
    assert_eq!(parsed.host_str(), Some("example.com"));
    assert_eq!(parsed.port(), Some(8080));
    assert_eq!(parsed.path(), "/a/b");
    assert_eq!(parsed.query(), Some("q=hello%20world"));
    assert_eq!(parsed.fragment(), Some("top"));
}

#[test]
fn test_url_crate_decodes_query_back() {
    let mut builder = UrlBuilder::new();
    let built = builder
        .set_scheme("https")
        .set_hostname("example.com")
        .append_query_param("name", "François Quessé")
        .append_query_param("math", "1+1=2")
        .build();

    let parsed = url::Url::parse(&built).unwrap();
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("name".to_string(), "François Quessé".to_string()),
            ("math".to_string(), "1+1=2".to_string()),
        ]
    );
}
