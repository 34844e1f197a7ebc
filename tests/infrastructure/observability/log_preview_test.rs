use tldr_server::infrastructure::observability::log_preview;

#[test]
fn given_blank_text_when_previewing_then_returns_empty_marker() {
    assert_eq!(log_preview(""), "[EMPTY]");
    assert_eq!(log_preview(" \n\t "), "[EMPTY]");
}

#[test]
fn given_short_text_when_previewing_then_returns_trimmed_text() {
    assert_eq!(log_preview("  A short article.  "), "A short article.");
}

#[test]
fn given_long_text_when_previewing_then_truncates_with_total_length() {
    let text = "a".repeat(150);

    let preview = log_preview(&text);

    assert!(preview.starts_with(&"a".repeat(100)));
    assert!(preview.ends_with("... (150 chars total)"));
}

#[test]
fn given_long_multibyte_text_when_previewing_then_does_not_split_characters() {
    let text = "ü".repeat(150);

    let preview = log_preview(&text);

    assert!(preview.starts_with(&"ü".repeat(100)));
    assert!(preview.contains("(150 chars total)"));
}

#[test]
fn given_credentials_when_previewing_then_redacts_every_occurrence() {
    let text = "token=abc123 then token=def456 and Bearer sk-xyz";

    let preview = log_preview(text);

    assert!(!preview.contains("abc123"));
    assert!(!preview.contains("def456"));
    assert!(!preview.contains("sk-xyz"));
    assert!(preview.contains("token=[REDACTED] then token=[REDACTED]"));
    assert!(preview.contains("Bearer [REDACTED]"));
}

#[test]
fn given_query_string_secret_when_previewing_then_keeps_following_parameters() {
    let preview = log_preview("https://example.com/?api_key=hunter2&page=3");

    assert_eq!(preview, "https://example.com/?api_key=[REDACTED]&page=3");
}
