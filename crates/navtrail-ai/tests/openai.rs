use navtrail_ai::error::AiError;
use navtrail_ai::openai::parse_completion;

#[test]
fn parses_first_choice_content() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"Visit Porto."}}]}"#;
    assert_eq!(parse_completion(200, body).unwrap(), "Visit Porto.");
}

#[test]
fn error_status_surfaces_provider_message() {
    let body = r#"{"error":{"message":"Invalid API key"}}"#;
    let err = parse_completion(401, body).unwrap_err();
    assert!(matches!(err, AiError::Invocation(ref m) if m.contains("Invalid API key")));
}

#[test]
fn empty_choices_is_a_parse_error() {
    let err = parse_completion(200, r#"{"choices":[]}"#).unwrap_err();
    assert!(matches!(err, AiError::ResponseParse(_)));
}

#[test]
fn non_json_body_is_a_parse_error() {
    let err = parse_completion(200, "<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, AiError::ResponseParse(_)));
}
