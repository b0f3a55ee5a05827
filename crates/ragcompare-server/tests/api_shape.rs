//! API shape tests — validates that the JSON surface matches what the
//! comparison page (assets/index.html) expects.
//!
//! These assert field names and types on the response shapes directly; the
//! handlers themselves are unit-tested next to their code.

/// Both answer endpoints return { answer, model, grounded, duration }.
#[test]
fn test_answer_response_shape() {
    let response = serde_json::json!({
        "answer": "Retrieval-augmented generation grounds answers in documents.",
        "model": "gpt-4o-mini",
        "grounded": true,
        "duration": 1342,
    });

    assert!(response["answer"].is_string());
    assert!(response["model"].is_string());
    assert!(response["grounded"].is_boolean());
    assert!(response["duration"].is_number());
}

/// Error responses carry a single error string the page renders inline.
#[test]
fn test_error_response_shape() {
    let response = serde_json::json!({
        "error": "API error 429: rate limit exceeded",
    });

    assert!(response["error"].is_string());
}

/// The status response exposes identifiers and booleans, never keys.
#[test]
fn test_status_response_shape() {
    let status = serde_json::json!({
        "deployment": "gpt-4o-mini",
        "apiVersion": "2024-12-01-preview",
        "indexName": "docs-index",
        "openaiEndpointConfigured": true,
        "searchEndpointConfigured": true,
    });

    assert!(status["deployment"].is_string());
    assert!(status["apiVersion"].is_string());
    assert!(status["indexName"].is_string());
    assert!(status["openaiEndpointConfigured"].is_boolean());
    assert!(status["searchEndpointConfigured"].is_boolean());
    assert!(status.get("apiKey").is_none());
    assert!(status.get("adminKey").is_none());
}
