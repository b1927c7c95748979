use mimic_core::{CommunityId, ExportError, KnowledgeBaseError, MimicError};

#[test]
fn not_found_names_the_community() {
    let err = MimicError::NotFound {
        community: CommunityId(42),
    };
    assert_eq!(err.to_string(), "community not found: 42");
    assert!(!err.is_transient());
}

#[test]
fn export_errors_fold_into_external_service() {
    let err: MimicError = ExportError::Status {
        status: 503,
        body: "busy".to_string(),
    }
    .into();
    assert!(matches!(err, MimicError::ExternalService(_)));
    assert!(err.is_transient());
    assert!(err.to_string().contains("HTTP 503"));
}

#[test]
fn knowledge_base_errors_fold_in() {
    let err: MimicError = KnowledgeBaseError::OrderMismatch {
        found: 1,
        expected: 2,
    }
    .into();
    assert!(matches!(err, MimicError::KnowledgeBase(_)));
    assert!(err.to_string().contains("order 1"));
}

#[test]
fn serde_errors_fold_in() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: MimicError = parse.into();
    assert!(matches!(err, MimicError::SerializationError(_)));
}
