use super::*;

#[test]
fn defaults_match_server_routes() {
    let config = ClientConfig::default();
    assert_eq!(config.contrast_threshold, 150.0);
    assert_eq!(config.csrf_header, "X-CSRFToken");
    assert_eq!(config.delete_conversations_path, "/chat/delete_conversations/");
    assert_eq!(config.create_group_path, "/chat/create_group/");
    assert_eq!(config.join_community_prefix, "/entrar_comunidade/");
    assert_eq!(config.logout_path, "/logout/");
    assert_eq!(config.composer_max_height_px, 160);
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let config = ClientConfig::from_json(r#"{ "contrast_threshold": 0.5 }"#).unwrap();
    assert_eq!(config.contrast_threshold, 0.5);
    assert_eq!(config.csrf_meta_name, DEFAULT_CSRF_META_NAME);
    assert_eq!(config.create_community_path, DEFAULT_CREATE_COMMUNITY_PATH);
}

#[test]
fn from_json_rejects_malformed_documents() {
    let err = ClientConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_negative_threshold() {
    let err = ClientConfig::from_json(r#"{ "contrast_threshold": -1.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn from_json_rejects_empty_endpoint() {
    let err = ClientConfig::from_json(r#"{ "create_group_path": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("create_group_path")));
}

#[test]
fn log_level_falls_back_to_info() {
    let mut config = ClientConfig::default();
    assert_eq!(config.log_level(), log::Level::Info);
    config.log_level = "debug".to_owned();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "chatty".to_owned();
    assert_eq!(config.log_level(), log::Level::Info);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_returns_defaults_outside_browser() {
    assert_eq!(ClientConfig::from_document(), ClientConfig::default());
}
