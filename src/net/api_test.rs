use super::*;

#[test]
fn join_community_endpoint_formats_expected_path() {
    assert_eq!(join_community_endpoint("/entrar_comunidade/", "12"), "/entrar_comunidade/12/");
    assert_eq!(join_community_endpoint("/entrar_comunidade", "7"), "/entrar_comunidade/7/");
}

#[test]
fn classify_status_accepts_any_2xx() {
    assert_eq!(classify_status(200, String::new), Ok(()));
    assert_eq!(classify_status(204, String::new), Ok(()));
}

#[test]
fn classify_status_rejects_non_2xx_with_body() {
    assert_eq!(
        classify_status(403, || "CSRF verification failed".to_owned()),
        Err(ActionFailure::ServerRejected { status: 403, body: "CSRF verification failed".to_owned() })
    );
    assert!(classify_status(500, String::new).is_err());
    assert!(classify_status(302, String::new).is_err());
}

#[test]
fn community_status_outcome_requires_ok_status() {
    let ok = CreateCommunityResponse { status: "ok".to_owned() };
    assert_eq!(community_status_outcome(200, ok.clone()), Ok(ok));
    let other = CreateCommunityResponse { status: "duplicada".to_owned() };
    assert_eq!(
        community_status_outcome(200, other),
        Err(ActionFailure::ServerRejected { status: 200, body: "duplicada".to_owned() })
    );
}

#[test]
fn alert_message_matches_failure_kind() {
    let network = ActionFailure::NetworkFailure("offline".to_owned());
    assert_eq!(network.alert_message("apagar conversas"), "Erro de rede ao apagar conversas.");
    let rejected = ActionFailure::ServerRejected { status: 400, body: "lista vazia".to_owned() };
    assert_eq!(rejected.alert_message("apagar"), "Erro ao apagar: lista vazia");
}

#[cfg(not(feature = "hydrate"))]
mod native_stubs {
    use super::*;
    use futures::executor::block_on;

    fn unavailable<T: std::fmt::Debug>(result: Result<T, ActionFailure>) -> bool {
        matches!(result, Err(ActionFailure::NetworkFailure(_)))
    }

    #[test]
    fn calls_report_network_failure_outside_browser() {
        let config = ClientConfig::default();
        let token = CsrfToken::new("tok");
        assert!(unavailable(block_on(delete_conversations(&config, &token, &["1".to_owned()]))));
        let group = CreateGroupRequest { name: "g".into(), members: vec![], goals: vec![] };
        assert!(unavailable(block_on(create_group(&config, &token, &group))));
        assert!(unavailable(block_on(join_community(&config, &token, "3"))));
        let community = CreateCommunityRequest { nome: "c".into(), cor: "#000000".into() };
        assert!(unavailable(block_on(create_community(&config, &token, &community))));
    }
}
