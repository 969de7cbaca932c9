//! REST API helpers for the chat and community endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ActionFailure::NetworkFailure`] since
//! these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ActionFailure>`. Nothing is retried; the
//! caller shows [`ActionFailure::alert_message`] and keeps its state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::DeleteConversationsRequest;
use super::types::{CreateCommunityRequest, CreateCommunityResponse, CreateGroupRequest};
use crate::config::ClientConfig;
use crate::util::csrf::CsrfToken;

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available outside the browser";

/// Failure reported by a collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionFailure {
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("server rejected request ({status}): {body}")]
    ServerRejected { status: u16, body: String },
    #[error("request cancelled")]
    Cancelled,
}

impl ActionFailure {
    /// User-facing alert text; `context` is the verb phrase, e.g. `"apagar conversas"`.
    pub fn alert_message(&self, context: &str) -> String {
        match self {
            Self::NetworkFailure(_) => format!("Erro de rede ao {context}."),
            Self::ServerRejected { body, .. } => format!("Erro ao {context}: {body}"),
            Self::Cancelled => format!("Operação cancelada: {context}."),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn join_community_endpoint(prefix: &str, community_id: &str) -> String {
    format!("{}/{community_id}/", prefix.trim_end_matches('/'))
}

/// Map an HTTP status and body to the call outcome; any 2xx is success.
#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16, body: impl FnOnce() -> String) -> Result<(), ActionFailure> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ActionFailure::ServerRejected { status, body: body() })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn community_status_outcome(status: u16, response: CreateCommunityResponse) -> Result<CreateCommunityResponse, ActionFailure> {
    if response.is_ok() {
        Ok(response)
    } else {
        Err(ActionFailure::ServerRejected { status, body: response.status })
    }
}

#[cfg(feature = "hydrate")]
fn network_failure(e: gloo_net::Error) -> ActionFailure {
    log::warn!("request failed: {e}");
    ActionFailure::NetworkFailure(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn send_checked(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ActionFailure> {
    let resp = request.send().await.map_err(network_failure)?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("server rejected {} with {status}", resp.url());
    classify_status(status, || body)?;
    Ok(resp)
}

/// Delete conversations via `POST /chat/delete_conversations/`.
///
/// # Errors
///
/// Returns [`ActionFailure::ServerRejected`] on a non-2xx response and
/// [`ActionFailure::NetworkFailure`] when the request cannot be sent.
pub async fn delete_conversations(config: &ClientConfig, token: &CsrfToken, ids: &[String]) -> Result<(), ActionFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = DeleteConversationsRequest { conversation_ids: ids.to_vec() };
        let request = gloo_net::http::Request::post(&config.delete_conversations_path)
            .header(&config.csrf_header, token.as_str())
            .json(&body)
            .map_err(network_failure)?;
        send_checked(request).await?;
        log::debug!("deleted {} conversations", ids.len());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, ids);
        Err(ActionFailure::NetworkFailure(UNAVAILABLE.to_owned()))
    }
}

/// Create a group chat via `POST /chat/create_group/`.
///
/// # Errors
///
/// Same as [`delete_conversations`].
pub async fn create_group(config: &ClientConfig, token: &CsrfToken, request: &CreateGroupRequest) -> Result<(), ActionFailure> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config.create_group_path)
            .header(&config.csrf_header, token.as_str())
            .json(request)
            .map_err(network_failure)?;
        send_checked(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, request);
        Err(ActionFailure::NetworkFailure(UNAVAILABLE.to_owned()))
    }
}

/// Join a community via `POST /entrar_comunidade/{id}/`.
///
/// # Errors
///
/// Same as [`delete_conversations`].
pub async fn join_community(config: &ClientConfig, token: &CsrfToken, community_id: &str) -> Result<(), ActionFailure> {
    #[cfg(feature = "hydrate")]
    {
        let url = join_community_endpoint(&config.join_community_prefix, community_id);
        let request = gloo_net::http::Request::post(&url)
            .header(&config.csrf_header, token.as_str())
            .build()
            .map_err(network_failure)?;
        send_checked(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, community_id);
        Err(ActionFailure::NetworkFailure(UNAVAILABLE.to_owned()))
    }
}

/// Create a community via `POST /criar-comunidade/`.
///
/// # Errors
///
/// Returns [`ActionFailure::ServerRejected`] on a non-2xx response or when
/// the body's `status` is not `"ok"`, and [`ActionFailure::NetworkFailure`]
/// when the request cannot be sent or the body cannot be decoded.
pub async fn create_community(
    config: &ClientConfig,
    token: &CsrfToken,
    request: &CreateCommunityRequest,
) -> Result<CreateCommunityResponse, ActionFailure> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config.create_community_path)
            .header(&config.csrf_header, token.as_str())
            .json(request)
            .map_err(network_failure)?;
        let resp = send_checked(request).await?;
        let status = resp.status();
        let body: CreateCommunityResponse = resp.json().await.map_err(network_failure)?;
        community_status_outcome(status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, request);
        Err(ActionFailure::NetworkFailure(UNAVAILABLE.to_owned()))
    }
}

/// Delete the current selection on the browser executor.
///
/// `on_done` receives the deleted ids on success so the caller can drop
/// them from the rendered list, or the failure to alert on.
#[cfg(feature = "hydrate")]
pub fn spawn_delete_selected(
    controller: std::rc::Rc<std::cell::RefCell<crate::state::selection::SelectionController>>,
    config: ClientConfig,
    token: CsrfToken,
    on_done: impl FnOnce(Result<Vec<String>, crate::state::selection::BulkActionError>) + 'static,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = crate::state::selection::commit_bulk_action(&controller, |ids| async move {
            let ids: Vec<String> = ids.into_iter().collect();
            delete_conversations(&config, &token, &ids).await.map(|()| ids)
        })
        .await;
        on_done(result);
    });
}
