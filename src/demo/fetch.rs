use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::{DemoEndpoint, DemoPayloads};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;
use url::Url;

/// Spawns the one-shot background load of all three endpoints.
///
/// Returns `None` when a load was already attempted for this state: there is
/// a single attempt per run, successful or not.
pub fn load_background(
    state: Arc<RwLock<AppState>>,
    client: reqwest::Client,
    base_url: String,
) -> Option<JoinHandle<()>> {
    let started = state.write().map(|mut s| s.begin_load()).unwrap_or(false);
    if !started {
        tracing::debug!("demo load already attempted, not starting another");
        return None;
    }

    Some(tokio::spawn(async move {
        tracing::info!(base_url = %base_url, "loading demo endpoints");

        let action = match fetch_all(&client, &base_url).await {
            Ok(payloads) => {
                tracing::info!("all demo endpoints loaded");
                AppAction::LoadSucceeded(payloads)
            }
            Err(message) => {
                tracing::warn!(error = %message, "demo load failed");
                AppAction::LoadFailed(message)
            }
        };

        if let Ok(mut s) = state.write() {
            apply_action(action, &mut s);
        }
    }))
}

/// Requests all three endpoints concurrently.
///
/// Succeeds only if every request succeeds; the first failure wins and the
/// other bodies are dropped.
pub async fn fetch_all(client: &reqwest::Client, base_url: &str) -> Result<DemoPayloads, String> {
    let (one, two, three) = tokio::try_join!(
        fetch_json(client, base_url, DemoEndpoint::One),
        fetch_json(client, base_url, DemoEndpoint::Two),
        fetch_json(client, base_url, DemoEndpoint::Three),
    )?;

    Ok(DemoPayloads { one, two, three })
}

/// GET one endpoint and parse its body as JSON. The status code is not
/// inspected; only the body decides success.
async fn fetch_json(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: DemoEndpoint,
) -> Result<Value, String> {
    let url = endpoint_url(base_url, endpoint)?;

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| describe(&e))?;

    tracing::debug!(url = %url, status = response.status().as_u16(), "response received");

    response.json::<Value>().await.map_err(|e| describe(&e))
}

/// Full URL of an endpoint under the given base address
pub fn endpoint_url(base_url: &str, endpoint: DemoEndpoint) -> Result<Url, String> {
    let full = format!("{}{}", base_url.trim_end_matches('/'), endpoint.path());
    Url::parse(&full).map_err(|e| format!("Invalid URL: {e}"))
}

/// Error text including its causes, e.g.
/// "error sending request for url (...): client error (Connect): ..."
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
