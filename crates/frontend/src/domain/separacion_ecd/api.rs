use contracts::domain::separacion_ecd::dto::{
    ActionRequest, ActionResponse, ErrorBody, SeparacionEcdQuery,
};
use contracts::domain::separacion_ecd::SeparacionEcdData;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/separacion-ecd";

/// URL of the data endpoint; empty dates are left to the server defaults
pub fn data_url(start_date: &str, end_date: &str) -> String {
    let non_empty = |v: &str| (!v.trim().is_empty()).then(|| v.trim().to_string());
    let query = SeparacionEcdQuery {
        start_date: non_empty(start_date),
        end_date: non_empty(end_date),
    };
    match serde_qs::to_string(&query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", API_BASE, qs),
        _ => API_BASE.to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        return match response.json::<ErrorBody>().await {
            Ok(body) => Err(body.error),
            Err(_) => Err(format!("HTTP error: {}", status)),
        };
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Dataset for the given range
pub async fn fetch_data(start_date: &str, end_date: &str) -> Result<SeparacionEcdData, String> {
    let response = Request::get(&data_url(start_date, end_date))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

async fn post_action(path: &str, body: &ActionRequest) -> Result<ActionResponse, String> {
    let url = format!("{}/{}", API_BASE, path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

pub async fn execute(body: &ActionRequest) -> Result<ActionResponse, String> {
    post_action("execute", body).await
}

pub async fn delete(body: &ActionRequest) -> Result<ActionResponse, String> {
    post_action("delete", body).await
}
