use gloo_net::http::{Request, Response};
use shared::{AuthRequest, AuthResponse, ErrorResponse, RequestError};

/// POSTs the credentials and decodes the issued token.
pub async fn authenticate(request: &AuthRequest) -> Result<AuthResponse, RequestError> {
    let body = serde_json::to_string(&request.body)
        .map_err(|e| RequestError::Transport(format!("could not encode body: {}", e)))?;

    let resp = Request::post(&request.url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| RequestError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(http_error(resp).await);
    }

    resp.json::<AuthResponse>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

async fn http_error(resp: Response) -> RequestError {
    let message = resp
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.message);

    RequestError::Http {
        status: resp.status(),
        message,
    }
}
