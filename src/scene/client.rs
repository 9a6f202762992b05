use crate::config::SceneConfig;
use crate::scene::model::{Color, Rotation, ScaleSpec, Vec3};
use crate::scene::normalize::CanonicalRequest;
use crate::scene::responses::{BatchOutcome, DeleteAllOutcome, SceneSnapshot};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// One HTTP round trip to the scene server.
///
/// Any status code is a successful exchange here; only connection and
/// timeout failures are errors.
pub trait Transport: Send + Sync {
    fn endpoint(&self) -> &str;

    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, TransportError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl UreqTransport {
    pub fn new(config: &SceneConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout()).build();
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Transport for UreqTransport {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{path}", self.base_url);
        let request = self.agent.request(method.as_str(), &url);
        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => read_response(response),
            Err(ureq::Error::Transport(err)) => Err(TransportError(err.to_string())),
        }
    }
}

fn read_response(response: ureq::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status();
    let body = response
        .into_string()
        .map_err(|err| TransportError(format!("failed to read response body: {err}")))?;
    Ok(HttpResponse { status, body })
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("cannot connect to scene server at {endpoint}: {reason}")]
    Unreachable { endpoint: String, reason: String },
    #[error("scene server not responding (health check returned HTTP {0}); start play mode in the editor")]
    NotResponding(u16),
    #[error("scene server rejected the request (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("unexpected response from scene server: {0}")]
    InvalidResponse(String),
    #[error("actor name cannot be used as a path segment: {0:?}")]
    InvalidActorName(String),
}

/// Builds `/actors/{name}[/{field}]` with the name percent-encoded as one
/// segment, so `/`, `?` and `#` inside a name stay part of it.
pub fn actor_path(name: &str, field: Option<&str>) -> Result<String, SceneError> {
    // Dot segments are dropped by URL normalization.
    if matches!(name, "." | "..") {
        return Err(SceneError::InvalidActorName(name.to_string()));
    }
    let mut url = Url::parse("http://scene.invalid/actors")
        .map_err(|err| SceneError::InvalidActorName(format!("{name}: {err}")))?;
    url.path_segments_mut()
        .map_err(|()| SceneError::InvalidActorName(name.to_string()))?
        .push(name)
        .extend(field);
    Ok(url.path().to_string())
}

pub struct SceneClient {
    transport: Box<dyn Transport>,
}

impl SceneClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(UreqTransport::new(config))
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Liveness probe. Must succeed before any operation request is sent.
    pub fn health(&self) -> Result<(), SceneError> {
        let response = self.exchange(Method::Get, "/health", None)?;
        if response.status != 200 {
            warn!(status = response.status, "health check failed");
            return Err(SceneError::NotResponding(response.status));
        }
        Ok(())
    }

    /// Creates one actor and returns the server's echo, or `Null` when the
    /// echo is not JSON.
    pub fn create_actor(&self, request: &CanonicalRequest) -> Result<Value, SceneError> {
        let body = self.request(Method::Post, "/actors", Some(json!(request)))?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    pub fn create_batch(&self, actors: &[CanonicalRequest]) -> Result<BatchOutcome, SceneError> {
        self.request_json(
            Method::Post,
            "/actors/batch",
            Some(json!({ "actors": actors })),
        )
    }

    pub fn move_actor(&self, name: &str, location: &Vec3) -> Result<(), SceneError> {
        self.request(
            Method::Put,
            &actor_path(name, Some("location"))?,
            Some(json!({ "location": location })),
        )
        .map(drop)
    }

    pub fn scene(&self) -> Result<SceneSnapshot, SceneError> {
        self.request_json(Method::Get, "/scene", None)
    }

    pub fn set_color(&self, name: &str, color: &Color) -> Result<(), SceneError> {
        self.request(
            Method::Put,
            &actor_path(name, Some("color"))?,
            Some(json!({ "color": color })),
        )
        .map(drop)
    }

    pub fn set_scale(&self, name: &str, scale: &ScaleSpec) -> Result<(), SceneError> {
        self.request(
            Method::Put,
            &actor_path(name, Some("scale"))?,
            Some(json!({ "scale": scale })),
        )
        .map(drop)
    }

    pub fn rotate(&self, name: &str, rotation: &Rotation) -> Result<(), SceneError> {
        self.request(
            Method::Put,
            &actor_path(name, Some("rotation"))?,
            Some(json!({ "rotation": rotation })),
        )
        .map(drop)
    }

    pub fn delete_actor(&self, name: &str) -> Result<(), SceneError> {
        self.request(Method::Delete, &actor_path(name, None)?, None)
            .map(drop)
    }

    pub fn delete_all(&self) -> Result<DeleteAllOutcome, SceneError> {
        self.request_json(Method::Delete, "/actors", None)
    }

    fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, SceneError> {
        debug!(method = method.as_str(), path, "scene request");
        self.transport
            .send(method, path, body.as_ref())
            .map_err(|err| {
                warn!(method = method.as_str(), path, error = %err, "scene server unreachable");
                SceneError::Unreachable {
                    endpoint: self.endpoint().to_string(),
                    reason: err.0,
                }
            })
    }

    /// Sends an operation request and returns the body of a 200 reply.
    fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<String, SceneError> {
        let response = self.exchange(method, path, body)?;
        if response.status != 200 {
            warn!(status = response.status, path, "scene server rejected request");
            return Err(SceneError::Rejected {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }

    fn request_json<T: DeserializeOwned + Default>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, SceneError> {
        let text = self.request(method, path, body)?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(|err| SceneError::InvalidResponse(err.to_string()))
    }
}
