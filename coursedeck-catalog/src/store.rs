//! Remote document store access
//!
//! The catalog lives in a hosted realtime document database exposing a JSON
//! tree over REST (`GET {base}/{path}.json`). Access goes through the
//! [`CourseStore`] trait so the service wires in [`HttpCourseStore`] while
//! tests inject a [`MemoryStore`] double.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

const USER_AGENT: &str = "coursedeck/0.1.0 (https://github.com/coursedeck/coursedeck)";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Store client errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Store API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read/write access to the remote JSON document tree.
///
/// Paths are slash-separated (`"courses"`, `"users/abc"`); the empty path
/// addresses the tree root. Reads of an absent node return `Ok(None)`.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Read the subtree at `path`, `None` when the node is absent.
    async fn read(&self, path: &str) -> Result<Option<Value>, StoreError>;

    /// Read a single child of `path`
    async fn read_child(&self, path: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.read(&join_path(path, key)).await
    }

    /// Replace the subtree at `path`
    async fn write(&self, path: &str, value: &Value) -> Result<(), StoreError>;

    /// Merge the object `value` into the node at `path` (shallow update)
    async fn update(&self, path: &str, value: &Value) -> Result<(), StoreError>;

    /// Store `value` under a generated key below `path`; returns the key.
    async fn push(&self, path: &str, value: &Value) -> Result<String, StoreError>;

    /// Remove the subtree at `path`
    async fn delete(&self, path: &str) -> Result<(), StoreError>;
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", path, key)
    }
}

/// HTTP client for the hosted document store
pub struct HttpCourseStore {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpCourseStore {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn node_url(&self, path: &str) -> String {
        if path.is_empty() {
            format!("{}/.json", self.base_url)
        } else {
            format!("{}/{}.json", self.base_url, path)
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(status.as_u16(), error_text));
        }
        Ok(response)
    }
}

#[async_trait]
impl CourseStore for HttpCourseStore {
    async fn read(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let url = self.node_url(path);
        tracing::debug!(path = %path, url = %url, "Reading from document store");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        // Absent nodes come back as 404 or as a literal JSON null
        if response.status() == 404 {
            return Ok(None);
        }

        let response = Self::check_status(response).await?;
        let value: Value = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn write(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        let url = self.node_url(path);
        tracing::debug!(path = %path, "Writing to document store");

        let response = self
            .http_client
            .put(&url)
            .json(value)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn update(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        let url = self.node_url(path);
        tracing::debug!(path = %path, "Updating document store node");

        let response = self
            .http_client
            .patch(&url)
            .json(value)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn push(&self, path: &str, value: &Value) -> Result<String, StoreError> {
        // Keys are generated client-side; no dependence on vendor push ids
        let key = Uuid::new_v4().to_string();
        self.write(&join_path(path, &key), value).await?;
        Ok(key)
    }

    async fn delete(&self, path: &str) -> Result<(), StoreError> {
        let url = self.node_url(path);
        tracing::debug!(path = %path, "Deleting document store node");

        let response = self
            .http_client
            .delete(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }
}

/// In-memory document tree, used as a test double and for local development
/// without a hosted store.
pub struct MemoryStore {
    tree: RwLock<Value>,
    push_counter: AtomicU64,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::with_tree(Value::Null)
    }

    /// Store seeded with an initial tree
    pub fn with_tree(tree: Value) -> Self {
        Self {
            tree: RwLock::new(tree),
            push_counter: AtomicU64::new(0),
        }
    }

    fn segments(path: &str) -> Vec<&str> {
        path.split('/').filter(|s| !s.is_empty()).collect()
    }

    fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
        let mut node = root;
        for segment in Self::segments(path) {
            node = node.get(segment)?;
        }
        Some(node)
    }

    /// Walk to the node at `path`, creating intermediate objects as needed.
    fn lookup_or_create<'a>(root: &'a mut Value, path: &str) -> &'a mut Value {
        let mut node = root;
        for segment in Self::segments(path) {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            node = node
                .as_object_mut()
                .expect("node was just made an object")
                .entry(segment.to_string())
                .or_insert(Value::Null);
        }
        node
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn read(&self, path: &str) -> Result<Option<Value>, StoreError> {
        let tree = self.tree.read().await;
        Ok(Self::lookup(&tree, path).filter(|v| !v.is_null()).cloned())
    }

    async fn write(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        let mut tree = self.tree.write().await;
        *Self::lookup_or_create(&mut tree, path) = value.clone();
        Ok(())
    }

    async fn update(&self, path: &str, value: &Value) -> Result<(), StoreError> {
        let patch = value
            .as_object()
            .ok_or_else(|| StoreError::Parse("update value must be an object".to_string()))?;

        let mut tree = self.tree.write().await;
        let node = Self::lookup_or_create(&mut tree, path);
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let target = node.as_object_mut().expect("node was just made an object");
        for (k, v) in patch {
            target.insert(k.clone(), v.clone());
        }
        Ok(())
    }

    async fn push(&self, path: &str, value: &Value) -> Result<String, StoreError> {
        let n = self.push_counter.fetch_add(1, Ordering::SeqCst);
        let key = format!("push-{:04}", n);
        self.write(&join_path(path, &key), value).await?;
        Ok(key)
    }

    async fn delete(&self, path: &str) -> Result<(), StoreError> {
        let segments = Self::segments(path);
        let mut tree = self.tree.write().await;
        if segments.is_empty() {
            *tree = Value::Null;
            return Ok(());
        }
        let (parent_path, key) = (
            segments[..segments.len() - 1].join("/"),
            segments[segments.len() - 1],
        );
        if let Some(parent) = Self::lookup(&tree, &parent_path) {
            if parent.get(key).is_none() {
                return Ok(());
            }
        } else {
            return Ok(());
        }
        let parent = Self::lookup_or_create(&mut tree, &parent_path);
        if let Some(obj) = parent.as_object_mut() {
            obj.remove(key);
        }
        Ok(())
    }
}
