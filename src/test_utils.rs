// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use k8s_openapi::api::apps::v1::Deployment;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Key = (String, String);

#[derive(Default)]
struct Routes {
    /// Scripted responses per (method, path); the last one repeats forever
    responses: HashMap<Key, VecDeque<(u16, String)>>,
    /// Number of requests received per (method, path)
    hits: HashMap<Key, usize>,
}

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone, Default)]
pub struct MockService {
    routes: Arc<Mutex<Routes>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, vec![(status, body.to_string())])
    }

    /// Serve the given GET responses in order, repeating the last one
    pub fn on_get_sequence(self, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.on("GET", path, responses)
    }

    /// Add a response for PUT requests matching the exact path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, vec![(status, body.to_string())])
    }

    /// Serve the given PUT responses in order, repeating the last one
    pub fn on_put_sequence(self, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.on("PUT", path, responses)
    }

    fn on(self, method: &str, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .responses
            .insert((method.to_string(), path.to_string()), responses.into());
        self
    }

    /// Number of requests received for a method and path
    pub fn requests(&self, method: &str, path: &str) -> usize {
        self.routes
            .lock()
            .unwrap()
            .hits
            .get(&(method.to_string(), path.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut routes = self.routes.lock().unwrap();
        let key = (method.to_string(), path.to_string());

        *routes.hits.entry(key.clone()).or_insert(0) += 1;

        let queue = routes.responses.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let (status, body) = self
            .next_response(&method, &path)
            .unwrap_or_else(|| (404, not_found_json(&path)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a mock deployment JSON response with the given replica status
pub fn deployment_json(name: &str, namespace: &str, replicas: i32, ready: i32) -> String {
    serde_json::json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "status": {
            "replicas": replicas,
            "readyReplicas": ready
        }
    })
    .to_string()
}

/// Create a mock `/version` JSON response
pub fn version_json(major: &str, minor: &str) -> String {
    serde_json::json!({
        "major": major,
        "minor": minor,
        "gitVersion": format!("v{}.{}.0", major, minor),
        "gitCommit": "0000000",
        "gitTreeState": "clean",
        "buildDate": "2026-01-01T00:00:00Z",
        "goVersion": "go1.22",
        "compiler": "gc",
        "platform": "linux/amd64"
    })
    .to_string()
}

/// Create a failure `Status` response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(path: &str) -> String {
    status_json(404, "NotFound", &format!("{} not found", path))
}

/// A minimal deployment object to send in updates
pub fn deployment(name: &str, namespace: &str) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}
