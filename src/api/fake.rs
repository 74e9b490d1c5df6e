//! In-memory backend for tests
//!
//! Records every call in order and answers from canned replies. Unknown GET
//! paths answer `[]`, unknown POST paths answer `{}`.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{json, Value};

use super::backend::Backend;
use crate::error::{ErpError, ErpResult};

/// A recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post(String, Value),
}

impl Call {
    pub fn get(path: &str) -> Self {
        Self::Get(path.to_string())
    }

    pub fn post(path: &str, body: Value) -> Self {
        Self::Post(path.to_string(), body)
    }

    pub fn is_post(&self) -> bool {
        matches!(self, Self::Post(..))
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Fail(String),
    Hang,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    gets: Mutex<HashMap<String, Reply>>,
    posts: Mutex<HashMap<String, Reply>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(&self, path: &str, body: Value) {
        self.gets
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Json(body));
    }

    pub fn fail_get(&self, path: &str, message: &str) {
        self.gets
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Fail(message.to_string()));
    }

    /// Make GETs to `path` never resolve
    pub fn hang_get(&self, path: &str) {
        self.gets.lock().unwrap().insert(path.to_string(), Reply::Hang);
    }

    pub fn fail_post(&self, path: &str, message: &str) {
        self.posts
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Fail(message.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn post_count(&self) -> usize {
        self.calls().iter().filter(|c| c.is_post()).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn answer(reply: Option<Reply>, fallback: Value) -> ErpResult<Value> {
        match reply {
            None => Ok(fallback),
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::Fail(message)) => Err(ErpError::Request(message)),
            Some(Reply::Hang) => std::future::pending().await,
        }
    }
}

impl Backend for FakeBackend {
    fn base_url(&self) -> &str {
        "http://fake.test"
    }

    async fn get(&self, path: &str) -> ErpResult<Value> {
        self.record(Call::get(path));
        let reply = self.gets.lock().unwrap().get(path).cloned();
        Self::answer(reply, json!([])).await
    }

    async fn post(&self, path: &str, body: Value) -> ErpResult<Value> {
        self.record(Call::post(path, body));
        let reply = self.posts.lock().unwrap().get(path).cloned();
        Self::answer(reply, json!({})).await
    }
}
