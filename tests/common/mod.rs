#![allow(dead_code)]

use cat_gallery::domain::{FavouriteImage, ServiceError};
use cat_gallery::service::FavouritesService;
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-process favourites service with scripted failures.
///
/// Records every call as `add:<image_id>`, `remove:<favourite_id>` or `list`.
/// When built with a gate, `add` and `remove` wait for the gate to be notified
/// before answering.
#[derive(Default)]
pub struct FakeService {
    next_id: AtomicU64,
    fail_add: bool,
    fail_remove: bool,
    fail_list: bool,
    listed: Vec<FavouriteImage>,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_add(mut self) -> Self {
        self.fail_add = true;
        self
    }

    pub fn failing_remove(mut self) -> Self {
        self.fail_remove = true;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn listing(mut self, records: Vec<FavouriteImage>) -> Self {
        self.listed = records;
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

impl FavouritesService for FakeService {
    fn add<'a>(&'a self, image_id: &'a str) -> BoxFuture<'a, Result<String, ServiceError>> {
        async move {
            self.record(format!("add:{image_id}"));
            self.wait_for_gate().await;
            if self.fail_add {
                return Err(ServiceError::Network("connection refused".to_string()));
            }
            Ok(format!("fav-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1))
        }
        .boxed()
    }

    fn remove<'a>(&'a self, favourite_id: &'a str) -> BoxFuture<'a, Result<(), ServiceError>> {
        async move {
            self.record(format!("remove:{favourite_id}"));
            self.wait_for_gate().await;
            if self.fail_remove {
                return Err(ServiceError::Status {
                    status: 500,
                    body: "internal error".to_string(),
                });
            }
            Ok(())
        }
        .boxed()
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<FavouriteImage>, ServiceError>> {
        async move {
            self.record("list".to_string());
            if self.fail_list {
                return Err(ServiceError::Malformed("expected an array".to_string()));
            }
            Ok(self.listed.clone())
        }
        .boxed()
    }
}
