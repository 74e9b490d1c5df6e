//! Running panel requests off the UI thread
//!
//! Panels never await. They hand a task to `Effects::spawn`, which runs it
//! on the tokio runtime and delivers the resulting `Outcome` back through a
//! `Deliver` sink. The TUI sink feeds the same channel as terminal events, so
//! outcomes are applied on the UI thread in arrival order.

use std::future::Future;
use std::sync::mpsc;
use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::Handle;
use tracing::debug;

use super::mount::{Mount, MountId};
use crate::api::Backend;
use crate::error::ErpResult;
use crate::models::{Customer, Invoice, Product};

/// Everything the invoices panel loads in one go
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceData {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
}

/// Result of a spawned request, addressed to the panel that issued it
#[derive(Debug)]
pub struct Outcome {
    pub mount: MountId,
    pub kind: OutcomeKind,
}

/// What a spawned request produced
#[derive(Debug)]
pub enum OutcomeKind {
    CustomersLoaded {
        seq: u64,
        result: ErpResult<Vec<Customer>>,
    },
    CustomerCreated(ErpResult<Value>),
    ProductsLoaded {
        seq: u64,
        result: ErpResult<Vec<Product>>,
    },
    ProductCreated(ErpResult<Value>),
    InvoicesLoaded {
        seq: u64,
        result: ErpResult<InvoiceData>,
    },
    InvoiceCreated(ErpResult<Value>),
}

/// Sink for outcomes coming back from the runtime
pub trait Deliver: Send + Sync + 'static {
    fn deliver(&self, outcome: Outcome);
}

impl Deliver for mpsc::Sender<Outcome> {
    fn deliver(&self, outcome: Outcome) {
        if self.send(outcome).is_err() {
            debug!("Outcome receiver dropped");
        }
    }
}

/// Spawns panel requests against a backend
pub struct Effects<B: Backend> {
    backend: Arc<B>,
    runtime: Handle,
    outbox: Arc<dyn Deliver>,
}

impl<B: Backend> Clone for Effects<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            runtime: self.runtime.clone(),
            outbox: Arc::clone(&self.outbox),
        }
    }
}

impl<B: Backend> Effects<B> {
    pub fn new(backend: Arc<B>, runtime: Handle, outbox: Arc<dyn Deliver>) -> Self {
        Self {
            backend,
            runtime,
            outbox,
        }
    }

    /// The backend requests are sent to
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run `task` on the runtime on behalf of `mount`
    ///
    /// The task is tracked by the mount, so dropping the mount aborts it
    /// before its outcome is delivered.
    pub fn spawn<F, Fut>(&self, mount: &mut Mount, task: F)
    where
        F: FnOnce(Arc<B>) -> Fut,
        Fut: Future<Output = OutcomeKind> + Send + 'static,
    {
        let id = mount.id();
        let outbox = Arc::clone(&self.outbox);
        let work = task(Arc::clone(&self.backend));

        let handle = self.runtime.spawn(async move {
            let kind = work.await;
            outbox.deliver(Outcome { mount: id, kind });
        });

        mount.track(handle.abort_handle());
    }
}
