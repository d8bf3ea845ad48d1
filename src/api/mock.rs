use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::FavoritesApi;
use crate::app::{FavError, Result};
use crate::domain::{ResourceFamily, Session};
use crate::navigator::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Check(String),
    Add(String),
    Remove(String),
}

/// Holds calls until released, so tests can observe in-flight state.
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

pub struct MockApi {
    calls: Mutex<Vec<Call>>,
    check_result: Mutex<Option<bool>>,
    writes_succeed: AtomicBool,
    gate: Option<Arc<Gate>>,
    gate_writes: bool,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            check_result: Mutex::new(Some(false)),
            writes_succeed: AtomicBool::new(true),
            gate: None,
            gate_writes: false,
        }
    }

    /// Every call waits on `gate`.
    pub fn gated(gate: Arc<Gate>) -> Self {
        Self {
            gate: Some(gate),
            gate_writes: true,
            ..Self::new()
        }
    }

    /// Only status checks wait on `gate`; writes settle immediately.
    pub fn gated_checks(gate: Arc<Gate>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    /// `None` makes the check call fail.
    pub fn set_check_result(&self, result: Option<bool>) {
        *self.check_result.lock().unwrap() = result;
    }

    pub fn set_writes_succeed(&self, ok: bool) {
        self.writes_succeed.store(ok, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: Call) {
        let is_write = !matches!(call, Call::Check(_));
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = self.gate.as_ref().filter(|_| self.gate_writes || !is_write) {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
    }

    fn write_result(&self) -> Result<()> {
        if self.writes_succeed.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(FavError::Other("server returned 500".into()))
        }
    }
}

#[async_trait]
impl FavoritesApi for MockApi {
    async fn check(
        &self,
        _family: &ResourceFamily,
        item_id: &str,
        _session: &Session,
    ) -> Result<bool> {
        self.record(Call::Check(item_id.to_string())).await;
        let result = *self.check_result.lock().unwrap();
        result.ok_or_else(|| FavError::Other("check failed".into()))
    }

    async fn add(
        &self,
        _family: &ResourceFamily,
        item_id: &str,
        _session: &Session,
    ) -> Result<()> {
        self.record(Call::Add(item_id.to_string())).await;
        self.write_result()
    }

    async fn remove(
        &self,
        _family: &ResourceFamily,
        item_id: &str,
        _session: &Session,
    ) -> Result<()> {
        self.record(Call::Remove(item_id.to_string())).await;
        self.write_result()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
