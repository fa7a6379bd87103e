use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use ecocomp_core::connector::{HistoricalProvider, IndicatorConnector};
use ecocomp_core::{CompareError, SeriesRequest, SeriesResult};

/// Instruction for how a fetch should behave for a given series.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after sleeping for the given duration.
    Delayed(Duration, T),
    /// Fail immediately with the provided error.
    Fail(CompareError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

/// Call log entry recorded by the dynamic mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    /// A fetch for the labelled series began.
    Started(String),
    /// A fetch for the labelled series produced a result (success or failure).
    Finished(String),
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<SeriesRequest, MockBehavior<SeriesResult>>,
    events: Vec<CallEvent>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for fetches of a specific series.
    pub async fn set_behavior(&self, req: SeriesRequest, behavior: MockBehavior<SeriesResult>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(req, behavior);
    }

    /// Return a copy of the call log.
    pub async fn events(&self) -> Vec<CallEvent> {
        self.state.lock().await.events.clone()
    }

    /// Number of fetches that have started.
    pub async fn call_count(&self) -> usize {
        self.state
            .lock()
            .await
            .events
            .iter()
            .filter(|e| matches!(e, CallEvent::Started(_)))
            .count()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.events.clear();
    }
}

/// Connector whose responses are scripted per series by a [`DynamicMockController`].
///
/// Series without a rule fail with an upstream error so tests notice
/// unexpected calls.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a connector named `"dynamic-mock"` and its controller.
    #[must_use]
    pub fn new() -> (Arc<Self>, DynamicMockController) {
        Self::new_with_name("dynamic-mock")
    }

    /// Create a connector with a custom name and its controller.
    #[must_use]
    pub fn new_with_name(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let connector = Arc::new(Self {
            name,
            state: Arc::clone(&state),
        });
        (connector, DynamicMockController { state })
    }

    async fn record(&self, event: CallEvent) {
        self.state.lock().await.events.push(event);
    }
}

impl IndicatorConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_historical_provider(&self) -> Option<&dyn HistoricalProvider> {
        Some(self as &dyn HistoricalProvider)
    }
}

#[async_trait]
impl HistoricalProvider for DynamicMockConnector {
    async fn historical(&self, req: &SeriesRequest) -> Result<SeriesResult, CompareError> {
        let label = req.label();
        self.record(CallEvent::Started(label.clone())).await;

        // Clone the rule so the lock is not held across the await points below.
        let behavior = self.state.lock().await.rules.get(req).cloned();
        let out = match behavior {
            Some(MockBehavior::Return(series)) => Ok(series),
            Some(MockBehavior::Delayed(delay, series)) => {
                tokio::time::sleep(delay).await;
                Ok(series)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(CompareError::upstream(
                self.name,
                format!("no behavior configured for {label}"),
            )),
        };

        self.record(CallEvent::Finished(label)).await;
        out
    }
}
