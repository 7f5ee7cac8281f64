//! In-memory capture of comparison log events
//!
//! Tests install one process-wide layer through [`init_test_capture`] and
//! assert on what the engine emitted: the start/end pair of a comparison
//! (correlated by the report's `comparison_id`) and the diagnostics handed
//! to the default `TracingLogger`.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use scenematch_core_types::schema::{
    EVENT_DIAGNOSTIC, FIELD_COMPARISON_ID, FIELD_COMPONENT, FIELD_EVENT, FIELD_OP,
};
use scenematch_core_types::ComparisonId;
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

const FIELD_MESSAGE: &str = "message";

/// One event as the capture layer saw it
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub message: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned();
        Self {
            level,
            component: get(FIELD_COMPONENT),
            op: get(FIELD_OP),
            event: get(FIELD_EVENT),
            message: get(FIELD_MESSAGE),
            fields,
        }
    }

    /// Field value by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

/// Flattens every recorded value to its display text
#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

/// Layer that appends every event to a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let capture = TestCapture {
            events: events.clone(),
        };
        (Self { events }, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), visitor.0);

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Read side of the capture buffer
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Start and end events of the comparison that used `id`, in order
    pub fn comparison(&self, id: &ComparisonId) -> Vec<CapturedEvent> {
        let id = id.to_string();
        self.events()
            .into_iter()
            .filter(|e| e.field(FIELD_COMPARISON_ID) == Some(id.as_str()))
            .collect()
    }

    /// Messages of diagnostic events, oldest first
    pub fn diagnostics(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.event.as_deref() == Some(EVENT_DIAGNOSTIC))
            .filter_map(|e| e.message)
            .collect()
    }

    /// # Panics
    ///
    /// Panics if no event has this op and event name
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer once and hand out the shared buffer
///
/// Tests in one binary run in parallel against the same buffer, so filter
/// on something unique to the test: an op name, a node name, or the
/// report's `comparison_id` via [`TestCapture::comparison`].
///
/// # Example
///
/// ```
/// use scenematch_core::logging_facility::test_capture::init_test_capture;
/// use scenematch_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(pairs: &[(&str, &str)]) -> CapturedEvent {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CapturedEvent::from_fields(Level::INFO, fields)
    }

    #[test]
    fn test_canonical_fields_are_lifted() {
        let event = captured(&[
            ("component", "scenematch_core::engine"),
            ("op", "compare_nodes"),
            ("event", "end"),
            ("tier", "value_equal"),
        ]);

        assert!(event.is("compare_nodes", "end"));
        assert_eq!(event.component.as_deref(), Some("scenematch_core::engine"));
        assert_eq!(event.field("tier"), Some("value_equal"));
        assert_eq!(event.field("missing"), None);
        assert_eq!(event.message, None);
    }

    #[test]
    fn test_comparison_and_diagnostic_filters() {
        let (_layer, capture) = TestCaptureLayer::new();
        let id = ComparisonId::new();
        {
            let mut events = capture.events.lock().unwrap();
            events.push(captured(&[("op", "compare_nodes"), ("comparison_id", id.as_str())]));
            events.push(captured(&[("event", "diagnostic"), ("message", "a does not match b")]));
            events.push(captured(&[("op", "compare_nodes"), ("comparison_id", "other")]));
        }

        assert_eq!(capture.comparison(&id).len(), 1);
        assert_eq!(capture.diagnostics(), ["a does not match b"]);

        capture.clear();
        assert!(capture.events().is_empty());
    }
}
