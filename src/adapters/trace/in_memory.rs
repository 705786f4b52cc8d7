//! In-memory trace sink for testing.

use std::sync::{Arc, Mutex};

use crate::ports::{TraceEvent, TraceSink};

/// Records trace events for assertion in tests.
///
/// Clones share the same event log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTraceSink {
    events: Arc<Mutex<Vec<TraceEvent>>>,
}

impl InMemoryTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in emission order.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TraceSink for InMemoryTraceSink {
    fn record(&self, event: TraceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order() {
        let sink = InMemoryTraceSink::new();

        sink.record(TraceEvent::DocumentsRetrieved { count: 2 });
        sink.record(TraceEvent::AnswerGenerated { chars: 10 });

        assert_eq!(
            sink.events(),
            vec![
                TraceEvent::DocumentsRetrieved { count: 2 },
                TraceEvent::AnswerGenerated { chars: 10 },
            ]
        );
    }
}
