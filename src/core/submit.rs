//=========================================================================
// Submission Sink
//=========================================================================
//
// Form-like collaborator that receives final answer values.
//
// The core writes a field name and a string value, then requests
// finalization. How the sink delivers the value (HTTP form post, test
// recorder, nothing at all) is not the core's concern.
//
//=========================================================================

//=== External Crates =====================================================

use log::info;

//=== SubmissionSink ======================================================

/// Destination for finalized answers.
///
/// Implementations live outside the interaction core; the core only ever
/// writes fields and requests submission.
pub trait SubmissionSink: Send {
    /// Stores a field value, replacing any previous value for the name.
    fn set_field(&mut self, name: &str, value: &str);

    /// Finalizes the submission with the fields written so far.
    fn submit(&mut self);
}

//=== MemorySink ==========================================================

/// In-memory sink recording fields and submissions.
///
/// Used for headless runs and tests; also the default sink so that an
/// unconfigured orchestrator never has a missing collaborator.
#[derive(Debug, Default)]
pub struct MemorySink {
    fields: Vec<(String, String)>,
    submit_count: usize,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written for a field name, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of times `submit()` was requested.
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }
}

impl SubmissionSink for MemorySink {
    fn set_field(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    fn submit(&mut self) {
        self.submit_count += 1;
        info!("Submission finalized ({} fields written)", self.fields.len());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_fields_and_submissions() {
        let mut sink = MemorySink::new();
        sink.set_field("answer", "red,green,blue");
        sink.submit();

        assert_eq!(sink.field("answer"), Some("red,green,blue"));
        assert_eq!(sink.submit_count(), 1);
    }

    #[test]
    fn later_writes_shadow_earlier_ones() {
        let mut sink = MemorySink::new();
        sink.set_field("answer", "first");
        sink.set_field("answer", "second");

        assert_eq!(sink.field("answer"), Some("second"));
    }

    #[test]
    fn missing_field_is_none() {
        let sink = MemorySink::new();
        assert_eq!(sink.field("answer"), None);
    }

    #[test]
    fn usable_as_trait_object() {
        let mut sink = MemorySink::new();
        {
            let dyn_sink: &mut dyn SubmissionSink = &mut sink;
            dyn_sink.set_field("answer", "x");
            dyn_sink.submit();
        }
        assert_eq!(sink.submit_count(), 1);
    }
}
