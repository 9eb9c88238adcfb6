/// Stager configuration

/// What the stager does when a slot does not resolve on the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPolicy {
    /// Pass the unresolved slot to the binding, which drops the write
    #[default]
    Silent,
    /// Same as Silent, plus one warning per unresolved slot
    Warn,
    /// Write nothing and return `Error::MissingSlot`
    Strict,
}

/// Stager configuration
#[derive(Debug, Clone)]
pub struct StagerConfig {
    /// Handling of unresolved slots
    pub slot_policy: SlotPolicy,
    /// Source name attached to log entries
    pub log_source: String,
    /// Emit a Trace entry for every applied preset (off by default, the
    /// operations run once per frame)
    pub trace_writes: bool,
}

impl Default for StagerConfig {
    fn default() -> Self {
        Self {
            slot_policy: SlotPolicy::Silent,
            log_source: "viewstage::ParameterStager".to_string(),
            trace_writes: false,
        }
    }
}

impl StagerConfig {
    /// Default configuration with the given slot policy
    pub fn with_policy(slot_policy: SlotPolicy) -> Self {
        Self {
            slot_policy,
            ..Self::default()
        }
    }
}
