//! # Selector Observability
//!
//! The selector never writes to stdout, stderr or a global logger on its own. Hosts that want
//! diagnostics inject a [`SelectorObserver`] at mount time and receive structured
//! [`SelectorEvent`]s. [`TracingObserver`] forwards them to `tracing`, so a binary that installs
//! a subscriber gets selector logs and every other host gets silence.

use crate::model::SelectionMap;
use crate::selector::{IgnoreReason, OwnershipMode};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent<'a> {
    Mounted {
        mode: OwnershipMode,
        attributes: usize,
        selected: usize,
    },
    /// A default chosen at mount, reported once per attribute.
    Defaulted {
        attribute_id: u32,
        attribute_name: &'a str,
        value: &'a str,
    },
    /// A selection was merged. `selection` is the state after the merge.
    Selected {
        attribute_id: u32,
        attribute_name: &'a str,
        value: &'a str,
        selection: &'a SelectionMap,
    },
    Ignored {
        reason: IgnoreReason,
        attribute_name: &'a str,
        value: &'a str,
    },
    HostSynced {
        changed: bool,
    },
    Unmounted,
}

pub trait SelectorObserver {
    fn on_event(&mut self, event: &SelectorEvent<'_>);
}

/// Forwards selector events to `tracing`, tagged with the host that mounted the selector.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    host: String,
}

impl TracingObserver {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl SelectorObserver for TracingObserver {
    fn on_event(&mut self, event: &SelectorEvent<'_>) {
        let host = self.host.as_str();
        match event {
            SelectorEvent::Mounted {
                mode,
                attributes,
                selected,
            } => debug!(host, ?mode, attributes, selected, "selector mounted"),
            SelectorEvent::Defaulted {
                attribute_id,
                attribute_name,
                value,
            } => trace!(host, attribute_id, attribute_name, value, "default selected"),
            SelectorEvent::Selected {
                attribute_id,
                attribute_name,
                value,
                selection,
            } => debug!(
                host,
                attribute_id,
                attribute_name,
                value,
                selected = selection.len(),
                "attribute selected"
            ),
            SelectorEvent::Ignored {
                reason,
                attribute_name,
                value,
            } => debug!(host, ?reason, attribute_name, value, "selection ignored"),
            SelectorEvent::HostSynced { changed } => {
                trace!(host, changed, "host selection synced")
            }
            SelectorEvent::Unmounted => trace!(host, "selector unmounted"),
        }
    }
}
