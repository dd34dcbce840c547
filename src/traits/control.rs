use std::sync::mpsc::{channel, Receiver, Sender};

use crate::options::OptionValue;

/// One pending edit from the control surface
#[derive(Debug, Clone)]
pub struct OptionEdit {
    pub name: String,
    pub value: OptionValue,
}

/// Control-surface abstraction: the session drains pending edits at the top
/// of every tick, so a tick always computes against a settled options
/// snapshot. Edits arrive in submission order; last write wins.
pub trait ControlSurface {
    fn drain_edits(&mut self) -> Vec<OptionEdit>;
}

/// Cloneable handle handed to the external GUI panel. Each widget change
/// becomes one queued edit.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    tx: Sender<OptionEdit>,
}

impl ControlPanel {
    pub fn set(&self, name: &str, value: OptionValue) {
        // the session may already be gone during teardown; dropped edits are fine
        let _ = self.tx.send(OptionEdit {
            name: name.to_string(),
            value,
        });
    }
}

/// Queue-backed [`ControlSurface`] paired with a [`ControlPanel`] handle
#[derive(Debug)]
pub struct QueuedControls {
    rx: Receiver<OptionEdit>,
}

impl QueuedControls {
    pub fn channel() -> (ControlPanel, QueuedControls) {
        let (tx, rx) = channel();
        (ControlPanel { tx }, QueuedControls { rx })
    }
}

impl ControlSurface for QueuedControls {
    fn drain_edits(&mut self) -> Vec<OptionEdit> {
        self.rx.try_iter().collect()
    }
}
