//! View-state data models

/// Pane with keyboard scroll focus in the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Messages,
    Trace,
}
