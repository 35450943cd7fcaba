//! Commands for the navigation context.

use trail_core::command::Command;
use uuid::Uuid;

/// Command to move the token to a checkpoint.
#[derive(Debug, Clone)]
pub struct RequestNavigation {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The destination checkpoint ordinal.
    pub checkpoint: usize,
}

impl Command for RequestNavigation {
    fn command_type(&self) -> &'static str {
        "navigation.request_navigation"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to dismiss the detail overlay.
#[derive(Debug, Clone)]
pub struct CloseOverlay {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for CloseOverlay {
    fn command_type(&self) -> &'static str {
        "navigation.close_overlay"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
