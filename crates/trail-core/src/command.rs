//! Commands addressed to an aggregate.

use uuid::Uuid;

/// A request addressed to an aggregate. Every event it produces carries the
/// same correlation ID.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted type name, `<context>.<action>`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID shared with the resulting events.
    fn correlation_id(&self) -> Uuid;

    /// The bounded context prefix of [`command_type`](Self::command_type).
    fn context(&self) -> &'static str {
        let command_type = self.command_type();
        command_type
            .split_once('.')
            .map_or(command_type, |(context, _)| context)
    }
}
