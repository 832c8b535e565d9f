//! Selection subscriber trait

use super::SelectionContext;

/// Trait for components that need to respond to selection changes
pub trait SelectionSubscriber {
    /// Called after the active index of a surface changed
    fn on_selection_change(&self, context: &SelectionContext);
}
