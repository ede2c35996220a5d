//! Shared component lifecycle.

/// Where a component's root element is inserted inside the app host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

/// Lifecycle shared by every view.
///
/// Constructors attach the root element at `insert_position()` and then call
/// `configure()` and `render_content()` once each, in that order.
pub trait Component {
    /// Id assigned to the component's root element.
    fn element_id(&self) -> String;

    fn insert_position(&self) -> InsertPosition;

    /// Wires event handlers and store listeners.
    fn configure(&mut self) {}

    /// Fills static content such as headings and child element ids.
    fn render_content(&mut self) {}
}
