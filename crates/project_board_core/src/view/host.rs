//! UI host contracts implemented by rendering backends.

use crate::view::component::InsertPosition;

/// Input fields of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Title, Self::Description, Self::People];

    /// Element id of the field inside the form template.
    pub fn id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Surface the input form renders into.
pub trait FormHost {
    fn attach(&mut self, element_id: &str, position: InsertPosition);

    /// Raw text currently in `field`.
    fn field_value(&self, field: FormField) -> String;

    fn set_field_value(&mut self, field: FormField, value: &str);

    /// Shows a blocking, user-facing message.
    fn alert(&mut self, message: &str);
}

/// Surface one project list renders into.
///
/// Hosts are driven from store notifications, so they must be `Send`.
pub trait ListHost: Send {
    fn attach(&mut self, element_id: &str, position: InsertPosition);

    fn set_list_id(&mut self, list_id: &str);

    fn set_heading(&mut self, heading: &str);

    fn clear_items(&mut self);

    fn append_item(&mut self, text: &str);
}
