//! Localization key naming
//!
//! Every generated class and property is looked up through two resource keys:
//! `<name>DisplayName` and `<name>Description`. The display-name entry of a new
//! key carries a translator comment; the description entry carries none.

/// Translator comment attached to a class display-name entry
pub const CLASS_NAME_COMMENT: &str = "activity name";

/// Translator comment attached to a property display-name entry
pub const PROPERTY_NAME_COMMENT: &str = "property name";

/// Key of the display-name string for a class or property
pub fn display_name_key(name: &str) -> String {
    format!("{}DisplayName", name)
}

/// Key of the description string for a class or property
pub fn description_key(name: &str) -> String {
    format!("{}Description", name)
}

/// What a pair of keys belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOwner {
    /// The generated class itself
    Class,
    /// One generated property
    Property,
}

impl KeyOwner {
    /// Comment for the display-name entry of this owner
    pub fn display_name_comment(&self) -> &'static str {
        match self {
            KeyOwner::Class => CLASS_NAME_COMMENT,
            KeyOwner::Property => PROPERTY_NAME_COMMENT,
        }
    }
}
