//! Gadget specification document model
//!
//! Typed rendition of a gadget spec as consumed by the metadata projector.
//! The shipped processor deserializes remote JSON documents into this
//! model; alternative processors may build it by other means.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// A parsed gadget specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GadgetSpec {
    /// Module-level preferences and metadata
    pub module_prefs: ModulePrefs,
    /// User preference definitions, in document order
    pub user_prefs: Vec<UserPref>,
    /// Views by name
    pub views: HashMap<String, View>,
}

/// Module-level preferences: title, author block, directory metadata,
/// features, and links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModulePrefs {
    /// Gadget title
    pub title: String,
    /// Link target for the title
    pub title_url: Option<Url>,
    /// Title shown in gadget directories
    pub directory_title: Option<String>,
    /// Author name
    pub author: Option<String>,
    /// Author contact address
    pub author_email: Option<String>,
    pub author_affiliation: Option<String>,
    pub author_location: Option<String>,
    pub author_photo: Option<String>,
    pub author_aboutme: Option<String>,
    pub author_quote: Option<String>,
    pub author_link: Option<String>,
    /// Directory thumbnail image
    pub thumbnail: Option<Url>,
    /// Directory screenshot image
    pub screenshot: Option<Url>,
    /// Directory categories
    pub categories: Vec<String>,
    /// Preferred height in pixels (0 when unspecified)
    pub height: u32,
    /// Preferred width in pixels (0 when unspecified)
    pub width: u32,
    pub show_stats: bool,
    pub show_in_directory: bool,
    pub singleton: bool,
    pub scaling: bool,
    pub scrolling: bool,
    /// Required and optional features, in document order
    pub features: Vec<Feature>,
    /// Related links
    pub links: Vec<LinkSpec>,
}

/// A feature dependency declared by a gadget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name
    pub name: String,
    /// Whether the gadget refuses to render without it
    #[serde(default = "default_true")]
    pub required: bool,
    /// Feature parameters; each name may carry several values
    #[serde(default)]
    pub params: HashMap<String, Vec<String>>,
}

/// A link attached to the module preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    /// Link relationship
    pub rel: String,
    /// Link target
    pub href: Url,
}

/// A user preference definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPref {
    /// Preference name
    pub name: String,
    /// Human-readable name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Value type
    #[serde(default)]
    pub data_type: DataType,
    /// Value applied when the user has not chosen one
    #[serde(default)]
    pub default_value: Option<String>,
    /// Choices for enum-typed preferences, in document order
    #[serde(default)]
    pub enum_values: Vec<EnumValuePair>,
}

/// One enum choice: a stored value and what to display for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValuePair {
    /// Stored value
    pub value: String,
    /// Displayed text; falls back to the value when absent
    #[serde(default)]
    pub display_value: Option<String>,
}

impl EnumValuePair {
    /// Text shown for this choice
    pub fn display(&self) -> &str {
        self.display_value.as_deref().unwrap_or(&self.value)
    }
}

/// User preference value types, lowercase on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    String,
    Hidden,
    Bool,
    Enum,
    List,
    Number,
}

/// A named view of a gadget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct View {
    /// Content type of the view
    #[serde(rename = "type")]
    pub view_type: ContentType,
    /// Render in quirks mode
    pub quirks: bool,
    pub preferred_height: Option<u32>,
    pub preferred_width: Option<u32>,
    /// Free-form view attributes
    pub attributes: HashMap<String, String>,
}

/// View content types, uppercase on the wire; lowercase accepted on input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// Inline markup rendered inside the container iframe
    #[default]
    #[serde(rename = "HTML", alias = "html")]
    Html,
    /// External content referenced by URL
    #[serde(rename = "URL", alias = "url")]
    Url,
}

fn default_true() -> bool {
    true
}
