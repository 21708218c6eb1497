use std::collections::HashMap;

/// A device as reported by the hub for a single scrape.
#[derive(PartialEq, Debug, Default)]
pub struct Device {
    pub name: Option<String>,
    pub label: String,
    pub r#type: String,
    pub model: String,
    pub manufacturer: String,
    pub room: String,
    pub attributes: HashMap<String, String>,
}
