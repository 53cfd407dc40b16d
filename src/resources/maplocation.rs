//! Map locations and their properties.
//!
//! The host hands the extension whatever it uses to represent a location;
//! all the extension needs is a lookup of one property by key name, provided
//! through [`MapPropertySource`]. [`MapLocation`] is a plain implementation
//! for hosts that keep map properties in a table.

use rustc_hash::FxHashMap;

/// Lookup of a map property by key name.
pub trait MapPropertySource {
    /// String value of property `key`, or `None` if the location lacks it.
    fn map_property(&self, key: &str) -> Option<String>;
}

/// A named location with string map properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapLocation {
    pub name: String,
    pub properties: FxHashMap<String, String>,
}

impl MapLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: FxHashMap::default(),
        }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl MapPropertySource for MapLocation {
    fn map_property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let loc = MapLocation::new("Mine").with_property("CustomMapOverlay", "Cave");
        assert_eq!(loc.map_property("CustomMapOverlay").as_deref(), Some("Cave"));
        assert_eq!(loc.map_property("customMapOverlay"), None);
        assert_eq!(MapLocation::new("Farm").map_property("CustomMapOverlay"), None);
    }
}
