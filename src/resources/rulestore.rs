//! Overlay rule store.
//!
//! The [`RuleStore`] resource holds the validated overlay rules in the order
//! they were declared. It is built once at startup by [`RuleStore::validate`]
//! and never changes afterwards; the selection state refers into it by index.

use bevy_ecs::prelude::Resource;
use log::{error, info};

use crate::resources::overlaydata::OverlayData;
use crate::resources::texture::{TextureHandle, TextureLoader};

/// Extension appended to every image base path.
pub const IMAGE_EXTENSION: &str = ".png";

/// Immutable animation timing of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Number of frames. `1` means static.
    pub frame_count: i32,
    /// Ticks each frame stays on screen.
    pub frame_duration_ticks: i32,
}

impl AnimationSpec {
    pub fn new(frame_count: i32, frame_duration_ticks: i32) -> Self {
        Self {
            frame_count,
            frame_duration_ticks,
        }
    }

    /// True when the rule cycles through more than one frame.
    pub fn is_animated(&self) -> bool {
        self.frame_count > 1
    }

    /// True when both parameters are positive.
    pub fn is_valid(&self) -> bool {
        self.frame_count > 0 && self.frame_duration_ticks > 0
    }
}

/// A configured binding from a map property value to an overlay image.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRule {
    /// Map property value that activates the rule. Empty never matches.
    pub property_value: String,
    /// Image path of frame 0, extension included.
    pub image_path: String,
    pub animation: AnimationSpec,
    /// Loaded frames in order. Frames that failed to load are absent.
    pub frame_textures: Vec<TextureHandle>,
}

impl OverlayRule {
    /// Whether a location carrying `value` activates this rule.
    pub fn matches(&self, value: &str) -> bool {
        !self.property_value.is_empty() && self.property_value == value
    }
}

/// Ordered, immutable list of validated overlay rules.
#[derive(Resource, Debug, Clone, Default)]
pub struct RuleStore {
    pub rules: Vec<OverlayRule>,
}

impl RuleStore {
    /// Validate raw data and load every frame texture through `loader`.
    ///
    /// Per-frame load failures are logged and the frame is omitted. Invalid
    /// animation parameters are logged but kept as configured.
    pub fn validate(data: OverlayData, loader: &mut dyn TextureLoader) -> Self {
        let mut rules = Vec::with_capacity(data.overlay_properties.len());

        for property in data.overlay_properties {
            info!("Validating data for {}.", property.property_name);
            let image_path = format!("{}{}", property.image_path, IMAGE_EXTENSION);
            let animation = AnimationSpec::new(
                property.animation.number_of_frames,
                property.animation.frame_duration,
            );

            let mut frame_textures = Vec::new();
            for index in 0..animation.frame_count.max(0) as u32 {
                let path = frame_path(&image_path, index);
                match loader.load(&path) {
                    Ok(handle) => frame_textures.push(handle),
                    Err(e) => error!(
                        "{}. Failed when loading frame {} of image asset '{}'.",
                        e, index, image_path
                    ),
                }
            }

            if animation.frame_duration_ticks <= 0 {
                error!(
                    "Invalid FrameDuration when loading image asset '{}'.",
                    image_path
                );
            }
            if animation.frame_count <= 0 {
                error!(
                    "Invalid NumberOfFrames when loading image asset '{}'.",
                    image_path
                );
            }

            rules.push(OverlayRule {
                property_value: property.property_name,
                image_path,
                animation,
                frame_textures,
            });
        }

        RuleStore { rules }
    }

    /// Index of the first rule matching `value`, if any.
    pub fn find(&self, value: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(value))
    }

    pub fn get(&self, index: usize) -> Option<&OverlayRule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Path of frame `index` for an image whose frame 0 lives at `image_path`.
///
/// Frame 0 is `image_path` itself. Later frames replace everything from the
/// first `.` of the file name with `<index>.png`, so `ov/lava.png` yields
/// `ov/lava1.png`, `ov/lava2.png`, ...
pub fn frame_path(image_path: &str, index: u32) -> String {
    if index == 0 {
        return image_path.to_string();
    }
    let name_start = image_path
        .rfind(['/', '\\'])
        .map(|sep| sep + 1)
        .unwrap_or(0);
    let stem_end = image_path[name_start..]
        .find('.')
        .map(|dot| name_start + dot)
        .unwrap_or(image_path.len());
    format!("{}{}{}", &image_path[..stem_end], index, IMAGE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OverlayError;
    use crate::resources::overlaydata::OverlayProperty;
    use rustc_hash::FxHashMap;

    /// Loader that only knows a fixed set of paths.
    #[derive(Default)]
    struct MapLoader {
        known: FxHashMap<String, TextureHandle>,
        requested: Vec<String>,
    }

    impl MapLoader {
        fn with(paths: &[&str]) -> Self {
            let mut loader = MapLoader::default();
            for (i, p) in paths.iter().enumerate() {
                loader.known.insert(p.to_string(), TextureHandle(i as u32));
            }
            loader
        }
    }

    impl TextureLoader for MapLoader {
        fn load(&mut self, path: &str) -> Result<TextureHandle, OverlayError> {
            self.requested.push(path.to_string());
            self.known
                .get(path)
                .copied()
                .ok_or_else(|| OverlayError::texture(path, "not found"))
        }
    }

    fn data(props: Vec<OverlayProperty>) -> OverlayData {
        OverlayData {
            overlay_properties: props,
        }
    }

    #[test]
    fn test_frame_path() {
        assert_eq!(frame_path("ov/lava.png", 0), "ov/lava.png");
        assert_eq!(frame_path("ov/lava.png", 1), "ov/lava1.png");
        assert_eq!(frame_path("ov/lava.png", 12), "ov/lava12.png");
        assert_eq!(frame_path("./assets/rain.png", 2), "./assets/rain2.png");
        assert_eq!(frame_path("fog.v2.png", 3), "fog3.png");
        assert_eq!(frame_path("noext", 1), "noext1.png");
    }

    #[test]
    fn test_validate_loads_all_frames() {
        let mut loader = MapLoader::with(&["ov/lava.png", "ov/lava1.png", "ov/lava2.png"]);
        let store = RuleStore::validate(
            data(vec![OverlayProperty::new("Cave", "ov/lava", 3, 10)]),
            &mut loader,
        );
        assert_eq!(store.len(), 1);
        let rule = &store.rules[0];
        assert_eq!(rule.image_path, "ov/lava.png");
        assert_eq!(
            rule.frame_textures,
            vec![TextureHandle(0), TextureHandle(1), TextureHandle(2)]
        );
        assert_eq!(
            loader.requested,
            vec!["ov/lava.png", "ov/lava1.png", "ov/lava2.png"]
        );
    }

    #[test]
    fn test_validate_omits_failed_frames() {
        let mut loader = MapLoader::with(&["ov/lava.png", "ov/lava2.png"]);
        let store = RuleStore::validate(
            data(vec![OverlayProperty::new("Cave", "ov/lava", 3, 10)]),
            &mut loader,
        );
        assert_eq!(
            store.rules[0].frame_textures,
            vec![TextureHandle(0), TextureHandle(1)]
        );
        assert_eq!(store.rules[0].animation.frame_count, 3);
    }

    #[test]
    fn test_validate_keeps_invalid_animation() {
        let mut loader = MapLoader::with(&["a.png"]);
        let store = RuleStore::validate(
            data(vec![
                OverlayProperty::new("A", "a", 1, 0),
                OverlayProperty::new("B", "b", 0, 10),
            ]),
            &mut loader,
        );
        assert_eq!(store.len(), 2);
        assert!(!store.rules[0].animation.is_valid());
        assert!(!store.rules[1].animation.is_valid());
        assert!(store.rules[1].frame_textures.is_empty());
        // zero frames means nothing is requested for "b"
        assert_eq!(loader.requested, vec!["a.png"]);
    }

    #[test]
    fn test_find_first_match_wins() {
        let mut loader = MapLoader::default();
        let store = RuleStore::validate(
            data(vec![
                OverlayProperty::new("Rain", "r", 1, 60),
                OverlayProperty::new("Cave", "c1", 1, 60),
                OverlayProperty::new("Cave", "c2", 1, 60),
            ]),
            &mut loader,
        );
        assert_eq!(store.find("Cave"), Some(1));
        assert_eq!(store.find("Rain"), Some(0));
        assert_eq!(store.find("cave"), None);
        assert_eq!(store.find(""), None);
    }

    #[test]
    fn test_empty_property_value_never_matches() {
        let rule = OverlayRule {
            property_value: String::new(),
            image_path: "x.png".into(),
            animation: AnimationSpec::new(1, 60),
            frame_textures: vec![],
        };
        assert!(!rule.matches(""));
    }
}
