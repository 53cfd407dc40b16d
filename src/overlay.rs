//! Overlay extension entry point.
//!
//! [`OverlayExtension`] owns the ECS world holding every piece of overlay
//! state and exposes one method per host event. The host calls these from
//! its own event dispatch; the world routes each event to the observers
//! listed in [`register_observers`].
//!
//! # Startup
//!
//! 1. Read `data.json` (or fall back to the built-in demo rule)
//! 2. Validate the rules and load every frame texture through the host loader
//! 3. Insert resources
//! 4. Register observers
//!
//! Textures are all loaded before any observer exists, so no handler can
//! ever see a half-loaded rule store.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::displaysizechanged::DisplaySizeChangedEvent;
use crate::events::locationchanged::LocationChangedEvent;
use crate::events::ticked::TickedEvent;
use crate::resources::maplocation::MapPropertySource;
use crate::resources::overlayconfig::OverlayConfig;
use crate::resources::overlaydata::OverlayData;
use crate::resources::renderdiagnostics::RenderDiagnostics;
use crate::resources::rulestore::RuleStore;
use crate::resources::screengeometry::{DisplayState, GeometryCheck, ScreenGeometry};
use crate::resources::selection::OverlaySelection;
use crate::resources::texture::TextureLoader;
use crate::systems::animation::advance_overlay_frame_observer;
use crate::systems::geometry::{check_screen_geometry_observer, recompute_geometry_observer};
use crate::systems::render::{DrawSurface, render_overlay};
use crate::systems::selection::select_overlay_observer;

/// Register the event → handler table.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(advance_overlay_frame_observer));
    world.spawn(Observer::new(check_screen_geometry_observer));
    world.spawn(Observer::new(select_overlay_observer));
    world.spawn(Observer::new(recompute_geometry_observer));
    // Ensure the observers are registered before the host triggers anything.
    world.flush();
}

/// The overlay extension: state plus event entry points.
pub struct OverlayExtension {
    world: World,
}

impl OverlayExtension {
    /// Start the extension, reading rules from `config.data_path`.
    pub fn new(
        config: OverlayConfig,
        display: DisplayState,
        loader: &mut dyn TextureLoader,
    ) -> Self {
        let data = OverlayData::load_or_default(&config.data_path, config.persist_default_data);
        Self::with_data(config, data, display, loader)
    }

    /// Start the extension from already parsed rule data.
    pub fn with_data(
        config: OverlayConfig,
        data: OverlayData,
        display: DisplayState,
        loader: &mut dyn TextureLoader,
    ) -> Self {
        let rules = RuleStore::validate(data, loader);
        info!(
            "Loaded {} overlay rule(s); overlays {}",
            rules.len(),
            if config.enabled { "enabled" } else { "disabled" }
        );

        let mut world = World::new();
        world.insert_resource(config);
        world.insert_resource(rules);
        world.insert_resource(OverlaySelection::default());
        world.insert_resource(ScreenGeometry::from_display(&display));
        world.insert_resource(GeometryCheck {
            initial_done: false,
            last_fullscreen: display.fullscreen,
        });
        world.insert_resource(display);
        world.insert_resource(RenderDiagnostics::default());

        register_observers(&mut world);

        Self { world }
    }

    /// Host tick-advanced event.
    pub fn ticked(&mut self, ticks: u64) {
        self.world.trigger(TickedEvent { ticks });
    }

    /// Host player-location-changed event.
    pub fn location_changed(&mut self, location: &(impl MapPropertySource + ?Sized)) {
        let key = self.world.resource::<OverlayConfig>().property_key.clone();
        self.world
            .trigger(LocationChangedEvent::read_from(location, &key));
    }

    /// Host display-size-changed event.
    pub fn display_size_changed(&mut self, display: DisplayState) {
        self.set_display(display);
        self.world.trigger(DisplaySizeChangedEvent {});
    }

    /// Update the host display state without signalling a resize.
    ///
    /// A fullscreen flip is still picked up on the next tick.
    pub fn set_display(&mut self, display: DisplayState) {
        *self.world.resource_mut::<DisplayState>() = display;
    }

    /// Host render-pass event.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) {
        render_overlay(&mut self.world, surface);
    }

    /// Current active rule and frame.
    pub fn selection(&self) -> OverlaySelection {
        *self.world.resource::<OverlaySelection>()
    }

    /// Tracked screen geometry.
    pub fn geometry(&self) -> ScreenGeometry {
        *self.world.resource::<ScreenGeometry>()
    }

    /// Validated overlay rules.
    pub fn rules(&self) -> &RuleStore {
        self.world.resource::<RuleStore>()
    }

    /// Active configuration.
    pub fn config(&self) -> &OverlayConfig {
        self.world.resource::<OverlayConfig>()
    }

    /// Underlying ECS world, for inspection.
    pub fn world(&self) -> &World {
        &self.world
    }
}
