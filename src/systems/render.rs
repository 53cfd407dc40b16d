use bevy_ecs::prelude::*;
use log::warn;

use crate::resources::overlayconfig::OverlayConfig;
use crate::resources::renderdiagnostics::RenderDiagnostics;
use crate::resources::rulestore::RuleStore;
use crate::resources::screengeometry::ScreenGeometry;
use crate::resources::selection::OverlaySelection;
use crate::resources::texture::TextureHandle;

/// Destination rectangle of a draw call, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    /// Rectangle covering the whole tracked screen.
    pub fn full_screen(geometry: ScreenGeometry) -> Self {
        Self {
            x: 0,
            y: 0,
            width: geometry.w,
            height: geometry.h,
        }
    }
}

/// Drawing surface handed to the extension for one render pass.
///
/// `draw_texture` stretches the whole texture over `dest`, opaque and
/// untinted.
pub trait DrawSurface {
    fn draw_texture(&mut self, texture: TextureHandle, dest: ScreenRect);
}

/// Draw the active overlay frame over the whole screen.
///
/// At most one draw call per pass. Static rules always draw frame 0. When the
/// wanted frame never loaded the pass draws nothing and the gap is logged
/// once per (rule, frame).
pub fn render_overlay(world: &mut World, surface: &mut dyn DrawSurface) {
    if !world.resource::<OverlayConfig>().enabled {
        return;
    }
    let selection = *world.resource::<OverlaySelection>();
    let Some(rule_index) = selection.active_rule else {
        return;
    };
    let geometry = *world.resource::<ScreenGeometry>();

    let (frame, texture) = {
        let rules = world.resource::<RuleStore>();
        let Some(rule) = rules.get(rule_index) else {
            return;
        };
        let frame = if rule.animation.is_animated() {
            selection.frame_index
        } else {
            0
        };
        (frame, rule.frame_textures.get(frame).copied())
    };

    match texture {
        Some(texture) => surface.draw_texture(texture, ScreenRect::full_screen(geometry)),
        None => {
            if world
                .resource_mut::<RenderDiagnostics>()
                .report_missing(rule_index, frame)
            {
                warn!(
                    "Overlay rule {} has no loaded texture for frame {}; skipping draw",
                    rule_index, frame
                );
            }
        }
    }
}
