//! Named radial gradients a figure may reference from its styles.

use fig_scene::{Color, ProjectedDrawable};
use svg::node::element::{Definitions, RadialGradient, Stop};
use tracing::debug;

use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Offset along the radius, in percent.
    pub offset: f64,
    pub color: Color,
    pub opacity: f64,
}

/// Radial gradient geometry in percent of the shape's bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradientDef {
    pub center: (f64, f64),
    pub radius: f64,
    pub focus: (f64, f64),
    pub stops: Vec<GradientStop>,
}

impl Default for RadialGradientDef {
    /// Faint white highlight towards the lower left fading to dark grey.
    fn default() -> Self {
        Self {
            center: (50.0, 50.0),
            radius: 50.0,
            focus: (25.0, 75.0),
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: Color::WHITE,
                    opacity: 0.2,
                },
                GradientStop {
                    offset: 100.0,
                    color: Color::gray(0.2),
                    opacity: 0.2,
                },
            ],
        }
    }
}

fn pct(v: f64) -> String {
    format!("{}%", fig_scene::style::fmt_num(v))
}

impl RadialGradientDef {
    pub fn to_element(&self, id: &str) -> RadialGradient {
        self.stops.iter().fold(
            RadialGradient::new()
                .set("id", id)
                .set("cx", pct(self.center.0))
                .set("cy", pct(self.center.1))
                .set("r", pct(self.radius))
                .set("fx", pct(self.focus.0))
                .set("fy", pct(self.focus.1)),
            |gradient, stop| {
                gradient.add(Stop::new().set("offset", pct(stop.offset)).set(
                    "style",
                    format!(
                        "stop-color:{}; stop-opacity:{}",
                        stop.color,
                        fig_scene::style::fmt_num(stop.opacity)
                    ),
                ))
            },
        )
    }
}

/// Gradient definitions keyed by identifier, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct GradientRegistry {
    entries: Vec<(String, RadialGradientDef)>,
}

impl GradientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` under `id`, replacing any earlier definition.
    pub fn register(&mut self, id: impl Into<String>, def: RadialGradientDef) {
        let id = id.into();
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => entry.1 = def,
            None => {
                debug!(%id, "registered gradient");
                self.entries.push((id, def));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&RadialGradientDef> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, def)| def)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail on the first gradient referenced in `scene` that is not registered.
    pub fn check_references(&self, scene: &ProjectedDrawable) -> Result<(), RenderError> {
        match scene.gradient_refs().into_iter().find(|id| !self.contains(id)) {
            Some(id) => Err(RenderError::UnknownGradient(id.to_string())),
            None => Ok(()),
        }
    }

    pub fn to_definitions(&self) -> Definitions {
        self.entries
            .iter()
            .fold(Definitions::new(), |defs, (id, def)| defs.add(def.to_element(id)))
    }
}
