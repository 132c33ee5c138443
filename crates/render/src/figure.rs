//! A camera plus a scene, rendered once to an SVG document.

use std::path::Path;

use fig_kernel::{BoundingBox2d, Camera, Point2d};
use fig_scene::style::{SPHERE_GRADIENT, fmt_num};
use fig_scene::{Composite, Drawable, ProjectedDrawable};
use svg::Document;
use svg::node::element::Group;
use tracing::{debug, info, instrument};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::gradient::{GradientRegistry, RadialGradientDef};
use crate::svg_writer;

/// World-space window shown by the document and its physical size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Lower-left corner of the margined content box.
    pub min: Point2d,
    pub width: f64,
    pub height: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Viewport {
    /// Grow `bounds` by `margin_fraction` of its horizontal extent on every
    /// side and size the document to `width_cm`, keeping the aspect ratio.
    pub fn fit(bounds: &BoundingBox2d, config: &RenderConfig) -> Result<Self, RenderError> {
        let margin = config.margin_fraction * bounds.width();
        let framed = bounds.expanded(margin);
        let (width, height) = (framed.width(), framed.height());
        if !(width > 0.0 && height > 0.0) {
            return Err(RenderError::DegenerateBounds { width, height });
        }
        Ok(Self {
            min: framed.min,
            width,
            height,
            width_cm: config.width_cm,
            height_cm: config.width_cm * height / width,
        })
    }

    /// Flip y and shift the content back into the view box.
    pub fn flip_transform(&self) -> String {
        format!("translate(0 {}) scale(1 -1)", fmt_num(2.0 * self.min.y + self.height))
    }

    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            fmt_num(self.min.x),
            fmt_num(self.min.y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

#[derive(Debug, Clone)]
pub struct Figure {
    camera: Camera,
    scene: Composite,
    gradients: GradientRegistry,
    config: RenderConfig,
}

impl Figure {
    /// A figure with the sphere-disc gradient already registered.
    pub fn new(camera: Camera, scene: Composite) -> Self {
        let mut gradients = GradientRegistry::new();
        gradients.register(SPHERE_GRADIENT, RadialGradientDef::default());
        Self {
            camera,
            scene,
            gradients,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Register the default radial gradient under `id`.
    pub fn with_gradient(mut self, id: &str) -> Self {
        self.gradients.register(id, RadialGradientDef::default());
        self
    }

    pub fn push(&mut self, item: impl Into<Drawable>) {
        self.scene.push(item);
    }

    /// Number of non-composite drawables in the scene.
    pub fn leaf_count(&self) -> usize {
        self.scene.children().iter().map(Drawable::leaf_count).sum()
    }

    /// One recursive projection pass over the whole scene.
    pub fn project(&self) -> ProjectedDrawable {
        ProjectedDrawable::composite(
            self.scene
                .children()
                .iter()
                .map(|child| child.project(&self.camera))
                .collect(),
        )
    }

    pub fn render_to_document(&self) -> Result<Document, RenderError> {
        let projected = self.project();
        self.gradients.check_references(&projected)?;

        let bounds = projected.bounds.ok_or(RenderError::EmptyScene)?;
        let viewport = Viewport::fit(&bounds, &self.config)?;
        debug!(?viewport, leaves = projected.leaf_count(), "laid out figure");

        let body = svg_writer::append(Group::new().set("transform", viewport.flip_transform()), &projected);

        let mut document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", format!("{}cm", fmt_num(viewport.width_cm)))
            .set("height", format!("{}cm", fmt_num(viewport.height_cm)))
            .set("viewBox", viewport.view_box());
        if !self.gradients.is_empty() {
            document = document.add(self.gradients.to_definitions());
        }
        Ok(document.add(body))
    }

    pub fn render_to_string(&self) -> Result<String, RenderError> {
        Ok(self.render_to_document()?.to_string())
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn render_to_file(&self, path: &Path) -> Result<(), RenderError> {
        let document = self.render_to_document()?;
        svg::save(path, &document).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(leaves = self.leaf_count(), "wrote figure");
        Ok(())
    }
}
