use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the built-in radial gradient used to shade sphere discs.
pub const SPHERE_GRADIENT: &str = "sphereGradFill";

/// Gradient filling hemisphere silhouettes.
pub const HEMISPHERE_GRADIENT: &str = "hemisphereGradFill";

/// Gradient filling clipped sphere caps.
pub const SPHERE_CAP_GRADIENT: &str = "spherecapGradFill";

/// Dash pattern emitted for dashed strokes (figure-space units).
pub const DASH_PATTERN: &str = "0.01,0.01";

/// Format a number for markup output: at most six decimals, no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{value:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// An RGB colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const DARK_GREEN: Self = Self::new(0.0, 0.5, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const LIGHT_RED: Self = Self::new(1.0, 0.5, 0.5);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f64) -> Self {
        Self::new(level, level, level)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}%,{}%,{}%)",
            fmt_num(self.r * 100.0),
            fmt_num(self.g * 100.0),
            fmt_num(self.b * 100.0)
        )
    }
}

/// How a drawable is stroked and filled.
///
/// Widths are in figure-space units, not pixels. `Display` renders the
/// value as the body of an inline `style` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub draw_lines: bool,
    pub draw_filled: bool,
    /// Join the last point back to the first.
    pub close_path: bool,
    pub dashed: bool,
    pub line_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub fill_opacity: f64,
    /// Gradient fill identifier; replaces `fill_color` when filling.
    pub gradient: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            draw_lines: true,
            draw_filled: true,
            close_path: true,
            dashed: false,
            line_color: Color::BLACK,
            fill_color: Color::LIGHT_RED,
            line_width: 0.05,
            fill_opacity: 0.5,
            gradient: None,
        }
    }
}

impl Style {
    /// Closed, unfilled outline.
    pub fn outline(color: Color, width: f64) -> Self {
        Self {
            draw_filled: false,
            line_color: color,
            line_width: width,
            ..Self::default()
        }
    }

    /// Open polyline (segments, arcs).
    pub fn polyline(color: Color, width: f64) -> Self {
        Self {
            close_path: false,
            ..Self::outline(color, width)
        }
    }

    /// Filled area without stroke.
    pub fn solid(color: Color, opacity: f64) -> Self {
        Self {
            draw_lines: false,
            fill_color: color,
            fill_opacity: opacity,
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, color: Color, opacity: f64) -> Self {
        self.draw_filled = true;
        self.fill_color = color;
        self.fill_opacity = opacity;
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    pub fn without_fill(mut self) -> Self {
        self.draw_filled = false;
        self
    }

    pub fn with_gradient(mut self, id: impl Into<String>) -> Self {
        self.draw_filled = true;
        self.gradient = Some(id.into());
        self
    }

    pub fn with_line(mut self, color: Color, width: f64) -> Self {
        self.draw_lines = true;
        self.line_color = color;
        self.line_width = width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn open(mut self) -> Self {
        self.close_path = false;
        self
    }

    /// Gradient actually referenced by the serialized style, if any.
    pub fn gradient_ref(&self) -> Option<&str> {
        if self.draw_filled {
            self.gradient.as_deref()
        } else {
            None
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.draw_filled, self.gradient.as_deref()) {
            (true, Some(id)) => write!(f, "fill:url(#{id}); ")?,
            (true, None) => write!(f, "fill:{}; ", self.fill_color)?,
            (false, _) => write!(f, "fill:none; ")?,
        }
        if self.draw_filled {
            write!(f, "fill-opacity:{}; ", fmt_num(self.fill_opacity))?;
        }
        if self.draw_lines {
            write!(f, "stroke:{}; ", self.line_color)?;
            write!(f, "stroke-width:{}", fmt_num(self.line_width))?;
            if self.dashed {
                write!(f, "; stroke-dasharray:{DASH_PATTERN}")?;
            }
        } else {
            write!(f, "stroke:none")?;
        }
        Ok(())
    }
}
