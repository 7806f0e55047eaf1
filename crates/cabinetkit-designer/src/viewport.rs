//! Viewport and coordinate transformation for the technical views.
//!
//! Handles conversion between pixel coordinates (screen space) and drawing
//! plane coordinates (millimetres, `u` right and `v` up). Fitting to a view
//! envelope uses the shared zoom so plan, elevation and section keep one
//! scale.

use std::fmt;

use cabinetkit_core::{Point2, Result, TechView};

use crate::envelope::ViewEnvelopes;
use crate::view::ViewAxes;

const MIN_ZOOM: f64 = 0.001;
const MAX_ZOOM: f64 = 100.0;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport with the drawing origin at the canvas center.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: canvas_width / 2.0,
            pan_y: canvas_height / 2.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Pixels per millimetre.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level; values outside the supported range are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to drawing-plane coordinates.
    ///
    /// ```text
    /// u = (pixel_x - pan_x) / zoom
    /// v = (canvas_height - pixel_y - pan_y) / zoom  // Flip Y-axis
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point2 {
        let u = (pixel_x - self.pan_x) / self.zoom;
        let v = (self.canvas_height - pixel_y - self.pan_y) / self.zoom;
        Point2::new(u, v)
    }

    /// Converts drawing-plane coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel_x = u * zoom + pan_x
    /// pixel_y = canvas_height - (v * zoom + pan_y)  // Flip Y-axis
    /// ```
    pub fn world_to_pixel(&self, point: &Point2) -> (f64, f64) {
        let pixel_x = point.x * self.zoom + self.pan_x;
        let pixel_y = self.canvas_height - (point.y * self.zoom + self.pan_y);
        (pixel_x, pixel_y)
    }

    /// Centers the viewport on a drawing-plane point.
    pub fn center_on(&mut self, point: &Point2) {
        self.pan_x = self.canvas_width / 2.0 - point.x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - point.y * self.zoom;
    }

    /// Zooms to a point, maintaining that point's screen position.
    pub fn zoom_to_point(&mut self, point: &Point2, new_zoom: f64) {
        if new_zoom <= MIN_ZOOM || new_zoom >= MAX_ZOOM {
            return;
        }
        let (pixel_x, pixel_y) = self.world_to_pixel(point);
        self.zoom = new_zoom;
        self.pan_x = pixel_x - point.x * new_zoom;
        self.pan_y = self.canvas_height - pixel_y - point.y * new_zoom;
    }

    /// Fit the viewport to the envelope of `view`.
    ///
    /// Uses the shared zoom of all views and centers on the envelope's camera
    /// target, expressed in the cabinet frame like the dimension lines. Fails
    /// for a canvas with no area.
    pub fn fit_to_envelope(&mut self, envelopes: &ViewEnvelopes, view: TechView) -> Result<()> {
        let zoom = envelopes.zoom(self.canvas_width, self.canvas_height)?;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let center = ViewAxes::new(view).project(&envelopes.get(view).frame_center());
        self.center_on(&center);
        Ok(())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.3}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
