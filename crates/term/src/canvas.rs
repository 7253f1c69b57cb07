//! World-space pixel canvas with half-block packing.
//!
//! Terminal glyphs are roughly twice as tall as they are wide, and one
//! cell is far too coarse for pixel-level motion. The canvas therefore
//! works on a pixel grid with two rows per terminal row and packs pairs
//! of pixels into '▀' cells (foreground = top pixel, background =
//! bottom). A [`Camera`] maps world pixels onto that grid; [`Camera::fit`]
//! picks a uniform zoom so the whole world is visible and centered.

use tui_arcade_types::{Rect, Rgb, Surface};

use crate::fb::{Cell, FrameBuffer};

/// Terminal viewport dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// World-to-screen transform: uniform zoom plus a pixel pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl Camera {
    /// Fit a world of the given pixel size into the viewport, centered.
    pub fn fit(world_w: f32, world_h: f32, viewport: Viewport) -> Self {
        let screen_w = viewport.width as f32;
        let screen_h = (viewport.height as f32) * 2.0;

        let zoom = (screen_w / world_w).min(screen_h / world_h);
        Self {
            zoom,
            pan_x: (screen_w - world_w * zoom) / 2.0,
            pan_y: (screen_h - world_h * zoom) / 2.0,
        }
    }

    #[inline]
    fn to_screen_x(&self, wx: f32) -> i32 {
        (wx * self.zoom + self.pan_x).round() as i32
    }

    #[inline]
    fn to_screen_y(&self, wy: f32) -> i32 {
        (wy * self.zoom + self.pan_y).round() as i32
    }
}

/// Pixel buffer the demo views draw into through [`Surface`].
///
/// One canvas is kept per demo run; `begin` clears it for the frame and
/// `pack_into` produces the framebuffer the renderer flushes.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
    camera: Camera,
    overlays: Vec<(u16, u16, String, Rgb)>,
}

impl PixelCanvas {
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.width;
        let height = viewport.height * 2;
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
            camera: Camera {
                zoom: 1.0,
                pan_x: 0.0,
                pan_y: 0.0,
            },
            overlays: Vec::new(),
        }
    }

    /// Start a frame: adopt the camera, clear to a background color,
    /// drop last frame's overlays. Also picks up viewport resizes.
    pub fn begin(&mut self, viewport: Viewport, camera: Camera, background: Rgb) {
        self.width = viewport.width;
        self.height = viewport.height * 2;
        self.pixels
            .resize((self.width as usize) * (self.height as usize), background);
        self.pixels.fill(background);
        self.camera = camera;
        self.overlays.clear();
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Pack pixel pairs into half-block cells, then lay text overlays on
    /// top.
    pub fn pack_into(&self, fb: &mut FrameBuffer) {
        fb.resize(self.width, self.height / 2);

        for row in 0..(self.height / 2) {
            for col in 0..self.width {
                let top = self.pixel(col, row * 2).unwrap_or_default();
                let bottom = self.pixel(col, row * 2 + 1).unwrap_or_default();

                let cell = if top == bottom {
                    // A space shows the background only; cheaper to diff
                    // than two identical half-blocks.
                    Cell {
                        ch: ' ',
                        fg: Rgb::default(),
                        bg: top,
                    }
                } else {
                    Cell {
                        ch: '▀',
                        fg: top,
                        bg: bottom,
                    }
                };
                fb.set(col, row, cell);
            }
        }

        for (col, row, text, color) in &self.overlays {
            fb.put_str(*col, *row, text, *color, Rgb::new(0, 0, 0));
        }
    }
}

impl Surface for PixelCanvas {
    fn rect(&mut self, rect: Rect, color: Rgb) {
        let x0 = self.camera.to_screen_x(rect.x).max(0);
        let y0 = self.camera.to_screen_y(rect.y).max(0);
        let mut x1 = self.camera.to_screen_x(rect.x + rect.w);
        let mut y1 = self.camera.to_screen_y(rect.y + rect.h);

        // Never let a non-empty rect vanish entirely at low zoom.
        if rect.w > 0.0 && x1 <= x0 {
            x1 = x0 + 1;
        }
        if rect.h > 0.0 && y1 <= y0 {
            y1 = y0 + 1;
        }

        let x1 = x1.min(self.width as i32);
        let y1 = y1.min(self.height as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
            }
        }
    }

    fn text(&mut self, col: u16, row: u16, s: &str, color: Rgb) {
        self.overlays.push((col, row, s.to_string(), color));
    }
}
