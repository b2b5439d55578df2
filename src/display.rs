// Display windows for the frame and its mask.
// Visual: one resizable window per placement, parked at its screen position.

use crate::error::{Error, Result};
use crate::types::{BinaryMask, FrameBuffer};
use log::debug;
use minifb::{Key, Window, WindowOptions};
use serde::{Deserialize, Serialize};

/// Which buffer a window shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowSource {
    /// The annotated color frame.
    #[default]
    Frame,
    /// The cleaned binary mask, as grayscale.
    Mask,
}

/// Where a named window should appear on screen, and what it shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPlacement {
    pub name: String,
    pub x: isize,
    pub y: isize,
    #[serde(default)]
    pub source: WindowSource,
}

impl WindowPlacement {
    /// A window showing the frame.
    pub fn new(name: impl Into<String>, x: isize, y: isize) -> Self {
        Self { name: name.into(), x, y, source: WindowSource::Frame }
    }

    pub fn showing(mut self, source: WindowSource) -> Self {
        self.source = source;
        self
    }
}

pub struct Display {
    name: String,
    source: WindowSource,
    window: Window, // the on-screen window you see
}

impl Display {
    /// Create a resizable window of the given size and move it into place.
    /// Visual: a new empty window appears at (x, y) with the placement's title.
    pub fn open(placement: &WindowPlacement, width: usize, height: usize) -> Result<Self> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(&placement.name, width, height, options)
            .map_err(|e| Error::WindowInit(format!("{}: {e}", placement.name)))?;
        window.set_position(placement.x, placement.y);
        window.set_target_fps(30);
        debug!("window '{}' at ({}, {})", placement.name, placement.x, placement.y);
        Ok(Self { name: placement.name.clone(), source: placement.source, window })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> WindowSource {
        self.source
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<()> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(format!("{}: {e}", self.name)))
    }

    /// Visual: the mask shows as white blobs on black.
    pub fn present_mask(&mut self, mask: &BinaryMask) -> Result<()> {
        self.present(&mask.to_frame())
    }

    /// Push whichever buffer this window was placed to show.
    pub fn present_source(&mut self, frame: &FrameBuffer, mask: &BinaryMask) -> Result<()> {
        match self.source {
            WindowSource::Frame => self.present(frame),
            WindowSource::Mask => self.present_mask(mask),
        }
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

/// Open every window of `layout`, in order. An empty layout opens nothing.
pub fn setup_windows(layout: &[WindowPlacement], width: usize, height: usize) -> Result<Vec<Display>> {
    layout
        .iter()
        .map(|placement| Display::open(placement, width, height))
        .collect()
}
