//! Plain-text frames.
//!
//! ```text
//! . . . . .
//! . A B . .
//! . . C . .
//!
//! Move block C down.
//! ```

use bp_core::{Coord, PuzzleConfig};
use bp_episode::{EpisodeRecord, Frame, Renderer};

/// Collects one text frame per rendered state.
///
/// Occupied cells show the block label, or `*` for an unlabeled dump;
/// empty cells show `.`.  Captions, if any, follow the grid after a blank
/// line.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    width:       u32,
    height:      u32,
    labeled:     bool,
    frames:      Vec<String>,
    final_frame: Option<String>,
}

impl AsciiRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labeled: true,
            frames: Vec::new(),
            final_frame: None,
        }
    }

    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Draw every block as `*` instead of its label.
    pub fn unlabeled(mut self) -> Self {
        self.labeled = false;
        self
    }

    pub fn draw(&self, frame: &Frame<'_>) -> String {
        let mut out = String::with_capacity((self.width as usize * 2) * self.height as usize);
        for y in 0..self.height {
            let row: Vec<String> = (0..self.width)
                .map(|x| self.cell(frame, Coord::new(x, y)).to_string())
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        if !frame.captions.is_empty() {
            out.push('\n');
            for caption in frame.captions {
                out.push_str(caption);
                out.push('\n');
            }
        }
        out
    }

    fn cell(&self, frame: &Frame<'_>, at: Coord) -> char {
        if self.labeled {
            frame.label_at(at).unwrap_or('.')
        } else if frame.positions.contains(&at) {
            '*'
        } else {
            '.'
        }
    }

    /// Frames of the current episode, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn final_frame(&self) -> Option<&str> {
        self.final_frame.as_deref()
    }

    /// Remove and return the collected frames, final frame last.
    pub fn drain(&mut self) -> Vec<String> {
        let mut frames = std::mem::take(&mut self.frames);
        frames.extend(self.final_frame.take());
        frames
    }
}

impl Renderer for AsciiRenderer {
    fn on_frame(&mut self, frame: &Frame<'_>) {
        let text = self.draw(frame);
        self.frames.push(text);
    }

    fn on_final(&mut self, frame: &Frame<'_>, _record: &EpisodeRecord) {
        self.final_frame = Some(self.draw(frame));
    }
}
