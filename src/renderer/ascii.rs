//! Text renderer for terminals and logs
//!
//! Draws the play area as a character grid, one column block per lane.
//! Used by the native headless build.

use crate::platform::{FrameView, Presenter};
use crate::sim::GamePhase;

/// Renders frames to a string grid
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    /// Grid rows covering the play-area height
    pub rows: usize,
    /// Characters per lane
    pub lane_chars: usize,
    last_frame: String,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(12, 3)
    }
}

impl AsciiRenderer {
    pub fn new(rows: usize, lane_chars: usize) -> Self {
        Self {
            rows: rows.max(1),
            lane_chars: lane_chars.max(1),
            last_frame: String::new(),
        }
    }

    /// The most recently presented frame
    pub fn last_frame(&self) -> &str {
        &self.last_frame
    }

    /// Draw a frame into a new string
    pub fn render_to_string(&self, view: &FrameView<'_>) -> String {
        let lanes = view.lane_count.max(1) as usize;
        let width = lanes * self.lane_chars;
        let mut grid = vec![vec![' '; width]; self.rows];

        let row_of = |y: f32| -> Option<usize> {
            if y < 0.0 || y > view.area.height {
                return None;
            }
            let row = ((y / view.area.height) * self.rows as f32) as usize;
            Some(row.min(self.rows - 1))
        };

        let mut paint = |lane: u32, y: f32, ch: char| {
            let b = view.bounds_at(lane, y);
            if b.max.y <= 0.0 {
                return;
            }
            // Objects entering from above show on the first row once visible
            let top = row_of(b.min.y.max(0.0));
            let bottom = row_of(b.max.y.min(view.area.height));
            if let (Some(top), Some(bottom)) = (top, bottom) {
                let col = lane as usize * self.lane_chars;
                for row in &mut grid[top..=bottom] {
                    for cell in &mut row[col..col + self.lane_chars] {
                        *cell = ch;
                    }
                }
            }
        };

        for flash in view.flashes {
            paint(flash.lane, flash.y, '+');
        }
        for object in view.objects {
            paint(object.lane, object.y, '#');
        }

        let stars: String = (0..view.max_stars)
            .map(|i| if i < view.stars { '*' } else { '.' })
            .collect();
        let mut out = format!(
            "score {}  stage {}  [{}]{}\n",
            view.score,
            view.stage,
            stars,
            if view.endless { " ENDLESS" } else { "" }
        );
        for row in grid {
            out.push('|');
            out.extend(row);
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&"-".repeat(width));
        out.push('+');
        match view.phase {
            GamePhase::NotStarted => out.push_str("\n  press start"),
            GamePhase::Over => out.push_str(&format!("\n  GAME OVER  final score {}", view.score)),
            GamePhase::Running => {}
        }
        out
    }
}

impl Presenter for AsciiRenderer {
    fn present(&mut self, view: &FrameView<'_>) {
        self.last_frame = self.render_to_string(view);
        log::debug!("\n{}", self.last_frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_renders_object_in_its_lane() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::Running;
        state.spawn_object(2);
        state.objects[0].y = 0.0;

        let mut renderer = AsciiRenderer::new(10, 2);
        renderer.present(&FrameView::new(&state));
        let frame = renderer.last_frame();
        let first_row = frame.lines().nth(1).unwrap();
        assert_eq!(first_row, "|    ##  |");
        assert!(frame.starts_with("score 0  stage 1  [...]"));
    }

    #[test]
    fn test_hidden_object_not_drawn() {
        let mut state = GameState::new(1, Tuning::default());
        state.spawn_object(0);
        let renderer = AsciiRenderer::default();
        let frame = renderer.render_to_string(&FrameView::new(&state));
        assert!(!frame.contains('#'));
        assert!(frame.ends_with("press start"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::Over;
        state.score = 70;
        state.stars = 3;
        state.endless = true;
        let frame = AsciiRenderer::default().render_to_string(&FrameView::new(&state));
        assert!(frame.contains("[***] ENDLESS"));
        assert!(frame.contains("GAME OVER  final score 70"));
    }
}
