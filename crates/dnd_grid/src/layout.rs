use bevy::prelude::*;
use grid_reorder::DragPosition;

pub const TILE_SIZE: f32 = 96.0;
pub const TILE_GAP: f32 = 8.0;
pub const LINE_PADDING: f32 = 8.0;
pub const LINE_GAP: f32 = 4.0;
/// World y of the top edge of the first line. Leaves room for the config panel.
pub const GRID_TOP: f32 = 200.0;

const SLOT_STEP: f32 = TILE_SIZE + TILE_GAP;
const LINE_HEIGHT: f32 = TILE_SIZE + 2.0 * LINE_PADDING;
const LINE_STEP: f32 = LINE_HEIGHT + LINE_GAP;

/// World-space geometry of the lines, horizontally centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    items_per_line: usize,
    line_count: usize,
}

impl GridLayout {
    pub const fn new(items_per_line: usize, line_count: usize) -> Self {
        Self {
            items_per_line,
            line_count,
        }
    }

    pub fn line_width(&self) -> f32 {
        let slots = self.items_per_line as f32;
        slots.mul_add(SLOT_STEP, -TILE_GAP) + 2.0 * LINE_PADDING
    }

    fn left(&self) -> f32 {
        -self.line_width() / 2.0
    }

    pub fn line_rect(&self, line: usize) -> Rect {
        let top = (line as f32).mul_add(-LINE_STEP, GRID_TOP);
        let left = self.left();
        Rect::new(left, top - LINE_HEIGHT, left + self.line_width(), top)
    }

    pub fn slot_center(&self, slot: DragPosition) -> Vec2 {
        let rect = self.line_rect(slot.line);
        Vec2::new(
            (slot.position as f32).mul_add(SLOT_STEP, rect.min.x + LINE_PADDING + TILE_SIZE / 2.0),
            rect.max.y - LINE_PADDING - TILE_SIZE / 2.0,
        )
    }

    /// The slot under `point`, or `None` when it is outside every line.
    pub fn slot_at(&self, point: Vec2) -> Option<DragPosition> {
        if point.y > GRID_TOP || self.items_per_line == 0 {
            return None;
        }

        let line = ((GRID_TOP - point.y) / LINE_STEP) as usize;
        if line >= self.line_count || !self.line_rect(line).contains(point) {
            return None;
        }

        let offset = point.x - self.left() - LINE_PADDING + TILE_GAP / 2.0;
        let position = ((offset / SLOT_STEP).max(0.0) as usize).min(self.items_per_line - 1);

        Some(DragPosition::new(line, position))
    }
}
