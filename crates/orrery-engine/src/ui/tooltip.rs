use glam::Vec2;

use crate::api::types::EntityId;

/// Hover tooltip overlay state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    visible: bool,
    /// Overlay position in surface pixels (pointer + offset). The page adds
    /// the canvas's own page offset before setting `left`/`top`.
    position: Vec2,
    label: String,
    target: Option<EntityId>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tooltip for `target` next to the pointer.
    pub fn show(&mut self, pointer: Vec2, offset: Vec2, target: EntityId, label: &str) {
        self.visible = true;
        self.position = pointer + offset;
        self.target = Some(target);
        if self.label != label {
            self.label.clear();
            self.label.push_str(label);
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.target = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Surface-relative position; see the field docs for page placement.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Text of the last shown target. Only meaningful while visible.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> Option<EntityId> {
        self.target
    }
}
