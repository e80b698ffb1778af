use crate::geometry::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Held,
}

/// One active drag. Lives from pointer down to pointer up.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub card_id: String,
    /// Browser pointer id. `None` sessions follow whichever pointer moves or lifts.
    pub pointer_id: Option<i32>,
    /// Pointer minus card origin at grab time; keeps the grab point under the cursor.
    pub grab_offset: Vec2,
}

impl DragSession {
    pub fn new(card_id: &str, pointer_id: Option<i32>, pointer: Vec2, card_pos: Vec2) -> Self {
        Self {
            card_id: card_id.to_string(),
            pointer_id,
            grab_offset: pointer - card_pos,
        }
    }

    /// Where the card origin goes for a pointer position (before clamping).
    #[inline]
    pub fn target_for(&self, pointer: Vec2) -> Vec2 {
        pointer - self.grab_offset
    }
}
