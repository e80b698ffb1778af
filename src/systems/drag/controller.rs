use std::collections::HashMap;

use crate::geometry::{PlayArea, Vec2};
use crate::systems::physics::Card;

use super::session::{DragPhase, DragSession};

fn find_card_mut<'a>(cards: &'a mut [Card], id: &str) -> Option<&'a mut Card> {
    cards.iter_mut().find(|card| card.id == id)
}

/// Owns every drag session, keyed by card id.
#[derive(Debug, Default)]
pub struct DragController {
    sessions: HashMap<String, DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn phase(&self, card_id: &str) -> DragPhase {
        if self.sessions.contains_key(card_id) {
            DragPhase::Held
        } else {
            DragPhase::Idle
        }
    }

    pub fn session(&self, card_id: &str) -> Option<&DragSession> {
        self.sessions.get(card_id)
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_dragging(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Idle -> Held. Rejected when the card is unknown, already held, or the
    /// pointer position is garbage.
    pub fn begin_drag(&mut self, cards: &mut [Card], card_id: &str, pointer: Vec2, pointer_id: Option<i32>) -> bool {
        if !pointer.is_finite() || self.sessions.contains_key(card_id) {
            return false;
        }
        let Some(card) = find_card_mut(cards, card_id) else {
            return false;
        };

        card.held = true;
        self.sessions
            .insert(card_id.to_string(), DragSession::new(card_id, pointer_id, pointer, card.pos));
        true
    }

    /// Held only: put the card under the pointer, clamped inside the container.
    pub fn move_drag(&mut self, cards: &mut [Card], area: &PlayArea, card_id: &str, pointer: Vec2) -> bool {
        if !pointer.is_finite() {
            return false;
        }
        let Some(session) = self.sessions.get(card_id) else {
            return false;
        };
        let Some(card) = find_card_mut(cards, card_id) else {
            return false;
        };

        card.pos = area.clamp(session.target_for(pointer));
        true
    }

    /// Held -> Idle. The card falls again from rest. Unknown ids are a no-op.
    pub fn end_drag(&mut self, cards: &mut [Card], card_id: &str) -> bool {
        if self.sessions.remove(card_id).is_none() {
            return false;
        }
        if let Some(card) = find_card_mut(cards, card_id) {
            card.held = false;
            card.velocity = Vec2::zero();
        }
        true
    }

    /// Route a pointer move to every card that pointer is holding, plus any
    /// card grabbed without a pointer id.
    pub fn pointer_move(&mut self, cards: &mut [Card], area: &PlayArea, pointer_id: i32, pointer: Vec2) -> usize {
        let ids = self.ids_for_pointer(pointer_id);
        ids.iter()
            .filter(|id| self.move_drag(cards, area, id, pointer))
            .count()
    }

    /// Pointer up/cancel: release every card that pointer is holding.
    pub fn pointer_up(&mut self, cards: &mut [Card], pointer_id: i32) -> usize {
        let ids = self.ids_for_pointer(pointer_id);
        ids.iter().filter(|id| self.end_drag(cards, id)).count()
    }

    /// Blur / pointer leaving the window: nothing may stay held forever.
    pub fn release_all(&mut self, cards: &mut [Card]) -> usize {
        let ids: Vec<String> = self.sessions.keys().cloned().collect();
        ids.iter().filter(|id| self.end_drag(cards, id)).count()
    }

    fn ids_for_pointer(&self, pointer_id: i32) -> Vec<String> {
        self.sessions
            .values()
            .filter(|session| session.pointer_id.map_or(true, |owner| owner == pointer_id))
            .map(|session| session.card_id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogItem, SkillCategory};
    use crate::geometry::{CardSize, ContainerBounds};

    fn area() -> PlayArea {
        PlayArea::new(ContainerBounds::new(1200.0, 600.0), CardSize::new(120.0, 60.0))
    }

    fn cards() -> Vec<Card> {
        vec![
            Card::from_item(
                &CatalogItem::new("rust", "Rust", SkillCategory::Language),
                Vec2::new(100.0, 540.0),
                Vec2::zero(),
            ),
            Card::from_item(
                &CatalogItem::new("git", "Git", SkillCategory::Tool),
                Vec2::new(400.0, 200.0),
                Vec2::new(3.0, 5.0),
            ),
        ]
    }

    #[test]
    fn grab_offset_keeps_grab_point_under_pointer() {
        let mut cards = cards();
        let mut drag = DragController::new();

        assert!(drag.begin_drag(&mut cards, "rust", Vec2::new(130.0, 560.0), Some(1)));
        assert_eq!(drag.phase("rust"), DragPhase::Held);
        assert!(cards[0].held);

        assert!(drag.move_drag(&mut cards, &area(), "rust", Vec2::new(330.0, 300.0)));
        assert_eq!(cards[0].pos, Vec2::new(300.0, 280.0));
    }

    #[test]
    fn move_is_clamped_into_container() {
        let mut cards = cards();
        let mut drag = DragController::new();
        drag.begin_drag(&mut cards, "rust", Vec2::new(100.0, 540.0), None);

        drag.move_drag(&mut cards, &area(), "rust", Vec2::new(-50.0, -20.0));
        assert_eq!(cards[0].pos, Vec2::new(0.0, 0.0));

        drag.move_drag(&mut cards, &area(), "rust", Vec2::new(5000.0, 5000.0));
        assert_eq!(cards[0].pos, Vec2::new(1080.0, 540.0));
    }

    #[test]
    fn move_without_begin_is_ignored() {
        let mut cards = cards();
        let mut drag = DragController::new();
        assert!(!drag.move_drag(&mut cards, &area(), "rust", Vec2::new(10.0, 10.0)));
        assert_eq!(cards[0].pos, Vec2::new(100.0, 540.0));
    }

    #[test]
    fn end_resets_velocity_and_duplicate_end_is_noop() {
        let mut cards = cards();
        let mut drag = DragController::new();
        assert!(drag.begin_drag(&mut cards, "git", Vec2::new(410.0, 210.0), None));
        assert!(drag.end_drag(&mut cards, "git"));
        assert!(!cards[1].held);
        assert_eq!(cards[1].velocity, Vec2::zero());

        assert!(!drag.end_drag(&mut cards, "git"));
        assert!(!drag.end_drag(&mut cards, "nope"));
        assert_eq!(drag.phase("git"), DragPhase::Idle);
    }

    #[test]
    fn begin_rejects_unknown_and_already_held() {
        let mut cards = cards();
        let mut drag = DragController::new();
        assert!(!drag.begin_drag(&mut cards, "nope", Vec2::zero(), None));
        assert!(drag.begin_drag(&mut cards, "rust", Vec2::new(110.0, 550.0), Some(1)));
        assert!(!drag.begin_drag(&mut cards, "rust", Vec2::new(0.0, 0.0), Some(2)));
        assert_eq!(drag.session("rust").map(|s| s.pointer_id), Some(Some(1)));
    }

    #[test]
    fn pointers_drive_their_own_cards() {
        let mut cards = cards();
        let mut drag = DragController::new();
        drag.begin_drag(&mut cards, "rust", Vec2::new(100.0, 540.0), Some(1));
        drag.begin_drag(&mut cards, "git", Vec2::new(400.0, 200.0), Some(2));
        assert_eq!(drag.active_count(), 2);

        assert_eq!(drag.pointer_move(&mut cards, &area(), 2, Vec2::new(500.0, 250.0)), 1);
        assert_eq!(cards[0].pos, Vec2::new(100.0, 540.0));
        assert_eq!(cards[1].pos, Vec2::new(500.0, 250.0));

        assert_eq!(drag.pointer_up(&mut cards, 1), 1);
        assert!(!cards[0].held);
        assert!(cards[1].held);

        assert_eq!(drag.release_all(&mut cards), 1);
        assert!(!drag.is_dragging());
        assert!(cards.iter().all(|c| !c.held));
    }

    #[test]
    fn drag_without_pointer_id_follows_any_pointer() {
        let mut cards = cards();
        let mut drag = DragController::new();
        assert!(drag.begin_drag(&mut cards, "rust", Vec2::new(110.0, 550.0), None));

        assert_eq!(drag.pointer_move(&mut cards, &area(), 7, Vec2::new(310.0, 310.0)), 1);
        assert_eq!(cards[0].pos, Vec2::new(300.0, 300.0));

        assert_eq!(drag.pointer_up(&mut cards, 7), 1);
        assert!(!cards[0].held);
        assert_eq!(cards[0].velocity, Vec2::zero());
        assert!(!drag.is_dragging());
    }
}
