use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::catalog::SkillCategory;
use crate::domain::style::card_class;
use crate::systems::physics::Card;

use super::WidgetCore;

/// Held cards start here so they always sit above the pile.
pub const HELD_Z_BASE: u32 = 1000;

/// Everything the page needs to place one card element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_index: u32,
    pub held: bool,
    pub class_name: String,
    pub color: Option<String>,
}

/// Card indices back to front.
///
/// Non-held cards come first ordered by y, so a card lower in the pile is
/// drawn over the ones above it; equal y keeps catalog order. Held cards
/// follow, in catalog order.
pub fn stacking_order(cards: &[Card]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&a, &b| {
        let (ca, cb) = (&cards[a], &cards[b]);
        match (ca.held, cb.held) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => a.cmp(&b),
            (false, false) => ca.pos.y.total_cmp(&cb.pos.y).then(a.cmp(&b)),
        }
    });
    order
}

pub(super) fn render_snapshot(world: &WidgetCore) -> Vec<CardView> {
    let width = world.config.card_width;
    let height = world.config.card_height;

    stacking_order(&world.cards)
        .into_iter()
        .enumerate()
        .map(|(rank, idx)| {
            let card = &world.cards[idx];
            let z_index = if card.held { HELD_Z_BASE + rank as u32 } else { rank as u32 };
            CardView {
                id: card.id.clone(),
                name: card.name.clone(),
                category: card.category,
                x: card.pos.x,
                y: card.pos.y,
                width,
                height,
                z_index,
                held: card.held,
                class_name: card_class(card.category),
                color: card.color.clone(),
            }
        })
        .collect()
}

pub(super) fn render_json(world: &WidgetCore) -> String {
    serde_json::to_string(&render_snapshot(world)).unwrap_or_else(|_| "[]".to_string())
}
