//! Shared fixtures for the unit tests.

use crate::Orderable;

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: &'static str,
    pub order: i32,
}

impl Orderable for Card {
    type Id = &'static str;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

pub fn card(id: &'static str, order: i32) -> Card {
    Card { id, order }
}

pub fn ids(cards: &[Card]) -> Vec<&'static str> {
    cards.iter().map(|c| c.id).collect()
}
