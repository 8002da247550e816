use crate::prize::PrizeSlot;

/// Role of a physics body, fixed when the body is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTag {
    Ball,
    Pin,
    Border,
    Divider,
    Prize(PrizeSlot),
}

/// A collision start the round logic cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact<E> {
    BallPin { ball: E, pin: E },
    BallPrize { ball: E, slot: PrizeSlot },
}

/// Classify a collision-start pair. Order of the pair does not matter;
/// anything other than ball/pin or ball/prize yields `None`.
pub fn classify<E: Copy>(a: (E, BodyTag), b: (E, BodyTag)) -> Option<Contact<E>> {
    let (ball, other) = match (a.1, b.1) {
        (BodyTag::Ball, _) => (a.0, b),
        (_, BodyTag::Ball) => (b.0, a),
        _ => return None,
    };

    match other.1 {
        BodyTag::Pin => Some(Contact::BallPin { ball, pin: other.0 }),
        BodyTag::Prize(slot) => Some(Contact::BallPrize { ball, slot }),
        _ => None,
    }
}
