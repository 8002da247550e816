/// What a prize slot means for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prize {
    pub text: &'static str,
    pub outcome: Outcome,
}

const RETRY: Prize = Prize {
    text: "TENTE\nNOVAMENTE",
    outcome: Outcome::Retry,
};
const WIN: Prize = Prize {
    text: "VOCÊ\nGANHOU",
    outcome: Outcome::Win,
};
const LOSE: Prize = Prize {
    text: "NÃO FOI\nDESSA VEZ",
    outcome: Outcome::Lose,
};

/// Prize per slot, left to right.
pub const PRIZES: [Prize; 8] = [RETRY, WIN, LOSE, RETRY, WIN, LOSE, WIN, RETRY];

/// Index of a prize slot along the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrizeSlot(u8);

impl PrizeSlot {
    pub fn new(index: usize) -> Option<Self> {
        (index < PRIZES.len()).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn prize(self) -> &'static Prize {
        &PRIZES[self.index()]
    }

    pub fn all() -> impl Iterator<Item = PrizeSlot> {
        (0..PRIZES.len()).map(|i| PrizeSlot(i as u8))
    }
}
