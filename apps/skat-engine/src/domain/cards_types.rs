/// Card suits, ordered by their Skat rank (diamonds lowest, clubs highest).
///
/// The discriminant is the suit's position in the 32-bit card space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Suit> {
        Suit::ALL.get(i as usize).copied()
    }

    pub const fn letter(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_letter(ch: char) -> Option<Suit> {
        match ch {
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Card ranks in their natural (null game) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Rank> {
        Rank::ALL.get(i as usize).copied()
    }

    pub const fn letter(self) -> char {
        match self {
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_letter(ch: char) -> Option<Rank> {
        match ch {
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Card points (the deck totals 120).
    pub const fn points(self) -> u8 {
        match self {
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::Ten => 10,
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ace => 11,
        }
    }
}

/// A concrete card. Hidden cards are modelled as `Option<Card>` (`None`
/// renders as `??`) rather than as a special card value.
///
/// Ord follows the bit index (suit-major), which gives a stable sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Position in the 32-bit card space: `suit * 8 + rank`.
    #[inline]
    pub const fn index(self) -> u8 {
        self.suit.index() * 8 + self.rank.index()
    }

    #[inline]
    pub const fn bit(self) -> u32 {
        1u32 << self.index()
    }

    pub fn from_index(i: u8) -> Option<Card> {
        if i >= 32 {
            return None;
        }
        Some(Card {
            suit: Suit::from_index(i / 8)?,
            rank: Rank::from_index(i % 8)?,
        })
    }

    #[inline]
    pub const fn points(self) -> u8 {
        self.rank.points()
    }

    #[inline]
    pub fn is_jack(self) -> bool {
        self.rank == Rank::Jack
    }
}
