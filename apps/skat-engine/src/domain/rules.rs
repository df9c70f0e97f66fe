pub const PLAYERS: usize = 3;
pub const HAND_SIZE: u8 = 10;
pub const TRICKS: u8 = 10;
pub const SKAT_SIZE: usize = 2;

/// Seat index within one game: 0 = fore hand, 1 = middle hand, 2 = rear hand.
pub type Seat = u8;

pub const FORE: Seat = 0;
pub const MIDDLE: Seat = 1;
pub const REAR: Seat = 2;

/// Card points needed to win a plain suit or grand game.
pub const WIN_POINTS: u8 = 61;
/// Declarer points at or above which the defenders are schneider.
pub const SCHNEIDER_POINTS: u8 = 90;
/// Defender points at or below which the declarer's side is schneider on a loss.
pub const SCHNEIDER_LOSS_POINTS: u8 = 30;

/// The official bid ladder.
pub const BIDS: [u16; 66] = [
    18, 20, 22, 23, 24, 27, 30, 33, 35, 36, 40, 44, 45, 46, 48, 50, 54, 55, 59, 60, 63, 66, 70,
    72, 77, 80, 81, 84, 88, 90, 96, 99, 100, 108, 110, 117, 120, 121, 126, 130, 132, 135, 140,
    143, 144, 150, 153, 154, 156, 160, 162, 165, 168, 170, 171, 176, 180, 187, 189, 190, 192,
    198, 204, 216, 240, 264,
];

/// Lowest legal bid.
pub const MIN_BID: u16 = BIDS[0];

/// Upper bound accepted for off-ladder bids when strict bidding is disabled.
pub const BID_LIMIT: u16 = 500;

/// Whether `bid` is on the bid ladder.
pub fn is_ladder_bid(bid: u16) -> bool {
    BIDS.contains(&bid)
}

/// Smallest ladder bid strictly above `max_bid`.
pub fn next_bid(max_bid: u16) -> Option<u16> {
    BIDS.iter().copied().find(|&b| b > max_bid)
}

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % PLAYERS as Seat
}

#[inline]
pub fn is_seat(value: u8) -> bool {
    (value as usize) < PLAYERS
}

/// The two seats other than `declarer`, in seat order.
pub fn defenders(declarer: Seat) -> [Seat; 2] {
    let a = next_seat(declarer);
    let b = next_seat(a);
    if a < b {
        [a, b]
    } else {
        [b, a]
    }
}
