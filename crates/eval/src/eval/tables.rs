// Copyright (C) 2025 The Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluator lookup tables.
//!
//! Two tables drive the evaluator. The suit table maps each of the 8192
//! possible 13-bit single-suit rank patterns to a pair: the pattern's
//! additive rank-count key contribution, and the strength of the best
//! straight flush or flush the pattern holds ([NO_FLUSH] when it has fewer
//! than five cards). The octet table maps the key summed over all four suits
//! to the strength of the best non-flush five-card hand.
//!
//! The key packs one base-8 digit per rank, so the four per-suit
//! contributions sum without carries (a rank count is at most 4) and the sum
//! identifies the rank-count multiset independent of which suits hold which
//! ranks.
use ahash::AHashMap;
use std::sync::LazyLock;

/// Flush value of a suit pattern with no five-card flush; worse than any
/// real strength.
pub(crate) const NO_FLUSH: u16 = 9999;

/// 13-bit rank masks of the ten straights, ace high first, wheel last.
const STRAIGHTS: [u16; 10] = [
    0x1F00, 0x0F80, 0x07C0, 0x03E0, 0x01F0, 0x00F8, 0x007C, 0x003E, 0x001F, 0x100F,
];

pub(crate) struct Tables {
    /// `(key contribution, flush value)` for every 13-bit suit pattern.
    pub(crate) suit: Vec<(u64, u16)>,
    /// Best non-flush strength for every achievable summed key.
    pub(crate) octet: AHashMap<u64, u16>,
}

pub(crate) static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

impl Tables {
    fn build() -> Tables {
        let ladder = Ladder::build();

        let mut suit = Vec::with_capacity(8192);
        for pattern in 0u16..8192 {
            let flush = if pattern.count_ones() >= 5 {
                match straight_index(pattern) {
                    Some(i) => ladder.straight_flush[i],
                    None => ladder.flush[top_five(pattern) as usize],
                }
            } else {
                NO_FLUSH
            };
            suit.push((octet_key(pattern), flush));
        }

        let mut octet = AHashMap::with_capacity(49_205);
        let mut counts = [0u8; 13];
        fill_octets(&mut octet, &ladder, &mut counts, 0, 7);

        Tables { suit, octet }
    }
}

/// The index of the best straight contained in a rank pattern.
fn straight_index(ranks: u16) -> Option<usize> {
    STRAIGHTS.iter().position(|&m| ranks & m == m)
}

/// Keeps the five highest ranks of a pattern.
fn top_five(mut ranks: u16) -> u16 {
    while ranks.count_ones() > 5 {
        ranks &= ranks - 1;
    }
    ranks
}

/// Base-8 rank-count key of a rank pattern, one octal digit per rank.
fn octet_key(ranks: u16) -> u64 {
    let mut key = 0u64;
    for j in 0..13 {
        if ranks & (1 << j) != 0 {
            key += 1 << (3 * j);
        }
    }
    key
}

/// The canonical 7462-value strength ladder.
///
/// Values are assigned sequentially through the fixed category order, so
/// category boundaries land exactly at 10, 166, 322, 1599, 1609, 2467,
/// 3325, 6185, and 7462. Suit-dependent classes (straight flushes and
/// flushes) are indexed by rank mask; every other five-card class is keyed
/// by its base-8 rank-count key.
struct Ladder {
    straight_flush: [u16; 10],
    flush: Vec<u16>,
    rank5: AHashMap<u64, u16>,
}

impl Ladder {
    fn build() -> Ladder {
        let mut straight_flush = [0u16; 10];
        let mut flush = vec![0u16; 8192];
        let mut rank5 = AHashMap::with_capacity(6175);
        let mut next = 0u16;

        // Straight flushes.
        for value in straight_flush.iter_mut() {
            next += 1;
            *value = next;
        }

        // Four of a kind, quad rank then kicker, high to low.
        for q in (0..13).rev() {
            for k in (0..13).rev() {
                if k != q {
                    next += 1;
                    rank5.insert((4u64 << (3 * q)) + (1u64 << (3 * k)), next);
                }
            }
        }

        // Full houses, trips rank then pair rank.
        for t in (0..13).rev() {
            for p in (0..13).rev() {
                if p != t {
                    next += 1;
                    rank5.insert((3u64 << (3 * t)) + (2u64 << (3 * p)), next);
                }
            }
        }

        // Flushes. Descending mask order is descending strength for
        // patterns of equal size.
        for mask in (0u16..8192).rev() {
            if mask.count_ones() == 5 && straight_index(mask).is_none() {
                next += 1;
                flush[mask as usize] = next;
            }
        }

        // Straights, keyed like any other rank-count class.
        for mask in STRAIGHTS {
            next += 1;
            rank5.insert(octet_key(mask), next);
        }

        // Three of a kind, kickers as a two-rank mask.
        for t in (0..13).rev() {
            for kickers in (0u16..8192).rev() {
                if kickers.count_ones() == 2 && kickers & (1 << t) == 0 {
                    next += 1;
                    rank5.insert((3u64 << (3 * t)) + octet_key(kickers), next);
                }
            }
        }

        // Two pairs.
        for hi in (0..13).rev() {
            for lo in (0..hi).rev() {
                for k in (0..13).rev() {
                    if k != hi && k != lo {
                        next += 1;
                        rank5.insert(
                            (2u64 << (3 * hi)) + (2u64 << (3 * lo)) + (1u64 << (3 * k)),
                            next,
                        );
                    }
                }
            }
        }

        // One pair, kickers as a three-rank mask.
        for p in (0..13).rev() {
            for kickers in (0u16..8192).rev() {
                if kickers.count_ones() == 3 && kickers & (1 << p) == 0 {
                    next += 1;
                    rank5.insert((2u64 << (3 * p)) + octet_key(kickers), next);
                }
            }
        }

        // High cards.
        for mask in (0u16..8192).rev() {
            if mask.count_ones() == 5 && straight_index(mask).is_none() {
                next += 1;
                rank5.insert(octet_key(mask), next);
            }
        }

        assert_eq!(next, 7462);

        Ladder {
            straight_flush,
            flush,
            rank5,
        }
    }
}

/// Enumerates every 13-rank count vector summing to seven cards and maps
/// its key to the best non-flush strength.
fn fill_octets(
    octets: &mut AHashMap<u64, u16>,
    ladder: &Ladder,
    counts: &mut [u8; 13],
    rank: usize,
    remaining: u8,
) {
    if rank == 13 {
        if remaining == 0 {
            let key = counts
                .iter()
                .enumerate()
                .map(|(j, &c)| (c as u64) << (3 * j))
                .sum();
            octets.insert(key, best_offsuit(ladder, key, counts));
        }
        return;
    }

    for c in 0..=remaining.min(4) {
        counts[rank] = c;
        fill_octets(octets, ladder, counts, rank + 1, remaining - c);
    }
    counts[rank] = 0;
}

/// Best non-flush five-card strength of a seven-card rank-count vector:
/// the minimum ladder value over all ways to drop two cards.
fn best_offsuit(ladder: &Ladder, key7: u64, counts: &[u8; 13]) -> u16 {
    let mut best = u16::MAX;
    for a in 0..13 {
        if counts[a] == 0 {
            continue;
        }
        for b in a..13 {
            let avail = if a == b { counts[b] - 1 } else { counts[b] };
            if avail == 0 {
                continue;
            }
            let key5 = key7 - (1u64 << (3 * a)) - (1u64 << (3 * b));
            best = best.min(ladder.rank5[&key5]);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries() {
        let ladder = Ladder::build();

        // Royal flush down to the wheel.
        assert_eq!(ladder.straight_flush[0], 1);
        assert_eq!(ladder.straight_flush[9], 10);

        // Best and worst quads: A A A A K and 2 2 2 2 3.
        assert_eq!(ladder.rank5[&((4u64 << 36) + (1u64 << 33))], 11);
        assert_eq!(ladder.rank5[&(4u64 + (1u64 << 3))], 166);

        // Best and worst full houses: A A A K K and 2 2 2 3 3.
        assert_eq!(ladder.rank5[&((3u64 << 36) + (2u64 << 33))], 167);
        assert_eq!(ladder.rank5[&(3u64 + (2u64 << 3))], 322);

        // Best flush A K Q J 9, worst flush 7 5 4 3 2.
        assert_eq!(ladder.flush[0b1111010000000], 323);
        assert_eq!(ladder.flush[0b0000000101111], 1599);

        // Ace-high straight and the wheel.
        assert_eq!(ladder.rank5[&octet_key(STRAIGHTS[0])], 1600);
        assert_eq!(ladder.rank5[&octet_key(STRAIGHTS[9])], 1609);

        // Best trips A A A K Q, worst trips 2 2 2 4 3.
        assert_eq!(
            ladder.rank5[&((3u64 << 36) + (1u64 << 33) + (1u64 << 30))],
            1610
        );
        assert_eq!(ladder.rank5[&(3u64 + (1u64 << 6) + (1u64 << 3))], 2467);

        // Best two pair A A K K Q, worst two pair 3 3 2 2 4.
        assert_eq!(
            ladder.rank5[&((2u64 << 36) + (2u64 << 33) + (1u64 << 30))],
            2468
        );
        assert_eq!(ladder.rank5[&((2u64 << 3) + 2u64 + (1u64 << 6))], 3325);

        // Best pair A A K Q J, worst pair 2 2 5 4 3.
        assert_eq!(
            ladder.rank5[&((2u64 << 36) + (1u64 << 33) + (1u64 << 30) + (1u64 << 27))],
            3326
        );
        assert_eq!(
            ladder.rank5[&(2u64 + (1u64 << 9) + (1u64 << 6) + (1u64 << 3))],
            6185
        );

        // Best high card A K Q J 9, worst high card 7 5 4 3 2.
        assert_eq!(ladder.rank5[&octet_key(0b1111010000000)], 6186);
        assert_eq!(ladder.rank5[&octet_key(0b0000000101111)], 7462);
    }

    #[test]
    fn straight_detection() {
        assert_eq!(straight_index(0b1111100000000), Some(0));
        assert_eq!(straight_index(0b1000000001111), Some(9));
        assert_eq!(straight_index(0b0000000011111), Some(8));
        assert_eq!(straight_index(0b1111010000000), None);

        // The best straight wins when a pattern holds more than one.
        assert_eq!(straight_index(0b0000000111111), Some(7));
    }

    #[test]
    fn suit_table() {
        let tables = &*TABLES;
        assert_eq!(tables.suit.len(), 8192);

        // A K Q J T suited is a royal flush.
        assert_eq!(tables.suit[0b1111100000000].1, 1);

        // A 2 3 4 5 suited is the wheel.
        assert_eq!(tables.suit[0b1000000001111].1, 10);

        // A K Q J 9 suited is the best flush.
        assert_eq!(tables.suit[0b1111010000000].1, 323);

        // Fewer than five suited cards never flush.
        assert_eq!(tables.suit[0b1111000000000].1, NO_FLUSH);
        assert_eq!(tables.suit[0].1, NO_FLUSH);

        // Six suited cards flush with the top five: A K Q J 9 8 plays
        // A K Q J 9.
        assert_eq!(
            tables.suit[0b1111011000000].1,
            tables.suit[0b1111010000000].1
        );

        // The key contribution packs one octal digit per present rank.
        assert_eq!(tables.suit[0b101].0, 0o101);
        assert_eq!(tables.suit[0b1000000000000].0, 1u64 << 36);
    }

    #[test]
    fn octet_table() {
        let tables = &*TABLES;

        // One entry per 13-rank count vector with counts <= 4 summing to 7.
        assert_eq!(tables.octet.len(), 49_205);

        // A A A A K x x is the best quads regardless of the spare cards.
        let key = (4u64 << 36) + (1u64 << 33) + (1u64 << 3) + 1u64;
        assert_eq!(tables.octet[&key], 11);

        // Three pairs play the best two with the best remaining kicker:
        // A A K K Q Q 2 plays A A K K Q.
        let key = (2u64 << 36) + (2u64 << 33) + (2u64 << 30) + 1u64;
        assert_eq!(tables.octet[&key], 2468);

        // Two trips play the full house: A A A K K K 2 plays A A A K K.
        let key = (3u64 << 36) + (3u64 << 33) + 1u64;
        assert_eq!(tables.octet[&key], 167);

        // Seven distinct ranks with no straight play the top five:
        // A K Q J 9 8 2 and A K Q J 9 6 5 both play A K Q J 9.
        let key = octet_key(0b1111011000000) + 1;
        assert_eq!(tables.octet[&key], tables.octet[&octet_key(0b1111010011000)]);
        assert_eq!(tables.octet[&key], 6186);
    }
}
