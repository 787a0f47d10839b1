//! Rank color palettes.

/// Map fill per rank. The second entry of each pair is the CSS color.
const MAP_FILLS: [(u32, &str); 5] = [
    (1, "#CC0000"),
    (2, "#E67E22"),
    (3, "#F1C40F"),
    (4, "#3498DB"),
    (5, "#2980B9"),
];

/// Report card backgrounds, distinct from the map fills.
const CARD_FILLS: [(u32, &str); 5] = [
    (1, "#d73027"),
    (2, "#fc8d59"),
    (3, "#fee090"),
    (4, "#91bfdb"),
    (5, "#4575b4"),
];

/// Fill for background (non-top-5) regions.
pub(crate) const BACKGROUND_FILL: &str = "#f0f0f0";

fn lookup(table: &[(u32, &'static str)], rank: u32) -> &'static str {
    table.iter()
        .find(|&&(r, _)| r == rank)
        .map(|&(_, color)| color)
        .unwrap_or(table[0].1) // unknown ranks fall back to rank 1
}

pub(crate) fn map_fill(rank: u32) -> &'static str { lookup(&MAP_FILLS, rank) }

pub(crate) fn card_fill(rank: u32) -> &'static str { lookup(&CARD_FILLS, rank) }

/// Text color readable on top of `card_fill(rank)`.
pub(crate) fn card_text(rank: u32) -> &'static str {
    match rank {
        1 | 5 => "white",
        _ => "black",
    }
}
