//! Terrain tile variants.

use serde::{Deserialize, Serialize};

/// One cell of the park grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    /// Open ground
    #[default]
    Grass,
    /// Impassable tree
    Tree,
    /// Impassable water
    River,
    /// Walkable path; also used for carved corridors
    Trail,
}

impl Tile {
    /// All variants, in declaration order.
    pub const ALL: [Self; 4] = [Self::Grass, Self::Tree, Self::River, Self::Trail];

    /// Whether an entity may occupy this tile.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        match self {
            Self::Grass | Self::Trail => true,
            Self::Tree | Self::River => false,
        }
    }

    /// Single-character glyph used by the text format.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Grass => '.',
            Self::Tree => 'T',
            Self::River => '~',
            Self::Trail => '#',
        }
    }

    /// Parses a text-format glyph.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Grass),
            'T' => Some(Self::Tree),
            '~' => Some(Self::River),
            '#' => Some(Self::Trail),
            _ => None,
        }
    }
}

/// Walkability predicate; depends on the variant only.
#[must_use]
pub const fn is_walkable(tile: Tile) -> bool {
    tile.is_walkable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkable_variants() {
        assert!(is_walkable(Tile::Grass));
        assert!(is_walkable(Tile::Trail));
        assert!(!is_walkable(Tile::Tree));
        assert!(!is_walkable(Tile::River));
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_glyph(tile.glyph()), Some(tile));
        }
        assert_eq!(Tile::from_glyph('x'), None);
    }
}
