//! Seed-wide properties of generated park maps.

use proptest::prelude::*;
use ranger_common::{TileCoord, MAP_H, MAP_W, TILE_SIZE};
use ranger_world::{generate, is_reachable, is_walkable, reachable_from, ParkMap, Tile};

fn camp_tile() -> TileCoord {
    TileCoord::new(
        (760.0 / TILE_SIZE).floor() as i32,
        (40.0 / TILE_SIZE).floor() as i32,
    )
    .clamped(MAP_W, MAP_H)
}

fn river_rows(map: &ParkMap) -> impl Iterator<Item = i32> + '_ {
    map.iter()
        .filter(|&(_, tile)| tile == Tile::River)
        .map(|(coord, _)| coord.y)
}

#[test]
fn scenario_seed_one() {
    let map = generate(1);
    let start = TileCoord::new(1, 1);

    assert!(map.is_walkable_at(start));
    assert_eq!(map.camp(), camp_tile());
    assert!(is_reachable(&map, start, camp_tile()));
    assert_eq!(map, generate(1));

    let other = generate(2);
    let differing = map
        .iter()
        .zip(other.iter())
        .filter(|((_, a), (_, b))| a != b)
        .count();
    assert!(differing > 0);
}

#[test]
fn walkability_depends_on_variant_only() {
    let map = generate(5);
    for (_, tile) in map.iter() {
        let expected = matches!(tile, Tile::Grass | Tile::Trail);
        assert_eq!(is_walkable(tile), expected);
    }
}

#[test]
fn json_export_contains_dimensions() {
    let map = generate(1);
    let json = serde_json::to_value(&map).expect("map should serialize");
    assert_eq!(json["width"], MAP_W);
    assert_eq!(json["height"], MAP_H);
    assert_eq!(json["seed"], 1);
    assert_eq!(json["tiles"].as_array().map(Vec::len), Some(MAP_W * MAP_H));
    assert_eq!(json["tiles"][MAP_W + 1], "trail");
}

#[test]
fn text_export_parses_back() {
    let map = generate(12);
    let parsed = ParkMap::from_ascii(&map.to_string(), map.start(), map.camp())
        .expect("exported text should parse");
    assert_eq!(parsed.grid(), map.grid());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generation_is_deterministic(seed in any::<u32>()) {
        prop_assert_eq!(generate(seed), generate(seed));
    }

    #[test]
    fn dimensions_are_fixed(seed in any::<u32>()) {
        let map = generate(seed);
        prop_assert_eq!(map.rows().count(), MAP_H);
        prop_assert!(map.rows().all(|row| row.len() == MAP_W));
    }

    #[test]
    fn start_pocket_is_reachable(seed in any::<u32>()) {
        let map = generate(seed);
        let start = TileCoord::new(1, 1);
        prop_assert!(map.is_walkable_at(start));

        let reachable = reachable_from(&map, start);
        for y in -1..=3 {
            for x in -1..=3 {
                let coord = TileCoord::new(x, y);
                if coord.in_bounds(MAP_W, MAP_H) {
                    prop_assert!(reachable.contains(&coord), "seed={seed}: {coord} cut off");
                }
            }
        }
    }

    #[test]
    fn camp_is_reachable(seed in any::<u32>()) {
        let map = generate(seed);
        prop_assert!(map.is_walkable_at(camp_tile()));
        prop_assert!(is_reachable(&map, TileCoord::new(1, 1), camp_tile()), "seed={seed}");
    }

    #[test]
    fn river_rows_stay_inside_band(seed in any::<u32>()) {
        let map = generate(seed);
        for row in river_rows(&map) {
            // Walk rows are clamped to [2, H-3]; the thickening tile sits one below.
            prop_assert!((2..=MAP_H as i32 - 2).contains(&row), "seed={seed}: river on row {row}");
        }
    }
}
