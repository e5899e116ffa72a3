//! Content domain: unit tests for the shipped data files.

use super::data::GameplayDefaults;
use super::loader::parse_str;

const SHIPPED_DEFAULTS: &str = include_str!("../../assets/data/gameplay_defaults.ron");

#[test]
fn test_shipped_defaults_parse() {
    let defaults: GameplayDefaults =
        parse_str(SHIPPED_DEFAULTS, "gameplay_defaults.ron".to_string())
            .expect("shipped gameplay_defaults.ron must parse");

    // Spot-check the values the combat loop depends on.
    assert_eq!(defaults.combat.hit_damage, 25);
    assert_eq!(defaults.combat.max_health, 100);
    assert!(defaults.combat.respawn_radius_min < defaults.combat.respawn_radius_max);
}

#[test]
fn test_parse_error_names_file() {
    let result = parse_str::<GameplayDefaults>("(not valid", "broken.ron".to_string());
    let err = result.expect_err("malformed input must fail");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("broken.ron"));
}
