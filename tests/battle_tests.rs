use joust::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn reference_json() -> serde_json::Value {
    json!({
        "lancelot": {
            "name": "Lancelot",
            "power": 35,
            "hp": 100,
            "armour": [],
            "weapon": {"name": "Metal Sword", "power": 50},
            "potion": null
        },
        "arthur": {
            "name": "Arthur",
            "power": 45,
            "hp": 75,
            "armour": [
                {"part": "helmet", "protection": 15},
                {"part": "breastplate", "protection": 20},
                {"part": "boots", "protection": 10}
            ],
            "weapon": {"name": "Two-handed Sword", "power": 55},
            "potion": null
        },
        "mordred": {
            "name": "Mordred",
            "power": 30,
            "hp": 90,
            "armour": [
                {"part": "breastplate", "protection": 15},
                {"part": "boots", "protection": 10}
            ],
            "weapon": {"name": "Poisoned Sword", "power": 60},
            "potion": {
                "name": "Berserk",
                "effect": {"power": 15, "hp": -5, "protection": 10}
            }
        },
        "red_knight": {
            "name": "Red Knight",
            "power": 40,
            "hp": 70,
            "armour": [{"part": "breastplate", "protection": 25}],
            "weapon": {"name": "Sword", "power": 45},
            "potion": {"name": "Blessing", "effect": {"hp": 10, "power": 5}}
        }
    })
}

/// The reference tournament produces the documented result, in order.
#[test]
fn test_reference_tournament() {
    let report = run(&reference_roster()).unwrap();

    assert_eq!(
        report.into_vec(),
        vec![
            ("Lancelot".to_string(), 0),
            ("Arthur".to_string(), 30),
            ("Mordred".to_string(), 35),
            ("Red Knight".to_string(), 5),
        ]
    );
}

/// The JSON form of the reference roster matches the built-in one.
#[test]
fn test_reference_roster_from_json() {
    let roster = Roster::from_value(reference_json()).unwrap();
    assert_eq!(roster, reference_roster());

    let report = run(&roster).unwrap();
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"Lancelot":0,"Arthur":30,"Mordred":35,"Red Knight":5}"#
    );
}

/// Lancelot has no protection and falls to Mordred in one hit.
#[test]
fn test_lancelot_versus_mordred() {
    let mut battle = Battle::new(&reference_roster());

    let lancelot = battle.knight("lancelot").unwrap();
    assert_eq!(
        (lancelot.power(), lancelot.protection(), lancelot.hp()),
        (85, 0, 100)
    );
    let mordred = battle.knight("mordred").unwrap();
    assert_eq!(
        (mordred.power(), mordred.protection(), mordred.hp()),
        (105, 35, 85)
    );

    let outcome = battle
        .exchange(Exchange::new("lancelot", "mordred"))
        .unwrap();
    assert_eq!(
        outcome,
        ExchangeOutcome {
            first: "Lancelot".to_string(),
            second: "Mordred".to_string(),
            damage_to_first: 105,
            damage_to_second: 50,
        }
    );
    assert_eq!(battle.knight("lancelot").unwrap().hp(), 0);
    assert_eq!(battle.knight("mordred").unwrap().hp(), 35);
}

/// Arthur's armour blunts the Red Knight; the Red Knight survives on 5.
#[test]
fn test_arthur_versus_red_knight() {
    let mut battle = Battle::new(&reference_roster());
    let outcome = battle
        .exchange(Exchange::new("arthur", "red_knight"))
        .unwrap();

    assert_eq!(outcome.damage_to_first, 45);
    assert_eq!(outcome.damage_to_second, 75);
    assert_eq!(battle.knight("arthur").unwrap().hp(), 30);
    assert_eq!(battle.knight("red_knight").unwrap().hp(), 5);
}

/// Swapping participants inside every exchange changes nothing.
#[test]
fn test_reversed_schedule_matches() {
    let reversed: Vec<_> = DEFAULT_SCHEDULE.iter().map(|e| e.reversed()).collect();

    let forward = run(&reference_roster()).unwrap();
    let backward = run_schedule(&reference_roster(), &reversed).unwrap();
    assert_eq!(forward, backward);
}

/// Repeated runs over the same roster give identical reports.
#[test]
fn test_runs_are_deterministic() {
    let roster = Roster::from_value(reference_json()).unwrap();
    let first = run(&roster).unwrap();
    for _ in 0..10 {
        assert_eq!(run(&roster).unwrap(), first);
    }
}

/// A roster without the fixed keys cannot run the default schedule.
#[test]
fn test_missing_reference_key() {
    let mut value = reference_json();
    value.as_object_mut().unwrap().remove("red_knight");
    let roster = Roster::from_value(value).unwrap();

    assert_eq!(
        run(&roster),
        Err(JoustError::UnknownKnight("red_knight".to_string()))
    );
}

/// Extra knights ride along untouched.
#[test]
fn test_extra_knight_is_a_bystander() {
    let roster = reference_roster().with(
        "galahad",
        KnightConfig {
            name: "Galahad".to_string(),
            power: 50,
            hp: 120,
            armour: vec![Armour::new("shield", 30)],
            weapon: Weapon::new("Sword of David", 70),
            potion: None,
        },
    );

    let report = run(&roster).unwrap();
    assert_eq!(report.len(), 5);
    assert_eq!(report.get("Galahad"), Some(120));
    assert_eq!(
        report.to_string(),
        r#"{"Lancelot": 0, "Arthur": 30, "Mordred": 35, "Red Knight": 5, "Galahad": 120}"#
    );
}

/// Reports are keyed by display name, not roster key.
#[test]
fn test_report_uses_display_names() {
    let mut value = reference_json();
    value["lancelot"]["name"] = json!("Sir Lancelot du Lac");

    let report = run(&Roster::from_value(value).unwrap()).unwrap();
    assert_eq!(report.get("Sir Lancelot du Lac"), Some(0));
    assert_eq!(report.get("lancelot"), None);
}

/// A knight record without a weapon is rejected when the roster is read.
#[test]
fn test_missing_weapon_is_config_error() {
    let mut value = reference_json();
    value["arthur"].as_object_mut().unwrap().remove("weapon");

    match Roster::from_value(value) {
        Err(JoustError::InvalidConfig { key, reason }) => {
            assert_eq!(key, "arthur");
            assert!(reason.contains("weapon"));
        }
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }
}

/// Potion effects may only name hp, power or protection.
#[test]
fn test_unknown_potion_stat_is_config_error() {
    let mut value = reference_json();
    value["mordred"]["potion"]["effect"]["luck"] = json!(3);

    assert!(matches!(
        Roster::from_value(value),
        Err(JoustError::InvalidConfig { .. })
    ));
}

/// A breakdown explains each of Mordred's stats.
#[test]
fn test_breakdown_of_reference_knight() {
    let mordred = Knight::from_config(reference_roster().get("mordred").unwrap().clone());

    let protection = mordred.breakdown(Stat::Protection);
    assert_eq!(
        protection.contributions,
        vec![
            ("armour: breastplate".to_string(), 15),
            ("armour: boots".to_string(), 10),
            ("potion: Berserk".to_string(), 10),
        ]
    );
    assert_eq!(protection.value, 35);

    let hp = mordred.breakdown(Stat::Hp);
    assert_eq!(hp.value, 85);
    assert!(hp.adjustments.is_empty());
}
