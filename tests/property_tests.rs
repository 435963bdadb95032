use joust::*;
use proptest::prelude::*;

fn arb_armour() -> impl Strategy<Value = Vec<Armour>> {
    prop::collection::vec(
        ("[a-z]{3,8}", 0i64..50).prop_map(|(part, protection)| Armour::new(part, protection)),
        0..5,
    )
}

fn arb_potion() -> impl Strategy<Value = Option<Potion>> {
    prop::option::of(
        (
            prop::option::of(-50i64..50),
            prop::option::of(-50i64..50),
            prop::option::of(-50i64..50),
        )
            .prop_map(|(hp, power, protection)| {
                let effect = [
                    (Stat::Hp, hp),
                    (Stat::Power, power),
                    (Stat::Protection, protection),
                ]
                .into_iter()
                .filter_map(|(stat, delta)| delta.map(|d| (stat, d)));
                Potion::new("Brew", effect)
            }),
    )
}

fn arb_knight() -> impl Strategy<Value = Knight> {
    (0i64..100, 0i64..200, arb_armour(), 0i64..100, arb_potion()).prop_map(
        |(power, hp, armour, weapon_power, potion)| {
            Knight::new(
                "Knight",
                power,
                hp,
                armour,
                Weapon::new("Blade", weapon_power),
                potion,
            )
        },
    )
}

proptest! {
    #[test]
    fn prop_hp_never_negative(
        mut knight in arb_knight(),
        attacks in prop::collection::vec(-50i64..300, 0..20)
    ) {
        for attack in attacks {
            knight.take_damage(attack);
            prop_assert!(knight.hp() >= 0);
            prop_assert!(knight.hp() <= knight.max_hp());
        }
    }

    #[test]
    fn prop_damage_is_attack_minus_protection(mut knight in arb_knight(), attack in -50i64..300) {
        let before = knight.hp();
        let expected = (attack - knight.protection()).max(0);

        let dealt = knight.take_damage(attack);
        prop_assert_eq!(dealt, expected);
        prop_assert_eq!(knight.hp(), (before - expected).max(0));
        if attack <= knight.protection() {
            prop_assert_eq!(knight.hp(), before);
        }
    }

    #[test]
    fn prop_derived_stats_match_closed_form(knight in arb_knight()) {
        let potion = |stat| knight.potion().map_or(0, |p| p.delta(stat));
        let armour: i64 = knight.armour().iter().map(Armour::protection).sum();

        prop_assert_eq!(
            knight.power(),
            knight.base_power() + knight.weapon().power() + potion(Stat::Power)
        );
        prop_assert_eq!(knight.protection(), armour + potion(Stat::Protection));
        prop_assert_eq!(knight.hp(), (knight.base_hp() + potion(Stat::Hp)).max(0));
    }

    #[test]
    fn prop_exchange_order_independent(a in arb_knight(), b in arb_knight()) {
        let to_config = |k: &Knight| KnightConfig {
            name: k.name().to_string(),
            power: k.base_power(),
            hp: k.base_hp(),
            armour: k.armour().to_vec(),
            weapon: k.weapon().clone(),
            potion: k.potion().cloned(),
        };
        let roster = Roster::new().with("a", to_config(&a)).with("b", to_config(&b));

        let mut forward = Battle::new(&roster);
        forward.exchange(Exchange::new("a", "b")).unwrap();
        let mut backward = Battle::new(&roster);
        backward.exchange(Exchange::new("b", "a")).unwrap();

        prop_assert_eq!(forward.knight("a").unwrap().hp(), backward.knight("a").unwrap().hp());
        prop_assert_eq!(forward.knight("b").unwrap().hp(), backward.knight("b").unwrap().hp());
    }
}
