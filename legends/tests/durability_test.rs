use anyhow::Result;
use legends::{
    BattleOutcome,
    Hero,
    HeroData,
    MonsterData,
    MonsterKind,
    error::WrapResultError,
    items::Durability,
};
use legends_test_utils::{
    LogMatch,
    ScriptedDecisions,
    TestBattleBuilder,
    assert_new_logs_eq,
};

fn hero() -> Result<Hero> {
    let data = serde_json::from_str::<HeroData>(
        r#"{
            "name": "Gaerdal_Ironhand",
            "class": "Warrior",
            "mana": 100,
            "strength": 0,
            "agility": 0,
            "dexterity": 600,
            "gold": 0,
            "inventory": {
                "weapons": [
                    {
                        "name": "Dagger",
                        "cost": 200,
                        "required_level": 1,
                        "damage": 250,
                        "uses": 1
                    }
                ],
                "armors": [
                    {
                        "name": "Breastplate",
                        "cost": 350,
                        "required_level": 3,
                        "reduction": 4,
                        "uses": 1
                    }
                ],
                "equipped_weapon": 0,
                "equipped_armor": 0
            }
        }"#,
    )
    .wrap_error()?;
    Ok(Hero::from(data))
}

#[test]
fn broken_equipment_is_unequipped_and_cannot_be_reequipped() {
    let mut heroes = vec![hero().unwrap()];
    let monster = MonsterData {
        name: "Cyrrollalee".to_owned(),
        kind: MonsterKind::Exoskeleton,
        level: 1,
        base_damage: 10.0,
        defense: 0.0,
        dodge_chance: 0.0,
    }
    .spawn();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_flee_chance(1.0)
        .add_monster(monster)
        .build(&mut heroes)
        .unwrap();
    let mut decisions =
        ScriptedDecisions::from_choices("attack 0;equip weapon 0;equip armor 0;flee").unwrap();
    assert_matches::assert_matches!(battle.run(&mut decisions), Ok(BattleOutcome::Fled));
    assert_eq!(battle.monsters()[0].hp, 87.5);

    let expected_logs = serde_json::from_str::<Vec<LogMatch>>(
        r#"[
            "battlestart|heroes:1|monsters:1",
            "round|round:1",
            "attack|hero:Gaerdal Ironhand|monster:Cyrrollalee|damage:12.5|dodged:false",
            "itembroken|hero:Gaerdal Ironhand|item:Dagger",
            "monsterattack|monster:Cyrrollalee|hero:Gaerdal Ironhand|damage:6.0|dodged:false",
            "itembroken|hero:Gaerdal Ironhand|item:Breastplate",
            "roundend|round:1",
            "round|round:2",
            "actionfailed|hero:Gaerdal Ironhand|reason:itembroken",
            "actionfailed|hero:Gaerdal Ironhand|reason:itembroken",
            "flee|hero:Gaerdal Ironhand|success:true",
            "battleend|outcome:fled"
        ]"#,
    )
    .unwrap();
    assert_new_logs_eq(&mut battle, &expected_logs);

    drop(battle);
    let inventory = &heroes[0].inventory;
    // Broken items stay in the inventory for repair.
    assert_eq!(inventory.weapons[0].uses, Durability::Remaining(0));
    assert_eq!(inventory.armors[0].uses, Durability::Remaining(0));
    assert_eq!(inventory.equipped_weapon_index(), None);
    assert_eq!(inventory.equipped_armor_index(), None);
    assert_eq!(heroes[0].hp, 100.0);
}
