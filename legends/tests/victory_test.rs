use anyhow::Result;
use legends::{
    BattleOutcome,
    BattleState,
    Hero,
    HeroData,
    Monster,
    MonsterData,
    error::WrapResultError,
};
use legends_test_utils::{
    LogMatch,
    ScriptedDecisions,
    TestBattleBuilder,
    assert_new_logs_eq,
};

fn party() -> Result<Vec<Hero>> {
    let heroes = serde_json::from_str::<Vec<HeroData>>(
        r#"[
            {
                "name": "Gaerdal_Ironhand",
                "class": "Warrior",
                "mana": 100,
                "strength": 2000,
                "agility": 0,
                "dexterity": 600,
                "gold": 1354
            },
            {
                "name": "Muamman_Duathall",
                "class": "Paladin",
                "mana": 300,
                "strength": 2000,
                "agility": 0,
                "dexterity": 750,
                "gold": 2500
            },
            {
                "name": "Sehanine_Moonbow",
                "class": "Sorcerer",
                "mana": 800,
                "strength": 700,
                "agility": 0,
                "dexterity": 800,
                "gold": 2500
            }
        ]"#,
    )
    .wrap_error()?;
    Ok(heroes.into_iter().map(Hero::from).collect())
}

fn monsters(level: u32) -> Result<Vec<Monster>> {
    let monsters = serde_json::from_str::<Vec<MonsterData>>(
        r#"[
            {
                "name": "Casper",
                "kind": "Spirit",
                "level": 1,
                "base_damage": 100,
                "defense": 0,
                "dodge_chance": 0
            },
            {
                "name": "Natsunomeryu",
                "kind": "Dragon",
                "level": 1,
                "base_damage": 100,
                "defense": 0,
                "dodge_chance": 0
            }
        ]"#,
    )
    .wrap_error()?;
    Ok(monsters
        .iter()
        .map(|monster| monster.at_level(level))
        .collect())
}

#[test]
fn defeating_all_monsters_skips_monsters_turn_and_rewards_party() {
    let mut heroes = party().unwrap();
    heroes[2].hp = 0.0;
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_monsters(monsters(1).unwrap())
        .build(&mut heroes)
        .unwrap();
    let mut decisions = ScriptedDecisions::from_choices("attack 0;attack 0").unwrap();
    assert_matches::assert_matches!(battle.run(&mut decisions), Ok(BattleOutcome::Victory));
    assert_eq!(battle.state(), BattleState::Finished(BattleOutcome::Victory));
    assert_eq!(battle.round(), 1);
    assert!(battle.monsters().is_empty());

    let expected_logs = serde_json::from_str::<Vec<LogMatch>>(
        r#"[
            "battlestart|heroes:3|monsters:2",
            "round|round:1",
            "attack|hero:Gaerdal Ironhand|monster:Casper|damage:100.0|dodged:false",
            "defeated|monster:Casper",
            "attack|hero:Muamman Duathall|monster:Natsunomeryu|damage:100.0|dodged:false",
            "defeated|monster:Natsunomeryu",
            "reward|hero:Gaerdal Ironhand|gold:100.0|exp:4.0",
            "reward|hero:Muamman Duathall|gold:100.0|exp:4.0",
            "revive|hero:Sehanine Moonbow|hp:50.0|mp:400.0",
            "battleend|outcome:victory"
        ]"#,
    )
    .unwrap();
    assert_new_logs_eq(&mut battle, &expected_logs);
    assert_eq!(decisions.requests(), [(1, 0), (1, 1)]);

    drop(battle);
    assert_eq!(heroes[0].gold, 1454.0);
    assert_eq!(heroes[0].experience, 4.0);
    assert_eq!(heroes[1].gold, 2600.0);
    assert_eq!(heroes[2].gold, 2500.0);
    assert_eq!(heroes[2].experience, 0.0);
    assert_eq!(heroes[2].hp, 50.0);
    assert_eq!(heroes[2].mp, 400.0);
}

#[test]
fn rewards_use_level_of_monsters() {
    let mut heroes = party().unwrap();
    let mut monsters = monsters(3).unwrap();
    for monster in &mut monsters {
        monster.hp = 100.0;
    }
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_monsters(monsters)
        .build(&mut heroes)
        .unwrap();
    let mut decisions = ScriptedDecisions::from_choices("attack 0;attack 0").unwrap();
    assert_matches::assert_matches!(battle.run(&mut decisions), Ok(BattleOutcome::Victory));

    let expected_logs = serde_json::from_str::<Vec<LogMatch>>(
        r#"[
            "reward|hero:Gaerdal Ironhand|gold:300.0|exp:4.0",
            "reward|hero:Muamman Duathall|gold:300.0|exp:4.0",
            "reward|hero:Sehanine Moonbow|gold:300.0|exp:4.0",
            "battleend|outcome:victory"
        ]"#,
    )
    .unwrap();
    let logs = battle
        .full_log()
        .iter()
        .map(|event| event.to_string())
        .collect::<Vec<_>>();
    let logs = logs[(logs.len() - 4)..]
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(expected_logs.iter().collect::<Vec<_>>(), logs);
}

#[test]
fn experience_reward_levels_up_heroes() {
    let mut heroes = party().unwrap();
    heroes[0].experience = 7.0;
    heroes[1].experience = 6.0;
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_monsters(monsters(1).unwrap())
        .build(&mut heroes)
        .unwrap();
    let mut decisions = ScriptedDecisions::from_choices("attack 0;attack 0").unwrap();
    assert_matches::assert_matches!(battle.run(&mut decisions), Ok(BattleOutcome::Victory));

    let expected_logs = serde_json::from_str::<Vec<LogMatch>>(
        r#"[
            "battlestart|heroes:3|monsters:2",
            "round|round:1",
            ["attack", "monster:Casper"],
            "defeated|monster:Casper",
            ["attack", "monster:Natsunomeryu"],
            "defeated|monster:Natsunomeryu",
            "reward|hero:Gaerdal Ironhand|gold:100.0|exp:4.0",
            "levelup|hero:Gaerdal Ironhand|level:2",
            "reward|hero:Muamman Duathall|gold:100.0|exp:4.0",
            "levelup|hero:Muamman Duathall|level:2",
            "reward|hero:Sehanine Moonbow|gold:100.0|exp:4.0",
            "battleend|outcome:victory"
        ]"#,
    )
    .unwrap();
    assert_new_logs_eq(&mut battle, &expected_logs);

    drop(battle);
    assert_eq!(heroes[0].level, 2);
    assert_eq!(heroes[0].experience, 1.0);
    assert_eq!(heroes[0].hp, 200.0);
    assert_eq!(heroes[1].level, 2);
    assert_eq!(heroes[1].experience, 0.0);
    assert_eq!(heroes[2].level, 1);
    assert_eq!(heroes[2].experience, 4.0);
}

#[test]
fn battle_without_monsters_ends_in_victory_without_rewards() {
    let mut heroes = party().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .build(&mut heroes)
        .unwrap();
    let mut decisions = ScriptedDecisions::new();
    assert_matches::assert_matches!(battle.run(&mut decisions), Ok(BattleOutcome::Victory));
    assert_eq!(battle.round(), 0);

    let expected_logs = serde_json::from_str::<Vec<LogMatch>>(
        r#"[
            "battlestart|heroes:3|monsters:0",
            "battleend|outcome:victory"
        ]"#,
    )
    .unwrap();
    assert_new_logs_eq(&mut battle, &expected_logs);
    assert!(decisions.requests().is_empty());

    drop(battle);
    assert_eq!(heroes[0].gold, 1354.0);
}
