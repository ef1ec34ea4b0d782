use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::BattleOutcome,
    error::ActionError,
};

/// An observable event in a battle.
///
/// Events are data for a presentation layer to render. The [`Display`] implementation produces a
/// compact `name|key:value` line, which is also what tests compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    BattleStart {
        heroes: usize,
        monsters: usize,
    },
    Round {
        round: u32,
    },
    Attack {
        hero: String,
        monster: String,
        damage: f64,
        dodged: bool,
    },
    Cast {
        hero: String,
        spell: String,
        monster: String,
        damage: f64,
        dodged: bool,
    },
    MonsterAttack {
        monster: String,
        hero: String,
        damage: f64,
        dodged: bool,
    },
    Potion {
        hero: String,
        potion: String,
        amount: f64,
        attributes: String,
    },
    Equip {
        hero: String,
        slot: String,
        item: String,
        two_handed: bool,
    },
    Inspect {
        hero: String,
    },
    ItemBroken {
        hero: String,
        item: String,
    },
    ItemExhausted {
        hero: String,
        item: String,
    },
    ActionFailed {
        hero: String,
        reason: ActionError,
    },
    Faint {
        hero: String,
    },
    Defeated {
        monster: String,
    },
    Flee {
        hero: String,
        success: bool,
    },
    GoldLost {
        hero: String,
        amount: f64,
    },
    RoundEnd {
        round: u32,
    },
    Reward {
        hero: String,
        gold: f64,
        experience: f64,
    },
    LevelUp {
        hero: String,
        level: u32,
    },
    Revive {
        hero: String,
        hp: f64,
        mp: f64,
    },
    BattleEnd {
        outcome: BattleOutcome,
    },
}

impl Event {
    /// The name of the event, which is the first part of its text form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BattleStart { .. } => "battlestart",
            Self::Round { .. } => "round",
            Self::Attack { .. } => "attack",
            Self::Cast { .. } => "cast",
            Self::MonsterAttack { .. } => "monsterattack",
            Self::Potion { .. } => "potion",
            Self::Equip { .. } => "equip",
            Self::Inspect { .. } => "inspect",
            Self::ItemBroken { .. } => "itembroken",
            Self::ItemExhausted { .. } => "itemexhausted",
            Self::ActionFailed { .. } => "actionfailed",
            Self::Faint { .. } => "faint",
            Self::Defeated { .. } => "defeated",
            Self::Flee { .. } => "flee",
            Self::GoldLost { .. } => "goldlost",
            Self::RoundEnd { .. } => "roundend",
            Self::Reward { .. } => "reward",
            Self::LevelUp { .. } => "levelup",
            Self::Revive { .. } => "revive",
            Self::BattleEnd { .. } => "battleend",
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Self::BattleStart { heroes, monsters } => {
                write!(f, "|heroes:{heroes}|monsters:{monsters}")
            }
            Self::Round { round } | Self::RoundEnd { round } => write!(f, "|round:{round}"),
            Self::Attack {
                hero,
                monster,
                damage,
                dodged,
            } => write!(
                f,
                "|hero:{hero}|monster:{monster}|damage:{damage:.1}|dodged:{dodged}"
            ),
            Self::Cast {
                hero,
                spell,
                monster,
                damage,
                dodged,
            } => write!(
                f,
                "|hero:{hero}|spell:{spell}|monster:{monster}|damage:{damage:.1}|dodged:{dodged}"
            ),
            Self::MonsterAttack {
                monster,
                hero,
                damage,
                dodged,
            } => write!(
                f,
                "|monster:{monster}|hero:{hero}|damage:{damage:.1}|dodged:{dodged}"
            ),
            Self::Potion {
                hero,
                potion,
                amount,
                attributes,
            } => write!(
                f,
                "|hero:{hero}|potion:{potion}|amount:{amount:.1}|attributes:{attributes}"
            ),
            Self::Equip {
                hero,
                slot,
                item,
                two_handed,
            } => {
                write!(f, "|hero:{hero}|slot:{slot}|item:{item}")?;
                if *two_handed {
                    write!(f, "|twohanded")?;
                }
                Ok(())
            }
            Self::Inspect { hero } | Self::Faint { hero } => write!(f, "|hero:{hero}"),
            Self::ItemBroken { hero, item } | Self::ItemExhausted { hero, item } => {
                write!(f, "|hero:{hero}|item:{item}")
            }
            Self::ActionFailed { hero, reason } => {
                write!(f, "|hero:{hero}|reason:{}", reason.reason())
            }
            Self::Defeated { monster } => write!(f, "|monster:{monster}"),
            Self::Flee { hero, success } => write!(f, "|hero:{hero}|success:{success}"),
            Self::GoldLost { hero, amount } => write!(f, "|hero:{hero}|amount:{amount:.1}"),
            Self::Reward {
                hero,
                gold,
                experience,
            } => write!(f, "|hero:{hero}|gold:{gold:.1}|exp:{experience:.1}"),
            Self::LevelUp { hero, level } => write!(f, "|hero:{hero}|level:{level}"),
            Self::Revive { hero, hp, mp } => write!(f, "|hero:{hero}|hp:{hp:.1}|mp:{mp:.1}"),
            Self::BattleEnd { outcome } => write!(f, "|outcome:{outcome}"),
        }
    }
}
