use std::mem;

use anyhow::Result;
use legends_choice::{
    AttackChoice,
    CastChoice,
    Choice,
    EquipChoice,
    EquipSlot,
    PotionChoice,
};
use legends_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        ActionRequest,
        BattleEngineOptions,
        BattleOptions,
        BattleOutcome,
        DecisionSource,
        TargetRequest,
        TargetingPolicy,
        combat,
    },
    common::{
        MaybeOwned,
        MaybeOwnedMut,
    },
    error::ActionError,
    heroes::Hero,
    log::{
        Event,
        EventLog,
    },
    monsters::Monster,
};

/// The state of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    /// The battle has not started.
    Created,
    /// A new round is about to begin.
    RoundStart,
    /// Heroes choose and perform their actions.
    HeroesTurn,
    /// Living monsters attack.
    MonstersTurn,
    /// Conscious heroes regenerate.
    RoundEnd,
    /// The battle is over.
    Finished(BattleOutcome),
}

/// The result of a single decision made by a hero.
enum TurnResult {
    /// The hero's turn was used.
    Consumed,
    /// The hero may act again.
    Retained,
    /// The party escaped.
    Fled,
}

/// A battle between a party of heroes and a group of monsters.
///
/// Heroes are borrowed for the duration of the battle, so all changes to them (damage, rewards,
/// broken equipment) remain visible to the caller. Monsters are owned by the battle and removed as
/// they are defeated.
pub struct Battle<'b> {
    heroes: &'b mut [Hero],
    monsters: Vec<Monster>,
    state: BattleState,
    round: u32,
    log: EventLog,
    prng: MaybeOwnedMut<'b, dyn PseudoRandomNumberGenerator + 'b>,
    targeting: MaybeOwned<'b, dyn TargetingPolicy + 'b>,
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    reward_level: u32,
    reward_monster_count: usize,
    request_cursor: usize,
}

impl<'b> Battle<'b> {
    /// Creates a new battle.
    ///
    /// Fails if the options are invalid.
    pub fn new(
        heroes: &'b mut [Hero],
        monsters: Vec<Monster>,
        options: BattleOptions,
        engine_options: BattleEngineOptions,
    ) -> Result<Self> {
        options.validate()?;
        let prng: Box<dyn PseudoRandomNumberGenerator + 'b> =
            (engine_options.rng_factory)(options.seed);
        let targeting: Box<dyn TargetingPolicy + 'b> = options.targeting_policy_type().policy();
        Ok(Self::new_internal(
            heroes,
            monsters,
            MaybeOwnedMut::Owned(prng),
            MaybeOwned::Owned(targeting),
            options,
            engine_options,
        ))
    }

    fn new_internal(
        heroes: &'b mut [Hero],
        monsters: Vec<Monster>,
        prng: MaybeOwnedMut<'b, dyn PseudoRandomNumberGenerator + 'b>,
        targeting: MaybeOwned<'b, dyn TargetingPolicy + 'b>,
        options: BattleOptions,
        engine_options: BattleEngineOptions,
    ) -> Self {
        // Rewards assume every monster shares the level of the first one.
        let reward_level = monsters.first().map(|monster| monster.level).unwrap_or(0);
        let reward_monster_count = monsters.len();
        Self {
            heroes,
            monsters,
            state: BattleState::Created,
            round: 0,
            log: EventLog::new(),
            prng,
            targeting,
            options,
            engine_options,
            reward_level,
            reward_monster_count,
            request_cursor: 0,
        }
    }

    /// The current state of the battle.
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// The current round, starting at 1 once the battle has started.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The outcome of the battle, if it has ended.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.state {
            BattleState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        self.heroes
    }

    /// Monsters still standing.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// The battle's random number generator.
    pub fn prng(&mut self) -> &mut (dyn PseudoRandomNumberGenerator + 'b) {
        &mut *self.prng
    }

    /// All events logged so far.
    pub fn full_log(&self) -> &[Event] {
        self.log.events()
    }

    /// Events logged since the last call to this method.
    pub fn new_logs(&mut self) -> &[Event] {
        self.log.read_out()
    }

    /// Runs the battle to completion.
    ///
    /// The only errors are those produced by the decision source, which abort the battle in its
    /// current state.
    pub fn run(&mut self, decisions: &mut dyn DecisionSource) -> Result<BattleOutcome> {
        loop {
            if let BattleState::Finished(outcome) = self.state {
                return Ok(outcome);
            }
            self.step(decisions)?;
        }
    }

    fn step(&mut self, decisions: &mut dyn DecisionSource) -> Result<()> {
        let next = match self.state {
            BattleState::Created => {
                self.add_event(Event::BattleStart {
                    heroes: self.heroes.len(),
                    monsters: self.monsters.len(),
                });
                self.check_end().unwrap_or(BattleState::RoundStart)
            }
            BattleState::RoundStart => {
                self.round += 1;
                self.add_event(Event::Round { round: self.round });
                BattleState::HeroesTurn
            }
            BattleState::HeroesTurn => {
                if self.heroes_turn(decisions)? {
                    BattleState::Finished(BattleOutcome::Fled)
                } else {
                    self.check_end().unwrap_or(BattleState::MonstersTurn)
                }
            }
            BattleState::MonstersTurn => {
                self.monsters_turn();
                self.check_end().unwrap_or(BattleState::RoundEnd)
            }
            BattleState::RoundEnd => {
                for hero in self.heroes.iter_mut() {
                    hero.regenerate();
                }
                self.add_event(Event::RoundEnd { round: self.round });
                BattleState::RoundStart
            }
            BattleState::Finished(_) => return Ok(()),
        };
        self.transition(next);
        Ok(())
    }

    fn transition(&mut self, next: BattleState) {
        log::debug!("battle state {:?} -> {next:?}", self.state);
        self.state = next;
        if let BattleState::Finished(outcome) = next {
            if outcome == BattleOutcome::Victory {
                self.grant_rewards();
            }
            self.add_event(Event::BattleEnd { outcome });
        }
    }

    /// Checks if the battle should end, with victory taking precedence over defeat.
    fn check_end(&self) -> Option<BattleState> {
        if self.monsters.iter().all(|monster| monster.is_dead()) {
            Some(BattleState::Finished(BattleOutcome::Victory))
        } else if self.heroes.iter().all(|hero| hero.is_fainted()) {
            Some(BattleState::Finished(BattleOutcome::Defeat))
        } else {
            None
        }
    }

    fn add_event(&mut self, event: Event) {
        if self.engine_options.log_events {
            log::debug!("{event}");
        }
        self.log.push(event);
    }

    fn hero_name(&self, hero: usize) -> String {
        self.heroes
            .get(hero)
            .map(|hero| hero.display_name())
            .unwrap_or_default()
    }

    /// Runs the heroes' turn.
    ///
    /// Returns `true` if the party fled.
    fn heroes_turn(&mut self, decisions: &mut dyn DecisionSource) -> Result<bool> {
        for hero in 0..self.heroes.len() {
            if self.monsters.is_empty() {
                break;
            }
            if self.heroes[hero].is_fainted() {
                continue;
            }
            loop {
                let start = mem::replace(&mut self.request_cursor, self.log.events().len());
                let request = ActionRequest {
                    round: self.round,
                    hero,
                    heroes: self.heroes,
                    monsters: &self.monsters,
                    events: &self.log.events()[start..],
                };
                let choice = decisions.choose_action(&request)?;
                log::trace!("hero {hero} chose {choice}");
                match self.perform(hero, choice, decisions)? {
                    TurnResult::Consumed => break,
                    TurnResult::Retained => continue,
                    TurnResult::Fled => return Ok(true),
                }
            }
        }
        Ok(false)
    }

    fn perform(
        &mut self,
        hero: usize,
        choice: Choice,
        decisions: &mut dyn DecisionSource,
    ) -> Result<TurnResult> {
        let result = match &choice {
            Choice::Attack(AttackChoice { target }) => {
                match self.resolve_target(hero, *target, &choice, decisions)? {
                    Some(target) => self.attack(hero, target),
                    None => return Ok(TurnResult::Retained),
                }
            }
            Choice::Cast(CastChoice { spell, target }) => {
                match combat::check_cast(&mut self.heroes[hero], *spell) {
                    Err(error) => Err(error),
                    Ok(()) => match self.resolve_target(hero, *target, &choice, decisions)? {
                        Some(target) => self.cast(hero, *spell, target),
                        None => return Ok(TurnResult::Retained),
                    },
                }
            }
            Choice::Potion(PotionChoice { potion }) => self.drink(hero, *potion),
            Choice::Equip(equip) => self.equip(hero, equip),
            Choice::Inspect => {
                let name = self.hero_name(hero);
                self.add_event(Event::Inspect { hero: name });
                Ok(TurnResult::Retained)
            }
            Choice::Flee => Ok(self.flee(hero)),
        };
        match result {
            Ok(result) => Ok(result),
            Err(reason) => {
                let name = self.hero_name(hero);
                self.add_event(Event::ActionFailed { hero: name, reason });
                Ok(TurnResult::Retained)
            }
        }
    }

    /// Resolves the monster targeted by an action.
    ///
    /// Returns [`None`] if the decision source cancelled the action.
    fn resolve_target(
        &mut self,
        hero: usize,
        target: Option<usize>,
        choice: &Choice,
        decisions: &mut dyn DecisionSource,
    ) -> Result<Option<usize>> {
        if let Some(target) = target {
            return Ok(Some(target));
        }
        let request = TargetRequest {
            hero,
            choice,
            heroes: self.heroes,
            monsters: &self.monsters,
        };
        decisions.choose_monster_target(&request)
    }

    fn attack(&mut self, hero: usize, target: usize) -> Result<TurnResult, ActionError> {
        let monster = self
            .monsters
            .get_mut(target)
            .ok_or(ActionError::NoTarget)?;
        let outcome = combat::hero_attack(&mut self.heroes[hero], monster, &mut *self.prng)?;
        let hero_name = self.hero_name(hero);
        let monster_name = self.monsters[target].display_name();
        self.add_event(Event::Attack {
            hero: hero_name.clone(),
            monster: monster_name,
            damage: outcome.damage,
            dodged: outcome.dodged,
        });
        if let Some(item) = outcome.broken_weapon {
            self.add_event(Event::ItemBroken {
                hero: hero_name,
                item,
            });
        }
        self.remove_defeated_monsters();
        Ok(TurnResult::Consumed)
    }

    fn cast(
        &mut self,
        hero: usize,
        spell: usize,
        target: usize,
    ) -> Result<TurnResult, ActionError> {
        let monster = self
            .monsters
            .get_mut(target)
            .ok_or(ActionError::NoTarget)?;
        let outcome = combat::hero_cast(&mut self.heroes[hero], spell, monster, &mut *self.prng)?;
        let hero_name = self.hero_name(hero);
        let monster_name = self.monsters[target].display_name();
        self.add_event(Event::Cast {
            hero: hero_name.clone(),
            spell: outcome.spell.clone(),
            monster: monster_name,
            damage: outcome.damage,
            dodged: outcome.dodged,
        });
        if outcome.exhausted {
            self.add_event(Event::ItemExhausted {
                hero: hero_name,
                item: outcome.spell,
            });
        }
        self.remove_defeated_monsters();
        Ok(TurnResult::Consumed)
    }

    fn drink(&mut self, hero: usize, potion: usize) -> Result<TurnResult, ActionError> {
        let outcome = combat::drink_potion(&mut self.heroes[hero], potion)?;
        let hero_name = self.hero_name(hero);
        self.add_event(Event::Potion {
            hero: hero_name.clone(),
            potion: outcome.potion.clone(),
            amount: outcome.amount,
            attributes: outcome.attributes.to_string(),
        });
        if outcome.exhausted {
            self.add_event(Event::ItemExhausted {
                hero: hero_name,
                item: outcome.potion,
            });
        }
        Ok(TurnResult::Consumed)
    }

    fn equip(&mut self, hero: usize, equip: &EquipChoice) -> Result<TurnResult, ActionError> {
        let hero_data = &mut self.heroes[hero];
        let item = match equip.slot {
            EquipSlot::Weapon => {
                hero_data.equip_weapon(equip.item, equip.two_handed)?;
                hero_data.inventory.weapons[equip.item].name.clone()
            }
            EquipSlot::Armor => {
                hero_data.equip_armor(equip.item)?;
                hero_data.inventory.armors[equip.item].name.clone()
            }
        };
        let two_handed = equip.slot == EquipSlot::Weapon && hero_data.two_handed_grip();
        let hero_name = self.hero_name(hero);
        self.add_event(Event::Equip {
            hero: hero_name,
            slot: equip.slot.to_string(),
            item,
            two_handed,
        });
        Ok(TurnResult::Retained)
    }

    fn flee(&mut self, hero: usize) -> TurnResult {
        let success = rand_util::roll(&mut *self.prng, self.options.flee_chance);
        let hero_name = self.hero_name(hero);
        self.add_event(Event::Flee {
            hero: hero_name,
            success,
        });
        if !success {
            return TurnResult::Consumed;
        }
        let penalty = self.options.flee_gold_penalty;
        let mut events = Vec::new();
        for hero in self.heroes.iter_mut() {
            if hero.is_fainted() || hero.gold <= 0.0 {
                continue;
            }
            let amount = hero.gold * penalty;
            if hero.spend_gold(amount) {
                events.push(Event::GoldLost {
                    hero: hero.display_name(),
                    amount,
                });
            }
        }
        for event in events {
            self.add_event(event);
        }
        TurnResult::Fled
    }

    /// Removes defeated monsters from the encounter, in order.
    fn remove_defeated_monsters(&mut self) {
        let defeated = self
            .monsters
            .iter()
            .filter(|monster| monster.is_dead())
            .map(|monster| monster.display_name())
            .collect::<Vec<_>>();
        self.monsters.retain(|monster| !monster.is_dead());
        for monster in defeated {
            self.add_event(Event::Defeated { monster });
        }
    }

    fn monsters_turn(&mut self) {
        let mut events = Vec::new();
        for monster in &self.monsters {
            let Some(outcome) =
                combat::monster_attack(monster, self.heroes, &*self.targeting, &mut *self.prng)
            else {
                continue;
            };
            let hero = &self.heroes[outcome.hero];
            events.push(Event::MonsterAttack {
                monster: monster.display_name(),
                hero: hero.display_name(),
                damage: outcome.damage,
                dodged: outcome.dodged,
            });
            if let Some(item) = outcome.broken_armor {
                events.push(Event::ItemBroken {
                    hero: hero.display_name(),
                    item,
                });
            }
            if outcome.fainted {
                events.push(Event::Faint {
                    hero: hero.display_name(),
                });
            }
        }
        for event in events {
            self.add_event(event);
        }
    }

    fn grant_rewards(&mut self) {
        if self.reward_monster_count == 0 {
            return;
        }
        let gold = self.reward_level as f64 * 100.0;
        let experience = self.reward_monster_count as f64 * 2.0;
        let mut events = Vec::new();
        for hero in self.heroes.iter_mut() {
            if hero.is_fainted() {
                hero.revive();
                events.push(Event::Revive {
                    hero: hero.display_name(),
                    hp: hero.hp,
                    mp: hero.mp,
                });
                continue;
            }
            hero.gain_gold(gold);
            let before = hero.level;
            hero.gain_experience(experience);
            events.push(Event::Reward {
                hero: hero.display_name(),
                gold,
                experience,
            });
            for level in (before + 1)..=hero.level {
                events.push(Event::LevelUp {
                    hero: hero.display_name(),
                    level,
                });
            }
        }
        for event in events {
            self.add_event(event);
        }
    }
}

/// Runs a battle to completion with an explicit targeting policy and random number generator.
///
/// Uses default battle options for everything else.
pub fn run_battle<'b>(
    heroes: &'b mut [Hero],
    monsters: Vec<Monster>,
    targeting: &'b dyn TargetingPolicy,
    decisions: &mut dyn DecisionSource,
    prng: &'b mut dyn PseudoRandomNumberGenerator,
) -> Result<BattleOutcome> {
    let mut battle = Battle::new_internal(
        heroes,
        monsters,
        MaybeOwnedMut::Unowned(prng),
        MaybeOwned::Unowned(targeting),
        BattleOptions::default(),
        BattleEngineOptions::default(),
    );
    battle.run(decisions)
}
