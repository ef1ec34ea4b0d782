use anyhow::Result;
use legends_choice::Choice;

use crate::{
    heroes::Hero,
    log::Event,
    monsters::Monster,
};

/// A request for a hero's next action during the heroes' turn.
#[derive(Debug, Clone, Copy)]
pub struct ActionRequest<'b> {
    /// The current round, starting at 1.
    pub round: u32,
    /// Index of the hero being asked to act.
    pub hero: usize,
    pub heroes: &'b [Hero],
    /// Monsters still standing.
    pub monsters: &'b [Monster],
    /// Events logged since the previous request.
    pub events: &'b [Event],
}

impl ActionRequest<'_> {
    /// The hero being asked to act.
    pub fn acting_hero(&self) -> Option<&Hero> {
        self.heroes.get(self.hero)
    }
}

/// A request for the monster targeted by an action that did not name one.
#[derive(Debug, Clone, Copy)]
pub struct TargetRequest<'b> {
    /// Index of the acting hero.
    pub hero: usize,
    /// The action being targeted.
    pub choice: &'b Choice,
    pub heroes: &'b [Hero],
    /// Monsters still standing. The selected index refers to this list.
    pub monsters: &'b [Monster],
}

/// The source of player decisions during a battle.
///
/// Implementations own all input handling, including re-prompting on invalid input. The engine
/// only sees validated choices.
pub trait DecisionSource {
    /// Chooses the next action of the requested hero.
    ///
    /// An error aborts the battle.
    fn choose_action(&mut self, request: &ActionRequest) -> Result<Choice>;

    /// Chooses the monster targeted by an attack or spell.
    ///
    /// Returning [`None`] cancels the action without consuming the hero's turn.
    fn choose_monster_target(&mut self, request: &TargetRequest) -> Result<Option<usize>>;
}
