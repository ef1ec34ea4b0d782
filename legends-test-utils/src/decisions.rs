use std::collections::VecDeque;

use anyhow::Result;
use legends::{
    ActionRequest,
    DecisionSource,
    TargetRequest,
    error::general_error,
};
use legends_choice::{
    Choice,
    choices_from_string,
};

/// A [`DecisionSource`] that replays a fixed script of choices.
///
/// Running out of choices is an error, which aborts the battle.
#[derive(Default)]
pub struct ScriptedDecisions {
    actions: VecDeque<Choice>,
    targets: VecDeque<Option<usize>>,
    requests: Vec<(u32, usize)>,
}

impl ScriptedDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a script from choices in their string form, separated by `;`.
    pub fn from_choices(choices: &str) -> Result<Self> {
        Ok(Self::new().with_actions(choices_from_string(choices)?))
    }

    pub fn with_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Choice>,
    {
        self.actions.extend(actions);
        self
    }

    /// Adds answers for actions that do not name their target.
    ///
    /// [`None`] cancels the action.
    pub fn with_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        self.targets.extend(targets);
        self
    }

    /// The `(round, hero)` of every action request received, in order.
    pub fn requests(&self) -> &[(u32, usize)] {
        &self.requests
    }

    /// The number of scripted actions not yet used.
    pub fn remaining_actions(&self) -> usize {
        self.actions.len()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn choose_action(&mut self, request: &ActionRequest) -> Result<Choice> {
        self.requests.push((request.round, request.hero));
        self.actions.pop_front().ok_or_else(|| {
            general_error(format!(
                "no scripted action for hero {} in round {}",
                request.hero, request.round
            ))
        })
    }

    fn choose_monster_target(&mut self, request: &TargetRequest) -> Result<Option<usize>> {
        self.targets.pop_front().ok_or_else(|| {
            general_error(format!("no scripted target for hero {}", request.hero))
        })
    }
}
