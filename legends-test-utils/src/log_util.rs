use std::fmt;

use itertools::Itertools;
use legends::Battle;
use serde::Deserialize;

/// An expected battle event, in its pipe-delimited log form.
#[derive(Deserialize, Clone)]
#[serde(untagged)]
pub enum LogMatch {
    Exact(String),
    Substrings(Vec<String>),
}

impl fmt::Debug for LogMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(str) => write!(f, "\"{str}\""),
            Self::Substrings(strs) => write!(
                f,
                "substrings:{}",
                strs.iter().map(|str| format!("\"{str}\"")).join(";")
            ),
        }
    }
}

impl PartialEq<str> for LogMatch {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Exact(str) => str == other,
            Self::Substrings(strs) => strs.iter().all(|str| other.contains(str.as_str())),
        }
    }
}

impl PartialEq<String> for LogMatch {
    fn eq(&self, other: &String) -> bool {
        self.eq(other.as_str())
    }
}

impl PartialEq<&str> for LogMatch {
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

impl From<&str> for LogMatch {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_owned())
    }
}

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle<'_>, want: &[LogMatch]) {
    let got = battle
        .new_logs()
        .iter()
        .map(|event| event.to_string())
        .collect::<Vec<_>>();
    let got = got.iter().map(String::as_str).collect::<Vec<_>>();
    let want = want.iter().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(want, got)
}

/// Asserts that logs since the start of the given round are equal to the given logs.
///
/// The round's own log is not included.
#[track_caller]
pub fn assert_logs_since_round_eq(battle: &Battle<'_>, round: u32, want: &[LogMatch]) {
    let got = battle
        .full_log()
        .iter()
        .map(|event| event.to_string())
        .collect::<Vec<_>>();
    let round_log = format!("round|round:{round}");
    let round_log_index = match got.iter().position(|log| log == &round_log) {
        Some(index) => index + 1,
        None => panic!("battle log has no \"{round_log}\""),
    };
    let got = got[round_log_index..]
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>();
    let want = want.iter().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(want, got)
}
