mod encounter;
mod monster;
mod monster_kind;

pub use encounter::spawn_monsters;
pub use monster::{
    Monster,
    MonsterData,
};
pub use monster_kind::MonsterKind;
