mod hero;
mod hero_class;

pub use hero::{
    Hero,
    HeroData,
    ReceivedHit,
};
pub use hero_class::{
    HeroClass,
    Stat,
};
