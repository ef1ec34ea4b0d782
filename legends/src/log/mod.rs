mod event;
mod log;

pub use self::{
    event::Event,
    log::EventLog,
};
