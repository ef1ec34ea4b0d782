use std::mem;

use crate::log::Event;

/// A log of battle events that can be exported.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<Event>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new events since the last call to [`Self::read_out`]?
    pub fn has_new_events(&self) -> bool {
        self.last_read < self.events.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Pushes multiple events to the log.
    pub fn push_extend<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = Event>,
    {
        self.events.extend(iterable);
    }

    /// Returns all events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns an iterator over all events in text form.
    pub fn logs(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(|event| event.to_string())
    }

    /// Reads out any new events that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> &[Event] {
        let i = mem::replace(&mut self.last_read, self.events.len());
        &self.events[i..]
    }
}

#[cfg(test)]
mod event_log_test {
    use crate::log::{
        Event,
        EventLog,
    };

    #[test]
    fn reads_out_new_events() {
        let mut log = EventLog::new();
        assert!(!log.has_new_events());

        log.push(Event::Round { round: 1 });
        log.push(Event::Faint {
            hero: "Eunoia Cyn".to_owned(),
        });
        assert!(log.has_new_events());
        assert_eq!(log.read_out().len(), 2);
        assert!(!log.has_new_events());
        assert!(log.read_out().is_empty());

        log.push_extend([Event::RoundEnd { round: 1 }, Event::Round { round: 2 }]);
        pretty_assertions::assert_eq!(
            log.read_out(),
            &[Event::RoundEnd { round: 1 }, Event::Round { round: 2 }]
        );
        assert_eq!(
            log.logs().collect::<Vec<_>>(),
            vec![
                "round|round:1",
                "faint|hero:Eunoia Cyn",
                "roundend|round:1",
                "round|round:2",
            ]
        );
    }
}
