use crate::event::Event;

/// Receives every state transition of a running game. Observers only watch;
/// the game never reads anything back from them.
pub trait Observer {
    fn notify(&mut self, event: &Event, players: &[&String]);
}

pub struct NoopObserver;

impl Observer for NoopObserver {
    fn notify(&mut self, _event: &Event, _players: &[&String]) {}
}

/// Keeps every event in order, e.g. to compare two runs.
#[derive(Default, Debug)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog { events: vec![] }
    }

    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Observer for EventLog {
    fn notify(&mut self, event: &Event, _players: &[&String]) {
        self.events.push(event.clone());
    }
}
