//! Clock and id-assignment implementations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use respondright_domain::ScenarioId;

use crate::infrastructure::ports::{ClockPort, IdPort};

/// System clock - uses real time.
#[derive(Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Assigns fresh ids from random UUIDs. Authored catalog ids are short
/// numeric strings; generated ids can never collide with them.
#[derive(Default)]
pub struct UuidIds;

impl UuidIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdPort for UuidIds {
    fn fresh_id(&self) -> ScenarioId {
        ScenarioId::new(Uuid::new_v4().to_string())
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic id sequence for testing.
#[cfg(test)]
pub struct FixedIds(pub std::sync::Mutex<Vec<ScenarioId>>);

#[cfg(test)]
impl FixedIds {
    pub fn queue(ids: impl IntoIterator<Item = &'static str>) -> Self {
        let mut ids: Vec<ScenarioId> = ids.into_iter().map(ScenarioId::from).collect();
        ids.reverse();
        Self(std::sync::Mutex::new(ids))
    }
}

#[cfg(test)]
impl IdPort for FixedIds {
    fn fresh_id(&self) -> ScenarioId {
        self.0
            .lock()
            .expect("id queue lock")
            .pop()
            .unwrap_or_else(|| ScenarioId::from("fixed"))
    }
}
