//! Per-class request sequence numbers.
//!
//! Responses can arrive out of order (each request runs on its own task).
//! A response is applied only when its sequence number is the latest issued
//! for its [`ActionClass`]; anything older was superseded.

use crate::domain::{ActionClass, RequestSeq};

#[derive(Debug, Clone, Copy, Default)]
struct Counter {
    issued: RequestSeq,
    settled: RequestSeq,
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    profile: Counter,
    projects: Counter,
    search: Counter,
}

impl RequestTracker {
    fn counter(&self, class: ActionClass) -> &Counter {
        match class {
            ActionClass::Profile => &self.profile,
            ActionClass::ProjectsBySkill => &self.projects,
            ActionClass::Search => &self.search,
        }
    }

    fn counter_mut(&mut self, class: ActionClass) -> &mut Counter {
        match class {
            ActionClass::Profile => &mut self.profile,
            ActionClass::ProjectsBySkill => &mut self.projects,
            ActionClass::Search => &mut self.search,
        }
    }

    /// Allocate the next sequence number for `class`.
    pub fn issue(&mut self, class: ActionClass) -> RequestSeq {
        let counter = self.counter_mut(class);
        counter.issued = counter.issued.next();
        counter.issued
    }

    /// Returns true (and marks the class settled) if `seq` is the latest
    /// issued for `class`. Stale sequence numbers leave the tracker untouched.
    pub fn accept(&mut self, class: ActionClass, seq: RequestSeq) -> bool {
        let counter = self.counter_mut(class);
        if seq != counter.issued || counter.settled == seq {
            return false;
        }
        counter.settled = seq;
        true
    }

    /// Invalidate whatever is in flight for `class` without issuing a request.
    pub fn supersede(&mut self, class: ActionClass) {
        let counter = self.counter_mut(class);
        counter.issued = counter.issued.next();
        counter.settled = counter.issued;
    }

    /// A request of this class is waiting for its response.
    pub fn is_pending(&self, class: ActionClass) -> bool {
        let counter = self.counter(class);
        counter.issued != counter.settled
    }
}
