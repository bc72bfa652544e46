//! In-memory fakes shared by the unit tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::core::accessibility::{PreferenceStore, PresentationTarget};
use crate::core::waitlist::{SubmissionAccepted, SubmissionService, ValidationErrors, WaitlistForm};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Default)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl PresentationTarget for ClassList {
    fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }
}

/// Counts calls and answers with a fixed outcome
#[derive(Debug, Default)]
pub struct RecordingService {
    calls: Cell<usize>,
    rejection: Option<ValidationErrors>,
}

impl RecordingService {
    pub fn rejecting(errors: ValidationErrors) -> Self {
        Self {
            calls: Cell::new(0),
            rejection: Some(errors),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: WaitlistForm> SubmissionService<F> for RecordingService {
    async fn submit(&self, _submission: &F) -> Result<SubmissionAccepted, ValidationErrors> {
        self.calls.set(self.calls.get() + 1);
        match &self.rejection {
            Some(errors) => Err(errors.clone()),
            None => Ok(SubmissionAccepted),
        }
    }
}
