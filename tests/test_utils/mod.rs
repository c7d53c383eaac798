//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use map_phase_bench::{Deletable, Insertable, Sample, Searchable};

/// Small hand-picked dataset with a repeated key.
pub fn duplicate_key_dataset() -> Vec<(i32, i32)> {
    vec![(5, 1), (7, 2), (5, 9)]
}

pub fn labels(samples: &[Sample]) -> Vec<String> {
    samples.iter().map(|s| s.label.clone()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Insert(i32),
    Search(i32),
    Delete(i32),
}

/// Map that logs every capability call it receives.
#[derive(Default)]
pub struct CallLog {
    pub inner: BTreeMap<i32, i32>,
    pub calls: RefCell<Vec<Call>>,
}

impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Insertable<i32, i32> for CallLog {
    fn insert_pair(&mut self, key: i32, value: i32) {
        self.calls.borrow_mut().push(Call::Insert(key));
        self.inner.insert_pair(key, value);
    }
}

impl Searchable<i32, i32> for CallLog {
    fn search(&self, key: &i32) -> Option<&i32> {
        self.calls.borrow_mut().push(Call::Search(*key));
        self.inner.get(key)
    }
}

impl Deletable<i32, i32> for CallLog {
    fn delete(&mut self, key: &i32) -> Option<i32> {
        self.calls.borrow_mut().push(Call::Delete(*key));
        self.inner.remove(key)
    }
}
