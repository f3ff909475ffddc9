//! Score readout. The visible counter always mirrors the integer score.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;

pub trait ScoreDisplay {
    fn show(&mut self, score: i64);
}

pub fn format_score(score: i64) -> String {
    score.to_string()
}

/// Writes the score as the element's text content.
pub struct ElementScore {
    el: Element,
}

impl ElementScore {
    pub fn new(el: Element) -> Self {
        Self { el }
    }
}

impl ScoreDisplay for ElementScore {
    fn show(&mut self, score: i64) {
        self.el.set_text_content(Some(&format_score(score)));
    }
}

/// Keeps the last shown value and how many refreshes happened (headless runs / tests).
#[derive(Clone, Debug, Default)]
pub struct MemoryScore {
    last: Rc<Cell<Option<i64>>>,
    refreshes: Rc<Cell<usize>>,
}

impl MemoryScore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn last(&self) -> Option<i64> {
        self.last.get()
    }
    pub fn refreshes(&self) -> usize {
        self.refreshes.get()
    }
}

impl ScoreDisplay for MemoryScore {
    fn show(&mut self, score: i64) {
        self.last.set(Some(score));
        self.refreshes.set(self.refreshes.get() + 1);
    }
}
