//! Transformation-stage protocol
//!
//! A stage turns a lazy stream of [`Char`]s into another lazy stream. Streams
//! are pulled one character at a time; nothing runs until the final consumer
//! asks for the next character.
//!
//! # Contract
//!
//! - **Input**: a [`CharStream`] ending in exactly one sentinel.
//! - **Output**: a [`CharStream`] with the same shape. The sentinel is passed
//!   through (its offset may be re-stamped) and nothing follows it.
//! - **Offsets**: every emitted character gets the byte offset of the output
//!   produced so far, so offsets are non-decreasing.
//!
//! Stages hold only immutable configuration and tables. Per-run state (pending
//! slots, lookahead buffers) lives in the iterator returned by
//! [`Stage::apply`], so one stage can serve any number of runs.

mod pipeline;

pub use pipeline::Pipeline;

use crate::chars::{Char, CodePointTuple};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

/// A boxed, pull-based stream of characters
pub type CharStream<'a> = Box<dyn Iterator<Item = Char> + 'a>;

/// One transformation step of a pipeline
pub trait Stage: fmt::Debug + Send + Sync {
    /// Registry name of the stage
    fn name(&self) -> &'static str;

    /// Wrap `input` in this stage's transformation
    fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a>;
}

/// Running output offset of a stage
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct OffsetCounter(usize);

impl OffsetCounter {
    /// Re-emit `c` unchanged at the current offset
    pub(crate) fn pass(&mut self, c: Char) -> Char {
        let out = c.with_offset(self.0);
        self.0 += out.byte_len();
        out
    }

    /// Emit `atom` as a replacement for `c` at the current offset
    pub(crate) fn replace(&mut self, c: Char, atom: CodePointTuple) -> Char {
        let out = c.derive(atom, self.0);
        self.0 += out.byte_len();
        out
    }

    /// Re-stamp the sentinel; the counter does not move
    pub(crate) fn finish(&self, sentinel: Char) -> Char {
        sentinel.with_offset(self.0)
    }
}

/// Context-free, per-atom replacement rule
///
/// Implemented by every stage whose output for a character depends only on
/// that character. Returning an empty slice removes the character.
pub(crate) trait Substitute: Send + Sync {
    fn substitute(&self, atom: CodePointTuple) -> Option<Cow<'_, [CodePointTuple]>>;
}

/// Stream adapter applying a [`Substitute`] rule
pub(crate) struct Substituted<'a, S: ?Sized> {
    input: CharStream<'a>,
    rule: &'a S,
    queue: VecDeque<Char>,
    offset: OffsetCounter,
    finished: bool,
}

impl<'a, S: Substitute + ?Sized> Substituted<'a, S> {
    pub(crate) fn new(input: CharStream<'a>, rule: &'a S) -> Self {
        Self {
            input,
            rule,
            queue: VecDeque::new(),
            offset: OffsetCounter::default(),
            finished: false,
        }
    }
}

impl<S: Substitute + ?Sized> Iterator for Substituted<'_, S> {
    type Item = Char;

    fn next(&mut self) -> Option<Char> {
        if let Some(c) = self.queue.pop_front() {
            return Some(c);
        }
        loop {
            if self.finished {
                return None;
            }
            let c = self.input.next()?;
            if c.is_sentinel() {
                self.finished = true;
                return Some(self.offset.finish(c));
            }

            let Some(replacement) = self.rule.substitute(c.atom()) else {
                return Some(self.offset.pass(c));
            };
            let Some((last, init)) = replacement.split_last() else {
                // Empty replacement: drop the character
                continue;
            };
            for atom in init {
                let out = self.offset.replace(c.clone(), *atom);
                self.queue.push_back(out);
            }
            let out = self.offset.replace(c, *last);
            self.queue.push_back(out);
            return self.queue.pop_front();
        }
    }
}

/// Run `stage` over the characters of `input` and collect the result
#[cfg(test)]
pub(crate) fn run_stage(stage: &dyn Stage, input: &str) -> Vec<Char> {
    let source: CharStream<'_> = Box::new(crate::chars::chars_of(input));
    stage.apply(source).collect()
}

/// Run `stage` over `input` and join the output
#[cfg(test)]
pub(crate) fn run_stage_str(stage: &dyn Stage, input: &str) -> String {
    crate::chars::join(run_stage(stage, input))
}

/// Check the stream contract on an emitted sequence
#[cfg(test)]
pub(crate) fn assert_stream_contract(chars: &[Char]) {
    let (last, body) = chars.split_last().expect("stream must not be empty");
    assert!(last.is_sentinel(), "stream must end with the sentinel");

    let mut expected = 0;
    for c in body {
        assert!(!c.is_sentinel(), "sentinel must come last");
        assert_eq!(c.offset(), expected, "offset of {:?}", c.atom());
        expected += c.byte_len();
    }
    assert_eq!(last.offset(), expected, "sentinel offset");
}
