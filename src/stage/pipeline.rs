//! Ordered chain of stages

use super::{CharStream, Stage};
use crate::chars::{chars_of, join, Char};

/// Stages applied in order, each pulling from the one before it
#[derive(Debug, Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Append a stage at the end of the chain
    pub fn push(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    /// Wire every stage onto `input`; nothing is evaluated yet
    pub fn apply<'a>(&'a self, input: CharStream<'a>) -> CharStream<'a> {
        self.stages
            .iter()
            .fold(input, |stream, stage| stage.apply(stream))
    }

    /// Transform `input` and collect the characters, sentinel included
    pub fn run_chars(&self, input: &str) -> Vec<Char> {
        self.apply(Box::new(chars_of(input))).collect()
    }

    /// Transform `input` into a string
    pub fn run(&self, input: &str) -> String {
        join(self.apply(Box::new(chars_of(input))))
    }

    /// Registry names of the stages, in order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
