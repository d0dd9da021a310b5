//! Digit-reconstruction search for a self-replicating A register.
//!
//! The search only works for programs that consume A three bits at a time
//! (one `adv 3` per loop iteration, one `out` per iteration) so that each
//! octal digit of A controls exactly one output value regardless of the
//! digits above it. That property is assumed, not checked.

use log::{debug, info, warn};

use crate::cpu::Cpu;
use crate::program::Program;
use crate::Machine;

pub struct QuineSolver<'p> {
    program: &'p Program,
    b: i64,
    c: i64,
}

impl<'p> QuineSolver<'p> {
    /// `b` and `c` are the register values every attempt starts from.
    pub fn new(program: &'p Program, b: i64, c: i64) -> Self {
        Self { program, b, c }
    }

    /// Finds an A for which the program prints its own words.
    ///
    /// Digits are tried in ascending order depth-first, so the first hit is
    /// the smallest such A whenever the three-bit property holds.
    pub fn solve(&self) -> Option<i64> {
        let found = self.search(0, 0);
        match found {
            Some(a) => info!("found quine register A = {}", a),
            None => info!("no quine register exists for {} words", self.program.len()),
        }
        found
    }

    /// `a` already reproduces the last `matched` words of the program.
    fn search(&self, a: i64, matched: usize) -> Option<i64> {
        let words = self.program.words();
        if matched == words.len() {
            return Some(a);
        }
        let target = words[words.len() - 1 - matched];

        for n in 0..8 {
            let Some(candidate) = a.checked_mul(8).and_then(|a| a.checked_add(n)) else {
                continue;
            };
            if !self.emits_at(candidate, matched, target) {
                continue;
            }
            debug!("A = {:o} matches {} trailing words", candidate, matched + 1);
            if let Some(found) = self.search(candidate, matched + 1) {
                return Some(found);
            }
        }

        None
    }

    /// Whether a run from `a` emits `target` at position `from_end`,
    /// counted backward from the last emitted value.
    fn emits_at(&self, a: i64, from_end: usize, target: u8) -> bool {
        let output = match Machine::new(Cpu::new(a, self.b, self.c), self.program).run() {
            Ok(output) => output,
            Err(e) => {
                warn!("dropping A = {}: {}", a, e);
                return false;
            }
        };
        output.len() > from_end && output[output.len() - 1 - from_end] == target
    }
}
