pub mod cpu;
pub mod error;
pub mod input;
pub mod program;
pub mod solver;

use cpu::{Cpu, Instruction};
use error::Result;
use itertools::Itertools;
use log::{info, trace};
use program::Program;

/// A single execution of a program.
///
/// A machine is built fresh for every run and consumed by it. Termination is
/// the caller's concern: a program that keeps jumping while A is non-zero and
/// never shrinks A will run forever.
pub struct Machine<'p> {
    cpu: Cpu,
    program: &'p Program,
    output: Vec<u8>,
}

impl<'p> Machine<'p> {
    pub fn new(cpu: Cpu, program: &'p Program) -> Self {
        Self {
            cpu,
            program,
            output: Vec::new(),
        }
    }

    fn debug_state(&self, instr: Instruction) {
        trace!(
            "State: IP: {:#04x}, A: {}, B: {}, C: {} | {}",
            self.cpu.ip, self.cpu.a, self.cpu.b, self.cpu.c, instr
        );
    }

    /// Executes one instruction. Returns `false` once the machine has halted.
    pub fn step(&mut self) -> Result<bool> {
        let instr = match self.program.fetch(self.cpu.ip) {
            Some(fetched) => fetched?,
            None => return Ok(false),
        };

        self.debug_state(instr);

        match instr {
            Instruction::Adv(combo) => {
                self.cpu.a = self.cpu.divide_a(combo)?;
                self.cpu.ip += 2;
            }
            Instruction::Bxl(literal) => {
                self.cpu.b ^= literal as i64;
                self.cpu.ip += 2;
            }
            Instruction::Bst(combo) => {
                self.cpu.b = self.cpu.combo(combo).rem_euclid(8);
                self.cpu.ip += 2;
            }
            Instruction::Jnz(literal) => {
                if self.cpu.a != 0 {
                    self.cpu.ip = literal as usize;
                } else {
                    self.cpu.ip += 2;
                }
            }
            Instruction::Bxc => {
                self.cpu.b ^= self.cpu.c;
                self.cpu.ip += 2;
            }
            Instruction::Out(combo) => {
                self.output.push(self.cpu.combo(combo).rem_euclid(8) as u8);
                self.cpu.ip += 2;
            }
            Instruction::Bdv(combo) => {
                self.cpu.b = self.cpu.divide_a(combo)?;
                self.cpu.ip += 2;
            }
            Instruction::Cdv(combo) => {
                self.cpu.c = self.cpu.divide_a(combo)?;
                self.cpu.ip += 2;
            }
        }

        Ok(true)
    }

    /// Runs until the instruction pointer leaves the program, returning the
    /// final register state along with the output.
    pub fn finish(mut self) -> Result<(Cpu, Vec<u8>)> {
        while self.step()? {}
        info!("{} emitted {} values", self.cpu, self.output.len());
        Ok((self.cpu, self.output))
    }

    pub fn run(self) -> Result<Vec<u8>> {
        self.finish().map(|(_, output)| output)
    }
}

/// Joins emitted values with commas.
pub fn format_output(output: &[u8]) -> String {
    output.iter().join(",")
}
