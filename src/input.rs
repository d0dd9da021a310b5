use std::sync::OnceLock;

use regex::Regex;

use crate::cpu::Cpu;
use crate::error::{MachineError, ParseError};
use crate::program::Program;

fn register_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Register ([A-Z]):\s*(\S+)$").unwrap())
}

fn program_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Program:\s*(.*)$").unwrap())
}

fn parse_int(s: &str) -> Result<i64, ParseError> {
    s.trim().parse().map_err(|_| ParseError::InvalidInteger(s.to_string()))
}

/// Reads the three register lines and the program line of a puzzle input.
pub fn parse(input: &str) -> Result<(Cpu, Program), ParseError> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let mut registers = [0i64; 3];
    for (slot, expected) in registers.iter_mut().zip(['A', 'B', 'C']) {
        let line = lines.next().ok_or(ParseError::MissingRegister(expected))?;
        let caps = register_line()
            .captures(line)
            .filter(|caps| caps[1].starts_with(expected))
            .ok_or_else(|| ParseError::UnexpectedRegister { expected, line: line.to_string() })?;
        *slot = parse_int(&caps[2])?;
    }

    let list = lines
        .next()
        .and_then(|line| program_line().captures(line))
        .map(|caps| caps[1].trim().to_string())
        .ok_or(ParseError::MissingProgram)?;

    let mut words = Vec::new();
    if !list.is_empty() {
        for (index, word) in list.split(',').enumerate() {
            let value = parse_int(word)?;
            if !(0..=7).contains(&value) {
                return Err(MachineError::InvalidWord { index, value }.into());
            }
            words.push(value as u8);
        }
    }

    let [a, b, c] = registers;
    Ok((Cpu::new(a, b, c), Program::new(words)?))
}

#[cfg(test)]
mod tests {

    use super::*;

    const SAMPLE: &str = "\
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

    #[test]
    pub fn parses_sample() {
        let (cpu, prog) = parse(SAMPLE).unwrap();
        assert_eq!(cpu, Cpu::new(729, 0, 0));
        assert_eq!(prog.words(), &[0, 1, 5, 4, 3, 0]);
    }

    #[test]
    pub fn parsed_sample_runs() {
        let (cpu, prog) = parse(SAMPLE).unwrap();
        let output = crate::Machine::new(cpu, &prog).run().unwrap();
        assert_eq!(crate::format_output(&output), "4,6,3,5,6,3,5,2,1,0");
    }

    #[test]
    pub fn rejects_register_out_of_order() {
        let input = "Register B: 1\nRegister A: 2\nRegister C: 3\n\nProgram: 0,1\n";
        assert_eq!(
            parse(input).unwrap_err(),
            ParseError::UnexpectedRegister { expected: 'A', line: "Register B: 1".to_string() }
        );
    }

    #[test]
    pub fn rejects_missing_lines() {
        assert_eq!(
            parse("Register A: 1\nRegister B: 2\n").unwrap_err(),
            ParseError::MissingRegister('C')
        );
        assert_eq!(
            parse("Register A: 1\nRegister B: 2\nRegister C: 3\n").unwrap_err(),
            ParseError::MissingProgram
        );
    }

    #[test]
    pub fn rejects_bad_words() {
        let input = "Register A: x\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1\n";
        assert_eq!(parse(input).unwrap_err(), ParseError::InvalidInteger("x".to_string()));

        let input = "Register A: 0\nRegister B: 0\nRegister C: 0\n\nProgram: 9,1\n";
        assert_eq!(
            parse(input).unwrap_err(),
            ParseError::Program(MachineError::InvalidWord { index: 0, value: 9 })
        );

        let input = "Register A: 0\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1,5\n";
        assert_eq!(parse(input).unwrap_err(), ParseError::Program(MachineError::OddLength(3)));
    }
}
