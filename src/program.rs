use crate::cpu::Instruction;
use crate::error::{MachineError, Result};

/// A validated instruction stream.
///
/// The raw words are kept alongside the decoded instructions: they are the
/// target the quine search compares output against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    words: Vec<u8>,
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(words: Vec<u8>) -> Result<Self> {
        if let Some(index) = words.iter().position(|&w| w > 7) {
            return Err(MachineError::InvalidWord { index, value: words[index] as i64 });
        }
        if words.len() % 2 != 0 {
            return Err(MachineError::OddLength(words.len()));
        }

        let instructions = words
            .chunks_exact(2)
            .map(|pair| Instruction::decode(pair[0], pair[1]))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { words, instructions })
    }

    pub fn words(&self) -> &[u8] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Instruction starting at word `ip`, or `None` once `ip` is past the end.
    ///
    /// Odd offsets only happen after a jump to an odd literal; the pair found
    /// there is decoded on demand.
    pub fn fetch(&self, ip: usize) -> Option<Result<Instruction>> {
        if ip >= self.words.len() {
            return None;
        }
        if ip % 2 == 0 {
            return Some(Ok(self.instructions[ip / 2]));
        }
        match self.words.get(ip + 1) {
            Some(&operand) => Some(Instruction::decode(self.words[ip], operand)),
            None => Some(Err(MachineError::TruncatedInstruction(ip))),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cpu::Combo;

    #[test]
    pub fn decodes_once() {
        let program = Program::new(vec![0, 1, 5, 4, 3, 0]).unwrap();
        assert_eq!(program.len(), 6);
        assert_eq!(program.fetch(0), Some(Ok(Instruction::Adv(Combo::Value(1)))));
        assert_eq!(program.fetch(4), Some(Ok(Instruction::Jnz(0))));
        assert_eq!(program.fetch(6), None);
    }

    #[test]
    pub fn odd_offsets_decode_on_demand() {
        let program = Program::new(vec![3, 5, 4, 0]).unwrap();
        // (5, 4) read from offset 1 is `out A`
        assert_eq!(
            program.fetch(1),
            Some(Ok(Instruction::Out(Combo::Register(crate::cpu::Register::A))))
        );
        assert_eq!(program.fetch(3), Some(Err(MachineError::TruncatedInstruction(3))));
    }

    #[test]
    pub fn rejects_malformed() {
        assert_eq!(Program::new(vec![0, 1, 5]), Err(MachineError::OddLength(3)));
        assert_eq!(
            Program::new(vec![9, 0]),
            Err(MachineError::InvalidWord { index: 0, value: 9 })
        );
        assert_eq!(Program::new(vec![5, 7]), Err(MachineError::InvalidComboOperand(7)));
    }
}
