use std::fmt::Display;

use crate::error::{MachineError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cpu {
    pub a: i64,     // The A register, consumed three bits at a time by most programs
    pub b: i64,
    pub c: i64,
    pub ip: usize,  // Index into the raw program words, advances by 2
}

impl Display for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cpu [ a: {}, b: {}, c: {}, ip: {} ]", self.a, self.b, self.c, self.ip)
    }
}

impl Cpu {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Cpu { a, b, c, ip: 0 }
    }

    pub fn register(&self, register: Register) -> i64 {
        match register {
            Register::A => self.a,
            Register::B => self.b,
            Register::C => self.c,
        }
    }

    pub fn combo(&self, combo: Combo) -> i64 {
        match combo {
            Combo::Value(value) => value as i64,
            Combo::Register(register) => self.register(register),
        }
    }

    /// `A / 2^combo`, truncated toward zero.
    pub fn divide_a(&self, combo: Combo) -> Result<i64> {
        let exponent = self.combo(combo);
        if exponent < 0 {
            return Err(MachineError::NegativeShift(exponent));
        }
        if exponent >= 64 {
            return Ok(0);
        }
        Ok((self.a as i128 / (1i128 << exponent)) as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    B,
    C,
}

/// An operand resolved through the combo table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combo {
    Value(u8),
    Register(Register),
}

impl TryFrom<u8> for Combo {
    type Error = MachineError;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0..=3 => Ok(Self::Value(v)),
            4 => Ok(Self::Register(Register::A)),
            5 => Ok(Self::Register(Register::B)),
            6 => Ok(Self::Register(Register::C)),
            _ => Err(MachineError::InvalidComboOperand(v)),
        }
    }
}

impl Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Combo::Value(value) => write!(f, "{}", value),
            Combo::Register(register) => write!(f, "{:?}", register),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    ADV = 0, // A = A / 2^combo
    BXL = 1, // B = B ^ literal
    BST = 2, // B = combo % 8
    JNZ = 3, // if A != 0 then IP = literal
    BXC = 4, // B = B ^ C
    OUT = 5, // emit combo % 8
    BDV = 6, // B = A / 2^combo
    CDV = 7, // C = A / 2^combo
}

impl TryFrom<u8> for OpCode {
    type Error = MachineError;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::ADV),
            1 => Ok(Self::BXL),
            2 => Ok(Self::BST),
            3 => Ok(Self::JNZ),
            4 => Ok(Self::BXC),
            5 => Ok(Self::OUT),
            6 => Ok(Self::BDV),
            7 => Ok(Self::CDV),
            _ => {
                log::error!("unknown code `{}`", v);
                Err(MachineError::InvalidOpcode(v))
            }
        }
    }
}

/// A decoded (opcode, operand) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Adv(Combo),
    Bxl(u8),
    Bst(Combo),
    Jnz(u8),
    Bxc,
    Out(Combo),
    Bdv(Combo),
    Cdv(Combo),
}

impl Instruction {
    pub fn decode(opcode: u8, operand: u8) -> Result<Self> {
        let instr = match OpCode::try_from(opcode)? {
            OpCode::ADV => Self::Adv(Combo::try_from(operand)?),
            OpCode::BXL => Self::Bxl(operand),
            OpCode::BST => Self::Bst(Combo::try_from(operand)?),
            OpCode::JNZ => Self::Jnz(operand),
            OpCode::BXC => Self::Bxc,
            OpCode::OUT => Self::Out(Combo::try_from(operand)?),
            OpCode::BDV => Self::Bdv(Combo::try_from(operand)?),
            OpCode::CDV => Self::Cdv(Combo::try_from(operand)?),
        };
        Ok(instr)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Adv(combo) => write!(f, "adv {}", combo),
            Instruction::Bxl(literal) => write!(f, "bxl {}", literal),
            Instruction::Bst(combo) => write!(f, "bst {}", combo),
            Instruction::Jnz(literal) => write!(f, "jnz {}", literal),
            Instruction::Bxc => write!(f, "bxc"),
            Instruction::Out(combo) => write!(f, "out {}", combo),
            Instruction::Bdv(combo) => write!(f, "bdv {}", combo),
            Instruction::Cdv(combo) => write!(f, "cdv {}", combo),
        }
    }
}
