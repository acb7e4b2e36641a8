//! Instruction data
//!
//! Every opcode byte indexes straight into `INSN_TABLE`. Unassigned
//! opcodes (undocumented ones, and BRK/RTI since interrupts are not
//! emulated) hold `None` and are rejected by the CPU.

use core::fmt;

/// Addressing modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressMode {
    /// No operand
    Implied,
    /// Operates on A
    Accumulator,
    /// `#nn`
    Immediate,
    /// `nn`
    Zeropage,
    /// `nn,X`, wraps within the zero page
    ZeropageX,
    /// `nn,Y`, wraps within the zero page
    ZeropageY,
    /// `nnnn`
    Absolute,
    /// `nnnn,X`
    AbsoluteX,
    /// `nnnn,Y`
    AbsoluteY,
    /// `(nnnn)`, JMP only
    Indirect,
    /// `(nn,X)`
    Xindirect,
    /// `(nn),Y`
    IndirectY,
    /// Signed 8-bit displacement, branches only
    Relative,
}

impl AddressMode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(&self) -> u16 {
        match self {
            AddressMode::Implied | AddressMode::Accumulator => 0,
            AddressMode::Immediate
            | AddressMode::Zeropage
            | AddressMode::ZeropageX
            | AddressMode::ZeropageY
            | AddressMode::Xindirect
            | AddressMode::IndirectY
            | AddressMode::Relative => 1,
            AddressMode::Absolute
            | AddressMode::AbsoluteX
            | AddressMode::AbsoluteY
            | AddressMode::Indirect => 2,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            AddressMode::Implied => "",
            AddressMode::Accumulator => " A",
            AddressMode::Immediate => " imm",
            AddressMode::Zeropage => " zpg",
            AddressMode::ZeropageX => " zpg,X",
            AddressMode::ZeropageY => " zpg,Y",
            AddressMode::Absolute => " abs",
            AddressMode::AbsoluteX => " abs,X",
            AddressMode::AbsoluteY => " abs,Y",
            AddressMode::Indirect => " ind",
            AddressMode::Xindirect => " X,ind",
            AddressMode::IndirectY => " ind,Y",
            AddressMode::Relative => " rel",
        }
    }
}

/// Instruction representation.
/// Instructions taking an operand carry their addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insn {
    ADC(AddressMode),
    AND(AddressMode),
    ASL(AddressMode),
    BCC(AddressMode),
    BCS(AddressMode),
    BEQ(AddressMode),
    BIT(AddressMode),
    BMI(AddressMode),
    BNE(AddressMode),
    BPL(AddressMode),
    BVC(AddressMode),
    BVS(AddressMode),
    CLC,
    CLD,
    CLI,
    CLV,
    CMP(AddressMode),
    CPX(AddressMode),
    CPY(AddressMode),
    DEC(AddressMode),
    DEX,
    DEY,
    EOR(AddressMode),
    INC(AddressMode),
    INX,
    INY,
    JMP(AddressMode),
    JSR(AddressMode),
    LDA(AddressMode),
    LDX(AddressMode),
    LDY(AddressMode),
    LSR(AddressMode),
    NOP,
    ORA(AddressMode),
    PHA,
    PHP,
    PLA,
    PLP,
    ROL(AddressMode),
    ROR(AddressMode),
    RTS,
    SBC(AddressMode),
    SEC,
    SED,
    SEI,
    STA(AddressMode),
    STX(AddressMode),
    STY(AddressMode),
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
}

impl Insn {
    pub fn mode(&self) -> AddressMode {
        match *self {
            Insn::ADC(m)
            | Insn::AND(m)
            | Insn::ASL(m)
            | Insn::BCC(m)
            | Insn::BCS(m)
            | Insn::BEQ(m)
            | Insn::BIT(m)
            | Insn::BMI(m)
            | Insn::BNE(m)
            | Insn::BPL(m)
            | Insn::BVC(m)
            | Insn::BVS(m)
            | Insn::CMP(m)
            | Insn::CPX(m)
            | Insn::CPY(m)
            | Insn::DEC(m)
            | Insn::EOR(m)
            | Insn::INC(m)
            | Insn::JMP(m)
            | Insn::JSR(m)
            | Insn::LDA(m)
            | Insn::LDX(m)
            | Insn::LDY(m)
            | Insn::LSR(m)
            | Insn::ORA(m)
            | Insn::ROL(m)
            | Insn::ROR(m)
            | Insn::SBC(m)
            | Insn::STA(m)
            | Insn::STX(m)
            | Insn::STY(m) => m,
            _ => AddressMode::Implied,
        }
    }

    /// Total length in bytes, opcode included.
    pub fn size(&self) -> u16 {
        1 + self.mode().operand_len()
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Insn::ADC(_) => "ADC",
            Insn::AND(_) => "AND",
            Insn::ASL(_) => "ASL",
            Insn::BCC(_) => "BCC",
            Insn::BCS(_) => "BCS",
            Insn::BEQ(_) => "BEQ",
            Insn::BIT(_) => "BIT",
            Insn::BMI(_) => "BMI",
            Insn::BNE(_) => "BNE",
            Insn::BPL(_) => "BPL",
            Insn::BVC(_) => "BVC",
            Insn::BVS(_) => "BVS",
            Insn::CLC => "CLC",
            Insn::CLD => "CLD",
            Insn::CLI => "CLI",
            Insn::CLV => "CLV",
            Insn::CMP(_) => "CMP",
            Insn::CPX(_) => "CPX",
            Insn::CPY(_) => "CPY",
            Insn::DEC(_) => "DEC",
            Insn::DEX => "DEX",
            Insn::DEY => "DEY",
            Insn::EOR(_) => "EOR",
            Insn::INC(_) => "INC",
            Insn::INX => "INX",
            Insn::INY => "INY",
            Insn::JMP(_) => "JMP",
            Insn::JSR(_) => "JSR",
            Insn::LDA(_) => "LDA",
            Insn::LDX(_) => "LDX",
            Insn::LDY(_) => "LDY",
            Insn::LSR(_) => "LSR",
            Insn::NOP => "NOP",
            Insn::ORA(_) => "ORA",
            Insn::PHA => "PHA",
            Insn::PHP => "PHP",
            Insn::PLA => "PLA",
            Insn::PLP => "PLP",
            Insn::ROL(_) => "ROL",
            Insn::ROR(_) => "ROR",
            Insn::RTS => "RTS",
            Insn::SBC(_) => "SBC",
            Insn::SEC => "SEC",
            Insn::SED => "SED",
            Insn::SEI => "SEI",
            Insn::STA(_) => "STA",
            Insn::STX(_) => "STX",
            Insn::STY(_) => "STY",
            Insn::TAX => "TAX",
            Insn::TAY => "TAY",
            Insn::TSX => "TSX",
            Insn::TXA => "TXA",
            Insn::TXS => "TXS",
            Insn::TYA => "TYA",
        }
    }
}

impl fmt::Display for Insn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mnemonic(), self.mode().suffix())
    }
}

/// Opcode to instruction.
const INSN_TABLE: [Option<Insn>; 256] = [
    None,                                       // 0x00 BRK, interrupts are not emulated
    Some(Insn::ORA(AddressMode::Xindirect)),    // 0x01
    None,                                       // 0x02
    None,                                       // 0x03
    None,                                       // 0x04
    Some(Insn::ORA(AddressMode::Zeropage)),     // 0x05
    Some(Insn::ASL(AddressMode::Zeropage)),     // 0x06
    None,                                       // 0x07
    Some(Insn::PHP),                            // 0x08
    Some(Insn::ORA(AddressMode::Immediate)),    // 0x09
    Some(Insn::ASL(AddressMode::Accumulator)),  // 0x0a
    None,                                       // 0x0b
    None,                                       // 0x0c
    Some(Insn::ORA(AddressMode::Absolute)),     // 0x0d
    Some(Insn::ASL(AddressMode::Absolute)),     // 0x0e
    None,                                       // 0x0f
    Some(Insn::BPL(AddressMode::Relative)),     // 0x10
    Some(Insn::ORA(AddressMode::IndirectY)),    // 0x11
    None,                                       // 0x12
    None,                                       // 0x13
    None,                                       // 0x14
    Some(Insn::ORA(AddressMode::ZeropageX)),    // 0x15
    Some(Insn::ASL(AddressMode::ZeropageX)),    // 0x16
    None,                                       // 0x17
    Some(Insn::CLC),                            // 0x18
    Some(Insn::ORA(AddressMode::AbsoluteY)),    // 0x19
    None,                                       // 0x1a
    None,                                       // 0x1b
    None,                                       // 0x1c
    Some(Insn::ORA(AddressMode::AbsoluteX)),    // 0x1d
    Some(Insn::ASL(AddressMode::AbsoluteX)),    // 0x1e
    None,                                       // 0x1f
    Some(Insn::JSR(AddressMode::Absolute)),     // 0x20
    Some(Insn::AND(AddressMode::Xindirect)),    // 0x21
    None,                                       // 0x22
    None,                                       // 0x23
    Some(Insn::BIT(AddressMode::Zeropage)),     // 0x24
    Some(Insn::AND(AddressMode::Zeropage)),     // 0x25
    Some(Insn::ROL(AddressMode::Zeropage)),     // 0x26
    None,                                       // 0x27
    Some(Insn::PLP),                            // 0x28
    Some(Insn::AND(AddressMode::Immediate)),    // 0x29
    Some(Insn::ROL(AddressMode::Accumulator)),  // 0x2a
    None,                                       // 0x2b
    Some(Insn::BIT(AddressMode::Absolute)),     // 0x2c
    Some(Insn::AND(AddressMode::Absolute)),     // 0x2d
    Some(Insn::ROL(AddressMode::Absolute)),     // 0x2e
    None,                                       // 0x2f
    Some(Insn::BMI(AddressMode::Relative)),     // 0x30
    Some(Insn::AND(AddressMode::IndirectY)),    // 0x31
    None,                                       // 0x32
    None,                                       // 0x33
    None,                                       // 0x34
    Some(Insn::AND(AddressMode::ZeropageX)),    // 0x35
    Some(Insn::ROL(AddressMode::ZeropageX)),    // 0x36
    None,                                       // 0x37
    Some(Insn::SEC),                            // 0x38
    Some(Insn::AND(AddressMode::AbsoluteY)),    // 0x39
    None,                                       // 0x3a
    None,                                       // 0x3b
    None,                                       // 0x3c
    Some(Insn::AND(AddressMode::AbsoluteX)),    // 0x3d
    Some(Insn::ROL(AddressMode::AbsoluteX)),    // 0x3e
    None,                                       // 0x3f
    None,                                       // 0x40 RTI, interrupts are not emulated
    Some(Insn::EOR(AddressMode::Xindirect)),    // 0x41
    None,                                       // 0x42
    None,                                       // 0x43
    None,                                       // 0x44
    Some(Insn::EOR(AddressMode::Zeropage)),     // 0x45
    Some(Insn::LSR(AddressMode::Zeropage)),     // 0x46
    None,                                       // 0x47
    Some(Insn::PHA),                            // 0x48
    Some(Insn::EOR(AddressMode::Immediate)),    // 0x49
    Some(Insn::LSR(AddressMode::Accumulator)),  // 0x4a
    None,                                       // 0x4b
    Some(Insn::JMP(AddressMode::Absolute)),     // 0x4c
    Some(Insn::EOR(AddressMode::Absolute)),     // 0x4d
    Some(Insn::LSR(AddressMode::Absolute)),     // 0x4e
    None,                                       // 0x4f
    Some(Insn::BVC(AddressMode::Relative)),     // 0x50
    Some(Insn::EOR(AddressMode::IndirectY)),    // 0x51
    None,                                       // 0x52
    None,                                       // 0x53
    None,                                       // 0x54
    Some(Insn::EOR(AddressMode::ZeropageX)),    // 0x55
    Some(Insn::LSR(AddressMode::ZeropageX)),    // 0x56
    None,                                       // 0x57
    Some(Insn::CLI),                            // 0x58
    Some(Insn::EOR(AddressMode::AbsoluteY)),    // 0x59
    None,                                       // 0x5a
    None,                                       // 0x5b
    None,                                       // 0x5c
    Some(Insn::EOR(AddressMode::AbsoluteX)),    // 0x5d
    Some(Insn::LSR(AddressMode::AbsoluteX)),    // 0x5e
    None,                                       // 0x5f
    Some(Insn::RTS),                            // 0x60
    Some(Insn::ADC(AddressMode::Xindirect)),    // 0x61
    None,                                       // 0x62
    None,                                       // 0x63
    None,                                       // 0x64
    Some(Insn::ADC(AddressMode::Zeropage)),     // 0x65
    Some(Insn::ROR(AddressMode::Zeropage)),     // 0x66
    None,                                       // 0x67
    Some(Insn::PLA),                            // 0x68
    Some(Insn::ADC(AddressMode::Immediate)),    // 0x69
    Some(Insn::ROR(AddressMode::Accumulator)),  // 0x6a
    None,                                       // 0x6b
    Some(Insn::JMP(AddressMode::Indirect)),     // 0x6c
    Some(Insn::ADC(AddressMode::Absolute)),     // 0x6d
    Some(Insn::ROR(AddressMode::Absolute)),     // 0x6e
    None,                                       // 0x6f
    Some(Insn::BVS(AddressMode::Relative)),     // 0x70
    Some(Insn::ADC(AddressMode::IndirectY)),    // 0x71
    None,                                       // 0x72
    None,                                       // 0x73
    None,                                       // 0x74
    Some(Insn::ADC(AddressMode::ZeropageX)),    // 0x75
    Some(Insn::ROR(AddressMode::ZeropageX)),    // 0x76
    None,                                       // 0x77
    Some(Insn::SEI),                            // 0x78
    Some(Insn::ADC(AddressMode::AbsoluteY)),    // 0x79
    None,                                       // 0x7a
    None,                                       // 0x7b
    None,                                       // 0x7c
    Some(Insn::ADC(AddressMode::AbsoluteX)),    // 0x7d
    Some(Insn::ROR(AddressMode::AbsoluteX)),    // 0x7e
    None,                                       // 0x7f
    None,                                       // 0x80
    Some(Insn::STA(AddressMode::Xindirect)),    // 0x81
    None,                                       // 0x82
    None,                                       // 0x83
    Some(Insn::STY(AddressMode::Zeropage)),     // 0x84
    Some(Insn::STA(AddressMode::Zeropage)),     // 0x85
    Some(Insn::STX(AddressMode::Zeropage)),     // 0x86
    None,                                       // 0x87
    Some(Insn::DEY),                            // 0x88
    None,                                       // 0x89
    Some(Insn::TXA),                            // 0x8a
    None,                                       // 0x8b
    Some(Insn::STY(AddressMode::Absolute)),     // 0x8c
    Some(Insn::STA(AddressMode::Absolute)),     // 0x8d
    Some(Insn::STX(AddressMode::Absolute)),     // 0x8e
    None,                                       // 0x8f
    Some(Insn::BCC(AddressMode::Relative)),     // 0x90
    Some(Insn::STA(AddressMode::IndirectY)),    // 0x91
    None,                                       // 0x92
    None,                                       // 0x93
    Some(Insn::STY(AddressMode::ZeropageX)),    // 0x94
    Some(Insn::STA(AddressMode::ZeropageX)),    // 0x95
    Some(Insn::STX(AddressMode::ZeropageY)),    // 0x96
    None,                                       // 0x97
    Some(Insn::TYA),                            // 0x98
    Some(Insn::STA(AddressMode::AbsoluteY)),    // 0x99
    Some(Insn::TXS),                            // 0x9a
    None,                                       // 0x9b
    None,                                       // 0x9c
    Some(Insn::STA(AddressMode::AbsoluteX)),    // 0x9d
    None,                                       // 0x9e
    None,                                       // 0x9f
    Some(Insn::LDY(AddressMode::Immediate)),    // 0xa0
    Some(Insn::LDA(AddressMode::Xindirect)),    // 0xa1
    Some(Insn::LDX(AddressMode::Immediate)),    // 0xa2
    None,                                       // 0xa3
    Some(Insn::LDY(AddressMode::Zeropage)),     // 0xa4
    Some(Insn::LDA(AddressMode::Zeropage)),     // 0xa5
    Some(Insn::LDX(AddressMode::Zeropage)),     // 0xa6
    None,                                       // 0xa7
    Some(Insn::TAY),                            // 0xa8
    Some(Insn::LDA(AddressMode::Immediate)),    // 0xa9
    Some(Insn::TAX),                            // 0xaa
    None,                                       // 0xab
    Some(Insn::LDY(AddressMode::Absolute)),     // 0xac
    Some(Insn::LDA(AddressMode::Absolute)),     // 0xad
    Some(Insn::LDX(AddressMode::Absolute)),     // 0xae
    None,                                       // 0xaf
    Some(Insn::BCS(AddressMode::Relative)),     // 0xb0
    Some(Insn::LDA(AddressMode::IndirectY)),    // 0xb1
    None,                                       // 0xb2
    None,                                       // 0xb3
    Some(Insn::LDY(AddressMode::ZeropageX)),    // 0xb4
    Some(Insn::LDA(AddressMode::ZeropageX)),    // 0xb5
    Some(Insn::LDX(AddressMode::ZeropageY)),    // 0xb6
    None,                                       // 0xb7
    Some(Insn::CLV),                            // 0xb8
    Some(Insn::LDA(AddressMode::AbsoluteY)),    // 0xb9
    Some(Insn::TSX),                            // 0xba
    None,                                       // 0xbb
    Some(Insn::LDY(AddressMode::AbsoluteX)),    // 0xbc
    Some(Insn::LDA(AddressMode::AbsoluteX)),    // 0xbd
    Some(Insn::LDX(AddressMode::AbsoluteY)),    // 0xbe
    None,                                       // 0xbf
    Some(Insn::CPY(AddressMode::Immediate)),    // 0xc0
    Some(Insn::CMP(AddressMode::Xindirect)),    // 0xc1
    None,                                       // 0xc2
    None,                                       // 0xc3
    Some(Insn::CPY(AddressMode::Zeropage)),     // 0xc4
    Some(Insn::CMP(AddressMode::Zeropage)),     // 0xc5
    Some(Insn::DEC(AddressMode::Zeropage)),     // 0xc6
    None,                                       // 0xc7
    Some(Insn::INY),                            // 0xc8
    Some(Insn::CMP(AddressMode::Immediate)),    // 0xc9
    Some(Insn::DEX),                            // 0xca
    None,                                       // 0xcb
    Some(Insn::CPY(AddressMode::Absolute)),     // 0xcc
    Some(Insn::CMP(AddressMode::Absolute)),     // 0xcd
    Some(Insn::DEC(AddressMode::Absolute)),     // 0xce
    None,                                       // 0xcf
    Some(Insn::BNE(AddressMode::Relative)),     // 0xd0
    Some(Insn::CMP(AddressMode::IndirectY)),    // 0xd1
    None,                                       // 0xd2
    None,                                       // 0xd3
    None,                                       // 0xd4
    Some(Insn::CMP(AddressMode::ZeropageX)),    // 0xd5
    Some(Insn::DEC(AddressMode::ZeropageX)),    // 0xd6
    None,                                       // 0xd7
    Some(Insn::CLD),                            // 0xd8
    Some(Insn::CMP(AddressMode::AbsoluteY)),    // 0xd9
    None,                                       // 0xda
    None,                                       // 0xdb
    None,                                       // 0xdc
    Some(Insn::CMP(AddressMode::AbsoluteX)),    // 0xdd
    Some(Insn::DEC(AddressMode::AbsoluteX)),    // 0xde
    None,                                       // 0xdf
    Some(Insn::CPX(AddressMode::Immediate)),    // 0xe0
    Some(Insn::SBC(AddressMode::Xindirect)),    // 0xe1
    None,                                       // 0xe2
    None,                                       // 0xe3
    Some(Insn::CPX(AddressMode::Zeropage)),     // 0xe4
    Some(Insn::SBC(AddressMode::Zeropage)),     // 0xe5
    Some(Insn::INC(AddressMode::Zeropage)),     // 0xe6
    None,                                       // 0xe7
    Some(Insn::INX),                            // 0xe8
    Some(Insn::SBC(AddressMode::Immediate)),    // 0xe9
    Some(Insn::NOP),                            // 0xea
    None,                                       // 0xeb
    Some(Insn::CPX(AddressMode::Absolute)),     // 0xec
    Some(Insn::SBC(AddressMode::Absolute)),     // 0xed
    Some(Insn::INC(AddressMode::Absolute)),     // 0xee
    None,                                       // 0xef
    Some(Insn::BEQ(AddressMode::Relative)),     // 0xf0
    Some(Insn::SBC(AddressMode::IndirectY)),    // 0xf1
    None,                                       // 0xf2
    None,                                       // 0xf3
    None,                                       // 0xf4
    Some(Insn::SBC(AddressMode::ZeropageX)),    // 0xf5
    Some(Insn::INC(AddressMode::ZeropageX)),    // 0xf6
    None,                                       // 0xf7
    Some(Insn::SED),                            // 0xf8
    Some(Insn::SBC(AddressMode::AbsoluteY)),    // 0xf9
    None,                                       // 0xfa
    None,                                       // 0xfb
    None,                                       // 0xfc
    Some(Insn::SBC(AddressMode::AbsoluteX)),    // 0xfd
    Some(Insn::INC(AddressMode::AbsoluteX)),    // 0xfe
    None,                                       // 0xff
];

/// Number of documented opcodes, less BRK and RTI.
pub const VALID_OPCODE_COUNT: usize = 149;

const fn count_valid_opcodes() -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < INSN_TABLE.len() {
        if INSN_TABLE[i].is_some() {
            count += 1;
        }
        i += 1;
    }
    count
}

const _: () = assert!(count_valid_opcodes() == VALID_OPCODE_COUNT);

#[inline]
pub fn decode_insn(opcode: u8) -> Option<Insn> {
    INSN_TABLE[opcode as usize]
}

/// Reverse lookup, `None` if no opcode encodes `insn`.
pub fn encode_insn(insn: Insn) -> Option<u8> {
    INSN_TABLE
        .iter()
        .position(|entry| *entry == Some(insn))
        .map(|opcode| opcode as u8)
}

pub fn get_opcode_string(opcode: u8) -> &'static str {
    match decode_insn(opcode) {
        Some(insn) => insn.mnemonic(),
        None => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_round_trips() {
        for opcode in 0..=u8::MAX {
            if let Some(insn) = decode_insn(opcode) {
                assert_eq!(encode_insn(insn), Some(opcode), "{insn}");
            }
        }
    }

    #[test]
    fn interrupt_opcodes_are_invalid() {
        assert_eq!(decode_insn(0x00), None);
        assert_eq!(decode_insn(0x40), None);
        assert_eq!(get_opcode_string(0x00), "???");
    }

    #[test]
    fn operand_modes_match_mnemonics() {
        for opcode in 0..=u8::MAX {
            let Some(insn) = decode_insn(opcode) else {
                continue;
            };

            match insn {
                Insn::BCC(m)
                | Insn::BCS(m)
                | Insn::BEQ(m)
                | Insn::BMI(m)
                | Insn::BNE(m)
                | Insn::BPL(m)
                | Insn::BVC(m)
                | Insn::BVS(m) => assert_eq!(m, AddressMode::Relative),
                Insn::JMP(m) => {
                    assert!(matches!(m, AddressMode::Absolute | AddressMode::Indirect))
                }
                Insn::STA(m) | Insn::STX(m) | Insn::STY(m) => {
                    assert!(!matches!(
                        m,
                        AddressMode::Immediate | AddressMode::Implied | AddressMode::Accumulator
                    ))
                }
                _ => assert_ne!(insn.mode(), AddressMode::Relative, "{insn}"),
            }
        }
    }

    #[test]
    fn lengths() {
        assert_eq!(Insn::NOP.size(), 1);
        assert_eq!(Insn::ASL(AddressMode::Accumulator).size(), 1);
        assert_eq!(Insn::LDA(AddressMode::Immediate).size(), 2);
        assert_eq!(Insn::BNE(AddressMode::Relative).size(), 2);
        assert_eq!(Insn::JMP(AddressMode::Indirect).size(), 3);
        assert_eq!(Insn::STA(AddressMode::AbsoluteX).size(), 3);
    }
}
