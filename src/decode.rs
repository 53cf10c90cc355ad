//! Encoding decoders.
//!
//! Turns a classified system instruction into the catalog key it selects.
//! Most sub-fields come from the printed operands; the coprocessor number
//! (AArch32) and the low bit of op0 (AArch64) are not exposed as operands and
//! are read from the raw instruction word.

use crate::catalog::{Coproc64Key, CoprocKey, RegisterKey, SysInsnKey, SysRegKey};
use crate::classify::{InstructionFamily, SystemInstruction};
use crate::error::{AnnotatorError, Result};
use crate::host::{Address, Database};
use crate::psr::{PsrWrite, PstateWrite};
use crate::types::Access;

/// A decoded system register access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAccess {
    pub address: Address,
    pub access: Access,
    pub key: RegisterKey,
    /// General-purpose register on the other side of the move, when the
    /// operand model names one.
    pub gpr: Option<String>,
}

/// What a system instruction decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Access to a catalogued register space.
    Register(RegisterAccess),
    /// AArch32 immediate CPSR write.
    Psr(PsrWrite),
    /// AArch64 immediate PSTATE write.
    Pstate(PstateWrite),
    /// Nothing further to decode.
    Nothing,
}

/// Coprocessor number from bits [11:8] of an A32 coprocessor instruction.
pub fn coproc_number(word: u32) -> u8 {
    ((word >> 8) & 0xF) as u8
}

/// op0 of an A64 `MRS`/`MSR`: always 2 or 3, selected by bit 19.
pub fn sysreg_op0(word: u32) -> u8 {
    2 + ((word >> 19) & 1) as u8
}

/// Parse a `cN` coprocessor register operand.
fn parse_cr(address: Address, index: usize, text: &str) -> Result<u8> {
    let text = text.trim();
    text.strip_prefix('c')
        .or_else(|| text.strip_prefix('C'))
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|&n| n < 16)
        .ok_or_else(|| AnnotatorError::malformed(address, index, text))
}

fn small_value<D: Database + ?Sized>(db: &D, address: Address, index: usize) -> Result<u8> {
    let value = db.operand_value(address, index)?;
    u8::try_from(value).map_err(|_| AnnotatorError::malformed(address, index, value.to_string()))
}

/// Split a grouped operand such as `R0,c1,c0` into its three parts.
fn split3(address: Address, index: usize, text: &str) -> Result<[String; 3]> {
    let parts: Vec<_> = text.split(',').map(|part| part.trim().to_string()).collect();
    <[String; 3]>::try_from(parts).map_err(|_| AnnotatorError::malformed(address, index, text))
}

/// `MRRC`/`MCRR opc1, Rt,Rt2,CRm`.
fn decode_coproc64<D: Database + ?Sized>(db: &D, insn: &SystemInstruction) -> Result<Decoded> {
    let address = insn.address;
    let opc1 = small_value(db, address, 0)?;
    let coproc = coproc_number(db.read_word(address)?);
    let [_, _, crm] = split3(address, 1, &db.operand_text(address, 1)?)?;
    let crm = parse_cr(address, 1, &crm)?;

    Ok(Decoded::Register(RegisterAccess {
        address,
        access: Access::from_mnemonic(&insn.mnemonic),
        key: RegisterKey::Coproc64(Coproc64Key::new(coproc, opc1, crm)),
        gpr: None,
    }))
}

/// `MRC`/`MCR opc1, Rt,CRn,CRm, opc2`.
fn decode_coproc<D: Database + ?Sized>(db: &D, insn: &SystemInstruction) -> Result<Decoded> {
    let address = insn.address;
    let opc1 = small_value(db, address, 0)?;
    let opc2 = small_value(db, address, 2)?;
    let [gpr, crn, crm] = split3(address, 1, &db.operand_text(address, 1)?)?;
    let crn = parse_cr(address, 1, &crn)?;
    let crm = parse_cr(address, 1, &crm)?;
    let coproc = coproc_number(db.read_word(address)?);

    Ok(Decoded::Register(RegisterAccess {
        address,
        access: Access::from_mnemonic(&insn.mnemonic),
        key: RegisterKey::Coproc(CoprocKey::new(coproc, crn, opc1, crm, opc2)),
        gpr: Some(gpr).filter(|gpr| !gpr.is_empty()),
    }))
}

/// op1, CRn, CRm and op2 of an A64 system move, plus the transfer register.
///
/// Reads put the register first (`MRS Xt, op1, CRn, CRm, op2`); writes put
/// it last.
fn system_fields<D: Database + ?Sized>(
    db: &D,
    address: Address,
    access: Access,
) -> Result<(u8, u8, u8, u8, Option<String>)> {
    let (reg_pos, base) = match access {
        Access::Read => (0, 1),
        Access::Write => (4, 0),
    };
    let op1 = small_value(db, address, base)?;
    let crn = parse_cr(address, base + 1, &db.operand_text(address, base + 1)?)?;
    let crm = parse_cr(address, base + 2, &db.operand_text(address, base + 2)?)?;
    let op2 = small_value(db, address, base + 3)?;
    let gpr = db.operand_text(address, reg_pos)?;
    Ok((op1, crn, crm, op2, Some(gpr).filter(|gpr| !gpr.is_empty())))
}

fn decode_system_register<D: Database + ?Sized>(
    db: &D,
    insn: &SystemInstruction,
) -> Result<Decoded> {
    let address = insn.address;
    let access = Access::from_mnemonic(&insn.mnemonic);
    let op0 = sysreg_op0(db.read_word(address)?);
    let (op1, crn, crm, op2, gpr) = system_fields(db, address, access)?;

    Ok(Decoded::Register(RegisterAccess {
        address,
        access,
        key: RegisterKey::SysReg(SysRegKey::new(op0, op1, crn, crm, op2)),
        gpr,
    }))
}

fn decode_system_operation<D: Database + ?Sized>(
    db: &D,
    insn: &SystemInstruction,
) -> Result<Decoded> {
    let address = insn.address;
    let access = if insn.mnemonic == "SYSL" {
        Access::Read
    } else {
        Access::Write
    };
    let (op1, crn, crm, op2, gpr) = system_fields(db, address, access)?;

    Ok(Decoded::Register(RegisterAccess {
        address,
        access,
        key: RegisterKey::SysInsn(SysInsnKey::new(op1, crn, crm, op2)),
        gpr,
    }))
}

fn is_immediate(text: &str) -> bool {
    text.starts_with('#')
}

/// Decode a classified system instruction.
pub fn decode<D: Database + ?Sized>(db: &D, insn: &SystemInstruction) -> Result<Decoded> {
    let address = insn.address;
    match insn.family {
        InstructionFamily::Coproc64 => decode_coproc64(db, insn),
        InstructionFamily::Coproc => decode_coproc(db, insn),
        InstructionFamily::SystemRegister => decode_system_register(db, insn),
        InstructionFamily::SystemOperation => decode_system_operation(db, insn),
        InstructionFamily::PsrWrite => {
            if !is_immediate(&db.operand_text(address, 1)?) {
                return Ok(Decoded::Nothing);
            }
            let value = db.operand_value(address, 1)?;
            Ok(Decoded::Psr(PsrWrite {
                value: (value & 0xFFFF_FFFF) as u32,
            }))
        }
        InstructionFamily::PstateWrite => {
            if !is_immediate(&db.operand_text(address, 0)?)
                || !is_immediate(&db.operand_text(address, 1)?)
            {
                return Ok(Decoded::Nothing);
            }
            Ok(Decoded::Pstate(PstateWrite {
                op: db.operand_value(address, 0)?,
                imm: db.operand_value(address, 1)?,
            }))
        }
        InstructionFamily::Other => Ok(Decoded::Nothing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::listing::Listing;
    use crate::types::ArchMode;

    fn decode_one(db: &Listing, mode: ArchMode) -> Decoded {
        let insn = classify(db, mode, 0x1000).unwrap().unwrap();
        decode(db, &insn).unwrap()
    }

    fn register(decoded: Decoded) -> RegisterAccess {
        match decoded {
            Decoded::Register(access) => access,
            other => panic!("expected a register access, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_word_fields() {
        // MCR p15, 0, R0, c1, c0, 0
        assert_eq!(coproc_number(0xEE01_0F10), 15);
        // MRC p14, 0, R0, c0, c1, 0
        assert_eq!(coproc_number(0xEE10_0E11), 14);
        // MRS X0, VBAR_EL1 has op0 = 3; MSR S2_0_C0_C0_0 has op0 = 2.
        assert_eq!(sysreg_op0(0xD538_C000), 3);
        assert_eq!(sysreg_op0(0xD510_0000), 2);
    }

    #[test]
    fn test_decode_mcr() {
        let db = Listing::builder(ArchMode::Aarch32)
            .insn_word(0x1000, "MCR", &["0", "R0,c1,c0", "0"], 0xEE01_0F10)
            .build();
        let access = register(decode_one(&db, ArchMode::Aarch32));
        assert_eq!(access.access, Access::Write);
        assert_eq!(access.key, RegisterKey::Coproc(CoprocKey::new(15, 1, 0, 0, 0)));
        assert_eq!(access.gpr.as_deref(), Some("R0"));
    }

    #[test]
    fn test_decode_mrrc() {
        let db = Listing::builder(ArchMode::Aarch32)
            .insn_word(0x1000, "MRRC", &["1", "R2, R3, c14"], 0xEC53_2F1E)
            .build();
        let access = register(decode_one(&db, ArchMode::Aarch32));
        assert_eq!(access.access, Access::Read);
        assert_eq!(access.key, RegisterKey::Coproc64(Coproc64Key::new(15, 1, 14)));
        assert_eq!(access.gpr, None);
    }

    #[test]
    fn test_decode_msr_and_mrs_operand_order() {
        let db = Listing::builder(ArchMode::Aarch64)
            .insn_word(0x1000, "MSR", &["#0", "c12", "c0", "#0", "X0"], 0xD518_C000)
            .build();
        let access = register(decode_one(&db, ArchMode::Aarch64));
        assert_eq!(access.access, Access::Write);
        assert_eq!(access.key, RegisterKey::SysReg(SysRegKey::new(3, 0, 12, 0, 0)));
        assert_eq!(access.gpr.as_deref(), Some("X0"));

        let db = Listing::builder(ArchMode::Aarch64)
            .insn_word(0x1000, "MRS", &["X1", "#0", "c1", "c0", "#0"], 0xD538_1001)
            .build();
        let access = register(decode_one(&db, ArchMode::Aarch64));
        assert_eq!(access.access, Access::Read);
        assert_eq!(access.key, RegisterKey::SysReg(SysRegKey::new(3, 0, 1, 0, 0)));
        assert_eq!(access.gpr.as_deref(), Some("X1"));
    }

    #[test]
    fn test_decode_sys() {
        // DC CVAC, X0 printed in its SYS form.
        let db = Listing::builder(ArchMode::Aarch64)
            .insn(0x1000, "SYS", &["#3", "c7", "c10", "#1", "X0"])
            .build();
        let access = register(decode_one(&db, ArchMode::Aarch64));
        assert_eq!(access.access, Access::Write);
        assert_eq!(access.key, RegisterKey::SysInsn(SysInsnKey::new(3, 7, 10, 1)));

        let db = Listing::builder(ArchMode::Aarch64)
            .insn(0x1000, "SYSL", &["X3", "#0", "c7", "c5", "#0"])
            .build();
        let access = register(decode_one(&db, ArchMode::Aarch64));
        assert_eq!(access.access, Access::Read);
        assert_eq!(access.gpr.as_deref(), Some("X3"));
    }

    #[test]
    fn test_decode_psr_immediates() {
        let db = Listing::builder(ArchMode::Aarch32)
            .insn(0x1000, "MSR", &["CPSR_c", "#0xD3"])
            .build();
        assert_eq!(decode_one(&db, ArchMode::Aarch32), Decoded::Psr(PsrWrite { value: 0xD3 }));

        let db = Listing::builder(ArchMode::Aarch32)
            .insn(0x1000, "MSR", &["CPSR_cxsf", "R0"])
            .build();
        assert_eq!(decode_one(&db, ArchMode::Aarch32), Decoded::Nothing);

        let db = Listing::builder(ArchMode::Aarch64)
            .insn(0x1000, "MSR", &["#6", "#0xF"])
            .build();
        assert_eq!(
            decode_one(&db, ArchMode::Aarch64),
            Decoded::Pstate(PstateWrite { op: 6, imm: 0xF })
        );
    }

    #[test]
    fn test_malformed_grouped_operand() {
        let db = Listing::builder(ArchMode::Aarch32)
            .insn_word(0x1000, "MCR", &["0", "R0,c1", "0"], 0xEE01_0F10)
            .build();
        let insn = classify(&db, ArchMode::Aarch32, 0x1000).unwrap().unwrap();
        assert!(matches!(
            decode(&db, &insn),
            Err(AnnotatorError::MalformedOperand { index: 1, .. })
        ));
    }
}
