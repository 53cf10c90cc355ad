//! Immediate writes to the program status register.
//!
//! AArch32 `MSR CPSR_c, #imm` switches processor mode and interrupt masks
//! in one go; AArch64 splits the same job into `MSR <pstatefield>, #imm`.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// CPSR mask and state bits settable by an immediate `MSR`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CpsrFlags: u32 {
        /// Big-endian data.
        const E = 1 << 9;
        /// Asynchronous abort mask.
        const A = 1 << 8;
        /// IRQ mask.
        const I = 1 << 7;
        /// FIQ mask.
        const F = 1 << 6;
        /// Thumb state.
        const T = 1 << 5;
    }
}

bitflags! {
    /// PSTATE.DAIF bits as encoded in the `DAIFSet`/`DAIFClr` immediate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DaifFlags: u8 {
        const D = 1 << 3;
        const A = 1 << 2;
        const I = 1 << 1;
        const F = 1 << 0;
    }
}

fn render<F: bitflags::Flags + Copy>(flags: F, letters: &[(F, char)]) -> String {
    letters
        .iter()
        .map(|&(flag, letter)| if flags.contains(flag) { letter } else { '-' })
        .collect()
}

/// Name of an AArch32 processor mode from CPSR.M[4:0].
pub fn mode_name(mode: u32) -> &'static str {
    match mode & 0b11111 {
        0b10000 => "User",
        0b10001 => "FIQ",
        0b10010 => "IRQ",
        0b10011 => "Supervisor",
        0b10110 => "Monitor",
        0b10111 => "Abort",
        0b11011 => "Undefined",
        0b11111 => "System",
        _ => "Unknown",
    }
}

/// An AArch32 `MSR` of an immediate into the CPSR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsrWrite {
    pub value: u32,
}

impl PsrWrite {
    pub fn flags(&self) -> CpsrFlags {
        CpsrFlags::from_bits_truncate(self.value)
    }

    pub fn mode(&self) -> &'static str {
        mode_name(self.value)
    }
}

impl fmt::Display for PsrWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = render(
            self.flags(),
            &[
                (CpsrFlags::E, 'E'),
                (CpsrFlags::A, 'A'),
                (CpsrFlags::I, 'I'),
                (CpsrFlags::F, 'F'),
                (CpsrFlags::T, 'T'),
            ],
        );
        write!(f, "Set CPSR [{}], Mode: {}", flags, self.mode())
    }
}

/// PSTATE field selected by op1:op2 of an immediate `MSR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PstateField {
    SpSel,
    DaifSet,
    DaifClr,
}

impl PstateField {
    pub fn from_op(op: u64) -> Option<Self> {
        match op {
            0b101 => Some(PstateField::SpSel),
            0b110 => Some(PstateField::DaifSet),
            0b111 => Some(PstateField::DaifClr),
            _ => None,
        }
    }
}

/// An AArch64 `MSR <pstatefield>, #imm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PstateWrite {
    pub op: u64,
    pub imm: u64,
}

impl PstateWrite {
    /// Comment for the write, if the field is one we describe.
    pub fn comment(&self) -> Option<String> {
        let field = PstateField::from_op(self.op)?;
        let daif = || {
            render(
                DaifFlags::from_bits_truncate((self.imm & 0xF) as u8),
                &[
                    (DaifFlags::D, 'D'),
                    (DaifFlags::A, 'A'),
                    (DaifFlags::I, 'I'),
                    (DaifFlags::F, 'F'),
                ],
            )
        };
        Some(match field {
            PstateField::SpSel => {
                let sp = if self.imm & 1 == 1 { 'x' } else { '0' };
                format!("Select PSTATE.SP = SP_EL{}", sp)
            }
            PstateField::DaifSet => format!("Set PSTATE.DAIF [{}]", daif()),
            PstateField::DaifClr => format!("Clr PSTATE.DAIF [{}]", daif()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cpsr_write() {
        // MSR CPSR_c, #0xD3: SVC mode, IRQ and FIQ masked.
        let write = PsrWrite { value: 0xD3 };
        assert_eq!(write.to_string(), "Set CPSR [--IF-], Mode: Supervisor");

        let write = PsrWrite { value: 0x1F | 1 << 9 | 1 << 5 };
        assert_eq!(write.to_string(), "Set CPSR [E---T], Mode: System");

        assert_eq!(PsrWrite { value: 0x15 }.mode(), "Unknown");
    }

    #[test]
    fn test_pstate_write() {
        let spsel = PstateWrite { op: 0b101, imm: 1 };
        assert_eq!(spsel.comment().unwrap(), "Select PSTATE.SP = SP_ELx");
        let spsel = PstateWrite { op: 0b101, imm: 0 };
        assert_eq!(spsel.comment().unwrap(), "Select PSTATE.SP = SP_EL0");

        let mask = PstateWrite { op: 0b110, imm: 0xF };
        assert_eq!(mask.comment().unwrap(), "Set PSTATE.DAIF [DAIF]");
        let unmask = PstateWrite { op: 0b111, imm: 0b0010 };
        assert_eq!(unmask.comment().unwrap(), "Clr PSTATE.DAIF [--I-]");

        assert!(PstateWrite { op: 0b011, imm: 1 }.comment().is_none());
    }
}
