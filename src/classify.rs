//! System instruction classification.
//!
//! Decides from the mnemonic (and, for exception returns, the printed
//! operands) whether a head is a system instruction, and which decoder
//! family it belongs to in the current execution state.

use crate::error::Result;
use crate::host::{Address, Database};
use crate::types::ArchMode;

/// Cryptographic extension mnemonics.
#[rustfmt::skip]
pub const CRYPTO_MNEMONICS: &[&str] = &[
    "AESE", "AESMC", "AESD",
    "BCAX", "EOR3", "RAX1", "XAR",
    "SHA1C", "SHA1H", "SHA1M", "SHA1P", "SHA1SU0", "SHA1SU1",
    "SHA256H2", "SHA256H", "SHA256SU0", "SHA256SU1",
    "SHA512H2", "SHA512H", "SHA512SU0", "SHA512SU1",
    "SM3PARTW1", "SM3PARTW2", "SM3SS1", "SM3TT1A", "SM3TT1B", "SM3TT2A", "SM3TT2B",
    "SM4E", "SM4EKEY",
];

/// Exception-generating calls into a more privileged level.
pub const SYSTEM_CALL_MNEMONICS: &[&str] = &["SVC", "SWI", "SMC", "SMI", "HVC"];

/// Privileged and system-level mnemonics, excluding calls and crypto.
#[rustfmt::skip]
pub const SYSTEM_MNEMONICS: &[&str] = &[
    // PSR access
    "MSR", "MRS", "CPSIE", "CPSID",
    // Coprocessor access
    "MRC", "MRC2", "MRRC", "MRRC2", "MCR", "MCR2", "MCRR", "MCRR2",
    "LDC", "LDC2", "STC", "STC2", "CDP", "CDP2",
    // AArch64 system
    "SYS", "SYSL", "IC", "DC", "AT", "TLBI",
    // Barriers
    "DSB", "DMB", "ISB", "CLREX",
    "SRS", "VMRS", "VMSR", "DBG", "DCPS1", "DCPS2", "DCPS3", "DRPS",
    // Hints
    "YIELD", "WFE", "WFI", "SEV", "SEVL", "HINT",
    "BKPT", "BRK",
    "ENTERX", "LEAVEX", "BXJ",
    "RFE", "ERET",
    // Pointer authentication
    "PACDA", "PACDZA", "PACDB", "PACDZB", "PACGA",
    "PACIA", "PACIA1716", "PACIASP", "PACIAZ", "PACIZA",
    "PACIB", "PACIB1716", "PACIBSP", "PACIBZ", "PACIZB",
    "AUTDA", "AUTDZA", "AUTDB", "AUTDZB",
    "AUTIA", "AUTIA1716", "AUTIASP", "AUTIAZ", "AUTIZA",
    "AUTIB", "AUTIB1716", "AUTIBSP", "AUTIBZ", "AUTIZB",
];

/// True if `mnemonic` is in any of the fixed system mnemonic sets.
///
/// Matching is exact and case-sensitive.
pub fn is_system_mnemonic(mnemonic: &str) -> bool {
    SYSTEM_MNEMONICS.contains(&mnemonic)
        || SYSTEM_CALL_MNEMONICS.contains(&mnemonic)
        || CRYPTO_MNEMONICS.contains(&mnemonic)
}

/// Check for an exception return idiom.
///
/// `ERET` and `RFE*`, `LDM` with a `^` register list, and the flag-setting
/// `MOVS PC, LR` / `SUBS PC, LR, #n` forms.
pub fn is_interrupt_return<D: Database + ?Sized>(
    db: &D,
    address: Address,
    mnemonic: &str,
) -> Result<bool> {
    if matches!(mnemonic, "ERET" | "ERETAA" | "ERETAB") || mnemonic.starts_with("RFE") {
        return Ok(true);
    }
    if mnemonic.starts_with("LDM") {
        return Ok(db.operand_text(address, 1)?.ends_with('^'));
    }
    if mnemonic.starts_with("SUBS") || mnemonic.starts_with("MOVS") {
        return Ok(db.operand_text(address, 0)? == "PC" && db.operand_text(address, 1)? == "LR");
    }
    Ok(false)
}

/// Decoder family of a system instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionFamily {
    /// `MRRC`/`MCRR`: 64-bit coprocessor register transfer.
    Coproc64,
    /// `MRC`/`MCR`: 32-bit coprocessor register transfer.
    Coproc,
    /// AArch32 `MSR` to the CPSR.
    PsrWrite,
    /// AArch64 `MSR` of an immediate to a PSTATE field.
    PstateWrite,
    /// AArch64 `MRS`/`MSR` of a system register.
    SystemRegister,
    /// AArch64 `SYS`/`SYSL` maintenance operation.
    SystemOperation,
    /// Recognized but not decoded further (barriers, hints, calls, ...).
    Other,
}

impl InstructionFamily {
    fn of<D: Database + ?Sized>(
        db: &D,
        address: Address,
        mnemonic: &str,
        mode: ArchMode,
    ) -> Result<Self> {
        let family = if mnemonic.starts_with("MRRC") || mnemonic.starts_with("MCRR") {
            InstructionFamily::Coproc64
        } else if mnemonic.starts_with("MRC") || mnemonic.starts_with("MCR") {
            InstructionFamily::Coproc
        } else {
            match mode {
                ArchMode::Aarch32 if mnemonic.starts_with("MSR") => InstructionFamily::PsrWrite,
                ArchMode::Aarch64 if mnemonic.starts_with("MSR") => {
                    if db.operand_text(address, 2)?.is_empty() {
                        InstructionFamily::PstateWrite
                    } else {
                        InstructionFamily::SystemRegister
                    }
                }
                ArchMode::Aarch64 if mnemonic.starts_with("MRS") => {
                    InstructionFamily::SystemRegister
                }
                ArchMode::Aarch64 if mnemonic.starts_with("SYS") => {
                    InstructionFamily::SystemOperation
                }
                _ => InstructionFamily::Other,
            }
        };
        Ok(family)
    }
}

/// A head recognized as a system instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction {
    pub address: Address,
    pub mnemonic: String,
    pub family: InstructionFamily,
    /// Matches one of the exception return idioms.
    pub interrupt_return: bool,
}

impl SystemInstruction {
    /// `SVC`, `SMC`, `HVC` and friends.
    pub fn is_system_call(&self) -> bool {
        SYSTEM_CALL_MNEMONICS.contains(&self.mnemonic.as_str())
    }

    /// Cryptographic extension instruction.
    pub fn is_crypto(&self) -> bool {
        CRYPTO_MNEMONICS.contains(&self.mnemonic.as_str())
    }
}

/// Classify the head at `address`.
///
/// Returns `None` for anything that is not a system instruction.
pub fn classify<D: Database + ?Sized>(
    db: &D,
    mode: ArchMode,
    address: Address,
) -> Result<Option<SystemInstruction>> {
    let mnemonic = db.mnemonic(address)?;
    if mnemonic.is_empty() {
        return Ok(None);
    }

    let interrupt_return = is_interrupt_return(db, address, &mnemonic)?;
    if !interrupt_return && !is_system_mnemonic(&mnemonic) {
        return Ok(None);
    }

    let family = InstructionFamily::of(db, address, &mnemonic, mode)?;
    Ok(Some(SystemInstruction {
        address,
        mnemonic,
        family,
        interrupt_return,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;

    fn classify_one(mode: ArchMode, mnemonic: &str, operands: &[&str]) -> Option<SystemInstruction> {
        let db = Listing::builder(mode).insn(0x1000, mnemonic, operands).build();
        classify(&db, mode, 0x1000).unwrap()
    }

    #[test]
    fn test_interrupt_return_idioms() {
        let a32 = ArchMode::Aarch32;
        for (mnemonic, operands) in [
            ("MOVS", &["PC", "LR"][..]),
            ("SUBS", &["PC", "LR", "#4"][..]),
            ("ERET", &[][..]),
            ("RFEIA", &["SP!"][..]),
            ("LDM", &["SP!", "{R0-R12,PC}^"][..]),
        ] {
            let insn = classify_one(a32, mnemonic, operands)
                .unwrap_or_else(|| panic!("{} not classified", mnemonic));
            assert!(insn.interrupt_return, "{} is an exception return", mnemonic);
        }
    }

    #[test]
    fn test_plain_return_is_not_system() {
        assert!(classify_one(ArchMode::Aarch32, "MOV", &["PC", "LR"]).is_none());
        assert!(classify_one(ArchMode::Aarch32, "LDM", &["SP!", "{R4,PC}"]).is_none());
        assert!(classify_one(ArchMode::Aarch32, "SUBS", &["R0", "R0", "#1"]).is_none());
        assert!(classify_one(ArchMode::Aarch64, "RET", &[]).is_none());
    }

    #[test]
    fn test_mnemonic_matching_is_exact() {
        assert!(is_system_mnemonic("MCR"));
        assert!(is_system_mnemonic("HVC"));
        assert!(is_system_mnemonic("SHA256H2"));
        assert!(is_system_mnemonic("HINT"));
        assert!(is_system_mnemonic("BKPT"));
        assert!(!is_system_mnemonic("mcr"));
        assert!(!is_system_mnemonic("MCREQ"));
        assert!(!is_system_mnemonic("ADD"));
    }

    #[test]
    fn test_families() {
        use InstructionFamily::*;

        let a32 = ArchMode::Aarch32;
        let a64 = ArchMode::Aarch64;
        let family = |mode, m: &str, ops: &[&str]| classify_one(mode, m, ops).unwrap().family;

        assert_eq!(family(a32, "MCRR", &["0", "R0,R1,c2"]), Coproc64);
        assert_eq!(family(a32, "MRC", &["0", "R0,c1,c0", "0"]), Coproc);
        assert_eq!(family(a32, "MSR", &["CPSR_c", "#0xD3"]), PsrWrite);
        assert_eq!(family(a32, "MRS", &["R0", "CPSR"]), Other);
        assert_eq!(family(a64, "MSR", &["#6", "#0xF"]), PstateWrite);
        assert_eq!(family(a64, "MSR", &["#0", "c12", "c0", "#0", "X0"]), SystemRegister);
        assert_eq!(family(a64, "MRS", &["X0", "#0", "c1", "c0", "#0"]), SystemRegister);
        assert_eq!(family(a64, "SYS", &["#3", "c7", "c11", "#1", "X0"]), SystemOperation);
        assert_eq!(family(a64, "DSB", &["SY"]), Other);
    }

    #[test]
    fn test_bookkeeping_sets() {
        let svc = classify_one(ArchMode::Aarch32, "SVC", &["0"]).unwrap();
        assert!(svc.is_system_call());
        assert!(!svc.is_crypto());

        let aese = classify_one(ArchMode::Aarch64, "AESE", &["V0.16B", "V1.16B"]).unwrap();
        assert!(aese.is_crypto());
        assert!(!aese.interrupt_return);
    }
}
