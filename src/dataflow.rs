//! Field value recovery around register accesses.
//!
//! A write to a register with a known bit layout is usually preceded by the
//! code that builds the written value; a read is usually followed by code
//! that tests or extracts parts of it. The walkers here follow the
//! general-purpose register through that straight-line code and comment
//! each instruction with the fields it touches.
//!
//! Walks are purely syntactic. They stop at the first instruction they do
//! not understand and never follow branches.

use std::collections::HashSet;

use crate::catalog::{fields_in, find_field, FieldMatch, FieldSpec};
use crate::error::Result;
use crate::host::{parse_operand_value, Address, Database};
use crate::types::ArchMode;

/// `FP`, `SP`, `LR`, `PC`, or a numbered register of the current state.
pub fn is_general_register(mode: ArchMode, operand: &str) -> bool {
    if matches!(operand, "FP" | "SP" | "LR" | "PC") {
        return true;
    }
    let numbered = |prefix: &[char]| {
        operand
            .strip_prefix(prefix)
            .map_or(false, |n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    };
    match mode {
        ArchMode::Aarch64 => numbered(&['W', 'X']),
        ArchMode::Aarch32 => numbered(&['R']),
    }
}

/// Same register, treating `Wn` and `Xn` as one in AArch64.
pub fn is_same_register(mode: ArchMode, a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if mode != ArchMode::Aarch64 {
        return false;
    }
    fn split(reg: &str) -> Option<(&str, &str)> {
        Some((reg.get(..1)?, reg.get(1..)?))
    }
    match (split(a), split(b)) {
        (Some((pa, ra)), Some((pb, rb))) => {
            ra == rb && matches!((pa, pb), ("W", "X") | ("X", "W"))
        }
        _ => false,
    }
}

/// Size in bytes of a general-purpose register, 0 for anything else.
pub fn register_size(mode: ArchMode, register: &str) -> u32 {
    if !is_general_register(mode, register) {
        return 0;
    }
    match mode {
        ArchMode::Aarch64 if register.starts_with('W') => 4,
        ArchMode::Aarch64 => 8,
        ArchMode::Aarch32 => 4,
    }
}

fn width_mask(bits: u32) -> u64 {
    match bits {
        0 => 0,
        64.. => u64::MAX,
        _ => (1u64 << bits) - 1,
    }
}

fn reduced(mnemonic: &str) -> &str {
    mnemonic.get(..3).unwrap_or(mnemonic)
}

/// How a backward walk phrases the fields it finds.
///
/// Chosen by the first value-building instruction of a walk and inherited
/// by every walk it spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldComment {
    /// `LDR`/`MOV`: "Set bits M (MMU Enable), C (Cache Enable)".
    SetBits,
    /// `ORR`: "Set bit C (Cache Enable)".
    SetBit,
    /// `BIC`: "Clear bit Cache Enable".
    ClearBit,
    /// `AND`: like `ClearBit`, one field per line.
    ClearMask,
}

impl FieldComment {
    fn for_mnemonic(reduced: &str) -> Option<Self> {
        match reduced {
            "LDR" | "MOV" => Some(FieldComment::SetBits),
            "ORR" => Some(FieldComment::SetBit),
            "BIC" => Some(FieldComment::ClearBit),
            "AND" => Some(FieldComment::ClearMask),
            _ => None,
        }
    }

    /// Render the matched fields.
    pub fn render(&self, matches: &[FieldMatch]) -> String {
        let named = || {
            matches
                .iter()
                .map(|m| format!("{} ({})", m.label(), m.field.description))
                .collect::<Vec<_>>()
        };
        let described = || {
            matches
                .iter()
                .map(|m| m.field.description)
                .collect::<Vec<_>>()
        };
        match self {
            FieldComment::SetBits => format!("Set bits {}", named().join(", ")),
            FieldComment::SetBit => format!("Set bit {}", named().join(", ")),
            FieldComment::ClearBit => format!("Clear bit {}", described().join(", ")),
            FieldComment::ClearMask => format!("Clear bit {}", described().join(", \n")),
        }
    }
}

/// A backward walk waiting to run.
#[derive(Debug, Clone)]
struct PendingWalk {
    from: Address,
    register: String,
    style: Option<FieldComment>,
}

enum Flow {
    Continue,
    Stop,
}

/// Walks code around one register access.
pub struct FieldWalker<'a, D: ?Sized> {
    db: &'a mut D,
    mode: ArchMode,
    fields: &'static [FieldSpec],
    budget: Option<usize>,
    written: usize,
}

impl<'a, D: Database + ?Sized> FieldWalker<'a, D> {
    /// `scan_limit` bounds the heads visited over all walks of this walker.
    pub fn new(
        db: &'a mut D,
        mode: ArchMode,
        fields: &'static [FieldSpec],
        scan_limit: Option<usize>,
    ) -> Self {
        Self {
            db,
            mode,
            fields,
            budget: scan_limit,
            written: 0,
        }
    }

    fn same(&self, a: &str, b: &str) -> bool {
        is_same_register(self.mode, a, b)
    }

    fn general(&self, operand: &str) -> bool {
        is_general_register(self.mode, operand)
    }

    fn step(&mut self) -> bool {
        match self.budget.as_mut() {
            Some(0) => false,
            Some(left) => {
                *left -= 1;
                true
            }
            None => true,
        }
    }

    fn comment(&mut self, address: Address, text: String) -> Result<()> {
        tracing::trace!(address, "{}", text);
        self.db.set_comment(address, 0, &text)?;
        self.written += 1;
        Ok(())
    }

    fn comment_fields(
        &mut self,
        address: Address,
        style: FieldComment,
        matches: &[FieldMatch],
    ) -> Result<()> {
        if matches.is_empty() {
            return Ok(());
        }
        self.comment(address, style.render(matches))
    }

    /// Whether a walk may step over the instruction at `address`.
    fn can_skip(&self, address: Address, register: &str) -> Result<bool> {
        let mnemonic = self.db.mnemonic(address)?;
        if matches!(
            mnemonic.as_str(),
            "NOP" | "ISB" | "DSB" | "DMB" | "MSR" | "MCR" | "MCRR" | "MCRR2" | "CMP"
        ) || matches!(reduced(&mnemonic), "STR" | "STM")
            || mnemonic.starts_with("B.")
        {
            return Ok(true);
        }

        let writes_other = || -> Result<bool> {
            Ok(!self.same(&self.db.operand_text(address, 0)?, register))
        };
        if mnemonic.starts_with("UBF") {
            return writes_other();
        }
        if matches!(
            mnemonic.as_str(),
            "LDR" | "MRS" | "ORR" | "AND" | "EOR" | "BIC" | "MOV" | "MOVK" | "MOVT" | "LSR"
                | "LSL" | "ADD" | "SUB"
        ) {
            return writes_other();
        }
        Ok(false)
    }

    /// Walk backwards from a write of `register`, commenting the
    /// instructions that build its value.
    ///
    /// Returns the number of comments written.
    pub fn backtrack(mut self, address: Address, register: &str) -> Result<usize> {
        let mut pending = vec![PendingWalk {
            from: address,
            register: register.to_string(),
            style: None,
        }];
        let mut seen = HashSet::new();
        seen.insert((address, register.to_string()));
        let mut spawned = Vec::new();

        while let Some(walk) = pending.pop() {
            let mut cursor = walk.from;
            while let Some(prev) = self.db.prev_head(cursor) {
                if !self.step() {
                    return Ok(self.written);
                }
                cursor = prev;
                let flow = self.backtrack_step(cursor, &walk.register, walk.style, &mut spawned)?;
                if spawned.is_empty() {
                    match flow {
                        Flow::Continue => continue,
                        Flow::Stop => break,
                    }
                }
                // Spawned walks finish before this one resumes.
                if let Flow::Continue = flow {
                    pending.push(PendingWalk {
                        from: cursor,
                        register: walk.register.clone(),
                        style: walk.style,
                    });
                }
                for child in spawned.drain(..).rev() {
                    if seen.insert((child.from, child.register.clone())) {
                        pending.push(child);
                    }
                }
                break;
            }
        }
        Ok(self.written)
    }

    fn backtrack_step(
        &mut self,
        address: Address,
        register: &str,
        inherited: Option<FieldComment>,
        pending: &mut Vec<PendingWalk>,
    ) -> Result<Flow> {
        let mnemonic = self.db.mnemonic(address)?;
        let short = reduced(&mnemonic);
        let dest = self.db.operand_text(address, 0)?;

        let Some(own) = FieldComment::for_mnemonic(short).filter(|_| self.same(&dest, register))
        else {
            return self.skip_or_stop(address, register);
        };
        let style = inherited.unwrap_or(own);

        let source = self.db.operand_text(address, 1)?;
        let spawn = |pending: &mut Vec<PendingWalk>, register: String| {
            pending.push(PendingWalk {
                from: address,
                register,
                style: Some(style),
            });
        };

        // LDR Rd, =const
        if short == "LDR" && source.starts_with('=') {
            let slot = self.db.operand_value(address, 1)?;
            let value = u64::from(self.db.read_word(slot)?);
            let matches = fields_in(self.fields, value, true);
            self.comment_fields(address, style, &matches)?;
            return Ok(Flow::Stop);
        }

        // MOVK Rd, #imm, LSL#shift
        if mnemonic == "MOVK" {
            let imm = self.db.operand_value(address, 1)?;
            let shift = source
                .split(',')
                .nth(1)
                .and_then(|part| part.trim().get(4..))
                .and_then(parse_operand_value)
                .unwrap_or(0);
            let value = imm.checked_shl(shift as u32).unwrap_or(0);
            let matches = fields_in(self.fields, value, true);
            self.comment_fields(address, style, &matches)?;
            return Ok(Flow::Continue);
        }

        // MOVT Rd, #imm
        if mnemonic == "MOVT" {
            let value = self.db.operand_value(address, 1)? << 16;
            let matches = fields_in(self.fields, value, true);
            self.comment_fields(address, style, &matches)?;
            return Ok(Flow::Continue);
        }

        if short == "MOV" {
            // MOV Rd, #imm
            if source.starts_with('#') {
                let value = self.db.operand_value(address, 1)?;
                let matches = fields_in(self.fields, value, true);
                self.comment_fields(address, style, &matches)?;
            // MOV Rd, Rn
            } else if self.general(&source) {
                spawn(pending, source);
            }
            return Ok(Flow::Stop);
        }

        let operand = self.db.operand_text(address, 2)?;
        match short {
            // ORR/BIC Rd, Rn, #imm
            "ORR" | "BIC" if operand.starts_with('#') => {
                let value = self.db.operand_value(address, 2)?;
                let matches = fields_in(self.fields, value, true);
                self.comment_fields(address, style, &matches)?;
                if self.same(&source, register) {
                    Ok(Flow::Continue)
                } else {
                    spawn(pending, source);
                    Ok(Flow::Stop)
                }
            }
            // ORR/BIC Rd, Rn, Rm
            "ORR" | "BIC" if self.general(&operand) => {
                let first = !self.same(&source, register);
                let second = !self.same(&operand, register);
                if first {
                    spawn(pending, source);
                }
                if second {
                    spawn(pending, operand);
                }
                Ok(if first && second {
                    Flow::Stop
                } else {
                    Flow::Continue
                })
            }
            // AND Rd, Rn, #mask
            "AND" if operand.starts_with('#') => {
                let mask = self.db.operand_value(address, 2)?;
                let bits = register_size(self.mode, &dest) * 8;
                let cleared = !mask & width_mask(bits);
                let matches = fields_in(self.fields, cleared, false);
                self.comment_fields(address, style, &matches)?;
                if self.same(&source, register) {
                    Ok(Flow::Continue)
                } else {
                    spawn(pending, source);
                    Ok(Flow::Stop)
                }
            }
            _ => Ok(Flow::Stop),
        }
    }

    fn skip_or_stop(&self, address: Address, register: &str) -> Result<Flow> {
        Ok(if self.can_skip(address, register)? {
            Flow::Continue
        } else {
            Flow::Stop
        })
    }

    /// Walk forwards from a read into `register`, commenting the
    /// instructions that test or extract its fields.
    ///
    /// Returns the number of comments written.
    pub fn track(mut self, address: Address, register: &str) -> Result<usize> {
        let mut cursor = address;
        while let Some(next) = self.db.next_head(cursor) {
            if !self.step() {
                break;
            }
            cursor = next;
            match self.track_step(cursor, register)? {
                Flow::Continue => {}
                Flow::Stop => break,
            }
        }
        Ok(self.written)
    }

    fn track_step(&mut self, address: Address, register: &str) -> Result<Flow> {
        let mnemonic = self.db.mnemonic(address)?;
        let short = reduced(&mnemonic);
        let dest = self.db.operand_text(address, 0)?;
        let source = self.db.operand_text(address, 1)?;
        let operand = self.db.operand_text(address, 2)?;

        // TST/TEQ/CMP Rn, #imm
        if matches!(short, "TST" | "TEQ" | "CMP")
            && self.same(&dest, register)
            && source.starts_with('#')
        {
            let value = self.db.operand_value(address, 1)?;
            let matches = fields_in(self.fields, value, true);
            if !matches.is_empty() {
                let names: Vec<_> = matches.iter().map(FieldMatch::label).collect();
                self.comment(address, format!("Test field {}", names.join(", ")))?;
            }
            return Ok(Flow::Continue);
        }

        let overwritten = self.same(&dest, register);

        // AND Rd, Rn, #imm
        if short == "AND" && self.same(&source, register) && operand.starts_with('#') {
            let value = self.db.operand_value(address, 2)?;
            let matches = fields_in(self.fields, value, false);
            if !matches.is_empty() {
                let descriptions: Vec<_> = matches.iter().map(|m| m.field.description).collect();
                self.comment(address, format!("Field {}", descriptions.join(", ")))?;
            }
            return Ok(if overwritten { Flow::Stop } else { Flow::Continue });
        }

        // LSLS Rd, Rn, #shift moves one bit into N
        if mnemonic.starts_with("LSLS") && self.same(&source, register) && operand.starts_with('#')
        {
            let shift = self.db.operand_value(address, 2)?;
            if let Some(bit) = 31u64.checked_sub(shift) {
                let matches = fields_in(self.fields, 1 << bit, false);
                if !matches.is_empty() {
                    let descriptions: Vec<_> =
                        matches.iter().map(|m| m.field.description).collect();
                    self.comment(address, format!("Test bit {}", descriptions.join(", ")))?;
                }
            }
            return Ok(if overwritten { Flow::Stop } else { Flow::Continue });
        }

        // UBFX Rd, Rn, #lsb, #width
        if mnemonic == "UBFX" && self.same(&source, register) {
            let lsb = self.db.operand_value(address, 2)?;
            let width = self.db.operand_value(address, 3)?;
            let field = match (u8::try_from(lsb), u8::try_from(width)) {
                (Ok(lsb), Ok(width)) => find_field(self.fields, lsb, width),
                _ => None,
            };
            if let Some(field) = field {
                self.comment(address, format!("Extract {}", field.description))?;
            }
            return Ok(if overwritten { Flow::Stop } else { Flow::Continue });
        }

        self.skip_or_stop(address, register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{aarch32_fields, aarch64_fields};
    use crate::listing::Listing;
    use pretty_assertions::assert_eq;

    const A32: ArchMode = ArchMode::Aarch32;
    const A64: ArchMode = ArchMode::Aarch64;

    fn sctlr() -> &'static [FieldSpec] {
        aarch32_fields("SCTLR").unwrap()
    }

    fn backtrack(db: &mut Listing, mode: ArchMode, fields: &'static [FieldSpec], at: Address, reg: &str) -> usize {
        FieldWalker::new(db, mode, fields, Some(256))
            .backtrack(at, reg)
            .unwrap()
    }

    fn track(db: &mut Listing, mode: ArchMode, fields: &'static [FieldSpec], at: Address, reg: &str) -> usize {
        FieldWalker::new(db, mode, fields, Some(256))
            .track(at, reg)
            .unwrap()
    }

    #[test]
    fn test_register_helpers() {
        assert!(is_general_register(A32, "R12"));
        assert!(is_general_register(A32, "LR"));
        assert!(!is_general_register(A32, "X0"));
        assert!(!is_general_register(A32, "R"));
        assert!(!is_general_register(A32, ""));
        assert!(is_general_register(A64, "W3"));
        assert!(!is_general_register(A64, "XZR"));

        assert!(is_same_register(A64, "W1", "X1"));
        assert!(is_same_register(A64, "X1", "W1"));
        assert!(!is_same_register(A64, "W1", "X10"));
        assert!(!is_same_register(A32, "W1", "X1"));
        assert!(is_same_register(A32, "R1", "R1"));

        assert_eq!(register_size(A64, "W0"), 4);
        assert_eq!(register_size(A64, "X0"), 8);
        assert_eq!(register_size(A32, "R0"), 4);
        assert_eq!(register_size(A32, "#1"), 0);
    }

    #[test]
    fn test_mov_orr_write() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "MOV", &["R0", "#1"])
            .insn(0x1004, "ORR", &["R0", "R0", "#0x20"])
            .insn(0x1008, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        assert_eq!(backtrack(&mut db, A32, sctlr(), 0x1008, "R0"), 2);
        assert_eq!(
            db.comment(0x1004, 0),
            Some("Set bit CP15BEN (System instruction memory barrier enable)")
        );
        assert_eq!(db.comment(0x1000, 0), Some("Set bits M (MMU Enable)"));
    }

    #[test]
    fn test_register_copy_inherits_style() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "ORR", &["R1", "R1", "#4"])
            .insn(0x1004, "MOV", &["R0", "R1"])
            .insn(0x1008, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        backtrack(&mut db, A32, sctlr(), 0x1008, "R0");
        assert_eq!(db.comment(0x1004, 0), None);
        assert_eq!(db.comment(0x1000, 0), Some("Set bits C (Cache Enable)"));
    }

    #[test]
    fn test_clear_forms() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "MRC", &["0", "R0,c1,c0", "0"])
            .insn(0x1004, "BIC", &["R0", "R0", "#5"])
            .insn(0x1008, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        backtrack(&mut db, A32, sctlr(), 0x1008, "R0");
        assert_eq!(db.comment(0x1004, 0), Some("Clear bit MMU Enable, Cache Enable"));

        let mut db = Listing::builder(A32)
            .insn(0x1000, "AND", &["R0", "R0", "#0xFFFFFFFA"])
            .insn(0x1004, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        backtrack(&mut db, A32, sctlr(), 0x1004, "R0");
        assert_eq!(db.comment(0x1000, 0), Some("Clear bit MMU Enable, \nCache Enable"));
    }

    #[test]
    fn test_literal_load() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "LDR", &["R0", "=0x1001"])
            .value(0x1000, 1, 0x2000)
            .insn(0x1004, "DSB", &["SY"])
            .insn(0x1008, "MCR", &["0", "R0,c1,c0", "0"])
            .data(0x2000, 0x1001)
            .build();
        assert_eq!(backtrack(&mut db, A32, sctlr(), 0x1008, "R0"), 1);
        assert_eq!(
            db.comment(0x1000, 0),
            Some("Set bits M (MMU Enable), I (Instruction cache Enable)")
        );
    }

    #[test]
    fn test_movk_movt_contributions() {
        let mpidr = aarch64_fields("MPIDR_EL1").unwrap();
        let mut db = Listing::builder(A64)
            .insn(0x1000, "MOV", &["X0", "#2"])
            .insn(0x1004, "MOVK", &["X0", "#0x1,LSL#16"])
            .insn(0x1008, "MSR", &["#4", "c0", "c0", "#5", "X0"])
            .build();
        assert_eq!(backtrack(&mut db, A64, mpidr, 0x1008, "X0"), 2);
        assert_eq!(db.comment(0x1004, 0), Some("Set bits Aff2=1 (Affinity level 2)"));
        assert_eq!(db.comment(0x1000, 0), Some("Set bits Aff0=2 (Affinity level 0)"));

        let mut db = Listing::builder(A32)
            .insn(0x1000, "MOVW", &["R0", "#1"])
            .insn(0x1004, "MOVT", &["R0", "#0x1000"])
            .insn(0x1008, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        backtrack(&mut db, A32, sctlr(), 0x1008, "R0");
        assert_eq!(db.comment(0x1004, 0), Some("Set bits TRE (TEX Remap Enable)"));
        assert_eq!(db.comment(0x1000, 0), Some("Set bits M (MMU Enable)"));
    }

    #[test]
    fn test_two_register_orr() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "MOV", &["R1", "#1"])
            .insn(0x1004, "MOV", &["R2", "#4"])
            .insn(0x1008, "ORR", &["R0", "R1", "R2"])
            .insn(0x100C, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        assert_eq!(backtrack(&mut db, A32, sctlr(), 0x100C, "R0"), 2);
        assert_eq!(db.comment(0x1000, 0), Some("Set bit M (MMU Enable)"));
        assert_eq!(db.comment(0x1004, 0), Some("Set bit C (Cache Enable)"));
    }

    #[test]
    fn test_spawned_walk_finishes_before_parent_resumes() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "MOV", &["R0", "#1"])
            .insn(0x1004, "MOV", &["R1", "R0"])
            .insn(0x1008, "ORR", &["R0", "R0", "R1"])
            .insn(0x100C, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        assert_eq!(backtrack(&mut db, A32, sctlr(), 0x100C, "R0"), 2);
        // The R1 walk reaches the MOV first; the R0 walk's phrasing lands last.
        assert_eq!(db.comment(0x1000, 0), Some("Set bits M (MMU Enable)"));
        assert_eq!(db.comment(0x1004, 0), None);
    }

    #[test]
    fn test_walk_stops_on_unknown() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "MOV", &["R0", "#1"])
            .insn(0x1004, "BL", &["sub_2000"])
            .insn(0x1008, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        assert_eq!(backtrack(&mut db, A32, sctlr(), 0x1008, "R0"), 0);
        assert_eq!(db.comment(0x1000, 0), None);
    }

    #[test]
    fn test_scan_limit() {
        let mut db = Listing::builder(A32)
            .insn(0x1000, "MOV", &["R0", "#1"])
            .insn(0x1004, "NOP", &[])
            .insn(0x1008, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        let written = FieldWalker::new(&mut db, A32, sctlr(), Some(1))
            .backtrack(0x1008, "R0")
            .unwrap();
        assert_eq!(written, 0);

        let written = FieldWalker::new(&mut db, A32, sctlr(), None)
            .backtrack(0x1008, "R0")
            .unwrap();
        assert_eq!(written, 1);
    }

    #[test]
    fn test_track_read() {
        let ctr = aarch64_fields("CTR_EL0").unwrap();
        let mut db = Listing::builder(A64)
            .insn(0x1000, "MRS", &["X0", "#3", "c0", "c0", "#1"])
            .insn(0x1004, "UBFX", &["X1", "X0", "#16", "#4"])
            .insn(0x1008, "TST", &["X0", "#0x10000000"])
            .insn(0x100C, "AND", &["X2", "X0", "#0xF"])
            .insn(0x1010, "LSLS", &["W3", "W0", "#2"])
            .insn(0x1014, "UBFX", &["X0", "X0", "#0", "#4"])
            .insn(0x1018, "TST", &["X0", "#1"])
            .build();
        assert_eq!(track(&mut db, A64, ctr, 0x1000, "X0"), 5);
        assert_eq!(
            db.comment(0x1004, 0),
            Some("Extract Log2 of the number of words in the smallest cache line of all the data caches and unified caches")
        );
        assert_eq!(db.comment(0x1008, 0), Some("Test field IDC"));
        assert_eq!(
            db.comment(0x100C, 0),
            Some("Field Log2 of the number of words in the smallest cache line of all the instruction caches")
        );
        assert_eq!(
            db.comment(0x1010, 0),
            Some("Test bit Instruction cache invalidation requirements for data to instruction coherence")
        );
        // X0 is overwritten by the second UBFX.
        assert_eq!(db.comment(0x1018, 0), None);
    }

    #[test]
    fn test_field_comment_render() {
        let fields = sctlr();
        let matches = fields_in(fields, 0b101, true);
        assert_eq!(
            FieldComment::SetBits.render(&matches),
            "Set bits M (MMU Enable), C (Cache Enable)"
        );
        assert_eq!(
            FieldComment::ClearBit.render(&matches),
            "Clear bit MMU Enable, Cache Enable"
        );
    }
}
