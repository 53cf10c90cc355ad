//! Register resolution.
//!
//! Looks a decoded access up in the catalogs, comments the instruction with
//! every name its encoding selects, files the interesting ones into the
//! summary and, when the register has a known bit layout, hands the
//! general-purpose register over to the field walkers.

use crate::catalog::{RegisterDescriptor, RegisterKey};
use crate::dataflow::FieldWalker;
use crate::decode::RegisterAccess;
use crate::error::Result;
use crate::host::Database;
use crate::types::{Access, AnalysisContext, Location, SummaryCategory};

/// Outcome of resolving one access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Catalogued register(s).
    Known(RegisterDescriptor),
    /// AArch64 implementation-defined encoding, by generic name.
    ImplementationDefined(String),
    /// Not in any catalog.
    Unknown,
}

/// Summary category for a register name, if it has one.
///
/// `TTBR*` goes to page tables; `VBAR*` and the banked `HVBAR`/`MVBAR`
/// forms go to interrupt vectors.
pub fn category_for(name: &str) -> Option<SummaryCategory> {
    if name.starts_with("TTBR") {
        Some(SummaryCategory::PageTable)
    } else if name.starts_with("VBAR") || name.get(1..5) == Some("VBAR") {
        Some(SummaryCategory::InterruptVectors)
    } else {
        None
    }
}

/// Comment text for a catalogued register.
pub fn register_comment(access: Access, descriptor: RegisterDescriptor) -> String {
    let names: Vec<_> = descriptor.iter().map(ToString::to_string).collect();
    format!("[{}] {}", access, names.join("\n or "))
}

/// Annotate one decoded register access.
pub fn resolve<D: Database + ?Sized>(
    db: &mut D,
    ctx: &mut AnalysisContext,
    access: &RegisterAccess,
) -> Result<Resolution> {
    let address = access.address;

    if let RegisterKey::SysReg(key) = access.key {
        if key.is_implementation_defined() {
            let comment = format!(
                "[{}] {} (IMPLEMENTATION DEFINED)",
                access.access,
                key.generic_name()
            );
            db.set_comment(address, 0, &comment)?;
            ctx.log(address, comment);
            return Ok(Resolution::ImplementationDefined(key.generic_name()));
        }
    }

    let Some(descriptor) = access.key.lookup() else {
        db.set_comment(address, 0, &format!("[{}] Unknown system register.", access.access))?;
        ctx.log(address, "Cannot identify system register.");
        return Ok(Resolution::Unknown);
    };

    let comment = register_comment(access.access, descriptor);
    db.set_comment(address, 0, &comment)?;
    ctx.log(address, comment);

    let Some(primary) = descriptor.first() else {
        return Ok(Resolution::Known(descriptor));
    };
    if let Some(category) = category_for(primary.name) {
        let location = Location::offset_or_address(&*db, address);
        ctx.summary.record(category, location);
    }

    // Layouts apply only to unaliased encodings.
    if ctx.options.track_fields && descriptor.len() == 1 {
        if let (Some(fields), Some(gpr)) = (access.key.fields(primary.name), &access.gpr) {
            let walker = FieldWalker::new(db, ctx.mode, fields, ctx.options.scan_limit);
            let walked = match access.access {
                Access::Write => walker.backtrack(address, gpr),
                Access::Read => walker.track(address, gpr),
            };
            match walked {
                Ok(written) => tracing::trace!(address, written, "field walk done"),
                Err(err) => tracing::warn!(address, "field walk abandoned: {}", err),
            }
        }
    }

    Ok(Resolution::Known(descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CoprocKey, Coproc64Key, SysInsnKey, SysRegKey};
    use crate::listing::Listing;
    use crate::types::{AnnotatorOptions, ArchMode};
    use pretty_assertions::assert_eq;

    fn access(address: u64, access: Access, key: RegisterKey, gpr: Option<&str>) -> RegisterAccess {
        RegisterAccess {
            address,
            access,
            key,
            gpr: gpr.map(str::to_string),
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(category_for("TTBR0"), Some(SummaryCategory::PageTable));
        assert_eq!(category_for("TTBR1_EL1"), Some(SummaryCategory::PageTable));
        assert_eq!(category_for("VBAR_EL3"), Some(SummaryCategory::InterruptVectors));
        assert_eq!(category_for("HVBAR"), Some(SummaryCategory::InterruptVectors));
        assert_eq!(category_for("MVBAR"), Some(SummaryCategory::InterruptVectors));
        assert_eq!(category_for("HTTBR"), None);
        assert_eq!(category_for("RVBAR"), Some(SummaryCategory::InterruptVectors));
        assert_eq!(category_for("SCTLR"), None);
    }

    #[test]
    fn test_aliased_comment() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .function("mmu_on", 0x1000, 0x1010)
            .insn(0x1008, "MCRR", &["0", "R0,R1,c2"])
            .build();
        let mut ctx = AnalysisContext::new(ArchMode::Aarch32, AnnotatorOptions::new());
        let key = RegisterKey::Coproc64(Coproc64Key::new(15, 0, 2));
        let resolution = resolve(&mut db, &mut ctx, &access(0x1008, Access::Write, key, None)).unwrap();

        assert!(matches!(resolution, Resolution::Known(names) if names.len() == 2));
        let expected = "[>] TTBR0 (Translation Table Base Register 0)\n or AMEVCNTR10 (Activity Monitors Event Counter Registers 1)";
        assert_eq!(db.comment(0x1008, 0), Some(expected));
        assert_eq!(ctx.log.len(), 1);
        assert_eq!(ctx.log[0].text, expected);

        let pages: Vec<_> = ctx
            .summary
            .locations(SummaryCategory::PageTable)
            .map(ToString::to_string)
            .collect();
        assert_eq!(pages, vec!["mmu_on+0x8"]);
    }

    #[test]
    fn test_unknown_register() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .insn(0x1000, "MRC", &["7", "R0,c9,c9", "7"])
            .build();
        let mut ctx = AnalysisContext::new(ArchMode::Aarch32, AnnotatorOptions::new());
        let key = RegisterKey::Coproc(CoprocKey::new(15, 9, 7, 9, 7));
        let resolution = resolve(&mut db, &mut ctx, &access(0x1000, Access::Read, key, Some("R0"))).unwrap();

        assert_eq!(resolution, Resolution::Unknown);
        assert_eq!(db.comment(0x1000, 0), Some("[<] Unknown system register."));
        assert_eq!(ctx.log[0].to_string(), "1000: Cannot identify system register.");
        assert!(ctx.summary.is_empty());
    }

    #[test]
    fn test_implementation_defined() {
        let mut db = Listing::builder(ArchMode::Aarch64)
            .insn(0x1000, "MSR", &["#1", "c15", "c2", "#0", "X0"])
            .build();
        let mut ctx = AnalysisContext::new(ArchMode::Aarch64, AnnotatorOptions::new());
        let key = RegisterKey::SysReg(SysRegKey::new(3, 1, 15, 2, 0));
        let resolution = resolve(&mut db, &mut ctx, &access(0x1000, Access::Write, key, Some("X0"))).unwrap();

        assert_eq!(resolution, Resolution::ImplementationDefined("S3_1_C15_C2_0".to_string()));
        assert_eq!(
            db.comment(0x1000, 0),
            Some("[>] S3_1_C15_C2_0 (IMPLEMENTATION DEFINED)")
        );
        assert!(ctx.summary.is_empty());
    }

    #[test]
    fn test_write_walks_fields() {
        let mut db = Listing::builder(ArchMode::Aarch64)
            .insn(0x1000, "MOV", &["X0", "#0x1005"])
            .insn(0x1004, "MSR", &["#0", "c1", "c0", "#0", "X0"])
            .build();
        let key = RegisterKey::SysReg(SysRegKey::new(3, 0, 1, 0, 0));
        let write = access(0x1004, Access::Write, key, Some("X0"));

        let mut ctx = AnalysisContext::new(ArchMode::Aarch64, AnnotatorOptions::registers_only());
        resolve(&mut db, &mut ctx, &write).unwrap();
        assert_eq!(db.comment(0x1000, 0), None);

        let mut ctx = AnalysisContext::new(ArchMode::Aarch64, AnnotatorOptions::new());
        resolve(&mut db, &mut ctx, &write).unwrap();
        assert_eq!(
            db.comment(0x1004, 0),
            Some("[>] SCTLR_EL1 (System Control Register (EL1))")
        );
        assert_eq!(
            db.comment(0x1000, 0),
            Some("Set bits M (MMU Enable), C (Cache Enable), I (Instruction cache Enable)")
        );
        // Field comments are not part of the log.
        assert_eq!(ctx.log.len(), 1);
    }

    #[test]
    fn test_walk_failure_keeps_register_comment() {
        // The literal pool slot is missing from the listing.
        let mut db = Listing::builder(ArchMode::Aarch32)
            .insn(0x1000, "LDR", &["R0", "=0x1"])
            .value(0x1000, 1, 0x9000)
            .insn(0x1004, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        let mut ctx = AnalysisContext::new(ArchMode::Aarch32, AnnotatorOptions::new());
        let key = RegisterKey::Coproc(CoprocKey::new(15, 1, 0, 0, 0));
        let resolution = resolve(&mut db, &mut ctx, &access(0x1004, Access::Write, key, Some("R0")));

        assert!(matches!(resolution, Ok(Resolution::Known(_))));
        assert_eq!(db.comment(0x1004, 0), Some("[>] SCTLR (System Control Register)"));
        assert_eq!(db.comment(0x1000, 0), None);
    }

    #[test]
    fn test_system_operation() {
        let mut db = Listing::builder(ArchMode::Aarch64)
            .insn(0x1000, "SYS", &["#3", "c7", "c11", "#1", "X0"])
            .build();
        let mut ctx = AnalysisContext::new(ArchMode::Aarch64, AnnotatorOptions::new());
        let key = RegisterKey::SysInsn(SysInsnKey::new(3, 7, 11, 1));
        let resolution = resolve(&mut db, &mut ctx, &access(0x1000, Access::Write, key, Some("X0"))).unwrap();

        let Resolution::Known(names) = resolution else {
            panic!("DC CVAU is catalogued");
        };
        assert_eq!(names[0].name, "DC CVAU");
    }
}
