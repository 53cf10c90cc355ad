//! The annotation pass.
//!
//! Visits every instruction head once, in address order, and annotates the
//! system instructions among them.

use crate::classify::{classify, SystemInstruction};
use crate::decode::{decode, Decoded};
use crate::error::Result;
use crate::host::{Address, Database};
use crate::resolve::resolve;
use crate::types::{
    AnalysisContext, AnnotationReport, AnnotatorOptions, Location, SummaryCategory,
};

/// Annotate a database with default options.
pub fn annotate<D: Database + ?Sized>(db: &mut D) -> Result<AnnotationReport> {
    annotate_with_options(db, &AnnotatorOptions::default())
}

/// Annotate a database.
///
/// Fails without touching the database when the target is not ARM.
pub fn annotate_with_options<D: Database + ?Sized>(
    db: &mut D,
    options: &AnnotatorOptions,
) -> Result<AnnotationReport> {
    let mut ctx = AnalysisContext::detect(&*db, options.clone()).map_err(|err| {
        tracing::warn!("{}", err);
        err
    })?;

    let heads = db.heads();
    tracing::info!(mode = %ctx.mode, heads = heads.len(), "annotating system instructions");

    let mut system_instructions = 0;
    for &address in &heads {
        if annotate_head(db, &mut ctx, address)? {
            system_instructions += 1;
        }
    }

    for (category, locations) in ctx.summary.iter() {
        tracing::info!(category = category.name(), count = locations.len(), "summary");
    }
    tracing::info!(system_instructions, "annotation done");

    Ok(AnnotationReport {
        mode: ctx.mode,
        heads: heads.len(),
        system_instructions,
        log: ctx.log,
        summary: ctx.summary,
    })
}

/// Annotate one head. Returns whether it was a system instruction.
pub fn annotate_head<D: Database + ?Sized>(
    db: &mut D,
    ctx: &mut AnalysisContext,
    address: Address,
) -> Result<bool> {
    let Some(insn) = classify(&*db, ctx.mode, address)? else {
        return Ok(false);
    };

    match decode(&*db, &insn)? {
        Decoded::Register(access) => {
            resolve(db, ctx, &access)?;
        }
        Decoded::Psr(write) => db.set_comment(address, 0, &write.to_string())?,
        Decoded::Pstate(write) => {
            if let Some(comment) = write.comment() {
                db.set_comment(address, 0, &comment)?;
            }
        }
        Decoded::Nothing => {}
    }

    record(db, ctx, &insn);

    if ctx.options.highlight {
        db.set_color(address, ctx.options.highlight_color)?;
    }
    Ok(true)
}

fn record<D: Database + ?Sized>(db: &D, ctx: &mut AnalysisContext, insn: &SystemInstruction) {
    let address = insn.address;
    if insn.interrupt_return {
        ctx.summary.record(
            SummaryCategory::ReturnFromInterrupt,
            Location::offset_or_address(db, address),
        );
    }
    if insn.is_system_call() {
        ctx.summary.record(
            SummaryCategory::SystemCalls,
            Location::offset_or_address(db, address),
        );
    } else if insn.is_crypto() {
        ctx.summary.record(
            SummaryCategory::Cryptography,
            Location::function_or_address(db, address),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{coproc_registers, system_registers};
    use crate::error::AnnotatorError;
    use crate::listing::Listing;
    use crate::resolve::register_comment;
    use crate::types::{Access, ArchMode};
    use pretty_assertions::assert_eq;

    fn locations(report: &AnnotationReport, category: SummaryCategory) -> Vec<String> {
        report
            .summary
            .locations(category)
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_sctlr_write_sequence() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .function("enable_mmu", 0x1000, 0x1010)
            .insn(0x1000, "MOV", &["R0", "#1"])
            .insn(0x1004, "ORR", &["R0", "R0", "#0x20"])
            .insn_word(0x1008, "MCR", &["0", "R0,c1,c0", "0"], 0xEE01_0F10)
            .insn(0x100C, "BX", &["LR"])
            .build();
        let report = annotate(&mut db).unwrap();

        assert_eq!(report.mode, ArchMode::Aarch32);
        assert_eq!(report.heads, 4);
        assert_eq!(report.system_instructions, 1);
        assert_eq!(db.comment(0x1008, 0), Some("[>] SCTLR (System Control Register)"));
        assert_eq!(
            db.comment(0x1004, 0),
            Some("Set bit CP15BEN (System instruction memory barrier enable)")
        );
        assert_eq!(db.comment(0x1000, 0), Some("Set bits M (MMU Enable)"));
        assert_eq!(db.color(0x1008), Some(0x000000));
        assert_eq!(db.color(0x1000), None);

        assert_eq!(report.log.len(), 1);
        assert_eq!(
            report.log[0].to_string(),
            "1008: [>] SCTLR (System Control Register)"
        );
    }

    #[test]
    fn test_no_false_positives() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .insn(0x1000, "ADD", &["R0", "R0", "#1"])
            .insn(0x1004, "LDR", &["R1", "[R0]"])
            .insn(0x1008, "MOV", &["PC", "LR"])
            .insn(0x100C, "LDM", &["SP!", "{R4,PC}"])
            .insn(0x1010, "mcr", &["0", "R0,c1,c0", "0"])
            .build();
        let report = annotate(&mut db).unwrap();

        assert_eq!(report.system_instructions, 0);
        assert!(report.log.is_empty());
        assert!(report.summary.is_empty());
        assert_eq!(db.annotations().count(), 0);
        for head in db.heads() {
            assert_eq!(db.color(head), None);
        }
    }

    #[test]
    fn test_coproc_catalog_round_trip() {
        for (key, descriptor) in coproc_registers() {
            let operands = [
                key.opc1.to_string(),
                format!("R0,c{},c{}", key.crn, key.crm),
                key.opc2.to_string(),
            ];
            let operands: Vec<&str> = operands.iter().map(String::as_str).collect();
            let coproc = u32::from(key.coproc) << 8;
            let mut db = Listing::builder(ArchMode::Aarch32)
                .insn_word(0x1000, "MRC", &operands, 0xEE10_0010 | coproc)
                .insn_word(0x1004, "MCR", &operands, 0xEE00_0010 | coproc)
                .build();
            annotate_with_options(&mut db, &AnnotatorOptions::registers_only()).unwrap();

            assert_eq!(
                db.comment(0x1000, 0),
                Some(register_comment(Access::Read, descriptor).as_str()),
                "{:?}",
                key
            );
            assert_eq!(
                db.comment(0x1004, 0),
                Some(register_comment(Access::Write, descriptor).as_str()),
                "{:?}",
                key
            );
        }
    }

    #[test]
    fn test_implementation_defined_never_summarized() {
        let mut builder = Listing::builder(ArchMode::Aarch64);
        let mut address = 0x1000;
        for (key, _) in system_registers().filter(|(key, _)| key.is_implementation_defined()) {
            let word = 0xD510_0000 | (u32::from(key.op0 - 2) << 19);
            let operands = [
                format!("#{}", key.op1),
                format!("c{}", key.crn),
                format!("c{}", key.crm),
                format!("#{}", key.op2),
                "X0".to_string(),
            ];
            let operands: Vec<&str> = operands.iter().map(String::as_str).collect();
            builder = builder.insn_word(address, "MSR", &operands, word);
            address += 4;
        }
        let mut db = builder.build();
        let report = annotate(&mut db).unwrap();

        assert!(report.system_instructions > 0);
        assert!(report.summary.is_empty());
        for line in &report.log {
            assert!(line.text.ends_with("(IMPLEMENTATION DEFINED)"), "{}", line);
        }
    }

    #[test]
    fn test_idempotent() {
        let build = || {
            Listing::builder(ArchMode::Aarch64)
                .function("el1_setup", 0x1000, 0x1010)
                .insn(0x1000, "MOV", &["X0", "#5"])
                .insn_word(0x1004, "MSR", &["#0", "c1", "c0", "#0", "X0"], 0xD518_1000)
                .insn(0x1008, "MSR", &["#6", "#0xF"])
                .insn(0x100C, "ERET", &[])
                .build()
        };
        let mut once = build();
        let first = annotate(&mut once).unwrap();
        let mut twice = build();
        annotate(&mut twice).unwrap();
        let second = annotate(&mut twice).unwrap();

        let dump = |db: &Listing| {
            let mut out = Vec::new();
            db.to_writer(&mut out).unwrap();
            String::from_utf8(out).unwrap()
        };
        assert_eq!(dump(&once), dump(&twice));
        assert_eq!(first.log, second.log);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_categories() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .function("mmu_init", 0x1000, 0x1100)
            .insn_word(0x1010, "MCRR", &["0", "R0,R1,c2"], 0xEC41_0F02)
            .insn(0x1014, "SVC", &["0"])
            .insn(0x1018, "SUBS", &["PC", "LR", "#4"])
            .build();
        let report = annotate(&mut db).unwrap();
        assert_eq!(locations(&report, SummaryCategory::PageTable), vec!["mmu_init+0x10"]);
        assert_eq!(locations(&report, SummaryCategory::SystemCalls), vec!["mmu_init+0x14"]);
        assert_eq!(
            locations(&report, SummaryCategory::ReturnFromInterrupt),
            vec!["mmu_init+0x18"]
        );

        let mut db = Listing::builder(ArchMode::Aarch64)
            .function("aes_block", 0x3000, 0x3010)
            .insn_word(0x2000, "MSR", &["#0", "c12", "c0", "#0", "X0"], 0xD518_C000)
            .insn(0x3004, "AESE", &["V0.16B", "V1.16B"])
            .build();
        let report = annotate(&mut db).unwrap();
        assert_eq!(
            db.comment(0x2000, 0),
            Some("[>] VBAR_EL1 (Vector Base Address Register (EL1))")
        );
        assert_eq!(locations(&report, SummaryCategory::InterruptVectors), vec!["0x2000"]);
        assert_eq!(locations(&report, SummaryCategory::Cryptography), vec!["aes_block"]);
    }

    #[test]
    fn test_status_register_writes() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .insn(0x1000, "MSR", &["CPSR_c", "#0xD3"])
            .build();
        annotate(&mut db).unwrap();
        assert_eq!(db.comment(0x1000, 0), Some("Set CPSR [--IF-], Mode: Supervisor"));

        let mut db = Listing::builder(ArchMode::Aarch64)
            .insn(0x1000, "MSR", &["#7", "#2"])
            .insn(0x1004, "MSR", &["#5", "#1"])
            .build();
        annotate(&mut db).unwrap();
        assert_eq!(db.comment(0x1000, 0), Some("Clr PSTATE.DAIF [--I-]"));
        assert_eq!(db.comment(0x1004, 0), Some("Select PSTATE.SP = SP_ELx"));
    }

    #[test]
    fn test_highlight_options() {
        let build = || {
            Listing::builder(ArchMode::Aarch64)
                .insn(0x1000, "DSB", &["SY"])
                .build()
        };

        let mut db = build();
        let options = AnnotatorOptions {
            highlight_color: 0x202020,
            ..AnnotatorOptions::new()
        };
        annotate_with_options(&mut db, &options).unwrap();
        assert_eq!(db.color(0x1000), Some(0x202020));

        let mut db = build();
        let report = annotate_with_options(&mut db, &AnnotatorOptions::comments_only()).unwrap();
        assert_eq!(report.system_instructions, 1);
        assert_eq!(db.color(0x1000), None);
    }

    #[test]
    fn test_unsupported_architecture() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .processor("mipsl")
            .insn(0x1000, "SYSCALL", &[])
            .build();
        let err = annotate(&mut db).unwrap_err();
        assert!(matches!(err, AnnotatorError::UnsupportedArchitecture { .. }));
        assert_eq!(db.color(0x1000), None);
    }

    #[test]
    fn test_missing_encoding_aborts() {
        let mut db = Listing::builder(ArchMode::Aarch32)
            .insn(0x1000, "MCR", &["0", "R0,c1,c0", "0"])
            .build();
        assert!(matches!(
            annotate(&mut db),
            Err(AnnotatorError::UnknownAddress { address: 0x1000 })
        ));
    }
}
