//! ARM System Instruction Annotator
//!
//! This library finds the system-level instructions in an ARM or AArch64
//! disassembly listing and explains them: which system register a
//! coprocessor or `MRS`/`MSR` move touches, which cache or TLB operation a
//! `SYS` performs, which fields of a register the surrounding code sets or
//! tests, and where the interesting ones (page table setup, vector tables,
//! exception returns, system calls, crypto) live.
//!
//! # Features
//!
//! - **Register Catalogs**: AArch32 coprocessor and AArch64 system register
//!   encodings with names, descriptions and bit layouts
//! - **Field Recovery**: Follows the moved register through straight-line
//!   code and comments the fields each instruction sets, clears or tests
//! - **Summary**: Groups notable instructions by category
//! - **Host Abstraction**: Works over any [`Database`]; [`Listing`] reads
//!   JSON listings exported from a disassembler
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use arm_sysinsn::{annotate, Listing};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut listing = Listing::load("firmware.json")?;
//!     let report = annotate(&mut listing)?;
//!     for line in &report.log {
//!         println!("{}", line);
//!     }
//!     listing.save("firmware.annotated.json")?;
//!     Ok(())
//! }
//! ```
//!
//! # Building a Listing by Hand
//!
//! ```rust
//! use arm_sysinsn::{annotate, ArchMode, Listing};
//!
//! let mut listing = Listing::builder(ArchMode::Aarch32)
//!     .insn(0x1000, "MOV", &["R0", "#1"])
//!     .insn_word(0x1004, "MCR", &["0", "R0,c1,c0", "0"], 0xEE01_0F10)
//!     .build();
//! let report = annotate(&mut listing)?;
//! assert_eq!(report.system_instructions, 1);
//! assert_eq!(listing.comment(0x1000, 0), Some("Set bits M (MMU Enable)"));
//! # Ok::<(), arm_sysinsn::AnnotatorError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]

pub mod catalog;
pub mod classify;
pub mod dataflow;
pub mod decode;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod host;
pub mod listing;
pub mod psr;
pub mod resolve;
pub mod types;

pub use driver::{annotate, annotate_with_options};
pub use error::{AnnotatorError, Result};
pub use host::{Address, Database};
pub use listing::Listing;
pub use types::{
    Access, AnalysisContext, AnnotationReport, AnnotatorOptions, ArchMode, Location, LogLine,
    Summary, SummaryCategory,
};

/// Get version information for this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }

    #[test]
    fn test_annotate_loaded_listing() {
        let json = r##"{
            "processor": "ARM",
            "pointer_width": 64,
            "functions": [{ "name": "el3_entry", "start": 0, "end": 16 }],
            "instructions": [
                { "address": 0, "mnemonic": "ADR", "operands": ["X0", "vectors"] },
                { "address": 4, "mnemonic": "MSR",
                  "operands": ["#6", "c12", "c0", "#0", "X0"], "bytes": "00c01ed5" },
                { "address": 8, "mnemonic": "ISB" },
                { "address": 12, "mnemonic": "ERET" }
            ]
        }"##;
        let mut listing = Listing::from_json(json).unwrap();
        let report = annotate(&mut listing).unwrap();

        assert_eq!(report.mode, ArchMode::Aarch64);
        assert_eq!(report.system_instructions, 3);
        assert_eq!(
            listing.comment(4, 0),
            Some("[>] VBAR_EL3 (Vector Base Address Register (EL3))")
        );
        let vectors: Vec<_> = report
            .summary
            .locations(SummaryCategory::InterruptVectors)
            .map(ToString::to_string)
            .collect();
        assert_eq!(vectors, vec!["el3_entry+0x4"]);
        let returns: Vec<_> = report
            .summary
            .locations(SummaryCategory::ReturnFromInterrupt)
            .map(ToString::to_string)
            .collect();
        assert_eq!(returns, vec!["el3_entry+0xc"]);
    }
}
