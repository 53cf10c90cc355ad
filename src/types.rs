//! Core types for the annotator.
//!
//! This module defines the per-run analysis context, the options that
//! tune a run, and the categorized summary and log handed back to the
//! caller once every instruction head has been visited.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{AnnotatorError, Result};
use crate::host::{Address, Database};

/// Execution state the binary is analyzed in.
///
/// Fixed for the whole run; mid-binary interworking between AArch32 and
/// AArch64 is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchMode {
    /// 32-bit ARM (A32/T32).
    Aarch32,
    /// 64-bit ARM (A64).
    Aarch64,
}

impl ArchMode {
    /// Pick the mode from the host's processor name and pointer width.
    pub fn detect(processor: &str, pointer_width: u32) -> Result<Self> {
        match processor {
            "ARM" | "ARMB" if pointer_width == 64 => Ok(ArchMode::Aarch64),
            "ARM" | "ARMB" => Ok(ArchMode::Aarch32),
            _ => Err(AnnotatorError::UnsupportedArchitecture {
                processor: processor.to_string(),
                pointer_width,
            }),
        }
    }
}

impl fmt::Display for ArchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchMode::Aarch32 => write!(f, "aarch32"),
            ArchMode::Aarch64 => write!(f, "aarch64"),
        }
    }
}

/// Direction of a system register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Register is read into a general-purpose register.
    Read,
    /// Register is written from a general-purpose register.
    Write,
}

impl Access {
    /// Direction from a move mnemonic: `MRC`, `MRRC`, `MRS` read; `MCR`,
    /// `MCRR`, `MSR` write.
    pub fn from_mnemonic(mnemonic: &str) -> Self {
        if mnemonic.as_bytes().get(1) == Some(&b'R') {
            Access::Read
        } else {
            Access::Write
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "<"),
            Access::Write => write!(f, ">"),
        }
    }
}

/// Coarse categories collected while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SummaryCategory {
    /// Translation table base register writes and reads.
    #[serde(rename = "Page table")]
    PageTable,
    /// Vector base address register accesses.
    #[serde(rename = "Interrupt vectors")]
    InterruptVectors,
    /// Exception return sequences.
    #[serde(rename = "Return from interrupt")]
    ReturnFromInterrupt,
    /// Supervisor, hypervisor and secure monitor calls.
    #[serde(rename = "System calls")]
    SystemCalls,
    /// Cryptographic extension instructions.
    #[serde(rename = "Cryptography")]
    Cryptography,
}

impl SummaryCategory {
    /// All categories in report order.
    pub const ALL: [SummaryCategory; 5] = [
        SummaryCategory::PageTable,
        SummaryCategory::InterruptVectors,
        SummaryCategory::ReturnFromInterrupt,
        SummaryCategory::SystemCalls,
        SummaryCategory::Cryptography,
    ];

    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            SummaryCategory::PageTable => "Page table",
            SummaryCategory::InterruptVectors => "Interrupt vectors",
            SummaryCategory::ReturnFromInterrupt => "Return from interrupt",
            SummaryCategory::SystemCalls => "System calls",
            SummaryCategory::Cryptography => "Cryptography",
        }
    }
}

impl fmt::Display for SummaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a categorized instruction lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    /// Offset from the start of the enclosing function.
    Offset { function: String, offset: u64 },
    /// Enclosing function only.
    Function(String),
    /// Raw address, when no function encloses it.
    Address(Address),
}

impl Location {
    /// `function+0xoff` when a function encloses `address`, else the address.
    pub fn offset_or_address<D: Database + ?Sized>(db: &D, address: Address) -> Self {
        let Some(function) = db.function_name(address).filter(|name| !name.is_empty()) else {
            return Location::Address(address);
        };
        match db
            .function_start(&function)
            .and_then(|start| address.checked_sub(start))
        {
            Some(offset) => Location::Offset { function, offset },
            None => Location::Address(address),
        }
    }

    /// The enclosing function's name, else the address.
    pub fn function_or_address<D: Database + ?Sized>(db: &D, address: Address) -> Self {
        match db.function_name(address).filter(|name| !name.is_empty()) {
            Some(function) => Location::Function(function),
            None => Location::Address(address),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Offset { function, offset } => write!(f, "{}+{:#x}", function, offset),
            Location::Function(function) => write!(f, "{}", function),
            Location::Address(address) => write!(f, "{:#x}", address),
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Category-to-locations mapping built during one pass.
///
/// Every category is present from the start, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    categories: BTreeMap<SummaryCategory, BTreeSet<Location>>,
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl Summary {
    /// Create a summary with all categories empty.
    pub fn new() -> Self {
        Self {
            categories: SummaryCategory::ALL
                .iter()
                .map(|&category| (category, BTreeSet::new()))
                .collect(),
        }
    }

    /// Record a location under a category.
    pub fn record(&mut self, category: SummaryCategory, location: Location) {
        self.categories.entry(category).or_default().insert(location);
    }

    /// Locations recorded under a category.
    pub fn locations(&self, category: SummaryCategory) -> impl Iterator<Item = &Location> {
        self.categories.get(&category).into_iter().flatten()
    }

    /// Number of locations recorded under a category.
    pub fn len(&self, category: SummaryCategory) -> usize {
        self.categories.get(&category).map_or(0, BTreeSet::len)
    }

    /// True when no category holds any location.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeSet::is_empty)
    }

    /// Iterate over categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = (SummaryCategory, &BTreeSet<Location>)> {
        self.categories.iter().map(|(category, set)| (*category, set))
    }
}

/// One diagnostic line: an annotation as written at an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    /// Address of the annotated instruction.
    pub address: Address,
    /// Annotation text.
    pub text: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}: {}", self.address, self.text)
    }
}

/// Everything a run hands back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationReport {
    /// Mode the run was performed in.
    pub mode: ArchMode,
    /// Number of instruction heads visited.
    pub heads: usize,
    /// Number of heads classified as system instructions.
    pub system_instructions: usize,
    /// Register annotations in address order.
    pub log: Vec<LogLine>,
    /// Categorized locations.
    pub summary: Summary,
}

/// Options for annotation behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorOptions {
    /// Background color applied to every system instruction.
    pub highlight_color: u32,
    /// Apply `highlight_color` at all.
    pub highlight: bool,
    /// Recover field values feeding register accesses.
    pub track_fields: bool,
    /// Maximum heads a single field walk may visit (`None` is unbounded).
    pub scan_limit: Option<usize>,
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotatorOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self {
            highlight_color: 0x000000,
            highlight: true,
            track_fields: true,
            scan_limit: Some(256),
        }
    }

    /// Comments only; leave item colors alone.
    pub fn comments_only() -> Self {
        Self {
            highlight: false,
            ..Self::new()
        }
    }

    /// Annotate register accesses without walking into their operands.
    pub fn registers_only() -> Self {
        Self {
            track_fields: false,
            ..Self::new()
        }
    }
}

/// State threaded through one annotation pass.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// Mode established at the start of the run.
    pub mode: ArchMode,
    /// Pointer width reported by the host.
    pub pointer_width: u32,
    /// Options for this run.
    pub options: AnnotatorOptions,
    /// Categories populated while scanning.
    pub summary: Summary,
    /// Register annotations produced so far.
    pub log: Vec<LogLine>,
}

impl AnalysisContext {
    /// Create a context for an explicit mode.
    pub fn new(mode: ArchMode, options: AnnotatorOptions) -> Self {
        let pointer_width = match mode {
            ArchMode::Aarch32 => 32,
            ArchMode::Aarch64 => 64,
        };
        Self {
            mode,
            pointer_width,
            options,
            summary: Summary::new(),
            log: Vec::new(),
        }
    }

    /// Create a context from what the host reports about its target.
    pub fn detect<D: Database + ?Sized>(db: &D, options: AnnotatorOptions) -> Result<Self> {
        let pointer_width = db.pointer_width();
        let mode = ArchMode::detect(&db.processor_name(), pointer_width)?;
        Ok(Self {
            pointer_width,
            ..Self::new(mode, options)
        })
    }

    /// Record a diagnostic annotation line.
    pub fn log(&mut self, address: Address, text: impl Into<String>) {
        let line = LogLine {
            address,
            text: text.into(),
        };
        tracing::debug!(address = line.address, "{}", line.text);
        self.log.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arch_detection() {
        assert_eq!(ArchMode::detect("ARM", 32).unwrap(), ArchMode::Aarch32);
        assert_eq!(ArchMode::detect("ARMB", 32).unwrap(), ArchMode::Aarch32);
        assert_eq!(ArchMode::detect("ARM", 64).unwrap(), ArchMode::Aarch64);
        assert!(matches!(
            ArchMode::detect("metapc", 64),
            Err(AnnotatorError::UnsupportedArchitecture { .. })
        ));
    }

    #[test]
    fn test_access_from_mnemonic() {
        assert_eq!(Access::from_mnemonic("MRC"), Access::Read);
        assert_eq!(Access::from_mnemonic("MRRC2"), Access::Read);
        assert_eq!(Access::from_mnemonic("MRS"), Access::Read);
        assert_eq!(Access::from_mnemonic("MCR"), Access::Write);
        assert_eq!(Access::from_mnemonic("MSR"), Access::Write);
        assert_eq!(Access::Read.to_string(), "<");
        assert_eq!(Access::Write.to_string(), ">");
    }

    #[test]
    fn test_location_display() {
        let loc = Location::Offset {
            function: "reset".to_string(),
            offset: 0x1c,
        };
        assert_eq!(loc.to_string(), "reset+0x1c");
        assert_eq!(Location::Function("el1_entry".into()).to_string(), "el1_entry");
        assert_eq!(Location::Address(0x8000).to_string(), "0x8000");
    }

    #[test]
    fn test_summary_starts_with_every_category() {
        let mut summary = Summary::new();
        assert!(summary.is_empty());
        assert_eq!(summary.iter().count(), 5);

        summary.record(SummaryCategory::SystemCalls, Location::Address(0x10));
        summary.record(SummaryCategory::SystemCalls, Location::Address(0x10));
        assert_eq!(summary.len(SummaryCategory::SystemCalls), 1);
        assert_eq!(summary.len(SummaryCategory::PageTable), 0);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_options() {
        let default = AnnotatorOptions::new();
        assert!(default.highlight);
        assert!(default.track_fields);
        assert!(!AnnotatorOptions::comments_only().highlight);
        assert!(!AnnotatorOptions::registers_only().track_fields);
    }

    #[test]
    fn test_log_line_format() {
        let line = LogLine {
            address: 0xFFFF0010,
            text: "[>] SCTLR (System Control Register)".to_string(),
        };
        assert_eq!(line.to_string(), "ffff0010: [>] SCTLR (System Control Register)");
    }
}
