//! Register catalogs.
//!
//! Immutable tables mapping an architecture encoding to the register (or
//! registers) it selects, plus bit layouts for the registers whose written
//! values are worth decoding. The tables are built into static slices and
//! indexed into hash maps on first use.

mod aarch32;
mod aarch64;

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

/// A named register and its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterName {
    /// Canonical name (e.g. `SCTLR`, `DC CIVAC`).
    pub name: &'static str,
    /// Human description from the architecture reference.
    pub description: &'static str,
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description)
    }
}

/// Every register an encoding selects, most common name first.
pub type RegisterDescriptor = &'static [RegisterName];

type Entry<K> = (K, RegisterDescriptor);

const fn r(name: &'static str, description: &'static str) -> RegisterName {
    RegisterName { name, description }
}

/// `MRRC`/`MCRR` key: coprocessor, opc1, CRm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coproc64Key {
    pub coproc: u8,
    pub opc1: u8,
    pub crm: u8,
}

impl Coproc64Key {
    pub const fn new(coproc: u8, opc1: u8, crm: u8) -> Self {
        Self { coproc, opc1, crm }
    }
}

/// `MRC`/`MCR` key: coprocessor, CRn, opc1, CRm, opc2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CoprocKey {
    pub coproc: u8,
    pub crn: u8,
    pub opc1: u8,
    pub crm: u8,
    pub opc2: u8,
}

impl CoprocKey {
    pub const fn new(coproc: u8, crn: u8, opc1: u8, crm: u8, opc2: u8) -> Self {
        Self {
            coproc,
            crn,
            opc1,
            crm,
            opc2,
        }
    }
}

/// `MRS`/`MSR` key: op0, op1, CRn, CRm, op2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SysRegKey {
    pub op0: u8,
    pub op1: u8,
    pub crn: u8,
    pub crm: u8,
    pub op2: u8,
}

impl SysRegKey {
    pub const fn new(op0: u8, op1: u8, crn: u8, crm: u8, op2: u8) -> Self {
        Self {
            op0,
            op1,
            crn,
            crm,
            op2,
        }
    }

    /// Encodings in op0 = 3 with CRn or CRm of 11 or 15 are left to
    /// implementations and never looked up.
    pub fn is_implementation_defined(&self) -> bool {
        self.op0 == 0b11 && [self.crn, self.crm].iter().any(|&c| matches!(c, 11 | 15))
    }

    /// Generic `S<op0>_<op1>_C<n>_C<m>_<op2>` spelling.
    pub fn generic_name(&self) -> String {
        format!(
            "S{}_{}_C{}_C{}_{}",
            self.op0, self.op1, self.crn, self.crm, self.op2
        )
    }
}

/// `SYS`/`SYSL` key: op1, CRn, CRm, op2 (op0 is always 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SysInsnKey {
    pub op1: u8,
    pub crn: u8,
    pub crm: u8,
    pub op2: u8,
}

impl SysInsnKey {
    pub const fn new(op1: u8, crn: u8, crm: u8, op2: u8) -> Self {
        Self { op1, crn, crm, op2 }
    }
}

/// Lookup key, one shape per instruction family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum RegisterKey {
    Coproc64(Coproc64Key),
    Coproc(CoprocKey),
    SysReg(SysRegKey),
    SysInsn(SysInsnKey),
}

impl RegisterKey {
    /// Registers this key selects, if catalogued.
    pub fn lookup(&self) -> Option<RegisterDescriptor> {
        match self {
            RegisterKey::Coproc64(key) => coproc64_register(key),
            RegisterKey::Coproc(key) => coproc_register(key),
            RegisterKey::SysReg(key) => system_register(key),
            RegisterKey::SysInsn(key) => system_instruction(key),
        }
    }

    /// Bit layout of a register reached through this key's family.
    ///
    /// Only 32-bit coprocessor moves and AArch64 system register moves
    /// carry layouts.
    pub fn fields(&self, name: &str) -> Option<&'static [FieldSpec]> {
        match self {
            RegisterKey::Coproc(_) => aarch32_fields(name),
            RegisterKey::SysReg(_) => aarch64_fields(name),
            RegisterKey::Coproc64(_) | RegisterKey::SysInsn(_) => None,
        }
    }
}

/// Position of a field within a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// A single bit.
    Bit(u8),
    /// `width` bits starting at `offset`.
    Range { offset: u8, width: u8 },
}

impl FieldKind {
    /// Lowest bit position.
    pub fn offset(&self) -> u8 {
        match *self {
            FieldKind::Bit(bit) => bit,
            FieldKind::Range { offset, .. } => offset,
        }
    }

    /// Number of bits covered.
    pub fn width(&self) -> u8 {
        match *self {
            FieldKind::Bit(_) => 1,
            FieldKind::Range { width, .. } => width,
        }
    }

    /// Mask of the covered bits in place.
    pub fn mask(&self) -> u64 {
        let width = u32::from(self.width());
        let ones = if width >= 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        ones.checked_shl(u32::from(self.offset())).unwrap_or(0)
    }
}

/// A named bit or bit range of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub name: &'static str,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn bit(bit: u8, name: &'static str, description: &'static str) -> Self {
        Self {
            kind: FieldKind::Bit(bit),
            name,
            description,
        }
    }

    pub const fn range(
        offset: u8,
        width: u8,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            kind: FieldKind::Range { offset, width },
            name,
            description,
        }
    }
}

/// A field touched by a value, with the value it takes when it is a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: FieldSpec,
    /// Field value shifted down to bit 0, for ranges.
    pub value: Option<u64>,
}

impl FieldMatch {
    /// `name` for bits, `name=value` for ranges with a value.
    pub fn label(&self) -> String {
        match self.value {
            Some(value) => format!("{}={}", self.field.name, value),
            None => self.field.name.to_string(),
        }
    }
}

/// Fields with at least one bit set in `value`, in table order.
///
/// With `with_values`, range fields carry the value they hold.
pub fn fields_in(fields: &[FieldSpec], value: u64, with_values: bool) -> Vec<FieldMatch> {
    fields
        .iter()
        .filter_map(|field| {
            let masked = value & field.kind.mask();
            if masked == 0 {
                return None;
            }
            let value = match field.kind {
                FieldKind::Range { offset, .. } if with_values => Some(masked >> offset),
                _ => None,
            };
            Some(FieldMatch {
                field: *field,
                value,
            })
        })
        .collect()
}

/// Exact lookup of the field at `offset`/`width`.
///
/// Single-bit extractions also match a one-bit range entry.
pub fn find_field(fields: &[FieldSpec], offset: u8, width: u8) -> Option<&FieldSpec> {
    let wanted = if width > 1 {
        FieldKind::Range { offset, width }
    } else {
        FieldKind::Bit(offset)
    };
    let exact = fields.iter().find(|field| field.kind == wanted);
    if exact.is_some() || width > 1 {
        return exact;
    }
    fields
        .iter()
        .find(|field| field.kind == FieldKind::Range { offset, width: 1 })
}

fn index<K: Copy + Eq + Hash>(entries: &'static [Entry<K>]) -> HashMap<K, RegisterDescriptor> {
    let mut map = HashMap::with_capacity(entries.len());
    for &(key, names) in entries {
        map.entry(key).or_insert(names);
    }
    map
}

fn named(tables: &'static [(&'static str, &'static [FieldSpec])]) -> HashMap<&'static str, &'static [FieldSpec]> {
    tables.iter().copied().collect()
}

/// AArch32 64-bit coprocessor register lookup.
pub fn coproc64_register(key: &Coproc64Key) -> Option<RegisterDescriptor> {
    static MAP: OnceLock<HashMap<Coproc64Key, RegisterDescriptor>> = OnceLock::new();
    MAP.get_or_init(|| index(aarch32::COPROC64_REGISTERS))
        .get(key)
        .copied()
}

/// AArch32 32-bit coprocessor register lookup.
pub fn coproc_register(key: &CoprocKey) -> Option<RegisterDescriptor> {
    static MAP: OnceLock<HashMap<CoprocKey, RegisterDescriptor>> = OnceLock::new();
    MAP.get_or_init(|| index(aarch32::COPROC_REGISTERS))
        .get(key)
        .copied()
}

/// AArch64 system register lookup.
pub fn system_register(key: &SysRegKey) -> Option<RegisterDescriptor> {
    static MAP: OnceLock<HashMap<SysRegKey, RegisterDescriptor>> = OnceLock::new();
    MAP.get_or_init(|| index(aarch64::SYSTEM_REGISTERS))
        .get(key)
        .copied()
}

/// AArch64 `SYS`/`SYSL` operation lookup.
pub fn system_instruction(key: &SysInsnKey) -> Option<RegisterDescriptor> {
    static MAP: OnceLock<HashMap<SysInsnKey, RegisterDescriptor>> = OnceLock::new();
    MAP.get_or_init(|| index(aarch64::SYSTEM_INSTRUCTIONS))
        .get(key)
        .copied()
}

/// Bit layout of an AArch32 register by canonical name.
pub fn aarch32_fields(name: &str) -> Option<&'static [FieldSpec]> {
    static MAP: OnceLock<HashMap<&'static str, &'static [FieldSpec]>> = OnceLock::new();
    MAP.get_or_init(|| named(aarch32::FIELDS)).get(name).copied()
}

/// Bit layout of an AArch64 system register by canonical name.
pub fn aarch64_fields(name: &str) -> Option<&'static [FieldSpec]> {
    static MAP: OnceLock<HashMap<&'static str, &'static [FieldSpec]>> = OnceLock::new();
    MAP.get_or_init(|| named(aarch64::FIELDS)).get(name).copied()
}

/// Iterate over every catalogued 32-bit coprocessor encoding.
pub fn coproc_registers() -> impl Iterator<Item = (CoprocKey, RegisterDescriptor)> {
    aarch32::COPROC_REGISTERS.iter().copied()
}

/// Iterate over every catalogued AArch64 system register encoding.
pub fn system_registers() -> impl Iterator<Item = (SysRegKey, RegisterDescriptor)> {
    aarch64::SYSTEM_REGISTERS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overlap(tables: &[(&str, &[FieldSpec])]) {
        for (register, fields) in tables {
            let mut used = 0u64;
            for field in fields.iter() {
                assert!(
                    u32::from(field.kind.offset()) + u32::from(field.kind.width()) <= 64,
                    "{}.{} is wider than the register",
                    register,
                    field.name
                );
                assert_eq!(
                    used & field.kind.mask(),
                    0,
                    "{}.{} overlaps another field",
                    register,
                    field.name
                );
                used |= field.kind.mask();
            }
        }
    }

    #[test]
    fn test_field_tables_do_not_overlap() {
        no_overlap(aarch32::FIELDS);
        no_overlap(aarch64::FIELDS);
    }

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(
            index(aarch32::COPROC64_REGISTERS).len(),
            aarch32::COPROC64_REGISTERS.len()
        );
        assert_eq!(
            index(aarch32::COPROC_REGISTERS).len(),
            aarch32::COPROC_REGISTERS.len()
        );
        assert_eq!(
            index(aarch64::SYSTEM_REGISTERS).len(),
            aarch64::SYSTEM_REGISTERS.len()
        );
        assert_eq!(
            index(aarch64::SYSTEM_INSTRUCTIONS).len(),
            aarch64::SYSTEM_INSTRUCTIONS.len()
        );
    }

    #[test]
    fn test_coproc_lookup() {
        let sctlr = coproc_register(&CoprocKey::new(15, 1, 0, 0, 0)).unwrap();
        assert_eq!(sctlr.len(), 1);
        assert_eq!(sctlr[0].name, "SCTLR");

        let ttbr0 = coproc64_register(&Coproc64Key::new(15, 0, 2)).unwrap();
        assert_eq!(ttbr0[0].name, "TTBR0");

        assert!(coproc_register(&CoprocKey::new(7, 0, 0, 0, 0)).is_none());
    }

    #[test]
    fn test_system_register_lookup() {
        let vbar = system_register(&SysRegKey::new(3, 0, 12, 0, 0)).unwrap();
        assert_eq!(vbar[0].name, "VBAR_EL1");
        assert_eq!(
            vbar[0].to_string(),
            "VBAR_EL1 (Vector Base Address Register (EL1))"
        );
    }

    #[test]
    fn test_aliased_encodings_keep_every_name() {
        let names: Vec<_> = system_register(&SysRegKey::new(3, 0, 12, 8, 0))
            .unwrap()
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["ICC_IAR0_EL1", "ICV_IAR0_EL1"]);
    }

    #[test]
    fn test_implementation_defined_range() {
        assert!(SysRegKey::new(3, 0, 15, 2, 0).is_implementation_defined());
        assert!(SysRegKey::new(3, 1, 11, 0, 3).is_implementation_defined());
        assert!(SysRegKey::new(3, 0, 1, 15, 0).is_implementation_defined());
        assert!(!SysRegKey::new(2, 0, 15, 2, 0).is_implementation_defined());
        assert!(!SysRegKey::new(3, 0, 1, 0, 0).is_implementation_defined());
        assert_eq!(SysRegKey::new(3, 0, 15, 2, 0).generic_name(), "S3_0_C15_C2_0");
    }

    #[test]
    fn test_fields_in() {
        let sctlr = aarch32_fields("SCTLR").unwrap();
        let names: Vec<_> = fields_in(sctlr, 0b10_0001, false)
            .iter()
            .map(|m| m.field.name)
            .collect();
        assert_eq!(names, ["M", "CP15BEN"]);

        let midr = aarch32_fields("MIDR").unwrap();
        let labels: Vec<_> = fields_in(midr, 0x4100_0000 | 0xC09 << 4, true)
            .iter()
            .map(FieldMatch::label)
            .collect();
        assert_eq!(labels, ["PartNum=3081", "Implementer=65"]);
    }

    #[test]
    fn test_find_field() {
        let midr = aarch32_fields("MIDR").unwrap();
        assert_eq!(find_field(midr, 24, 8).unwrap().name, "Implementer");
        assert!(find_field(midr, 24, 4).is_none());

        let sctlr = aarch32_fields("SCTLR").unwrap();
        assert_eq!(find_field(sctlr, 0, 1).unwrap().name, "M");
    }

    #[test]
    fn test_field_mask() {
        assert_eq!(FieldKind::Bit(63).mask(), 1 << 63);
        assert_eq!(FieldKind::Range { offset: 4, width: 12 }.mask(), 0xFFF0);
        assert_eq!(FieldKind::Range { offset: 0, width: 64 }.mask(), u64::MAX);
    }
}
