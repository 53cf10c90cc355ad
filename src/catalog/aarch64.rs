//! AArch64 system register and system instruction encodings.

use super::{r, Entry, FieldSpec, SysInsnKey, SysRegKey};

/// Registers reached through `MRS`/`MSR` (op0 of 2 or 3).
#[rustfmt::skip]
pub(super) static SYSTEM_REGISTERS: &[Entry<SysRegKey>] = &[
    (SysRegKey::new(3, 0, 4, 2, 2), &[r("CurrentEL", "Current Exception Level")]),
    (SysRegKey::new(3, 3, 4, 2, 1), &[r("DAIF", "Interrupt Mask Bits")]),
    (SysRegKey::new(3, 0, 4, 0, 1), &[r("ELR_EL1", "Exception Link Register (EL1)")]),
    (SysRegKey::new(3, 4, 4, 0, 1), &[r("ELR_EL2", "Exception Link Register (EL2)")]),
    (SysRegKey::new(3, 5, 4, 0, 1), &[r("ELR_EL12", "Exception Link Register (EL1)")]),
    (SysRegKey::new(3, 6, 4, 0, 1), &[r("ELR_EL3", "Exception Link Register (EL3)")]),
    (SysRegKey::new(3, 3, 4, 4, 1), &[r("FPSR", "Floating-point Status Register")]),
    (SysRegKey::new(3, 3, 4, 4, 0), &[r("FPCR", "Floating-point Control Register")]),
    (SysRegKey::new(3, 3, 4, 2, 0), &[r("NZCV", "Condition Flags")]),
    (SysRegKey::new(3, 0, 4, 1, 0), &[r("SP_EL0", "Stack Pointer (EL0)")]),
    (SysRegKey::new(3, 4, 4, 1, 0), &[r("SP_EL1", "Stack Pointer (EL1)")]),
    (SysRegKey::new(3, 6, 4, 1, 0), &[r("SP_EL2", "Stack Pointer (EL2)")]),
    (SysRegKey::new(3, 0, 4, 2, 0), &[r("SPSel", "Stack Pointer Select")]),
    (SysRegKey::new(3, 4, 4, 3, 1), &[r("SPSR_abt", "Saved Program Status Register (Abort mode)")]),
    (SysRegKey::new(3, 0, 4, 0, 0), &[r("SPSR_EL1", "Saved Program Status Register (EL1)")]),
    (SysRegKey::new(3, 4, 4, 0, 0), &[r("SPSR_EL2", "Saved Program Status Register (EL2)")]),
    (SysRegKey::new(3, 5, 4, 0, 0), &[r("SPSR_EL12", "Saved Program Status Register (EL1)")]),
    (SysRegKey::new(3, 6, 4, 0, 0), &[r("SPSR_EL3", "Saved Program Status Register (EL3)")]),
    (SysRegKey::new(3, 4, 4, 3, 3), &[r("SPSR_fiq", "Saved Program Status Register (FIQ mode)")]),
    (SysRegKey::new(3, 4, 4, 3, 0), &[r("SPSR_irq", "Saved Program Status Register (IRQ mode)")]),
    (SysRegKey::new(3, 4, 4, 3, 2), &[r("SPSR_und", "Saved Program Status Register (Undefined mode)")]),
    (SysRegKey::new(3, 3, 4, 2, 5), &[r("DIT", "Data Independent Timing")]),
    (SysRegKey::new(3, 3, 4, 2, 6), &[r("SSBS", "Speculative Store Bypass Safe")]),
    (SysRegKey::new(3, 3, 4, 2, 7), &[r("TCO", "Tag Check Override")]),
    (SysRegKey::new(3, 0, 1, 0, 1), &[r("ACTLR_EL1", "Auxiliary Control Register (EL1)")]),
    (SysRegKey::new(3, 4, 1, 0, 1), &[r("ACTLR_EL2", "Auxiliary Control Register (EL2)")]),
    (SysRegKey::new(3, 6, 1, 0, 1), &[r("ACTLR_EL3", "Auxiliary Control Register (EL3)")]),
    (SysRegKey::new(3, 0, 4, 2, 3), &[r("PAN", "Privileged Access Never")]),
    (SysRegKey::new(3, 0, 4, 2, 4), &[r("UAO", "User Access Override")]),
    (SysRegKey::new(3, 0, 5, 1, 0), &[r("AFSR0_EL1", "Auxiliary Fault Status Register 0 (EL1)")]),
    (SysRegKey::new(3, 4, 5, 1, 0), &[r("AFSR0_EL2", "Auxiliary Fault Status Register 0 (EL2)")]),
    (SysRegKey::new(3, 5, 5, 1, 0), &[r("AFSR0_EL12", "Auxiliary Fault Status Register 0 (EL1)")]),
    (SysRegKey::new(3, 6, 5, 1, 0), &[r("AFSR0_EL3", "Auxiliary Fault Status Register 0 (EL3)")]),
    (SysRegKey::new(3, 0, 5, 1, 1), &[r("AFSR1_EL1", "Auxiliary Fault Status Register 1 (EL1)")]),
    (SysRegKey::new(3, 4, 5, 1, 1), &[r("AFSR1_EL2", "Auxiliary Fault Status Register 1 (EL2)")]),
    (SysRegKey::new(3, 5, 5, 1, 1), &[r("AFSR1_EL12", "Auxiliary Fault Status Register 1 (EL1)")]),
    (SysRegKey::new(3, 6, 5, 1, 1), &[r("AFSR1_EL3", "Auxiliary Fault Status Register 1 (EL3)")]),
    (SysRegKey::new(3, 1, 0, 0, 7), &[r("AIDR_EL1", "Auxiliary ID Register")]),
    (SysRegKey::new(3, 0, 10, 3, 0), &[r("AMAIR_EL1", "Auxiliary Memory Attribute Indirection Register (EL1)")]),
    (SysRegKey::new(3, 4, 10, 3, 0), &[r("AMAIR_EL2", "Auxiliary Memory Attribute Indirection Register (EL2)")]),
    (SysRegKey::new(3, 5, 10, 3, 0), &[r("AMAIR_EL12", "Auxiliary Memory Attribute Indirection Register (EL1)")]),
    (SysRegKey::new(3, 6, 10, 3, 0), &[r("AMAIR_EL3", "Auxiliary Memory Attribute Indirection Register (EL3)")]),
    (SysRegKey::new(3, 1, 0, 0, 0), &[r("CCSIDR_EL1", "Current Cache Size ID Register")]),
    (SysRegKey::new(3, 1, 0, 0, 2), &[r("CCSIDR2_EL1", "Current Cache Size ID Register 2")]),
    (SysRegKey::new(3, 1, 0, 0, 1), &[r("CLIDR_EL1", "Cache Level ID Register")]),
    (SysRegKey::new(3, 0, 13, 0, 1), &[r("CONTEXTIDR_EL1", "Context ID Register (EL1)")]),
    (SysRegKey::new(3, 4, 13, 0, 1), &[r("CONTEXTIDR_EL2", "Context ID Register (EL2)")]),
    (SysRegKey::new(3, 5, 13, 0, 1), &[r("CONTEXTIDR_EL12", "Context ID Register (EL1)")]),
    (SysRegKey::new(3, 0, 1, 0, 2), &[r("CPACR_EL1", "Architectural Feature Access Control Register (EL1)")]),
    (SysRegKey::new(3, 5, 1, 0, 2), &[r("CPACR_EL12", "Architectural Feature Access Control Register (EL1)")]),
    (SysRegKey::new(3, 4, 1, 1, 2), &[r("CPTR_EL2", "Architectural Feature Trap Register (EL2)")]),
    (SysRegKey::new(3, 6, 1, 1, 2), &[r("CPTR_EL3", "Architectural Feature Trap Register (EL3)")]),
    (SysRegKey::new(3, 2, 0, 0, 0), &[r("CSSELR_EL1", "Cache Size Selection Register"), r("TEECR32_EL1", "T32EE Configuration Register")]),
    (SysRegKey::new(3, 3, 0, 0, 1), &[r("CTR_EL0", "Cache Type Register")]),
    (SysRegKey::new(3, 4, 3, 0, 0), &[r("DACR32_EL2", "Domain Access Control Register")]),
    (SysRegKey::new(3, 3, 0, 0, 7), &[r("DCZID_EL0", "Data Cache Zero ID register")]),
    (SysRegKey::new(3, 0, 5, 2, 0), &[r("ESR_EL1", "Exception Syndrome Register (EL1)")]),
    (SysRegKey::new(3, 4, 5, 2, 0), &[r("ESR_EL2", "Exception Syndrome Register (EL2)")]),
    (SysRegKey::new(3, 5, 5, 2, 0), &[r("ESR_EL12", "Exception Syndrome Register (EL1)")]),
    (SysRegKey::new(3, 6, 5, 2, 0), &[r("ESR_EL3", "Exception Syndrome Register (EL3)")]),
    (SysRegKey::new(3, 0, 6, 0, 0), &[r("FAR_EL1", "Fault Address Register (EL1)")]),
    (SysRegKey::new(3, 4, 6, 0, 0), &[r("FAR_EL2", "Fault Address Register (EL2)")]),
    (SysRegKey::new(3, 5, 6, 0, 0), &[r("FAR_EL12", "Fault Address Register (EL1)")]),
    (SysRegKey::new(3, 6, 6, 0, 0), &[r("FAR_EL3", "Fault Address Register (EL3)")]),
    (SysRegKey::new(3, 4, 5, 3, 0), &[r("FPEXC32_EL2", "Floating-Point Exception Control register")]),
    (SysRegKey::new(3, 4, 1, 1, 7), &[r("HACR_EL2", "Hypervisor Auxiliary Control Register")]),
    (SysRegKey::new(3, 4, 1, 1, 0), &[r("HCR_EL2", "Hypervisor Configuration Register")]),
    (SysRegKey::new(3, 4, 6, 0, 4), &[r("HPFAR_EL2", "Hypervisor IPA Fault Address Register")]),
    (SysRegKey::new(3, 4, 1, 1, 3), &[r("HSTR_EL2", "Hypervisor System Trap Register")]),
    (SysRegKey::new(3, 4, 3, 1, 6), &[r("HAFGRTR_EL2", "Hypervisor Activity Monitors Fine-Grained Read Trap Register")]),
    (SysRegKey::new(3, 4, 1, 2, 2), &[r("HCRX_EL2", "Extended Hypervisor Configuration Register")]),
    (SysRegKey::new(3, 4, 3, 1, 4), &[r("HDFGRTR_EL2", "Hypervisor Debug Fine-Grained Read Trap Register")]),
    (SysRegKey::new(3, 4, 3, 1, 5), &[r("HDFGWTR_EL2", "Hypervisor Debug Fine-Grained Write Trap Register")]),
    (SysRegKey::new(3, 4, 1, 1, 6), &[r("HFGITR_EL2", "Hypervisor Fine-Grained Instruction Trap Register")]),
    (SysRegKey::new(3, 4, 1, 1, 4), &[r("HFGRTR_EL2", "Hypervisor Fine-Grained Read Trap Register")]),
    (SysRegKey::new(3, 4, 1, 1, 5), &[r("HFGWTR_EL2", "Hypervisor Fine-Grained Write Trap Register")]),
    (SysRegKey::new(3, 0, 0, 5, 4), &[r("ID_AA64AFR0_EL1", "AArch64 Auxiliary Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 5, 5), &[r("ID_AA64AFR1_EL1", "AArch64 Auxiliary Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 5, 0), &[r("ID_AA64DFR0_EL1", "AArch64 Debug Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 5, 1), &[r("ID_AA64DFR1_EL1", "AArch64 Debug Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 6, 0), &[r("ID_AA64ISAR0_EL1", "AArch64 Instruction Set Attribute Register 0")]),
    (SysRegKey::new(3, 0, 0, 6, 1), &[r("ID_AA64ISAR1_EL1", "AArch64 Instruction Set Attribute Register 1")]),
    (SysRegKey::new(3, 0, 0, 7, 0), &[r("ID_AA64MMFR0_EL1", "AArch64 Memory Model Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 7, 1), &[r("ID_AA64MMFR1_EL1", "AArch64 Memory Model Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 7, 2), &[r("ID_AA64MMFR2_EL1", "AArch64 Memory Model Feature Register 2")]),
    (SysRegKey::new(3, 0, 0, 4, 0), &[r("ID_AA64PFR0_EL1", "AArch64 Processor Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 4, 1), &[r("ID_AA64PFR1_EL1", "AArch64 Processor Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 1, 3), &[r("ID_AFR0_EL1", "AArch32 Auxiliary Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 1, 2), &[r("ID_DFR0_EL1", "AArch32 Debug Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 2, 0), &[r("ID_ISAR0_EL1", "AArch32 Instruction Set Attribute Register 0")]),
    (SysRegKey::new(3, 0, 0, 2, 1), &[r("ID_ISAR1_EL1", "AArch32 Instruction Set Attribute Register 1")]),
    (SysRegKey::new(3, 0, 0, 2, 2), &[r("ID_ISAR2_EL1", "AArch32 Instruction Set Attribute Register 2")]),
    (SysRegKey::new(3, 0, 0, 2, 3), &[r("ID_ISAR3_EL1", "AArch32 Instruction Set Attribute Register 3")]),
    (SysRegKey::new(3, 0, 0, 2, 4), &[r("ID_ISAR4_EL1", "AArch32 Instruction Set Attribute Register 4")]),
    (SysRegKey::new(3, 0, 0, 2, 5), &[r("ID_ISAR5_EL1", "AArch32 Instruction Set Attribute Register 5")]),
    (SysRegKey::new(3, 0, 0, 2, 7), &[r("ID_ISAR6_EL1", "AArch32 Instruction Set Attribute Register 6")]),
    (SysRegKey::new(3, 0, 0, 1, 4), &[r("ID_MMFR0_EL1", "AArch32 Memory Model Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 1, 5), &[r("ID_MMFR1_EL1", "AArch32 Memory Model Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 1, 6), &[r("ID_MMFR2_EL1", "AArch32 Memory Model Feature Register 2")]),
    (SysRegKey::new(3, 0, 0, 1, 7), &[r("ID_MMFR3_EL1", "AArch32 Memory Model Feature Register 3")]),
    (SysRegKey::new(3, 0, 0, 2, 6), &[r("ID_MMFR4_EL1", "AArch32 Memory Model Feature Register 4")]),
    (SysRegKey::new(3, 0, 0, 1, 0), &[r("ID_PFR0_EL1", "AArch32 Processor Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 1, 1), &[r("ID_PFR1_EL1", "AArch32 Processor Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 6, 2), &[r("ID_AA64ISAR2_EL1", "AArch64 Instruction Set Attribute Register 2")]),
    (SysRegKey::new(3, 0, 0, 4, 4), &[r("ID_AA64ZFR0_EL1", "SVE Feature ID register 0")]),
    (SysRegKey::new(3, 0, 0, 3, 5), &[r("ID_DFR1_EL1", "Debug Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 3, 6), &[r("ID_MMFR5_EL1", "AArch32 Memory Model Feature Register 5")]),
    (SysRegKey::new(3, 0, 0, 3, 4), &[r("ID_PFR2_EL1", "AArch32 Processor Feature Register 2")]),
    (SysRegKey::new(3, 4, 5, 0, 1), &[r("IFSR32_EL2", "Instruction Fault Status Register (EL2)")]),
    (SysRegKey::new(3, 0, 12, 1, 0), &[r("ISR_EL1", "Interrupt Status Register")]),
    (SysRegKey::new(3, 0, 10, 2, 0), &[r("MAIR_EL1", "Memory Attribute Indirection Register (EL1)")]),
    (SysRegKey::new(3, 4, 10, 2, 0), &[r("MAIR_EL2", "Memory Attribute Indirection Register (EL2)")]),
    (SysRegKey::new(3, 5, 10, 2, 0), &[r("MAIR_EL12", "Memory Attribute Indirection Register (EL1)")]),
    (SysRegKey::new(3, 6, 10, 2, 0), &[r("MAIR_EL3", "Memory Attribute Indirection Register (EL3)")]),
    (SysRegKey::new(3, 0, 0, 0, 0), &[r("MIDR_EL1", "Main ID Register")]),
    (SysRegKey::new(3, 0, 0, 0, 5), &[r("MPIDR_EL1", "Multiprocessor Affinity Register")]),
    (SysRegKey::new(3, 0, 0, 3, 0), &[r("MVFR0_EL1", "AArch32 Media and VFP Feature Register 0")]),
    (SysRegKey::new(3, 0, 0, 3, 1), &[r("MVFR1_EL1", "AArch32 Media and VFP Feature Register 1")]),
    (SysRegKey::new(3, 0, 0, 3, 2), &[r("MVFR2_EL1", "AArch32 Media and VFP Feature Register 2")]),
    (SysRegKey::new(3, 0, 7, 4, 0), &[r("PAR_EL1", "Physical Address Register")]),
    (SysRegKey::new(3, 0, 0, 0, 6), &[r("REVIDR_EL1", "Revision ID Register")]),
    (SysRegKey::new(3, 0, 12, 0, 2), &[r("RMR_EL1", "Reset Management Register (EL1)")]),
    (SysRegKey::new(3, 4, 12, 0, 2), &[r("RMR_EL2", "Reset Management Register (EL2)")]),
    (SysRegKey::new(3, 6, 12, 0, 2), &[r("RMR_EL3", "Reset Management Register (EL3)")]),
    (SysRegKey::new(3, 0, 12, 0, 1), &[r("RVBAR_EL1", "Reset Vector Base Address Register (if EL2 and EL3 not implemented)")]),
    (SysRegKey::new(3, 4, 12, 0, 1), &[r("RVBAR_EL2", "Reset Vector Base Address Register (if EL3 not implemented)")]),
    (SysRegKey::new(3, 6, 12, 0, 1), &[r("RVBAR_EL3", "Reset Vector Base Address Register (if EL3 implemented)")]),
    (SysRegKey::new(3, 6, 1, 1, 0), &[r("SCR_EL3", "Secure Configuration Register")]),
    (SysRegKey::new(3, 6, 1, 1, 1), &[r("SDER_EL3", "AArch32 Secure Debug Enable Register"), r("SDER32_EL3", "AArch32 Secure Debug Enable Register")]),
    (SysRegKey::new(3, 0, 1, 0, 0), &[r("SCTLR_EL1", "System Control Register (EL1)")]),
    (SysRegKey::new(3, 4, 1, 0, 0), &[r("SCTLR_EL2", "System Control Register (EL2)")]),
    (SysRegKey::new(3, 5, 1, 0, 0), &[r("SCTLR_EL12", "System Control Register (EL1)")]),
    (SysRegKey::new(3, 6, 1, 0, 0), &[r("SCTLR_EL3", "System Control Register (EL3)")]),
    (SysRegKey::new(3, 0, 2, 0, 2), &[r("TCR_EL1", "Translation Control Register (EL1)")]),
    (SysRegKey::new(3, 4, 2, 0, 2), &[r("TCR_EL2", "Translation Control Register (EL2)")]),
    (SysRegKey::new(3, 5, 2, 0, 2), &[r("TCR_EL12", "Translation Control Register (EL1)")]),
    (SysRegKey::new(3, 6, 2, 0, 2), &[r("TCR_EL3", "Translation Control Register (EL3)")]),
    (SysRegKey::new(3, 2, 1, 0, 0), &[r("TEEHBR32_EL1", "T32EE Handler Base Register")]),
    (SysRegKey::new(3, 3, 13, 0, 2), &[r("TPIDR_EL0", "EL0 Read/Write Software Thread ID Register")]),
    (SysRegKey::new(3, 0, 13, 0, 4), &[r("TPIDR_EL1", "EL1 Software Thread ID Register")]),
    (SysRegKey::new(3, 4, 13, 0, 2), &[r("TPIDR_EL2", "EL2 Software Thread ID Register")]),
    (SysRegKey::new(3, 6, 13, 0, 2), &[r("TPIDR_EL3", "EL3 Software Thread ID Register")]),
    (SysRegKey::new(3, 3, 13, 0, 3), &[r("TPIDRRO_EL0", "EL0 Read-Only Software Thread ID Register")]),
    (SysRegKey::new(3, 0, 2, 0, 0), &[r("TTBR0_EL1", "Translation Table Base Register 0 (EL1)")]),
    (SysRegKey::new(3, 4, 2, 0, 0), &[r("TTBR0_EL2", "Translation Table Base Register 0 (EL2)")]),
    (SysRegKey::new(3, 5, 2, 0, 0), &[r("TTBR0_EL12", "Translation Table Base Register 0 (EL1)")]),
    (SysRegKey::new(3, 6, 2, 0, 0), &[r("TTBR0_EL3", "Translation Table Base Register 0 (EL3)")]),
    (SysRegKey::new(3, 0, 2, 0, 1), &[r("TTBR1_EL1", "Translation Table Base Register 1 (EL1)")]),
    (SysRegKey::new(3, 4, 2, 0, 1), &[r("TTBR1_EL2", "Translation Table Base Register 1 (EL2)")]),
    (SysRegKey::new(3, 5, 2, 0, 1), &[r("TTBR1_EL12", "Translation Table Base Register 1 (EL1)")]),
    (SysRegKey::new(3, 0, 12, 0, 0), &[r("VBAR_EL1", "Vector Base Address Register (EL1)")]),
    (SysRegKey::new(3, 4, 12, 0, 0), &[r("VBAR_EL2", "Vector Base Address Register (EL2)")]),
    (SysRegKey::new(3, 5, 12, 0, 0), &[r("VBAR_EL12", "Vector Base Address Register (EL1)")]),
    (SysRegKey::new(3, 6, 12, 0, 0), &[r("VBAR_EL3", "Vector Base Address Register (EL3)")]),
    (SysRegKey::new(3, 4, 0, 0, 5), &[r("VMPIDR_EL2", "Virtualization Multiprocessor ID Register")]),
    (SysRegKey::new(3, 4, 0, 0, 0), &[r("VPIDR_EL2", "Virtualization Processor ID Register")]),
    (SysRegKey::new(3, 4, 2, 1, 2), &[r("VTCR_EL2", "Virtualization Translation Control Register")]),
    (SysRegKey::new(3, 4, 2, 1, 0), &[r("VTTBR_EL2", "Virtualization Translation Table Base Register")]),
    (SysRegKey::new(3, 1, 15, 2, 0), &[r("CPUACTLR_EL1", "CPU Auxiliary Control Register (EL1)")]),
    (SysRegKey::new(3, 1, 15, 2, 1), &[r("CPUECTLR_EL1", "CPU Extended Control Register (EL1)")]),
    (SysRegKey::new(3, 1, 15, 2, 2), &[r("CPUMERRSR_EL1", "CPU Memory Error Syndrome Register")]),
    (SysRegKey::new(3, 1, 15, 2, 3), &[r("L2MERRSR_EL1", "L2 Memory Error Syndrome Register")]),
    (SysRegKey::new(3, 0, 13, 0, 5), &[r("ACCDATA_EL1", "Accelerator Data")]),
    (SysRegKey::new(3, 0, 1, 0, 6), &[r("GCR_EL1", "Tag Control Register.")]),
    (SysRegKey::new(3, 1, 0, 0, 4), &[r("GMID_EL1", " Multiple tag transfer ID register")]),
    (SysRegKey::new(3, 0, 1, 0, 5), &[r("RGSR_EL1", "Random Allocation Tag Seed Register.")]),
    (SysRegKey::new(3, 3, 2, 4, 0), &[r("RNDR", "Random Number")]),
    (SysRegKey::new(3, 3, 2, 4, 1), &[r("RNDRRS", "Reseeded Random Number")]),
    (SysRegKey::new(3, 3, 13, 0, 7), &[r("SCXTNUM_EL0", "EL0 Read/Write Software Context Number")]),
    (SysRegKey::new(3, 0, 13, 0, 7), &[r("SCXTNUM_EL1", "EL1 Read/Write Software Context Number")]),
    (SysRegKey::new(3, 4, 13, 0, 7), &[r("SCXTNUM_EL2", "EL2 Read/Write Software Context Number")]),
    (SysRegKey::new(3, 6, 13, 0, 7), &[r("SCXTNUM_EL3", "EL3 Read/Write Software Context Number")]),
    (SysRegKey::new(3, 0, 5, 6, 0), &[r("TFSR_EL1", "Tag Fault Status Register (EL1)")]),
    (SysRegKey::new(3, 4, 5, 6, 0), &[r("TFSR_EL2", "Tag Fault Status Register (EL2)")]),
    (SysRegKey::new(3, 6, 5, 6, 0), &[r("TFSR_EL3", "Tag Fault Status Register (EL3)")]),
    (SysRegKey::new(3, 0, 5, 6, 1), &[r("TFSRE0_EL1", "Tag Fault Status Register (EL0).")]),
    (SysRegKey::new(3, 4, 2, 2, 0), &[r("VNCR_EL2", "Virtual Nested Control Register")]),
    (SysRegKey::new(3, 4, 2, 6, 2), &[r("VSTCR_EL2", "Virtualization Secure Translation Control Register")]),
    (SysRegKey::new(3, 4, 2, 6, 0), &[r("VSTTBR_EL2", "Virtualization Secure Translation Table Base Register")]),
    (SysRegKey::new(3, 0, 1, 2, 0), &[r("ZCR_EL1", "SVE Control Register (EL1)")]),
    (SysRegKey::new(3, 4, 1, 2, 0), &[r("ZCR_EL2", "SVE Control Register (EL2)")]),
    (SysRegKey::new(3, 6, 1, 2, 0), &[r("ZCR_EL3", "SVE Control Register (EL3)")]),
    (SysRegKey::new(3, 3, 13, 2, 1), &[r("AMCFGR_EL0", "Activity Monitors Configuration Register")]),
    (SysRegKey::new(3, 3, 13, 2, 6), &[r("AMCG1IDR_EL0", "Activity Monitors Counter Group 1 Identification Register")]),
    (SysRegKey::new(3, 3, 13, 2, 2), &[r("AMCGCR_EL0", "Activity Monitors Counter Group Configuration Register")]),
    (SysRegKey::new(3, 3, 13, 2, 4), &[r("AMCNTENCLR0_EL0", "Activity Monitors Count Enable Clear Register 0")]),
    (SysRegKey::new(3, 3, 13, 3, 0), &[r("AMCNTENCLR1_EL0", "Activity Monitors Count Enable Clear Register 1")]),
    (SysRegKey::new(3, 3, 13, 2, 5), &[r("AMCNTENSET0_EL0", "Activity Monitors Count Enable Set Register 0")]),
    (SysRegKey::new(3, 3, 13, 3, 1), &[r("AMCNTENSET1_EL0", "Activity Monitors Count Enable Set Register 1")]),
    (SysRegKey::new(3, 3, 13, 2, 0), &[r("AMCR_EL0", "Activity Monitors Control Register")]),
    (SysRegKey::new(3, 3, 13, 4, 0), &[r("AMEVCNTR00_EL0", "Activity Monitors Event Counter Registers 0")]),
    (SysRegKey::new(3, 3, 13, 4, 1), &[r("AMEVCNTR01_EL0", "Activity Monitors Event Counter Registers 0")]),
    (SysRegKey::new(3, 3, 13, 4, 2), &[r("AMEVCNTR02_EL0", "Activity Monitors Event Counter Registers 0")]),
    (SysRegKey::new(3, 3, 13, 4, 3), &[r("AMEVCNTR03_EL0", "Activity Monitors Event Counter Registers 0")]),
    (SysRegKey::new(3, 3, 13, 12, 0), &[r("AMEVCNTR10_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 12, 1), &[r("AMEVCNTR11_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 12, 2), &[r("AMEVCNTR12_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 12, 3), &[r("AMEVCNTR13_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 12, 4), &[r("AMEVCNTR14_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 12, 5), &[r("AMEVCNTR15_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 12, 6), &[r("AMEVCNTR16_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 12, 7), &[r("AMEVCNTR17_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 0), &[r("AMEVCNTR18_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 1), &[r("AMEVCNTR19_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 2), &[r("AMEVCNTR110_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 3), &[r("AMEVCNTR111_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 4), &[r("AMEVCNTR112_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 5), &[r("AMEVCNTR113_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 6), &[r("AMEVCNTR114_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 3, 13, 13, 7), &[r("AMEVCNTR115_EL0", "Activity Monitors Event Counter Registers 1")]),
    (SysRegKey::new(3, 4, 13, 8, 0), &[r("AMEVCNTVOFF00_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 8, 1), &[r("AMEVCNTVOFF01_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 8, 2), &[r("AMEVCNTVOFF02_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 8, 3), &[r("AMEVCNTVOFF03_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 8, 4), &[r("AMEVCNTVOFF04_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 8, 5), &[r("AMEVCNTVOFF05_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 8, 6), &[r("AMEVCNTVOFF06_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 8, 7), &[r("AMEVCNTVOFF07_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 0), &[r("AMEVCNTVOFF08_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 1), &[r("AMEVCNTVOFF09_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 2), &[r("AMEVCNTVOFF010_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 3), &[r("AMEVCNTVOFF011_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 4), &[r("AMEVCNTVOFF012_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 5), &[r("AMEVCNTVOFF013_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 6), &[r("AMEVCNTVOFF014_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 9, 7), &[r("AMEVCNTVOFF015_EL2", "Activity Monitors Event Counter Virtual Offset Registers 0")]),
    (SysRegKey::new(3, 4, 13, 10, 0), &[r("AMEVCNTVOFF10_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 10, 1), &[r("AMEVCNTVOFF11_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 10, 2), &[r("AMEVCNTVOFF12_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 10, 3), &[r("AMEVCNTVOFF13_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 10, 4), &[r("AMEVCNTVOFF14_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 10, 5), &[r("AMEVCNTVOFF15_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 10, 6), &[r("AMEVCNTVOFF16_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 10, 7), &[r("AMEVCNTVOFF17_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 0), &[r("AMEVCNTVOFF18_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 1), &[r("AMEVCNTVOFF19_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 2), &[r("AMEVCNTVOFF110_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 3), &[r("AMEVCNTVOFF111_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 4), &[r("AMEVCNTVOFF112_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 5), &[r("AMEVCNTVOFF113_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 6), &[r("AMEVCNTVOFF114_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 4, 13, 11, 7), &[r("AMEVCNTVOFF115_EL2", "Activity Monitors Event Counter Virtual Offset Registers 1")]),
    (SysRegKey::new(3, 3, 13, 6, 0), &[r("AMEVTYPER00_EL0", "Activity Monitors Event Type Registers 0")]),
    (SysRegKey::new(3, 3, 13, 6, 1), &[r("AMEVTYPER01_EL0", "Activity Monitors Event Type Registers 0")]),
    (SysRegKey::new(3, 3, 13, 6, 2), &[r("AMEVTYPER02_EL0", "Activity Monitors Event Type Registers 0")]),
    (SysRegKey::new(3, 3, 13, 6, 3), &[r("AMEVTYPER03_EL0", "Activity Monitors Event Type Registers 0")]),
    (SysRegKey::new(3, 3, 13, 14, 0), &[r("AMEVTYPER10_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 14, 1), &[r("AMEVTYPER11_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 14, 2), &[r("AMEVTYPER12_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 14, 3), &[r("AMEVTYPER13_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 14, 4), &[r("AMEVTYPER14_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 14, 5), &[r("AMEVTYPER15_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 14, 6), &[r("AMEVTYPER16_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 14, 7), &[r("AMEVTYPER17_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 0), &[r("AMEVTYPER18_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 1), &[r("AMEVTYPER19_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 2), &[r("AMEVTYPER110_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 3), &[r("AMEVTYPER111_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 4), &[r("AMEVTYPER112_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 5), &[r("AMEVTYPER113_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 6), &[r("AMEVTYPER114_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 15, 7), &[r("AMEVTYPER115_EL0", "Activity Monitors Event Type Registers 1")]),
    (SysRegKey::new(3, 3, 13, 2, 3), &[r("AMUSERENR_EL0", "Activity Monitors User Enable Register")]),
    (SysRegKey::new(3, 0, 12, 1, 1), &[r("DISR_EL1", "Deferred Interrupt Status Register")]),
    (SysRegKey::new(3, 0, 5, 3, 0), &[r("ERRIDR_EL1", "Error Record ID Register")]),
    (SysRegKey::new(3, 0, 5, 3, 1), &[r("ERRSELR_EL1", "Error Record Select Register")]),
    (SysRegKey::new(3, 0, 5, 4, 3), &[r("ERXADDR_EL1", "Selected Error Record Address Register")]),
    (SysRegKey::new(3, 0, 5, 4, 1), &[r("ERXCTLR_EL1", "Selected Error Record Control Register")]),
    (SysRegKey::new(3, 0, 5, 4, 0), &[r("ERXFR_EL1", "Selected Error Record Feature Register")]),
    (SysRegKey::new(3, 0, 5, 5, 0), &[r("ERXMISC0_EL1", "Selected Error Record Miscellaneous Register 0")]),
    (SysRegKey::new(3, 0, 5, 5, 1), &[r("ERXMISC1_EL1", "Selected Error Record Miscellaneous Register 1")]),
    (SysRegKey::new(3, 0, 5, 5, 2), &[r("ERXMISC2_EL1", "Selected Error Record Miscellaneous Register 2")]),
    (SysRegKey::new(3, 0, 5, 5, 3), &[r("ERXMISC3_EL1", "Selected Error Record Miscellaneous Register 3")]),
    (SysRegKey::new(3, 0, 5, 4, 6), &[r("ERXPFGCDN_EL1", "Selected Pseudo-fault Generation Countdown register")]),
    (SysRegKey::new(3, 0, 5, 4, 5), &[r("ERXPFGCTL_EL1", "Selected Pseudo-fault Generation Control register")]),
    (SysRegKey::new(3, 0, 5, 4, 4), &[r("ERXPFGF_EL1", "Selected Pseudo-fault Generation Feature register")]),
    (SysRegKey::new(3, 0, 5, 4, 2), &[r("ERXSTATUS_EL1", "Selected Error Record Primary Status Register")]),
    (SysRegKey::new(3, 4, 12, 1, 1), &[r("VDISR_EL2", "Virtual Deferred Interrupt Status Register")]),
    (SysRegKey::new(3, 4, 5, 2, 3), &[r("VSESR_EL2", "Virtual SError Exception Syndrome Register")]),
    (SysRegKey::new(3, 0, 10, 5, 1), &[r("MPAM0_EL1", "MPAM0 Register (EL1)")]),
    (SysRegKey::new(3, 0, 10, 5, 0), &[r("MPAM1_EL1", "MPAM1 Register (EL1)")]),
    (SysRegKey::new(3, 4, 10, 5, 0), &[r("MPAM2_EL2", "MPAM2 Register (EL2)")]),
    (SysRegKey::new(3, 6, 10, 5, 0), &[r("MPAM3_EL3", "MPAM3 Register (EL3)")]),
    (SysRegKey::new(3, 4, 10, 4, 0), &[r("MPAMHCR_EL2", "MPAM Hypervisor Control Register (EL2)")]),
    (SysRegKey::new(3, 0, 10, 4, 4), &[r("MPAMIDR_EL1", "MPAM ID Register (EL1)")]),
    (SysRegKey::new(3, 4, 10, 6, 0), &[r("MPAMVPM0_EL2", "MPAM Virtual PARTID Mapping Register 0")]),
    (SysRegKey::new(3, 4, 10, 6, 1), &[r("MPAMVPM1_EL2", "MPAM Virtual PARTID Mapping Register 1")]),
    (SysRegKey::new(3, 4, 10, 6, 2), &[r("MPAMVPM2_EL2", "MPAM Virtual PARTID Mapping Register 2")]),
    (SysRegKey::new(3, 4, 10, 6, 3), &[r("MPAMVPM3_EL2", "MPAM Virtual PARTID Mapping Register 3")]),
    (SysRegKey::new(3, 4, 10, 6, 4), &[r("MPAMVPM4_EL2", "MPAM Virtual PARTID Mapping Register 4")]),
    (SysRegKey::new(3, 4, 10, 6, 5), &[r("MPAMVPM5_EL2", "MPAM Virtual PARTID Mapping Register 5")]),
    (SysRegKey::new(3, 4, 10, 6, 6), &[r("MPAMVPM6_EL2", "MPAM Virtual PARTID Mapping Register 6")]),
    (SysRegKey::new(3, 4, 10, 6, 7), &[r("MPAMVPM7_EL2", "MPAM Virtual PARTID Mapping Register 7")]),
    (SysRegKey::new(3, 4, 10, 4, 1), &[r("MPAMVPMV_EL2", "MPAM Virtual Partition Mapping Valid Register")]),
    (SysRegKey::new(3, 0, 9, 10, 7), &[r("PMBIDR_EL1", "Profiling Buffer ID Register")]),
    (SysRegKey::new(3, 0, 9, 10, 0), &[r("PMBLIMITR_EL1", "Profiling Buffer Limit Address Register")]),
    (SysRegKey::new(3, 0, 9, 10, 1), &[r("PMBPTR_EL1", "Profiling Buffer Write Pointer Register")]),
    (SysRegKey::new(3, 0, 9, 10, 3), &[r("PMBSR_EL1", "Profiling Buffer Status/syndrome Register")]),
    (SysRegKey::new(3, 3, 14, 11, 7), &[r("PMEVCNTR31_EL0", "Performance Monitors Event Count Registers")]),
    (SysRegKey::new(3, 3, 14, 15, 7), &[r("PMEVTYPER31_EL0", "Performance Monitors Event Type Registers"), r("PMCCFILTR_EL0", "Performance Monitors Cycle Count Filter Register")]),
    (SysRegKey::new(3, 0, 9, 14, 6), &[r("PMMIR_EL1", "Performance Monitors Machine Identification Register")]),
    (SysRegKey::new(3, 0, 9, 9, 0), &[r("PMSCR_EL1", "Statistical Profiling Control Register (EL1)")]),
    (SysRegKey::new(3, 4, 9, 9, 0), &[r("PMSCR_EL2", "Statistical Profiling Control Register (EL2)")]),
    (SysRegKey::new(3, 0, 9, 9, 5), &[r("PMSEVFR_EL1", "Sampling Event Filter Register")]),
    (SysRegKey::new(3, 0, 9, 9, 4), &[r("PMSFCR_EL1", "Sampling Filter Control Register")]),
    (SysRegKey::new(3, 0, 9, 9, 2), &[r("PMSICR_EL1", "Sampling Interval Counter Register")]),
    (SysRegKey::new(3, 0, 9, 9, 7), &[r("PMSIDR_EL1", "Sampling Profiling ID Register")]),
    (SysRegKey::new(3, 0, 9, 9, 3), &[r("PMSIRR_EL1", "Sampling Interval Reload Register")]),
    (SysRegKey::new(3, 0, 9, 9, 6), &[r("PMSLATFR_EL1", "Sampling Latency Filter Register")]),
    (SysRegKey::new(3, 0, 9, 9, 1), &[r("PMSNEVFR_EL1", "Sampling Inverted Event Filter Register")]),
    (SysRegKey::new(3, 0, 2, 1, 0), &[r("APIAKeyLo_EL1", "Pointer Authentication Key A for Instruction (bits[63:0]) ")]),
    (SysRegKey::new(3, 0, 2, 1, 1), &[r("APIAKeyHi_EL1", "Pointer Authentication Key A for Instruction (bits[127:64]) ")]),
    (SysRegKey::new(3, 0, 2, 1, 2), &[r("APIBKeyLo_EL1", "Pointer Authentication Key B for Instruction (bits[63:0]) ")]),
    (SysRegKey::new(3, 0, 2, 1, 3), &[r("APIBKeyHi_EL1", "Pointer Authentication Key B for Instruction (bits[127:64]) ")]),
    (SysRegKey::new(3, 0, 2, 2, 0), &[r("APDAKeyLo_EL1", "Pointer Authentication Key A for Data (bits[63:0]) ")]),
    (SysRegKey::new(3, 0, 2, 2, 1), &[r("APDAKeyHi_EL1", "Pointer Authentication Key A for Data (bits[127:64]) ")]),
    (SysRegKey::new(3, 0, 2, 2, 2), &[r("APDBKeyLo_EL1", "Pointer Authentication Key B for Data (bits[63:0]) ")]),
    (SysRegKey::new(3, 0, 2, 2, 3), &[r("APDBKeyHi_EL1", "Pointer Authentication Key B for Data (bits[127:64]) ")]),
    (SysRegKey::new(3, 0, 2, 3, 0), &[r("APGAKeyLo_EL1", "Pointer Authentication Key A for Code  (bits[63:0]) ")]),
    (SysRegKey::new(3, 0, 2, 3, 1), &[r("APGAKeyHi_EL1", "Pointer Authentication Key A for Code (bits[127:64]) ")]),
    (SysRegKey::new(3, 4, 1, 1, 1), &[r("MDCR_EL2", "Monitor Debug Configuration Register (EL2)")]),
    (SysRegKey::new(3, 6, 1, 3, 1), &[r("MDCR_EL3", "Monitor Debug Configuration Register (EL3)")]),
    (SysRegKey::new(3, 3, 4, 5, 0), &[r("DSPSR_EL0", "Debug Saved Program Status Register")]),
    (SysRegKey::new(3, 3, 4, 5, 1), &[r("DLR_EL0", "Debug Link Register")]),
    (SysRegKey::new(2, 0, 0, 0, 2), &[r("OSDTRRX_EL1", "OS Lock Data Transfer Register, Receive")]),
    (SysRegKey::new(2, 0, 0, 3, 2), &[r("OSDTRTX_EL1", "OS Lock Data Transfer Register, Transmit")]),
    (SysRegKey::new(2, 0, 0, 6, 2), &[r("OSECCR_EL1", "OS Lock Exception Catch Control Register")]),
    (SysRegKey::new(2, 3, 0, 4, 0), &[r("DBGDTR_EL0", "Debug Data Transfer Register, half-duplex")]),
    (SysRegKey::new(2, 3, 0, 5, 0), &[r("DBGDTRTX_EL0", "Debug Data Transfer Register, Transmit"), r("DBGDTRRX_EL0", "Debug Data Transfer Register, Receive")]),
    (SysRegKey::new(2, 4, 0, 7, 0), &[r("DBGVCR32_EL2", "Debug Vector Catch Register")]),
    (SysRegKey::new(2, 0, 0, 0, 4), &[r("DBGBVR0_EL1", "Debug Breakpoint Value Register 0")]),
    (SysRegKey::new(2, 0, 0, 1, 4), &[r("DBGBVR1_EL1", "Debug Breakpoint Value Register 1")]),
    (SysRegKey::new(2, 0, 0, 2, 4), &[r("DBGBVR2_EL1", "Debug Breakpoint Value Register 2")]),
    (SysRegKey::new(2, 0, 0, 3, 4), &[r("DBGBVR3_EL1", "Debug Breakpoint Value Register 3")]),
    (SysRegKey::new(2, 0, 0, 4, 4), &[r("DBGBVR4_EL1", "Debug Breakpoint Value Register 4")]),
    (SysRegKey::new(2, 0, 0, 5, 4), &[r("DBGBVR5_EL1", "Debug Breakpoint Value Register 5")]),
    (SysRegKey::new(2, 0, 0, 6, 4), &[r("DBGBVR6_EL1", "Debug Breakpoint Value Register 6")]),
    (SysRegKey::new(2, 0, 0, 7, 4), &[r("DBGBVR7_EL1", "Debug Breakpoint Value Register 7")]),
    (SysRegKey::new(2, 0, 0, 8, 4), &[r("DBGBVR8_EL1", "Debug Breakpoint Value Register 8")]),
    (SysRegKey::new(2, 0, 0, 9, 4), &[r("DBGBVR9_EL1", "Debug Breakpoint Value Register 9")]),
    (SysRegKey::new(2, 0, 0, 10, 4), &[r("DBGBVR10_EL1", "Debug Breakpoint Value Registers 10")]),
    (SysRegKey::new(2, 0, 0, 11, 4), &[r("DBGBVR11_EL1", "Debug Breakpoint Value Registers 11")]),
    (SysRegKey::new(2, 0, 0, 12, 4), &[r("DBGBVR12_EL1", "Debug Breakpoint Value Registers 12")]),
    (SysRegKey::new(2, 0, 0, 13, 4), &[r("DBGBVR13_EL1", "Debug Breakpoint Value Registers 13")]),
    (SysRegKey::new(2, 0, 0, 14, 4), &[r("DBGBVR14_EL1", "Debug Breakpoint Value Registers 14")]),
    (SysRegKey::new(2, 0, 0, 15, 4), &[r("DBGBVR15_EL1", "Debug Breakpoint Value Registers 15")]),
    (SysRegKey::new(2, 0, 0, 0, 5), &[r("DBGBCR0_EL1", "Debug Breakpoint Control Register 0")]),
    (SysRegKey::new(2, 0, 0, 1, 5), &[r("DBGBCR1_EL1", "Debug Breakpoint Control Register 1")]),
    (SysRegKey::new(2, 0, 0, 2, 5), &[r("DBGBCR2_EL1", "Debug Breakpoint Control Register 2")]),
    (SysRegKey::new(2, 0, 0, 3, 5), &[r("DBGBCR3_EL1", "Debug Breakpoint Control Register 3")]),
    (SysRegKey::new(2, 0, 0, 4, 5), &[r("DBGBCR4_EL1", "Debug Breakpoint Control Register 4")]),
    (SysRegKey::new(2, 0, 0, 5, 5), &[r("DBGBCR5_EL1", "Debug Breakpoint Control Register 5")]),
    (SysRegKey::new(2, 0, 0, 6, 5), &[r("DBGBCR6_EL1", "Debug Breakpoint Control Register 6")]),
    (SysRegKey::new(2, 0, 0, 7, 5), &[r("DBGBCR7_EL1", "Debug Breakpoint Control Register 7")]),
    (SysRegKey::new(2, 0, 0, 8, 5), &[r("DBGBCR8_EL1", "Debug Breakpoint Control Register 8")]),
    (SysRegKey::new(2, 0, 0, 9, 5), &[r("DBGBCR9_EL1", "Debug Breakpoint Control Register 9")]),
    (SysRegKey::new(2, 0, 0, 10, 5), &[r("DBGBCR10_EL1", "Debug Breakpoint Control Register 10")]),
    (SysRegKey::new(2, 0, 0, 11, 5), &[r("DBGBCR11_EL1", "Debug Breakpoint Control Register 11")]),
    (SysRegKey::new(2, 0, 0, 12, 5), &[r("DBGBCR12_EL1", "Debug Breakpoint Control Register 12")]),
    (SysRegKey::new(2, 0, 0, 13, 5), &[r("DBGBCR13_EL1", "Debug Breakpoint Control Register 13")]),
    (SysRegKey::new(2, 0, 0, 14, 5), &[r("DBGBCR14_EL1", "Debug Breakpoint Control Register 14")]),
    (SysRegKey::new(2, 0, 0, 15, 5), &[r("DBGBCR15_EL1", "Debug Breakpoint Control Register 15")]),
    (SysRegKey::new(2, 0, 0, 0, 6), &[r("DBGWVR0_EL1", "Debug Watchpoint Value Register 0")]),
    (SysRegKey::new(2, 0, 0, 1, 6), &[r("DBGWVR1_EL1", "Debug Watchpoint Value Register 1")]),
    (SysRegKey::new(2, 0, 0, 2, 6), &[r("DBGWVR2_EL1", "Debug Watchpoint Value Register 2")]),
    (SysRegKey::new(2, 0, 0, 3, 6), &[r("DBGWVR3_EL1", "Debug Watchpoint Value Register 3")]),
    (SysRegKey::new(2, 0, 0, 4, 6), &[r("DBGWVR4_EL1", "Debug Watchpoint Value Register 4")]),
    (SysRegKey::new(2, 0, 0, 5, 6), &[r("DBGWVR5_EL1", "Debug Watchpoint Value Register 5")]),
    (SysRegKey::new(2, 0, 0, 6, 6), &[r("DBGWVR6_EL1", "Debug Watchpoint Value Register 6")]),
    (SysRegKey::new(2, 0, 0, 7, 6), &[r("DBGWVR7_EL1", "Debug Watchpoint Value Register 7")]),
    (SysRegKey::new(2, 0, 0, 8, 6), &[r("DBGWVR8_EL1", "Debug Watchpoint Value Register 8")]),
    (SysRegKey::new(2, 0, 0, 9, 6), &[r("DBGWVR9_EL1", "Debug Watchpoint Value Register 9")]),
    (SysRegKey::new(2, 0, 0, 10, 6), &[r("DBGWVR10_EL1", "Debug Watchpoint Value Register 10")]),
    (SysRegKey::new(2, 0, 0, 11, 6), &[r("DBGWVR11_EL1", "Debug Watchpoint Value Register 11")]),
    (SysRegKey::new(2, 0, 0, 12, 6), &[r("DBGWVR12_EL1", "Debug Watchpoint Value Register 12")]),
    (SysRegKey::new(2, 0, 0, 13, 6), &[r("DBGWVR13_EL1", "Debug Watchpoint Value Register 13")]),
    (SysRegKey::new(2, 0, 0, 14, 6), &[r("DBGWVR14_EL1", "Debug Watchpoint Value Register 14")]),
    (SysRegKey::new(2, 0, 0, 15, 6), &[r("DBGWVR15_EL1", "Debug Watchpoint Value Register 15")]),
    (SysRegKey::new(2, 0, 0, 0, 7), &[r("DBGWCR0_EL1", "Debug Watchpoint Control Register 0")]),
    (SysRegKey::new(2, 0, 0, 1, 7), &[r("DBGWCR1_EL1", "Debug Watchpoint Control Register 1")]),
    (SysRegKey::new(2, 0, 0, 2, 7), &[r("DBGWCR2_EL1", "Debug Watchpoint Control Register 2")]),
    (SysRegKey::new(2, 0, 0, 3, 7), &[r("DBGWCR3_EL1", "Debug Watchpoint Control Register 3")]),
    (SysRegKey::new(2, 0, 0, 4, 7), &[r("DBGWCR4_EL1", "Debug Watchpoint Control Register 4")]),
    (SysRegKey::new(2, 0, 0, 5, 7), &[r("DBGWCR5_EL1", "Debug Watchpoint Control Register 5")]),
    (SysRegKey::new(2, 0, 0, 6, 7), &[r("DBGWCR6_EL1", "Debug Watchpoint Control Register 6")]),
    (SysRegKey::new(2, 0, 0, 7, 7), &[r("DBGWCR7_EL1", "Debug Watchpoint Control Register 7")]),
    (SysRegKey::new(2, 0, 0, 8, 7), &[r("DBGWCR8_EL1", "Debug Watchpoint Control Register 8")]),
    (SysRegKey::new(2, 0, 0, 9, 7), &[r("DBGWCR9_EL1", "Debug Watchpoint Control Register 9")]),
    (SysRegKey::new(2, 0, 0, 10, 7), &[r("DBGWCR10_EL1", "Debug Watchpoint Control Register 10")]),
    (SysRegKey::new(2, 0, 0, 11, 7), &[r("DBGWCR11_EL1", "Debug Watchpoint Control Register 11")]),
    (SysRegKey::new(2, 0, 0, 12, 7), &[r("DBGWCR12_EL1", "Debug Watchpoint Control Register 12")]),
    (SysRegKey::new(2, 0, 0, 13, 7), &[r("DBGWCR13_EL1", "Debug Watchpoint Control Register 13")]),
    (SysRegKey::new(2, 0, 0, 14, 7), &[r("DBGWCR14_EL1", "Debug Watchpoint Control Register 14")]),
    (SysRegKey::new(2, 0, 0, 15, 7), &[r("DBGWCR15_EL1", "Debug Watchpoint Control Register 15")]),
    (SysRegKey::new(2, 3, 0, 1, 0), &[r("MDCCSR_EL0", "Monitor DCC Status Register")]),
    (SysRegKey::new(2, 0, 0, 2, 0), &[r("MDCCINT_EL1", "Monitor DCC Interrupt Enable Register")]),
    (SysRegKey::new(2, 0, 0, 2, 2), &[r("MDSCR_EL1", "Monitor Debug System Control Register")]),
    (SysRegKey::new(2, 0, 1, 0, 0), &[r("MDRAR_EL1", "Monitor Debug ROM Address Register")]),
    (SysRegKey::new(2, 0, 1, 0, 4), &[r("OSLAR_EL1", "OS Lock Access Register")]),
    (SysRegKey::new(2, 0, 1, 1, 4), &[r("OSLSR_EL1", "OS Lock Status Register")]),
    (SysRegKey::new(2, 0, 1, 3, 4), &[r("OSDLR_EL1", "OS Double Lock Register")]),
    (SysRegKey::new(2, 0, 1, 4, 4), &[r("DBGPRCR_EL1", "Debug Power Control Register")]),
    (SysRegKey::new(2, 0, 7, 8, 6), &[r("DBGCLAIMSET_EL1", "Debug Claim Tag Set register")]),
    (SysRegKey::new(2, 0, 7, 9, 6), &[r("DBGCLAIMCLR_EL1", "Debug Claim Tag Clear register")]),
    (SysRegKey::new(2, 0, 7, 14, 6), &[r("DBGAUTHSTATUS_EL1", "Debug Authentication Status register")]),
    (SysRegKey::new(3, 4, 1, 3, 1), &[r("SDER32_EL2", "AArch32 Secure Debug Enable Register")]),
    (SysRegKey::new(3, 0, 1, 2, 1), &[r("TRFCR_EL1", "Trace Filter Control Register (EL1)")]),
    (SysRegKey::new(3, 4, 1, 2, 1), &[r("TRFCR_EL2", "Trace Filter Control Register (EL2)")]),
    (SysRegKey::new(3, 0, 10, 4, 3), &[r("LORC_EL1", "LORegion Control (EL1)")]),
    (SysRegKey::new(3, 0, 10, 4, 0), &[r("LORSA_EL1", "LORegion Start Address (EL1)")]),
    (SysRegKey::new(3, 0, 10, 4, 1), &[r("LOREA_EL1", "LORegion End Address (EL1)")]),
    (SysRegKey::new(3, 0, 10, 4, 2), &[r("LORN_EL1", "LORegion Number (EL1)")]),
    (SysRegKey::new(3, 0, 10, 4, 7), &[r("LORID_EL1", "LORegionID (EL1)")]),
    (SysRegKey::new(3, 3, 9, 13, 0), &[r("PMCCNTR_EL0", "Performance Monitors Cycle Count Register")]),
    (SysRegKey::new(3, 3, 9, 12, 6), &[r("PMCEID0_EL0", "Performance Monitors Common Event Identification register 0")]),
    (SysRegKey::new(3, 3, 9, 12, 7), &[r("PMCEID1_EL0", "Performance Monitors Common Event Identification register 1")]),
    (SysRegKey::new(3, 3, 9, 12, 2), &[r("PMCNTENCLR_EL0", "Performance Monitors Count Enable Clear register")]),
    (SysRegKey::new(3, 3, 9, 12, 1), &[r("PMCNTENSET_EL0", "Performance Monitors Count Enable Set register")]),
    (SysRegKey::new(3, 3, 9, 12, 0), &[r("PMCR_EL0", "Performance Monitors Control Register")]),
    (SysRegKey::new(3, 3, 14, 8, 0), &[r("PMEVCNTR0_EL0", "Performance Monitors Event Count Register 0")]),
    (SysRegKey::new(3, 3, 14, 8, 1), &[r("PMEVCNTR1_EL0", "Performance Monitors Event Count Register 1")]),
    (SysRegKey::new(3, 3, 14, 8, 2), &[r("PMEVCNTR2_EL0", "Performance Monitors Event Count Register 2")]),
    (SysRegKey::new(3, 3, 14, 8, 3), &[r("PMEVCNTR3_EL0", "Performance Monitors Event Count Register 3")]),
    (SysRegKey::new(3, 3, 14, 8, 4), &[r("PMEVCNTR4_EL0", "Performance Monitors Event Count Register 4")]),
    (SysRegKey::new(3, 3, 14, 8, 5), &[r("PMEVCNTR5_EL0", "Performance Monitors Event Count Register 5")]),
    (SysRegKey::new(3, 3, 14, 8, 6), &[r("PMEVCNTR6_EL0", "Performance Monitors Event Count Register 6")]),
    (SysRegKey::new(3, 3, 14, 8, 7), &[r("PMEVCNTR7_EL0", "Performance Monitors Event Count Register 7")]),
    (SysRegKey::new(3, 3, 14, 9, 0), &[r("PMEVCNTR8_EL0", "Performance Monitors Event Count Register 8")]),
    (SysRegKey::new(3, 3, 14, 9, 1), &[r("PMEVCNTR9_EL0", "Performance Monitors Event Count Register 9")]),
    (SysRegKey::new(3, 3, 14, 9, 2), &[r("PMEVCNTR10_EL0", "Performance Monitors Event Count Register 10")]),
    (SysRegKey::new(3, 3, 14, 9, 3), &[r("PMEVCNTR11_EL0", "Performance Monitors Event Count Register 11")]),
    (SysRegKey::new(3, 3, 14, 9, 4), &[r("PMEVCNTR12_EL0", "Performance Monitors Event Count Register 12")]),
    (SysRegKey::new(3, 3, 14, 9, 5), &[r("PMEVCNTR13_EL0", "Performance Monitors Event Count Register 13")]),
    (SysRegKey::new(3, 3, 14, 9, 6), &[r("PMEVCNTR14_EL0", "Performance Monitors Event Count Register 14")]),
    (SysRegKey::new(3, 3, 14, 9, 7), &[r("PMEVCNTR15_EL0", "Performance Monitors Event Count Register 15")]),
    (SysRegKey::new(3, 3, 14, 10, 0), &[r("PMEVCNTR16_EL0", "Performance Monitors Event Count Register 16")]),
    (SysRegKey::new(3, 3, 14, 10, 1), &[r("PMEVCNTR17_EL0", "Performance Monitors Event Count Register 17")]),
    (SysRegKey::new(3, 3, 14, 10, 2), &[r("PMEVCNTR18_EL0", "Performance Monitors Event Count Register 18")]),
    (SysRegKey::new(3, 3, 14, 10, 3), &[r("PMEVCNTR19_EL0", "Performance Monitors Event Count Register 19")]),
    (SysRegKey::new(3, 3, 14, 10, 4), &[r("PMEVCNTR20_EL0", "Performance Monitors Event Count Register 20")]),
    (SysRegKey::new(3, 3, 14, 10, 5), &[r("PMEVCNTR21_EL0", "Performance Monitors Event Count Register 21")]),
    (SysRegKey::new(3, 3, 14, 10, 6), &[r("PMEVCNTR22_EL0", "Performance Monitors Event Count Register 22")]),
    (SysRegKey::new(3, 3, 14, 10, 7), &[r("PMEVCNTR23_EL0", "Performance Monitors Event Count Register 23")]),
    (SysRegKey::new(3, 3, 14, 11, 0), &[r("PMEVCNTR24_EL0", "Performance Monitors Event Count Register 24")]),
    (SysRegKey::new(3, 3, 14, 11, 1), &[r("PMEVCNTR25_EL0", "Performance Monitors Event Count Register 25")]),
    (SysRegKey::new(3, 3, 14, 11, 2), &[r("PMEVCNTR26_EL0", "Performance Monitors Event Count Register 26")]),
    (SysRegKey::new(3, 3, 14, 11, 3), &[r("PMEVCNTR27_EL0", "Performance Monitors Event Count Register 27")]),
    (SysRegKey::new(3, 3, 14, 11, 4), &[r("PMEVCNTR28_EL0", "Performance Monitors Event Count Register 28")]),
    (SysRegKey::new(3, 3, 14, 11, 5), &[r("PMEVCNTR29_EL0", "Performance Monitors Event Count Register 29")]),
    (SysRegKey::new(3, 3, 14, 11, 6), &[r("PMEVCNTR30_EL0", "Performance Monitors Event Count Register 30")]),
    (SysRegKey::new(3, 3, 14, 12, 0), &[r("PMEVTYPER0_EL0", "Performance Monitors Event Type Register 0")]),
    (SysRegKey::new(3, 3, 14, 12, 1), &[r("PMEVTYPER1_EL0", "Performance Monitors Event Type Register 1")]),
    (SysRegKey::new(3, 3, 14, 12, 2), &[r("PMEVTYPER2_EL0", "Performance Monitors Event Type Register 2")]),
    (SysRegKey::new(3, 3, 14, 12, 3), &[r("PMEVTYPER3_EL0", "Performance Monitors Event Type Register 3")]),
    (SysRegKey::new(3, 3, 14, 12, 4), &[r("PMEVTYPER4_EL0", "Performance Monitors Event Type Register 4")]),
    (SysRegKey::new(3, 3, 14, 12, 5), &[r("PMEVTYPER5_EL0", "Performance Monitors Event Type Register 5")]),
    (SysRegKey::new(3, 3, 14, 12, 6), &[r("PMEVTYPER6_EL0", "Performance Monitors Event Type Register 6")]),
    (SysRegKey::new(3, 3, 14, 12, 7), &[r("PMEVTYPER7_EL0", "Performance Monitors Event Type Register 7")]),
    (SysRegKey::new(3, 3, 14, 13, 0), &[r("PMEVTYPER8_EL0", "Performance Monitors Event Type Register 8")]),
    (SysRegKey::new(3, 3, 14, 13, 1), &[r("PMEVTYPER9_EL0", "Performance Monitors Event Type Register 9")]),
    (SysRegKey::new(3, 3, 14, 13, 2), &[r("PMEVTYPER10_EL0", "Performance Monitors Event Type Register 10")]),
    (SysRegKey::new(3, 3, 14, 13, 3), &[r("PMEVTYPER11_EL0", "Performance Monitors Event Type Register 11")]),
    (SysRegKey::new(3, 3, 14, 13, 4), &[r("PMEVTYPER12_EL0", "Performance Monitors Event Type Register 12")]),
    (SysRegKey::new(3, 3, 14, 13, 5), &[r("PMEVTYPER13_EL0", "Performance Monitors Event Type Register 13")]),
    (SysRegKey::new(3, 3, 14, 13, 6), &[r("PMEVTYPER14_EL0", "Performance Monitors Event Type Register 14")]),
    (SysRegKey::new(3, 3, 14, 13, 7), &[r("PMEVTYPER15_EL0", "Performance Monitors Event Type Register 15")]),
    (SysRegKey::new(3, 3, 14, 14, 0), &[r("PMEVTYPER16_EL0", "Performance Monitors Event Type Register 16")]),
    (SysRegKey::new(3, 3, 14, 14, 1), &[r("PMEVTYPER17_EL0", "Performance Monitors Event Type Register 17")]),
    (SysRegKey::new(3, 3, 14, 14, 2), &[r("PMEVTYPER18_EL0", "Performance Monitors Event Type Register 18")]),
    (SysRegKey::new(3, 3, 14, 14, 3), &[r("PMEVTYPER19_EL0", "Performance Monitors Event Type Register 19")]),
    (SysRegKey::new(3, 3, 14, 14, 4), &[r("PMEVTYPER20_EL0", "Performance Monitors Event Type Register 20")]),
    (SysRegKey::new(3, 3, 14, 14, 5), &[r("PMEVTYPER21_EL0", "Performance Monitors Event Type Register 21")]),
    (SysRegKey::new(3, 3, 14, 14, 6), &[r("PMEVTYPER22_EL0", "Performance Monitors Event Type Register 22")]),
    (SysRegKey::new(3, 3, 14, 14, 7), &[r("PMEVTYPER23_EL0", "Performance Monitors Event Type Register 23")]),
    (SysRegKey::new(3, 3, 14, 15, 0), &[r("PMEVTYPER24_EL0", "Performance Monitors Event Type Register 24")]),
    (SysRegKey::new(3, 3, 14, 15, 1), &[r("PMEVTYPER25_EL0", "Performance Monitors Event Type Register 25")]),
    (SysRegKey::new(3, 3, 14, 15, 2), &[r("PMEVTYPER26_EL0", "Performance Monitors Event Type Register 26")]),
    (SysRegKey::new(3, 3, 14, 15, 3), &[r("PMEVTYPER27_EL0", "Performance Monitors Event Type Register 27")]),
    (SysRegKey::new(3, 3, 14, 15, 4), &[r("PMEVTYPER28_EL0", "Performance Monitors Event Type Register 28")]),
    (SysRegKey::new(3, 3, 14, 15, 5), &[r("PMEVTYPER29_EL0", "Performance Monitors Event Type Register 29")]),
    (SysRegKey::new(3, 3, 14, 15, 6), &[r("PMEVTYPER30_EL0", "Performance Monitors Event Type Register 30")]),
    (SysRegKey::new(3, 0, 9, 14, 2), &[r("PMINTENCLR_EL1", "Performance Monitors Interrupt Enable Clear register")]),
    (SysRegKey::new(3, 0, 9, 14, 1), &[r("PMINTENSET_EL1", "Performance Monitors Interrupt Enable Set register")]),
    (SysRegKey::new(3, 3, 9, 12, 3), &[r("PMOVSCLR_EL0", "Performance Monitors Overflow Flag Status Clear Register")]),
    (SysRegKey::new(3, 3, 9, 14, 3), &[r("PMOVSSET_EL0", "Performance Monitors Overflow Flag Status Set register")]),
    (SysRegKey::new(3, 3, 9, 12, 5), &[r("PMSELR_EL0", "Performance Monitors Event Counter Selection Register")]),
    (SysRegKey::new(3, 3, 9, 12, 4), &[r("PMSWINC_EL0", "Performance Monitors Software Increment register")]),
    (SysRegKey::new(3, 3, 9, 14, 0), &[r("PMUSERENR_EL0", "Performance Monitors User Enable Register")]),
    (SysRegKey::new(3, 3, 9, 13, 2), &[r("PMXEVCNTR_EL0", "Performance Monitors Selected Event Count Register")]),
    (SysRegKey::new(3, 3, 9, 13, 1), &[r("PMXEVTYPER_EL0", "Performance Monitors Selected Event Type Register")]),
    (SysRegKey::new(3, 3, 14, 0, 0), &[r("CNTFRQ_EL0", "Counter-timer Frequency register")]),
    (SysRegKey::new(3, 4, 14, 1, 0), &[r("CNTHCTL_EL2", "Counter-timer Hypervisor Control register")]),
    (SysRegKey::new(3, 4, 14, 2, 1), &[r("CNTHP_CTL_EL2", "Counter-timer Hypervisor Physical Timer Control register")]),
    (SysRegKey::new(3, 4, 14, 2, 2), &[r("CNTHP_CVAL_EL2", "Counter-timer Hypervisor Physical Timer CompareValue register")]),
    (SysRegKey::new(3, 4, 14, 2, 0), &[r("CNTHP_TVAL_EL2", "Counter-timer Hypervisor Physical Timer TimerValue register")]),
    (SysRegKey::new(3, 4, 14, 3, 0), &[r("CNTHV_TVAL_EL2", "Counter-timer Virtual Timer TimerValue register (EL2)")]),
    (SysRegKey::new(3, 4, 14, 3, 1), &[r("CNTHV_CTL_EL2", "Counter-timer Virtual Timer Control register (EL2)")]),
    (SysRegKey::new(3, 4, 14, 3, 2), &[r("CNTHV_CVAL_EL2", "Counter-timer Virtual Timer CompareValue register (EL2)")]),
    (SysRegKey::new(3, 0, 14, 1, 0), &[r("CNTKCTL_EL1", "Counter-timer Hypervisor Control register")]),
    (SysRegKey::new(3, 5, 14, 1, 0), &[r("CNTKCTL_EL12", "Counter-timer Kernel Control register")]),
    (SysRegKey::new(3, 3, 14, 2, 1), &[r("CNTP_CTL_EL0", "Counter-timer Hypervisor Physical Timer Control register")]),
    (SysRegKey::new(3, 5, 14, 2, 1), &[r("CNTP_CTL_EL02", "Counter-timer Physical Timer Control register")]),
    (SysRegKey::new(3, 3, 14, 2, 2), &[r("CNTP_CVAL_EL0", "Counter-timer Physical Timer CompareValue register")]),
    (SysRegKey::new(3, 5, 14, 2, 2), &[r("CNTP_CVAL_EL02", "Counter-timer Physical Timer CompareValue register")]),
    (SysRegKey::new(3, 3, 14, 2, 0), &[r("CNTP_TVAL_EL0", "Counter-timer Physical Timer TimerValue register")]),
    (SysRegKey::new(3, 5, 14, 2, 0), &[r("CNTP_TVAL_EL02", "Counter-timer Physical Timer TimerValue register")]),
    (SysRegKey::new(3, 3, 14, 0, 1), &[r("CNTPCT_EL0", "Counter-timer Physical Count register")]),
    (SysRegKey::new(3, 7, 14, 2, 1), &[r("CNTPS_CTL_EL1", "Counter-timer Physical Secure Timer Control register")]),
    (SysRegKey::new(3, 7, 14, 2, 2), &[r("CNTPS_CVAL_EL1", "Counter-timer Physical Secure Timer CompareValue register")]),
    (SysRegKey::new(3, 7, 14, 2, 0), &[r("CNTPS_TVAL_EL1", "Counter-timer Physical Secure Timer TimerValue register")]),
    (SysRegKey::new(3, 3, 14, 3, 1), &[r("CNTV_CTL_EL0", "Counter-timer Virtual Timer Control register (EL2)")]),
    (SysRegKey::new(3, 5, 14, 3, 1), &[r("CNTV_CTL_EL02", "Counter-timer Virtual Timer Control register")]),
    (SysRegKey::new(3, 3, 14, 3, 2), &[r("CNTV_CVAL_EL0", "Counter-timer Virtual Timer CompareValue register")]),
    (SysRegKey::new(3, 5, 14, 3, 2), &[r("CNTV_CVAL_EL02", "Counter-timer Virtual Timer CompareValue register")]),
    (SysRegKey::new(3, 3, 14, 3, 0), &[r("CNTV_TVAL_EL0", "Counter-timer Virtual Timer TimerValue register")]),
    (SysRegKey::new(3, 5, 14, 3, 0), &[r("CNTV_TVAL_EL02", "Counter-timer Virtual Timer TimerValue register")]),
    (SysRegKey::new(3, 3, 14, 0, 2), &[r("CNTVCT_EL0", "Counter-timer Virtual Count register")]),
    (SysRegKey::new(3, 4, 14, 0, 3), &[r("CNTVOFF_EL2", "Counter-timer Virtual Offset register")]),
    (SysRegKey::new(3, 4, 14, 5, 1), &[r("CNTHPS_CTL_EL2", "Counter-timer Secure Physical Timer Control register (EL2)")]),
    (SysRegKey::new(3, 4, 14, 5, 2), &[r("CNTHPS_CVAL_EL2", "Counter-timer Secure Physical Timer CompareValue register (EL2)")]),
    (SysRegKey::new(3, 4, 14, 5, 0), &[r("CNTHPS_TVAL_EL2", "Counter-timer Secure Physical Timer TimerValue register (EL2)")]),
    (SysRegKey::new(3, 4, 14, 4, 1), &[r("CNTHVS_CTL_EL2", "Counter-timer Secure Virtual Timer Control register (EL2)")]),
    (SysRegKey::new(3, 4, 14, 4, 2), &[r("CNTHVS_CVAL_EL2", "Counter-timer Secure Virtual Timer CompareValue register (EL2)")]),
    (SysRegKey::new(3, 4, 14, 4, 0), &[r("CNTHVS_TVAL_EL2", "Counter-timer Secure Virtual Timer TimerValue register (EL2)")]),
    (SysRegKey::new(3, 3, 14, 0, 5), &[r("CNTPCTSS_EL0", "Counter-timer Self-Synchronized Physical Count register")]),
    (SysRegKey::new(3, 4, 14, 0, 6), &[r("CNTPOFF_EL2", "Counter-timer Physical Offset register")]),
    (SysRegKey::new(3, 3, 14, 0, 6), &[r("CNTVCTSS_EL0", "Counter-timer Self-Synchronized Virtual Count register")]),
    (SysRegKey::new(3, 0, 12, 8, 4), &[r("ICC_AP0R0_EL1", "Interrupt Controller Active Priorities Group 0 Register 0"), r("ICV_AP0R0_EL1", "Interrupt Controller Virtual Active Priorities Group 0 Registers")]),
    (SysRegKey::new(3, 0, 12, 8, 5), &[r("ICC_AP0R1_EL1", "Interrupt Controller Active Priorities Group 0 Register 1"), r("ICV_AP0R1_EL1", "Interrupt Controller Virtual Active Priorities Group 0 Registers")]),
    (SysRegKey::new(3, 0, 12, 8, 6), &[r("ICC_AP0R2_EL1", "Interrupt Controller Active Priorities Group 0 Register 2"), r("ICV_AP0R2_EL1", "Interrupt Controller Virtual Active Priorities Group 0 Registers")]),
    (SysRegKey::new(3, 0, 12, 8, 7), &[r("ICC_AP0R3_EL1", "Interrupt Controller Active Priorities Group 0 Register 3"), r("ICV_AP0R3_EL1", "Interrupt Controller Virtual Active Priorities Group 0 Registers")]),
    (SysRegKey::new(3, 0, 12, 9, 0), &[r("ICC_AP1R0_EL1", "Interrupt Controller Active Priorities Group 1 Register 0"), r("ICV_AP1R0_EL1", "Interrupt Controller Virtual Active Priorities Group 1 Registers")]),
    (SysRegKey::new(3, 0, 12, 9, 1), &[r("ICC_AP1R1_EL1", "Interrupt Controller Active Priorities Group 1 Register 1"), r("ICV_AP1R1_EL1", "Interrupt Controller Virtual Active Priorities Group 1 Registers")]),
    (SysRegKey::new(3, 0, 12, 9, 2), &[r("ICC_AP1R2_EL1", "Interrupt Controller Active Priorities Group 1 Register 2"), r("ICV_AP1R2_EL1", "Interrupt Controller Virtual Active Priorities Group 1 Registers")]),
    (SysRegKey::new(3, 0, 12, 9, 3), &[r("ICC_AP1R3_EL1", "Interrupt Controller Active Priorities Group 1 Register 3"), r("ICV_AP1R3_EL1", "Interrupt Controller Virtual Active Priorities Group 1 Registers")]),
    (SysRegKey::new(3, 0, 12, 11, 6), &[r("ICC_ASGI1R_EL1", "Interrupt Controller Alias Software Generated Interrupt Group 1 Register")]),
    (SysRegKey::new(3, 0, 12, 8, 3), &[r("ICC_BPR0_EL1", "Interrupt Controller Binary Point Register 0"), r("ICV_BPR0_EL1", "Interrupt Controller Virtual Binary Point Register 0")]),
    (SysRegKey::new(3, 0, 12, 12, 3), &[r("ICC_BPR1_EL1", "Interrupt Controller Binary Point Register 1"), r("ICV_BPR1_EL1", "Interrupt Controller Virtual Binary Point Register 1")]),
    (SysRegKey::new(3, 0, 12, 12, 4), &[r("ICC_CTLR_EL1", "Interrupt Controller Virtual Control Register"), r("ICV_CTLR_EL1", "Interrupt Controller Virtual Control Register")]),
    (SysRegKey::new(3, 6, 12, 12, 4), &[r("ICC_CTLR_EL3", "Interrupt Controller Control Register (EL3)")]),
    (SysRegKey::new(3, 0, 12, 11, 1), &[r("ICC_DIR_EL1", "Interrupt Controller Deactivate Virtual Interrupt Register")]),
    (SysRegKey::new(3, 0, 12, 8, 1), &[r("ICC_EOIR0_EL1", "Interrupt Controller End Of Interrupt Register 0")]),
    (SysRegKey::new(3, 0, 12, 12, 1), &[r("ICC_EOIR1_EL1", "Interrupt Controller End Of Interrupt Register 1")]),
    (SysRegKey::new(3, 0, 12, 8, 2), &[r("ICC_HPPIR0_EL1", "Interrupt Controller Virtual Highest Priority Pending Interrupt Register 0"), r("ICV_HPPIR0_EL1", "Interrupt Controller Virtual Highest Priority Pending Interrupt Register 0")]),
    (SysRegKey::new(3, 0, 12, 12, 2), &[r("ICC_HPPIR1_EL1", "Interrupt Controller Virtual Highest Priority Pending Interrupt Register 1"), r("ICV_HPPIR1_EL1", "Interrupt Controller Virtual Highest Priority Pending Interrupt Register 1")]),
    (SysRegKey::new(3, 0, 12, 8, 0), &[r("ICC_IAR0_EL1", "Interrupt Controller Virtual Interrupt Acknowledge Register 0"), r("ICV_IAR0_EL1", "Interrupt Controller Virtual Interrupt Acknowledge Register 0")]),
    (SysRegKey::new(3, 0, 12, 12, 0), &[r("ICC_IAR1_EL1", "Interrupt Controller Interrupt Acknowledge Register 1"), r("ICV_IAR1_EL1", "Interrupt Controller Virtual Interrupt Acknowledge Register 1")]),
    (SysRegKey::new(3, 0, 12, 12, 6), &[r("ICC_IGRPEN0_EL1", "Interrupt Controller Virtual Interrupt Group 0 Enable register"), r("ICV_IGRPEN0_EL1", "Interrupt Controller Virtual Interrupt Group 0 Enable register")]),
    (SysRegKey::new(3, 0, 12, 12, 7), &[r("ICC_IGRPEN1_EL1", "Interrupt Controller Interrupt Group 1 Enable register"), r("ICV_IGRPEN1_EL1", "Interrupt Controller Virtual Interrupt Group 1 Enable register")]),
    (SysRegKey::new(3, 6, 12, 12, 7), &[r("ICC_IGRPEN1_EL3", "Interrupt Controller Interrupt Group 1 Enable register (EL3)")]),
    (SysRegKey::new(3, 0, 4, 6, 0), &[r("ICC_PMR_EL1", "Interrupt Controller Interrupt Priority Mask Register"), r("ICV_PMR_EL1", "Interrupt Controller Virtual Interrupt Priority Mask Register")]),
    (SysRegKey::new(3, 0, 12, 11, 3), &[r("ICC_RPR_EL1", "Interrupt Controller Running Priority Register"), r("ICV_RPR_EL1", "Interrupt Controller Virtual Running Priority Register")]),
    (SysRegKey::new(3, 0, 12, 11, 0), &[r("ICC_SEIEN_EL1", "Interrupt Controller System Error Interrupt Enable Register")]),
    (SysRegKey::new(3, 0, 12, 11, 7), &[r("ICC_SGI0R_EL1", "Interrupt Controller Software Generated Interrupt Group 0 Register")]),
    (SysRegKey::new(3, 0, 12, 11, 5), &[r("ICC_SGI1R_EL1", "Interrupt Controller Software Generated Interrupt Group 1 Register")]),
    (SysRegKey::new(3, 0, 12, 12, 5), &[r("ICC_SRE_EL1", "Interrupt Controller System Register Enable register (EL1)")]),
    (SysRegKey::new(3, 4, 12, 9, 5), &[r("ICC_SRE_EL2", "Interrupt Controller System Register Enable register (EL2)")]),
    (SysRegKey::new(3, 6, 12, 12, 5), &[r("ICC_SRE_EL3", "Interrupt Controller System Register Enable register (EL3)")]),
    (SysRegKey::new(3, 4, 12, 8, 0), &[r("ICH_AP0R0_EL2", "Interrupt Controller Hyp Active Priorities Group 0 Register 0")]),
    (SysRegKey::new(3, 4, 12, 8, 1), &[r("ICH_AP0R1_EL2", "Interrupt Controller Hyp Active Priorities Group 0 Register 1")]),
    (SysRegKey::new(3, 4, 12, 8, 2), &[r("ICH_AP0R2_EL2", "Interrupt Controller Hyp Active Priorities Group 0 Register 2")]),
    (SysRegKey::new(3, 4, 12, 8, 3), &[r("ICH_AP0R3_EL2", "Interrupt Controller Hyp Active Priorities Group 0 Register 3")]),
    (SysRegKey::new(3, 4, 12, 9, 0), &[r("ICH_AP1R0_EL2", "Interrupt Controller Hyp Active Priorities Group 1 Register 0")]),
    (SysRegKey::new(3, 4, 12, 9, 1), &[r("ICH_AP1R1_EL2", "Interrupt Controller Hyp Active Priorities Group 1 Register 1")]),
    (SysRegKey::new(3, 4, 12, 9, 2), &[r("ICH_AP1R2_EL2", "Interrupt Controller Hyp Active Priorities Group 1 Register 2")]),
    (SysRegKey::new(3, 4, 12, 9, 3), &[r("ICH_AP1R3_EL2", "Interrupt Controller Hyp Active Priorities Group 1 Register 3")]),
    (SysRegKey::new(3, 4, 12, 11, 3), &[r("ICH_EISR_EL2", "Interrupt Controller End of Interrupt Status Register")]),
    (SysRegKey::new(3, 4, 12, 11, 5), &[r("ICH_ELSR_EL2", "Interrupt Controller Empty List Register Status Register"), r("ICH_ELRSR_EL2", "Interrupt Controller Empty List Register Status Register")]),
    (SysRegKey::new(3, 4, 12, 11, 0), &[r("ICH_HCR_EL2", "Interrupt Controller Hyp Control Register")]),
    (SysRegKey::new(3, 4, 12, 12, 0), &[r("ICH_LR0_EL2", "Interrupt Controller List Register 0")]),
    (SysRegKey::new(3, 4, 12, 12, 1), &[r("ICH_LR1_EL2", "Interrupt Controller List Register 1")]),
    (SysRegKey::new(3, 4, 12, 12, 2), &[r("ICH_LR2_EL2", "Interrupt Controller List Register 2")]),
    (SysRegKey::new(3, 4, 12, 12, 3), &[r("ICH_LR3_EL2", "Interrupt Controller List Register 3")]),
    (SysRegKey::new(3, 4, 12, 12, 4), &[r("ICH_LR4_EL2", "Interrupt Controller List Register 4")]),
    (SysRegKey::new(3, 4, 12, 12, 5), &[r("ICH_LR5_EL2", "Interrupt Controller List Register 5")]),
    (SysRegKey::new(3, 4, 12, 12, 6), &[r("ICH_LR6_EL2", "Interrupt Controller List Register 6")]),
    (SysRegKey::new(3, 4, 12, 12, 7), &[r("ICH_LR7_EL2", "Interrupt Controller List Register 7")]),
    (SysRegKey::new(3, 4, 12, 13, 0), &[r("ICH_LR8_EL2", "Interrupt Controller List Register 8")]),
    (SysRegKey::new(3, 4, 12, 13, 1), &[r("ICH_LR9_EL2", "Interrupt Controller List Register 9")]),
    (SysRegKey::new(3, 4, 12, 13, 2), &[r("ICH_LR10_EL2", "Interrupt Controller List Register 10")]),
    (SysRegKey::new(3, 4, 12, 13, 3), &[r("ICH_LR11_EL2", "Interrupt Controller List Register 11")]),
    (SysRegKey::new(3, 4, 12, 13, 4), &[r("ICH_LR12_EL2", "Interrupt Controller List Register 12")]),
    (SysRegKey::new(3, 4, 12, 13, 5), &[r("ICH_LR13_EL2", "Interrupt Controller List Register 13")]),
    (SysRegKey::new(3, 4, 12, 13, 6), &[r("ICH_LR14_EL2", "Interrupt Controller List Register 14")]),
    (SysRegKey::new(3, 4, 12, 13, 7), &[r("ICH_LR15_EL2", "Interrupt Controller List Register 15")]),
    (SysRegKey::new(3, 4, 12, 11, 2), &[r("ICH_MISR_EL2", "Interrupt Controller Maintenance Interrupt State Register")]),
    (SysRegKey::new(3, 4, 12, 11, 7), &[r("ICH_VMCR_EL2", "Interrupt Controller Virtual Machine Control Register")]),
    (SysRegKey::new(3, 4, 12, 9, 4), &[r("ICH_VSEIR_EL2", "Interrupt Controller Virtual System Error Interrupt Register")]),
    (SysRegKey::new(3, 4, 12, 11, 1), &[r("ICH_VTR_EL2", "Interrupt Controller VGIC Type Register")]),
];

/// Cache, TLB and address translation operations encoded as `SYS`/`SYSL`.
#[rustfmt::skip]
pub(super) static SYSTEM_INSTRUCTIONS: &[Entry<SysInsnKey>] = &[
    (SysInsnKey::new(4, 7, 8, 6), &[r("AT S12E0R", "Address Translate Stages 1 and 2 EL0 Read")]),
    (SysInsnKey::new(4, 7, 8, 7), &[r("AT S12E0W", "Address Translate Stages 1 and 2 EL0 Write")]),
    (SysInsnKey::new(4, 7, 8, 4), &[r("AT S12E1R", "Address Translate Stages 1 and 2 EL1 Read")]),
    (SysInsnKey::new(4, 7, 8, 5), &[r("AT S12E1W", "Address Translate Stages 1 and 2 EL1 Write")]),
    (SysInsnKey::new(0, 7, 8, 2), &[r("AT S1E0R", "Address Translate Stage 1 EL0 Read")]),
    (SysInsnKey::new(0, 7, 8, 3), &[r("AT S1E0W", "Address Translate Stage 1 EL0 Write")]),
    (SysInsnKey::new(0, 7, 8, 0), &[r("AT S1E1R", "Address Translate Stage 1 EL1 Read")]),
    (SysInsnKey::new(0, 7, 9, 0), &[r("AT S1E1RP", "Address Translate Stage 1 EL1 Read PAN")]),
    (SysInsnKey::new(0, 7, 8, 1), &[r("AT S1E1W", "Address Translate Stage 1 EL1 Write")]),
    (SysInsnKey::new(0, 7, 9, 1), &[r("AT S1E1WP", "Address Translate Stage 1 EL1 Write PAN")]),
    (SysInsnKey::new(4, 7, 8, 0), &[r("AT S1E2R", "Address Translate Stage 1 EL2 Read")]),
    (SysInsnKey::new(4, 7, 8, 1), &[r("AT S1E2W", "Address Translate Stage 1 EL2 Write")]),
    (SysInsnKey::new(6, 7, 8, 0), &[r("AT S1E3R", "Address Translate Stage 1 EL3 Read")]),
    (SysInsnKey::new(6, 7, 8, 1), &[r("AT S1E3W", "Address Translate Stage 1 EL3 Write")]),
    (SysInsnKey::new(3, 7, 3, 4), &[r("CFP RCTX", "Control Flow Prediction Restriction by Context")]),
    (SysInsnKey::new(3, 7, 3, 7), &[r("CPP RCTX", "Cache Prefetch Prediction Restriction by Context")]),
    (SysInsnKey::new(0, 7, 10, 6), &[r("DC CGDSW", "Clean of Data and Allocation Tags by Set/Way")]),
    (SysInsnKey::new(3, 7, 10, 5), &[r("DC CGDVAC", "Clean of Data and Allocation Tags by VA to PoC")]),
    (SysInsnKey::new(3, 7, 13, 5), &[r("DC CGDVADP", "Clean of Data and Allocation Tags by VA to PoDP")]),
    (SysInsnKey::new(3, 7, 12, 5), &[r("DC CGDVAP", "Clean of Data and Allocation Tags by VA to PoP")]),
    (SysInsnKey::new(0, 7, 10, 4), &[r("DC CGSW", "Clean of Allocation Tags by Set/Way")]),
    (SysInsnKey::new(3, 7, 10, 3), &[r("DC CGVAC", "Clean of Allocation Tags by VA to PoC")]),
    (SysInsnKey::new(3, 7, 13, 3), &[r("DC CGVADP", "Clean of Allocation Tags by VA to PoDP")]),
    (SysInsnKey::new(3, 7, 12, 3), &[r("DC CGVAP", "Clean of Allocation Tags by VA to PoP")]),
    (SysInsnKey::new(0, 7, 14, 6), &[r("DC CIGDSW", "Clean and Invalidate of Data and Allocation Tags by Set/Way")]),
    (SysInsnKey::new(3, 7, 14, 5), &[r("DC CIGDVAC", "Clean and Invalidate of Data and Allocation Tags by VA to PoC")]),
    (SysInsnKey::new(0, 7, 14, 4), &[r("DC CIGSW", "Clean and Invalidate of Allocation Tags by Set/Way")]),
    (SysInsnKey::new(3, 7, 14, 3), &[r("DC CIGVAC", "Clean and Invalidate of Allocation Tags by VA to PoC")]),
    (SysInsnKey::new(0, 7, 14, 2), &[r("DC CISW", "Data or unified Cache line Clean and Invalidate by Set/Way")]),
    (SysInsnKey::new(3, 7, 14, 1), &[r("DC CIVAC", "Data or unified Cache line Clean and Invalidate by VA to PoC")]),
    (SysInsnKey::new(0, 7, 10, 2), &[r("DC CSW", "Data or unified Cache line Clean by Set/Way")]),
    (SysInsnKey::new(3, 7, 10, 1), &[r("DC CVAC", "Data or unified Cache line Clean by VA to PoC")]),
    (SysInsnKey::new(3, 7, 13, 1), &[r("DC CVADP", "Data or unified Cache line Clean by VA to PoDP")]),
    (SysInsnKey::new(3, 7, 12, 1), &[r("DC CVAP", "Data or unified Cache line Clean by VA to PoP")]),
    (SysInsnKey::new(3, 7, 11, 1), &[r("DC CVAU", "Data or unified Cache line Clean by VA to PoU")]),
    (SysInsnKey::new(3, 7, 4, 3), &[r("DC GVA", "Data Cache set Allocation Tag by VA")]),
    (SysInsnKey::new(3, 7, 4, 4), &[r("DC GZVA", "Data Cache set Allocation Tags and Zero by VA")]),
    (SysInsnKey::new(0, 7, 6, 6), &[r("DC IGDSW", "Invalidate of Data and Allocation Tags by Set/Way")]),
    (SysInsnKey::new(0, 7, 6, 5), &[r("DC IGDVAC", "Invalidate of Data and Allocation Tags by VA to PoC")]),
    (SysInsnKey::new(0, 7, 6, 4), &[r("DC IGSW", "Invalidate of Allocation Tags by Set/Way")]),
    (SysInsnKey::new(0, 7, 6, 3), &[r("DC IGVAC", "Invalidate of Allocation Tags by VA to PoC")]),
    (SysInsnKey::new(0, 7, 6, 2), &[r("DC ISW", "Data or unified Cache line Invalidate by Set/Way")]),
    (SysInsnKey::new(0, 7, 6, 1), &[r("DC IVAC", "Data or unified Cache line Invalidate by VA to PoC")]),
    (SysInsnKey::new(3, 7, 4, 1), &[r("DC ZVA", "Data Cache Zero by VA")]),
    (SysInsnKey::new(3, 7, 3, 5), &[r("DVP RCTX", "Data Value Prediction Restriction by Context")]),
    (SysInsnKey::new(0, 7, 5, 0), &[r("IC IALLU", "Instruction Cache Invalidate All to PoU")]),
    (SysInsnKey::new(0, 7, 1, 0), &[r("IC IALLUIS", "Instruction Cache Invalidate All to PoU, Inner Shareable")]),
    (SysInsnKey::new(3, 7, 5, 1), &[r("IC IVAU", "Instruction Cache line Invalidate by VA to PoU")]),
    (SysInsnKey::new(4, 8, 7, 4), &[r("TLBI ALLE1, TLBI ALLE1NXS", "TLB Invalidate All, EL1")]),
    (SysInsnKey::new(4, 8, 3, 4), &[r("TLBI ALLE1IS, TLBI ALLE1ISNXS", "TLB Invalidate All, EL1, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 1, 4), &[r("TLBI ALLE1OS, TLBI ALLE1OSNXS", "TLB Invalidate All, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 7, 0), &[r("TLBI ALLE2, TLBI ALLE2NXS", "TLB Invalidate All, EL2")]),
    (SysInsnKey::new(4, 8, 3, 0), &[r("TLBI ALLE2IS, TLBI ALLE2ISNXS", "TLB Invalidate All, EL2, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 1, 0), &[r("TLBI ALLE2OS, TLBI ALLE2OSNXS", "TLB Invalidate All, EL2, Outer Shareable")]),
    (SysInsnKey::new(6, 8, 7, 0), &[r("TLBI ALLE3, TLBI ALLE3NXS", "TLB Invalidate All, EL3")]),
    (SysInsnKey::new(6, 8, 3, 0), &[r("TLBI ALLE3IS, TLBI ALLE3ISNXS", "TLB Invalidate All, EL3, Inner Shareable")]),
    (SysInsnKey::new(6, 8, 1, 0), &[r("TLBI ALLE3OS, TLBI ALLE3OSNXS", "TLB Invalidate All, EL3, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 7, 2), &[r("TLBI ASIDE1, TLBI ASIDE1NXS", "TLB Invalidate by ASID, EL1")]),
    (SysInsnKey::new(0, 8, 3, 2), &[r("TLBI ASIDE1IS, TLBI ASIDE1ISNXS", "TLB Invalidate by ASID, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 1, 2), &[r("TLBI ASIDE1OS, TLBI ASIDE1OSNXS", "TLB Invalidate by ASID, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 4, 1), &[r("TLBI IPAS2E1, TLBI IPAS2E1NXS", "TLB Invalidate by Intermediate Physical Address, Stage 2, EL1")]),
    (SysInsnKey::new(4, 8, 0, 1), &[r("TLBI IPAS2E1IS, TLBI IPAS2E1ISNXS", "TLB Invalidate by Intermediate Physical Address, Stage 2, EL1, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 4, 0), &[r("TLBI IPAS2E1OS, TLBI IPAS2E1OSNXS", "TLB Invalidate by Intermediate Physical Address, Stage 2, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 4, 5), &[r("TLBI IPAS2LE1, TLBI IPAS2LE1NXS", "TLB Invalidate by Intermediate Physical Address, Stage 2, Last level, EL1")]),
    (SysInsnKey::new(4, 8, 0, 5), &[r("TLBI IPAS2LE1IS, TLBI IPAS2LE1ISNXS", "TLB Invalidate by Intermediate Physical Address, Stage 2, Last level, EL1, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 4, 4), &[r("TLBI IPAS2LE1OS, TLBI IPAS2LE1OSNXS", "TLB Invalidate by Intermediate Physical Address, Stage 2, Last level, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 4, 2), &[r("TLBI RIPAS2E1, TLBI RIPAS2E1NXS", "TLB Range Invalidate by Intermediate Physical Address, Stage 2, EL1")]),
    (SysInsnKey::new(4, 8, 0, 2), &[r("TLBI RIPAS2E1IS, TLBI RIPAS2E1ISNXS", "TLB Range Invalidate by Intermediate Physical Address, Stage 2, EL1, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 4, 3), &[r("TLBI RIPAS2E1OS, TLBI RIPAS2E1OSNXS", "TLB Range Invalidate by Intermediate Physical Address, Stage 2, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 4, 6), &[r("TLBI RIPAS2LE1, TLBI RIPAS2LE1NXS", "TLB Range Invalidate by Intermediate Physical Address, Stage 2, Last level, EL1")]),
    (SysInsnKey::new(4, 8, 0, 6), &[r("TLBI RIPAS2LE1IS, TLBI RIPAS2LE1ISNXS", "TLB Range Invalidate by Intermediate Physical Address, Stage 2, Last level, EL1, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 4, 7), &[r("TLBI RIPAS2LE1OS, TLBI RIPAS2LE1OSNXS", "TLB Range Invalidate by Intermediate Physical Address, Stage 2, Last level, EL1, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 6, 3), &[r("TLBI RVAAE1, TLBI RVAAE1NXS", "TLB Range Invalidate by VA, All ASID, EL1")]),
    (SysInsnKey::new(0, 8, 2, 3), &[r("TLBI RVAAE1IS, TLBI RVAAE1ISNXS", "TLB Range Invalidate by VA, All ASID, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 5, 3), &[r("TLBI RVAAE1OS, TLBI RVAAE1OSNXS", "TLB Range Invalidate by VA, All ASID, EL1, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 6, 7), &[r("TLBI RVAALE1, TLBI RVAALE1NXS", "TLB Range Invalidate by VA, All ASID, Last level, EL1")]),
    (SysInsnKey::new(0, 8, 2, 7), &[r("TLBI RVAALE1IS, TLBI RVAALE1ISNXS", "TLB Range Invalidate by VA, All ASID, Last Level, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 5, 7), &[r("TLBI RVAALE1OS, TLBI RVAALE1OSNXS", "TLB Range Invalidate by VA, All ASID, Last Level, EL1, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 6, 1), &[r("TLBI RVAE1, TLBI RVAE1NXS", "TLB Range Invalidate by VA, EL1")]),
    (SysInsnKey::new(0, 8, 2, 1), &[r("TLBI RVAE1IS, TLBI RVAE1ISNXS", "TLB Range Invalidate by VA, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 5, 1), &[r("TLBI RVAE1OS, TLBI RVAE1OSNXS", "TLB Range Invalidate by VA, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 6, 1), &[r("TLBI RVAE2, TLBI RVAE2NXS", "TLB Range Invalidate by VA, EL2")]),
    (SysInsnKey::new(4, 8, 2, 1), &[r("TLBI RVAE2IS, TLBI RVAE2ISNXS", "TLB Range Invalidate by VA, EL2, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 5, 1), &[r("TLBI RVAE2OS, TLBI RVAE2OSNXS", "TLB Range Invalidate by VA, EL2, Outer Shareable")]),
    (SysInsnKey::new(6, 8, 6, 1), &[r("TLBI RVAE3, TLBI RVAE3NXS", "TLB Range Invalidate by VA, EL3")]),
    (SysInsnKey::new(6, 8, 2, 1), &[r("TLBI RVAE3IS, TLBI RVAE3ISNXS", "TLB Range Invalidate by VA, EL3, Inner Shareable")]),
    (SysInsnKey::new(6, 8, 5, 1), &[r("TLBI RVAE3OS, TLBI RVAE3OSNXS", "TLB Range Invalidate by VA, EL3, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 6, 5), &[r("TLBI RVALE1, TLBI RVALE1NXS", "TLB Range Invalidate by VA, Last level, EL1")]),
    (SysInsnKey::new(0, 8, 2, 5), &[r("TLBI RVALE1IS, TLBI RVALE1ISNXS", "TLB Range Invalidate by VA, Last level, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 5, 5), &[r("TLBI RVALE1OS, TLBI RVALE1OSNXS", "TLB Range Invalidate by VA, Last level, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 6, 5), &[r("TLBI RVALE2, TLBI RVALE2NXS", "TLB Range Invalidate by VA, Last level, EL2")]),
    (SysInsnKey::new(4, 8, 2, 5), &[r("TLBI RVALE2IS, TLBI RVALE2ISNXS", "TLB Range Invalidate by VA, Last level, EL2, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 5, 5), &[r("TLBI RVALE2OS, TLBI RVALE2OSNXS", "TLB Range Invalidate by VA, Last level, EL2, Outer Shareable")]),
    (SysInsnKey::new(6, 8, 6, 5), &[r("TLBI RVALE3, TLBI RVALE3NXS", "TLB Range Invalidate by VA, Last level, EL3")]),
    (SysInsnKey::new(6, 8, 2, 5), &[r("TLBI RVALE3IS, TLBI RVALE3ISNXS", "TLB Range Invalidate by VA, Last level, EL3, Inner Shareable")]),
    (SysInsnKey::new(6, 8, 5, 5), &[r("TLBI RVALE3OS, TLBI RVALE3OSNXS", "TLB Range Invalidate by VA, Last level, EL3, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 7, 3), &[r("TLBI VAAE1, TLBI VAAE1NXS", "TLB Invalidate by VA, All ASID, EL1")]),
    (SysInsnKey::new(0, 8, 3, 3), &[r("TLBI VAAE1IS, TLBI VAAE1ISNXS", "TLB Invalidate by VA, All ASID, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 1, 3), &[r("TLBI VAAE1OS, TLBI VAAE1OSNXS", "TLB Invalidate by VA, All ASID, EL1, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 7, 7), &[r("TLBI VAALE1, TLBI VAALE1NXS", "TLB Invalidate by VA, All ASID, Last level, EL1")]),
    (SysInsnKey::new(0, 8, 3, 7), &[r("TLBI VAALE1IS, TLBI VAALE1ISNXS", "TLB Invalidate by VA, All ASID, Last Level, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 1, 7), &[r("TLBI VAALE1OS, TLBI VAALE1OSNXS", "TLB Invalidate by VA, All ASID, Last Level, EL1, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 7, 1), &[r("TLBI VAE1, TLBI VAE1NXS", "TLB Invalidate by VA, EL1")]),
    (SysInsnKey::new(0, 8, 3, 1), &[r("TLBI VAE1IS, TLBI VAE1ISNXS", "TLB Invalidate by VA, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 1, 1), &[r("TLBI VAE1OS, TLBI VAE1OSNXS", "TLB Invalidate by VA, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 7, 1), &[r("TLBI VAE2, TLBI VAE2NXS", "TLB Invalidate by VA, EL2")]),
    (SysInsnKey::new(4, 8, 3, 1), &[r("TLBI VAE2IS, TLBI VAE2ISNXS", "TLB Invalidate by VA, EL2, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 1, 1), &[r("TLBI VAE2OS, TLBI VAE2OSNXS", "TLB Invalidate by VA, EL2, Outer Shareable")]),
    (SysInsnKey::new(6, 8, 7, 1), &[r("TLBI VAE3, TLBI VAE3NXS", "TLB Invalidate by VA, EL3")]),
    (SysInsnKey::new(6, 8, 3, 1), &[r("TLBI VAE3IS, TLBI VAE3ISNXS", "TLB Invalidate by VA, EL3, Inner Shareable")]),
    (SysInsnKey::new(6, 8, 1, 1), &[r("TLBI VAE3OS, TLBI VAE3OSNXS", "TLB Invalidate by VA, EL3, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 7, 5), &[r("TLBI VALE1, TLBI VALE1NXS", "TLB Invalidate by VA, Last level, EL1")]),
    (SysInsnKey::new(0, 8, 3, 5), &[r("TLBI VALE1IS, TLBI VALE1ISNXS", "TLB Invalidate by VA, Last level, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 1, 5), &[r("TLBI VALE1OS, TLBI VALE1OSNXS", "TLB Invalidate by VA, Last level, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 7, 5), &[r("TLBI VALE2, TLBI VALE2NXS", "TLB Invalidate by VA, Last level, EL2")]),
    (SysInsnKey::new(4, 8, 3, 5), &[r("TLBI VALE2IS, TLBI VALE2ISNXS", "TLB Invalidate by VA, Last level, EL2, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 1, 5), &[r("TLBI VALE2OS, TLBI VALE2OSNXS", "TLB Invalidate by VA, Last level, EL2, Outer Shareable")]),
    (SysInsnKey::new(6, 8, 7, 5), &[r("TLBI VALE3, TLBI VALE3NXS", "TLB Invalidate by VA, Last level, EL3")]),
    (SysInsnKey::new(6, 8, 3, 5), &[r("TLBI VALE3IS, TLBI VALE3ISNXS", "TLB Invalidate by VA, Last level, EL3, Inner Shareable")]),
    (SysInsnKey::new(6, 8, 1, 5), &[r("TLBI VALE3OS, TLBI VALE3OSNXS", "TLB Invalidate by VA, Last level, EL3, Outer Shareable")]),
    (SysInsnKey::new(0, 8, 7, 0), &[r("TLBI VMALLE1, TLBI VMALLE1NXS", "TLB Invalidate by VMID, All at stage 1, EL1")]),
    (SysInsnKey::new(0, 8, 3, 0), &[r("TLBI VMALLE1IS, TLBI VMALLE1ISNXS", "TLB Invalidate by VMID, All at stage 1, EL1, Inner Shareable")]),
    (SysInsnKey::new(0, 8, 1, 0), &[r("TLBI VMALLE1OS, TLBI VMALLE1OSNXS", "TLB Invalidate by VMID, All at stage 1, EL1, Outer Shareable")]),
    (SysInsnKey::new(4, 8, 7, 6), &[r("TLBI VMALLS12E1, TLBI VMALLS12E1NXS", "TLB Invalidate by VMID, All at Stage 1 and 2, EL1")]),
    (SysInsnKey::new(4, 8, 3, 6), &[r("TLBI VMALLS12E1IS, TLBI VMALLS12E1ISNXS", "TLB Invalidate by VMID, All at Stage 1 and 2, EL1, Inner Shareable")]),
    (SysInsnKey::new(4, 8, 1, 6), &[r("TLBI VMALLS12E1OS, TLBI VMALLS12E1OSNXS", "TLB Invalidate by VMID, All at Stage 1 and 2, EL1, Outer Shareable")]),
];

/// Bit layouts for AArch64 system registers, keyed by canonical name.
#[rustfmt::skip]
pub(super) static FIELDS: &[(&str, &[FieldSpec])] = &[
    ("CurrentEL", &[
        FieldSpec::range(2, 2, "EL", "Current Exception Level"),
    ]),
    ("DAIF", &[
        FieldSpec::bit(6, "F", "FIQ mask"),
        FieldSpec::bit(7, "I", "IRQ mask"),
        FieldSpec::bit(8, "A", "SError interrupt mask"),
        FieldSpec::bit(9, "D", "Process state D mask"),
    ]),
    ("FPCR", &[
        FieldSpec::bit(0, "FIZ", "Flush Inputs to Zero"),
        FieldSpec::bit(1, "AH", "Alternate Handling"),
        FieldSpec::bit(2, "NEP", "Controls how the output elements other than the lowest element of the vector are determined for Advanced SIMD scalar instructions"),
        FieldSpec::bit(8, "IOE", "Invalid Operation exception trap enable"),
        FieldSpec::bit(9, "DZE", "Division by Zero exception trap enable"),
        FieldSpec::bit(10, "OFE", "Overflow exception trap enable"),
        FieldSpec::bit(11, "UFE", "Underflow exception trap enable"),
        FieldSpec::bit(12, "IXE", "Inexact exception trap enable"),
        FieldSpec::bit(15, "IDE", "Input Denormal exception trap enable"),
        FieldSpec::bit(19, "FZ16", "Flush-to-zero mode on half-precision instructions"),
        FieldSpec::bit(24, "FZ", "Flush-to-zero-mode"),
        FieldSpec::bit(25, "DN", "Default NaN mode"),
        FieldSpec::bit(26, "AHP", "Alternative Half-Precision"),
    ]),
    ("FPSR", &[
        FieldSpec::bit(0, "IOC", "Invalid Operation exception"),
        FieldSpec::bit(1, "DZC", "Division by Zero exception"),
        FieldSpec::bit(2, "OFC", "Overflow exception"),
        FieldSpec::bit(3, "UFC", "Underflow exception"),
        FieldSpec::bit(4, "IXC", "Inexact exception"),
        FieldSpec::bit(7, "IDC", "Input Denormal exception"),
        FieldSpec::bit(27, "QC", "Saturation"),
        FieldSpec::bit(28, "V", "Overflow flag"),
        FieldSpec::bit(29, "C", "Carry flag"),
        FieldSpec::bit(30, "Z", "Zero flag"),
        FieldSpec::bit(31, "N", "Negative flag"),
    ]),
    ("HCR_EL2", &[
        FieldSpec::bit(0, "VM", "Virtualization MMU enable"),
        FieldSpec::bit(1, "SWIO", "Set/Way Invalidation Override"),
        FieldSpec::bit(2, "PTW", "Protected Table Walk"),
        FieldSpec::bit(3, "FMO", "FIQ Mask Override"),
        FieldSpec::bit(4, "IMO", "IRQ Mask Override"),
        FieldSpec::bit(5, "AMO", "Asynchronous Abort Mask Override"),
        FieldSpec::bit(6, "VF", "Virtual FIQ exception"),
        FieldSpec::bit(7, "VI", "Virtual IRQ exception"),
        FieldSpec::bit(8, "VA", "Virtual Asynchronous Abort exception"),
        FieldSpec::bit(9, "FB", "Force Broadcast"),
        FieldSpec::bit(10, "BSU_0", "Barrier Shareability Upgrade"),
        FieldSpec::bit(11, "BSU_1", "Barrier Shareability Upgrade"),
        FieldSpec::bit(12, "DC", "Default cacheable"),
        FieldSpec::bit(13, "TWI", "Trap WFI"),
        FieldSpec::bit(14, "TWE", "Trap WFE"),
        FieldSpec::bit(15, "TID0", "Trap ID Group 0"),
        FieldSpec::bit(16, "TID1", "Trap ID Group 1"),
        FieldSpec::bit(17, "TID2", "Trap ID Group 2"),
        FieldSpec::bit(18, "TID3", "Trap ID Group 3"),
        FieldSpec::bit(19, "TSC", "Trap SMC instruction"),
        FieldSpec::bit(20, "TIDCP", "Trap Implementation Dependent functionality"),
        FieldSpec::bit(21, "TACR", "Trap ACTLR accesses"),
        FieldSpec::bit(22, "TSW", "Trap Data/Unified Cache maintenance operations by Set/Way"),
        FieldSpec::bit(23, "TPCP", "Trap Data/Unified Cache maintenance operations to Point of Coherency"),
        FieldSpec::bit(24, "TPU", "Trap Cache maintenance instructions to Point of Unification"),
        FieldSpec::bit(25, "TTLB", "Trap TLB maintenance instructions"),
        FieldSpec::bit(26, "TVM", "Trap Virtual Memory controls"),
        FieldSpec::bit(27, "TGE", "Trap General Exceptions"),
        FieldSpec::bit(28, "TDZ", "Trap DC ZVA instructions"),
        FieldSpec::bit(29, "HCD", "Hypervisor Call Disable"),
        FieldSpec::bit(30, "TRVM", "Trap Read of Virtual Memory controls"),
        FieldSpec::bit(31, "RW", "Lower level is AArch64"),
        FieldSpec::bit(32, "CD", "Stage 2 Data cache disable"),
        FieldSpec::bit(33, "ID", "Stage 2 Instruction cache disable"),
        FieldSpec::bit(34, "E2H", "EL2 Host"),
        FieldSpec::bit(35, "TLOR", "Trap LOR registers"),
        FieldSpec::bit(36, "TERR", "Trap Error record accesses"),
        FieldSpec::bit(37, "TEA", "Route synchronous External Abort exceptions to EL2"),
        FieldSpec::bit(38, "MIOCNCE", "Mismatched Inner/Outer Cacheable Non-Coherency Enable"),
        FieldSpec::bit(40, "APK", "Trap registers holding \"key\" values for Pointer Authentication"),
        FieldSpec::bit(41, "API", "Trap instructions related to Pointer Authentication"),
        FieldSpec::bit(42, "NV", "Nested Virtualization"),
        FieldSpec::bit(43, "NV1", "Nested Virtualization"),
        FieldSpec::bit(44, "AT", "Address Translation"),
        FieldSpec::bit(45, "NV2", "Nested Virtualization"),
        FieldSpec::bit(46, "FWB", "Forced Write-Back"),
        FieldSpec::bit(47, "FIEN", "Fault Injection Enable"),
        FieldSpec::bit(49, "TID4", "Trap ID Group 4"),
        FieldSpec::bit(50, "TICAB", "Trap ICIALLUIS/IC IALLUIS cache maintenance instructions"),
        FieldSpec::bit(51, "AMVOFFEN", "Activity Monitors Virtual Offsets Enable"),
        FieldSpec::bit(52, "TOCU", "Trap cache maintenance instructions that operate to the Point of Unification"),
        FieldSpec::bit(53, "EnSCXT", "Enable Access to the SCXTNUM_EL1 and SCXTNUM_EL0 registers"),
        FieldSpec::bit(54, "TTLBIS", "Trap TLB maintenance instructions that operate on the Inner Shareable domain"),
        FieldSpec::bit(55, "TTLBOS", "Trap TLB maintenance instructions that operate on the Outer Shareable domain"),
        FieldSpec::bit(56, "ATA", "Allocation Tag Access"),
        FieldSpec::bit(57, "DCT", "Default Cacheability Tagging"),
        FieldSpec::bit(58, "TID5", "Trap ID Group 5"),
        FieldSpec::bit(59, "TWEDEn", "TWE Delay Enable"),
        FieldSpec::range(60, 4, "TWEDEL", "TWE Delay"),
    ]),
    ("SCR_EL3", &[
        FieldSpec::bit(0, "NS", "Non-secure"),
        FieldSpec::bit(1, "IRQ", "IRQ handler"),
        FieldSpec::bit(2, "FIQ", "FIQ handler"),
        FieldSpec::bit(3, "EA", "External Abort handler"),
        FieldSpec::bit(7, "SMD", "Secure Monitor Call disable"),
        FieldSpec::bit(8, "HCE", "Hypervisor Call instruction enable"),
        FieldSpec::bit(9, "SIF", "Secure instruction fetch"),
        FieldSpec::bit(10, "RW", "Lower level is AArch64"),
        FieldSpec::bit(11, "ST", "Traps Secure EL1 accesses to the Counter-timer Physical Secure timer registers to EL3, from AArch64 state only."),
        FieldSpec::bit(12, "TWI", "Traps WFI instructions to Monitor mode"),
        FieldSpec::bit(13, "TWE", "Traps WFE instructions to Monitor mode"),
        FieldSpec::bit(14, "TLOR", "Traps LOR registers"),
        FieldSpec::bit(15, "TERR", "Trap Error record accesses"),
        FieldSpec::bit(16, "APK", "Trap registers holding \"key\" values for Pointer Authentication"),
        FieldSpec::bit(17, "API", "Trap instructions related to Pointer Authentication"),
        FieldSpec::bit(18, "EEL2", "Secure EL2 Enable"),
        FieldSpec::bit(19, "EASE", "External aborts to SError interrupt vector"),
        FieldSpec::bit(20, "NMEA", "Non-maskable External Aborts"),
        FieldSpec::bit(21, "FIEN", "Fault Injection enable"),
        FieldSpec::bit(25, "EnSCXT", "Enable access to the SCXTNUM_EL2, SCXTNUM_EL1, and SCXTNUM_EL0 registers"),
        FieldSpec::bit(26, "ATA", "Allocation Tag Access"),
        FieldSpec::bit(27, "FGTEn", "Fine-Grained Traps Enable"),
        FieldSpec::bit(28, "ECVEn", "ECV Enable"),
        FieldSpec::bit(29, "TWEDEn", "TWE Delay Enable"),
        FieldSpec::range(30, 4, "TWEDEL", "TWE Delay"),
        FieldSpec::bit(35, "AMVOFFEN", "Activity Monitors Virtual Offsets Enable"),
        FieldSpec::bit(36, "EnAS0", "Trap execution of an ST64BV0 instruction at EL0, EL1, or EL2 to EL3"),
        FieldSpec::bit(37, "ADEn", "Enable access to the ACCDATA_EL1 register at EL1 and EL2"),
        FieldSpec::bit(38, "HXEn", "Enables access to the HCRX_EL2 register at EL2 from EL3"),
    ]),
    ("SCTLR_EL1", &[
        FieldSpec::bit(0, "M", "MMU Enable"),
        FieldSpec::bit(1, "A", "Alignment"),
        FieldSpec::bit(2, "C", "Cache Enable"),
        FieldSpec::bit(3, "SA", "Stack alignment check"),
        FieldSpec::bit(4, "SA0", "Stack alignment check for EL0"),
        FieldSpec::bit(5, "CP15BEN", "System instruction memory barrier enable"),
        FieldSpec::bit(6, "THEE/nAA", "T32EE enable or Non-aligned access"),
        FieldSpec::bit(7, "ITD", "IT Disable"),
        FieldSpec::bit(8, "SED", "SETEND instruction disable"),
        FieldSpec::bit(9, "UMA", "User Mask Access"),
        FieldSpec::bit(10, "EnRCTX", "Enable EL0 Access to CFP RCTX, DVP RCT and CPP RCTX instructions"),
        FieldSpec::bit(11, "EOS", "Exception Exit is Context Synchronizing"),
        FieldSpec::bit(12, "I", "Instruction cache Enable"),
        FieldSpec::bit(13, "EnDB", "Enable pointer authentication (using the APDBKey_EL1 key) of instruction addresses in the EL1&0 translation regime"),
        FieldSpec::bit(14, "DZE", "Access to DC ZVA instruction at EL0"),
        FieldSpec::bit(15, "UCT", "Access to CTR_EL0 to EL0"),
        FieldSpec::bit(16, "nTWI", "Traps EL0 execution of WFI instructions to Undefined mode"),
        FieldSpec::bit(18, "nTWE", "Traps EL0 execution of WFE instructions to Undefined mode"),
        FieldSpec::bit(19, "WXN", "Write permission implies XN"),
        FieldSpec::bit(20, "TSCXT", "Trap EL0 Access to the SCXTNUM_EL0 register, when EL0 is using AArch64"),
        FieldSpec::bit(21, "IESB", "Implicit Error Synchronization event enable"),
        FieldSpec::bit(22, "EIS", "Exception Entry is Context Synchronizing"),
        FieldSpec::bit(23, "SPAN", "Set Privileged Access Never, on taking an exception to EL1"),
        FieldSpec::bit(24, "E0E", "Endianess of explicit data accesses at EL0"),
        FieldSpec::bit(25, "EE", "Exception Endianness"),
        FieldSpec::bit(26, "UCI", "Enable EL0 access to DC CVAU, DC CIVAC, DC CVAC and DC IVAU instructions"),
        FieldSpec::bit(27, "EnDA", "Enable pointer authentication (using the APDAKey_EL1 key) of instruction addresses in the EL1&0 translation regime"),
        FieldSpec::bit(28, "nTLSMD", "No Trap Load Multiple and Store Multiple to Device-nGRE/Device-nGnRE/Device-nGnRnE memory"),
        FieldSpec::bit(29, "LSMAOE", "Load Multiple and Store Multiple Atomicity and Ordering Enable"),
        FieldSpec::bit(30, "EnIB", "Enable pointer authentication (using the APIBKey_EL1 key) of instruction addresses in the EL1&0 translation regime"),
        FieldSpec::bit(31, "EnIA", "Enable pointer authentication (using the APIAKey_EL1 key) of instruction addresses in the EL1&0 translation regime"),
        FieldSpec::bit(35, "BT0", "PAC Branch Type compatibility at EL0"),
        FieldSpec::bit(36, "BT1", "PAC Branch Type compatibility at EL1"),
        FieldSpec::bit(37, "ITFSB", "Tag Check Faults are synchronized on entry to EL1"),
        FieldSpec::range(38, 2, "TCF0", "Tag Check Fault in EL0"),
        FieldSpec::range(40, 2, "TCF", "Tag Check Fault in EL1"),
        FieldSpec::bit(42, "ATA0", "Allocation Tag Access in EL0"),
        FieldSpec::bit(43, "ATA1", "Allocation Tag Access in EL1"),
        FieldSpec::bit(44, "DSSBS", "Default PSTATE.SSBS value on Exception Entry"),
        FieldSpec::bit(45, "TWEDEn", "TWE Delay Enable"),
        FieldSpec::range(46, 4, "TWEDEL", "TWE Delay"),
        FieldSpec::bit(54, "EnASR", "When HCR_EL2.{E2H, TGE} != {1, 1}, traps execution of an ST64BV instruction at EL0 to EL1"),
        FieldSpec::bit(55, "EnAS0", "When HCR_EL2.{E2H, TGE} != {1, 1}, traps execution of an ST64BV0 instruction at EL0 to EL1"),
        FieldSpec::bit(56, "EnALS", "When HCR_EL2.{E2H, TGE} != {1, 1}, traps execution of an LD64B or ST64B instruction at EL0 to EL1"),
        FieldSpec::bit(57, "EPAN", "Enhanced Privileged Access Never"),
    ]),
    ("SCTLR_EL2", &[
        FieldSpec::bit(0, "M", "MMU Enable"),
        FieldSpec::bit(1, "A", "Alignment"),
        FieldSpec::bit(2, "C", "Cache Enable"),
        FieldSpec::bit(3, "SA", "SP alignment check"),
        FieldSpec::bit(4, "SA0", "SP Alignment check enable for EL0"),
        FieldSpec::bit(5, "CP15BEN", "System instruction memory barrier enable"),
        FieldSpec::bit(6, "nAA", "Non-aligned access"),
        FieldSpec::bit(7, "ITD", "IT Disable"),
        FieldSpec::bit(8, "SED", "SETEND instruction disable"),
        FieldSpec::bit(10, "EnRCTX", "Enable EL0 Access to CFP RCTX, DVP RCT and CPP RCTX instructions"),
        FieldSpec::bit(11, "EOS", "Exception exit is a context synchronization event"),
        FieldSpec::bit(12, "I", "Instruction cache Enable"),
        FieldSpec::bit(13, "EnDB", "Enable pointer authentication (using the APDBKey_EL1 key) of instruction addresses in the EL2 or EL2&0 translation regime"),
        FieldSpec::bit(14, "DZE", "Trap execution of DC ZVA instructions at EL0 to EL2"),
        FieldSpec::bit(15, "UCT", "Trap EL0 accesses to the CTR_EL0 to EL2"),
        FieldSpec::bit(16, "nTWI", "Trap execution of WFI instructions at EL0 to EL2"),
        FieldSpec::bit(18, "nTWE", "Trap execution of WFE instructions at EL0 to EL2"),
        FieldSpec::bit(19, "WXN", "Write permission implies XN"),
        FieldSpec::bit(20, "TSCXT", "Trap EL0 Access to the SCXTNUM_EL0 register"),
        FieldSpec::bit(21, "IESB", "Implicit Error Synchronization event enable"),
        FieldSpec::bit(22, "EIS", "Exception entry is a context synchronization event"),
        FieldSpec::bit(23, "SPAN", "Set Privileged Access Never, on taking an exception to EL2"),
        FieldSpec::bit(24, "E0E", "Endianness of data accesses at EL0"),
        FieldSpec::bit(25, "EE", "Exception Endianness"),
        FieldSpec::bit(26, "UCI", "Trap execution of cache maintenance instructions at EL0 to EL2"),
        FieldSpec::bit(27, "EnDA", "Enable pointer authentication (using the APDAKey_EL1 key) of instruction addresses in the EL2 or EL2&0 translation regime"),
        FieldSpec::bit(28, "nTLSMD", "No Trap Load Multiple and Store Multiple to Device-nGRE/Device-nGnRE/Device-nGnRnE memory"),
        FieldSpec::bit(29, "LSMAOE", "Load Multiple and Store Multiple Atomicity and Ordering Enable"),
        FieldSpec::bit(30, "EnIB", "Enable pointer authentication (using the APIBKey_EL1 key) of instruction addresses in the EL2 or EL2&0 translation regime"),
        FieldSpec::bit(31, "EnIA", "Enable pointer authentication (using the APIAKey_EL1 key) of instruction addresses in the EL2 or EL2&0 translation regime"),
        FieldSpec::bit(35, "BT0", "PAC Branch Type compatibility at EL0"),
        FieldSpec::bit(36, "BT", "PAC Branch Type compatibility at EL2"),
        FieldSpec::bit(37, "ITFSB", "Tag Check Faults are synchronized on entry to EL2"),
        FieldSpec::range(38, 2, "TCF0", "Tag Check Fault in EL0"),
        FieldSpec::range(40, 2, "TCF", "Tag Check Fault in EL2"),
        FieldSpec::bit(42, "ATA0", "Allocation Tag Access in EL0"),
        FieldSpec::bit(43, "ATA", "Allocation Tag Access in EL2"),
        FieldSpec::bit(44, "DSSBS", "Default PSTATE.SSBS value on Exception Entry"),
        FieldSpec::bit(45, "TWEDEn", "TWE Delay Enable"),
        FieldSpec::range(46, 4, "TWEDEL", "TWE Delay"),
        FieldSpec::bit(54, "EnASR", "Trap execution of an ST64BV instruction at EL0 to EL2"),
        FieldSpec::bit(55, "EnAS0", "Trap execution of an ST64BV0 instruction at EL0 to EL2"),
        FieldSpec::bit(56, "EnALS", "Trap execution of an LD64B or ST64B instruction at EL0 to EL2"),
        FieldSpec::bit(57, "EPAN", "Enhanced Privileged Access Never"),
    ]),
    ("SCTLR_EL3", &[
        FieldSpec::bit(0, "M", "MMU Enable"),
        FieldSpec::bit(1, "A", "Alignment"),
        FieldSpec::bit(2, "C", "Cache Enable"),
        FieldSpec::bit(3, "SA", "Stack alignment check"),
        FieldSpec::bit(6, "nAA", "Non-aligned access"),
        FieldSpec::bit(11, "EOS", "Exception Exit is Context Synchronizing"),
        FieldSpec::bit(12, "I", "Instruction cache Enable"),
        FieldSpec::bit(13, "EnDB", "Enable pointer authentication (using the APDBKey_EL1 key) of instruction addresses in the EL3 translation regime"),
        FieldSpec::bit(19, "WXN", "Write permission implies XN"),
        FieldSpec::bit(21, "IESB", "Implicit Error Synchronization event enable"),
        FieldSpec::bit(22, "EIS", "Exception Entry is Context Synchronizing"),
        FieldSpec::bit(25, "EE", "Exception Endianness"),
        FieldSpec::bit(27, "EnDA", "Enable pointer authentication (using the APDAKey_EL1 key) of instruction addresses in the EL3 translation regime"),
        FieldSpec::bit(30, "EnIB", "Enable pointer authentication (using the APIBKey_EL1 key) of instruction addresses in the EL3 translation regime"),
        FieldSpec::bit(31, "EnIA", "Enable pointer authentication (using the APIAKey_EL1 key) of instruction addresses in the EL3 translation regime"),
        FieldSpec::bit(36, "BT", "PAC Branch Type compatibility at EL3"),
        FieldSpec::bit(37, "ITFSB", "Tag Check Faults are synchronized on entry to EL3"),
        FieldSpec::bit(43, "ATA", "Allocation Tag Access in EL3"),
        FieldSpec::bit(44, "DSSBS", "Default PSTATE.SSBS value on Exception Entry"),
    ]),
    ("ID_AA64PFR0_EL1", &[
        FieldSpec::range(0, 4, "EL0", "EL0 Exception level handling"),
        FieldSpec::range(4, 4, "EL1", "EL1 Exception level handling"),
        FieldSpec::range(8, 4, "EL2", "EL2 Exception level handling"),
        FieldSpec::range(12, 4, "EL3", "EL3 Exceptino level handling"),
        FieldSpec::range(16, 4, "FP", "Floating-point"),
        FieldSpec::range(20, 4, "AdvSIMD", "Advanced SIMD"),
        FieldSpec::range(24, 4, "GIC", "System register GIC CPU interface"),
        FieldSpec::range(28, 4, "RAS", "RAS extension version"),
        FieldSpec::range(32, 4, "SVE", "Scalable Vector Extension"),
        FieldSpec::range(36, 4, "SEL2", "Secure EL2"),
        FieldSpec::range(40, 4, "MPAM", "MPAM Extension"),
        FieldSpec::range(44, 4, "AMU", "Activity Monitors Extension"),
        FieldSpec::range(48, 4, "DIT", "Data Independent Timing"),
        FieldSpec::range(56, 4, "CSV2", "Speculative use of out of context branch targets"),
        FieldSpec::range(60, 4, "CSV3", "Speculative use of faulting data"),
    ]),
    ("ID_AA64PFR1_EL1", &[
        FieldSpec::range(0, 4, "BT", "Branch Target Identification"),
        FieldSpec::range(4, 4, "SSBS", "Speculative Store Bypassing"),
        FieldSpec::range(8, 4, "MTE", " Memory Tagging Extension"),
        FieldSpec::range(12, 4, "RAS_frac", "RAS Extension fractional field"),
        FieldSpec::range(16, 4, "MPAM_frac", "MPAM Extension fractional field"),
        FieldSpec::range(32, 4, "CSV2_frac", "CSV2 fractional field"),
    ]),
    ("MPIDR_EL1", &[
        FieldSpec::range(0, 8, "Aff0", "Affinity level 0"),
        FieldSpec::range(8, 8, "Aff1", "Affinity level 1"),
        FieldSpec::range(16, 8, "Aff2", "Affinity level 2"),
        FieldSpec::bit(24, "MT", "MT"),
        FieldSpec::bit(30, "U", "Uniprocessor system"),
        FieldSpec::range(32, 8, "Aff3", "Affinity level 3"),
    ]),
    ("CPACR_EL1", &[
        FieldSpec::range(16, 2, "ZEN", "Traps execution at EL1 and EL0 of SVE instructions"),
        FieldSpec::range(20, 2, "FPEN", "Traps execution at EL1 and EL0 of instructions that access the Advanced SIMD and floating-point registers"),
        FieldSpec::bit(28, "TTA", "Traps EL0 and EL1 System register accesses to all implemented trace registers"),
    ]),
    ("CTR_EL0", &[
        FieldSpec::range(0, 4, "IminLine", "Log2 of the number of words in the smallest cache line of all the instruction caches"),
        FieldSpec::range(14, 2, "L1Ip", "Level 1 instruction cache policy"),
        FieldSpec::range(16, 4, "DminLine", "Log2 of the number of words in the smallest cache line of all the data caches and unified caches"),
        FieldSpec::range(20, 4, "ERG", "Exclusives reservation granule"),
        FieldSpec::range(24, 4, "CWG", "Cache writeback granule"),
        FieldSpec::bit(28, "IDC", "Data cache clean requirements for instruction to data coherence"),
        FieldSpec::bit(29, "DIC", "Instruction cache invalidation requirements for data to instruction coherence"),
        FieldSpec::range(32, 6, "TminLine", "Tag minimum Line"),
    ]),
    ("MAIR_EL1", &[
        FieldSpec::range(0, 8, "Attr0", "Attribute index 0"),
        FieldSpec::range(8, 8, "Attr1", "Attribute index 1"),
        FieldSpec::range(16, 8, "Attr2", "Attribute index 2"),
        FieldSpec::range(24, 8, "Attr3", "Attribute index 3"),
        FieldSpec::range(32, 8, "Attr4", "Attribute index 4"),
        FieldSpec::range(40, 8, "Attr5", "Attribute index 5"),
        FieldSpec::range(48, 8, "Attr6", "Attribute index 6"),
        FieldSpec::range(56, 8, "Attr7", "Attribute index 7"),
    ]),
];
