//! AArch32 coprocessor register encodings and field layouts.
//!
//! Encodings follow the Arm architecture XML for v8.7-A. Keys that the
//! architecture assigns to more than one register carry every name.

use super::{r, Coproc64Key, CoprocKey, Entry, FieldSpec};

/// 64-bit registers reached through `MRRC`/`MCRR`.
#[rustfmt::skip]
pub(super) static COPROC64_REGISTERS: &[Entry<Coproc64Key>] = &[
    (Coproc64Key::new(15, 0, 2), &[r("TTBR0", "Translation Table Base Register 0"), r("AMEVCNTR10", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 1, 2), &[r("TTBR1", "Translation Table Base Register 1"), r("AMEVCNTR11", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 6, 2), &[r("VTTBR", "Virtualization Translation Table Base Register"), r("AMEVCNTR16", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 4, 2), &[r("HTTBR", "Hyp Translation Table Base Register"), r("AMEVCNTR14", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 0, 7), &[r("PAR", "Physical Address Register")]),
    (Coproc64Key::new(15, 0, 9), &[r("PMCCNTR", "Performance Monitors Cycle Count Register")]),
    (Coproc64Key::new(15, 0, 14), &[r("CNTPCT", "Counter-timer Physical Count register")]),
    (Coproc64Key::new(15, 1, 14), &[r("CNTVCT", "Counter-timer Virtual Count register")]),
    (Coproc64Key::new(15, 2, 14), &[r("CNTP_CVAL", "Counter-timer Physical Timer CompareValue register"), r("CNTHP_CVAL", "Counter-timer Hyp Physical CompareValue register"), r("CNTHPS_CVAL", "Counter-timer Secure Physical Timer CompareValue Register (EL2)")]),
    (Coproc64Key::new(15, 3, 14), &[r("CNTV_CVAL", "Counter-timer Virtual Timer CompareValue register"), r("CNTHV_CVAL", "Counter-timer Virtual Timer CompareValue register (EL2)"), r("CNTHVS_CVAL", "Counter-timer Secure Virtual Timer CompareValue Register (EL2)")]),
    (Coproc64Key::new(15, 4, 14), &[r("CNTVOFF", "Counter-timer Virtual Offset register")]),
    (Coproc64Key::new(15, 6, 14), &[r("CNTHP_CVAL", "Counter-timer Hyp Physical CompareValue register")]),
    (Coproc64Key::new(15, 8, 14), &[r("CNTPCTSS", "Counter-timer Self-Synchronized Physical Count register")]),
    (Coproc64Key::new(15, 9, 14), &[r("CNTVCTSS", "Counter-timer Self-Synchronized Virtual Count register")]),
    (Coproc64Key::new(15, 0, 15), &[r("CPUACTLR", "CPU Auxiliary Control Register")]),
    (Coproc64Key::new(15, 1, 15), &[r("CPUECTLR", "CPU Extended Control Register")]),
    (Coproc64Key::new(15, 2, 15), &[r("CPUMERRSR", "CPU Memory Error Syndrome Register")]),
    (Coproc64Key::new(15, 3, 15), &[r("L2MERRSR", "L2 Memory Error Syndrome Register")]),
    (Coproc64Key::new(15, 0, 12), &[r("ICC_SGI1R", "Interrupt Controller Software Generated Interrupt Group 1 Register")]),
    (Coproc64Key::new(15, 1, 12), &[r("ICC_ASGI1R", "Interrupt Controller Alias Software Generated Interrupt Group 1 Register")]),
    (Coproc64Key::new(15, 2, 12), &[r("ICC_SGI0R", "Interrupt Controller Software Generated Interrupt Group 0 Register")]),
    (Coproc64Key::new(15, 0, 11), &[r("N/A", "Preload Engine Program New Channel operation")]),
    (Coproc64Key::new(14, 0, 1), &[r("DBGDRAR", "Debug ROM Address Register")]),
    (Coproc64Key::new(14, 0, 2), &[r("DBGDSAR", "Debug Self Address Register")]),
    (Coproc64Key::new(15, 0, 0), &[r("AMEVCNTR00", "Activity Monitors Event Counter Registers 0")]),
    (Coproc64Key::new(15, 1, 0), &[r("AMEVCNTR01", "Activity Monitors Event Counter Registers 0")]),
    (Coproc64Key::new(15, 2, 0), &[r("AMEVCNTR02", "Activity Monitors Event Counter Registers 0")]),
    (Coproc64Key::new(15, 3, 0), &[r("AMEVCNTR03", "Activity Monitors Event Counter Registers 0")]),
    (Coproc64Key::new(15, 2, 2), &[r("AMEVCNTR12", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 3, 2), &[r("AMEVCNTR13", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 5, 2), &[r("AMEVCNTR15", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 7, 2), &[r("AMEVCNTR17", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 0, 3), &[r("AMEVCNTR18", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 1, 3), &[r("AMEVCNTR19", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 2, 3), &[r("AMEVCNTR110", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 3, 3), &[r("AMEVCNTR111", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 4, 3), &[r("AMEVCNTR112", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 5, 3), &[r("AMEVCNTR113", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 6, 3), &[r("AMEVCNTR114", "Activity Monitors Event Counter Registers 1")]),
    (Coproc64Key::new(15, 7, 3), &[r("AMEVCNTR115", "Activity Monitors Event Counter Registers 1")]),
];

/// 32-bit registers reached through `MRC`/`MCR`.
#[rustfmt::skip]
pub(super) static COPROC_REGISTERS: &[Entry<CoprocKey>] = &[
    (CoprocKey::new(15, 0, 0, 0, 0), &[r("MIDR", "Main ID Register")]),
    (CoprocKey::new(15, 0, 0, 0, 1), &[r("CTR", "Cache Type Register")]),
    (CoprocKey::new(15, 0, 0, 0, 2), &[r("TCMTR", "TCM Type Register")]),
    (CoprocKey::new(15, 0, 0, 0, 3), &[r("TLBTR", "TLB Type Register")]),
    (CoprocKey::new(15, 0, 0, 0, 5), &[r("MPIDR", "Multiprocessor Affinity Register")]),
    (CoprocKey::new(15, 0, 0, 0, 6), &[r("REVIDR", "Revision ID Register")]),
    (CoprocKey::new(15, 0, 0, 0, 4), &[r("MIDR", "Main ID Register")]),
    (CoprocKey::new(15, 0, 0, 0, 7), &[r("MIDR", "Main ID Register")]),
    (CoprocKey::new(15, 0, 0, 1, 0), &[r("ID_PFR0", "Processor Feature Register 0")]),
    (CoprocKey::new(15, 0, 0, 1, 1), &[r("ID_PFR1", "Processor Feature Register 1")]),
    (CoprocKey::new(15, 0, 0, 3, 4), &[r("ID_PFR2", "Processor Feature Register 2")]),
    (CoprocKey::new(15, 0, 0, 1, 2), &[r("ID_DFR0", "Debug Feature Register 0")]),
    (CoprocKey::new(15, 0, 0, 1, 3), &[r("ID_AFR0", "Auxiliary Feature Register 0")]),
    (CoprocKey::new(15, 0, 0, 1, 4), &[r("ID_MMFR0", "Memory Model Feature Register 0")]),
    (CoprocKey::new(15, 0, 0, 1, 5), &[r("ID_MMFR1", "Memory Model Feature Register 1")]),
    (CoprocKey::new(15, 0, 0, 1, 6), &[r("ID_MMFR2", "Memory Model Feature Register 2")]),
    (CoprocKey::new(15, 0, 0, 1, 7), &[r("ID_MMFR3", "Memory Model Feature Register 3")]),
    (CoprocKey::new(15, 0, 0, 2, 6), &[r("ID_MMFR4", "Memory Model Feature Register 4")]),
    (CoprocKey::new(15, 0, 0, 3, 6), &[r("ID_MMFR5", "Memory Model Feature Register 5")]),
    (CoprocKey::new(15, 0, 0, 2, 0), &[r("ID_ISAR0", "Instruction Set Attribute Register 0")]),
    (CoprocKey::new(15, 0, 0, 2, 1), &[r("ID_ISAR1", "Instruction Set Attribute Register 1")]),
    (CoprocKey::new(15, 0, 0, 2, 2), &[r("ID_ISAR2", "Instruction Set Attribute Register 2")]),
    (CoprocKey::new(15, 0, 0, 2, 3), &[r("ID_ISAR3", "Instruction Set Attribute Register 3")]),
    (CoprocKey::new(15, 0, 0, 2, 4), &[r("ID_ISAR4", "Instruction Set Attribute Register 4")]),
    (CoprocKey::new(15, 0, 0, 2, 5), &[r("ID_ISAR5", "Instruction Set Attribute Register 5")]),
    (CoprocKey::new(15, 0, 0, 2, 7), &[r("ID_ISAR6", "Instruction Set Attribute Register 6")]),
    (CoprocKey::new(15, 0, 1, 0, 0), &[r("CCSIDR", "Current Cache Size ID Register")]),
    (CoprocKey::new(15, 0, 1, 0, 2), &[r("CCSIDR2", "Current Cache Size ID Register 2")]),
    (CoprocKey::new(15, 0, 1, 0, 1), &[r("CLIDR", "Cache Level ID Register")]),
    (CoprocKey::new(15, 0, 1, 0, 7), &[r("AIDR", "Auxiliary ID Register")]),
    (CoprocKey::new(15, 0, 2, 0, 0), &[r("CSSELR", "Cache Size Selection Register")]),
    (CoprocKey::new(15, 0, 4, 0, 0), &[r("VPIDR", "Virtualization Processor ID Register")]),
    (CoprocKey::new(15, 0, 4, 0, 5), &[r("VMPIDR", "Virtualization Multiprocessor ID Register")]),
    (CoprocKey::new(15, 1, 0, 0, 0), &[r("SCTLR", "System Control Register")]),
    (CoprocKey::new(15, 1, 0, 0, 1), &[r("ACTLR", "Auxiliary Control Register")]),
    (CoprocKey::new(15, 1, 0, 0, 3), &[r("ACTLR2", "Auxiliary Control Register 2")]),
    (CoprocKey::new(15, 1, 0, 0, 2), &[r("CPACR", "Architectural Feature Access Control Register")]),
    (CoprocKey::new(15, 1, 0, 1, 0), &[r("SCR", "Secure Configuration Register")]),
    (CoprocKey::new(15, 1, 0, 1, 1), &[r("SDER", "Secure Debug Enable Register")]),
    (CoprocKey::new(15, 1, 0, 3, 1), &[r("SDCR", "Secure Debug Control Register")]),
    (CoprocKey::new(15, 1, 0, 1, 2), &[r("NSACR", "Non-Secure Access Control Register")]),
    (CoprocKey::new(15, 1, 4, 0, 0), &[r("HSCTLR", "Hyp System Control Register")]),
    (CoprocKey::new(15, 1, 4, 0, 1), &[r("HACTLR", "Hyp Auxiliary Control Register")]),
    (CoprocKey::new(15, 1, 4, 0, 3), &[r("HACTLR2", "Hyp Auxiliary Control Register 2")]),
    (CoprocKey::new(15, 1, 4, 1, 0), &[r("HCR", "Hyp Configuration Register")]),
    (CoprocKey::new(15, 1, 4, 1, 4), &[r("HCR2", "Hyp Configuration Register 2")]),
    (CoprocKey::new(15, 1, 4, 1, 1), &[r("HDCR", "Hyp Debug Control Register")]),
    (CoprocKey::new(15, 1, 4, 1, 2), &[r("HCPTR", "Hyp Architectural Feature Trap Register")]),
    (CoprocKey::new(15, 1, 4, 1, 3), &[r("HSTR", "Hyp System Trap Register")]),
    (CoprocKey::new(15, 1, 4, 1, 7), &[r("HACR", "Hyp Auxiliary Configuration Register")]),
    (CoprocKey::new(15, 2, 0, 0, 0), &[r("TTBR0", "Translation Table Base Register 0")]),
    (CoprocKey::new(15, 2, 0, 0, 1), &[r("TTBR1", "Translation Table Base Register 1")]),
    (CoprocKey::new(15, 2, 4, 0, 2), &[r("HTCR", "Hyp Translation Control Register")]),
    (CoprocKey::new(15, 2, 4, 1, 2), &[r("VTCR", "Virtualization Translation Control Register")]),
    (CoprocKey::new(15, 2, 0, 0, 2), &[r("TTBCR", "Translation Table Base Control Register")]),
    (CoprocKey::new(15, 2, 0, 0, 3), &[r("TTBCR2", "Translation Table Base Control Register 2")]),
    (CoprocKey::new(15, 3, 0, 0, 0), &[r("DACR", "Domain Access Control Register")]),
    (CoprocKey::new(15, 5, 0, 0, 0), &[r("DFSR", "Data Fault Status Register")]),
    (CoprocKey::new(15, 5, 0, 0, 1), &[r("IFSR", "Instruction Fault Status Register")]),
    (CoprocKey::new(15, 5, 0, 1, 0), &[r("ADFSR", "Auxiliary Data Fault Status Register")]),
    (CoprocKey::new(15, 5, 0, 1, 1), &[r("AIFSR", "Auxiliary Instruction Fault Status Register")]),
    (CoprocKey::new(15, 5, 4, 1, 0), &[r("HADFSR", "Hyp Auxiliary Data Fault Status Register")]),
    (CoprocKey::new(15, 5, 4, 1, 1), &[r("HAIFSR", "Hyp Auxiliary Instruction Fault Status Register")]),
    (CoprocKey::new(15, 5, 4, 2, 0), &[r("HSR", "Hyp Syndrome Register")]),
    (CoprocKey::new(15, 6, 0, 0, 0), &[r("DFAR", "Data Fault Address Register")]),
    (CoprocKey::new(15, 6, 0, 0, 1), &[r("N/A", "Watchpoint Fault Address")]),
    (CoprocKey::new(15, 6, 0, 0, 2), &[r("IFAR", "Instruction Fault Address Register")]),
    (CoprocKey::new(15, 6, 4, 0, 0), &[r("HDFAR", "Hyp Data Fault Address Register")]),
    (CoprocKey::new(15, 6, 4, 0, 2), &[r("HIFAR", "Hyp Instruction Fault Address Register")]),
    (CoprocKey::new(15, 6, 4, 0, 4), &[r("HPFAR", "Hyp IPA Fault Address Register")]),
    (CoprocKey::new(15, 7, 0, 0, 4), &[r("NOP", "No Operation / Wait For Interrupt")]),
    (CoprocKey::new(15, 7, 0, 1, 0), &[r("ICIALLUIS", "Instruction Cache Invalidate All to PoU, Inner Shareable")]),
    (CoprocKey::new(15, 7, 0, 1, 6), &[r("BPIALLIS", "Branch Predictor Invalidate All, Inner Shareable")]),
    (CoprocKey::new(15, 7, 0, 4, 0), &[r("PAR", "Physical Address Register")]),
    (CoprocKey::new(15, 7, 0, 5, 0), &[r("ICIALLU", "Instruction Cache Invalidate All to PoU")]),
    (CoprocKey::new(15, 7, 0, 5, 1), &[r("ICIMVAU", "Instruction Cache line Invalidate by VA to PoU")]),
    (CoprocKey::new(15, 7, 0, 5, 2), &[r("N/A", "Invalidate all instruction caches by set/way")]),
    (CoprocKey::new(15, 7, 0, 5, 4), &[r("CP15ISB", "Instruction Synchronization Barrier System instruction")]),
    (CoprocKey::new(15, 7, 0, 5, 6), &[r("BPIALL", "Branch Predictor Invalidate All")]),
    (CoprocKey::new(15, 7, 0, 5, 7), &[r("BPIMVA", "Branch Predictor Invalidate by VA")]),
    (CoprocKey::new(15, 7, 0, 6, 0), &[r("N/A", "Invalidate entire data cache")]),
    (CoprocKey::new(15, 7, 0, 6, 1), &[r("DCIMVAC", "Data Cache line Invalidate by VA to PoC")]),
    (CoprocKey::new(15, 7, 0, 6, 2), &[r("DCISW", "Data Cache line Invalidate by Set/Way")]),
    (CoprocKey::new(15, 7, 0, 7, 0), &[r("N/A", "Invalidate instruction cache and data cache")]),
    (CoprocKey::new(15, 7, 0, 8, 0), &[r("ATS1CPR", "Address Translate Stage 1 Current state PL1 Read")]),
    (CoprocKey::new(15, 7, 0, 8, 1), &[r("ATS1CPW", "Address Translate Stage 1 Current state PL1 Write")]),
    (CoprocKey::new(15, 7, 0, 8, 2), &[r("ATS1CUR", "Address Translate Stage 1 Current state Unprivileged Read")]),
    (CoprocKey::new(15, 7, 0, 8, 3), &[r("ATS1CUW", "Address Translate Stage 1 Current state Unprivileged Write")]),
    (CoprocKey::new(15, 7, 0, 8, 4), &[r("ATS12NSOPR", "Address Translate Stages 1 and 2 Non-secure Only PL1 Read")]),
    (CoprocKey::new(15, 7, 0, 8, 5), &[r("ATS12NSOPW", "Address Translate Stages 1 and 2 Non-secure Only PL1 Write")]),
    (CoprocKey::new(15, 7, 0, 8, 6), &[r("ATS12NSOUR", "Address Translate Stages 1 and 2 Non-secure Only Unprivileged Read")]),
    (CoprocKey::new(15, 7, 0, 8, 7), &[r("ATS12NSOUW", "Address Translate Stages 1 and 2 Non-secure Only Unprivileged Write")]),
    (CoprocKey::new(15, 7, 0, 9, 0), &[r("ATS1CPRP", "Address Translate Stage 1 Current state PL1 Read PAN")]),
    (CoprocKey::new(15, 7, 0, 9, 1), &[r("ATS1CPWP", "Address Translate Stage 1 Current state PL1 Write PAN")]),
    (CoprocKey::new(15, 7, 0, 10, 0), &[r("N/A", "Clean entire data cache")]),
    (CoprocKey::new(15, 7, 0, 10, 1), &[r("DCCMVAC", "Data Cache line Clean by VA to PoC")]),
    (CoprocKey::new(15, 7, 0, 10, 2), &[r("DCCSW", "Data Cache line Clean by Set/Way")]),
    (CoprocKey::new(15, 7, 0, 10, 3), &[r("N/A", "Test and clean data cache")]),
    (CoprocKey::new(15, 7, 0, 10, 4), &[r("CP15DSB", "Data Synchronization Barrier System instruction")]),
    (CoprocKey::new(15, 7, 0, 10, 5), &[r("CP15DMB", "Data Memory Barrier System instruction")]),
    (CoprocKey::new(15, 7, 0, 10, 6), &[r("N/A", "Read Cache Dirty Status Register")]),
    (CoprocKey::new(15, 7, 0, 11, 1), &[r("DCCMVAU", "Data Cache line Clean by VA to PoU")]),
    (CoprocKey::new(15, 7, 0, 12, 4), &[r("N/A", "Read Block Transfer Status Register")]),
    (CoprocKey::new(15, 7, 0, 12, 5), &[r("N/A", "Stop Prefetch Range")]),
    (CoprocKey::new(15, 7, 0, 13, 1), &[r("NOP", "No Operation / Prefetch Instruction Cache Line")]),
    (CoprocKey::new(15, 7, 0, 14, 0), &[r("N/A", "Clean and invalidate entire data cache")]),
    (CoprocKey::new(15, 7, 0, 14, 1), &[r("DCCIMVAC", "Data Cache line Clean and Invalidate by VA to PoC")]),
    (CoprocKey::new(15, 7, 0, 14, 2), &[r("DCCISW", "Data Cache line Clean and Invalidate by Set/Way")]),
    (CoprocKey::new(15, 7, 0, 14, 3), &[r("N/A", "Test, clean, and invalidate data cache")]),
    (CoprocKey::new(15, 7, 4, 8, 0), &[r("ATS1HR", "Address Translate Stage 1 Hyp mode Read")]),
    (CoprocKey::new(15, 7, 4, 8, 1), &[r("ATS1HW", "Stage 1 Hyp mode write")]),
    (CoprocKey::new(15, 8, 0, 3, 0), &[r("TLBIALLIS", "TLB Invalidate All, Inner Shareable")]),
    (CoprocKey::new(15, 8, 0, 3, 1), &[r("TLBIMVAIS", "TLB Invalidate by VA, Inner Shareable")]),
    (CoprocKey::new(15, 8, 0, 3, 2), &[r("TLBIASIDIS", "TLB Invalidate by ASID match, Inner Shareable")]),
    (CoprocKey::new(15, 8, 0, 3, 3), &[r("TLBIMVAAIS", "TLB Invalidate by VA, All ASID, Inner Shareable")]),
    (CoprocKey::new(15, 8, 0, 3, 5), &[r("TLBIMVALIS", "TLB Invalidate by VA, Last level, Inner Shareable")]),
    (CoprocKey::new(15, 8, 0, 3, 7), &[r("TLBIMVAALIS", "TLB Invalidate by VA, All ASID, Last level, Inner Shareable")]),
    (CoprocKey::new(15, 8, 0, 5, 0), &[r("ITLBIALL", "Instruction TLB Invalidate All")]),
    (CoprocKey::new(15, 8, 0, 5, 1), &[r("ITLBIMVA", "Instruction TLB Invalidate by VA")]),
    (CoprocKey::new(15, 8, 0, 5, 2), &[r("ITLBIASID", "Instruction TLB Invalidate by ASID match")]),
    (CoprocKey::new(15, 8, 0, 6, 0), &[r("DTLBIALL", "Data TLB Invalidate All")]),
    (CoprocKey::new(15, 8, 0, 6, 1), &[r("DTLBIMVA", "Data TLB Invalidate by VA")]),
    (CoprocKey::new(15, 8, 0, 6, 2), &[r("DTLBIASID", "Data TLB Invalidate by ASID match")]),
    (CoprocKey::new(15, 8, 0, 7, 0), &[r("TLBIALL", "TLB Invalidate All")]),
    (CoprocKey::new(15, 8, 0, 7, 1), &[r("TLBIMVA", "TLB Invalidate by VA")]),
    (CoprocKey::new(15, 8, 0, 7, 2), &[r("TLBIASID", "TLB Invalidate by ASID match")]),
    (CoprocKey::new(15, 8, 0, 7, 3), &[r("TLBIMVAA", "TLB Invalidate by VA, All ASID")]),
    (CoprocKey::new(15, 8, 0, 7, 5), &[r("TLBIMVAL", "TLB Invalidate by VA, Last level")]),
    (CoprocKey::new(15, 8, 0, 7, 7), &[r("TLBIMVAAL", "TLB Invalidate by VA, All ASID, Last level")]),
    (CoprocKey::new(15, 8, 4, 0, 1), &[r("TLBIIPAS2IS", "TLB Invalidate by Intermediate Physical Address, Stage 2, Inner Shareable")]),
    (CoprocKey::new(15, 8, 4, 0, 5), &[r("TLBIIPAS2LIS", "TLB Invalidate by Intermediate Physical Address, Stage 2, Last level, Inner Shareable")]),
    (CoprocKey::new(15, 8, 4, 3, 0), &[r("TLBIALLHIS", "TLB Invalidate All, Hyp mode, Inner Shareable")]),
    (CoprocKey::new(15, 8, 4, 3, 1), &[r("TLBIMVAHIS", "TLB Invalidate by VA, Hyp mode, Inner Shareable")]),
    (CoprocKey::new(15, 8, 4, 3, 4), &[r("TLBIALLNSNHIS", "TLB Invalidate All, Non-Secure Non-Hyp, Inner Shareable")]),
    (CoprocKey::new(15, 8, 4, 3, 5), &[r("TLBIMVALHIS", "TLB Invalidate by VA, Last level, Hyp mode, Inner Shareable")]),
    (CoprocKey::new(15, 8, 4, 4, 1), &[r("TLBIIPAS2", "TLB Invalidate by Intermediate Physical Address, Stage 2")]),
    (CoprocKey::new(15, 8, 4, 4, 5), &[r("TLBIIPAS2L", "TLB Invalidate by Intermediate Physical Address, Stage 2, Last level")]),
    (CoprocKey::new(15, 8, 4, 7, 0), &[r("TLBIALLH", "TLB Invalidate All, Hyp mode")]),
    (CoprocKey::new(15, 8, 4, 7, 1), &[r("TLBIMVAH", "TLB Invalidate by VA, Hyp mode")]),
    (CoprocKey::new(15, 8, 4, 7, 4), &[r("TLBIALLNSNH", "TLB Invalidate All, Non-Secure Non-Hyp")]),
    (CoprocKey::new(15, 8, 4, 7, 5), &[r("TLBIMVALH", "TLB Invalidate by VA, Last level, Hyp mode")]),
    (CoprocKey::new(15, 9, 0, 0, 0), &[r("N/A", "Data Cache Lockdown")]),
    (CoprocKey::new(15, 9, 0, 0, 1), &[r("N/A", "Instruction Cache Lockdown")]),
    (CoprocKey::new(15, 9, 0, 1, 0), &[r("N/A", "Data TCM Region")]),
    (CoprocKey::new(15, 9, 0, 1, 1), &[r("N/A", "Instruction TCM Region")]),
    (CoprocKey::new(15, 9, 1, 0, 2), &[r("L2CTLR", "L2 Control Register")]),
    (CoprocKey::new(15, 9, 1, 0, 3), &[r("L2ECTLR", "L2 Extended Control Register")]),
    (CoprocKey::new(15, 9, 0, 12, 0), &[r("PMCR", "Performance Monitors Control Register")]),
    (CoprocKey::new(15, 9, 0, 12, 1), &[r("PMCNTENSET", "Performance Monitor Count Enable Set Register")]),
    (CoprocKey::new(15, 9, 0, 12, 2), &[r("PMCNTENCLR", "Performance Monitor Control Enable Clear Register")]),
    (CoprocKey::new(15, 9, 0, 12, 3), &[r("PMOVSR", "Performance Monitors Overflow Flag Status Register")]),
    (CoprocKey::new(15, 9, 0, 12, 4), &[r("PMSWINC", "Performance Monitors Software Increment register")]),
    (CoprocKey::new(15, 9, 0, 12, 5), &[r("PMSELR", "Performance Monitors Event Counter Selection Register")]),
    (CoprocKey::new(15, 9, 0, 12, 6), &[r("PMCEID0", "Performance Monitors Common Event Identification register 0")]),
    (CoprocKey::new(15, 9, 0, 12, 7), &[r("PMCEID1", "Performance Monitors Common Event Identification register 1")]),
    (CoprocKey::new(15, 9, 0, 13, 0), &[r("PMCCNTR", "Performance Monitors Cycle Count Register")]),
    (CoprocKey::new(15, 9, 0, 13, 1), &[r("PMXEVTYPER", "Performance Monitors Selected Event Type Register")]),
    (CoprocKey::new(15, 9, 0, 13, 2), &[r("PMXEVCNTR", "Performance Monitors Selected Event Count Register")]),
    (CoprocKey::new(15, 9, 0, 14, 0), &[r("PMUSERENR", "Performance Monitors User Enable Register")]),
    (CoprocKey::new(15, 9, 0, 14, 1), &[r("PMINTENSET", "Performance Monitors Interrupt Enable Set register")]),
    (CoprocKey::new(15, 9, 0, 14, 2), &[r("PMINTENCLR", "Performance Monitors Interrupt Enable Clear register")]),
    (CoprocKey::new(15, 9, 0, 14, 3), &[r("PMOVSSET", "Performance Monitors Overflow Flag Status Set register")]),
    (CoprocKey::new(15, 9, 0, 14, 4), &[r("PMCEID2", "Performance Monitors Common Event Identification register 2")]),
    (CoprocKey::new(15, 9, 0, 14, 5), &[r("PMCEID3", "Performance Monitors Common Event Identification register 3")]),
    (CoprocKey::new(15, 9, 0, 14, 6), &[r("PMMIR", "Performance Monitors Machine Identification Register")]),
    (CoprocKey::new(15, 14, 0, 8, 0), &[r("PMEVCNTR0", "Performance Monitors Event Count Register 0")]),
    (CoprocKey::new(15, 14, 0, 8, 1), &[r("PMEVCNTR1", "Performance Monitors Event Count Register 1")]),
    (CoprocKey::new(15, 14, 0, 8, 2), &[r("PMEVCNTR2", "Performance Monitors Event Count Register 2")]),
    (CoprocKey::new(15, 14, 0, 8, 3), &[r("PMEVCNTR3", "Performance Monitors Event Count Register 3")]),
    (CoprocKey::new(15, 14, 0, 8, 4), &[r("PMEVCNTR4", "Performance Monitors Event Count Register 4")]),
    (CoprocKey::new(15, 14, 0, 8, 5), &[r("PMEVCNTR5", "Performance Monitors Event Count Register 5")]),
    (CoprocKey::new(15, 14, 0, 8, 6), &[r("PMEVCNTR6", "Performance Monitors Event Count Register 6")]),
    (CoprocKey::new(15, 14, 0, 8, 7), &[r("PMEVCNTR7", "Performance Monitors Event Count Register 7")]),
    (CoprocKey::new(15, 14, 0, 9, 0), &[r("PMEVCNTR8", "Performance Monitors Event Count Register 8")]),
    (CoprocKey::new(15, 14, 0, 9, 1), &[r("PMEVCNTR9", "Performance Monitors Event Count Register 9")]),
    (CoprocKey::new(15, 14, 0, 9, 2), &[r("PMEVCNTR10", "Performance Monitors Event Count Register 10")]),
    (CoprocKey::new(15, 14, 0, 9, 3), &[r("PMEVCNTR11", "Performance Monitors Event Count Register 11")]),
    (CoprocKey::new(15, 14, 0, 9, 4), &[r("PMEVCNTR12", "Performance Monitors Event Count Register 12")]),
    (CoprocKey::new(15, 14, 0, 9, 5), &[r("PMEVCNTR13", "Performance Monitors Event Count Register 13")]),
    (CoprocKey::new(15, 14, 0, 9, 6), &[r("PMEVCNTR14", "Performance Monitors Event Count Register 14")]),
    (CoprocKey::new(15, 14, 0, 9, 7), &[r("PMEVCNTR15", "Performance Monitors Event Count Register 15")]),
    (CoprocKey::new(15, 14, 0, 10, 0), &[r("PMEVCNTR16", "Performance Monitors Event Count Register 16")]),
    (CoprocKey::new(15, 14, 0, 10, 1), &[r("PMEVCNTR17", "Performance Monitors Event Count Register 17")]),
    (CoprocKey::new(15, 14, 0, 10, 2), &[r("PMEVCNTR18", "Performance Monitors Event Count Register 18")]),
    (CoprocKey::new(15, 14, 0, 10, 3), &[r("PMEVCNTR19", "Performance Monitors Event Count Register 19")]),
    (CoprocKey::new(15, 14, 0, 10, 4), &[r("PMEVCNTR20", "Performance Monitors Event Count Register 20")]),
    (CoprocKey::new(15, 14, 0, 10, 5), &[r("PMEVCNTR21", "Performance Monitors Event Count Register 21")]),
    (CoprocKey::new(15, 14, 0, 10, 6), &[r("PMEVCNTR22", "Performance Monitors Event Count Register 22")]),
    (CoprocKey::new(15, 14, 0, 10, 7), &[r("PMEVCNTR23", "Performance Monitors Event Count Register 23")]),
    (CoprocKey::new(15, 14, 0, 11, 0), &[r("PMEVCNTR24", "Performance Monitors Event Count Register 24")]),
    (CoprocKey::new(15, 14, 0, 11, 1), &[r("PMEVCNTR25", "Performance Monitors Event Count Register 25")]),
    (CoprocKey::new(15, 14, 0, 11, 2), &[r("PMEVCNTR26", "Performance Monitors Event Count Register 26")]),
    (CoprocKey::new(15, 14, 0, 11, 3), &[r("PMEVCNTR27", "Performance Monitors Event Count Register 27")]),
    (CoprocKey::new(15, 14, 0, 11, 4), &[r("PMEVCNTR28", "Performance Monitors Event Count Register 28")]),
    (CoprocKey::new(15, 14, 0, 11, 5), &[r("PMEVCNTR29", "Performance Monitors Event Count Register 29")]),
    (CoprocKey::new(15, 14, 0, 11, 6), &[r("PMEVCNTR30", "Performance Monitors Event Count Register 30")]),
    (CoprocKey::new(15, 14, 0, 12, 0), &[r("PMEVTYPER0", "Performance Monitors Event Type Register 0")]),
    (CoprocKey::new(15, 14, 0, 12, 1), &[r("PMEVTYPER1", "Performance Monitors Event Type Register 1")]),
    (CoprocKey::new(15, 14, 0, 12, 2), &[r("PMEVTYPER2", "Performance Monitors Event Type Register 2")]),
    (CoprocKey::new(15, 14, 0, 12, 3), &[r("PMEVTYPER3", "Performance Monitors Event Type Register 3")]),
    (CoprocKey::new(15, 14, 0, 12, 4), &[r("PMEVTYPER4", "Performance Monitors Event Type Register 4")]),
    (CoprocKey::new(15, 14, 0, 12, 5), &[r("PMEVTYPER5", "Performance Monitors Event Type Register 5")]),
    (CoprocKey::new(15, 14, 0, 12, 6), &[r("PMEVTYPER6", "Performance Monitors Event Type Register 6")]),
    (CoprocKey::new(15, 14, 0, 12, 7), &[r("PMEVTYPER7", "Performance Monitors Event Type Register 7")]),
    (CoprocKey::new(15, 14, 0, 13, 0), &[r("PMEVTYPER8", "Performance Monitors Event Type Register 8")]),
    (CoprocKey::new(15, 14, 0, 13, 1), &[r("PMEVTYPER9", "Performance Monitors Event Type Register 9")]),
    (CoprocKey::new(15, 14, 0, 13, 2), &[r("PMEVTYPER10", "Performance Monitors Event Type Register 10")]),
    (CoprocKey::new(15, 14, 0, 13, 3), &[r("PMEVTYPER11", "Performance Monitors Event Type Register 11")]),
    (CoprocKey::new(15, 14, 0, 13, 4), &[r("PMEVTYPER12", "Performance Monitors Event Type Register 12")]),
    (CoprocKey::new(15, 14, 0, 13, 5), &[r("PMEVTYPER13", "Performance Monitors Event Type Register 13")]),
    (CoprocKey::new(15, 14, 0, 13, 6), &[r("PMEVTYPER14", "Performance Monitors Event Type Register 14")]),
    (CoprocKey::new(15, 14, 0, 13, 7), &[r("PMEVTYPER15", "Performance Monitors Event Type Register 15")]),
    (CoprocKey::new(15, 14, 0, 14, 0), &[r("PMEVTYPER16", "Performance Monitors Event Type Register 16")]),
    (CoprocKey::new(15, 14, 0, 14, 1), &[r("PMEVTYPER17", "Performance Monitors Event Type Register 17")]),
    (CoprocKey::new(15, 14, 0, 14, 2), &[r("PMEVTYPER18", "Performance Monitors Event Type Register 18")]),
    (CoprocKey::new(15, 14, 0, 14, 3), &[r("PMEVTYPER19", "Performance Monitors Event Type Register 19")]),
    (CoprocKey::new(15, 14, 0, 14, 4), &[r("PMEVTYPER20", "Performance Monitors Event Type Register 20")]),
    (CoprocKey::new(15, 14, 0, 14, 5), &[r("PMEVTYPER21", "Performance Monitors Event Type Register 21")]),
    (CoprocKey::new(15, 14, 0, 14, 6), &[r("PMEVTYPER22", "Performance Monitors Event Type Register 22")]),
    (CoprocKey::new(15, 14, 0, 14, 7), &[r("PMEVTYPER23", "Performance Monitors Event Type Register 23")]),
    (CoprocKey::new(15, 14, 0, 15, 0), &[r("PMEVTYPER24", "Performance Monitors Event Type Register 24")]),
    (CoprocKey::new(15, 14, 0, 15, 1), &[r("PMEVTYPER25", "Performance Monitors Event Type Register 25")]),
    (CoprocKey::new(15, 14, 0, 15, 2), &[r("PMEVTYPER26", "Performance Monitors Event Type Register 26")]),
    (CoprocKey::new(15, 14, 0, 15, 3), &[r("PMEVTYPER27", "Performance Monitors Event Type Register 27")]),
    (CoprocKey::new(15, 14, 0, 15, 4), &[r("PMEVTYPER28", "Performance Monitors Event Type Register 28")]),
    (CoprocKey::new(15, 14, 0, 15, 5), &[r("PMEVTYPER29", "Performance Monitors Event Type Register 29")]),
    (CoprocKey::new(15, 14, 0, 15, 6), &[r("PMEVTYPER30", "Performance Monitors Event Type Register 30")]),
    (CoprocKey::new(15, 14, 0, 15, 7), &[r("PMCCFILTR", "Performance Monitors Cycle Count Filter Register")]),
    (CoprocKey::new(15, 13, 0, 2, 1), &[r("AMCFGR", "Activity Monitors Configuration Register")]),
    (CoprocKey::new(15, 13, 0, 2, 2), &[r("AMCGCR", "Activity Monitors Counter Group Configuration Register")]),
    (CoprocKey::new(15, 13, 0, 2, 4), &[r("AMCNTENCLR0", "Activity Monitors Count Enable Clear Register 0")]),
    (CoprocKey::new(15, 13, 0, 3, 0), &[r("AMCNTENCLR1", "Activity Monitors Count Enable Clear Register 1")]),
    (CoprocKey::new(15, 13, 0, 2, 5), &[r("AMCNTENSET0", "Activity Monitors Count Enable Set Register 0")]),
    (CoprocKey::new(15, 13, 0, 3, 1), &[r("AMCNTENSET1", "Activity Monitors Count Enable Set Register 1")]),
    (CoprocKey::new(15, 13, 0, 2, 0), &[r("AMCR", "Activity Monitors Control Register")]),
    (CoprocKey::new(15, 13, 0, 6, 0), &[r("AMEVTYPER00", "Activity Monitors Event Type Registers 0")]),
    (CoprocKey::new(15, 13, 0, 6, 1), &[r("AMEVTYPER01", "Activity Monitors Event Type Registers 0")]),
    (CoprocKey::new(15, 13, 0, 6, 2), &[r("AMEVTYPER02", "Activity Monitors Event Type Registers 0")]),
    (CoprocKey::new(15, 13, 0, 14, 0), &[r("AMEVTYPER10", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 14, 1), &[r("AMEVTYPER11", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 14, 2), &[r("AMEVTYPER12", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 14, 3), &[r("AMEVTYPER13", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 14, 4), &[r("AMEVTYPER14", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 14, 5), &[r("AMEVTYPER15", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 14, 6), &[r("AMEVTYPER16", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 14, 7), &[r("AMEVTYPER17", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 15, 0), &[r("AMEVTYPER18", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 15, 1), &[r("AMEVTYPER19", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 15, 2), &[r("AMEVTYPER110", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 15, 3), &[r("AMEVTYPER111", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 15, 4), &[r("AMEVTYPER112", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 15, 5), &[r("AMEVTYPER113", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 15, 6), &[r("AMEVTYPER114", "Activity Monitors Event Type Registers 1")]),
    (CoprocKey::new(15, 13, 0, 2, 3), &[r("AMUSERENR", "Activity Monitors User Enable Register")]),
    (CoprocKey::new(15, 12, 0, 1, 1), &[r("DISR", "Deferred Interrupt Status Register")]),
    (CoprocKey::new(15, 5, 0, 3, 0), &[r("ERRIDR", "Error Record ID Register")]),
    (CoprocKey::new(15, 5, 0, 3, 1), &[r("ERRSELR", "Error Record Select Register")]),
    (CoprocKey::new(15, 5, 0, 4, 3), &[r("ERXADDR", "Selected Error Record Address Register")]),
    (CoprocKey::new(15, 5, 0, 4, 7), &[r("ERXADDR2", "Selected Error Record Address Register 2")]),
    (CoprocKey::new(15, 5, 0, 4, 1), &[r("ERXCTLR", "Selected Error Record Control Register")]),
    (CoprocKey::new(15, 5, 0, 4, 5), &[r("ERXCTLR2", "Selected Error Record Control Register 2")]),
    (CoprocKey::new(15, 5, 0, 4, 0), &[r("ERXFR", "Selected Error Record Feature Register")]),
    (CoprocKey::new(15, 5, 0, 4, 4), &[r("ERXFR2", "Selected Error Record Feature Register 2")]),
    (CoprocKey::new(15, 5, 0, 5, 0), &[r("ERXMISC0", "Selected Error Record Miscellaneous Register 0")]),
    (CoprocKey::new(15, 5, 0, 5, 1), &[r("ERXMISC1", "Selected Error Record Miscellaneous Register 1")]),
    (CoprocKey::new(15, 5, 0, 5, 4), &[r("ERXMISC2", "Selected Error Record Miscellaneous Register 2")]),
    (CoprocKey::new(15, 5, 0, 5, 5), &[r("ERXMISC3", "Selected Error Record Miscellaneous Register 3")]),
    (CoprocKey::new(15, 5, 0, 5, 2), &[r("ERXMISC4", "Selected Error Record Miscellaneous Register 4")]),
    (CoprocKey::new(15, 5, 0, 5, 3), &[r("ERXMISC5", "Selected Error Record Miscellaneous Register 5")]),
    (CoprocKey::new(15, 5, 0, 5, 6), &[r("ERXMISC6", "Selected Error Record Miscellaneous Register 6")]),
    (CoprocKey::new(15, 5, 0, 5, 7), &[r("ERXMISC7", "Selected Error Record Miscellaneous Register 7")]),
    (CoprocKey::new(15, 5, 0, 4, 2), &[r("ERXSTATUS", "Selected Error Record Primary Status Register")]),
    (CoprocKey::new(15, 5, 4, 2, 3), &[r("VDFSR", "Virtual SError Exception Syndrome Register")]),
    (CoprocKey::new(15, 12, 4, 1, 1), &[r("VDISR", "Virtual Deferred Interrupt Status Register")]),
    (CoprocKey::new(15, 10, 0, 0, 0), &[r("N/A", "TLB Lockdown")]),
    (CoprocKey::new(15, 10, 0, 2, 0), &[r("MAIR0", "Memory Attribute Indirection Register 0"), r("PRRR", "Primary Region Remap Register")]),
    (CoprocKey::new(15, 10, 0, 2, 1), &[r("MAIR1", "Memory Attribute Indirection Register 1"), r("NMRR", "Normal Memory Remap Register")]),
    (CoprocKey::new(15, 10, 0, 3, 0), &[r("AMAIR0", "Auxiliary Memory Attribute Indirection Register 0")]),
    (CoprocKey::new(15, 10, 0, 3, 1), &[r("AMAIR1", "Auxiliary Memory Attribute Indirection Register 1")]),
    (CoprocKey::new(15, 10, 4, 2, 0), &[r("HMAIR0", "Hyp Memory Attribute Indirection Register 0")]),
    (CoprocKey::new(15, 10, 4, 2, 1), &[r("HMAIR1", "Hyp Memory Attribute Indirection Register 1")]),
    (CoprocKey::new(15, 10, 4, 3, 0), &[r("HAMAIR0", "Hyp Auxiliary Memory Attribute Indirection Register 0")]),
    (CoprocKey::new(15, 10, 4, 3, 1), &[r("HAMAIR1", "Hyp Auxiliary Memory Attribute Indirection Register 1")]),
    (CoprocKey::new(15, 11, 0, 0, 0), &[r("N/A", "DMA Identification and Status (Present)"), r("PLEIDR", "Preload Engine ID Register")]),
    (CoprocKey::new(15, 11, 0, 0, 1), &[r("N/A", "DMA Identification and Status (Queued)")]),
    (CoprocKey::new(15, 11, 0, 0, 2), &[r("N/A", "DMA Identification and Status (Running)"), r("PLEASR", "Preload Engine Activity Status Register")]),
    (CoprocKey::new(15, 11, 0, 0, 3), &[r("N/A", "DMA Identification and Status (Interrupting)")]),
    (CoprocKey::new(15, 11, 0, 1, 0), &[r("N/A", "DMA User Accessibility"), r("PLEUAR", "Preload Engine User Accessibility Register")]),
    (CoprocKey::new(15, 11, 0, 2, 0), &[r("N/A", "DMA Channel Number")]),
    (CoprocKey::new(15, 11, 0, 3, 0), &[r("N/A", "DMA Enable (Stop)"), r("PLEPC", "Preload Engine pause channel operation")]),
    (CoprocKey::new(15, 11, 0, 3, 1), &[r("N/A", "DMA Enable (Start)"), r("PLERC", "Preload Engine resume channel operation")]),
    (CoprocKey::new(15, 11, 0, 3, 2), &[r("N/A", "DMA Enable (Clear)"), r("PLEKC", "Preload Engine kill channel operation")]),
    (CoprocKey::new(15, 11, 0, 4, 0), &[r("N/A", "DMA Control")]),
    (CoprocKey::new(15, 11, 0, 5, 0), &[r("N/A", "DMA Internal Start Address")]),
    (CoprocKey::new(15, 11, 0, 6, 0), &[r("N/A", "DMA External Start Address")]),
    (CoprocKey::new(15, 11, 0, 7, 0), &[r("N/A", "DMA Internal End Address")]),
    (CoprocKey::new(15, 11, 0, 8, 0), &[r("N/A", "DMA Channel Status")]),
    (CoprocKey::new(15, 11, 0, 15, 0), &[r("N/A", "DMA Context ID")]),
    (CoprocKey::new(15, 12, 0, 0, 0), &[r("VBAR", "Vector Base Address Register")]),
    (CoprocKey::new(15, 12, 0, 0, 1), &[r("RVBAR", "Reset Vector Base Address Register"), r("MVBAR", "Monitor Vector Base Address Register")]),
    (CoprocKey::new(15, 12, 0, 0, 2), &[r("RMR", "Reset Management Register")]),
    (CoprocKey::new(15, 12, 4, 0, 2), &[r("HRMR", "Hyp Reset Management Register")]),
    (CoprocKey::new(15, 12, 0, 1, 0), &[r("ISR", "Interrupt Status Register")]),
    (CoprocKey::new(15, 12, 4, 0, 0), &[r("HVBAR", "Hyp Vector Base Address Register")]),
    (CoprocKey::new(15, 13, 0, 0, 0), &[r("FCSEIDR", "FCSE Process ID register")]),
    (CoprocKey::new(15, 13, 0, 0, 1), &[r("CONTEXTIDR", "Context ID Register")]),
    (CoprocKey::new(15, 13, 0, 0, 2), &[r("TPIDRURW", "PL0 Read/Write Software Thread ID Register")]),
    (CoprocKey::new(15, 13, 0, 0, 3), &[r("TPIDRURO", "PL0 Read-Only Software Thread ID Register")]),
    (CoprocKey::new(15, 13, 0, 0, 4), &[r("TPIDRPRW", "PL1 Software Thread ID Register")]),
    (CoprocKey::new(15, 13, 4, 0, 2), &[r("HTPIDR", "Hyp Software Thread ID Register")]),
    (CoprocKey::new(15, 14, 0, 0, 0), &[r("CNTFRQ", "Counter-timer Frequency register")]),
    (CoprocKey::new(15, 14, 0, 1, 0), &[r("CNTKCTL", "Counter-timer Kernel Control register")]),
    (CoprocKey::new(15, 14, 0, 2, 0), &[r("CNTP_TVAL", "Counter-timer Physical Timer TimerValue register"), r("CNTHP_TVAL", "Counter-timer Hyp Physical Timer TimerValue register"), r("CNTHPS_TVAL", "Counter-timer Secure Physical Timer TimerValue Register (EL2)")]),
    (CoprocKey::new(15, 14, 0, 2, 1), &[r("CNTP_CTL", "Counter-timer Physical Timer Control register"), r("CNTHP_CTL", "Counter-timer Hyp Physical Timer Control register"), r("CNTHPS_CTL", "Counter-timer Secure Physical Timer Control Register (EL2)")]),
    (CoprocKey::new(15, 14, 0, 3, 0), &[r("CNTV_TVAL", "Counter-timer Virtual Timer TimerValue register"), r("CNTHV_TVAL", "Counter-timer Virtual Timer TimerValue register (EL2)"), r("CNTHVS_TVAL", "Counter-timer Secure Virtual Timer TimerValue Register (EL2)")]),
    (CoprocKey::new(15, 14, 0, 3, 1), &[r("CNTV_CTL", "Counter-timer Virtual Timer Control register"), r("CNTHV_CTL", "Counter-timer Virtual Timer Control register (EL2)"), r("CNTHVS_CTL", "Counter-timer Secure Virtual Timer Control Register (EL2)")]),
    (CoprocKey::new(15, 14, 4, 1, 0), &[r("CNTHCTL", "Counter-timer Hyp Control register")]),
    (CoprocKey::new(15, 14, 4, 2, 0), &[r("CNTHP_TVAL", "Counter-timer Hyp Physical Timer TimerValue register")]),
    (CoprocKey::new(15, 14, 4, 2, 1), &[r("CNTHP_CTL", "Counter-timer Hyp Physical Timer Control register")]),
    (CoprocKey::new(15, 4, 0, 6, 0), &[r("ICC_PMR", "Interrupt Controller Interrupt Priority Mask Register"), r("ICV_PMR", "Interrupt Controller Virtual Interrupt Priority Mask Register")]),
    (CoprocKey::new(15, 12, 0, 8, 0), &[r("ICC_IAR0", "Interrupt Controller Interrupt Acknowledge Register 0"), r("ICV_IAR0", "Interrupt Controller Virtual Interrupt Acknowledge Register 0")]),
    (CoprocKey::new(15, 12, 0, 8, 1), &[r("ICC_EOIR0", "Interrupt Controller End Of Interrupt Register 0"), r("ICV_EOIR0", "Interrupt Controller Virtual End Of Interrupt Register 0")]),
    (CoprocKey::new(15, 12, 0, 8, 2), &[r("ICC_HPPIR0", "Interrupt Controller Highest Priority Pending Interrupt Register 0"), r("ICV_HPPIR0", "Interrupt Controller Virtual Highest Priority Pending Interrupt Register 0")]),
    (CoprocKey::new(15, 12, 0, 8, 3), &[r("ICC_BPR0", "Interrupt Controller Binary Point Register 0"), r("ICV_BPR0", "Interrupt Controller Virtual Binary Point Register 0")]),
    (CoprocKey::new(15, 12, 0, 8, 4), &[r("ICC_AP0R0", "Interrupt Controller Active Priorities Group 0 Register 0"), r("ICV_AP0R0", "Interrupt Controller Virtual Active Priorities Group 0 Register 0")]),
    (CoprocKey::new(15, 12, 0, 8, 5), &[r("ICC_AP0R1", "Interrupt Controller Active Priorities Group 0 Register 1"), r("ICV_AP0R1", "Interrupt Controller Virtual Active Priorities Group 0 Register 1")]),
    (CoprocKey::new(15, 12, 0, 8, 6), &[r("ICC_AP0R2", "Interrupt Controller Active Priorities Group 0 Register 2"), r("ICV_AP0R2", "Interrupt Controller Virtual Active Priorities Group 0 Register 2")]),
    (CoprocKey::new(15, 12, 0, 8, 7), &[r("ICC_AP0R3", "Interrupt Controller Active Priorities Group 0 Register 3"), r("ICV_AP0R3", "Interrupt Controller Virtual Active Priorities Group 0 Register 3")]),
    (CoprocKey::new(15, 12, 0, 9, 0), &[r("ICC_AP1R0", "Interrupt Controller Active Priorities Group 1 Register 0"), r("ICV_AP1R0", "Interrupt Controller Virtual Active Priorities Group 1 Register 0")]),
    (CoprocKey::new(15, 12, 0, 9, 1), &[r("ICC_AP1R1", "Interrupt Controller Active Priorities Group 1 Register 1"), r("ICV_AP1R1", "Interrupt Controller Virtual Active Priorities Group 1 Register 1")]),
    (CoprocKey::new(15, 12, 0, 9, 2), &[r("ICC_AP1R2", "Interrupt Controller Active Priorities Group 1 Register 2"), r("ICV_AP1R2", "Interrupt Controller Virtual Active Priorities Group 1 Register 2")]),
    (CoprocKey::new(15, 12, 0, 9, 3), &[r("ICC_AP1R3", "Interrupt Controller Active Priorities Group 1 Register 3"), r("ICV_AP1R3", "Interrupt Controller Virtual Active Priorities Group 1 Register 3")]),
    (CoprocKey::new(15, 12, 0, 11, 1), &[r("ICC_DIR", "Interrupt Controller Deactivate Interrupt Register"), r("ICV_DIR", "Interrupt Controller Deactivate Virtual Interrupt Register")]),
    (CoprocKey::new(15, 12, 0, 11, 3), &[r("ICC_RPR", "Interrupt Controller Running Priority Register"), r("ICV_RPR", "Interrupt Controller Virtual Running Priority Register")]),
    (CoprocKey::new(15, 12, 0, 12, 0), &[r("ICC_IAR1", "Interrupt Controller Interrupt Acknowledge Register 1"), r("ICV_IAR1", "Interrupt Controller Virtual Interrupt Acknowledge Register 1")]),
    (CoprocKey::new(15, 12, 0, 12, 1), &[r("ICC_EOIR1", "Interrupt Controller End Of Interrupt Register 1"), r("ICV_EOIR1", "Interrupt Controller Virtual End Of Interrupt Register 1")]),
    (CoprocKey::new(15, 12, 0, 12, 2), &[r("ICC_HPPIR1", "Interrupt Controller Highest Priority Pending Interrupt Register 1"), r("ICV_HPPIR1", "Interrupt Controller Virtual Highest Priority Pending Interrupt Register 1")]),
    (CoprocKey::new(15, 12, 0, 12, 3), &[r("ICC_BPR1", "Interrupt Controller Binary Point Register 1"), r("ICV_BPR1", "Interrupt Controller Virtual Binary Point Register 1")]),
    (CoprocKey::new(15, 12, 0, 12, 4), &[r("ICC_CTLR", "Interrupt Controller Control Register"), r("ICV_CTLR", "Interrupt Controller Virtual Control Register")]),
    (CoprocKey::new(15, 12, 0, 12, 5), &[r("ICC_SRE", "Interrupt Controller System Register Enable register")]),
    (CoprocKey::new(15, 12, 0, 12, 6), &[r("ICC_IGRPEN0", "Interrupt Controller Interrupt Group 0 Enable register"), r("ICV_IGRPEN0", "Interrupt Controller Virtual Interrupt Group 0 Enable register")]),
    (CoprocKey::new(15, 12, 0, 12, 7), &[r("ICC_IGRPEN1", "Interrupt Controller Interrupt Group 1 Enable register"), r("ICV_IGRPEN1", "Interrupt Controller Virtual Interrupt Group 1 Enable register")]),
    (CoprocKey::new(15, 12, 4, 8, 0), &[r("ICH_AP0R0", "Interrupt Controller Hyp Active Priorities Group 0 Register 0")]),
    (CoprocKey::new(15, 12, 4, 8, 1), &[r("ICH_AP0R1", "Interrupt Controller Hyp Active Priorities Group 0 Register 1")]),
    (CoprocKey::new(15, 12, 4, 8, 2), &[r("ICH_AP0R2", "Interrupt Controller Hyp Active Priorities Group 0 Register 2")]),
    (CoprocKey::new(15, 12, 4, 8, 3), &[r("ICH_AP0R3", "Interrupt Controller Hyp Active Priorities Group 0 Register 3")]),
    (CoprocKey::new(15, 12, 4, 9, 0), &[r("ICH_AP1R0", "Interrupt Controller Hyp Active Priorities Group 1 Register 0")]),
    (CoprocKey::new(15, 12, 4, 9, 1), &[r("ICH_AP1R1", "Interrupt Controller Hyp Active Priorities Group 1 Register 1")]),
    (CoprocKey::new(15, 12, 4, 9, 2), &[r("ICH_AP1R2", "Interrupt Controller Hyp Active Priorities Group 1 Register 2")]),
    (CoprocKey::new(15, 12, 4, 9, 3), &[r("ICH_AP1R3", "Interrupt Controller Hyp Active Priorities Group 1 Register 3")]),
    (CoprocKey::new(15, 12, 4, 9, 5), &[r("ICC_HSRE", "Interrupt Controller Hyp System Register Enable register")]),
    (CoprocKey::new(15, 12, 4, 11, 0), &[r("ICH_HCR", "Interrupt Controller Hyp Control Register")]),
    (CoprocKey::new(15, 12, 4, 11, 1), &[r("ICH_VTR", "Interrupt Controller VGIC Type Register")]),
    (CoprocKey::new(15, 12, 4, 11, 2), &[r("ICH_MISR", "Interrupt Controller Maintenance Interrupt State Register")]),
    (CoprocKey::new(15, 12, 4, 11, 3), &[r("ICH_EISR", "Interrupt Controller End of Interrupt Status Register")]),
    (CoprocKey::new(15, 12, 4, 11, 5), &[r("ICH_ELRSR", "Interrupt Controller Empty List Register Status Register")]),
    (CoprocKey::new(15, 12, 4, 11, 7), &[r("ICH_VMCR", "Interrupt Controller Virtual Machine Control Register")]),
    (CoprocKey::new(15, 12, 4, 12, 0), &[r("ICH_LR0", "Interrupt Controller List Register 0")]),
    (CoprocKey::new(15, 12, 4, 12, 1), &[r("ICH_LR1", "Interrupt Controller List Register 1")]),
    (CoprocKey::new(15, 12, 4, 12, 2), &[r("ICH_LR2", "Interrupt Controller List Register 2")]),
    (CoprocKey::new(15, 12, 4, 12, 3), &[r("ICH_LR3", "Interrupt Controller List Register 3")]),
    (CoprocKey::new(15, 12, 4, 12, 4), &[r("ICH_LR4", "Interrupt Controller List Register 4")]),
    (CoprocKey::new(15, 12, 4, 12, 5), &[r("ICH_LR5", "Interrupt Controller List Register 5")]),
    (CoprocKey::new(15, 12, 4, 12, 6), &[r("ICH_LR6", "Interrupt Controller List Register 6")]),
    (CoprocKey::new(15, 12, 4, 12, 7), &[r("ICH_LR7", "Interrupt Controller List Register 7")]),
    (CoprocKey::new(15, 12, 4, 13, 0), &[r("ICH_LR8", "Interrupt Controller List Register 8")]),
    (CoprocKey::new(15, 12, 4, 13, 1), &[r("ICH_LR9", "Interrupt Controller List Register 9")]),
    (CoprocKey::new(15, 12, 4, 13, 2), &[r("ICH_LR10", "Interrupt Controller List Register 10")]),
    (CoprocKey::new(15, 12, 4, 13, 3), &[r("ICH_LR11", "Interrupt Controller List Register 11")]),
    (CoprocKey::new(15, 12, 4, 13, 4), &[r("ICH_LR12", "Interrupt Controller List Register 12")]),
    (CoprocKey::new(15, 12, 4, 13, 5), &[r("ICH_LR13", "Interrupt Controller List Register 13")]),
    (CoprocKey::new(15, 12, 4, 13, 6), &[r("ICH_LR14", "Interrupt Controller List Register 14")]),
    (CoprocKey::new(15, 12, 4, 13, 7), &[r("ICH_LR15", "Interrupt Controller List Register 15")]),
    (CoprocKey::new(15, 12, 4, 14, 0), &[r("ICH_LRC0", "Interrupt Controller List Register 0")]),
    (CoprocKey::new(15, 12, 4, 14, 1), &[r("ICH_LRC1", "Interrupt Controller List Register 1")]),
    (CoprocKey::new(15, 12, 4, 14, 2), &[r("ICH_LRC2", "Interrupt Controller List Register 2")]),
    (CoprocKey::new(15, 12, 4, 14, 3), &[r("ICH_LRC3", "Interrupt Controller List Register 3")]),
    (CoprocKey::new(15, 12, 4, 14, 4), &[r("ICH_LRC4", "Interrupt Controller List Register 4")]),
    (CoprocKey::new(15, 12, 4, 14, 5), &[r("ICH_LRC5", "Interrupt Controller List Register 5")]),
    (CoprocKey::new(15, 12, 4, 14, 6), &[r("ICH_LRC6", "Interrupt Controller List Register 6")]),
    (CoprocKey::new(15, 12, 4, 14, 7), &[r("ICH_LRC7", "Interrupt Controller List Register 7")]),
    (CoprocKey::new(15, 12, 4, 15, 0), &[r("ICH_LRC8", "Interrupt Controller List Register 8")]),
    (CoprocKey::new(15, 12, 4, 15, 1), &[r("ICH_LRC9", "Interrupt Controller List Register 9")]),
    (CoprocKey::new(15, 12, 4, 15, 2), &[r("ICH_LRC10", "Interrupt Controller List Register 10")]),
    (CoprocKey::new(15, 12, 4, 15, 3), &[r("ICH_LRC11", "Interrupt Controller List Register 11")]),
    (CoprocKey::new(15, 12, 4, 15, 4), &[r("ICH_LRC12", "Interrupt Controller List Register 12")]),
    (CoprocKey::new(15, 12, 4, 15, 5), &[r("ICH_LRC13", "Interrupt Controller List Register 13")]),
    (CoprocKey::new(15, 12, 4, 15, 6), &[r("ICH_LRC14", "Interrupt Controller List Register 14")]),
    (CoprocKey::new(15, 12, 4, 15, 7), &[r("ICH_LRC15", "Interrupt Controller List Register 15")]),
    (CoprocKey::new(15, 12, 6, 12, 4), &[r("ICC_MCTLR", "Interrupt Controller Monitor Control Register")]),
    (CoprocKey::new(15, 12, 6, 12, 5), &[r("ICC_MSRE", "Interrupt Controller Monitor System Register Enable register")]),
    (CoprocKey::new(15, 12, 6, 12, 7), &[r("ICC_MGRPEN1", "Interrupt Controller Monitor Interrupt Group 1 Enable register")]),
    (CoprocKey::new(15, 15, 0, 0, 0), &[r("IL1Data0", "Instruction L1 Data n Register")]),
    (CoprocKey::new(15, 15, 0, 0, 1), &[r("IL1Data1", "Instruction L1 Data n Register")]),
    (CoprocKey::new(15, 15, 0, 0, 2), &[r("IL1Data2", "Instruction L1 Data n Register")]),
    (CoprocKey::new(15, 15, 0, 1, 0), &[r("DL1Data0", "Data L1 Data n Register")]),
    (CoprocKey::new(15, 15, 0, 1, 1), &[r("DL1Data1", "Data L1 Data n Register")]),
    (CoprocKey::new(15, 15, 0, 1, 2), &[r("DL1Data2", "Data L1 Data n Register")]),
    (CoprocKey::new(15, 15, 0, 2, 0), &[r("N/A", "Data Memory Remap")]),
    (CoprocKey::new(15, 15, 0, 2, 1), &[r("N/A", "Instruction Memory Remap")]),
    (CoprocKey::new(15, 15, 0, 2, 2), &[r("N/A", "DMA Memory Remap")]),
    (CoprocKey::new(15, 15, 0, 2, 3), &[r("N/A", "Peripheral Port Memory Remap")]),
    (CoprocKey::new(15, 15, 0, 4, 0), &[r("RAMINDEX", "RAM Index Register")]),
    (CoprocKey::new(15, 15, 0, 12, 0), &[r("N/A", "Performance Monitor Control")]),
    (CoprocKey::new(15, 15, 0, 12, 1), &[r("CCNT", "Cycle Counter")]),
    (CoprocKey::new(15, 15, 0, 12, 2), &[r("PMN0", "Count 0")]),
    (CoprocKey::new(15, 15, 0, 12, 3), &[r("PMN1", "Count 1")]),
    (CoprocKey::new(15, 15, 1, 0, 0), &[r("L2ACTLR", "L2 Auxiliary Control Register")]),
    (CoprocKey::new(15, 15, 1, 0, 3), &[r("L2FPR", "L2 Prefetch Control Register")]),
    (CoprocKey::new(15, 15, 3, 0, 0), &[r("N/A", "Data Debug Cache")]),
    (CoprocKey::new(15, 15, 3, 0, 1), &[r("N/A", "Instruction Debug Cache")]),
    (CoprocKey::new(15, 15, 3, 2, 0), &[r("N/A", "Data Tag RAM Read Operation")]),
    (CoprocKey::new(15, 15, 3, 2, 1), &[r("N/A", "Instruction Tag RAM Read Operation")]),
    (CoprocKey::new(15, 15, 4, 0, 0), &[r("CBAR", "Configuration Base Address Register")]),
    (CoprocKey::new(15, 15, 5, 4, 0), &[r("N/A", "Data MicroTLB Index")]),
    (CoprocKey::new(15, 15, 5, 4, 1), &[r("N/A", "Instruction MicroTLB Index")]),
    (CoprocKey::new(15, 15, 5, 4, 2), &[r("N/A", "Read Main TLB Entry")]),
    (CoprocKey::new(15, 15, 5, 4, 4), &[r("N/A", "Write Main TLB Entry")]),
    (CoprocKey::new(15, 15, 5, 5, 0), &[r("N/A", "Data MicroTLB VA")]),
    (CoprocKey::new(15, 15, 5, 5, 1), &[r("N/A", "Instruction MicroTLB VA")]),
    (CoprocKey::new(15, 15, 5, 5, 2), &[r("N/A", "Main TLB VA")]),
    (CoprocKey::new(15, 15, 5, 7, 0), &[r("N/A", "Data MicroTLB Attribute")]),
    (CoprocKey::new(15, 15, 5, 7, 1), &[r("N/A", "Instruction MicroTLB Attribute")]),
    (CoprocKey::new(15, 15, 5, 7, 2), &[r("N/A", "Main TLB Attribute")]),
    (CoprocKey::new(15, 15, 7, 0, 0), &[r("N/A", "Cache Debug Control")]),
    (CoprocKey::new(15, 15, 7, 1, 0), &[r("N/A", "TLB Debug Control")]),
    (CoprocKey::new(15, 11, 0, 0, 4), &[r("PLEFSR", "Preload Engine FIFO Status Register")]),
    (CoprocKey::new(15, 11, 0, 1, 1), &[r("PLEPCR", "Preload Engine Parameters Control Register")]),
    (CoprocKey::new(15, 11, 0, 2, 1), &[r("PLEFF", "Preload Engine FIFO flush operation")]),
    (CoprocKey::new(14, 0, 7, 0, 0), &[r("JIDR", "Jazelle ID Register")]),
    (CoprocKey::new(14, 1, 7, 0, 0), &[r("JOSCR", "Jazelle OS Control Register")]),
    (CoprocKey::new(14, 2, 7, 0, 0), &[r("JMCR", "Jazelle Main Configuration Register")]),
    (CoprocKey::new(15, 4, 3, 5, 0), &[r("DSPSR", "Debug Saved Program Status Register")]),
    (CoprocKey::new(15, 4, 3, 5, 1), &[r("DLR", "Debug Link Register")]),
    (CoprocKey::new(15, 0, 0, 3, 5), &[r("ID_DFR1", "Debug Feature Register 1")]),
    (CoprocKey::new(14, 0, 0, 0, 0), &[r("DBGDIDR", "Debug ID Register")]),
    (CoprocKey::new(14, 0, 0, 6, 0), &[r("DBGWFAR", "Debug Watchpoint Fault Address Register")]),
    (CoprocKey::new(14, 0, 0, 6, 2), &[r("DBGOSECCR", "Debug OS Lock Exception Catch Control Register")]),
    (CoprocKey::new(14, 0, 0, 7, 0), &[r("DBGVCR", "Debug Vector Catch Register")]),
    (CoprocKey::new(14, 0, 0, 0, 2), &[r("DBGDTRRXext", "Debug OS Lock Data Transfer Register, Receive, External View")]),
    (CoprocKey::new(14, 0, 0, 2, 0), &[r("DBGDCCINT", "DCC Interrupt Enable Register")]),
    (CoprocKey::new(14, 0, 0, 2, 2), &[r("DBGDSCRext", "Debug Status and Control Register, External View")]),
    (CoprocKey::new(14, 0, 0, 3, 2), &[r("DBGDTRTXext", "Debug OS Lock Data Transfer Register, Transmit")]),
    (CoprocKey::new(14, 0, 0, 0, 4), &[r("DBGBVR0", "Debug Breakpoint Value Register 0")]),
    (CoprocKey::new(14, 0, 0, 1, 4), &[r("DBGBVR1", "Debug Breakpoint Value Register 1")]),
    (CoprocKey::new(14, 0, 0, 2, 4), &[r("DBGBVR2", "Debug Breakpoint Value Register 2")]),
    (CoprocKey::new(14, 0, 0, 3, 4), &[r("DBGBVR3", "Debug Breakpoint Value Register 3")]),
    (CoprocKey::new(14, 0, 0, 4, 4), &[r("DBGBVR4", "Debug Breakpoint Value Register 4")]),
    (CoprocKey::new(14, 0, 0, 5, 4), &[r("DBGBVR5", "Debug Breakpoint Value Register 5")]),
    (CoprocKey::new(14, 0, 0, 6, 4), &[r("DBGBVR6", "Debug Breakpoint Value Register 6")]),
    (CoprocKey::new(14, 0, 0, 7, 4), &[r("DBGBVR7", "Debug Breakpoint Value Register 7")]),
    (CoprocKey::new(14, 0, 0, 8, 4), &[r("DBGBVR8", "Debug Breakpoint Value Register 8")]),
    (CoprocKey::new(14, 0, 0, 9, 4), &[r("DBGBVR9", "Debug Breakpoint Value Register 9")]),
    (CoprocKey::new(14, 0, 0, 10, 4), &[r("DBGBVR10", "Debug Breakpoint Value Register 10")]),
    (CoprocKey::new(14, 0, 0, 11, 4), &[r("DBGBVR11", "Debug Breakpoint Value Register 11")]),
    (CoprocKey::new(14, 0, 0, 12, 4), &[r("DBGBVR12", "Debug Breakpoint Value Register 12")]),
    (CoprocKey::new(14, 0, 0, 13, 4), &[r("DBGBVR13", "Debug Breakpoint Value Register 13")]),
    (CoprocKey::new(14, 0, 0, 14, 4), &[r("DBGBVR14", "Debug Breakpoint Value Register 14")]),
    (CoprocKey::new(14, 0, 0, 15, 4), &[r("DBGBVR15", "Debug Breakpoint Value Register 15")]),
    (CoprocKey::new(14, 0, 0, 0, 5), &[r("DBGBCR0", "Debug Breakpoint Control Register 0")]),
    (CoprocKey::new(14, 0, 0, 1, 5), &[r("DBGBCR1", "Debug Breakpoint Control Register 1")]),
    (CoprocKey::new(14, 0, 0, 2, 5), &[r("DBGBCR2", "Debug Breakpoint Control Register 2")]),
    (CoprocKey::new(14, 0, 0, 3, 5), &[r("DBGBCR3", "Debug Breakpoint Control Register 3")]),
    (CoprocKey::new(14, 0, 0, 4, 5), &[r("DBGBCR4", "Debug Breakpoint Control Register 4")]),
    (CoprocKey::new(14, 0, 0, 5, 5), &[r("DBGBCR5", "Debug Breakpoint Control Register 5")]),
    (CoprocKey::new(14, 0, 0, 6, 5), &[r("DBGBCR6", "Debug Breakpoint Control Register 6")]),
    (CoprocKey::new(14, 0, 0, 7, 5), &[r("DBGBCR7", "Debug Breakpoint Control Register 7")]),
    (CoprocKey::new(14, 0, 0, 8, 5), &[r("DBGBCR8", "Debug Breakpoint Control Register 8")]),
    (CoprocKey::new(14, 0, 0, 9, 5), &[r("DBGBCR9", "Debug Breakpoint Control Register 9")]),
    (CoprocKey::new(14, 0, 0, 10, 5), &[r("DBGBCR10", "Debug Breakpoint Control Register 10")]),
    (CoprocKey::new(14, 0, 0, 11, 5), &[r("DBGBCR11", "Debug Breakpoint Control Register 11")]),
    (CoprocKey::new(14, 0, 0, 12, 5), &[r("DBGBCR12", "Debug Breakpoint Control Register 12")]),
    (CoprocKey::new(14, 0, 0, 13, 5), &[r("DBGBCR13", "Debug Breakpoint Control Register 13")]),
    (CoprocKey::new(14, 0, 0, 14, 5), &[r("DBGBCR14", "Debug Breakpoint Control Register 14")]),
    (CoprocKey::new(14, 0, 0, 15, 5), &[r("DBGBCR15", "Debug Breakpoint Control Register 15")]),
    (CoprocKey::new(14, 0, 0, 0, 6), &[r("DBGWVR0", "Debug Watchpoint Value Register 0")]),
    (CoprocKey::new(14, 0, 0, 1, 6), &[r("DBGWVR1", "Debug Watchpoint Value Register 1")]),
    (CoprocKey::new(14, 0, 0, 2, 6), &[r("DBGWVR2", "Debug Watchpoint Value Register 2")]),
    (CoprocKey::new(14, 0, 0, 3, 6), &[r("DBGWVR3", "Debug Watchpoint Value Register 3")]),
    (CoprocKey::new(14, 0, 0, 4, 6), &[r("DBGWVR4", "Debug Watchpoint Value Register 4")]),
    (CoprocKey::new(14, 0, 0, 5, 6), &[r("DBGWVR5", "Debug Watchpoint Value Register 5")]),
    (CoprocKey::new(14, 0, 0, 6, 6), &[r("DBGWVR6", "Debug Watchpoint Value Register 6")]),
    (CoprocKey::new(14, 0, 0, 7, 6), &[r("DBGWVR7", "Debug Watchpoint Value Register 7")]),
    (CoprocKey::new(14, 0, 0, 8, 6), &[r("DBGWVR8", "Debug Watchpoint Value Register 8")]),
    (CoprocKey::new(14, 0, 0, 9, 6), &[r("DBGWVR9", "Debug Watchpoint Value Register 9")]),
    (CoprocKey::new(14, 0, 0, 10, 6), &[r("DBGWVR10", "Debug Watchpoint Value Register 10")]),
    (CoprocKey::new(14, 0, 0, 11, 6), &[r("DBGWVR11", "Debug Watchpoint Value Register 11")]),
    (CoprocKey::new(14, 0, 0, 12, 6), &[r("DBGWVR12", "Debug Watchpoint Value Register 12")]),
    (CoprocKey::new(14, 0, 0, 13, 6), &[r("DBGWVR13", "Debug Watchpoint Value Register 13")]),
    (CoprocKey::new(14, 0, 0, 14, 6), &[r("DBGWVR14", "Debug Watchpoint Value Register 14")]),
    (CoprocKey::new(14, 0, 0, 15, 6), &[r("DBGWVR15", "Debug Watchpoint Value Register 15")]),
    (CoprocKey::new(14, 0, 0, 0, 7), &[r("DBGWCR0", "Debug Watchpoint Control Register 0")]),
    (CoprocKey::new(14, 0, 0, 1, 7), &[r("DBGWCR1", "Debug Watchpoint Control Register 1")]),
    (CoprocKey::new(14, 0, 0, 2, 7), &[r("DBGWCR2", "Debug Watchpoint Control Register 2")]),
    (CoprocKey::new(14, 0, 0, 3, 7), &[r("DBGWCR3", "Debug Watchpoint Control Register 3")]),
    (CoprocKey::new(14, 0, 0, 4, 7), &[r("DBGWCR4", "Debug Watchpoint Control Register 4")]),
    (CoprocKey::new(14, 0, 0, 5, 7), &[r("DBGWCR5", "Debug Watchpoint Control Register 5")]),
    (CoprocKey::new(14, 0, 0, 6, 7), &[r("DBGWCR6", "Debug Watchpoint Control Register 6")]),
    (CoprocKey::new(14, 0, 0, 7, 7), &[r("DBGWCR7", "Debug Watchpoint Control Register 7")]),
    (CoprocKey::new(14, 0, 0, 8, 7), &[r("DBGWCR8", "Debug Watchpoint Control Register 8")]),
    (CoprocKey::new(14, 0, 0, 9, 7), &[r("DBGWCR9", "Debug Watchpoint Control Register 9")]),
    (CoprocKey::new(14, 0, 0, 10, 7), &[r("DBGWCR10", "Debug Watchpoint Control Register 10")]),
    (CoprocKey::new(14, 0, 0, 11, 7), &[r("DBGWCR11", "Debug Watchpoint Control Register 11")]),
    (CoprocKey::new(14, 0, 0, 12, 7), &[r("DBGWCR12", "Debug Watchpoint Control Register 12")]),
    (CoprocKey::new(14, 0, 0, 13, 7), &[r("DBGWCR13", "Debug Watchpoint Control Register 13")]),
    (CoprocKey::new(14, 0, 0, 14, 7), &[r("DBGWCR14", "Debug Watchpoint Control Register 14")]),
    (CoprocKey::new(14, 0, 0, 15, 7), &[r("DBGWCR15", "Debug Watchpoint Control Register 15")]),
    (CoprocKey::new(14, 1, 0, 0, 1), &[r("DBGBXVR0", "Debug Breakpoint Extended Value Register 0")]),
    (CoprocKey::new(14, 1, 0, 1, 1), &[r("DBGBXVR1", "Debug Breakpoint Extended Value Register 1")]),
    (CoprocKey::new(14, 1, 0, 2, 1), &[r("DBGBXVR2", "Debug Breakpoint Extended Value Register 2")]),
    (CoprocKey::new(14, 1, 0, 3, 1), &[r("DBGBXVR3", "Debug Breakpoint Extended Value Register 3")]),
    (CoprocKey::new(14, 1, 0, 4, 1), &[r("DBGBXVR4", "Debug Breakpoint Extended Value Register 4")]),
    (CoprocKey::new(14, 1, 0, 5, 1), &[r("DBGBXVR5", "Debug Breakpoint Extended Value Register 5")]),
    (CoprocKey::new(14, 1, 0, 6, 1), &[r("DBGBXVR6", "Debug Breakpoint Extended Value Register 6")]),
    (CoprocKey::new(14, 1, 0, 7, 1), &[r("DBGBXVR7", "Debug Breakpoint Extended Value Register 7")]),
    (CoprocKey::new(14, 1, 0, 8, 1), &[r("DBGBXVR8", "Debug Breakpoint Extended Value Register 8")]),
    (CoprocKey::new(14, 1, 0, 9, 1), &[r("DBGBXVR9", "Debug Breakpoint Extended Value Register 9")]),
    (CoprocKey::new(14, 1, 0, 10, 1), &[r("DBGBXVR10", "Debug Breakpoint Extended Value Register 10")]),
    (CoprocKey::new(14, 1, 0, 11, 1), &[r("DBGBXVR11", "Debug Breakpoint Extended Value Register 11")]),
    (CoprocKey::new(14, 1, 0, 12, 1), &[r("DBGBXVR12", "Debug Breakpoint Extended Value Register 12")]),
    (CoprocKey::new(14, 1, 0, 13, 1), &[r("DBGBXVR13", "Debug Breakpoint Extended Value Register 13")]),
    (CoprocKey::new(14, 1, 0, 14, 1), &[r("DBGBXVR14", "Debug Breakpoint Extended Value Register 14")]),
    (CoprocKey::new(14, 1, 0, 15, 1), &[r("DBGBXVR15", "Debug Breakpoint Extended Value Register 15")]),
    (CoprocKey::new(14, 1, 0, 0, 4), &[r("DBGOSLAR", "Debug OS Lock Access Register")]),
    (CoprocKey::new(14, 1, 0, 1, 4), &[r("DBGOSLSR", "Debug OS Lock Status Register")]),
    (CoprocKey::new(14, 1, 0, 4, 4), &[r("DBGPRCR", "Debug Power Control Register")]),
    (CoprocKey::new(14, 7, 0, 14, 6), &[r("DBGAUTHSTATUS", "Debug Authentication Status register")]),
    (CoprocKey::new(14, 7, 0, 0, 7), &[r("DBGDEVID2", "Debug Device ID register 2")]),
    (CoprocKey::new(14, 7, 0, 1, 7), &[r("DBGDEVID1", "Debug Device ID register 1")]),
    (CoprocKey::new(14, 7, 0, 2, 7), &[r("DBGDEVID", "Debug Device ID register 0")]),
    (CoprocKey::new(14, 7, 0, 8, 6), &[r("DBGCLAIMSET", "Debug Claim Tag Set register")]),
    (CoprocKey::new(14, 7, 0, 9, 6), &[r("DBGCLAIMCLR", "Debug Claim Tag Clear register")]),
    (CoprocKey::new(14, 0, 0, 1, 0), &[r("DBGDSCRint", "Debug Status and Control Register, Internal View")]),
    (CoprocKey::new(14, 0, 0, 5, 0), &[r("DBGDTRRXint", "Debug Data Transfer Register, Receive"), r("DBGDTRTXint", "Debug Data Transfer Register, Transmit")]),
    (CoprocKey::new(14, 1, 0, 0, 0), &[r("DBGDRAR", "Debug ROM Address Register")]),
    (CoprocKey::new(14, 1, 0, 3, 4), &[r("DBGOSDLR", "Debug OS Double Lock Register")]),
    (CoprocKey::new(14, 2, 0, 0, 0), &[r("DBGDSAR", "Debug Self Address Register")]),
    (CoprocKey::new(15, 1, 4, 2, 1), &[r("HTRFCR", "Hyp Trace Filter Control Register")]),
    (CoprocKey::new(15, 1, 0, 2, 1), &[r("TRFCR", "Trace Filter Control Register")]),
];

/// Bit layouts for AArch32 registers, keyed by canonical name.
#[rustfmt::skip]
pub(super) static FIELDS: &[(&str, &[FieldSpec])] = &[
    ("DACR", &[
        FieldSpec::range(0, 2, "D0", "Domain 0"),
        FieldSpec::range(2, 2, "D1", "Domain 1"),
        FieldSpec::range(4, 2, "D2", "Domain 2"),
        FieldSpec::range(6, 2, "D3", "Domain 3"),
        FieldSpec::range(8, 2, "D4", "Domain 4"),
        FieldSpec::range(10, 2, "D5", "Domain 5"),
        FieldSpec::range(12, 2, "D6", "Domain 6"),
        FieldSpec::range(14, 2, "D7", "Domain 7"),
        FieldSpec::range(16, 2, "D8", "Domain 8"),
        FieldSpec::range(18, 2, "D9", "Domain 9"),
        FieldSpec::range(20, 2, "D10", "Domain 10"),
        FieldSpec::range(22, 2, "D11", "Domain 11"),
        FieldSpec::range(24, 2, "D12", "Domain 12"),
        FieldSpec::range(26, 2, "D13", "Domain 13"),
        FieldSpec::range(28, 2, "D14", "Domain 14"),
        FieldSpec::range(30, 2, "D15", "Domain 15"),
    ]),
    ("MIDR", &[
        FieldSpec::range(0, 3, "Revision", "Revision number"),
        FieldSpec::range(4, 12, "PartNum", "Primary Part Number"),
        FieldSpec::range(16, 4, "Architecture", "Architecture version"),
        FieldSpec::range(20, 4, "Variant", "Variant number"),
        FieldSpec::range(24, 8, "Implementer", "Implementer code"),
    ]),
    ("ID_ISAR0", &[
        FieldSpec::range(0, 4, "Swap", "Swap instructions"),
        FieldSpec::range(4, 4, "BitCount", "Bit Counting instructions"),
        FieldSpec::range(8, 4, "BitField", "BitField instructions"),
        FieldSpec::range(12, 4, "CmpBranch", "Compare and Branch instructions"),
        FieldSpec::range(16, 4, "Coproc", "System register access instructions"),
        FieldSpec::range(20, 4, "Debug", "Debug instructions"),
        FieldSpec::range(24, 4, "Divide", "Divide instructions"),
    ]),
    ("ID_ISAR1", &[
        FieldSpec::range(0, 4, "Endian", "SETEND instruction"),
        FieldSpec::range(4, 4, "Except", "Exception-handling instructions"),
        FieldSpec::range(8, 4, "Except_AR", "A and R-profile exception handling instructions"),
        FieldSpec::range(12, 4, "Extend", "Extend instructions"),
        FieldSpec::range(16, 4, "IfThen", "If-Then instructions"),
        FieldSpec::range(20, 4, "Immediate", "Long immediate instructions"),
        FieldSpec::range(24, 4, "Interwork", "Interworking instructions"),
        FieldSpec::range(28, 4, "Jazelle", "Jazelle extension instructions"),
    ]),
    ("ID_ISAR2", &[
        FieldSpec::range(0, 4, "LoadStore", "Additional load/store instructions"),
        FieldSpec::range(4, 4, "MemHint", "Memory Hint instructions"),
        FieldSpec::range(8, 4, "MultiAccessInt", "Interruptible multi-access instructions"),
        FieldSpec::range(12, 4, "Mult", "Multiply instructions"),
        FieldSpec::range(16, 4, "MultS", "Advanced signed Multiply instructions"),
        FieldSpec::range(20, 4, "MultU", "Advanced unsigned Multiply instructions"),
        FieldSpec::range(24, 4, "PSR_AR", "A and R-profile instructions to manipulate the PSR"),
        FieldSpec::range(28, 4, "Reversal", "Reversal instructions"),
    ]),
    ("ID_ISAR3", &[
        FieldSpec::range(0, 4, "Saturate", "Saturate instructions"),
        FieldSpec::range(4, 4, "SIMD", "SIMD instructions"),
        FieldSpec::range(8, 4, "SVC", "SVC instructions"),
        FieldSpec::range(12, 4, "SyncPrim", "Synchronization Primitive instructions"),
        FieldSpec::range(16, 4, "TabBranch", "Table Branch instructions"),
        FieldSpec::range(20, 4, "T32Copy", "T32 non-flag setting MOV instructions"),
        FieldSpec::range(24, 4, "TrueNOP", "true NOP instructions"),
        FieldSpec::range(28, 4, "T32EE", "T32EE instructions"),
    ]),
    ("ID_ISAR4", &[
        FieldSpec::range(0, 4, "Unpriv", "Unprivileged instructions"),
        FieldSpec::range(4, 4, "WithShifts", "Instructions with shifts"),
        FieldSpec::range(8, 4, "Writeback", "Writeback addressing mode"),
        FieldSpec::range(12, 4, "SMC", "SMC instructions"),
        FieldSpec::range(16, 4, "Barrier", "Barrier instructions"),
        FieldSpec::range(20, 4, "SyncPrim_frac", "Synchronization Primitive instructions"),
        FieldSpec::range(24, 4, "PSR_M", "M-profile instructions to modify the PSR"),
        FieldSpec::range(28, 4, "SWP_frac", "Bus locking for SWP and SWPB instructions"),
    ]),
    ("ID_ISAR5", &[
        FieldSpec::range(0, 4, "SEVL", "SEVL instructions"),
        FieldSpec::range(4, 4, "AES", "AES instructions"),
        FieldSpec::range(8, 4, "SHA1", "SHA1 instructions"),
        FieldSpec::range(12, 4, "SHA2", "SHA2 instructions"),
        FieldSpec::range(16, 4, "CRC32", "CRC32 instructions"),
        FieldSpec::range(24, 4, "RDM", "VQRDMLAH and VQRDMLSH instructions"),
        FieldSpec::range(28, 4, "VCMA", "VCMLA and VCADD instructions"),
    ]),
    ("ID_ISAR6", &[
        FieldSpec::range(0, 4, "JSCVT", "JavaScript conversion instruction"),
        FieldSpec::range(4, 4, "DP", "Dot product instructions"),
        FieldSpec::range(8, 4, "FHM", "VFMAL and VFMSL instructions"),
        FieldSpec::range(12, 4, "SB", "SB instruction"),
        FieldSpec::range(16, 4, "SPECRES", "Speculation invalidation instructions"),
        FieldSpec::range(20, 4, "BF16", "BFloat16 instructions"),
        FieldSpec::range(24, 4, "I8MM", "Int8 matrix multiplication instructions"),
    ]),
    ("FPSCR", &[
        FieldSpec::bit(0, "IOC", "Invalid Operation exception"),
        FieldSpec::bit(1, "DZC", "Division by Zero exception"),
        FieldSpec::bit(2, "OFC", "Overflow exception"),
        FieldSpec::bit(3, "UFC", "Underflow exception"),
        FieldSpec::bit(4, "IXC", "Inexact exception"),
        FieldSpec::bit(7, "IDC", "Input Denormal exception"),
        FieldSpec::bit(8, "IOE", "Invalid Operation floating-point exception"),
        FieldSpec::bit(9, "DZE", "Divide by Zero floating-point exception"),
        FieldSpec::bit(10, "OFE", "Overflow floating-point exception"),
        FieldSpec::bit(11, "UFE", "Underflow floating-point exception"),
        FieldSpec::bit(12, "IXE", "Inexact floating-point exception"),
        FieldSpec::bit(15, "IDE", "Input Denormal floating-point exception"),
        FieldSpec::bit(19, "FZ16", "Flush-to-zero mode on half-precision instructions"),
        FieldSpec::range(20, 2, "Stride", "Stride"),
        FieldSpec::range(22, 2, "RMode", "Rounding Mode control field"),
        FieldSpec::bit(24, "FZ", "Flush-to-zero mode"),
        FieldSpec::bit(25, "DN", "Default NaN mode"),
        FieldSpec::bit(26, "AHP", "Alternative Half-Precision"),
        FieldSpec::bit(27, "QC", "Saturation"),
        FieldSpec::bit(28, "V", "Overflow flag"),
        FieldSpec::bit(29, "C", "Carry flag"),
        FieldSpec::bit(30, "Z", "Zero flag"),
        FieldSpec::bit(31, "N", "Negative flag"),
    ]),
    ("HCR", &[
        FieldSpec::bit(0, "VM", "Virtualization MMU enable"),
        FieldSpec::bit(1, "SWIO", "Set/Way Invalidation Override"),
        FieldSpec::bit(2, "PTW", "Protected Table Walk"),
        FieldSpec::bit(3, "FMO", "FIQ Mask Override"),
        FieldSpec::bit(4, "IMO", "IRQ Mask Override"),
        FieldSpec::bit(5, "AMO", "Asynchronous Abort Mask Override"),
        FieldSpec::bit(6, "VE", "Virtual FIQ exception"),
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
        FieldSpec::bit(21, "TAC", "Trap ACTLR accesses"),
        FieldSpec::bit(22, "TSW", "Trap Data/Unified Cache maintenance operations by Set/Way"),
        FieldSpec::bit(23, "TPC", "Trap Data/Unified Cache maintenance operations to Point of Coherency"),
        FieldSpec::bit(24, "TPU", "Trap Cache maintenance instructions to Point of Unification"),
        FieldSpec::bit(25, "TTLB", "Trap TLB maintenance instructions"),
        FieldSpec::bit(26, "TVM", "Trap Virtual Memory controls"),
        FieldSpec::bit(27, "TGE", "Trap General Exceptions"),
        FieldSpec::bit(29, "HCD", "Hypervisor Call Disable"),
        FieldSpec::bit(30, "TRVM", "Trap Read of Virtual Memory controls"),
    ]),
    ("HCR2", &[
        FieldSpec::bit(0, "CD", "Stage 2 Data cache disable"),
        FieldSpec::bit(1, "ID", "Stage 2 Instruction cache disable"),
        FieldSpec::bit(4, "TERR", "Trap Error record accesses"),
        FieldSpec::bit(5, "TEA", "Route synchronous External Abort exceptions to EL2"),
        FieldSpec::bit(6, "MIOCNCE", "Mismatched Inner/Outer Cacheable Non-Coherency Enable"),
        FieldSpec::bit(17, "TID4", "Trap ID group 4"),
        FieldSpec::bit(18, "TICAB", "Trap ICIALLUIS cache maintenance instructions"),
        FieldSpec::bit(20, "TOCU", "Trap cache maintenance instructions that operate to the Point of Unification"),
        FieldSpec::bit(22, "TTLBIS", "Trap TLB maintenance instructions that operate on the Inner Shareable domain"),
    ]),
    ("SCR", &[
        FieldSpec::bit(0, "NS", "Non-secure"),
        FieldSpec::bit(1, "IRQ", "IRQ handler"),
        FieldSpec::bit(2, "FIQ", "FIQ handler"),
        FieldSpec::bit(3, "EA", "External Abort handler"),
        FieldSpec::bit(4, "FW", "Can mask Non-secure FIQ"),
        FieldSpec::bit(5, "AW", "Can mask Non-secure external aborts"),
        FieldSpec::bit(6, "nET", "Not Early Termination"),
        FieldSpec::bit(7, "SCD", "Secure Monitor Call disable"),
        FieldSpec::bit(8, "HCE", "Hypervisor Call instruction enable"),
        FieldSpec::bit(9, "SIF", "Secure instruction fetch"),
        FieldSpec::bit(12, "TWI", "Traps WFI instructions to Monitor mode"),
        FieldSpec::bit(13, "TWE", "Traps WFE instructions to Monitor mode"),
        FieldSpec::bit(15, "TERR", "Trap Error record accesses"),
    ]),
    ("SCTLR", &[
        FieldSpec::bit(0, "M", "MMU Enable"),
        FieldSpec::bit(1, "A", "Alignment"),
        FieldSpec::bit(2, "C", "Cache Enable"),
        FieldSpec::bit(3, "nTLSMD", "No Trap Load Multiple and Store Multiple to Device-nGRE/Device-nGnRE/Device-nGnRnE memory"),
        FieldSpec::bit(4, "LSMAOE", "Load Multiple and Store Multiple Atomicity and Ordering Enable"),
        FieldSpec::bit(5, "CP15BEN", "System instruction memory barrier enable"),
        FieldSpec::bit(7, "ITD", "IT Disable"),
        FieldSpec::bit(8, "SETEND", "SETEND instruction disable"),
        FieldSpec::bit(10, "SW", "SWP/SWPB Enable"),
        FieldSpec::bit(11, "Z", "Branch Prediction Enable"),
        FieldSpec::bit(12, "I", "Instruction cache Enable"),
        FieldSpec::bit(13, "V", "High exception vectors"),
        FieldSpec::bit(14, "RR", "Round-robin cache"),
        FieldSpec::bit(16, "nTWI", "Traps EL0 execution of WFI instructions to Undefined mode"),
        FieldSpec::bit(17, "HA", "Hardware Access Enable"),
        FieldSpec::bit(18, "nTWE", "Traps EL0 execution of WFE instructions to Undefined mode"),
        FieldSpec::bit(19, "WXN", "Write permission implies XN"),
        FieldSpec::bit(20, "UWXN", "Unprivileged write permission implies PL1 XN"),
        FieldSpec::bit(21, "FI", "Fast Interrupts configuration"),
        FieldSpec::bit(23, "SPAN", "Set Privileged Access Never"),
        FieldSpec::bit(24, "VE", "Interrupt Vectors Enable"),
        FieldSpec::bit(25, "EE", "Exception Endianness"),
        FieldSpec::bit(27, "NMFI", "Non-maskable Fast Interrupts"),
        FieldSpec::bit(28, "TRE", "TEX Remap Enable"),
        FieldSpec::bit(29, "AFE", "Access Flag Enable"),
        FieldSpec::bit(30, "TE", "Thumb Exception Enable"),
        FieldSpec::bit(31, "DSSBS", "Default PSTATE.SSBS value on Exception Entry"),
    ]),
    ("HSCTLR", &[
        FieldSpec::bit(0, "M", "MMU Enable"),
        FieldSpec::bit(1, "A", "Alignment"),
        FieldSpec::bit(2, "C", "Cache Enable"),
        FieldSpec::bit(3, "SA/nTLSMD", "Stack alignment check or No Trap Load Multiple and Store Multiple to Device-nGRE/Device-nGnRE/Device-nGnRnE memory"),
        FieldSpec::bit(4, "LSMAOE", "Load Multiple and Store Multiple Atomicity and Ordering Enable"),
        FieldSpec::bit(5, "CP15BEN", "System instruction memory barrier enable"),
        FieldSpec::bit(7, "ITD", "IT Disable"),
        FieldSpec::bit(8, "SED", "SETEND instruction disable"),
        FieldSpec::bit(12, "I", "Instruction cache Enable"),
        FieldSpec::bit(19, "WXN", "Write permission implies XN"),
        FieldSpec::bit(25, "EE", "Exception Endianness"),
        FieldSpec::bit(30, "TE", "Thumb Exception Enable"),
        FieldSpec::bit(31, "DSSBS", "Default PSTATE.SSBS value on Exception Entry"),
    ]),
    ("NSACR", &[
        FieldSpec::bit(10, "CP10", "CP10 access in the NS state"),
        FieldSpec::bit(11, "CP11", "CP11 access in the NS state"),
        FieldSpec::bit(14, "NSD32DIS", "Disable the NS use of D16-D31 of the VFP register file"),
        FieldSpec::bit(15, "NSASEDIS", "Disable NS Advanced SIMD Extension functionality"),
        FieldSpec::bit(16, "PLE", "NS access to the Preload Engine resources"),
        FieldSpec::bit(17, "TL", "Lockable TLB entries can be allocated in NS state"),
        FieldSpec::bit(18, "NS_SMP", "SMP bit of the Auxiliary Control Register is writable in NS state"),
        FieldSpec::bit(20, "NSTRCDIS", "Disables Non-secure System register accesses to all implemented trace registers"),
    ]),
];
