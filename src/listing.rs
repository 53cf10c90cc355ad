//! JSON disassembly listings.
//!
//! A listing is a disassembler's view of a binary exported as one JSON
//! document: target processor, functions, instruction heads with their
//! printed operands and encoding, and any literal pool words. [`Listing`]
//! implements [`Database`] over such a document and records the comments
//! and colors an annotation pass writes, so the annotated listing can be
//! saved back.
//!
//! ```json
//! {
//!   "processor": "ARM",
//!   "pointer_width": 32,
//!   "functions": [{ "name": "start", "start": 4096, "end": 4108 }],
//!   "instructions": [
//!     { "address": 4096, "mnemonic": "MOV", "operands": ["R0", "#1"] },
//!     { "address": 4100, "mnemonic": "MCR",
//!       "operands": ["0", "R0,c1,c0", "0"], "bytes": "100f01ee" }
//!   ]
//! }
//! ```

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{AnnotatorError, Result};
use crate::host::{parse_operand_value, Address, Database};
use crate::types::ArchMode;

fn default_size() -> u64 {
    4
}

/// One printed operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OperandRepr")]
pub struct Operand {
    /// Operand as printed by the disassembler.
    pub text: String,
    /// Numeric value, when the disassembler exported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

/// Operands may be given as bare text or with an explicit value.
#[derive(Deserialize)]
#[serde(untagged)]
enum OperandRepr {
    Text(String),
    Full {
        text: String,
        #[serde(default)]
        value: Option<u64>,
    },
}

impl From<OperandRepr> for Operand {
    fn from(repr: OperandRepr) -> Self {
        match repr {
            OperandRepr::Text(text) => Operand { text, value: None },
            OperandRepr::Full { text, value } => Operand { text, value },
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand {
            text: text.to_string(),
            value: None,
        }
    }
}

/// An instruction head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub address: Address,
    #[serde(default = "default_size")]
    pub size: u64,
    pub mnemonic: String,
    #[serde(default)]
    pub operands: Vec<Operand>,
    /// Encoding word, when exported pre-assembled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<u32>,
    /// Encoding bytes as hex, in memory order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>,
    /// Comments by operand index.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub comments: BTreeMap<usize, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

/// A function's extent, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub start: Address,
    pub end: Address,
}

/// A 32-bit data word, typically a literal pool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataWord {
    pub address: Address,
    pub value: u32,
}

/// An in-memory disassembly listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub processor: String,
    pub pointer_width: u32,
    #[serde(default)]
    pub big_endian: bool,
    #[serde(default)]
    functions: Vec<Function>,
    instructions: Vec<Instruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    data: Vec<DataWord>,

    #[serde(skip)]
    heads: BTreeMap<Address, usize>,
    #[serde(skip)]
    words: HashMap<Address, u32>,
}

impl Listing {
    /// Start a listing by hand, for the given execution state.
    pub fn builder(mode: ArchMode) -> ListingBuilder {
        ListingBuilder::new(mode)
    }

    /// Parse a listing from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let listing: Listing = serde_json::from_str(json)?;
        listing.indexed()
    }

    /// Parse a listing from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let listing: Listing = serde_json::from_reader(reader)?;
        listing.indexed()
    }

    /// Load a listing from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Write the listing, comments and colors included, as pretty JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Save the listing to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Comment attached to an operand, if any.
    pub fn comment(&self, address: Address, operand: usize) -> Option<&str> {
        self.instruction(address)
            .ok()?
            .comments
            .get(&operand)
            .map(String::as_str)
    }

    /// Highlight color of an instruction, if set.
    pub fn color(&self, address: Address) -> Option<u32> {
        self.instruction(address).ok()?.color
    }

    /// Instructions, in listing order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Known functions.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Data words, in listing order.
    pub fn data_words(&self) -> &[DataWord] {
        &self.data
    }

    /// Every commented instruction with its comments, in address order.
    pub fn annotations(&self) -> impl Iterator<Item = (Address, &BTreeMap<usize, String>)> {
        self.heads.values().filter_map(|&slot| {
            let insn = &self.instructions[slot];
            (!insn.comments.is_empty()).then_some((insn.address, &insn.comments))
        })
    }

    fn indexed(mut self) -> Result<Self> {
        self.heads.clear();
        for (slot, insn) in self.instructions.iter().enumerate() {
            if insn.size == 0 {
                return Err(invalid(format!(
                    "instruction at 0x{:X} has zero size",
                    insn.address
                )));
            }
            if self.heads.insert(insn.address, slot).is_some() {
                return Err(invalid(format!(
                    "duplicate instruction at 0x{:X}",
                    insn.address
                )));
            }
            if let Some(bytes) = &insn.bytes {
                hex::decode(bytes).map_err(|err| {
                    invalid(format!("bad encoding at 0x{:X}: {}", insn.address, err))
                })?;
            }
        }
        self.words = self
            .data
            .iter()
            .map(|word| (word.address, word.value))
            .collect();
        for function in &self.functions {
            if function.end < function.start {
                return Err(invalid(format!(
                    "function {} ends before it starts",
                    function.name
                )));
            }
        }
        Ok(self)
    }

    fn instruction(&self, address: Address) -> Result<&Instruction> {
        self.heads
            .get(&address)
            .map(|&slot| &self.instructions[slot])
            .ok_or(AnnotatorError::UnknownAddress { address })
    }

    fn instruction_mut(&mut self, address: Address) -> Result<&mut Instruction> {
        match self.heads.get(&address) {
            Some(&slot) => Ok(&mut self.instructions[slot]),
            None => Err(AnnotatorError::UnknownAddress { address }),
        }
    }

    /// Assemble an encoding word from exported bytes.
    fn encoding(&self, insn: &Instruction) -> Option<u32> {
        if let Some(word) = insn.word {
            return Some(word);
        }
        let bytes = hex::decode(insn.bytes.as_deref()?).ok()?;
        let word = match (bytes.len(), self.big_endian) {
            (4.., true) => BigEndian::read_u32(&bytes),
            (4.., false) => LittleEndian::read_u32(&bytes),
            (2..=3, true) => u32::from(BigEndian::read_u16(&bytes)),
            (2..=3, false) => u32::from(LittleEndian::read_u16(&bytes)),
            _ => return None,
        };
        Some(word)
    }
}

fn invalid(message: String) -> AnnotatorError {
    AnnotatorError::InvalidListing { message }
}

impl Database for Listing {
    fn processor_name(&self) -> String {
        self.processor.clone()
    }

    fn pointer_width(&self) -> u32 {
        self.pointer_width
    }

    fn heads(&self) -> Vec<Address> {
        self.heads.keys().copied().collect()
    }

    fn mnemonic(&self, address: Address) -> Result<String> {
        Ok(self.instruction(address)?.mnemonic.clone())
    }

    fn operand_text(&self, address: Address, index: usize) -> Result<String> {
        Ok(self
            .instruction(address)?
            .operands
            .get(index)
            .map(|operand| operand.text.clone())
            .unwrap_or_default())
    }

    fn operand_value(&self, address: Address, index: usize) -> Result<u64> {
        let operand = self
            .instruction(address)?
            .operands
            .get(index)
            .ok_or(AnnotatorError::MissingOperand { address, index })?;
        match operand.value {
            Some(value) => Ok(value),
            None => parse_operand_value(&operand.text)
                .ok_or_else(|| AnnotatorError::malformed(address, index, operand.text.as_str())),
        }
    }

    fn read_word(&self, address: Address) -> Result<u32> {
        if let Some(&word) = self.words.get(&address) {
            return Ok(word);
        }
        self.instruction(address)
            .ok()
            .and_then(|insn| self.encoding(insn))
            .ok_or(AnnotatorError::UnknownAddress { address })
    }

    fn prev_head(&self, address: Address) -> Option<Address> {
        self.heads.range(..address).next_back().map(|(&head, _)| head)
    }

    fn instruction_size(&self, address: Address) -> Result<u64> {
        if self.words.contains_key(&address) {
            return Ok(4);
        }
        Ok(self.instruction(address)?.size)
    }

    fn set_comment(&mut self, address: Address, operand: usize, text: &str) -> Result<()> {
        self.instruction_mut(address)?
            .comments
            .insert(operand, text.to_string());
        Ok(())
    }

    fn set_color(&mut self, address: Address, color: u32) -> Result<()> {
        self.instruction_mut(address)?.color = Some(color);
        Ok(())
    }

    fn function_name(&self, address: Address) -> Option<String> {
        self.functions
            .iter()
            .find(|function| function.start <= address && address < function.end)
            .map(|function| function.name.clone())
    }

    fn function_start(&self, name: &str) -> Option<Address> {
        self.functions
            .iter()
            .find(|function| function.name == name)
            .map(|function| function.start)
    }
}

/// Builder for hand-written listings.
#[derive(Debug, Clone)]
pub struct ListingBuilder {
    listing: Listing,
}

impl ListingBuilder {
    pub fn new(mode: ArchMode) -> Self {
        let pointer_width = match mode {
            ArchMode::Aarch32 => 32,
            ArchMode::Aarch64 => 64,
        };
        Self {
            listing: Listing {
                processor: "ARM".to_string(),
                pointer_width,
                big_endian: false,
                functions: Vec::new(),
                instructions: Vec::new(),
                data: Vec::new(),
                heads: BTreeMap::new(),
                words: HashMap::new(),
            },
        }
    }

    /// Override the processor name.
    pub fn processor(mut self, name: &str) -> Self {
        self.listing.processor = name.to_string();
        self
    }

    /// Add a 4-byte instruction with no exported encoding.
    pub fn insn(self, address: Address, mnemonic: &str, operands: &[&str]) -> Self {
        self.push(address, mnemonic, operands, None)
    }

    /// Add a 4-byte instruction with its encoding word.
    pub fn insn_word(self, address: Address, mnemonic: &str, operands: &[&str], word: u32) -> Self {
        self.push(address, mnemonic, operands, Some(word))
    }

    /// Give operand `index` of the instruction at `address` an explicit value.
    ///
    /// Literal loads print the loaded constant but carry the pool address.
    pub fn value(mut self, address: Address, index: usize, value: u64) -> Self {
        if let Some(operand) = self
            .listing
            .instructions
            .iter_mut()
            .rev()
            .find(|insn| insn.address == address)
            .and_then(|insn| insn.operands.get_mut(index))
        {
            operand.value = Some(value);
        }
        self
    }

    /// Add a literal pool word.
    pub fn data(mut self, address: Address, value: u32) -> Self {
        self.listing.data.push(DataWord { address, value });
        self
    }

    /// Add a function covering `start..end`.
    pub fn function(mut self, name: &str, start: Address, end: Address) -> Self {
        self.listing.functions.push(Function {
            name: name.to_string(),
            start,
            end,
        });
        self
    }

    fn push(mut self, address: Address, mnemonic: &str, operands: &[&str], word: Option<u32>) -> Self {
        self.listing.instructions.push(Instruction {
            address,
            size: default_size(),
            mnemonic: mnemonic.to_string(),
            operands: operands.iter().copied().map(Operand::from).collect(),
            word,
            bytes: None,
            comments: BTreeMap::new(),
            color: None,
        });
        self
    }

    /// Finish the listing. Later instructions at an address replace
    /// earlier ones.
    pub fn build(self) -> Listing {
        let mut listing = self.listing;
        listing.instructions.sort_by_key(|insn| insn.address);
        listing.instructions.reverse();
        listing.instructions.dedup_by_key(|insn| insn.address);
        listing.instructions.reverse();
        listing.heads = listing
            .instructions
            .iter()
            .enumerate()
            .map(|(slot, insn)| (insn.address, slot))
            .collect();
        listing.words = listing
            .data
            .iter()
            .map(|word| (word.address, word.value))
            .collect();
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r##"{
        "processor": "ARM",
        "pointer_width": 32,
        "functions": [{ "name": "reset", "start": 4096, "end": 4112 }],
        "instructions": [
            { "address": 4096, "mnemonic": "MOV", "operands": ["R0", "#1"] },
            { "address": 4100, "mnemonic": "MCR",
              "operands": ["0", "R0,c1,c0", { "text": "0", "value": 0 }],
              "bytes": "100f01ee" },
            { "address": 4104, "mnemonic": "LDR", "operands": ["R1", "=0x8000"] },
            { "address": 4108, "mnemonic": "BX", "operands": ["LR"] }
        ],
        "data": [{ "address": 4112, "value": 32768 }]
    }"##;

    #[test]
    fn test_load_sample() {
        let listing = Listing::from_json(SAMPLE).unwrap();
        assert_eq!(listing.heads(), vec![4096, 4100, 4104, 4108]);
        assert_eq!(listing.mnemonic(4100).unwrap(), "MCR");
        assert_eq!(listing.operand_text(4100, 1).unwrap(), "R0,c1,c0");
        assert_eq!(listing.operand_text(4100, 5).unwrap(), "");
        assert_eq!(listing.operand_value(4096, 1).unwrap(), 1);
        assert_eq!(listing.operand_value(4104, 1).unwrap(), 0x8000);
        assert_eq!(listing.read_word(4100).unwrap(), 0xEE01_0F10);
        assert_eq!(listing.read_word(4112).unwrap(), 0x8000);
    }

    #[test]
    fn test_operand_errors() {
        let listing = Listing::from_json(SAMPLE).unwrap();
        assert!(matches!(
            listing.operand_value(4108, 1),
            Err(AnnotatorError::MissingOperand { index: 1, .. })
        ));
        assert!(matches!(
            listing.operand_value(4108, 0),
            Err(AnnotatorError::MalformedOperand { .. })
        ));
        assert!(matches!(
            listing.mnemonic(4098),
            Err(AnnotatorError::UnknownAddress { address: 4098 })
        ));
        assert!(listing.read_word(4096).is_err());
    }

    #[test]
    fn test_navigation() {
        let listing = Listing::from_json(SAMPLE).unwrap();
        assert_eq!(listing.prev_head(4096), None);
        assert_eq!(listing.prev_head(4104), Some(4100));
        assert_eq!(listing.next_head(4100), Some(4104));
        assert_eq!(listing.next_head(4108), None);
    }

    #[test]
    fn test_functions() {
        let listing = Listing::from_json(SAMPLE).unwrap();
        assert_eq!(listing.function_name(4104).as_deref(), Some("reset"));
        assert_eq!(listing.function_name(4112), None);
        assert_eq!(listing.function_start("reset"), Some(4096));
        assert_eq!(listing.function_start("main"), None);
    }

    #[test]
    fn test_big_endian_bytes() {
        let json = r#"{
            "processor": "ARMB", "pointer_width": 32, "big_endian": true,
            "instructions": [
                { "address": 0, "mnemonic": "MCR", "bytes": "ee010f10" },
                { "address": 4, "size": 2, "mnemonic": "NOP", "bytes": "bf00" }
            ]
        }"#;
        let listing = Listing::from_json(json).unwrap();
        assert_eq!(listing.read_word(0).unwrap(), 0xEE01_0F10);
        assert_eq!(listing.read_word(4).unwrap(), 0xBF00);
        assert_eq!(listing.next_head(4), None);
    }

    #[test]
    fn test_invalid_listings() {
        let duplicate = r#"{ "processor": "ARM", "pointer_width": 32, "instructions": [
            { "address": 0, "mnemonic": "NOP" }, { "address": 0, "mnemonic": "NOP" } ] }"#;
        assert!(matches!(
            Listing::from_json(duplicate),
            Err(AnnotatorError::InvalidListing { .. })
        ));

        let bad_hex = r#"{ "processor": "ARM", "pointer_width": 32, "instructions": [
            { "address": 0, "mnemonic": "NOP", "bytes": "zz" } ] }"#;
        assert!(matches!(
            Listing::from_json(bad_hex),
            Err(AnnotatorError::InvalidListing { .. })
        ));

        assert!(matches!(
            Listing::from_json("{"),
            Err(AnnotatorError::Json(_))
        ));
    }

    #[test]
    fn test_comments_survive_save() {
        let mut listing = Listing::from_json(SAMPLE).unwrap();
        listing.set_comment(4100, 0, "[>] SCTLR").unwrap();
        listing.set_comment(4100, 0, "[>] SCTLR (System Control Register)").unwrap();
        listing.set_color(4100, 0).unwrap();
        assert!(listing.set_comment(4098, 0, "x").is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotated.json");
        listing.save(&path).unwrap();

        let reloaded = Listing::load(&path).unwrap();
        assert_eq!(
            reloaded.comment(4100, 0),
            Some("[>] SCTLR (System Control Register)")
        );
        assert_eq!(reloaded.color(4100), Some(0));
        assert_eq!(reloaded.color(4096), None);
        assert_eq!(reloaded.annotations().count(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let listing = Listing::load(file.path()).unwrap();
        assert_eq!(listing.processor_name(), "ARM");
        assert_eq!(listing.pointer_width(), 32);
    }

    #[test]
    fn test_builder() {
        let listing = Listing::builder(ArchMode::Aarch64)
            .function("el1_entry", 0x2000, 0x2008)
            .insn(0x2004, "ERET", &[])
            .insn_word(0x2000, "MRS", &["X0", "#0", "c1", "c0", "#0"], 0xD538_1000)
            .build();
        assert_eq!(listing.pointer_width(), 64);
        assert_eq!(listing.heads(), vec![0x2000, 0x2004]);
        assert_eq!(listing.read_word(0x2000).unwrap(), 0xD538_1000);
        assert_eq!(listing.function_name(0x2004).as_deref(), Some("el1_entry"));
    }

    #[test]
    fn test_read_only_views() {
        let listing = Listing::from_json(SAMPLE).unwrap();
        let addresses: Vec<_> = listing.instructions().iter().map(|insn| insn.address).collect();
        assert_eq!(addresses, listing.heads());
        assert_eq!(listing.functions()[0].name, "reset");
        assert_eq!(listing.data_words(), &[DataWord { address: 4112, value: 32768 }]);

        let mut copy = listing.clone();
        copy.set_comment(4108, 0, "return").unwrap();
        assert_eq!(copy.annotations().count(), 1);
        assert_eq!(listing.annotations().count(), 0);
    }
}
