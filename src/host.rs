//! Interface to the disassembly backend.
//!
//! The annotator never decodes instructions on its own. It asks the host
//! for the mnemonic and printed operands of each instruction head, reads raw
//! encoding words only for the few sub-fields the printed form hides, and
//! writes comments and highlight colors back.

use crate::error::Result;

/// Linear address in the host database.
pub type Address = u64;

/// Minimal surface of a disassembly database.
///
/// Operand indices follow the host's own operand model. For coprocessor
/// moves the general-purpose register, CRn and CRm share one operand printed
/// as `R0,c1,c0`; AArch64 system register moves expose op1, CRn, CRm and op2
/// as four separate operands next to the general-purpose register.
pub trait Database {
    /// Processor module name (`ARM` or `ARMB` for both ARM flavours).
    fn processor_name(&self) -> String;

    /// Pointer width of the target in bits.
    fn pointer_width(&self) -> u32;

    /// Every instruction head, in ascending address order.
    fn heads(&self) -> Vec<Address>;

    /// Mnemonic at `address`, including any `S` or addressing-mode suffix.
    fn mnemonic(&self, address: Address) -> Result<String>;

    /// Printed text of an operand, or an empty string when it does not exist.
    fn operand_text(&self, address: Address, index: usize) -> Result<String>;

    /// Numeric value of an operand: the immediate, or the referenced address
    /// (for `LDR Rd, =const` that is the literal pool slot, not the constant).
    fn operand_value(&self, address: Address, index: usize) -> Result<u64>;

    /// 32-bit word stored at `address`, either code or data.
    fn read_word(&self, address: Address) -> Result<u32>;

    /// Previous instruction head, or `None` at the start of the listing.
    fn prev_head(&self, address: Address) -> Option<Address>;

    /// Size in bytes of the item at `address`.
    fn instruction_size(&self, address: Address) -> Result<u64>;

    /// Next instruction head, or `None` past the end of the listing.
    fn next_head(&self, address: Address) -> Option<Address> {
        let size = self.instruction_size(address).ok()?;
        let next = address.checked_add(size)?;
        self.mnemonic(next).ok().map(|_| next)
    }

    /// Attach a comment to an operand. A second call replaces the first.
    fn set_comment(&mut self, address: Address, operand: usize, text: &str) -> Result<()>;

    /// Set the background highlight color of an item.
    fn set_color(&mut self, address: Address, color: u32) -> Result<()>;

    /// Name of the function enclosing `address`, if any.
    fn function_name(&self, address: Address) -> Option<String>;

    /// Start address of the named function.
    fn function_start(&self, name: &str) -> Option<Address>;
}

/// Parse the numeric value of an immediate or literal operand.
///
/// Accepts `#16`, `#0x10`, `#-4`, `=0x8000` and bare numbers; anything after
/// a `,` (a shift such as `LSL#16`) is ignored.
pub fn parse_operand_value(text: &str) -> Option<u64> {
    let text = text.split(',').next().unwrap_or_default().trim();
    let text = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix('='))
        .unwrap_or(text)
        .trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u64>().ok()?,
    };
    Some(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand_value() {
        assert_eq!(parse_operand_value("#16"), Some(16));
        assert_eq!(parse_operand_value("#0x10"), Some(0x10));
        assert_eq!(parse_operand_value("=0x8000"), Some(0x8000));
        assert_eq!(parse_operand_value("#0x1234,LSL#16"), Some(0x1234));
        assert_eq!(parse_operand_value("#-1"), Some(u64::MAX));
        assert_eq!(parse_operand_value("0"), Some(0));
        assert_eq!(parse_operand_value("R0"), None);
        assert_eq!(parse_operand_value(""), None);
    }
}
