//! Pre-assembled hex listings
//!
//! The debugger does not parse assembly. [`ListingAssembler`] loads the
//! object listing an external assembler emits instead:
//!
//! ```text
//! ; comments run to end of line
//! start = $0200
//! 0200: a9 01 8d 00 02
//! fffc: 00 02
//! ```
//!
//! Addresses and bytes are hex, with an optional `$` or `0x` prefix.
//! Bytes on a data line are stored consecutively from the line's address.

use super::{Assembler, Disassembler, Memory, Program};
use crate::errors::DebuggerError;
use rustc_hash::FxHashMap;

/// Loads `ADDR: bytes` data lines and `NAME = ADDR` symbol lines
#[derive(Debug, Default)]
pub struct ListingAssembler;

impl ListingAssembler {
    pub fn new() -> Self {
        ListingAssembler
    }
}

fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix('$')
        .or_else(|| token.strip_prefix("0x"))
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn parse_address(token: &str, line: usize) -> Result<u16, DebuggerError> {
    parse_hex(token)
        .and_then(|v| u16::try_from(v).ok())
        .ok_or_else(|| DebuggerError::Assemble {
            line,
            message: format!("bad address '{}'", token),
        })
}

impl Assembler for ListingAssembler {
    fn assemble(&self, source: &str) -> Result<Program, DebuggerError> {
        let mut memory = Memory::new();
        let mut symbols = FxHashMap::default();

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let text = raw.split(';').next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }

            if let Some((name, value)) = text.split_once('=') {
                let name = name.trim();
                if name.is_empty() || name.contains(char::is_whitespace) {
                    return Err(DebuggerError::Assemble {
                        line,
                        message: format!("bad symbol name '{}'", name),
                    });
                }
                let addr = parse_address(value.trim(), line)?;
                symbols.insert(name.to_string(), addr);
                continue;
            }

            let Some((addr, data)) = text.split_once(':') else {
                return Err(DebuggerError::Assemble {
                    line,
                    message: "expected 'ADDR: bytes' or 'NAME = ADDR'".to_string(),
                });
            };
            let addr = parse_address(addr.trim(), line)?;

            let mut bytes = Vec::new();
            for token in data.split_whitespace() {
                let byte = parse_hex(token)
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| DebuggerError::Assemble {
                        line,
                        message: format!("bad byte '{}'", token),
                    })?;
                bytes.push(byte);
            }
            memory.load(addr, &bytes);
        }

        Ok(Program { memory, symbols })
    }
}

/// Shows each address as a raw data byte, labelled from the symbol table
#[derive(Debug, Default)]
pub struct ListingDisassembler {
    labels: FxHashMap<u16, String>,
}

impl ListingDisassembler {
    pub fn new(symbols: &FxHashMap<String, u16>) -> Self {
        let mut labels = FxHashMap::default();
        for (name, &addr) in symbols {
            // keep the alphabetically first name when several share an address
            labels
                .entry(addr)
                .and_modify(|existing: &mut String| {
                    if name.as_str() < existing.as_str() {
                        *existing = name.clone();
                    }
                })
                .or_insert_with(|| name.clone());
        }
        ListingDisassembler { labels }
    }
}

impl Disassembler for ListingDisassembler {
    fn disassemble_line(&self, memory: &Memory, address: u16) -> String {
        let label = self
            .labels
            .get(&address)
            .map(|l| format!("{}: ", l))
            .unwrap_or_default();
        match memory.get(address) {
            Some(byte) => format!("{:04x}  {}.byte ${:02x}", address, label, byte),
            None => format!("{:04x}  {}???", address, label),
        }
    }
}
