//! The 64KB address space as seen by the debugger

/// Number of addressable bytes
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Bytes shown on one line of the memory view
pub const BYTES_PER_LINE: usize = 8;

/// Lines needed to show the whole address space
pub const MEMORY_LINES: usize = MEMORY_SIZE / BYTES_PER_LINE;

/// 64KB of memory where every cell is either a byte or uninitialized.
///
/// Uninitialized cells are distinct from zero: the memory view leaves them
/// blank and a simulator may refuse to execute them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[Option<u8>]>,
}

impl Memory {
    /// Create a memory image with every cell uninitialized
    pub fn new() -> Self {
        Memory {
            cells: vec![None; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    pub fn get(&self, addr: u16) -> Option<u8> {
        self.cells[addr as usize]
    }

    pub fn set(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = Some(value);
    }

    /// Return a cell to the uninitialized state
    pub fn clear(&mut self, addr: u16) {
        self.cells[addr as usize] = None;
    }

    /// Write consecutive bytes starting at `addr`, wrapping at the top of memory
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut a = addr;
        for &b in bytes {
            self.set(a, b);
            a = a.wrapping_add(1);
        }
    }

    /// Little-endian word, or `None` if either byte is uninitialized
    pub fn word(&self, addr: u16) -> Option<u16> {
        let lo = self.get(addr)?;
        let hi = self.get(addr.wrapping_add(1))?;
        Some(u16::from_le_bytes([lo, hi]))
    }

    /// The cells shown on one memory-view line
    pub fn line(&self, line: usize) -> &[Option<u8>] {
        let start = line * BYTES_PER_LINE;
        &self.cells[start..start + BYTES_PER_LINE]
    }

    /// Number of initialized cells
    pub fn defined_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
