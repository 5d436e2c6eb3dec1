//! Memory bus interface.

/// Byte-granular memory bus with little-endian composite accessors.
///
/// The core performs every memory access through this trait and never
/// distinguishes implementations. [`Memory`](crate::Memory) is the default
/// RAM+ROM implementation; a host that wants memory to live outside the core
/// implements the trait itself and may override any composite accessor (for
/// example to service a whole qword from one device access). The provided
/// composite methods are strict little-endian byte sequences: an N-byte
/// access performs N sequential byte accesses at ascending addresses, so an
/// implementation's per-byte address decode (masking, banking) applies to
/// every byte of a composite access.
pub trait Bus {
    /// Read a byte from the given address.
    fn read_byte(&mut self, address: u64) -> u8;

    /// Write a byte to the given address.
    fn write_byte(&mut self, address: u64, value: u8);

    /// Read a little-endian word.
    fn read_word(&mut self, address: u64) -> u16 {
        let low = self.read_byte(address);
        let high = self.read_byte(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Read a little-endian dword.
    fn read_dword(&mut self, address: u64) -> u32 {
        let mut bytes = [0; 4];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.read_byte(address.wrapping_add(i as u64));
        }
        u32::from_le_bytes(bytes)
    }

    /// Read a little-endian qword.
    fn read_qword(&mut self, address: u64) -> u64 {
        let mut bytes = [0; 8];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.read_byte(address.wrapping_add(i as u64));
        }
        u64::from_le_bytes(bytes)
    }

    /// Write a little-endian word.
    fn write_word(&mut self, address: u64, value: u16) {
        for (i, byte) in value.to_le_bytes().iter().enumerate() {
            self.write_byte(address.wrapping_add(i as u64), *byte);
        }
    }

    /// Write a little-endian dword.
    fn write_dword(&mut self, address: u64, value: u32) {
        for (i, byte) in value.to_le_bytes().iter().enumerate() {
            self.write_byte(address.wrapping_add(i as u64), *byte);
        }
    }

    /// Write a little-endian qword.
    fn write_qword(&mut self, address: u64, value: u64) {
        for (i, byte) in value.to_le_bytes().iter().enumerate() {
            self.write_byte(address.wrapping_add(i as u64), *byte);
        }
    }
}
