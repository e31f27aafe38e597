//! Flat-binary program loader: drops a raw byte image directly into bus
//! memory, bypassing the device registry (matches `Bus::load_raw`).

use crate::bus::SharedBus;
use crate::error::CoreError;

/// Conventional load address for a freestanding flat binary with no
/// header of its own.
pub const DEFAULT_LOAD_BASE: u16 = 0x8000;

/// Writes `bytes` starting at `base`. Fails rather than wrapping if the
/// image would run past the top of the 64KiB address space.
pub fn load_flat(bus: &SharedBus, bytes: &[u8], base: u16) -> Result<(), CoreError> {
    let end = base as usize + bytes.len();
    if end > 0x1_0000 {
        return Err(CoreError::LoadOverflow { base, size: bytes.len() });
    }
    let mut mem = bus.borrow_mut();
    for (offset, &byte) in bytes.iter().enumerate() {
        mem.load_raw(base.wrapping_add(offset as u16), byte);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;

    #[test]
    fn loads_bytes_at_the_given_base() {
        let bus = Bus::new_shared();
        load_flat(&bus, &[0xA9, 0x42, 0x00], 0x8000).unwrap();
        let mut mem = bus.borrow_mut();
        assert_eq!(mem.read(0x8000), 0xA9);
        assert_eq!(mem.read(0x8001), 0x42);
        assert_eq!(mem.read(0x8002), 0x00);
    }

    #[test]
    fn rejects_an_image_that_would_overflow_the_address_space() {
        let bus = Bus::new_shared();
        let bytes = vec![0u8; 0x100];
        let result = load_flat(&bus, &bytes, 0xFF80);
        assert_eq!(
            result,
            Err(CoreError::LoadOverflow { base: 0xFF80, size: 0x100 })
        );
    }

    #[test]
    fn default_load_base_matches_documented_convention() {
        assert_eq!(DEFAULT_LOAD_BASE, 0x8000);
    }
}
