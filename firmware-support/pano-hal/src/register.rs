// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Memory-mapped register access.

Every access in this module is a single volatile load or store, so the
compiler can neither elide nor reorder it relative to other volatile
accesses. Peripherals on the Pano SoC are all 32 bits wide.
*/

/// Read the 32-bit register at `addr`.
///
/// # Safety
///
/// `addr` MUST BE a valid, aligned pointer to a memory mapped register.
#[inline(always)]
pub unsafe fn read_register(addr: *const u32) -> u32 {
    addr.read_volatile()
}

/// Write `value` to the 32-bit register at `addr`.
///
/// # Safety
///
/// `addr` MUST BE a valid, aligned pointer to a memory mapped register.
#[inline(always)]
pub unsafe fn write_register(addr: *mut u32, value: u32) {
    addr.write_volatile(value)
}

/// A single 32-bit memory mapped register.
#[derive(Clone, Copy)]
pub struct Register {
    addr: *mut u32,
}

impl Register {
    /// Create a new [`Register`] for the given address.
    ///
    /// # Safety
    ///
    /// The `addr` pointer MUST BE a valid, aligned pointer that is backed
    /// by a memory mapped register for as long as the returned value is used.
    pub const unsafe fn new(addr: *mut u32) -> Register {
        Register { addr }
    }

    pub fn read(&self) -> u32 {
        unsafe { read_register(self.addr) }
    }

    pub fn write(&self, value: u32) {
        unsafe { write_register(self.addr, value) }
    }

    /// Read the register, apply `f` and write the result back. The written
    /// value is always derived from the read done by this call.
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read();
        self.write(f(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn free_functions_hit_memory() {
        let mut word: u32 = 0;
        let ptr = &mut word as *mut u32;
        unsafe {
            write_register(ptr, 0xdead_beef);
            assert_eq!(read_register(ptr), 0xdead_beef);
        }
        assert_eq!(word, 0xdead_beef);
    }

    #[test]
    fn register_reads_back_writes() {
        let mut word: u32 = 0x1234;
        let reg = unsafe { Register::new(&mut word) };
        assert_eq!(reg.read(), 0x1234);
        reg.write(0x5678);
        assert_eq!(reg.read(), 0x5678);
    }

    #[proptest]
    fn modify_sees_current_value(initial: u32, mask: u32) {
        let mut word = initial;
        let reg = unsafe { Register::new(&mut word) };
        reg.modify(|v| v ^ mask);
        assert_eq!(reg.read(), initial ^ mask);
    }
}
