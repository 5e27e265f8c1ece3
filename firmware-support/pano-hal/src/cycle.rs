// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

/// Current value of the hart's free running cycle counter.
///
/// Reads the `cycle` CSR (`rdcycle`). Only the low 32 bits are returned, so
/// the value wraps every 2^32 cycles. Software never resets it.
#[inline(always)]
pub fn read_cycle_count() -> u32 {
    riscv::register::cycle::read() as u32
}

/// Source of a monotonically increasing, wrapping 32-bit cycle count.
pub trait CycleCounter {
    fn cycles(&self) -> u32;
}

/// The `cycle` CSR of the hart we're running on.
#[derive(Clone, Copy, Default)]
pub struct HartCycles;

impl CycleCounter for HartCycles {
    fn cycles(&self) -> u32 {
        read_cycle_count()
    }
}
