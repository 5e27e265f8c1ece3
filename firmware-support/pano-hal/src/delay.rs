// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Busy-wait delays.

Nothing here is an exact time delay. [`SpinDelay`] counts loop iterations,
so its duration depends on the core clock and on the code the compiler
emits for the loop. [`CycleDelay`] counts core clock cycles instead and is
only as precise as the counter it reads.

Neither delay can be cancelled: once entered, a wait always runs to
completion.
*/

use crate::cycle::CycleCounter;
use core::hint::black_box;

/// A way to block the only thread of execution for a while.
pub trait Delay {
    fn wait(&mut self, iterations: u32);
}

/// Spin for `iterations` loop iterations and return the number of
/// increments performed.
///
/// The counter is passed through [`black_box`] on every iteration so the
/// loop can't be folded away.
#[inline(never)]
pub fn spin(iterations: u32) -> u32 {
    let mut count: u32 = 0;
    for _ in 0..iterations {
        count = black_box(count + 1);
    }
    count
}

/// Spin for approximately `iterations` abstract time units.
pub fn wait(iterations: u32) {
    spin(iterations);
}

/// Loop-counting delay. This is what the firmware uses.
#[derive(Clone, Copy, Default)]
pub struct SpinDelay;

impl Delay for SpinDelay {
    fn wait(&mut self, iterations: u32) {
        wait(iterations);
    }
}

/// Delay that waits until at least `iterations` cycles have elapsed on a
/// [`CycleCounter`]. Elapsed cycles are accumulated between reads, so the
/// 32-bit counter may wrap any number of times during a wait as long as it
/// is read at least once per 2^32 cycles.
pub struct CycleDelay<C> {
    counter: C,
}

impl<C: CycleCounter> CycleDelay<C> {
    pub fn new(counter: C) -> Self {
        CycleDelay { counter }
    }
}

impl<C: CycleCounter> Delay for CycleDelay<C> {
    fn wait(&mut self, iterations: u32) {
        let mut last = self.counter.cycles();
        let mut elapsed: u64 = 0;
        while elapsed < u64::from(iterations) {
            let now = self.counter.cycles();
            elapsed += u64::from(now.wrapping_sub(last));
            last = now;
        }
    }
}
