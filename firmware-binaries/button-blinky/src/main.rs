// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
#![no_std]
#![cfg_attr(not(test), no_main)]

use log::LevelFilter;
use pano_hal::delay::SpinDelay;
use pano_hal::gpio::Gpio;
use pano_hal::uart::Uart;
use pano_sys::blinky::Blinky;

#[cfg(not(test))]
use riscv_rt::entry;

pano_sys::pano_panic! {
    unsafe { Uart::board() }
}

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    let gpio = unsafe { Gpio::board() };
    let uart = unsafe { Uart::board() };

    // The logger only writes once the state machine has initialised the UART.
    unsafe { pano_sys::uart::log::init(uart.clone(), LevelFilter::Info) };

    Blinky::new(gpio, uart, SpinDelay).run()
}
