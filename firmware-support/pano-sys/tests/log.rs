// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use log::{Level, LevelFilter, Log};

use pano_sys::uart::log::{init, UartLogger, LOGGER};
use pano_sys::uart::Uart;

// The `log` backend is process global, so everything runs in one test.
#[test]
fn uart_logger_end_to_end() {
    // Before a UART is attached records are dropped.
    log::set_max_level(LevelFilter::Trace);
    let logger: &UartLogger = unsafe { &*core::ptr::addr_of!(LOGGER) };
    logger.log(
        &log::Record::builder()
            .args(format_args!("nobody listens"))
            .level(Level::Error)
            .build(),
    );

    // data, status: nothing received, transmitter has room.
    let regs: &'static mut [u32; 2] = Box::leak(Box::new([0, 0b10]));
    let data = regs.as_mut_ptr();
    unsafe { init(Uart::new(data, data.add(1)), LevelFilter::Info) };

    assert_eq!(log::max_level(), LevelFilter::Info);
    assert!(log::log_enabled!(Level::Info));
    assert!(!log::log_enabled!(Level::Debug));

    log::info!("hi");
    assert_eq!(unsafe { data.read_volatile() }, b'\n' as u32);

    unsafe { data.write_volatile(0) };
    log::debug!("filtered");
    assert_eq!(unsafe { data.read_volatile() }, 0);
}
