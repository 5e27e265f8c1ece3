// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
use crate::uart;

// The logger utilizes core::fmt to format the log messages because ufmt formatting is not
// compatible with (dependencies of) the log crate.
use core::fmt::Write;
use log::LevelFilter;

/// A global logger instance to be used with the `log` crate.
///
/// Use `set_logger` to set the `Uart` instance to be used for logging.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `UartLogger` is `Send` and `Sync`, The underlying `Uart` is not `Send` or `Sync`.
pub static mut LOGGER: UartLogger = UartLogger::new();

/// Wrapper for `Uart` to be used as a logger with the `log` crate.
/// Instead of making a new logger, use the `set_logger` method of the `LOGGER` instance.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
pub struct UartLogger {
    uart: Option<uart::Uart>,
    /// Records at or above this level get a `LEVEL | ` prefix.
    pub display_level: LevelFilter,
    /// Records at or above this level get a `file:line - ` prefix.
    pub display_source: LevelFilter,
}

impl UartLogger {
    /// A logger without a UART that prefixes every record with its level and
    /// never with its source location.
    pub const fn new() -> UartLogger {
        UartLogger {
            uart: None,
            display_level: LevelFilter::Trace,
            display_source: LevelFilter::Off,
        }
    }

    /// Format `record` the way it appears on the UART.
    pub fn write_record<W: Write>(&self, w: &mut W, record: &log::Record) -> core::fmt::Result {
        if record.level() <= self.display_level {
            write!(w, "{} | ", record.level())?;
        }
        if record.level() <= self.display_source {
            write!(
                w,
                "{}:{} - ",
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0)
            )?;
        }
        writeln!(w, "{}", record.args())
    }

    /// Set the logger to use the given UART.
    /// # Safety
    /// Using this function and logger is only safe if there is only one thread of execution.
    /// This function is used to assign the `Uart` instance to a global (`static mut`), but `Uart` is not `Send` or `Sync`.
    pub unsafe fn set_logger(&mut self, uart: uart::Uart) {
        self.uart = Some(uart);
    }
}

/// Install [`LOGGER`] as the `log` backend, writing to `uart`.
///
/// # Safety
/// Only sound with a single thread of execution, see [`UartLogger`].
#[allow(static_mut_refs)]
pub unsafe fn init(uart: uart::Uart, max_level: LevelFilter) {
    LOGGER.set_logger(uart);
    if log::set_logger_racy(&LOGGER).is_ok() {
        log::set_max_level_racy(max_level);
    }
}

impl Default for UartLogger {
    fn default() -> Self {
        UartLogger::new()
    }
}

impl log::Log for UartLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    #[allow(static_mut_refs)]
    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Records logged before a UART is attached are dropped.
        let Some(l) = (unsafe { &mut LOGGER.uart }) else {
            return;
        };
        let _ = self.write_record(l, record);
    }

    fn flush(&self) {}
}

unsafe impl core::marker::Send for UartLogger {}
unsafe impl core::marker::Sync for UartLogger {}
