// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::board::{UART_DATA_ADDR, UART_STATUS_ADDR};
use crate::register::Register;

#[derive(Debug)]
pub struct UartStatus {
    pub receive_buffer_empty: bool,
    pub transmit_buffer_full: bool,
}

#[derive(Debug)]
pub struct TransmitBufferFull;
#[derive(Debug)]
pub struct ReceiveBufferEmpty;

#[derive(Clone)]
/// `Uart` is the byte oriented serial port of the SoC. Framing and baud rate
/// are fixed in hardware.
pub struct Uart {
    /// Writing transmits the low byte, reading pops a received byte.
    data: Register,
    /// Bit 0: transmit buffer full, bit 1: receive buffer empty.
    status: Register,
}

impl Uart {
    /// Create a new [`Uart`] instance given the addresses of its registers.
    ///
    /// # Safety
    ///
    /// Both pointers MUST BE valid, aligned pointers backed by the data and
    /// status registers of a memory mapped UART instance.
    pub const unsafe fn new(data: *mut u32, status: *mut u32) -> Uart {
        Uart {
            data: Register::new(data),
            status: Register::new(status),
        }
    }

    /// The UART at its location in the board memory map.
    ///
    /// # Safety
    ///
    /// Only sound when running on the Pano SoC.
    pub const unsafe fn board() -> Uart {
        Uart::new(UART_DATA_ADDR, UART_STATUS_ADDR)
    }

    /// Bring the UART into a known state by discarding anything that is still
    /// sitting in the receive buffer.
    pub fn init(&self) {
        while self.try_receive().is_ok() {
            continue;
        }
    }

    /// UART status register output
    pub fn read_status(&self) -> UartStatus {
        let flags = self.status.read();

        let rx_mask = 0b10;
        let rx_empty = flags & rx_mask;

        let tx_mask = 0b01;
        let tx_full = flags & tx_mask;

        UartStatus {
            receive_buffer_empty: rx_empty != 0,
            transmit_buffer_full: tx_full != 0,
        }
    }

    /// The `receive` function attempts to receive data from the UART. If no
    /// data is available, it keeps looping until data is available.
    pub fn receive(&self) -> u8 {
        loop {
            if let Ok(val) = self.try_receive() {
                return val;
            }
        }
    }

    /// The `try_receive` function attempts to receive data from the UART. If no
    /// data is available, it returns an error.
    pub fn try_receive(&self) -> Result<u8, ReceiveBufferEmpty> {
        if self.read_status().receive_buffer_empty {
            Err(ReceiveBufferEmpty)
        } else {
            Ok(self.data.read() as u8)
        }
    }

    /// The `send` function sends the given data to the UART. If the UART is
    /// unable to accept the data, it keeps looping until it can send the data.
    pub fn send(&self, data: u8) {
        loop {
            if let Ok(()) = self.try_send(data) {
                return;
            }
        }
    }

    /// The `try_send` function attempts to send the given data to the UART. If
    /// the UART is unable to accept the data, it returns an error.
    pub fn try_send(&self, data: u8) -> Result<(), TransmitBufferFull> {
        if self.read_status().transmit_buffer_full {
            Err(TransmitBufferFull)
        } else {
            self.data.write(data as u32);
            Ok(())
        }
    }
}

impl ufmt::uWrite for Uart {
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }

    type Error = ();
}

impl core::fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}
