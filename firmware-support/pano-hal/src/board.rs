// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Memory map and fixed configuration of the Pano Logic G1 soft-core SoC.

All peripherals live in a single window starting at [`PERIPHERAL_BASE`].
There is no runtime configuration: everything here is fixed when the
bitstream is generated.
*/

pub const PERIPHERAL_BASE: usize = 0x0008_0000;

pub const GPIO_DIR_ADDR: *mut u32 = PERIPHERAL_BASE as *mut u32;
pub const GPIO_WRITE_ADDR: *mut u32 = (PERIPHERAL_BASE + 0x04) as *mut u32;
pub const GPIO_READ_ADDR: *mut u32 = (PERIPHERAL_BASE + 0x08) as *mut u32;

pub const UART_DATA_ADDR: *mut u32 = (PERIPHERAL_BASE + 0x100) as *mut u32;
pub const UART_STATUS_ADDR: *mut u32 = (PERIPHERAL_BASE + 0x104) as *mut u32;

// GPIO bit layout. LEDs are active-low.
pub const GPIO_BIT_LED_RED: u32 = 1 << 0;
pub const GPIO_BIT_LED_GREEN: u32 = 1 << 1;
pub const GPIO_BIT_LED_BLUE: u32 = 1 << 2;
pub const GPIO_BIT_SWITCH: u32 = 1 << 3;

/// Direction word that turns every implemented pin into an output.
pub const GPIO_DIR_ALL_OUTPUTS: u32 = 0xff;

/// Busy-wait length of each half of a green LED flash.
pub const FLASH_WAIT_ITERATIONS: u32 = 500_000;

pub const BANNER: [&str; 5] = [
    "Pano Logic G1 Reverse Engineering\n",
    "---------------------------------\n",
    "\n",
    "\n",
    "Code at github.com/tomverbeure/panologic-g2\n",
];

/// Line sent over the UART after every flash.
pub const STATUS_LINE: &str = "This is a test and only a test\n";
