// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! GPIO port with the board's LEDs and push button.

The port has three 32-bit registers: direction (1 = output), write (the
driven output levels) and read (the live pin levels). The LEDs are
active-low, so clearing an LED's bit in the write register turns it on.

LED updates are read-modify-write: the word that is written back is always
derived from a read done by the same update, so bits belonging to other
pins are never disturbed.
*/

use crate::board::{
    GPIO_BIT_LED_BLUE, GPIO_BIT_LED_GREEN, GPIO_BIT_LED_RED, GPIO_BIT_SWITCH, GPIO_DIR_ADDR,
    GPIO_READ_ADDR, GPIO_WRITE_ADDR,
};
use crate::register::Register;

/// Access to the three registers of a GPIO port.
pub trait GpioPort {
    fn set_direction(&mut self, direction: u32);
    fn output(&self) -> u32;
    fn set_output(&mut self, value: u32);
    fn input(&self) -> u32;
}

/// The memory mapped GPIO port.
pub struct Gpio {
    direction: Register,
    write: Register,
    read: Register,
}

impl Gpio {
    /// Create a new [`Gpio`] from the addresses of its registers.
    ///
    /// # Safety
    ///
    /// All three pointers MUST BE valid, aligned pointers backed by the
    /// registers of a memory mapped GPIO port.
    pub const unsafe fn new(direction: *mut u32, write: *mut u32, read: *mut u32) -> Gpio {
        Gpio {
            direction: Register::new(direction),
            write: Register::new(write),
            read: Register::new(read),
        }
    }

    /// The GPIO port at its location in the board memory map.
    ///
    /// # Safety
    ///
    /// Only sound when running on the Pano SoC.
    pub const unsafe fn board() -> Gpio {
        Gpio::new(GPIO_DIR_ADDR, GPIO_WRITE_ADDR, GPIO_READ_ADDR)
    }
}

impl GpioPort for Gpio {
    fn set_direction(&mut self, direction: u32) {
        self.direction.write(direction);
    }

    fn output(&self) -> u32 {
        self.write.read()
    }

    fn set_output(&mut self, value: u32) {
        self.write.write(value);
    }

    fn input(&self) -> u32 {
        self.read.read()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Red,
    Green,
    Blue,
}

impl Led {
    pub const ALL: [Led; 3] = [Led::Green, Led::Blue, Led::Red];

    pub const fn mask(self) -> u32 {
        match self {
            Led::Red => GPIO_BIT_LED_RED,
            Led::Green => GPIO_BIT_LED_GREEN,
            Led::Blue => GPIO_BIT_LED_BLUE,
        }
    }
}

/// OR of the masks of all given LEDs.
pub fn leds_mask(leds: &[Led]) -> u32 {
    leds.iter().fold(0, |acc, led| acc | led.mask())
}

/// `word` with the LEDs in `mask` driven on (bits cleared).
pub const fn with_led_on(word: u32, mask: u32) -> u32 {
    word & !mask
}

/// `word` with the LEDs in `mask` driven off (bits set).
pub const fn with_led_off(word: u32, mask: u32) -> u32 {
    word | mask
}

/// Whether the switch bit is set in an input register value.
pub const fn is_pressed(input: u32) -> bool {
    input & GPIO_BIT_SWITCH == GPIO_BIT_SWITCH
}

/// Level of the push button right now. No debouncing, no edge detection:
/// two calls in a row can disagree if the button moved in between.
pub fn button_pressed<G: GpioPort + ?Sized>(gpio: &G) -> bool {
    is_pressed(gpio.input())
}

pub fn led_on<G: GpioPort + ?Sized>(gpio: &mut G, led: Led) {
    let value = gpio.output();
    gpio.set_output(with_led_on(value, led.mask()));
}

pub fn led_off<G: GpioPort + ?Sized>(gpio: &mut G, led: Led) {
    let value = gpio.output();
    gpio.set_output(with_led_off(value, led.mask()));
}

/// Turn every LED off with a single write. Pins other than the LEDs are
/// driven low.
pub fn all_leds_off<G: GpioPort + ?Sized>(gpio: &mut G) {
    gpio.set_output(leds_mask(&Led::ALL));
}
