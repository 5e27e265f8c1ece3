// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Button polling loop.

After a one-time initialisation the loop spins on the push button. Every
time the button reads as pressed the green LED is flashed once and a status
line is printed. The button is level-triggered: holding it down keeps
flashing.

```text
 Init ──► Idle ◄──┐
           │      │ (flash done)
 (pressed) ▼      │
         Flashing ┘
```
*/

use log::{debug, trace};
use pano_hal::board::{BANNER, FLASH_WAIT_ITERATIONS, GPIO_DIR_ALL_OUTPUTS, STATUS_LINE};
use pano_hal::delay::Delay;
use pano_hal::gpio::{self, GpioPort, Led};

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Hardware not set up yet.
    Init,
    /// Waiting for the button.
    Idle,
    /// Flashing the LED and printing the status line.
    Flashing,
}

pub struct Blinky<G, C, D> {
    gpio: G,
    console: C,
    delay: D,
    state: State,
    presses: u32,
}

impl<G: GpioPort, C: Console, D: Delay> Blinky<G, C, D> {
    pub fn new(gpio: G, console: C, delay: D) -> Self {
        Blinky {
            gpio,
            console,
            delay,
            state: State::Init,
            presses: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of completed flash cycles. Wraps.
    pub fn presses(&self) -> u32 {
        self.presses
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Make every pin an output, bring up the console, print the banner and
    /// switch all LEDs off.
    pub fn init(&mut self) {
        self.gpio.set_direction(GPIO_DIR_ALL_OUTPUTS);
        self.console.init();
        self.console.clear();
        for line in BANNER {
            self.console.print(line);
        }
        gpio::all_leds_off(&mut self.gpio);

        self.state = State::Idle;
        debug!("gpio configured, polling button");
    }

    /// Run one iteration of the polling loop and return the state it was
    /// in: [`State::Flashing`] if a flash cycle ran, [`State::Idle`] if the
    /// button was not pressed. Initialises first if that hasn't happened.
    pub fn poll(&mut self) -> State {
        if self.state == State::Init {
            self.init();
        }

        if !gpio::button_pressed(&self.gpio) {
            return State::Idle;
        }

        self.state = State::Flashing;
        self.flash(Led::Green);
        self.console.print(STATUS_LINE);
        self.presses = self.presses.wrapping_add(1);
        trace!("flash cycle {} done", self.presses);

        self.state = State::Idle;
        State::Flashing
    }

    /// Initialise, then poll forever.
    pub fn run(mut self) -> ! {
        self.init();
        loop {
            self.poll();
        }
    }

    fn flash(&mut self, led: Led) {
        gpio::led_on(&mut self.gpio, led);
        self.delay.wait(FLASH_WAIT_ITERATIONS);
        gpio::led_off(&mut self.gpio, led);
        self.delay.wait(FLASH_WAIT_ITERATIONS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use pano_hal::board::{GPIO_BIT_LED_GREEN, GPIO_BIT_SWITCH};
    use std::string::String;

    #[derive(Default)]
    struct Port {
        direction: u32,
        output: u32,
        input: u32,
    }

    impl GpioPort for Port {
        fn set_direction(&mut self, direction: u32) {
            self.direction = direction;
        }

        fn output(&self) -> u32 {
            self.output
        }

        fn set_output(&mut self, value: u32) {
            self.output = value;
        }

        fn input(&self) -> u32 {
            self.input
        }
    }

    struct NoDelay;

    impl Delay for NoDelay {
        fn wait(&mut self, _iterations: u32) {}
    }

    struct Text(String);

    impl ufmt::uWrite for Text {
        type Error = ();

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn starts_in_init() {
        let blinky = Blinky::new(Port::default(), Terminal(Text(String::new())), NoDelay);
        assert_eq!(blinky.state(), State::Init);
        assert_eq!(blinky.presses(), 0);
    }

    #[test]
    fn poll_initialises_first() {
        let mut blinky = Blinky::new(Port::default(), Terminal(Text(String::new())), NoDelay);
        assert_eq!(blinky.poll(), State::Idle);
        assert_eq!(blinky.state(), State::Idle);
        assert_eq!(blinky.gpio().direction, GPIO_DIR_ALL_OUTPUTS);
        assert!(blinky.console().0 .0.contains(BANNER[0]));
    }

    #[test]
    fn held_button_keeps_flashing() {
        let port = Port {
            input: GPIO_BIT_SWITCH,
            ..Port::default()
        };
        let mut blinky = Blinky::new(port, Terminal(Text(String::new())), NoDelay);
        blinky.init();
        for _ in 0..3 {
            assert_eq!(blinky.poll(), State::Flashing);
        }
        assert_eq!(blinky.presses(), 3);
        assert_eq!(blinky.state(), State::Idle);
        assert_eq!(blinky.gpio().output & GPIO_BIT_LED_GREEN, GPIO_BIT_LED_GREEN);
        assert_eq!(blinky.console().0 .0.matches(STATUS_LINE).count(), 3);
    }
}
