// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use pano_hal::uart::Uart;
use ufmt::uWrite;

/// ANSI "erase display" followed by "cursor home".
pub const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// A text output the firmware can print to.
///
/// Printing is assumed to always succeed; implementations drop write errors.
pub trait Console {
    /// Bring the output hardware up. Called once, before anything is printed.
    fn init(&mut self) {}
    fn clear(&mut self);
    fn print(&mut self, text: &str);
}

/// A [`Console`] on top of any `ufmt` sink that understands ANSI escapes.
pub struct Terminal<W>(pub W);

impl<W: uWrite> Console for Terminal<W> {
    fn clear(&mut self) {
        let _ = self.0.write_str(CLEAR_SEQUENCE);
    }

    fn print(&mut self, text: &str) {
        let _ = self.0.write_str(text);
    }
}

impl Console for Uart {
    fn init(&mut self) {
        Uart::init(self);
    }

    fn clear(&mut self) {
        let _ = uWrite::write_str(self, CLEAR_SEQUENCE);
    }

    fn print(&mut self, text: &str) {
        let _ = uWrite::write_str(self, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    struct Capture(String);

    impl uWrite for Capture {
        type Error = ();

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    struct Broken;

    impl uWrite for Broken {
        type Error = ();

        fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
            Err(())
        }
    }

    #[test]
    fn clear_then_print() {
        let mut out = Terminal(Capture(String::new()));
        out.init();
        out.clear();
        out.print("hello\n");
        assert_eq!(out.0 .0, "\x1b[2J\x1b[Hhello\n");
    }

    #[test]
    fn write_errors_are_ignored() {
        let mut out = Terminal(Broken);
        out.clear();
        out.print("dropped");
    }

    #[test]
    fn uart_console_writes_to_data_register() {
        // data, status: nothing received, transmitter has room.
        let mut regs = [0, 0b10];
        let base = regs.as_mut_ptr();
        let mut uart = unsafe { Uart::new(base, base.add(1)) };

        Console::init(&mut uart);
        Console::clear(&mut uart);
        assert_eq!(regs[0], b'H' as u32);
        Console::print(&mut uart, "ok");
        assert_eq!(regs[0], b'k' as u32);
    }
}
