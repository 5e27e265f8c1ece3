// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use core::{fmt::Write, panic::PanicInfo};

/// Write the panic info to `writer` and spin forever. There is nothing to
/// return to and no way to recover, so the firmware parks here where a
/// debugger can find it.
pub fn panic_internal<W: Write>(writer: &mut W, info: &PanicInfo) -> ! {
    let _ = writeln!(writer, "{info}");
    loop {
        continue;
    }
}

/// Define the `#[panic_handler]` of a firmware binary. `$writer` is
/// evaluated inside the handler and must produce a `core::fmt::Write`.
#[macro_export]
macro_rules! pano_panic {
    ($writer:expr) => {
        #[panic_handler]
        fn pano_panic(info: &::core::panic::PanicInfo) -> ! {
            let mut writer = $writer;
            $crate::panic::panic_internal(&mut writer, info);
        }
    };
}
