// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

pub mod log;

pub use pano_hal::uart::Uart;
