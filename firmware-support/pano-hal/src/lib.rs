// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod cycle;
pub mod delay;
pub mod gpio;
pub mod register;
pub mod uart;
