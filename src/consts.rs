// Copyright (c) 2025 Syswonder
// stx7100 is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//     http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR
// FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
//
// Syswonder Website:
//      https://www.syswonder.org
//
// Authors:
//
//! Fixed numbers of the STx7100/STx7109 address map.

/// Number of External Memory Interface banks.
pub const EMI_BANKS: usize = 5;

/// Window covering every on-chip peripheral; mapped once in the early phase.
pub const PERIPH_MAP_BASE: u64 = 0x1800_0000;
pub const PERIPH_MAP_SIZE: u64 = 0x0400_0000;

/// Logical number of the first PIO pin.
pub const PIO_FIRST_PIN: u32 = 176;
pub const PIO_PORTS: usize = 6;

/// Instance id of a device that exists exactly once.
pub const DEVID_NONE: i32 = -1;

/// Start/end of a resource that has not been assigned, e.g. an IRQ the
/// board has not wired yet.
pub const RESOURCE_UNSET: u64 = u64::MAX;

/// FDMA channels handed to the DMA core.
pub const FDMA_MIN_CHANNEL: u32 = 0;
pub const FDMA_MAX_CHANNEL: u32 = 15;
