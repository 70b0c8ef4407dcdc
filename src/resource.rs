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
use bitflags::bitflags;

use crate::consts::RESOURCE_UNSET;

bitflags! {
    /// Resource type bits, numerically the host kernel's `IORESOURCE_*`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ResourceFlags: u32 {
        const MEM = 0x0000_0200;
        const IRQ = 0x0000_0400;
    }
}

/// One address window or interrupt line of a platform device.
/// `end` is inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    pub start: u64,
    pub end: u64,
    pub flags: ResourceFlags,
}

impl Resource {
    /// Memory window of `size` bytes at `start`.
    pub const fn mem(start: u64, size: u64) -> Self {
        Self {
            start,
            end: start + size - 1,
            flags: ResourceFlags::MEM,
        }
    }

    /// Interrupt range `irq..=end`; a negative `end` means a single line
    /// and a negative `irq` leaves the line unset.
    pub const fn irq(irq: i32, end: i32) -> Self {
        let start = irq_to_resource(irq);
        Self {
            start,
            end: if end < 0 { start } else { end as u64 },
            flags: ResourceFlags::IRQ,
        }
    }

    pub fn is_mem(&self) -> bool {
        self.flags.contains(ResourceFlags::MEM)
    }

    pub fn is_irq(&self) -> bool {
        self.flags.contains(ResourceFlags::IRQ)
    }

    pub fn size(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Move a memory window by `offset` bytes.
    pub fn relocate(&mut self, offset: u64) {
        debug_assert!(self.is_mem());
        self.start += offset;
        self.end += offset;
    }

    /// Wire an interrupt resource to a single line.
    pub fn set_irq(&mut self, irq: i32) {
        debug_assert!(self.is_irq());
        self.start = irq_to_resource(irq);
        self.end = self.start;
    }

    /// The interrupt line, or `None` while it is unset.
    pub fn irq_number(&self) -> Option<u32> {
        if !self.is_irq() || self.start == RESOURCE_UNSET {
            None
        } else {
            Some(self.start as u32)
        }
    }
}

const fn irq_to_resource(irq: i32) -> u64 {
    if irq < 0 {
        RESOURCE_UNSET
    } else {
        irq as u64
    }
}
