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
//! Services the host kernel provides to the platform code.
//!
//! Nothing in this crate touches hardware directly: mappings, sysconf
//! accesses, GPIO and EMI setup and device registration all go through
//! these traits, in the order the boot phases call them.

use crate::chip::ChipIdentity;
use crate::device::sysconf::{SysconfField, SysconfGroup};
use crate::device::PlatformDevice;
use crate::error::SocResult;

pub trait AddressMapper {
    /// Establish an uncached mapping of `size` bytes at `phys`.
    fn ioremap_nocache(&mut self, phys: u64, size: u64) -> SocResult<usize>;
}

pub trait SysconfOps {
    /// Bring the sysconf driver up before the device registry is live.
    fn early_init(&mut self, device: &PlatformDevice) -> SocResult;
    /// Claim bits `lsb..=msb` of register `num` in `group` for `owner`.
    fn claim(
        &mut self,
        group: SysconfGroup,
        num: u32,
        lsb: u32,
        msb: u32,
        owner: &'static str,
    ) -> SocResult<SysconfField>;
    fn read(&mut self, field: &SysconfField) -> u32;
    fn write(&mut self, field: &SysconfField, value: u32);
}

pub trait GpioOps {
    /// Bring up the PIO port controllers, numbering pins from `first_pin`.
    fn early_init(&mut self, ports: &[PlatformDevice], first_pin: u32) -> SocResult;
}

pub trait EmiOps {
    /// Physical base address of EMI bank `bank`.
    fn bank_base(&mut self, bank: usize) -> u64;
    /// Program bank timings for an attached PATA drive.
    fn config_pata(&mut self, bank: usize, pc_mode: bool);
}

pub trait CpuOps {
    /// Publish the decoded chip identity as the boot CPU's data.
    fn set_boot_cpu_data(&mut self, identity: &ChipIdentity);
    /// Keep the idle loop from executing the sleep instruction.
    fn disable_hlt(&mut self);
}

pub trait DeviceRegistry {
    /// Hand a device to the host. The host owns it from here on.
    fn register(&mut self, device: PlatformDevice) -> SocResult;
}

/// Everything the boot phases need from the host.
pub trait Host: AddressMapper + SysconfOps + GpioOps + EmiOps + CpuOps + DeviceRegistry {}

impl<T> Host for T where T: AddressMapper + SysconfOps + GpioOps + EmiOps + CpuOps + DeviceRegistry {}
