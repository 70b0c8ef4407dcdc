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
//! System configuration register bank.

use bit_field::BitField;
use numeric_enum_macro::numeric_enum;

use super::{PlatformData, PlatformDevice};
use crate::resource::Resource;

pub const SYSCONF_BASE: u64 = 0x1900_1000;
pub const SYSCONF_SIZE: u64 = 0x194;

numeric_enum! {
    #[repr(u32)]
    #[derive(Debug, Eq, PartialEq, Copy, Clone)]
    pub enum SysconfGroup {
        SysDev = 0, // device identification
        SysSta = 1, // status
        SysCfg = 2, // configuration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatSysconfGroup {
    pub group: SysconfGroup,
    /// Offset of register 0 of the group inside the sysconf window.
    pub offset: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysconfPlatformData {
    pub groups: &'static [PlatSysconfGroup],
}

impl SysconfPlatformData {
    /// Window offset of register `num` in `group`.
    pub fn register_offset(&self, group: SysconfGroup, num: u32) -> Option<u32> {
        self.groups
            .iter()
            .find(|desc| desc.group == group)
            .map(|desc| desc.offset + num * 4)
    }
}

pub static STX7100_SYSCONF_GROUPS: [PlatSysconfGroup; 3] = [
    PlatSysconfGroup {
        group: SysconfGroup::SysDev,
        offset: 0x000,
        name: "SYS_DEV",
    },
    PlatSysconfGroup {
        group: SysconfGroup::SysSta,
        offset: 0x008,
        name: "SYS_STA",
    },
    PlatSysconfGroup {
        group: SysconfGroup::SysCfg,
        offset: 0x100,
        name: "SYS_CFG",
    },
];

pub fn sysconf_device() -> PlatformDevice {
    PlatformDevice::single("stm-sysconf", &[Resource::mem(SYSCONF_BASE, SYSCONF_SIZE)]).with_data(
        PlatformData::Sysconf(SysconfPlatformData {
            groups: &STX7100_SYSCONF_GROUPS,
        }),
    )
}

/// A claimed bit range `lsb..=msb` of one sysconf register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysconfField {
    pub group: SysconfGroup,
    pub num: u32,
    pub lsb: u32,
    pub msb: u32,
    pub owner: &'static str,
}

impl SysconfField {
    pub fn new(group: SysconfGroup, num: u32, lsb: u32, msb: u32, owner: &'static str) -> Self {
        debug_assert!(lsb <= msb && msb < 32);
        Self {
            group,
            num,
            lsb,
            msb,
            owner,
        }
    }

    /// Field value out of a whole register value.
    pub fn extract(&self, reg: u32) -> u32 {
        reg.get_bits(self.lsb as usize..=self.msb as usize)
    }

    /// Register value with the field replaced by `value`.
    pub fn insert(&self, reg: u32, value: u32) -> u32 {
        let mut reg = reg;
        reg.set_bits(self.lsb as usize..=self.msb as usize, value);
        reg
    }

    pub fn overlaps(&self, other: &SysconfField) -> bool {
        self.group == other.group
            && self.num == other.num
            && self.lsb <= other.msb
            && other.lsb <= self.msb
    }
}
