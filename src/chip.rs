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
//! Chip identification.
//!
//! The device id register (`SYS_DEV` 0) is a JTAG-style IDCODE. An
//! STx7109 additionally reports its cut in status register `SYS_STA` 9.

use tock_registers::{register_bitfields, LocalRegisterCopy};

use crate::device::sysconf::SysconfGroup;
use crate::error::SocResult;
use crate::host::SysconfOps;

register_bitfields![
    u32,
    pub DEVICE_ID [
        VERSION OFFSET(28) NUMBITS(4) [],
        PART_NUMBER OFFSET(12) NUMBITS(10) [
            Stx7109 = 0x02c
        ]
    ],
    pub CHIP_CUT [
        MAJOR OFFSET(4) NUMBITS(4) [],
        MINOR OFFSET(0) NUMBITS(4) []
    ]
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipModel {
    Stx7100,
    Stx7109,
}

impl ChipModel {
    pub fn name(&self) -> &'static str {
        match self {
            ChipModel::Stx7100 => "STx7100",
            ChipModel::Stx7109 => "STx7109",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipIdentity {
    pub model: ChipModel,
    pub cut_major: u32,
    pub cut_minor: u32,
}

impl ChipIdentity {
    /// Identity as far as the device id register tells it.
    pub fn from_device_id(devid: u32) -> Self {
        let devid = LocalRegisterCopy::<u32, DEVICE_ID::Register>::new(devid);
        let model = if devid.matches_all(DEVICE_ID::PART_NUMBER::Stx7109) {
            ChipModel::Stx7109
        } else {
            ChipModel::Stx7100
        };
        Self {
            model,
            cut_major: devid.read(DEVICE_ID::VERSION) + 1,
            cut_minor: 0,
        }
    }

    /// Refine the cut from the STx7109 cut status byte.
    pub fn apply_cut(&mut self, cut: u32) {
        let cut = LocalRegisterCopy::<u32, CHIP_CUT::Register>::new(cut);
        self.cut_major = cut.read(CHIP_CUT::MAJOR) + 1;
        self.cut_minor = cut.read(CHIP_CUT::MINOR);
    }
}

/// Read the identification registers and decode the chip.
pub fn identify(sysconf: &mut impl SysconfOps) -> SocResult<ChipIdentity> {
    let field = sysconf.claim(SysconfGroup::SysDev, 0, 0, 31, "devid")?;
    let devid = sysconf.read(&field);
    let mut identity = ChipIdentity::from_device_id(devid);
    info!("{} version {}.x", identity.model.name(), identity.cut_major);

    if identity.model == ChipModel::Stx7109 {
        let field = sysconf.claim(SysconfGroup::SysSta, 9, 0, 7, "devid")?;
        identity.apply_cut(sysconf.read(&field));
        info!(
            "Chip version {}.{}",
            identity.cut_major, identity.cut_minor
        );
    }
    Ok(identity)
}
