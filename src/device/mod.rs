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
pub mod emi;
pub mod fdma;
pub mod pata;
pub mod pio;
pub mod rng;
pub mod sysconf;

use alloc::vec::Vec;

use crate::consts::DEVID_NONE;
use crate::resource::Resource;

use fdma::FdmaPlatformData;
use pata::PataPlatformInfo;
use pio::PioPlatformData;
use sysconf::SysconfPlatformData;

/// Driver-specific payload carried by a platform device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformData {
    None,
    Pata(PataPlatformInfo),
    Fdma(&'static FdmaPlatformData),
    Pio(PioPlatformData),
    Sysconf(SysconfPlatformData),
}

/// A device description as submitted to the host registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDevice {
    pub name: &'static str,
    /// Instance number, `DEVID_NONE` for a single instance.
    pub id: i32,
    pub resources: Vec<Resource>,
    pub platform_data: PlatformData,
}

impl PlatformDevice {
    pub fn new(name: &'static str, id: i32, resources: &[Resource]) -> Self {
        Self {
            name,
            id,
            resources: resources.to_vec(),
            platform_data: PlatformData::None,
        }
    }

    pub fn single(name: &'static str, resources: &[Resource]) -> Self {
        Self::new(name, DEVID_NONE, resources)
    }

    pub fn with_data(mut self, platform_data: PlatformData) -> Self {
        self.platform_data = platform_data;
        self
    }

    /// `{name, id}` pair under which the host knows the device.
    pub fn key(&self) -> (&'static str, i32) {
        (self.name, self.id)
    }

    pub fn mem_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|res| res.is_mem())
    }

    pub fn irq(&self) -> Option<u32> {
        self.resources.iter().find_map(|res| res.irq_number())
    }
}

#[cfg(test)]
mod tests;
