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
use super::PlatformDevice;
use crate::resource::Resource;

pub const RNG_BASE: u64 = 0x1925_0000;
pub const RNG_SIZE: u64 = 0x1000;

/// Both drivers sit on the same RNG block: one feeds `hw_random`, the
/// other the kernel entropy pool.
pub fn rng_hwrandom_device() -> PlatformDevice {
    PlatformDevice::single("stm-hwrandom", &[Resource::mem(RNG_BASE, RNG_SIZE)])
}

pub fn rng_devrandom_device() -> PlatformDevice {
    PlatformDevice::single("stm-rng", &[Resource::mem(RNG_BASE, RNG_SIZE)])
}
