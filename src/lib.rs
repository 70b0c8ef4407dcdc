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
//! Platform support for the STx7100/STx7109 SoC family.
//!
//! The chip is described as static device tables which are handed to the
//! host kernel's device registry at three boot phases, see [`boot`].
#![no_std]

#[macro_use]
extern crate alloc;
#[cfg(test)]
extern crate std;
#[macro_use]
extern crate log;

#[macro_use]
pub mod error;
#[macro_use]
pub mod logging;

pub mod boot;
pub mod chip;
pub mod config;
pub mod consts;
pub mod device;
pub mod host;
pub mod platform;
pub mod resource;


pub use boot::{BootContext, BootPhase};
pub use chip::{ChipIdentity, ChipModel};
pub use config::{BoardConfig, PataConfig};
pub use error::{SocError, SocErrorNum, SocResult};
pub use host::Host;
