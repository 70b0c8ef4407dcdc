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
//! Board selection and the full boot sequence.

use crate::boot::BootContext;
use crate::config::BoardConfig;
use crate::error::SocResult;
use crate::host::Host;

#[allow(unused_imports)]
mod board {
    include!(env!("STX7100_BOARD_RS"));
}

pub use board::{BOARD_NAME, BOARD_PATA};

/// Configuration of the board this crate was built for.
pub fn board_config() -> BoardConfig {
    BoardConfig {
        name: BOARD_NAME,
        pata: BOARD_PATA,
    }
}

/// Run every boot phase for the built-in board.
pub fn boot(ctx: &mut BootContext, host: &mut impl Host) -> SocResult {
    boot_board(ctx, host, &board_config())
}

/// Run every boot phase, stopping at the first error.
pub fn boot_board(ctx: &mut BootContext, host: &mut impl Host, board: &BoardConfig) -> SocResult {
    board.check()?;
    info!("STx7100 platform on board {}", board.name);

    ctx.early_device_init(host)?;
    ctx.postcore_setup(host)?;
    if let Some(pata) = board.pata.as_ref() {
        ctx.configure_pata(pata, host)?;
    }
    ctx.devices_setup(host)?;

    info!("{} devices registered", ctx.registered().len());
    Ok(())
}
