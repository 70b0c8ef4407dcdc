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
use std::io::Write;
use std::{env, fs, path::Path, path::PathBuf};

const DEFAULT_ARCH: &str = "sh4";
const DEFAULT_BOARD: &str = "mb411";

fn log_path() -> PathBuf {
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|_| String::from("."));
    Path::new(&out_dir).join("build_rs.log")
}

fn log(output: &str) {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
        .expect("Failed to open log file");
    writeln!(file, "{}", output).expect("Failed to write to log file");
}

// .config (optional)
// ARCH=...
// BOARD=...
// BID=...
#[derive(Default)]
struct BuildEnv {
    arch: String,
    board: String,
    bid: String,
}

fn parse_build_env(file_path: &Path) -> BuildEnv {
    let mut build_env = BuildEnv::default();
    let Ok(file) = fs::read_to_string(file_path) else {
        return build_env;
    };
    for line in file.lines() {
        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() != 2 {
            continue;
        }
        match parts[0].trim() {
            "ARCH" => build_env.arch = parts[1].trim().to_string(),
            "BOARD" => build_env.board = parts[1].trim().to_string(),
            "BID" => build_env.bid = parts[1].trim().to_string(),
            _ => {}
        }
    }
    build_env
}

fn main() {
    let log_file = log_path();
    if log_file.exists() {
        fs::remove_file(&log_file).expect("Failed to remove log file");
    }

    let project_toml_root = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let config_path = Path::new(&project_toml_root).join(".config");
    let mut build_env = parse_build_env(&config_path);

    // STX7100_{ARCH,BOARD,BID} win over .config
    if let Ok(arch) = env::var("STX7100_ARCH") {
        build_env.arch = arch;
    }
    if let Ok(board) = env::var("STX7100_BOARD") {
        build_env.board = board;
    }
    if let Ok(bid) = env::var("STX7100_BID") {
        build_env.bid = bid;
    }

    if !build_env.bid.is_empty() {
        // BID=$ARCH/$BOARD
        let parts: Vec<&str> = build_env.bid.split('/').collect();
        if parts.len() != 2 {
            log(&format!("Invalid BID format: {}", build_env.bid));
            panic!(
                "Invalid BID format, please check the log file({}) for more details",
                log_file.display()
            );
        }
        build_env.arch = parts[0].to_string();
        build_env.board = parts[1].to_string();
    }
    if build_env.arch.is_empty() {
        build_env.arch = DEFAULT_ARCH.to_string();
    }
    if build_env.board.is_empty() {
        build_env.board = DEFAULT_BOARD.to_string();
    }

    let source_path = Path::new(&project_toml_root)
        .join("platform")
        .join(&build_env.arch)
        .join(&build_env.board)
        .join("board.rs");

    log(&format!(
        "Building for ARCH={} BOARD={}",
        build_env.arch, build_env.board
    ));

    if !source_path.exists() {
        log(&format!(
            "Invalid board.rs path: {}, make sure ARCH and BOARD are set correctly",
            source_path.display()
        ));
        panic!(
            "Invalid board.rs, please check the log file({}) for more details",
            log_file.display()
        );
    }
    log(&format!("Using board file {}", source_path.display()));

    println!("cargo:rustc-env=STX7100_BOARD_RS={}", source_path.display());
    println!("cargo:rerun-if-env-changed=STX7100_ARCH");
    println!("cargo:rerun-if-env-changed=STX7100_BOARD");
    println!("cargo:rerun-if-env-changed=STX7100_BID");
    println!("cargo:rerun-if-env-changed=LOG");
    if config_path.exists() {
        println!("cargo:rerun-if-changed={}", config_path.display());
    }
    println!("cargo:rerun-if-changed={}", source_path.display());
}
