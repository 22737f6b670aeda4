// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_month;
mod config;
mod grid_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_month::CmdMonth;
pub use crate::config::{Config, parse_config};
pub use crate::util::{EventSpec, OutputFormat};
