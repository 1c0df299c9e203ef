//! Timetoe - terminal tic-tac-toe with a time-travel move history.
//!
//! The game rules and the history store live in [`timetoe_engine`]; this
//! crate adds the command line, configuration, the terminal UI and a
//! headless replay command.
//!
//! # Example
//!
//! ```
//! use timetoe::{OutputFormat, parse_moves, render, replay};
//! use timetoe_engine::SortOrder;
//!
//! # fn example() -> anyhow::Result<()> {
//! let moves = parse_moves("0,1,4,2,8")?;
//! let history = replay(&moves, None)?;
//! let text = render(&history, SortOrder::Ascending, OutputFormat::Text)?;
//! assert!(text.contains("Winner: X"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, ConfigSource};
pub use replay::{OutputFormat, ReplayError, parse_moves, render, replay};
