//! autotod_plugin - host-side context for the AutoTOD proximity pause plugin
//!
//! Binds the pure core logic to the simulator runtime. The simulator SDK
//! and the GUI toolkit are reached only through the [`SimulatorHost`] and
//! [`PanelUi`] traits; a real binding implements both, registers
//! [`Plugin::on_tick`] with the host scheduler at [`TICK_INTERVAL_S`],
//! calls [`Plugin::on_render`] from its draw callback, and installs a
//! `log` logger that forwards records to the simulator's log file.

pub mod error;
pub mod host;
pub mod plugin;
pub mod settings_file;
pub mod ui;

pub use error::PluginError;
pub use host::{MockHost, SimulatorHost};
pub use plugin::{Plugin, TICK_INTERVAL_S};
pub use ui::PanelUi;
