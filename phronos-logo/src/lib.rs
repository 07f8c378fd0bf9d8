// SPDX-License-Identifier: MIT OR Apache-2.0

//! The p.h.r.o.n.o.s. ouroboros logo as an embeddable widget.
//!
//! Rust hosts mount it through [`LogoWidget`] (or a [`WidgetRegistry`]);
//! JavaScript hosts get the `PhronosLogo` class exported from [`bindings`].
//!
//! # Example
//!
//! ```no_run
//! use phronos_logo::{LogoWidget, PartialDisplayOptions};
//!
//! let mut logo = LogoWidget::new(
//!     "logo-container",
//!     PartialDisplayOptions {
//!         show_dots: Some(false),
//!         ..Default::default()
//!     },
//! );
//! logo.set_theme("light");
//! logo.set_size(500);
//! ```

pub mod bindings;
pub mod components;
pub mod container;
pub mod error;
pub mod options;
pub mod registry;
pub mod view;
pub mod widget;

pub use components::logo::{LogoProps, PhronosLogo};
pub use container::ContainerHandle;
pub use error::LogoError;
pub use options::{DisplayOptions, PartialDisplayOptions, Theme, DEFAULT_SIZE};
pub use registry::{register, HostWidget, WidgetFactory, WidgetRegistry};
pub use view::{logo_tree, LogoElement, LogoNode, ACRONYM, DOT_COUNT};
pub use widget::LogoWidget;

use log::LevelFilter;

/// Console log level used by [`init_logging`].
pub fn default_log_level() -> LevelFilter {
    if cfg!(feature = "debugAssertions") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the console logger and the panic hook.
///
/// Safe to call more than once; only the first call installs a logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = default_log_level().to_level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}
