// SPDX-License-Identifier: MIT OR Apache-2.0

//! `LogoWidget` owns one set of display options and keeps a container's
//! content equal to the logo rendered from them.
//!
//! Every operation writes the DOM before it returns.

use crate::container::ContainerHandle;
use crate::error::LogoError;
use crate::options::{DisplayOptions, PartialDisplayOptions, Theme};
use crate::view::logo_tree;

pub struct LogoWidget {
    container: ContainerHandle,
    options: DisplayOptions,
    rendered: bool,
}

impl LogoWidget {
    /// Name under which the widget registers with a host registry.
    pub const NAME: &'static str = "PhronosLogo";

    /// Resolve `container_id`, merge `options` over the defaults and render.
    ///
    /// A missing container is logged; construction itself never fails.
    pub fn new(container_id: &str, options: PartialDisplayOptions) -> Self {
        Self::with_container(ContainerHandle::resolve(container_id), options)
    }

    pub fn with_container(container: ContainerHandle, options: PartialDisplayOptions) -> Self {
        let mut widget = Self {
            container,
            options: DisplayOptions::merged(options),
            rendered: false,
        };
        widget.render();
        widget
    }

    /// Replace the container's entire content with the logo for the current
    /// options. Errors are logged and leave the container untouched.
    pub fn render(&mut self) {
        match self.try_render() {
            Ok(()) => self.rendered = true,
            Err(e) => log::error!("{e}"),
        }
    }

    fn try_render(&self) -> Result<(), LogoError> {
        let container = self.container.element()?;
        // The container is only touched once the whole tree exists.
        let logo = logo_tree(&self.options).to_dom(&gloo_utils::document())?;
        log::debug!(
            "rendering logo into #{}: {:?}",
            self.container.id(),
            self.options
        );
        container.set_inner_html("");
        container
            .append_child(&logo)
            .map_err(|e| LogoError::Dom(format!("{e:?}")))?;
        Ok(())
    }

    /// Switch theme and re-render. Only `"light"` is recognised; any other
    /// name selects the dark theme.
    pub fn set_theme(&mut self, theme: &str) {
        self.options.theme = Theme::from_name(theme);
        self.render();
    }

    /// Resize and re-render. The value is used as-is.
    pub fn set_size(&mut self, size: i32) {
        self.options.size = size;
        self.render();
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn container_id(&self) -> &str {
        self.container.id()
    }

    /// Whether at least one render reached the container.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Remove the logo, leaving the container empty.
    pub fn unmount(self) {
        if !self.rendered {
            return;
        }
        if let Ok(container) = self.container.element() {
            container.set_inner_html("");
        }
    }
}
