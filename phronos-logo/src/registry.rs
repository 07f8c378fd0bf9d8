// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicit registration of widget types with a host.
//!
//! Hosts own a [`WidgetRegistry`] and pass it to [`register`]; nothing is
//! installed into global state.

use std::collections::HashMap;

use crate::error::LogoError;
use crate::options::{DisplayOptions, PartialDisplayOptions};
use crate::widget::LogoWidget;

/// What a host can do with a mounted widget.
pub trait HostWidget {
    fn render(&mut self);
    fn set_theme(&mut self, theme: &str);
    fn set_size(&mut self, size: i32);
    fn options(&self) -> &DisplayOptions;
}

impl HostWidget for LogoWidget {
    fn render(&mut self) {
        LogoWidget::render(self)
    }

    fn set_theme(&mut self, theme: &str) {
        LogoWidget::set_theme(self, theme)
    }

    fn set_size(&mut self, size: i32) {
        LogoWidget::set_size(self, size)
    }

    fn options(&self) -> &DisplayOptions {
        LogoWidget::options(self)
    }
}

/// Builds a widget for a container identifier and partial options.
pub type WidgetFactory = fn(&str, PartialDisplayOptions) -> Box<dyn HostWidget>;

#[derive(Default)]
pub struct WidgetRegistry {
    factories: HashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `factory` under `name`, returning the factory it replaced.
    pub fn register(&mut self, name: &str, factory: WidgetFactory) -> Option<WidgetFactory> {
        self.factories.insert(name.to_string(), factory)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn create(
        &self,
        name: &str,
        container_id: &str,
        options: PartialDisplayOptions,
    ) -> Result<Box<dyn HostWidget>, LogoError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| LogoError::UnknownWidget(name.to_string()))?;
        Ok(factory(container_id, options))
    }
}

/// Register [`LogoWidget`] with `registry` under [`LogoWidget::NAME`].
pub fn register(registry: &mut WidgetRegistry) {
    let previous = registry.register(
        LogoWidget::NAME,
        |container_id: &str, options: PartialDisplayOptions| -> Box<dyn HostWidget> {
            Box::new(LogoWidget::new(container_id, options))
        },
    );
    if previous.is_some() {
        log::warn!("{} was already registered; replaced", LogoWidget::NAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// DOM-free stand-in so the registry can be exercised natively.
    struct RecordingWidget {
        options: DisplayOptions,
        renders: usize,
    }

    impl HostWidget for RecordingWidget {
        fn render(&mut self) {
            self.renders += 1;
        }

        fn set_theme(&mut self, theme: &str) {
            self.options.theme = crate::options::Theme::from_name(theme);
            self.render();
        }

        fn set_size(&mut self, size: i32) {
            self.options.size = size;
            self.render();
        }

        fn options(&self) -> &DisplayOptions {
            &self.options
        }
    }

    fn recording_factory(_container_id: &str, options: PartialDisplayOptions) -> Box<dyn HostWidget> {
        let mut widget = RecordingWidget {
            options: DisplayOptions::merged(options),
            renders: 0,
        };
        widget.render();
        Box::new(widget)
    }

    #[test]
    fn unknown_name_is_reported() {
        let registry = WidgetRegistry::new();
        let result = registry.create("Missing", "logo", PartialDisplayOptions::default());
        assert_eq!(
            result.err(),
            Some(LogoError::UnknownWidget("Missing".to_string()))
        );
    }

    #[test]
    fn created_widget_gets_merged_options() {
        let mut registry = WidgetRegistry::new();
        registry.register("Recording", recording_factory);

        let mut widget = registry
            .create(
                "Recording",
                "logo",
                PartialDisplayOptions {
                    show_text: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!widget.options().show_text);
        assert!(widget.options().show_dots);

        widget.set_size(500);
        assert_eq!(widget.options().size, 500);
        assert!(!widget.options().show_text);
    }

    #[test]
    fn register_replaces_and_returns_previous() {
        let mut registry = WidgetRegistry::new();
        assert!(registry.register("Recording", recording_factory).is_none());
        assert!(registry.register("Recording", recording_factory).is_some());
        assert_eq!(registry.names(), vec!["Recording"]);
    }

    #[test]
    fn logo_widget_registers_under_its_name() {
        let mut registry = WidgetRegistry::new();
        register(&mut registry);
        assert!(registry.contains(LogoWidget::NAME));
        assert_eq!(registry.names(), vec!["PhronosLogo"]);
    }
}
