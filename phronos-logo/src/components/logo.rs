// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logo as a Yew component, for hosts that already render with Yew.

use yew::prelude::*;

use crate::options::{DisplayOptions, Theme, DEFAULT_SIZE};
use crate::view::logo_tree;

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct LogoProps {
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or(true)]
    pub show_text: bool,
    #[prop_or(true)]
    pub show_dots: bool,
    #[prop_or(DEFAULT_SIZE)]
    pub size: i32,
}

impl From<&DisplayOptions> for LogoProps {
    fn from(options: &DisplayOptions) -> Self {
        Self {
            theme: options.theme,
            show_text: options.show_text,
            show_dots: options.show_dots,
            size: options.size,
        }
    }
}

impl From<&LogoProps> for DisplayOptions {
    fn from(props: &LogoProps) -> Self {
        Self {
            theme: props.theme,
            show_text: props.show_text,
            show_dots: props.show_dots,
            size: props.size,
        }
    }
}

#[function_component(PhronosLogo)]
pub fn phronos_logo(props: &LogoProps) -> Html {
    logo_tree(&DisplayOptions::from(props)).to_html()
}
