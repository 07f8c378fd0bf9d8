// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed markup tree for the ouroboros logo.
//!
//! A rotating ring (the snake's body with a head and a tail chevron) and an
//! optional static center holding the acronym and the six-dot decoration.
//! Animation and colours come from the host stylesheet via the class names.
//!
//! The tree is a pure function of [`DisplayOptions`]. It is turned into live
//! DOM nodes synchronously by [`LogoElement::to_dom`] and into Yew virtual
//! nodes by [`LogoElement::to_html`].

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node};
use yew::virtual_dom::{VTag, VText};
use yew::Html;

use crate::error::LogoError;
use crate::options::DisplayOptions;

/// The acronym letters. Each one is preceded by a period and the last is
/// followed by one, giving ".p.h.r.o.n.o.s.".
pub const ACRONYM: &str = "phronos";

/// Number of markers in the dot decoration.
pub const DOT_COUNT: usize = 6;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Geometry of the body circle inside its fixed 320x320 view box.
const VIEW_BOX: &str = "0 0 320 320";
const BODY_CENTER: &str = "160";
const BODY_RADIUS: &str = "125";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoNode {
    Element(LogoElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoElement {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<LogoNode>,
}

impl From<LogoElement> for LogoNode {
    fn from(element: LogoElement) -> Self {
        LogoNode::Element(element)
    }
}

impl LogoNode {
    pub fn text_content(&self) -> String {
        match self {
            LogoNode::Text(text) => text.clone(),
            LogoNode::Element(element) => element.text_content(),
        }
    }

    pub fn to_html(&self) -> Html {
        match self {
            LogoNode::Text(text) => VText::new(text.clone()).into(),
            LogoNode::Element(element) => element.to_html(),
        }
    }

    fn build(&self, document: &Document, namespace: Option<&str>) -> Result<Node, LogoError> {
        match self {
            LogoNode::Text(text) => Ok(document.create_text_node(text).into()),
            LogoNode::Element(element) => element.build(document, namespace).map(Node::from),
        }
    }
}

impl LogoElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<LogoNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(LogoNode::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn children(&self) -> &[LogoNode] {
        &self.children
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(LogoNode::text_content).collect()
    }

    /// Build detached DOM nodes for this element and its subtree.
    pub fn to_dom(&self, document: &Document) -> Result<Element, LogoError> {
        self.build(document, None)
    }

    pub fn to_html(&self) -> Html {
        let mut tag = VTag::new(self.tag);
        for (name, value) in &self.attributes {
            tag.add_attribute(*name, value.clone());
        }
        tag.add_children(self.children.iter().map(LogoNode::to_html));
        tag.into()
    }

    fn build(&self, document: &Document, namespace: Option<&str>) -> Result<Element, LogoError> {
        let namespace = if self.tag == "svg" {
            Some(SVG_NS)
        } else {
            namespace
        };
        let element = match namespace {
            Some(ns) => document.create_element_ns(Some(ns), self.tag),
            None => document.create_element(self.tag),
        }
        .map_err(dom_error)?;
        for (name, value) in &self.attributes {
            element.set_attribute(name, value).map_err(dom_error)?;
        }
        for child in &self.children {
            let node = child.build(document, namespace)?;
            element.append_child(&node).map_err(dom_error)?;
        }
        Ok(element)
    }
}

fn dom_error(e: JsValue) -> LogoError {
    LogoError::Dom(format!("{e:?}"))
}

/// The full logo for `options`.
pub fn logo_tree(options: &DisplayOptions) -> LogoElement {
    let size = options.size;
    let class = match options.theme.css_class() {
        Some(theme) => format!("phronos-logo {theme}"),
        None => "phronos-logo".to_string(),
    };

    let mut wrapper = LogoElement::new("div")
        .class(class)
        .attr("style", format!("width: {size}px; height: {size}px;"))
        .child(rotating_elements());

    if options.has_center() {
        let mut center = LogoElement::new("div").class("phronos-logo-center");
        if options.show_text {
            center = center.child(acronym());
        }
        if options.show_dots {
            center = center.child(dots());
        }
        wrapper = wrapper.child(center);
    }
    wrapper
}

fn rotating_elements() -> LogoElement {
    let body = LogoElement::new("div").class("phronos-snake-body").child(
        LogoElement::new("svg").attr("viewBox", VIEW_BOX).child(
            LogoElement::new("circle")
                .class("phronos-body-circle")
                .attr("cx", BODY_CENTER)
                .attr("cy", BODY_CENTER)
                .attr("r", BODY_RADIUS),
        ),
    );
    let head = LogoElement::new("div")
        .class("phronos-snake-head")
        .child(LogoElement::new("div").class("phronos-head-chevron"));
    let tail = LogoElement::new("div")
        .class("phronos-snake-tail")
        .child(LogoElement::new("div").class("phronos-tail-chevron"));

    LogoElement::new("div")
        .class("phronos-rotating-elements")
        .child(body)
        .child(head)
        .child(tail)
}

fn period() -> LogoElement {
    LogoElement::new("span").class("period").text(".")
}

fn acronym() -> LogoElement {
    let acronym = ACRONYM
        .chars()
        .fold(LogoElement::new("div").class("phronos-logo-acronym"), |acc, letter| {
            acc.child(period()).text(letter.to_string())
        });
    acronym.child(period())
}

fn dots() -> LogoElement {
    (0..DOT_COUNT).fold(LogoElement::new("div").class("phronos-logo-dots"), |acc, _| {
        acc.child(LogoElement::new("span"))
    })
}
