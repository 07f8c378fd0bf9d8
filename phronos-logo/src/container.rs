// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution of a host container identifier to a live DOM element.

use web_sys::Element;

use crate::error::LogoError;

/// A host-owned element the widget renders into.
///
/// The widget never creates or removes the element itself; it only replaces
/// the element's children.
#[derive(Debug, Clone)]
pub struct ContainerHandle {
    id: String,
    element: Option<Element>,
}

impl ContainerHandle {
    /// Look `id` up in the current document. A miss is not an error here; it
    /// surfaces when the handle is used.
    pub fn resolve(id: &str) -> Self {
        let element = gloo_utils::document().get_element_by_id(id);
        Self {
            id: id.to_string(),
            element,
        }
    }

    /// Wrap an element the host already holds.
    pub fn from_element(element: Element) -> Self {
        Self {
            id: element.id(),
            element: Some(element),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_resolved(&self) -> bool {
        self.element.is_some()
    }

    pub fn element(&self) -> Result<&Element, LogoError> {
        self.element
            .as_ref()
            .ok_or_else(|| LogoError::ContainerNotFound(self.id.clone()))
    }
}
