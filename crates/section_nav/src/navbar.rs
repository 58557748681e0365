//! Navigation bar view model.
//!
//! Derived from a [`NavState`] on demand. Exactly one button is selected, and
//! the container treatment follows the scrolled flag.

use crate::error::NavError;
use crate::html::Html;
use crate::section::{SECTION_ORDER, SectionId};
use crate::state::NavState;
use serde::Serialize;

/// Container style of the navigation bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTreatment {
    /// Page at the top: no background.
    Transparent,
    /// Page scrolled: opaque, blurred background.
    Opaque,
}

impl NavTreatment {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Opaque => "opaque",
        }
    }
}

/// One navigation button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub section: SectionId,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the navigation bar needs to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavBarModel {
    pub buttons: [NavButton; SECTION_ORDER.len()],
    pub treatment: NavTreatment,
}

impl NavBarModel {
    pub fn from_state(state: &NavState) -> Self {
        let buttons = SECTION_ORDER.map(|section| NavButton {
            section,
            label: section.label(),
            selected: section == state.active,
        });
        let treatment = if state.scrolled {
            NavTreatment::Opaque
        } else {
            NavTreatment::Transparent
        };
        Self { buttons, treatment }
    }

    /// The selected button's section.
    pub fn selected(&self) -> Option<SectionId> {
        self.buttons
            .iter()
            .find(|button| button.selected)
            .map(|button| button.section)
    }

    /// Resolve a clicked button label to its section.
    ///
    /// # Errors
    /// Returns [`NavError::UnknownLabel`] if no button carries `label`.
    pub fn button_for_label(&self, label: &str) -> Result<SectionId, NavError> {
        self.buttons
            .iter()
            .find(|button| button.label == label)
            .map(|button| button.section)
            .ok_or_else(|| NavError::UnknownLabel(label.to_owned()))
    }

    /// Render the bar as a `<nav>` fragment.
    pub fn render(&self) -> Html {
        let mut markup = format!(
            "<nav class=\"section-nav\" data-treatment=\"{}\">",
            self.treatment.as_str()
        );
        for button in &self.buttons {
            markup.push_str(&format!(
                "<button data-section=\"{}\" aria-current=\"{}\">{}</button>",
                button.section, button.selected, button.label
            ));
        }
        markup.push_str("</nav>");
        Html::from(markup)
    }
}
