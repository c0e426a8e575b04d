//! The selection presenter: resolves focused-region content into the
//! information panel.

use crate::catalog::SelectionInfo;
use crate::surface::PanelSurface;

/// Sections of the information panel.
///
/// `Home` is the default: focusing a region always lands there, no matter
/// which section was active for the previous region. The auxiliary
/// sections carry placeholder content until their data sources exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelSection {
    /// Region overview: title, image, description.
    #[default]
    Home,
    /// Economic data.
    Economics,
    /// Political data.
    Politics,
    /// Trade data.
    Trade,
    /// Miscellaneous information.
    Other,
}

/// Renders resolved selection content into the panel surface.
///
/// Holds the content of the currently focused region so section switches
/// can re-render it; the surface only ever sees finished markup and
/// marker updates.
#[derive(Debug, Default)]
pub struct PanelPresenter {
    active_section: PanelSection,
    visible: bool,
    current: Option<SelectionInfo>,
}

impl PanelPresenter {
    /// Presenter with a hidden panel and no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is currently marked visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The section currently shown.
    #[must_use]
    pub fn active_section(&self) -> PanelSection {
        self.active_section
    }

    /// Content of the current selection, if a region is presented.
    #[must_use]
    pub fn selection(&self) -> Option<&SelectionInfo> {
        self.current.as_ref()
    }

    /// Present a newly focused region.
    ///
    /// Always resets to the default section, renders the region's
    /// overview markup, and makes the panel visible.
    pub fn present(
        &mut self,
        info: SelectionInfo,
        panel: &mut dyn PanelSurface,
    ) {
        self.active_section = PanelSection::Home;
        panel.set_active_section(PanelSection::Home);
        panel.render(&home_markup(&info));
        panel.set_visible(true);
        self.current = Some(info);
        self.visible = true;
    }

    /// Switch the visible section.
    ///
    /// Returns `false` while the panel is hidden (the tab chrome is not
    /// shown then, so the switch is ignored).
    pub fn show_section(
        &mut self,
        section: PanelSection,
        panel: &mut dyn PanelSurface,
    ) -> bool {
        if !self.visible {
            log::debug!("ignoring section switch while panel hidden");
            return false;
        }

        self.active_section = section;
        panel.set_active_section(section);
        match section {
            PanelSection::Home => {
                let markup = self
                    .current
                    .as_ref()
                    .map_or_else(String::new, home_markup);
                panel.render(&markup);
            }
            PanelSection::Economics => {
                panel.render(
                    "<h2>Economics</h2><p>Placeholder economic data.</p>",
                );
            }
            PanelSection::Politics => {
                panel.render(
                    "<h2>Politics</h2><p>Placeholder political data.</p>",
                );
            }
            PanelSection::Trade => {
                panel
                    .render("<h2>Trade</h2><p>Placeholder trade data.</p>");
            }
            PanelSection::Other => {
                panel.render("<h2>Other</h2><p>Miscellaneous info.</p>");
            }
        }
        true
    }

    /// Hide the panel and drop the current selection.
    pub fn hide(&mut self, panel: &mut dyn PanelSurface) {
        panel.set_visible(false);
        self.visible = false;
        self.current = None;
    }
}

/// Overview markup for a resolved selection.
fn home_markup(info: &SelectionInfo) -> String {
    let image = info.image_ref.as_ref().map_or_else(String::new, |src| {
        format!("<img src=\"{src}\" alt=\"{}\" />", info.title)
    });
    format!(
        "<h2>{}</h2>{image}<p>{}</p>",
        info.title, info.description_markup
    )
}
