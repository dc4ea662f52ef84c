/// Offset added to the scroll position before testing section bounds.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;
/// Height of the fixed navigation bar; click-to-scroll stops this far above a section.
pub const NAV_HEIGHT: f64 = 80.0;
/// Past this scroll offset the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Timeline,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Timeline,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Timeline => "timeline",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Timeline => "Timeline",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The first section containing `scroll_y + SCROLL_LOOKAHEAD`, if any.
pub fn section_at(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let probe = scroll_y + SCROLL_LOOKAHEAD;
    bounds.iter().find(|b| b.contains(probe)).map(|b| b.section)
}

pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - NAV_HEIGHT).max(0.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        let heights = [800.0, 600.0, 700.0, 900.0, 1000.0, 500.0, 650.0];
        let mut top = 0.0;
        Section::ALL
            .into_iter()
            .zip(heights)
            .map(|(section, height)| {
                let b = SectionBounds {
                    section,
                    top,
                    height,
                };
                top += height;
                b
            })
            .collect()
    }

    #[test]
    fn test_page_top_is_home() {
        assert_eq!(section_at(0.0, &layout()), Some(Section::Home));
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_lookahead_switches_early() {
        let bounds = layout();
        // About starts at 800
        assert_eq!(section_at(699.0, &bounds), Some(Section::Home));
        assert_eq!(section_at(700.0, &bounds), Some(Section::About));
        assert_eq!(section_at(1300.0, &bounds), Some(Section::Timeline));
    }

    #[test]
    fn test_every_section_reachable() {
        let bounds = layout();
        for b in &bounds {
            assert_eq!(section_at(b.top - SCROLL_LOOKAHEAD, &bounds), Some(b.section));
        }
    }

    #[test]
    fn test_past_the_end_is_none() {
        assert_eq!(section_at(100_000.0, &layout()), None);
        assert_eq!(section_at(0.0, &[]), None);
    }

    #[test]
    fn test_scroll_target_and_threshold() {
        assert_eq!(scroll_target(800.0), 720.0);
        assert_eq!(scroll_target(20.0), 0.0);
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_section_ids_roundtrip() {
        for s in Section::ALL {
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
        assert_eq!(Section::from_id("blog"), None);
    }
}
