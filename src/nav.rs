use std::fmt;

/// Scroll offset past which the navigation bar gets a solid background.
pub const SOLID_NAV_OFFSET: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Education,
    Projects,
    Publications,
    Skills,
    Certificates,
    Awards,
    Contact,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Publications,
        Section::Skills,
        Section::Certificates,
        Section::Awards,
        Section::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Publications => "publications",
            Section::Skills => "skills",
            Section::Certificates => "certificates",
            Section::Awards => "awards",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Publications => "Publications",
            Section::Skills => "Skills",
            Section::Certificates => "Certificates",
            Section::Awards => "Awards",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl NavState {
    /// Marks `section` active and folds the mobile menu away.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

pub fn is_nav_solid(scroll_y: f64) -> bool {
    scroll_y > SOLID_NAV_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(
            ids,
            [
                "home",
                "about",
                "experience",
                "education",
                "projects",
                "publications",
                "skills",
                "certificates",
                "awards",
                "contact"
            ]
        );
    }

    #[test]
    fn test_select_closes_menu() {
        let mut nav = NavState::default();
        assert_eq!(nav.active, Section::Home);
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.select(Section::Skills);
        assert_eq!(nav.active, Section::Skills);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_nav_solid_threshold() {
        assert!(!is_nav_solid(0.0));
        assert!(!is_nav_solid(40.0));
        assert!(is_nav_solid(40.5));
    }
}
