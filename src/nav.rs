/// Vertical offset, in pixels, past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Skills,
    Certifications,
    Education,
    Projects,
    Contact,
}

impl Section {
    /// Page order. Also the order of the navigation links.
    pub const ALL: [Section; 6] = [
        Section::Profile,
        Section::Skills,
        Section::Certifications,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Contact is rendered as a call-to-action button rather than a plain link.
    pub fn is_call_to_action(self) -> bool {
        self == Section::Contact
    }
}

/// Header state: the compact-on-scroll flag and the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recomputes `scrolled` for a new offset. Returns whether it changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called when any navigation link is activated. Returns whether it changed.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}
