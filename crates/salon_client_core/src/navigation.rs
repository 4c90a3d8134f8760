//! Sidebar navigation: link clicks, active link, mobile sidebar visibility.

/// Viewports at or below this width (px) get the collapsible sidebar.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

pub fn is_narrow(viewport_width: u32, breakpoint: u32) -> bool {
    viewport_width <= breakpoint
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Bootstrap Icons class, e.g. `bi-calendar-check`.
    pub icon: &'static str,
    pub href: Option<&'static str>,
}

/// Sidebar entries of the salon template.
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "داشبورد", icon: "bi-speedometer2", href: Some("index.html") },
        NavLink { label: "نوبت‌ها", icon: "bi-calendar-check", href: Some("appointments.html") },
        NavLink { label: "مشتریان", icon: "bi-people", href: Some("customers.html") },
        NavLink { label: "خدمات", icon: "bi-scissors", href: Some("services.html") },
        NavLink { label: "کارکنان", icon: "bi-person-badge", href: Some("staff.html") },
        NavLink { label: "انبار", icon: "bi-box-seam", href: Some("inventory.html") },
        NavLink { label: "گزارش‌ها", icon: "bi-graph-up", href: Some("reports.html") },
        NavLink { label: "تنظیمات", icon: "bi-gear", href: Some("#") },
    ]
}

/// What a click on a nav link should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkClick {
    /// Real destination: let the browser navigate.
    Navigate,
    /// No destination: suppress the default action.
    Handled { close_sidebar: bool },
}

pub fn link_click(href: Option<&str>, viewport_width: u32, breakpoint: u32) -> LinkClick {
    match href {
        Some(h) if !h.is_empty() && h != "#" => LinkClick::Navigate,
        _ => LinkClick::Handled {
            close_sidebar: is_narrow(viewport_width, breakpoint),
        },
    }
}

/// Last path segment of a URL path: `/salon/services.html` -> `services.html`, `/` -> ``.
pub fn current_page(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

/// A link is active when its destination equals the current page; the site root
/// counts as `index.html`.
pub fn is_active(href: Option<&str>, current_page: &str) -> bool {
    match href {
        Some(h) => h == current_page || (current_page.is_empty() && h == "index.html"),
        None => false,
    }
}

/// Active flag per link, in order.
pub fn active_flags(links: &[NavLink], current_page: &str) -> Vec<bool> {
    links.iter().map(|l| is_active(l.href, current_page)).collect()
}

pub fn active_index(links: &[NavLink], current_page: &str) -> Option<usize> {
    links.iter().position(|l| is_active(l.href, current_page))
}

/// Visibility of the collapsible sidebar (`.show`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sidebar {
    shown: bool,
}

impl Sidebar {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    pub fn close(&mut self) {
        self.shown = false;
    }

    /// Class list of the sidebar element.
    pub fn class(&self) -> &'static str {
        if self.shown {
            "sidebar show"
        } else {
            "sidebar"
        }
    }

    /// A click outside both the sidebar and the menu button closes it on narrow viewports.
    /// Returns true if the sidebar was closed by this click.
    pub fn handle_outside_click(
        &mut self,
        viewport_width: u32,
        breakpoint: u32,
        inside_sidebar: bool,
        on_menu_button: bool,
    ) -> bool {
        if is_narrow(viewport_width, breakpoint) && !inside_sidebar && !on_menu_button && self.shown {
            self.close();
            return true;
        }
        false
    }

    /// Widening past the breakpoint hides the mobile sidebar.
    pub fn handle_resize(&mut self, viewport_width: u32, breakpoint: u32) {
        if !is_narrow(viewport_width, breakpoint) {
            self.close();
        }
    }
}
