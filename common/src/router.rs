use entity::UserRole;

pub const DEFAULT_PAGE: &str = "dashboard";

/// The render branch selected by the current page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Releases,
    Analytics,
    Finance,
    Admin,
    /// Sections that are not built yet and unknown identifiers.
    Placeholder,
}

impl View {
    pub fn from_id(id: &str) -> Self {
        match id {
            "dashboard" => View::Dashboard,
            "releases" => View::Releases,
            "analytics" => View::Analytics,
            "finance" => View::Finance,
            "admin" => View::Admin,
            _ => View::Placeholder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
}

const MENU: &[(MenuItem, bool)] = &[
    (MenuItem { id: "dashboard", label: "Dashboard" }, false),
    (MenuItem { id: "releases", label: "Releases" }, false),
    (MenuItem { id: "analytics", label: "Analytics" }, false),
    (MenuItem { id: "catalog", label: "Catalog" }, false),
    (MenuItem { id: "finance", label: "Finance" }, false),
    (MenuItem { id: "profile", label: "Profile" }, false),
    (MenuItem { id: "admin", label: "Admin" }, true),
    (MenuItem { id: "support", label: "Support" }, false),
];

/// Sidebar entries visible to a role. The admin entry is only listed for
/// administrators.
pub fn menu(role: UserRole) -> Vec<MenuItem> {
    MENU.iter()
        .filter(|(_, admin_only)| !admin_only || role == UserRole::Admin)
        .map(|(item, _)| *item)
        .collect()
}

/// Holds the current page. Navigation never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: String,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: DEFAULT_PAGE.to_string(),
        }
    }
}

impl Router {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn navigate(&mut self, id: impl Into<String>) {
        self.current = id.into();
        tracing::debug! {page = %self.current, "Navigated"};
    }

    pub fn view(&self) -> View {
        View::from_id(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_entry_depends_on_role() {
        let ids = |role| menu(role).iter().map(|i| i.id).collect::<Vec<_>>();
        assert!(!ids(UserRole::Artist).contains(&"admin"));
        assert!(!ids(UserRole::Label).contains(&"admin"));
        assert_eq!(
            ids(UserRole::Admin),
            vec![
                "dashboard",
                "releases",
                "analytics",
                "catalog",
                "finance",
                "profile",
                "admin",
                "support"
            ]
        );
    }

    #[test]
    fn unbuilt_and_unknown_pages_are_placeholders() {
        let mut router = Router::default();
        assert_eq!(router.view(), View::Dashboard);
        for id in ["catalog", "profile", "support", "nope", ""] {
            router.navigate(id);
            assert_eq!(router.view(), View::Placeholder);
        }
        router.navigate("finance");
        assert_eq!(router.current(), "finance");
        assert_eq!(router.view(), View::Finance);
    }
}
