//! Catalogue of the dashboard's child views.
//!
//! The router owns navigation; this is the metadata the sidebar needs to
//! list the views in order, label them and tell which one is active.

/// Root path of the dashboard layout
pub const DASHBOARD_ROOT: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardView {
    Home,
    Personality,
    Mood,
    Social,
    Interests,
    Chat,
    Settings,
}

impl DashboardView {
    /// Sidebar order.
    pub const ALL: [DashboardView; 7] = [
        DashboardView::Home,
        DashboardView::Personality,
        DashboardView::Mood,
        DashboardView::Social,
        DashboardView::Interests,
        DashboardView::Chat,
        DashboardView::Settings,
    ];

    /// Path segment below `/dashboard`; empty for the index view.
    pub fn segment(&self) -> &'static str {
        match self {
            DashboardView::Home => "",
            DashboardView::Personality => "personality",
            DashboardView::Mood => "mood",
            DashboardView::Social => "social",
            DashboardView::Interests => "interests",
            DashboardView::Chat => "chat",
            DashboardView::Settings => "settings",
        }
    }

    pub fn path(&self) -> String {
        match self.segment() {
            "" => DASHBOARD_ROOT.to_string(),
            segment => format!("{}/{}", DASHBOARD_ROOT, segment),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Home => "Dashboard",
            DashboardView::Personality => "Personality",
            DashboardView::Mood => "Mood & Trends",
            DashboardView::Social => "Social Graph",
            DashboardView::Interests => "Interests",
            DashboardView::Chat => "Doppelgänger Chat",
            DashboardView::Settings => "Settings",
        }
    }

    /// Icon glyph shown beside the label.
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardView::Home => "▦",
            DashboardView::Personality => "◎",
            DashboardView::Mood => "↗",
            DashboardView::Social => "⚇",
            DashboardView::Interests => "✦",
            DashboardView::Chat => "✉",
            DashboardView::Settings => "⚙",
        }
    }

    /// Match a full path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        let rest = path.strip_prefix(DASHBOARD_ROOT)?;
        let segment = match rest {
            "" => "",
            _ => rest.strip_prefix('/')?,
        };
        Self::ALL.into_iter().find(|view| view.segment() == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(DashboardView::Home.path(), "/dashboard");
        assert_eq!(DashboardView::Social.path(), "/dashboard/social");
    }

    #[test]
    fn test_from_path_roundtrip() {
        for view in DashboardView::ALL {
            assert_eq!(DashboardView::from_path(&view.path()), Some(view));
        }
    }

    #[test]
    fn test_from_path_variants() {
        assert_eq!(DashboardView::from_path("/dashboard/"), Some(DashboardView::Home));
        assert_eq!(DashboardView::from_path("/dashboard/mood/"), Some(DashboardView::Mood));
        assert_eq!(DashboardView::from_path("/dashboard/moods"), None);
        assert_eq!(DashboardView::from_path("/dashboardx"), None);
        assert_eq!(DashboardView::from_path("/"), None);
        assert_eq!(DashboardView::from_path("/connect"), None);
    }

    #[test]
    fn test_sidebar_labels() {
        let labels: Vec<&str> = DashboardView::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels[0], "Dashboard");
        assert_eq!(labels[2], "Mood & Trends");
        assert_eq!(labels[5], "Doppelgänger Chat");
    }
}
