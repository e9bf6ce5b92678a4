use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use doppel_core::{AppConfig, DashboardView, MockDataset, NoticeQueue, Store, StoreState, ViewScope};

use crate::components::{DashboardLayout, NoticeHost};
use crate::context::AppScope;
use crate::pages::{
    Chat, Connect, DashboardHome, Interests, Landing, Mood, NotFound, Personality, Settings,
    Social,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/connect` - Account connection flow
/// - `/dashboard/...` - Dashboard views inside the sidebar layout
/// - anything else - Not found
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/connect")]
    Connect {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        DashboardHome {},
        #[route("/dashboard/personality")]
        Personality {},
        #[route("/dashboard/mood")]
        Mood {},
        #[route("/dashboard/social")]
        Social {},
        #[route("/dashboard/interests")]
        Interests {},
        #[route("/dashboard/chat")]
        Chat {},
        #[route("/dashboard/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Dashboard view this route renders, if any.
    pub fn dashboard_view(&self) -> Option<DashboardView> {
        match self {
            Route::DashboardHome {} => Some(DashboardView::Home),
            Route::Personality {} => Some(DashboardView::Personality),
            Route::Mood {} => Some(DashboardView::Mood),
            Route::Social {} => Some(DashboardView::Social),
            Route::Interests {} => Some(DashboardView::Interests),
            Route::Chat {} => Some(DashboardView::Chat),
            Route::Settings {} => Some(DashboardView::Settings),
            Route::Landing {} | Route::Connect {} | Route::NotFound { .. } => None,
        }
    }
}

impl From<DashboardView> for Route {
    fn from(view: DashboardView) -> Self {
        match view {
            DashboardView::Home => Route::DashboardHome {},
            DashboardView::Personality => Route::Personality {},
            DashboardView::Mood => Route::Mood {},
            DashboardView::Social => Route::Social {},
            DashboardView::Interests => Route::Interests {},
            DashboardView::Chat => Route::Chat {},
            DashboardView::Settings => Route::Settings {},
        }
    }
}

/// Root application component.
///
/// Owns the store and the notice queue and hands them, with the dataset and
/// config passed in at launch, to every page through context.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let dataset = use_context::<Arc<MockDataset>>();

    let store: Signal<Store> = use_signal(|| {
        Store::with_state(StoreState {
            current_mood: config.initial_mood,
            ..StoreState::default()
        })
    });
    let notices: Signal<NoticeQueue> = use_signal(|| NoticeQueue::new(config.notice_limit));

    use_context_provider(|| store);
    use_context_provider(|| notices);
    use_context_provider(|| AppScope(Rc::new(ViewScope::new())));

    use_hook(|| {
        tracing::info!(
            nodes = dataset.social.nodes.len(),
            responses = dataset.chat.responses.len(),
            mood = config.initial_mood,
            "Doppel ready"
        );
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        NoticeHost {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dashboard_view_has_a_route() {
        for view in DashboardView::ALL {
            let route: Route = view.path().parse().expect("dashboard path parses");
            assert_eq!(route, Route::from(view));
            assert_eq!(route.dashboard_view(), Some(view));
            assert_eq!(route.to_string(), view.path());
        }
    }

    #[test]
    fn test_top_level_routes() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Landing {}));
        assert_eq!("/connect".parse::<Route>().ok(), Some(Route::Connect {}));
        assert_eq!(Route::Connect {}.dashboard_view(), None);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/nowhere/at/all".parse().expect("catch-all parses");
        match route {
            Route::NotFound { segments } => {
                assert_eq!(segments, vec!["nowhere", "at", "all"]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
