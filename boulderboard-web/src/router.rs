use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/submit")]
    Submit,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Top-level views the navigation shell switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Leaderboard,
    Submit,
}

impl Route {
    /// View rendered for this route; `None` for the not-found page.
    #[must_use]
    pub const fn view(&self) -> Option<View> {
        match self {
            Self::Home | Self::Leaderboard => Some(View::Leaderboard),
            Self::Submit => Some(View::Submit),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub const fn from_view(view: View) -> Self {
        match view {
            View::Leaderboard => Self::Leaderboard,
            View::Submit => Self::Submit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_and_leaderboard_share_a_view() {
        assert_eq!(Route::Home.view(), Some(View::Leaderboard));
        assert_eq!(Route::Leaderboard.view(), Some(View::Leaderboard));
        assert_eq!(Route::Submit.view(), Some(View::Submit));
        assert_eq!(Route::NotFound.view(), None);
    }

    #[test]
    fn views_round_trip_through_routes() {
        for view in [View::Leaderboard, View::Submit] {
            assert_eq!(Route::from_view(view).view(), Some(view));
        }
    }

    #[test]
    fn paths_match_navigation_links() {
        assert_eq!(Route::Submit.to_path(), "/submit");
        assert_eq!(Route::recognize("/leaderboard"), Some(Route::Leaderboard));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
