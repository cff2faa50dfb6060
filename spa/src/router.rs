use yew::prelude::*;
use yew_router::prelude::*;

use shared::Role;

use crate::components::guards::{PublicOnly, RequireAuth, RequireRole};
use crate::pages::{
    admin::AdminPage, charts::ChartsPage, history::HistoryPage, insights::InsightsPage,
    landing::LandingPage, login::LoginPage, not_found::NotFound, profile::ProfilePage,
    register::RegisterPage, upload::UploadPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/upload")]
    Upload,
    #[at("/charts")]
    Charts,
    #[at("/history")]
    History,
    #[at("/insights")]
    Insights,
    #[at("/profile")]
    Profile,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where an already-authenticated user lands when bounced off a
    /// public-only page, and after login.
    pub const AUTHENTICATED_HOME: Route = Route::Upload;
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <LandingPage /> },
        Route::Login => html! { <PublicOnly><LoginPage /></PublicOnly> },
        Route::Register => html! { <PublicOnly><RegisterPage /></PublicOnly> },
        Route::Upload => html! { <RequireAuth><UploadPage /></RequireAuth> },
        Route::Charts => html! { <RequireAuth><ChartsPage /></RequireAuth> },
        Route::History => html! { <RequireAuth><HistoryPage /></RequireAuth> },
        Route::Insights => html! { <RequireAuth><InsightsPage /></RequireAuth> },
        Route::Profile => html! { <RequireAuth><ProfilePage /></RequireAuth> },
        Route::Admin => html! {
            <RequireRole role={Role::Admin}><AdminPage /></RequireRole>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}
