use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let session = use_session();

    let call_to_action = if session.is_authenticated() {
        html! {
            <Link<Route> classes="btn btn-primary btn-lg" to={Route::Upload}>
                {"Go to your workspace"}
            </Link<Route>>
        }
    } else {
        html! {
            <>
                <Link<Route> classes="btn btn-primary btn-lg me-2" to={Route::Register}>
                    {"Get started"}
                </Link<Route>>
                <Link<Route> classes="btn btn-outline-secondary btn-lg" to={Route::Login}>
                    {"Login"}
                </Link<Route>>
            </>
        }
    };

    html! {
        <main class="container text-center mt-5">
            <h1 class="display-5 mb-3">{"Turn spreadsheets into answers"}</h1>
            <p class="lead text-muted mb-4">
                {"Upload Excel or CSV files, generate charts and get AI-powered insights."}
            </p>
            {call_to_action}
        </main>
    }
}
