use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="container text-center mt-5">
            <h1>{"404"}</h1>
            <p class="text-muted">{"This page does not exist."}</p>
            <Link<Route> classes="btn btn-outline-primary" to={Route::Landing}>{"Back home"}</Link<Route>>
        </main>
    }
}
