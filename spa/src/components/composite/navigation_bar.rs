use shared::Role;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_logout: Callback<()>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &Props) -> Html {
    let session = use_session();
    let route = use_route::<Route>();

    let nav_classes = |target: Route| {
        if route.as_ref() == Some(&target) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    let links = if session.is_authenticated() {
        html! {
            <>
                <li class="nav-item">
                    <Link<Route> classes={nav_classes(Route::Upload)} to={Route::Upload}>{"Upload"}</Link<Route>>
                </li>
                <li class="nav-item">
                    <Link<Route> classes={nav_classes(Route::Charts)} to={Route::Charts}>{"Charts"}</Link<Route>>
                </li>
                <li class="nav-item">
                    <Link<Route> classes={nav_classes(Route::History)} to={Route::History}>{"History"}</Link<Route>>
                </li>
                <li class="nav-item">
                    <Link<Route> classes={nav_classes(Route::Insights)} to={Route::Insights}>{"AI Insights"}</Link<Route>>
                </li>
                if session.has_role(Role::Admin) {
                    <li class="nav-item">
                        <Link<Route> classes={nav_classes(Route::Admin)} to={Route::Admin}>{"Admin"}</Link<Route>>
                    </li>
                }
            </>
        }
    } else {
        html! {}
    };

    let account = if session.is_authenticated() {
        let name = session
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default();
        html! {
            <>
                <Link<Route> classes="navbar-text me-3" to={Route::Profile}>{name}</Link<Route>>
                <button onclick={on_logout_click} class="btn btn-sm btn-outline-secondary">
                    {"Logout"}
                </button>
            </>
        }
    } else {
        html! {
            <>
                <Link<Route> classes="btn btn-sm btn-outline-primary me-2" to={Route::Login}>{"Login"}</Link<Route>>
                <Link<Route> classes="btn btn-sm btn-primary" to={Route::Register}>{"Register"}</Link<Route>>
            </>
        }
    };

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <Link<Route> classes="navbar-brand" to={Route::Landing}>{"Sheet Lens"}</Link<Route>>
                <div class="collapse navbar-collapse">
                    <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                        {links}
                    </ul>
                    {account}
                </div>
            </div>
        </nav>
    }
}
