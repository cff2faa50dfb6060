use shared::LoginRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::auth_api;
use crate::components::composite::login_form::LoginForm;
use crate::notifications::{use_notifier, NotifyExt};
use crate::session::{use_session, SessionAction};
use crate::token;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let busy = use_state(|| false);

    let on_login = {
        let session = session.clone();
        let notifier = notifier.clone();
        let busy = busy.clone();
        Callback::from(move |request: LoginRequest| {
            let session = session.clone();
            let notifier = notifier.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match auth_api::login(&request).await {
                    Ok(auth) => {
                        token::set(&auth.token);
                        session.dispatch(SessionAction::Resolved {
                            user: auth.user,
                            token: auth.token,
                        });
                        notifier.success("Login successful! Welcome back!");
                        // The public-only guard redirects to the upload view
                        // as soon as the session resolves.
                    }
                    Err(error) => {
                        log::warn!("Login failed, error: {error}");
                        notifier.api_error(&error, "Login failed. Please check your credentials.");
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <main class="container mt-5">
            <LoginForm on_login={on_login} busy={*busy} />
        </main>
    }
}
