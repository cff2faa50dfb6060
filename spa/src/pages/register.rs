use shared::RegisterRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::auth_api;
use crate::components::composite::register_form::RegisterForm;
use crate::notifications::{use_notifier, NotifyExt};
use crate::session::{use_session, SessionAction};
use crate::token;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let busy = use_state(|| false);

    let on_register = {
        let session = session.clone();
        let notifier = notifier.clone();
        let busy = busy.clone();
        Callback::from(move |request: RegisterRequest| {
            let session = session.clone();
            let notifier = notifier.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match auth_api::register(&request).await {
                    Ok(auth) => {
                        token::set(&auth.token);
                        session.dispatch(SessionAction::Resolved {
                            user: auth.user,
                            token: auth.token,
                        });
                        notifier.success("Registration successful! Welcome aboard!");
                    }
                    Err(error) => {
                        log::warn!("Registration failed, error: {error}");
                        notifier.api_error(&error, "Registration failed. Please try again.");
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <main class="container mt-5">
            <RegisterForm on_register={on_register} busy={*busy} />
        </main>
    }
}
