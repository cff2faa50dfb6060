use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::api::{auth_api, client};
use crate::components::composite::navigation_bar::NavigationBar;
use crate::components::composite::toast_stack::ToastStack;
use crate::notifications::{Notifications, NotificationsHandle, NotifyExt};
use crate::router::{switch, Route};
use crate::session::{Session, SessionAction, SessionHandle};
use crate::token;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(Session::booting);
    let notifications = use_reducer(Notifications::default);
    let is_first = use_is_first_mount();

    if is_first {
        // Single app-wide reaction to a 401. Concurrent requests may all
        // fail; only the first one to take the stored token announces the
        // expiry.
        {
            let session = session.clone();
            let notifications = notifications.clone();
            client::on_unauthorized(Callback::from(move |_| {
                if token::take().is_some() {
                    log::warn!("Session expired, clearing credential");
                    session.dispatch(SessionAction::Expired);
                    notifications.error("Session expired. Please login again.");
                }
            }));
        }

        match token::get() {
            Some(stored) => {
                let session = session.clone();
                spawn_local(async move {
                    match auth_api::get_profile().await {
                        Ok(user) => {
                            log::info!("Session restored, email={}", user.email);
                            session.dispatch(SessionAction::Resolved {
                                user,
                                token: stored,
                            });
                        }
                        Err(error) => {
                            log::warn!("Fail to restore session, cleaning up. Error={error}");
                            token::clear();
                            session.dispatch(SessionAction::Unresolved);
                        }
                    }
                });
            }
            None => {
                session.dispatch(SessionAction::Unresolved);
            }
        }
    }

    let on_logout = {
        let session = session.clone();
        let notifications = notifications.clone();
        Callback::from(move |_| {
            log::info!("User logged out");
            token::clear();
            session.dispatch(SessionAction::LoggedOut);
            notifications.success("Logged out successfully!");
        })
    };

    html! {
        <ContextProvider<SessionHandle> context={session.clone()}>
            <ContextProvider<NotificationsHandle> context={notifications.clone()}>
                <BrowserRouter>
                    <NavigationBar on_logout={on_logout} />
                    <Switch<Route> render={switch} />
                    <ToastStack />
                </BrowserRouter>
            </ContextProvider<NotificationsHandle>>
        </ContextProvider<SessionHandle>>
    }
}
