use shared::Role;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::{use_session, Session};

/// Render decision of a guard for the current session state. Pure so the
/// three guard variants can be tested without a browser.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    Loading,
    Allow,
    Redirect(Route),
}

pub fn public_only_outcome(session: &Session) -> GuardOutcome {
    if session.loading {
        GuardOutcome::Loading
    } else if session.is_authenticated() {
        GuardOutcome::Redirect(Route::AUTHENTICATED_HOME)
    } else {
        GuardOutcome::Allow
    }
}

pub fn authenticated_outcome(session: &Session) -> GuardOutcome {
    if session.loading {
        GuardOutcome::Loading
    } else if session.is_authenticated() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(Route::Login)
    }
}

/// Authenticated plus role membership. An authenticated user without the
/// role is sent to the authenticated home route, never silently rendered.
pub fn role_outcome(session: &Session, role: Role) -> GuardOutcome {
    match authenticated_outcome(session) {
        GuardOutcome::Allow if !session.has_role(role) => {
            GuardOutcome::Redirect(Route::AUTHENTICATED_HOME)
        }
        outcome => outcome,
    }
}

fn render(outcome: GuardOutcome, children: &Html) -> Html {
    match outcome {
        GuardOutcome::Loading => html! {
            <div class="d-flex justify-content-center mt-5">
                <div class="spinner-border" role="status">
                    <span class="visually-hidden">{"Loading..."}</span>
                </div>
            </div>
        },
        GuardOutcome::Redirect(route) => html! { <Redirect<Route> to={route} /> },
        GuardOutcome::Allow => children.clone(),
    }
}

#[derive(PartialEq, Properties)]
pub struct GuardProps {
    pub children: Html,
}

#[function_component(PublicOnly)]
pub fn public_only(props: &GuardProps) -> Html {
    let session = use_session();
    render(public_only_outcome(&session), &props.children)
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    let session = use_session();
    render(authenticated_outcome(&session), &props.children)
}

#[derive(PartialEq, Properties)]
pub struct RoleGuardProps {
    pub role: Role,
    pub children: Html,
}

#[function_component(RequireRole)]
pub fn require_role(props: &RoleGuardProps) -> Html {
    let session = use_session();
    render(role_outcome(&session, props.role), &props.children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UserProfile;

    fn authenticated(role: Role) -> Session {
        Session {
            user: Some(UserProfile {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "a@b.com".to_string(),
                role,
                created_at: None,
                usage: None,
            }),
            token: Some("t1".to_string()),
            loading: false,
        }
    }

    fn anonymous() -> Session {
        Session {
            user: None,
            token: None,
            loading: false,
        }
    }

    #[test]
    fn all_guards_hold_while_loading() {
        let session = Session::booting();
        assert_eq!(public_only_outcome(&session), GuardOutcome::Loading);
        assert_eq!(authenticated_outcome(&session), GuardOutcome::Loading);
        assert_eq!(role_outcome(&session, Role::Admin), GuardOutcome::Loading);
    }

    #[test]
    fn public_only_bounces_authenticated_users() {
        assert_eq!(
            public_only_outcome(&authenticated(Role::Standard)),
            GuardOutcome::Redirect(Route::Upload)
        );
        assert_eq!(public_only_outcome(&anonymous()), GuardOutcome::Allow);
    }

    #[test]
    fn authenticated_guard_never_allows_anonymous() {
        assert_eq!(
            authenticated_outcome(&anonymous()),
            GuardOutcome::Redirect(Route::Login)
        );
        assert_eq!(
            authenticated_outcome(&authenticated(Role::Standard)),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn role_guard_redirects_insufficient_role_to_home() {
        assert_eq!(
            role_outcome(&authenticated(Role::Standard), Role::Admin),
            GuardOutcome::Redirect(Route::Upload)
        );
        assert_eq!(
            role_outcome(&authenticated(Role::Admin), Role::Admin),
            GuardOutcome::Allow
        );
        assert_eq!(
            role_outcome(&anonymous(), Role::Admin),
            GuardOutcome::Redirect(Route::Login)
        );
    }

    #[test]
    fn session_cleared_after_expiry_redirects_protected_routes() {
        let mut session = authenticated(Role::Standard);
        session.user = None;
        session.token = None;
        assert_eq!(
            authenticated_outcome(&session),
            GuardOutcome::Redirect(Route::Login)
        );
    }
}
