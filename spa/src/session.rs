use std::rc::Rc;

use shared::{Role, UserProfile};
use yew::prelude::*;

/// Single source of truth for "who is logged in", provided to the whole
/// component tree through a `ContextProvider`.
///
/// `user` and `token` are only ever installed together, after the server
/// confirmed the credential; `is_authenticated` is therefore true exactly
/// when both are present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Startup profile check, login or registration succeeded.
    Resolved { user: UserProfile, token: String },
    /// Startup check finished without a usable credential.
    Unresolved,
    ProfileUpdated(UserProfile),
    LoggedOut,
    /// A request came back 401; the credential is gone.
    Expired,
}

impl Session {
    /// Initial state while the persisted-token check is in flight. Guards
    /// must render a neutral placeholder until it resolves.
    pub fn booting() -> Self {
        Session {
            user: None,
            token: None,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user
            .as_ref()
            .map(|user| user.role == role)
            .unwrap_or(false)
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = (*self).clone();
        match action {
            SessionAction::Resolved { user, token } => {
                session.user = Some(user);
                session.token = Some(token);
                session.loading = false;
            }
            SessionAction::Unresolved => {
                session.user = None;
                session.token = None;
                session.loading = false;
            }
            SessionAction::ProfileUpdated(user) => {
                if session.user.is_some() {
                    session.user = Some(user);
                }
            }
            SessionAction::LoggedOut | SessionAction::Expired => {
                session.user = None;
                session.token = None;
                session.loading = false;
            }
        }
        Rc::new(session)
    }
}

pub type SessionHandle = UseReducerHandle<Session>;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("Session context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(email: &str, role: Role) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: email.to_string(),
            role,
            created_at: None,
            usage: None,
        }
    }

    fn apply(session: Session, action: SessionAction) -> Session {
        (*Rc::new(session).reduce(action)).clone()
    }

    #[test]
    fn booting_session_is_loading_and_unauthenticated() {
        let session = Session::booting();
        assert!(session.loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_then_logout_ends_unauthenticated() {
        let session = apply(
            Session::booting(),
            SessionAction::Resolved {
                user: profile("a@b.com", Role::Standard),
                token: "t1".to_string(),
            },
        );
        assert!(session.is_authenticated());
        assert_eq!(session.user.as_ref().unwrap().email, "a@b.com");

        let session = apply(session, SessionAction::LoggedOut);
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    #[test]
    fn failed_initialization_converges_to_settled_empty_state() {
        let session = apply(Session::booting(), SessionAction::Unresolved);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn expiry_is_idempotent() {
        let session = apply(
            Session::booting(),
            SessionAction::Resolved {
                user: profile("a@b.com", Role::Standard),
                token: "t1".to_string(),
            },
        );
        let once = apply(session, SessionAction::Expired);
        let twice = apply(once.clone(), SessionAction::Expired);
        assert_eq!(once, twice);
        assert!(!twice.is_authenticated());
    }

    #[test]
    fn profile_update_keeps_token_and_ignores_logged_out_state() {
        let session = apply(
            Session::booting(),
            SessionAction::Resolved {
                user: profile("a@b.com", Role::Standard),
                token: "t1".to_string(),
            },
        );
        let updated = apply(
            session,
            SessionAction::ProfileUpdated(profile("new@b.com", Role::Standard)),
        );
        assert_eq!(updated.user.as_ref().unwrap().email, "new@b.com");
        assert_eq!(updated.token.as_deref(), Some("t1"));

        let logged_out = apply(Session::default(), SessionAction::Unresolved);
        let still_out = apply(
            logged_out,
            SessionAction::ProfileUpdated(profile("x@b.com", Role::Standard)),
        );
        assert!(still_out.user.is_none());
        assert!(!still_out.is_authenticated());
    }

    #[test]
    fn role_checks_require_a_user() {
        let mut session = Session::default();
        assert!(!session.has_role(Role::Admin));
        session.user = Some(profile("a@b.com", Role::Admin));
        assert!(session.has_role(Role::Admin));
        assert!(!session.has_role(Role::Standard));
    }
}
