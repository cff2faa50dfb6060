use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

use crate::api::client::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    pub fn alert_class(&self) -> &'static str {
        match self {
            Level::Success => "alert-success",
            Level::Error => "alert-danger",
            Level::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub level: Level,
    pub message: String,
}

/// App-wide toast queue, provided next to the session context. Pushing is a
/// presentation concern layered on top of the stores; no store transition
/// depends on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notifications {
    pub items: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationsAction {
    Notify(Level, String),
    Dismiss(Uuid),
}

impl Reducible for Notifications {
    type Action = NotificationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut notifications = (*self).clone();
        match action {
            NotificationsAction::Notify(level, message) => {
                notifications.items.push(Notification {
                    id: Uuid::new_v4(),
                    level,
                    message,
                });
            }
            NotificationsAction::Dismiss(id) => {
                notifications.items.retain(|item| item.id != id);
            }
        }
        Rc::new(notifications)
    }
}

pub type NotificationsHandle = UseReducerHandle<Notifications>;

#[hook]
pub fn use_notifier() -> NotificationsHandle {
    use_context::<NotificationsHandle>().expect("Notifications context not found")
}

pub trait NotifyExt {
    fn success(&self, message: impl Into<String>);
    fn error(&self, message: impl Into<String>);
    fn info(&self, message: impl Into<String>);
    /// Toasts an API failure, preferring the server message over the
    /// fallback. Unauthorized is skipped here because the bootstrap hook
    /// already announced it.
    fn api_error(&self, error: &ApiError, fallback: &str);
}

impl NotifyExt for NotificationsHandle {
    fn success(&self, message: impl Into<String>) {
        self.dispatch(NotificationsAction::Notify(Level::Success, message.into()));
    }

    fn error(&self, message: impl Into<String>) {
        self.dispatch(NotificationsAction::Notify(Level::Error, message.into()));
    }

    fn info(&self, message: impl Into<String>) {
        self.dispatch(NotificationsAction::Notify(Level::Info, message.into()));
    }

    fn api_error(&self, error: &ApiError, fallback: &str) {
        if error.is_unauthorized() {
            return;
        }
        self.error(error.user_message(fallback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Notifications, action: NotificationsAction) -> Notifications {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn notify_and_dismiss() {
        let state = apply(
            Notifications::default(),
            NotificationsAction::Notify(Level::Error, "boom".to_string()),
        );
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].message, "boom");

        let id = state.items[0].id;
        let state = apply(state, NotificationsAction::Dismiss(id));
        assert!(state.items.is_empty());
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let state = apply(
            Notifications::default(),
            NotificationsAction::Notify(Level::Info, "hi".to_string()),
        );
        let state = apply(state, NotificationsAction::Dismiss(Uuid::new_v4()));
        assert_eq!(state.items.len(), 1);
    }
}
