use uuid::Uuid;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::notifications::{use_notifier, Notification, NotificationsAction};

const AUTO_DISMISS_MILLIS: u32 = 5_000;

#[derive(PartialEq, Properties)]
struct ToastProps {
    notification: Notification,
    on_dismiss: Callback<Uuid>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let id = props.notification.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(id), AUTO_DISMISS_MILLIS);
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    let classes = classes!(
        "alert",
        props.notification.level.alert_class(),
        "alert-dismissible",
        "shadow-sm",
        "mb-2"
    );

    html! {
        <div class={classes} role="alert">
            {&props.notification.message}
            <button type="button" class="btn-close" onclick={on_close}></button>
        </div>
    }
}

#[function_component(ToastStack)]
pub fn toast_stack() -> Html {
    let notifications = use_notifier();

    let on_dismiss = {
        let notifications = notifications.clone();
        Callback::from(move |id: Uuid| {
            notifications.dispatch(NotificationsAction::Dismiss(id));
        })
    };

    let toasts = notifications.items.iter().map(|notification| {
        html! {
            <Toast key={notification.id.to_string()}
                notification={notification.clone()}
                on_dismiss={on_dismiss.clone()} />
        }
    });

    html! {
        <div class="position-fixed bottom-0 end-0 p-3" style="z-index: 1080; min-width: 20rem;">
            { for toasts }
        </div>
    }
}
