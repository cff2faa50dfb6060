use chrono::SecondsFormat;
use shared::{ChangePasswordRequest, UpdateProfileRequest};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::auth_api;
use crate::components::atoms::input_text::{InputText, InputType};
use crate::notifications::{use_notifier, NotifyExt};
use crate::session::{use_session, SessionAction};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();

    // Hooks run unconditionally; the page only renders behind the auth
    // guard, so a missing user just renders nothing below.
    let initial = session.user.clone();
    let name = use_state(|| {
        initial
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    });
    let email = use_state(|| {
        initial
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    });
    let current_password = use_state(String::new);
    let new_password = use_state(String::new);
    let saving = use_state(|| false);
    let changing = use_state(|| false);

    let Some(user) = initial else {
        return html! {};
    };

    let on_save = {
        let session = session.clone();
        let notifier = notifier.clone();
        let name = name.clone();
        let email = email.clone();
        let saving = saving.clone();
        Callback::from(move |_: MouseEvent| {
            if name.is_empty() || email.is_empty() {
                return;
            }
            let request = UpdateProfileRequest {
                name: (*name).clone(),
                email: (*email).clone(),
            };
            let session = session.clone();
            let notifier = notifier.clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                match auth_api::update_profile(&request).await {
                    Ok(user) => {
                        session.dispatch(SessionAction::ProfileUpdated(user));
                        notifier.success("Profile updated successfully!");
                    }
                    Err(error) => {
                        log::warn!("Fail to update profile, error: {error}");
                        notifier.api_error(&error, "Failed to update profile");
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_change_password = {
        let notifier = notifier.clone();
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let changing = changing.clone();
        Callback::from(move |_: MouseEvent| {
            if current_password.is_empty() || new_password.is_empty() {
                return;
            }
            let request = ChangePasswordRequest {
                current_password: (*current_password).clone(),
                new_password: (*new_password).clone(),
            };
            let notifier = notifier.clone();
            let current_password = current_password.clone();
            let new_password = new_password.clone();
            let changing = changing.clone();
            changing.set(true);
            spawn_local(async move {
                match auth_api::change_password(&request).await {
                    Ok(()) => {
                        current_password.set(String::new());
                        new_password.set(String::new());
                        notifier.success("Password changed successfully!");
                    }
                    Err(error) => {
                        log::warn!("Fail to change password, error: {error}");
                        notifier.api_error(&error, "Failed to change password");
                    }
                }
                changing.set(false);
            });
        })
    };

    let member_since = user
        .created_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string());
    let usage = user.usage.clone().unwrap_or_default();

    let on_name = {
        let name = name.clone();
        Callback::from(move |value: String| name.set(value))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_current_password = {
        let current_password = current_password.clone();
        Callback::from(move |value: String| current_password.set(value))
    };
    let on_new_password = {
        let new_password = new_password.clone();
        Callback::from(move |value: String| new_password.set(value))
    };

    html! {
        <main class="container mt-5">
            <h1 class="mb-4">{"Profile"}</h1>
            <div class="row">
                <div class="col-md-6">
                    <div class="card mb-4">
                        <div class="card-header">{"Account"}</div>
                        <div class="card-body">
                            <div class="mb-3">
                                <label class="form-label" for="name">{"Name"}</label>
                                <InputText
                                    id="name"
                                    name="name"
                                    class={classes!("form-control")}
                                    value={Some((*name).clone())}
                                    on_change={on_name} />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="email">{"Email"}</label>
                                <InputText
                                    id="email"
                                    name="email"
                                    class={classes!("form-control")}
                                    input_type={InputType::Email}
                                    value={Some((*email).clone())}
                                    on_change={on_email} />
                            </div>
                            <button class="btn btn-primary" onclick={on_save} disabled={*saving}>
                                { if *saving { "Saving..." } else { "Save Changes" } }
                            </button>
                        </div>
                    </div>
                    <div class="card mb-4">
                        <div class="card-header">{"Change Password"}</div>
                        <div class="card-body">
                            <div class="mb-3">
                                <label class="form-label" for="current-password">
                                    {"Current Password"}
                                </label>
                                <InputText
                                    id="current-password"
                                    name="current-password"
                                    class={classes!("form-control")}
                                    input_type={InputType::Password}
                                    value={Some((*current_password).clone())}
                                    on_change={on_current_password} />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="new-password">{"New Password"}</label>
                                <InputText
                                    id="new-password"
                                    name="new-password"
                                    class={classes!("form-control")}
                                    input_type={InputType::Password}
                                    value={Some((*new_password).clone())}
                                    on_change={on_new_password} />
                            </div>
                            <button
                                class="btn btn-outline-primary"
                                onclick={on_change_password}
                                disabled={*changing}>
                                { if *changing { "Changing..." } else { "Change Password" } }
                            </button>
                        </div>
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="card">
                        <div class="card-header">{"Usage"}</div>
                        <div class="card-body">
                            <dl class="row mb-0">
                                <dt class="col-6">{"Role"}</dt>
                                <dd class="col-6">{user.role.as_ref()}</dd>
                                <dt class="col-6">{"Member Since"}</dt>
                                <dd class="col-6">{member_since}</dd>
                                <dt class="col-6">{"Files Uploaded"}</dt>
                                <dd class="col-6">{usage.total_uploads}</dd>
                                <dt class="col-6">{"Analyses Created"}</dt>
                                <dd class="col-6">{usage.total_analyses}</dd>
                                <dt class="col-6">{"Storage Used"}</dt>
                                <dd class="col-6">
                                    {usage.storage_used.clone().unwrap_or_else(|| "0 MB".to_string())}
                                </dd>
                            </dl>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}
