use shared::{AdminAnalytics, AdminStats, AdminUser, TypeCount, UpdateUserRequest};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::admin_api;
use crate::components::atoms::input_text::InputText;
use crate::components::composite::stats_cards::StatsCards;
use crate::components::composite::users_table::{UserAction, UsersTable};
use crate::notifications::{use_notifier, NotifyExt};

const REFRESH_MILLIS: u32 = 30_000;

/// Case-insensitive match on name or email.
pub fn filter_users(users: &[AdminUser], query: &str) -> Vec<AdminUser> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&query)
                || user.email.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

fn render_count_list(title: &str, counts: &[TypeCount]) -> Html {
    let rows = counts.iter().map(|count| {
        html! {
            <tr>
                <td>{&count.label}</td>
                <td class="text-end">{count.count}</td>
            </tr>
        }
    });
    html! {
        <div class="col-md-6">
            <div class="card mb-3">
                <div class="card-header">{title}</div>
                <div class="card-body">
                    if counts.is_empty() {
                        <p class="text-muted mb-0">{"No data yet"}</p>
                    } else {
                        <table class="table table-sm mb-0">
                            <tbody>
                                { for rows }
                            </tbody>
                        </table>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let notifier = use_notifier();
    let users = use_state(Vec::<AdminUser>::new);
    let stats = use_state(AdminStats::default);
    let analytics = use_state(AdminAnalytics::default);
    let search = use_state(String::new);

    // The three dashboard sections are independent; each loads on its own
    // so one failing endpoint does not blank the others.
    let load = {
        let notifier = notifier.clone();
        let users = users.clone();
        let stats = stats.clone();
        let analytics = analytics.clone();
        Callback::from(move |_: ()| {
            {
                let notifier = notifier.clone();
                let users = users.clone();
                spawn_local(async move {
                    match admin_api::get_users().await {
                        Ok(loaded) => users.set(loaded),
                        Err(error) => {
                            log::warn!("Fail to load users, error: {error}");
                            notifier.api_error(&error, "Failed to load users");
                        }
                    }
                });
            }
            {
                let notifier = notifier.clone();
                let stats = stats.clone();
                spawn_local(async move {
                    match admin_api::get_stats().await {
                        Ok(loaded) => stats.set(loaded),
                        Err(error) => {
                            log::warn!("Fail to load stats, error: {error}");
                            notifier.api_error(&error, "Failed to load statistics");
                        }
                    }
                });
            }
            {
                let notifier = notifier.clone();
                let analytics = analytics.clone();
                spawn_local(async move {
                    match admin_api::get_analytics().await {
                        Ok(loaded) => analytics.set(loaded),
                        Err(error) => {
                            log::warn!("Fail to load analytics, error: {error}");
                            notifier.api_error(&error, "Failed to load analytics");
                        }
                    }
                });
            }
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| load.emit(()));
    }

    {
        let load = load.clone();
        use_interval(move || load.emit(()), REFRESH_MILLIS);
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };

    let on_user_action = {
        let notifier = notifier.clone();
        let load = load.clone();
        Callback::from(move |action: UserAction| {
            let notifier = notifier.clone();
            let load = load.clone();
            match action {
                UserAction::Suspend(user) => {
                    spawn_local(async move {
                        let request = UpdateUserRequest {
                            status: Some("suspended".to_string()),
                            role: None,
                        };
                        match admin_api::update_user(&user.id, &request).await {
                            Ok(()) => {
                                notifier.success(format!("{} suspended", user.name));
                                load.emit(());
                            }
                            Err(error) => {
                                log::warn!("Fail to suspend user, error: {error}");
                                notifier.api_error(&error, "Failed to suspend user");
                            }
                        }
                    });
                }
                UserAction::Delete(user) => {
                    spawn_local(async move {
                        match admin_api::delete_user(&user.id).await {
                            Ok(()) => {
                                notifier.success(format!("{} deleted", user.name));
                                load.emit(());
                            }
                            Err(error) => {
                                log::warn!("Fail to delete user, error: {error}");
                                notifier.api_error(&error, "Failed to delete user");
                            }
                        }
                    });
                }
            }
        })
    };

    let filtered = filter_users(&users, &search);

    html! {
        <main class="container mt-5">
            <h1 class="mb-4">{"Admin Panel"}</h1>
            <StatsCards stats={(*stats).clone()} />
            <div class="row">
                { render_count_list("Uploads Per Day", &analytics.uploads_per_day) }
                { render_count_list("Popular Chart Types", &analytics.popular_chart_types) }
            </div>
            <div class="card">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <span>{"Users"}</span>
                    <InputText
                        id="user-search"
                        name="user-search"
                        class={classes!("form-control", "w-auto")}
                        placeholder="Search by name or email"
                        value={Some((*search).clone())}
                        on_change={on_search} />
                </div>
                <div class="card-body">
                    <UsersTable users={filtered} on_action={on_user_action} />
                </div>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> AdminUser {
        AdminUser {
            id: email.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Default::default(),
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let users = vec![
            user("Alice", "alice@corp.com"),
            user("Bob", "bob@other.org"),
        ];

        assert_eq!(filter_users(&users, "").len(), 2);
        assert_eq!(filter_users(&users, "  ").len(), 2);

        let by_name = filter_users(&users, "ALICE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice");

        let by_email = filter_users(&users, "other.org");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Bob");

        assert!(filter_users(&users, "carol").is_empty());
    }
}
