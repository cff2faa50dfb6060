use chrono::SecondsFormat;
use shared::AdminUser;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Suspend(AdminUser),
    Delete(AdminUser),
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub users: Vec<AdminUser>,
    pub on_action: Callback<UserAction>,
}

fn render_user(user: &AdminUser, on_action: &Callback<UserAction>) -> Html {
    let created_at = user
        .created_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string());

    let on_suspend = {
        let on_action = on_action.clone();
        let user = user.clone();
        Callback::from(move |_| on_action.emit(UserAction::Suspend(user.clone())))
    };
    let on_delete = {
        let on_action = on_action.clone();
        let user = user.clone();
        Callback::from(move |_| on_action.emit(UserAction::Delete(user.clone())))
    };

    html! {
        <tr>
            <td>{&user.name}</td>
            <td>{&user.email}</td>
            <td>{user.role.as_ref()}</td>
            <td>{user.status.clone().unwrap_or_else(|| "active".to_string())}</td>
            <td>{created_at}</td>
            <td class="text-end">
                <button class="btn btn-sm btn-outline-warning me-1" onclick={on_suspend}>
                    {"Suspend"}
                </button>
                <button class="btn btn-sm btn-outline-danger" onclick={on_delete}>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

#[function_component(UsersTable)]
pub fn users_table(props: &Props) -> Html {
    let rows = if props.users.is_empty() {
        html! {
            <tr>
                <td colspan="6" class="text-center text-muted">{"No users found"}</td>
            </tr>
        }
    } else {
        let users_html = props
            .users
            .iter()
            .map(|user| render_user(user, &props.on_action));
        html! { { for users_html } }
    };

    html! {
        <table class="table table-striped table-hover">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Email"}</th>
                    <th>{"Role"}</th>
                    <th>{"Status"}</th>
                    <th>{"Created At"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    }
}
