use shared::LoginRequest;
use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginRequest>,
    pub busy: bool,
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let state = use_state(|| LoginRequest {
        email: String::new(),
        password: String::new(),
    });

    let on_change_email = {
        let state = state.clone();
        Callback::from(move |input: String| {
            let mut data = (*state).clone();
            data.email = input;
            state.set(data);
        })
    };

    let on_change_password = {
        let state = state.clone();
        Callback::from(move |input: String| {
            let mut data = (*state).clone();
            data.password = input;
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let data = (*state).clone();
            if !data.email.is_empty() && !data.password.is_empty() {
                on_login.emit(data);
            }
        })
    };

    html! {
        <div class="row justify-content-center">
            <div class="col-md-4">
                <h2 class="text-center mb-4">{"Login"}</h2>
                <form onsubmit={on_submit}>
                    <div class="mb-3">
                        <label for="email" class="form-label">{"Email"}</label>
                        <InputText
                            id="email"
                            name="email"
                            placeholder="Enter your email"
                            class={"form-control"}
                            input_type={InputType::Email}
                            on_change={on_change_email} />
                    </div>
                    <div class="mb-3">
                        <label for="password" class="form-label">{"Password"}</label>
                        <InputText
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            class={"form-control"}
                            input_type={InputType::Password}
                            on_change={on_change_password} />
                    </div>
                    <div class="d-grid">
                        <button class="btn btn-primary" type="submit" disabled={props.busy}>
                            { if props.busy { "Logging in..." } else { "Login" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
