use chrono::SecondsFormat;
use shared::{Analysis, HistoryResponse};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::api::data_api;
use crate::components::composite::history_table::{FileAction, HistoryTable};
use crate::download;
use crate::notifications::{use_notifier, NotifyExt};
use crate::router::Route;

const REFRESH_MILLIS: u32 = 30_000;

fn render_analysis(analysis: &Analysis) -> Html {
    let created_at = analysis
        .created_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string());
    html! {
        <tr>
            <td>{analysis.name.clone().unwrap_or_else(|| analysis.id.clone())}</td>
            <td>{analysis.chart_type.map(|t| t.label()).unwrap_or("-")}</td>
            <td>{created_at}</td>
        </tr>
    }
}

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let notifier = use_notifier();
    let navigator = use_navigator().expect("Navigator should be available");
    let history = use_state(HistoryResponse::default);
    let loading = use_state(|| true);

    let load = {
        let notifier = notifier.clone();
        let history = history.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let notifier = notifier.clone();
            let history = history.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match data_api::get_history().await {
                    Ok(response) => history.set(response),
                    Err(error) => {
                        log::warn!("Fail to load history, error: {error}");
                        notifier.api_error(&error, "Failed to load history");
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| load.emit(()));
    }

    // Fixed-interval refresh, torn down with the component.
    {
        let load = load.clone();
        use_interval(move || load.emit(()), REFRESH_MILLIS);
    }

    let on_action = {
        let notifier = notifier.clone();
        let load = load.clone();
        Callback::from(move |action: FileAction| match action {
            FileAction::Chart => {
                navigator.push(&Route::Charts);
            }
            FileAction::Insights => {
                navigator.push(&Route::Insights);
            }
            FileAction::Download(file) => {
                let notifier = notifier.clone();
                spawn_local(async move {
                    match data_api::download_report(&file.id).await {
                        Ok(bytes) => {
                            let file_name =
                                download::sanitize_file_name(&file.original_name, "xlsx");
                            match download::save_bytes(
                                &bytes,
                                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                                &file_name,
                            ) {
                                Ok(()) => notifier.success("Report downloaded successfully!"),
                                Err(error) => {
                                    log::error!("Fail to save report, error={error:?}");
                                    notifier.error("Failed to save the report");
                                }
                            }
                        }
                        Err(error) => {
                            log::warn!("Download failed, error: {error}");
                            notifier.api_error(&error, "Failed to download report");
                        }
                    }
                });
            }
            FileAction::Delete(file) => {
                let notifier = notifier.clone();
                let load = load.clone();
                spawn_local(async move {
                    match data_api::delete_file(&file.id).await {
                        Ok(()) => {
                            notifier.success(format!("{} deleted", file.original_name));
                            load.emit(());
                        }
                        Err(error) => {
                            log::warn!("Delete failed, error: {error}");
                            notifier.api_error(&error, "Failed to delete file");
                        }
                    }
                });
            }
        })
    };

    let analyses_html = if history.analyses.is_empty() {
        html! {}
    } else {
        let rows = history.analyses.iter().map(render_analysis);
        html! {
            <>
                <h2 class="mt-4">{"Analyses"}</h2>
                <table class="table table-striped">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Chart"}</th>
                            <th>{"Created At"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows }
                    </tbody>
                </table>
            </>
        }
    };

    html! {
        <main class="container mt-5">
            <h1 class="mb-4">{"History"}</h1>
            if *loading {
                <div class="text-center text-muted">{"Loading..."}</div>
            } else {
                <HistoryTable files={history.files.clone()} on_action={on_action} />
                {analyses_html}
            }
        </main>
    }
}
