use shared::{InsightReport, UploadedFile};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::data_api;
use crate::components::atoms::select::Select;
use crate::pages::charts::file_options;
use crate::components::composite::insight_report_view::InsightReportView;
use crate::download;
use crate::notifications::{use_notifier, NotifyExt};

#[function_component(InsightsPage)]
pub fn insights_page() -> Html {
    let notifier = use_notifier();
    let files = use_state(Vec::<UploadedFile>::new);
    let selected = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);
    // The report is kept together with the file id it was produced for, so
    // a late response for a previously selected file is never rendered.
    let report = use_state(|| Option::<(String, InsightReport)>::None);

    {
        let notifier = notifier.clone();
        let files = files.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match data_api::get_history().await {
                    Ok(history) => files.set(history.files),
                    Err(error) => {
                        log::warn!("Fail to load files, error: {error}");
                        notifier.api_error(&error, "Failed to load your files");
                    }
                }
            });
        });
    }

    let on_file_change = {
        let notifier = notifier.clone();
        let selected = selected.clone();
        let loading = loading.clone();
        let report = report.clone();
        Callback::from(move |file_id: String| {
            selected.set(Some(file_id.clone()));
            loading.set(true);
            let notifier = notifier.clone();
            let loading = loading.clone();
            let report = report.clone();
            spawn_local(async move {
                match data_api::get_insights(&file_id).await {
                    Ok(insights) => report.set(Some((file_id, insights))),
                    Err(error) => {
                        log::warn!("Fail to load insights, file_id={file_id}, error: {error}");
                        notifier.api_error(&error, "Failed to generate insights");
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_export = {
        let notifier = notifier.clone();
        let files = files.clone();
        let report = report.clone();
        Callback::from(move |_: MouseEvent| {
            let Some((file_id, insights)) = report.as_ref() else {
                return;
            };
            let title = files
                .iter()
                .find(|file| &file.id == file_id)
                .map(|file| file.original_name.as_str())
                .unwrap_or("insights");
            let file_name = download::sanitize_file_name(title, "json");
            match serde_json::to_vec_pretty(insights) {
                Ok(bytes) => {
                    match download::save_bytes(&bytes, "application/json", &file_name) {
                        Ok(()) => notifier.success("Insights exported!"),
                        Err(error) => {
                            log::error!("Fail to export insights, error={error:?}");
                            notifier.error("Failed to export insights");
                        }
                    }
                }
                Err(error) => {
                    log::error!("Fail to serialize insights, error: {error}");
                    notifier.error("Failed to export insights");
                }
            }
        })
    };

    let report_html = match (&*selected, &*report) {
        _ if *loading => html! {
            <div class="text-center text-muted mt-4">{"Analyzing your data..."}</div>
        },
        (Some(selected_id), Some((report_id, insights))) if selected_id == report_id => html! {
            <div class="mt-4">
                <div class="d-flex justify-content-end mb-2">
                    <button class="btn btn-outline-secondary btn-sm" onclick={on_export}>
                        {"Export JSON"}
                    </button>
                </div>
                <InsightReportView report={insights.clone()} />
            </div>
        },
        _ => html! {},
    };

    html! {
        <main class="container mt-5">
            <h1 class="mb-1">{"AI Insights"}</h1>
            <p class="text-muted mb-4">{"Automated analysis of your uploaded data"}</p>
            <div class="card">
                <div class="card-body">
                    <label class="form-label" for="insights-file">{"File"}</label>
                    <Select
                        id="insights-file"
                        name="insights-file"
                        options={file_options(&files)}
                        selected={(*selected).clone()}
                        placeholder="Select a file"
                        on_change={on_file_change} />
                </div>
            </div>
            {report_html}
        </main>
    }
}
