use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::data_api;
use crate::components::composite::file_picker::{FilePicked, FilePicker};
use crate::notifications::{use_notifier, NotifyExt};
use crate::router::Route;

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let notifier = use_notifier();
    let navigator = use_navigator().expect("Navigator should be available");
    let selected = use_state(|| Option::<web_sys::File>::None);
    let uploading = use_state(|| false);

    let on_pick = {
        let notifier = notifier.clone();
        let selected = selected.clone();
        Callback::from(move |picked: FilePicked| match picked {
            FilePicked::Accepted(file) => {
                notifier.info(format!("Selected file: {}", file.name()));
                selected.set(Some(file));
            }
            FilePicked::Rejected(name) => {
                selected.set(None);
                notifier.error(format!(
                    "{name} is not supported. Please upload an Excel file (.xlsx, .xls) or CSV file (.csv)."
                ));
            }
        })
    };

    let on_upload = {
        let notifier = notifier.clone();
        let navigator = navigator.clone();
        let selected = selected.clone();
        let uploading = uploading.clone();
        Callback::from(move |_| {
            let Some(file) = (*selected).clone() else {
                return;
            };
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let selected = selected.clone();
            let uploading = uploading.clone();
            uploading.set(true);
            spawn_local(async move {
                match data_api::upload(&file).await {
                    Ok(response) => {
                        notifier.success(format!(
                            "{} uploaded! {} rows processed",
                            file.name(),
                            response.preview.len()
                        ));
                        selected.set(None);
                        navigator.push(&Route::History);
                    }
                    Err(error) => {
                        log::warn!("Upload failed, error: {error}");
                        notifier.api_error(&error, "Failed to upload file. Please try again.");
                    }
                }
                uploading.set(false);
            });
        })
    };

    let selected_html = selected.as_ref().map(|file| {
        html! {
            <div class="card mt-4">
                <div class="card-body d-flex justify-content-between align-items-center">
                    <div>
                        <p class="mb-0 fw-medium">{file.name()}</p>
                        <small class="text-muted">
                            {format!("{:.2} MB", file.size() / 1024.0 / 1024.0)}
                        </small>
                    </div>
                    <button class="btn btn-primary" onclick={on_upload} disabled={*uploading}>
                        { if *uploading { "Uploading..." } else { "Upload" } }
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <main class="container mt-5">
            <h1 class="mb-1">{"Upload Spreadsheets"}</h1>
            <p class="text-muted mb-4">{"Upload your files for analysis and visualization"}</p>
            <FilePicker on_pick={on_pick} disabled={*uploading} />
            { for selected_html }
        </main>
    }
}
