use chrono::SecondsFormat;
use shared::UploadedFile;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FileAction {
    /// Navigation only; the target page owns its own file selection.
    Chart,
    Insights,
    Download(UploadedFile),
    Delete(UploadedFile),
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub files: Vec<UploadedFile>,
    pub on_action: Callback<FileAction>,
}

fn format_size(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0),
        None => "-".to_string(),
    }
}

fn render_file(file: &UploadedFile, on_action: &Callback<FileAction>) -> Html {
    let uploaded_at = file
        .created_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string());

    let navigate = |action: FileAction| {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(action.clone()))
    };
    let with_file = |action: fn(UploadedFile) -> FileAction| {
        let on_action = on_action.clone();
        let file = file.clone();
        Callback::from(move |_| on_action.emit(action(file.clone())))
    };

    html! {
        <tr>
            <td>{&file.original_name}</td>
            <td>{format_size(file.size)}</td>
            <td>{file.row_count.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}</td>
            <td>{uploaded_at}</td>
            <td class="text-end">
                <button class="btn btn-sm btn-outline-primary me-1" onclick={navigate(FileAction::Chart)}>
                    {"Chart"}
                </button>
                <button class="btn btn-sm btn-outline-primary me-1" onclick={navigate(FileAction::Insights)}>
                    {"Insights"}
                </button>
                <button class="btn btn-sm btn-outline-secondary me-1" onclick={with_file(FileAction::Download)}>
                    {"Report"}
                </button>
                <button class="btn btn-sm btn-outline-danger" onclick={with_file(FileAction::Delete)}>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

#[function_component(HistoryTable)]
pub fn history_table(props: &Props) -> Html {
    let rows = if props.files.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="text-center text-muted">{"No uploads yet"}</td>
            </tr>
        }
    } else {
        let files_html = props
            .files
            .iter()
            .map(|file| render_file(file, &props.on_action));
        html! { { for files_html } }
    };

    html! {
        <table class="table table-striped table-hover">
            <thead>
                <tr>
                    <th>{"File"}</th>
                    <th>{"Size"}</th>
                    <th>{"Rows"}</th>
                    <th>{"Uploaded At"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    }
}
