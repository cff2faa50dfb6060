use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement};
use yew::prelude::*;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Client-side gate: only spreadsheet and CSV files ever reach the upload
/// endpoint. Case-insensitive on the extension.
pub fn is_supported_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(stem, extension)| {
            !stem.is_empty() && SUPPORTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilePicked {
    Accepted(web_sys::File),
    /// Carries the rejected file name for the validation notice.
    Rejected(String),
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_pick: Callback<FilePicked>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(FilePicker)]
pub fn file_picker(props: &Props) -> Html {
    let on_change = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |event: Event| {
            let target: EventTarget = event.target().expect("Fail to cast to EventTarget");
            let input = target.unchecked_into::<HtmlInputElement>();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if is_supported_file(&file.name()) {
                on_pick.emit(FilePicked::Accepted(file));
            } else {
                on_pick.emit(FilePicked::Rejected(file.name()));
                input.set_value("");
            }
        })
    };

    html! {
        <div>
            <input
                type="file"
                class="form-control"
                accept=".xlsx,.xls,.csv"
                disabled={props.disabled}
                onchange={on_change} />
            <div class="form-text">{"Supports .xlsx, .xls and .csv files"}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_supported_file;

    #[test]
    fn spreadsheet_and_csv_extensions_are_accepted() {
        assert!(is_supported_file("sales.xlsx"));
        assert!(is_supported_file("legacy.xls"));
        assert!(is_supported_file("export.csv"));
        assert!(is_supported_file("SHOUTY.CSV"));
        assert!(is_supported_file("archive.2024.xlsx"));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(!is_supported_file("report.pdf"));
        assert!(!is_supported_file("notes.txt"));
        assert!(!is_supported_file("noextension"));
        assert!(!is_supported_file(".xlsx"));
        assert!(!is_supported_file("csv"));
    }
}
