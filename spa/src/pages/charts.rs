use std::rc::Rc;
use std::str::FromStr;

use shared::{ChartConfig, ChartType, GenerateChartRequest, UploadedFile};
use strum::IntoEnumIterator;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::data_api;
use crate::components::atoms::chart_canvas::ChartCanvas;
use crate::components::atoms::input_text::{InputText, InputType};
use crate::components::atoms::select::{Select, SelectOption};
use crate::download;
use crate::notifications::{use_notifier, NotifyExt};

const DEFAULT_MAX_ROWS: u32 = 100;

/// File choices keyed by id. Display names are labels only, so two uploads
/// sharing a name stay independently selectable.
pub fn file_options(files: &[UploadedFile]) -> Vec<SelectOption> {
    files
        .iter()
        .map(|file| SelectOption::new(&file.id, &file.original_name))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartBuilder {
    pub files: Vec<UploadedFile>,
    pub selected_file: Option<String>,
    pub columns: Vec<String>,
    pub columns_loading: bool,
    pub x_column: Option<String>,
    pub y_column: Option<String>,
    pub chart_type: ChartType,
    pub max_rows: u32,
    pub generating: bool,
    pub chart: Option<ChartConfig>,
}

impl ChartBuilder {
    pub fn new() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            ..Self::default()
        }
    }

    /// A chart can only be requested once a file and both axes are picked.
    pub fn can_generate(&self) -> bool {
        self.selected_file.is_some()
            && self.x_column.is_some()
            && self.y_column.is_some()
            && !self.generating
            && !self.columns_loading
    }

    pub fn selected_file_name(&self) -> Option<&str> {
        let id = self.selected_file.as_deref()?;
        self.files
            .iter()
            .find(|file| file.id == id)
            .map(|file| file.original_name.as_str())
    }
}

pub enum ChartMsg {
    FilesLoaded(Vec<UploadedFile>),
    FileSelected(String),
    /// Carries the file id of the request so a response arriving after the
    /// user switched files is dropped instead of rendered.
    ColumnsLoaded {
        file_id: String,
        columns: Vec<String>,
    },
    ColumnsFailed {
        file_id: String,
    },
    XColumnPicked(String),
    YColumnPicked(String),
    ChartTypePicked(ChartType),
    MaxRowsChanged(u32),
    GenerateStarted,
    ChartReady {
        file_id: String,
        config: ChartConfig,
    },
    ChartFailed,
}

impl Reducible for ChartBuilder {
    type Action = ChartMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChartMsg::FilesLoaded(files) => {
                next.files = files;
            }
            ChartMsg::FileSelected(file_id) => {
                next.selected_file = Some(file_id);
                next.columns = Vec::new();
                next.columns_loading = true;
                next.x_column = None;
                next.y_column = None;
                next.chart = None;
            }
            ChartMsg::ColumnsLoaded { file_id, columns } => {
                if next.selected_file.as_deref() == Some(file_id.as_str()) {
                    next.columns = columns;
                    next.columns_loading = false;
                }
            }
            ChartMsg::ColumnsFailed { file_id } => {
                if next.selected_file.as_deref() == Some(file_id.as_str()) {
                    next.columns_loading = false;
                }
            }
            ChartMsg::XColumnPicked(column) => {
                next.x_column = Some(column);
            }
            ChartMsg::YColumnPicked(column) => {
                next.y_column = Some(column);
            }
            ChartMsg::ChartTypePicked(chart_type) => {
                next.chart_type = chart_type;
            }
            ChartMsg::MaxRowsChanged(max_rows) => {
                next.max_rows = max_rows.max(1);
            }
            ChartMsg::GenerateStarted => {
                next.generating = true;
            }
            ChartMsg::ChartReady { file_id, config } => {
                next.generating = false;
                if next.selected_file.as_deref() == Some(file_id.as_str()) {
                    next.chart = Some(config);
                }
            }
            ChartMsg::ChartFailed => {
                next.generating = false;
            }
        }
        next.into()
    }
}

#[function_component(ChartsPage)]
pub fn charts_page() -> Html {
    let notifier = use_notifier();
    let state = use_reducer(ChartBuilder::new);
    let canvas_ref = use_node_ref();

    {
        let notifier = notifier.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match data_api::get_history().await {
                    Ok(history) => state.dispatch(ChartMsg::FilesLoaded(history.files)),
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
        let state = state.clone();
        Callback::from(move |file_id: String| {
            let notifier = notifier.clone();
            let state = state.clone();
            state.dispatch(ChartMsg::FileSelected(file_id.clone()));
            spawn_local(async move {
                match data_api::get_file_rows(&file_id).await {
                    Ok(rows) => state.dispatch(ChartMsg::ColumnsLoaded {
                        file_id,
                        columns: shared::column_names(&rows),
                    }),
                    Err(error) => {
                        log::warn!("Fail to load columns, file_id={file_id}, error: {error}");
                        notifier.api_error(&error, "Failed to load file columns");
                        state.dispatch(ChartMsg::ColumnsFailed { file_id });
                    }
                }
            });
        })
    };

    let on_x_change = {
        let state = state.clone();
        Callback::from(move |column: String| state.dispatch(ChartMsg::XColumnPicked(column)))
    };

    let on_y_change = {
        let state = state.clone();
        Callback::from(move |column: String| state.dispatch(ChartMsg::YColumnPicked(column)))
    };

    let on_type_change = {
        let state = state.clone();
        Callback::from(move |value: String| {
            if let Ok(chart_type) = ChartType::from_str(&value) {
                state.dispatch(ChartMsg::ChartTypePicked(chart_type));
            }
        })
    };

    let on_max_rows_change = {
        let state = state.clone();
        Callback::from(move |value: String| {
            if let Ok(max_rows) = u32::from_str(&value) {
                state.dispatch(ChartMsg::MaxRowsChanged(max_rows));
            }
        })
    };

    let on_generate = {
        let notifier = notifier.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if !state.can_generate() {
                return;
            }
            let (Some(file_id), Some(x_column), Some(y_column)) = (
                state.selected_file.clone(),
                state.x_column.clone(),
                state.y_column.clone(),
            ) else {
                return;
            };
            let request = GenerateChartRequest {
                file_id: file_id.clone(),
                chart_type: state.chart_type,
                x_column,
                y_column,
                max_rows: state.max_rows,
            };
            let notifier = notifier.clone();
            let state = state.clone();
            state.dispatch(ChartMsg::GenerateStarted);
            spawn_local(async move {
                match data_api::generate_chart(&request).await {
                    Ok(config) => {
                        state.dispatch(ChartMsg::ChartReady { file_id, config });
                        notifier.success("Chart generated successfully!");
                    }
                    Err(error) => {
                        log::warn!("Fail to generate chart, error: {error}");
                        notifier.api_error(&error, "Failed to generate chart");
                        state.dispatch(ChartMsg::ChartFailed);
                    }
                }
            });
        })
    };

    let on_export = {
        let notifier = notifier.clone();
        let state = state.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<web_sys::HtmlCanvasElement>() else {
                return;
            };
            let title = state.selected_file_name().unwrap_or("chart");
            let file_name = download::sanitize_file_name(title, "png");
            match download::save_canvas_png(&canvas, &file_name) {
                Ok(()) => notifier.success("Chart exported as PNG!"),
                Err(error) => {
                    log::error!("Fail to export chart, error={error:?}");
                    notifier.error("Failed to export chart");
                }
            }
        })
    };

    let type_options: Vec<SelectOption> = ChartType::iter()
        .map(|chart_type| SelectOption::new(chart_type.as_ref(), chart_type.label()))
        .collect();
    let column_options: Vec<SelectOption> = state
        .columns
        .iter()
        .map(SelectOption::plain)
        .collect();

    let columns_html = if state.columns_loading {
        html! { <p class="text-muted">{"Loading columns..."}</p> }
    } else if state.selected_file.is_some() && !state.columns.is_empty() {
        html! {
            <div class="row g-3">
                <div class="col-md-6">
                    <label class="form-label" for="x-column">{"X Axis"}</label>
                    <Select
                        id="x-column"
                        name="x-column"
                        options={column_options.clone()}
                        selected={state.x_column.clone()}
                        placeholder="Select a column"
                        on_change={on_x_change} />
                </div>
                <div class="col-md-6">
                    <label class="form-label" for="y-column">{"Y Axis"}</label>
                    <Select
                        id="y-column"
                        name="y-column"
                        options={column_options}
                        selected={state.y_column.clone()}
                        placeholder="Select a column"
                        on_change={on_y_change} />
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let chart_html = state.chart.as_ref().map(|config| {
        html! {
            <div class="card mt-4">
                <div class="card-body">
                    <div class="d-flex justify-content-end mb-2">
                        <button class="btn btn-outline-secondary btn-sm" onclick={on_export}>
                            {"Export PNG"}
                        </button>
                    </div>
                    <ChartCanvas config={config.clone()} canvas_ref={canvas_ref.clone()} />
                </div>
            </div>
        }
    });

    html! {
        <main class="container mt-5">
            <h1 class="mb-4">{"Charts"}</h1>
            <div class="card">
                <div class="card-body">
                    <div class="mb-3">
                        <label class="form-label" for="file">{"File"}</label>
                        <Select
                            id="file"
                            name="file"
                            options={file_options(&state.files)}
                            selected={state.selected_file.clone()}
                            placeholder="Select a file"
                            on_change={on_file_change} />
                    </div>
                    {columns_html}
                    <div class="row g-3 mt-1">
                        <div class="col-md-6">
                            <label class="form-label" for="chart-type">{"Chart Type"}</label>
                            <Select
                                id="chart-type"
                                name="chart-type"
                                options={type_options}
                                selected={Some(state.chart_type.as_ref().to_string())}
                                on_change={on_type_change} />
                        </div>
                        <div class="col-md-6">
                            <label class="form-label" for="max-rows">{"Max Rows"}</label>
                            <InputText
                                id="max-rows"
                                name="max-rows"
                                class={classes!("form-control")}
                                input_type={InputType::Number}
                                value={Some(state.max_rows.to_string())}
                                on_change={on_max_rows_change} />
                        </div>
                    </div>
                    <button
                        class="btn btn-primary mt-3"
                        onclick={on_generate}
                        disabled={!state.can_generate()}>
                        { if state.generating { "Generating..." } else { "Generate Chart" } }
                    </button>
                </div>
            </div>
            { for chart_html }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChartData;

    fn config(label: &str) -> ChartConfig {
        ChartConfig {
            kind: ChartType::Bar,
            data: ChartData {
                labels: vec![label.to_string()],
                datasets: Vec::new(),
            },
            options: None,
        }
    }

    fn reduce(state: ChartBuilder, msg: ChartMsg) -> ChartBuilder {
        Rc::new(state).reduce(msg).as_ref().clone()
    }

    #[test]
    fn generation_requires_file_and_both_axes() {
        let mut state = ChartBuilder::new();
        assert!(!state.can_generate());

        state = reduce(state, ChartMsg::FileSelected("f1".to_string()));
        assert!(!state.can_generate());

        state = reduce(
            state,
            ChartMsg::ColumnsLoaded {
                file_id: "f1".to_string(),
                columns: vec!["Month".to_string(), "Sales".to_string()],
            },
        );
        state = reduce(state, ChartMsg::XColumnPicked("Month".to_string()));
        assert!(!state.can_generate());

        state = reduce(state, ChartMsg::YColumnPicked("Sales".to_string()));
        assert!(state.can_generate());

        state = reduce(state, ChartMsg::GenerateStarted);
        assert!(!state.can_generate());
    }

    #[test]
    fn columns_from_a_previous_file_are_dropped() {
        let mut state = ChartBuilder::new();
        state = reduce(state, ChartMsg::FileSelected("f1".to_string()));
        state = reduce(state, ChartMsg::FileSelected("f2".to_string()));

        state = reduce(
            state,
            ChartMsg::ColumnsLoaded {
                file_id: "f1".to_string(),
                columns: vec!["Old".to_string()],
            },
        );
        assert!(state.columns.is_empty());
        assert!(state.columns_loading);

        state = reduce(
            state,
            ChartMsg::ColumnsLoaded {
                file_id: "f2".to_string(),
                columns: vec!["New".to_string()],
            },
        );
        assert_eq!(state.columns, vec!["New"]);
        assert!(!state.columns_loading);
    }

    #[test]
    fn chart_from_a_previous_file_is_dropped() {
        let mut state = ChartBuilder::new();
        state = reduce(state, ChartMsg::FileSelected("f1".to_string()));
        state = reduce(state, ChartMsg::FileSelected("f2".to_string()));

        state = reduce(
            state,
            ChartMsg::ChartReady {
                file_id: "f1".to_string(),
                config: config("stale"),
            },
        );
        assert!(state.chart.is_none());
        assert!(!state.generating);
    }

    #[test]
    fn switching_files_clears_axes_and_chart() {
        let mut state = ChartBuilder::new();
        state = reduce(state, ChartMsg::FileSelected("f1".to_string()));
        state = reduce(
            state,
            ChartMsg::ColumnsLoaded {
                file_id: "f1".to_string(),
                columns: vec!["Month".to_string(), "Sales".to_string()],
            },
        );
        state = reduce(state, ChartMsg::XColumnPicked("Month".to_string()));
        state = reduce(state, ChartMsg::YColumnPicked("Sales".to_string()));
        state = reduce(
            state,
            ChartMsg::ChartReady {
                file_id: "f1".to_string(),
                config: config("fresh"),
            },
        );
        assert!(state.chart.is_some());

        state = reduce(state, ChartMsg::FileSelected("f2".to_string()));
        assert!(state.x_column.is_none());
        assert!(state.y_column.is_none());
        assert!(state.chart.is_none());
        assert!(state.columns_loading);
    }

    #[test]
    fn files_sharing_a_name_remain_independently_selectable() {
        let file = |id: &str| UploadedFile {
            id: id.to_string(),
            original_name: "sales.xlsx".to_string(),
            size: None,
            row_count: None,
            created_at: None,
        };
        let files = vec![file("f1"), file("f2")];

        let options = file_options(&files);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "f1");
        assert_eq!(options[1].value, "f2");
        assert_eq!(options[0].label, options[1].label);

        // Picking the second entry reports its id, so the fetch that
        // follows targets f2 and its columns are accepted.
        let mut state = reduce(ChartBuilder::new(), ChartMsg::FilesLoaded(files));
        state = reduce(state, ChartMsg::FileSelected(options[1].value.clone()));
        assert_eq!(state.selected_file.as_deref(), Some("f2"));
        state = reduce(
            state,
            ChartMsg::ColumnsLoaded {
                file_id: "f2".to_string(),
                columns: vec!["Month".to_string()],
            },
        );
        assert_eq!(state.columns, vec!["Month"]);
    }

    #[test]
    fn max_rows_has_a_floor_of_one() {
        let state = reduce(ChartBuilder::new(), ChartMsg::MaxRowsChanged(0));
        assert_eq!(state.max_rows, 1);
    }
}
