use shared::InsightReport;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub report: InsightReport,
}

fn render_list_card(title: &str, items: &[String]) -> Html {
    if items.is_empty() {
        return html! {};
    }
    let items_html = items.iter().map(|item| html! { <li>{item}</li> });
    html! {
        <div class="card mb-3">
            <div class="card-header">{title}</div>
            <div class="card-body">
                <ul class="mb-0">
                    { for items_html }
                </ul>
            </div>
        </div>
    }
}

fn format_stat(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

#[function_component(InsightReportView)]
pub fn insight_report_view(props: &Props) -> Html {
    let report = &props.report;

    let summary = report.summary.as_ref().map(|summary| {
        html! {
            <div class="card mb-3">
                <div class="card-header">{"Summary"}</div>
                <div class="card-body">
                    <p class="mb-0">{summary}</p>
                </div>
            </div>
        }
    });

    let statistics = report.column_statistics();
    let statistics_html = if statistics.is_empty() {
        html! {}
    } else {
        let rows = statistics.iter().map(|(column, stats)| {
            html! {
                <tr>
                    <td>{column}</td>
                    <td>{format_stat(stats.min)}</td>
                    <td>{format_stat(stats.max)}</td>
                    <td>{format_stat(stats.mean)}</td>
                    <td>{format_stat(stats.median)}</td>
                    <td>{format_stat(stats.std_dev)}</td>
                </tr>
            }
        });
        html! {
            <div class="card mb-3">
                <div class="card-header">{"Statistics"}</div>
                <div class="card-body">
                    <table class="table table-sm mb-0">
                        <thead>
                            <tr>
                                <th>{"Column"}</th>
                                <th>{"Min"}</th>
                                <th>{"Max"}</th>
                                <th>{"Mean"}</th>
                                <th>{"Median"}</th>
                                <th>{"Std Dev"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows }
                        </tbody>
                    </table>
                </div>
            </div>
        }
    };

    html! {
        <>
            { for summary }
            { render_list_card("Key Trends", &report.trends) }
            { render_list_card("Recommendations", &report.recommendations) }
            { render_list_card("Anomalies", &report.anomalies) }
            { render_list_card("Data Quality", &report.data_quality) }
            { statistics_html }
        </>
    }
}
