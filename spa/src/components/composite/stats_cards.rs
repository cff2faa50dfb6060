use shared::AdminStats;
use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub stats: AdminStats,
}

fn render_card(title: &str, value: String, detail: String) -> Html {
    html! {
        <div class="col-md-3">
            <div class="card mb-3">
                <div class="card-body">
                    <h6 class="card-subtitle text-muted">{title}</h6>
                    <h3 class="card-title mb-1">{value}</h3>
                    <small class="text-muted">{detail}</small>
                </div>
            </div>
        </div>
    }
}

#[function_component(StatsCards)]
pub fn stats_cards(props: &Props) -> Html {
    let stats = &props.stats;
    let weekly = stats.weekly_stats.clone().unwrap_or_default();
    let active_share = if stats.total_users > 0 {
        (stats.active_users * 100) / stats.total_users
    } else {
        0
    };

    html! {
        <div class="row">
            { render_card(
                "Total Users",
                stats.total_users.to_string(),
                format!("+{} this week", weekly.new_users),
            ) }
            { render_card(
                "Active Users",
                stats.active_users.to_string(),
                format!("{active_share}% active"),
            ) }
            { render_card(
                "Total Files",
                stats.total_files.to_string(),
                format!("+{} this week", weekly.new_files),
            ) }
            { render_card(
                "Storage Used",
                stats.total_storage.clone().unwrap_or_else(|| "0 GB".to_string()),
                format!("{} analyses created", stats.total_analyses),
            ) }
        </div>
    }
}
