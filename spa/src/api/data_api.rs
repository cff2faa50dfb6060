use shared::{
    ChartConfig, GenerateChartRequest, GenerateChartResponse, HistoryResponse, InsightReport,
    RowObject, UploadResponse,
};
use web_sys::FormData;

use crate::api::client::{self, ApiError};

pub async fn upload(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().expect("FormData should be constructible");
    form.append_with_blob_and_filename("file", file, &file.name())
        .expect("Appending a file to FormData should not fail");
    // Content-Type is left to the browser so the multipart boundary is set.
    let response = client::post("/data/upload").body(form)?.send().await?;
    let uploaded: UploadResponse = client::expect_json(response).await?;
    log::info!(
        "Api upload file, name={name}, file_id={file_id}",
        name = file.name(),
        file_id = uploaded.file_id
    );
    Ok(uploaded)
}

pub async fn get_file_rows(file_id: &str) -> Result<Vec<RowObject>, ApiError> {
    let response = client::get(&format!("/data/file/{file_id}")).send().await?;
    log::info!("Api get file rows, file_id={file_id}");
    client::expect_data(response).await
}

pub async fn get_history() -> Result<HistoryResponse, ApiError> {
    let response = client::get("/data/history").send().await?;
    client::expect_json(response).await
}

pub async fn generate_chart(request: &GenerateChartRequest) -> Result<ChartConfig, ApiError> {
    let response = client::post("/data/generate-chart")
        .json(request)?
        .send()
        .await?;
    let generated: GenerateChartResponse = client::expect_json(response).await?;
    log::info!(
        "Api generate chart, file_id={file_id}, chart_type={chart_type}",
        file_id = request.file_id,
        chart_type = request.chart_type.as_ref()
    );
    Ok(generated.chart_config)
}

pub async fn get_insights(file_id: &str) -> Result<InsightReport, ApiError> {
    let response = client::get(&format!("/data/insights/{file_id}"))
        .send()
        .await?;
    log::info!("Api get insights, file_id={file_id}");
    client::expect_data(response).await
}

pub async fn download_report(file_id: &str) -> Result<Vec<u8>, ApiError> {
    let response = client::get(&format!("/data/download/{file_id}"))
        .send()
        .await?;
    let response = client::ensure_authorized(response)?;
    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: String::new(),
        });
    }
    log::info!("Api download report, file_id={file_id}");
    Ok(response.binary().await?)
}

pub async fn delete_file(file_id: &str) -> Result<(), ApiError> {
    let response = client::delete(&format!("/data/file/{file_id}"))
        .send()
        .await?;
    client::expect_ok(response).await?;
    log::info!("Api delete file, file_id={file_id}");
    Ok(())
}
