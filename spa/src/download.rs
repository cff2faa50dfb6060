use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlCanvasElement, Url};

/// Triggers a client-side "save as" through a temporary anchor element.
fn save_url(href: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(href);
    anchor.set_download(file_name);
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Saves already-fetched bytes as a file, entirely client-side.
pub fn save_bytes(bytes: &[u8], content_type: &str, file_name: &str) -> Result<(), JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let result = save_url(&url, file_name);
    Url::revoke_object_url(&url)?;
    result
}

/// Snapshots a canvas as a PNG download.
pub fn save_canvas_png(canvas: &HtmlCanvasElement, file_name: &str) -> Result<(), JsValue> {
    let data_url = canvas.to_data_url_with_type("image/png")?;
    save_url(&data_url, file_name)
}

/// File names derived from user-provided titles, restricted to a safe
/// character set.
pub fn sanitize_file_name(title: &str, extension: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::sanitize_file_name;

    #[test]
    fn file_names_are_lowercased_and_safe() {
        assert_eq!(
            sanitize_file_name("Sales 2024 - bar Chart", "png"),
            "sales_2024___bar_chart.png"
        );
        assert_eq!(sanitize_file_name("réport", "json"), "r_port.json");
    }
}
