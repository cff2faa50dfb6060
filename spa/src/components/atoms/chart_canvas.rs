use std::cell::RefCell;
use std::rc::Rc;

use shared::ChartConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

// Chart.js is loaded as a script in index.html and treated as a black box:
// it receives the server's declarative config untouched.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> ChartJs;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartJs);
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub config: ChartConfig,
    /// Exposed so the owning page can snapshot the canvas for PNG export.
    pub canvas_ref: NodeRef,
}

#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &Props) -> Html {
    let instance: Rc<RefCell<Option<ChartJs>>> = use_mut_ref(|| None);

    {
        let canvas_ref = props.canvas_ref.clone();
        let instance = instance.clone();
        use_effect_with(props.config.clone(), move |config| {
            if let Some(previous) = instance.borrow_mut().take() {
                previous.destroy();
            }
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let json = serde_json::to_string(config).expect("Serialize should not fail");
                match js_sys::JSON::parse(&json) {
                    Ok(js_config) => {
                        *instance.borrow_mut() = Some(ChartJs::new(&canvas, &js_config));
                    }
                    Err(error) => {
                        log::error!("Fail to build chart config, error={error:?}");
                    }
                }
            }
            move || {
                if let Some(chart) = instance.borrow_mut().take() {
                    chart.destroy();
                }
            }
        });
    }

    html! {
        <div class="ratio ratio-16x9">
            <canvas ref={props.canvas_ref.clone()}></canvas>
        </div>
    }
}
