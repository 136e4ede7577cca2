use frontend::App;
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting wheel of fortune");

    Renderer::<App>::new().render();
}
