use frontend::App;
use yew::Renderer;

fn main() {
    // Browser console logging for the wasm build.
    wasm_logger::init(wasm_logger::Config::default());

    Renderer::<App>::new().render();
}
