use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::LoginForm;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="container">
            <LoginForm />
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
