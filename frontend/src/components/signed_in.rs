use yew::prelude::*;

#[function_component(SignedIn)]
pub fn signed_in() -> Html {
    html! {
        <div class="ui message success">
            <h3>{"Signed in successfully"}</h3>
        </div>
    }
}
