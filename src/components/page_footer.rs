use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <span>"© Food Wagen, Inc. All rights reserved."</span>
            <nav>
                <a href="#about">"About"</a>
                <a href="#contact">"Contact"</a>
                <a href="#privacy">"Privacy"</a>
            </nav>
        </footer>
    }
}
