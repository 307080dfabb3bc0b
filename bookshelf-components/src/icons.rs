use leptos::prelude::*;

#[component]
pub fn SpinIcon(#[prop(default = "animate-spin h-5 w-5")] inner_class: &'static str) -> impl IntoView {
    view! {
        <svg class=inner_class xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" aria-hidden="true">
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
        </svg>
    }
}

/// Large spinner shown while a whole page is loading
#[component]
pub fn PageSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <SpinIcon inner_class="animate-spin h-16 w-16 text-blue-500" />
        </div>
    }
}
