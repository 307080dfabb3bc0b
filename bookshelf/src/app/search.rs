//! The book search page: search by subject, pick a result and schedule its pickup

use bookshelf_components::{
    browser::alert,
    buttons::Button,
    cards::BookCard,
    icons::PageSpinner,
    pickup::PickupDialog,
    services::{create_pickup_schedule, get_books},
    CARD_GRID_CLASSES,
};
use bookshelf_shared::{
    pickup::{PendingSubmit, PickupModal},
    search::{BookSearch, SearchOutcome, SearchRequest},
    Book, ClientSettings,
};
use leptos::{either::Either, prelude::*};
use web_sys::KeyboardEvent;

use crate::app::{settings_or_default, ClientSettingsResource, TopLevelPosition};

#[component]
pub fn BookSearchPage() -> impl IntoView {
    let set_top_level_pos =
        use_context::<WriteSignal<TopLevelPosition>>().expect("App provides TopLevelPosition");
    *set_top_level_pos.write() = TopLevelPosition::Home;
    let client_settings =
        use_context::<ClientSettingsResource>().expect("App provides client settings");

    view! {
        <div class="container mx-auto p-6">
            <h1 class="text-3xl font-bold mb-6 text-center">"Book List"</h1>
            <Suspense fallback=|| view! { <PageSpinner /> }>
                {move || Suspend::new(async move {
                    let settings = settings_or_default(client_settings.await);
                    view! { <BookSearchView settings=settings /> }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn BookSearchView(settings: ClientSettings) -> impl IntoView {
    let ClientSettings {
        api_origin,
        edition_filter,
    } = settings;
    let search = RwSignal::new(BookSearch::default());
    let modal = RwSignal::new(PickupModal::default());

    let search_origin = api_origin.clone();
    let search_action = Action::new_local(move |request: &SearchRequest| {
        let request = request.clone();
        let origin = search_origin.clone();
        async move {
            let res = get_books(&origin, &request.subject).await;
            match search.try_update(|s| s.apply(request.seq, res)) {
                Some(SearchOutcome::Failed(e)) => {
                    leptos::logging::error!("Search for {:?} failed: {e}", request.subject);
                }
                Some(SearchOutcome::Stale) => {
                    leptos::logging::log!("Dropped stale results for {:?}", request.subject);
                }
                Some(SearchOutcome::Replaced(_)) | None => {}
            }
        }
    });
    let search_pending = search_action.pending();
    // typing only changes the subject, the grid follows the results
    let visible_books = Memo::new(move |_| {
        search.with(|s| s.visible_books(edition_filter).cloned().collect::<Vec<Book>>())
    });
    let run_search = move || {
        if let Some(request) = search.try_update(|s| s.search()) {
            search_action.dispatch(request);
        }
    };

    let submit_action = Action::new_local(move |pending: &PendingSubmit| {
        let PendingSubmit { borrow, request } = pending.clone();
        let origin = api_origin.clone();
        async move {
            let res = create_pickup_schedule(&origin, &request).await;
            if let Err(ref e) = res {
                leptos::logging::error!(
                    "Scheduling pickup of {:?} failed: {e}",
                    request.edition_number
                );
            }
            if let Some(notice) = modal.try_update(|m| m.finish_submit(borrow, res)) {
                alert(notice.message());
            }
        }
    });
    let submit_pending = submit_action.pending();
    let submit = move || match modal.with_untracked(|m| m.prepare_submit()) {
        Ok(pending) => {
            submit_action.dispatch(pending);
        }
        Err(e) => alert(&e.to_string()),
    };

    view! {
        // search bar
        <div class="mb-6 text-center">
            <input
                type="text"
                placeholder="Search by Subject"
                class="w-full sm:w-1/2 p-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || search.with(|s| s.subject().to_string())
                on:input=move |ev| search.update(|s| s.set_subject(event_target_value(&ev)))
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run_search();
                    }
                }
            />
        </div>
        <div class="text-center">
            <Button
                busy_reader=search_pending
                on_click=move |_| run_search()
                label="Search"
                busy_label="Searching..."
            />
        </div>

        // results
        <div class=CARD_GRID_CLASSES>
            {move || {
                let books = visible_books.get();
                if books.is_empty() {
                    Either::Left(
                        view! {
                            <div class="col-span-full flex justify-center items-center">
                                <p class="text-center text-lg">
                                    "No books found for the selected subject."
                                </p>
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        books
                            .into_iter()
                            .map(|book| {
                                view! {
                                    <BookCard
                                        book=book
                                        on_borrow=move |edition: String| {
                                            modal.update(|m| m.borrow(edition))
                                        }
                                    />
                                }
                            })
                            .collect_view(),
                    )
                }
            }}
        </div>

        <PickupDialog
            modal=modal
            submit_pending=submit_pending
            on_submit=move |_| submit()
        />
    }
}
