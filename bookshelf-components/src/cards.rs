//! Cards for the search results and the schedule listing

use bookshelf_shared::{datetime::INVALID_DATE, Book, Schedule};
use leptos::prelude::*;

use crate::{browser::locale_datetime, CARD_CLASSES, CONFIRM_BUTTON_CLASSES};

/// A single search result
///
/// Books without an edition number cannot be borrowed: the edition line is left out and the
/// borrow button is disabled.
#[component]
pub fn BookCard(book: Book, #[prop(into)] on_borrow: Callback<String>) -> impl IntoView {
    let authors = book.authors_line();
    let borrowable = book.has_edition();
    let edition = book.edition_number;
    let edition_line = borrowable.then(|| {
        view! {
            <p class="text-sm text-gray-600">
                <strong>"Edition Number:"</strong>" "{edition.clone()}
            </p>
        }
    });

    view! {
        <div class=CARD_CLASSES>
            <h2 class="text-lg font-semibold">{book.title}</h2>
            <p class="text-sm text-gray-600">
                <strong>"Authors:"</strong>" "{authors}
            </p>
            {edition_line}
            <div class="mt-4 flex flex-col items-start space-y-4">
                <button
                    class=CONFIRM_BUTTON_CLASSES
                    disabled=!borrowable
                    on:click=move |_| on_borrow.run(edition.clone())
                >
                    "Borrow"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ScheduleCard(schedule: Schedule) -> impl IntoView {
    let book = schedule.book.book;
    let pickup_time = schedule
        .date_time
        .as_ref()
        .map_or_else(|| INVALID_DATE.to_string(), locale_datetime);
    view! {
        <div class=CARD_CLASSES>
            <h2 class="text-xl font-semibold text-gray-800 mb-2">{book.title.clone()}</h2>
            <p class="text-sm text-gray-600">
                <strong>"Authors:"</strong>" "{book.authors_line()}
            </p>
            <p class="text-sm text-gray-600">
                <strong>"Edition Number:"</strong>" "{book.edition_number}
            </p>
            <p class="text-sm text-gray-600">
                <strong>"Pickup Date & Time:"</strong>" "{pickup_time}
            </p>
        </div>
    }
}
