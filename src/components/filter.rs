//! Category filtering for the book grid.

use leptos::prelude::*;

use crate::types::BookCard;

/// Filter buttons plus the card grid they control.
///
/// "all" shows everything; otherwise a card stays visible only when its
/// category matches the active filter.
#[component]
pub fn FilterableGrid(books: Vec<BookCard>) -> impl IntoView {
	let mut categories: Vec<String> = books.iter().map(|b| b.category.clone()).collect();
	categories.sort();
	categories.dedup();

	let (active, set_active) = signal("all".to_string());

	let buttons = std::iter::once("all".to_string())
		.chain(categories)
		.map(|category| {
			let label = category.clone();
			let is_active = {
				let category = category.clone();
				move || active.get() == category
			};
			view! {
				<button
					class="filter-btn"
					class:active=is_active
					on:click=move |_| set_active.set(category.clone())
				>
					{label}
				</button>
			}
		})
		.collect_view();

	let cards = books
		.into_iter()
		.map(|book| {
			let BookCard {
				title,
				category,
				cover,
			} = book;
			let card_category = category.clone();
			let hidden = move || {
				let filter = active.get();
				filter != "all" && filter != card_category
			};
			let alt = title.clone();
			view! {
				<article class="book-card" class:hidden=hidden data-category=category>
					{cover.map(|src| view! { <img src=src alt=alt /> })}
					<h3>{title}</h3>
				</article>
			}
		})
		.collect_view();

	view! {
		<section class="books" id="books">
			<div class="filter-bar">{buttons}</div>
			<div class="book-grid">{cards}</div>
		</section>
	}
}
