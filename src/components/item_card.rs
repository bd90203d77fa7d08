//! Item Card Component
//!
//! Summary card for one listing, plus the star rating block it embeds.

use leptos::prelude::*;

use crate::models::Item;
use crate::rating::{review_label, stars};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let price = format!("${:.2}", item.price_value());
    let posted = item.date_posted.format("%Y-%m-%d").to_string();
    let categories = item.category_names();

    view! {
        <div class="item-card">
            <h3 class="item-card-title">{item.title}</h3>
            <p class="item-card-description">{item.description}</p>
            <p class="item-card-meta">
                <strong>"Price: "</strong>{price}" "
                <strong>"Posted by: "</strong>{item.posted_by}" "
                <strong>"Date: "</strong>{posted}
            </p>
            {(!categories.is_empty()).then(|| view! {
                <p class="item-card-categories">
                    <strong>"Categories: "</strong>{categories}
                </p>
            })}
            <StarRating rating=item.star_rating review_count=item.review_count />
        </div>
    }
}

/// `4.5/5 ★★★★½ 2 reviews`
#[component]
pub fn StarRating(rating: f64, review_count: u32) -> impl IntoView {
    view! {
        <div class="star-rating">
            <span class="star-rating-value">{format!("{:.1}/5", rating)}</span>
            <span class="star-rating-stars">{stars(rating)}</span>
            <span class="star-rating-count">{review_label(review_count)}</span>
        </div>
    }
}
