//! Batch product entry form.
//!
//! Renders one [`ProductCard`] per draft record, appends blank records on
//! demand and submits the whole list in a single request.

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::{NoticeBanner, ProductCard};
use crate::form::ProductBatch;
use crate::services::{BatchSubmitter, HttpProductsApi};
use crate::{ApiConfig, Notice};

#[component]
pub fn ProductBatchForm(
    /// Products API location; defaults to [`crate::BACKEND_URL`]
    #[prop(optional)]
    config: ApiConfig,
) -> impl IntoView {
    let batch = create_rw_signal(ProductBatch::new());
    let notice = create_rw_signal(None::<Notice>);
    let (is_submitting, set_is_submitting) = create_signal(false);

    let submitter = store_value(Rc::new(BatchSubmitter::new(HttpProductsApi::new(config))));

    let on_add = move |_| batch.update(|b| b.append_blank());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submitter = submitter.get_value();
        if submitter.is_in_flight() {
            log::warn!("⏳ Submission already in progress");
            return;
        }

        // The form keeps its data whatever the outcome.
        let records = batch.with_untracked(|b| b.records().to_vec());
        set_is_submitting.set(true);

        spawn_local(async move {
            let outcome = submitter.submit(&records).await;
            if let Some(n) = outcome.notice() {
                notice.set(Some(n));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="form-container">
            <h2 class="form-title">"Add Products"</h2>
            <NoticeBanner notice=notice/>
            <form class="product-form" on:submit=on_submit>
                <For
                    each=move || 0..batch.with(|b| b.len())
                    key=|index| *index
                    children=move |index| view! { <ProductCard batch=batch index=index/> }
                />
                <button type="button" class="btn btn-secondary" on:click=on_add>
                    "Add Another Product"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
