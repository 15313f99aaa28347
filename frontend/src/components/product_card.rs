//! Editable sub-form for one draft product.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::form::ProductBatch;
use crate::types::{PriceField, ProductField};

/// Label + input pair bound to a string value.
#[component]
pub fn LabeledInput(
    label: &'static str,
    placeholder: &'static str,
    /// Form control name
    #[prop(into)]
    name: String,
    /// HTML input type
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field-label">
            {label}
            <input
                class="field-input"
                type=kind
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev: Event| {
                    let input: HtmlInputElement = event_target(&ev);
                    on_input.call(input.value());
                }
            />
        </label>
    }
}

/// All inputs of record `index`.
#[component]
pub fn ProductCard(batch: RwSignal<ProductBatch>, index: usize) -> impl IntoView {
    let text = move |field: ProductField, label: &'static str, placeholder: &'static str| {
        view! {
            <LabeledInput
                label=label
                placeholder=placeholder
                name={format!("{}-{}", field.key(), index)}
                required={!field.is_list()}
                value=Signal::derive(move || batch.with(|b| b.display_value(index, field)))
                on_input=move |value: String| batch.update(|b| b.set_field(index, field, &value))
            />
        }
    };

    let price = move |field: PriceField, label: &'static str| {
        view! {
            <LabeledInput
                label=label
                placeholder=label
                name={format!("price-{}-{}", field.key(), index)}
                kind="number"
                required=true
                value=Signal::derive(move || batch.with(|b| b.price_value(index, field)))
                on_input=move |value: String| batch.update(|b| b.set_price_field(index, field, &value))
            />
        }
    };

    view! {
        <div class="product-card">
            <div class="product-card-title">"Product #" {index + 1}</div>
            {text(ProductField::Title, "Title", "Title")}
            {text(ProductField::Name, "Name", "Name")}
            {text(ProductField::Desc, "Description", "Description")}
            {text(ProductField::Img, "Image URL", "Image URL")}
            {price(PriceField::Org, "Original Price")}
            {price(PriceField::Mrp, "MRP")}
            {price(PriceField::Off, "Discount Percentage")}
            {text(ProductField::Sizes, "Sizes (comma-separated)", "Sizes")}
            {text(ProductField::Category, "Categories (comma-separated)", "Categories")}
        </div>
    }
}
