use contracts::domain::a001_product::Product;
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

use super::view_model::StorefrontViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use crate::system::auth::context::use_auth;
use crate::system::settings::storage::load_store_settings;

#[component]
pub fn Storefront() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();
    let vm = StorefrontViewModel::new();
    vm.load_command();

    let on_add = Callback::new(move |producto_id: i64| {
        let authenticated = auth_state.get_untracked().is_authenticated();
        vm.add_to_cart_command(producto_id, authenticated, ctx);
    });

    view! {
        <PageFrame page_id="a001_product--custom" category=PAGE_CAT_CUSTOM>
            <div class="page__header storefront__header">
                <input
                    type="search"
                    class="storefront__search"
                    placeholder="Buscar productos..."
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
                <div class="storefront__categories">
                    {move || {
                        vm.categories()
                            .into_iter()
                            .map(|cat| {
                                let value = cat.clone();
                                let active = cat.clone();
                                view! {
                                    <button
                                        class="chip"
                                        class:chip-active=move || vm.category.get() == active
                                        on:click=move |_| vm.category.set(value.clone())
                                    >
                                        {cat}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="page__content">
                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <div class="loading">"Cargando productos..."</div> }
                >
                    {move || {
                        let products = vm.visible_products();
                        if products.is_empty() {
                            view! { <div class="empty-state">"No se encontraron productos"</div> }
                                .into_any()
                        } else {
                            view! {
                                <div class="product-grid">
                                    {products
                                        .into_iter()
                                        .map(|p| view! { <ProductCard product=p vm=vm on_add=on_add /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </Show>
            </div>

            {move || vm.selected.get().map(|p| view! { <ProductModal product=p vm=vm on_add=on_add /> })}

            <StoreFooter />
        </PageFrame>
    }
}

fn price_view(product: &Product) -> impl IntoView {
    match product.precio_oferta {
        Some(offer) => view! {
            <span class="price price--old">{format_money(product.precio)}</span>
            <span class="price price--offer">{format_money(offer)}</span>
        }
        .into_any(),
        None => view! { <span class="price">{format_money(product.precio)}</span> }.into_any(),
    }
}

#[component]
fn ProductCard(
    product: Product,
    vm: StorefrontViewModel,
    on_add: Callback<i64>,
) -> impl IntoView {
    let id = product.id;
    let in_stock = product.in_stock();
    let detail = product.clone();

    view! {
        <div class="product-card">
            <div class="product-card__image" on:click=move |_| vm.selected.set(Some(detail.clone()))>
                {match product.imagen.clone() {
                    Some(src) => view! { <img src=src alt=product.nombre.clone() /> }.into_any(),
                    None => icon("store"),
                }}
            </div>
            <div class="product-card__body">
                <span class="product-card__category">{product.categoria.clone().unwrap_or_default()}</span>
                <h3 class="product-card__name">{product.nombre.clone()}</h3>
                <div class="product-card__price">{price_view(&product)}</div>
                <button
                    class="btn-primary product-card__add"
                    disabled=move || !in_stock || vm.adding.get() == Some(id)
                    on:click=move |_| on_add.run(id)
                >
                    {icon("cart")}
                    {move || {
                        if !in_stock {
                            "Agotado"
                        } else if vm.adding.get() == Some(id) {
                            "Agregando..."
                        } else {
                            "Agregar"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProductModal(
    product: Product,
    vm: StorefrontViewModel,
    on_add: Callback<i64>,
) -> impl IntoView {
    let id = product.id;
    let in_stock = product.in_stock();

    view! {
        <div class="modal-overlay" on:click=move |_| vm.selected.set(None)>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3>{product.nombre.clone()}</h3>
                    <button class="icon-btn" on:click=move |_| vm.selected.set(None)>{icon("close")}</button>
                </div>
                <div class="modal__body">
                    <p>{product.descripcion.clone().unwrap_or_default()}</p>
                    <dl class="product-facts">
                        <dt>"Categoría"</dt>
                        <dd>{product.categoria.clone().unwrap_or_else(|| "-".into())}</dd>
                        <dt>"Marca"</dt>
                        <dd>{product.marca.clone().unwrap_or_else(|| "-".into())}</dd>
                        <dt>"Stock"</dt>
                        <dd>{product.stock.map(|s| s.to_string()).unwrap_or_else(|| "-".into())}</dd>
                    </dl>
                    <div class="product-card__price">{price_view(&product)}</div>
                </div>
                <div class="modal__footer">
                    <button
                        class="btn-primary"
                        disabled=!in_stock
                        on:click=move |_| {
                            on_add.run(id);
                            vm.selected.set(None);
                        }
                    >
                        "Agregar al carrito"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Contact block built from the stored store settings
#[component]
fn StoreFooter() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let email = auth_state.get_untracked().user_email();
    let settings = load_store_settings(email.as_deref());

    view! {
        <footer class="storefront__footer">
            <strong>{settings.nombre_tienda.clone()}</strong>
            <span>{settings.descripcion.clone()}</span>
            <span>{format!("{}, {}", settings.ciudad, settings.pais)}</span>
            {(!settings.email_contacto.is_empty()).then(|| view! { <span>{settings.email_contacto.clone()}</span> })}
            {(!settings.telefono.is_empty()).then(|| view! { <span>{settings.telefono.clone()}</span> })}
        </footer>
    }
}
