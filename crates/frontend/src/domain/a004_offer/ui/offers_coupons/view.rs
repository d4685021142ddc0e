use contracts::domain::a004_offer::{Offer, OfferForm};
use contracts::domain::a005_coupon::{Coupon, CouponForm, DISCOUNT_FIXED, DISCOUNT_PERCENT};
use contracts::shared::date_utils::display_datetime;
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

use super::view_model::{OffersCouponsViewModel, OffersTab};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;

fn when(value: &str) -> String {
    display_datetime(value, "N/A")
}

#[component]
pub fn OffersCouponsPage() -> impl IntoView {
    let vm = OffersCouponsViewModel::new();

    Effect::new(move |_| {
        let tab = vm.tab.get();
        vm.load_tab_command(tab);
    });

    let tab_button = move |tab: OffersTab, icon_name: &'static str, label: &'static str| {
        view! {
            <button
                class="tab"
                class:tab-active=move || vm.tab.get() == tab
                on:click=move |_| vm.tab.set(tab)
            >
                {icon(icon_name)}
                {label}
            </button>
        }
    };

    view! {
        <PageFrame page_id="a004_offer--custom" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div>
                    <h2>{icon("offers")} " Ofertas y Cupones"</h2>
                    <p class="page__subtitle">
                        "Gestiona ofertas inteligentes y cupones de descuento para tus clientes"
                    </p>
                </div>
            </div>

            <div class="tabs">
                {tab_button(OffersTab::Offers, "offers", " Ofertas")}
                {tab_button(OffersTab::Coupons, "sparkles", " Cupones")}
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="error-message" on:click=move |_| vm.error.set(None)>{e}</div>
            })}
            {move || vm.notice.get().map(|n| view! {
                <div class="success-message" on:click=move |_| vm.notice.set(None)>{n}</div>
            })}

            <div class="page__content">
                {move || match vm.tab.get() {
                    OffersTab::Offers => view! { <OffersTabContent vm=vm /> }.into_any(),
                    OffersTab::Coupons => view! { <CouponsTabContent vm=vm /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn OffersTabContent(vm: OffersCouponsViewModel) -> impl IntoView {
    view! {
        <div class="toolbar">
            <button class="btn-ia" disabled=move || vm.loading.get() on:click=move |_| vm.load_suggestions_command()>
                {icon("sparkles")} " Sugerencias de IA"
            </button>
            <button class="btn-primary" on:click=move |_| vm.new_offer_command()>
                {icon("plus")} " Nueva Oferta"
            </button>
        </div>

        <SuggestionsPanel vm=vm />

        {move || vm.offer_form.get().is_some().then(|| view! { <OfferFormCard vm=vm /> })}

        <div class="list-section">
            <div class="list-section__header">
                <h3>"Todas las Ofertas"</h3>
                <button class="btn-link" title="Actualizar lista" on:click=move |_| vm.load_offers_command()>
                    {icon("refresh")} " Actualizar"
                </button>
            </div>
            {move || {
                if vm.loading.get() {
                    return view! { <div class="loading">"Cargando..."</div> }.into_any();
                }
                let offers = vm.offers.get();
                if offers.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No hay ofertas creadas"</p>
                            <p class="empty-hint">"Crea una nueva oferta usando el botón de arriba"</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="card-grid">
                        {offers.into_iter().map(|offer| view! { <OfferCard offer=offer /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn SuggestionsPanel(vm: OffersCouponsViewModel) -> impl IntoView {
    move || {
        vm.suggestions.get().map(|suggestions| {
            let nothing = suggestions.sugerencias_productos.is_empty()
                && suggestions.ofertas_temporada.is_empty();
            view! {
                <div class="suggestions-panel">
                    <div class="suggestions-panel__header">
                        <h3>{icon("sparkles")} " Sugerencias de Inteligencia Artificial"</h3>
                        <button class="icon-btn" on:click=move |_| vm.suggestions.set(None)>{icon("close")}</button>
                    </div>

                    {(!suggestions.ofertas_temporada.is_empty()).then(|| view! {
                        <div class="suggestions-panel__section">
                            <h4>"Ofertas de Temporada"</h4>
                            <div class="card-grid">
                                {suggestions.ofertas_temporada.iter().cloned().map(|seasonal| {
                                    let picked = seasonal.clone();
                                    view! {
                                        <div class="suggestion-card suggestion-card--season">
                                            <h5>{seasonal.nombre.clone()}</h5>
                                            <p>{seasonal.descripcion.clone()}</p>
                                            <div class="suggestion-card__info">
                                                <span class="discount">{format!("{}% OFF", seasonal.descuento_sugerido)}</span>
                                                <span class="dates">
                                                    {format!(
                                                        "{} - {}",
                                                        when(&seasonal.fecha_sugerida_inicio),
                                                        when(&seasonal.fecha_sugerida_fin),
                                                    )}
                                                </span>
                                            </div>
                                            <button class="btn-secondary" on:click=move |_| vm.use_seasonal_suggestion(&picked)>
                                                "Usar Sugerencia"
                                            </button>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    })}

                    {(!suggestions.sugerencias_productos.is_empty()).then(|| view! {
                        <div class="suggestions-panel__section">
                            <h4>"Productos Sugeridos para Oferta"</h4>
                            <div class="card-grid">
                                {suggestions.sugerencias_productos.iter().cloned().map(|suggestion| {
                                    let picked = suggestion.clone();
                                    view! {
                                        <div class="suggestion-card suggestion-card--product">
                                            <h5>{suggestion.producto.nombre.clone()}</h5>
                                            <p class="reason">{suggestion.razon.clone()}</p>
                                            {suggestion.categoria.clone().map(|c| view! {
                                                <span class="category">{c.nombre}</span>
                                            })}
                                            <div class="suggestion-card__discount">
                                                "Descuento sugerido: "
                                                <strong>{format!("{}%", suggestion.descuento_sugerido)}</strong>
                                            </div>
                                            <button class="btn-secondary" on:click=move |_| vm.use_product_suggestion(&picked)>
                                                "Usar Sugerencia"
                                            </button>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    })}

                    {nothing.then(|| view! {
                        <div class="empty-state">"No hay sugerencias disponibles en este momento"</div>
                    })}
                </div>
            }
        })
    }
}

#[component]
fn OfferFormCard(vm: OffersCouponsViewModel) -> impl IntoView {
    let field = move |read: fn(&OfferForm) -> String| {
        move || vm.offer_form.with(|f| f.as_ref().map(read).unwrap_or_default())
    };
    let from_ai = move || vm.offer_form.with(|f| f.as_ref().map(|f| f.basada_en_ia).unwrap_or(false));

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <h3>{move || if from_ai() { "Crear Oferta (Sugerida por IA)" } else { "Nueva Oferta" }}</h3>
                <button class="icon-btn" on:click=move |_| vm.offer_form.set(None)>{icon("close")}</button>
            </div>

            <Show when=from_ai>
                <div class="ia-badge">
                    {icon("sparkles")} " Sugerencia de IA: " {field(|f| f.razon_ia.clone())}
                </div>
            </Show>

            <div class="form-grid">
                <div class="form-group">
                    <label>"Nombre de la Oferta *"</label>
                    <input
                        type="text"
                        placeholder="Ej: Oferta de Navidad"
                        prop:value=field(|f| f.nombre.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_offer_form(|f| f.nombre = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Descuento (%) *"</label>
                    <input
                        type="number"
                        min="1"
                        max="100"
                        prop:value=field(|f| f.descuento_porcentaje.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_offer_form(|f| f.descuento_porcentaje = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Fecha de Inicio *"</label>
                    <input
                        type="datetime-local"
                        prop:value=field(|f| f.fecha_inicio.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_offer_form(|f| f.fecha_inicio = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Fecha de Fin *"</label>
                    <input
                        type="datetime-local"
                        prop:value=field(|f| f.fecha_fin.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_offer_form(|f| f.fecha_fin = value);
                        }
                    />
                </div>
            </div>
            <div class="form-group">
                <label>"Descripción"</label>
                <textarea
                    rows="3"
                    placeholder="Descripción de la oferta..."
                    prop:value=field(|f| f.descripcion.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_offer_form(|f| f.descripcion = value);
                    }
                ></textarea>
            </div>

            <div class="form-actions">
                <button class="btn-primary" on:click=move |_| vm.save_offer_command()>"Guardar Oferta"</button>
                <button class="btn-secondary" on:click=move |_| vm.offer_form.set(None)>"Cancelar"</button>
            </div>
        </div>
    }
}

#[component]
fn OfferCard(offer: Offer) -> impl IntoView {
    let status_class = format!(
        "status-badge status-{}{}",
        offer.estado,
        if offer.esta_activa { " status-live" } else { "" }
    );

    view! {
        <div class="offer-card">
            {offer.basada_en_ia.then(|| view! { <div class="ia-indicator">{icon("sparkles")} " IA"</div> })}
            <h4>{offer.nombre.clone()}</h4>
            <p>{offer.descripcion.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "Sin descripción".into())}</p>
            {offer.producto.clone().map(|p| view! { <div class="offer-card__product">{icon("store")} " " {p.nombre}</div> })}
            <div class="offer-card__discount">{format!("{}% OFF", offer.descuento_porcentaje)}</div>
            {offer.precio_oferta.map(|price| view! {
                <div class="offer-card__price">{format!("Precio: {}", format_money(price))}</div>
            })}
            <div class="offer-card__dates">
                <div><strong>"Inicio: "</strong>{when(&offer.fecha_inicio)}</div>
                <div><strong>"Fin: "</strong>{when(&offer.fecha_fin)}</div>
            </div>
            <div class=status_class>{offer.status_label()}</div>
        </div>
    }
}

#[component]
fn CouponsTabContent(vm: OffersCouponsViewModel) -> impl IntoView {
    view! {
        <div class="toolbar">
            <button class="btn-primary" on:click=move |_| vm.new_coupon_command()>
                {icon("plus")} " Nuevo Cupón"
            </button>
        </div>

        {move || vm.coupon_form.get().is_some().then(|| view! { <CouponFormCard vm=vm /> })}

        <div class="list-section">
            <div class="list-section__header">
                <h3>"Todos los Cupones"</h3>
                <button class="btn-link" title="Actualizar lista" on:click=move |_| vm.load_coupons_command()>
                    {icon("refresh")} " Actualizar"
                </button>
            </div>
            {move || {
                if vm.loading.get() {
                    return view! { <div class="loading">"Cargando..."</div> }.into_any();
                }
                let coupons = vm.coupons.get();
                if coupons.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No hay cupones creados"</p>
                            <p class="empty-hint">"Crea un nuevo cupón usando el botón de arriba"</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="card-grid">
                        {coupons.into_iter().map(|coupon| view! { <CouponCard coupon=coupon /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn CouponFormCard(vm: OffersCouponsViewModel) -> impl IntoView {
    let field = move |read: fn(&CouponForm) -> String| {
        move || vm.coupon_form.with(|f| f.as_ref().map(read).unwrap_or_default())
    };
    let input = move |label: &'static str,
                      kind: &'static str,
                      read: fn(&CouponForm) -> String,
                      write: fn(&mut CouponForm, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    prop:value=field(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_coupon_form(|f| write(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <h3>"Nuevo Cupón de Descuento"</h3>
                <button class="icon-btn" on:click=move |_| vm.coupon_form.set(None)>{icon("close")}</button>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label>"Código del Cupón *"</label>
                    <div class="input-with-button">
                        <input
                            type="text"
                            placeholder="Ej: DESCUENTO20"
                            style="text-transform: uppercase"
                            prop:value=field(|f| f.codigo.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.update_coupon_form(|f| f.codigo = value);
                            }
                        />
                        <button class="btn-secondary" on:click=move |_| vm.generate_code_command()>
                            {icon("sparkles")} " Generar"
                        </button>
                    </div>
                </div>
                <div class="form-group">
                    <label>"Tipo de Descuento *"</label>
                    <select
                        prop:value=field(|f| f.tipo_descuento.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_coupon_form(|f| f.tipo_descuento = value);
                        }
                    >
                        <option value=DISCOUNT_PERCENT>"Porcentaje (%)"</option>
                        <option value=DISCOUNT_FIXED>"Monto Fijo (Bs.)"</option>
                    </select>
                </div>
                {input("Valor del Descuento *", "number", |f| f.valor_descuento.clone(), |f, v| f.valor_descuento = v)}
                {input("Monto Mínimo de Compra", "number", |f| f.monto_minimo.clone(), |f, v| f.monto_minimo = v)}
                {input("Fecha de Inicio *", "datetime-local", |f| f.fecha_inicio.clone(), |f, v| f.fecha_inicio = v)}
                {input("Fecha de Fin *", "datetime-local", |f| f.fecha_fin.clone(), |f, v| f.fecha_fin = v)}
                {input("Usos Máximos", "number", |f| f.usos_maximos.clone(), |f, v| f.usos_maximos = v)}
            </div>
            <div class="form-group">
                <label>"Descripción"</label>
                <textarea
                    rows="3"
                    placeholder="Descripción del cupón..."
                    prop:value=field(|f| f.descripcion.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_coupon_form(|f| f.descripcion = value);
                    }
                ></textarea>
            </div>
            <div class="form-group checkbox-group">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.coupon_form.with(|f| f.as_ref().map(|f| f.aplicable_a_todos).unwrap_or(true))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.update_coupon_form(|f| f.aplicable_a_todos = checked);
                        }
                    />
                    <span>"Aplicable a todos los productos"</span>
                </label>
            </div>

            <div class="form-actions">
                <button class="btn-primary" on:click=move |_| vm.save_coupon_command()>"Guardar Cupón"</button>
                <button class="btn-secondary" on:click=move |_| vm.coupon_form.set(None)>"Cancelar"</button>
            </div>
        </div>
    }
}

#[component]
fn CouponCard(coupon: Coupon) -> impl IntoView {
    let status_class = format!(
        "status-badge status-{}{}",
        coupon.estado,
        if coupon.esta_activo { " status-live" } else { "" }
    );

    view! {
        <div class="coupon-card">
            <div class="coupon-card__code">{coupon.codigo.clone()}</div>
            <p>{coupon.descripcion.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "Sin descripción".into())}</p>
            <div class="coupon-card__discount">{coupon.discount_label()}</div>
            {(coupon.monto_minimo > 0.0).then(|| view! {
                <div class="coupon-card__minimum">{format!("Compra mínima: {}", format_money(coupon.monto_minimo))}</div>
            })}
            <div class="coupon-card__usage">{format!("Usos: {}", coupon.usage_label())}</div>
            <div class="coupon-card__dates">
                <div><strong>"Válido desde: "</strong>{when(&coupon.fecha_inicio)}</div>
                <div><strong>"Hasta: "</strong>{when(&coupon.fecha_fin)}</div>
            </div>
            <div class=status_class>{coupon.status_label()}</div>
        </div>
    }
}
