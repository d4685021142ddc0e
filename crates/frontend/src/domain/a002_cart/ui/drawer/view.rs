use contracts::domain::a002_cart::{CartItem, PAYMENT_METHODS};
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

use super::view_model::CartDrawerViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_global_context();
    let vm = CartDrawerViewModel::new(ctx);

    // Reload every time the drawer opens
    Effect::new(move |_| {
        if ctx.cart_open.get() {
            vm.load_command();
        }
    });

    view! {
        <Show when=move || ctx.cart_open.get()>
            <div class="drawer-overlay" on:click=move |_| ctx.close_cart()></div>
            <aside class="cart-drawer">
                <div class="cart-drawer__header">
                    <h3>{icon("cart")} " Mi carrito"</h3>
                    <button class="icon-btn" on:click=move |_| ctx.close_cart()>{icon("close")}</button>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                {move || vm.notice.get().map(|n| view! { <div class="success-message">{n}</div> })}

                {move || {
                    if vm.loading.get() && vm.cart.with(Option::is_none) {
                        return view! { <div class="loading">"Cargando carrito..."</div> }.into_any();
                    }
                    match vm.cart.get() {
                        Some(cart) if !cart.items.is_empty() => {
                            let active: Vec<CartItem> = cart.active_items().cloned().collect();
                            let saved: Vec<CartItem> = cart.saved_items().cloned().collect();
                            view! {
                                <div class="cart-drawer__items">
                                    {active
                                        .into_iter()
                                        .map(|item| view! { <CartLine item=item vm=vm /> })
                                        .collect_view()}
                                </div>
                                {(!saved.is_empty()).then(|| view! {
                                    <div class="cart-drawer__saved">
                                        <h4>"Guardado para después"</h4>
                                        {saved
                                            .into_iter()
                                            .map(|item| view! {
                                                <div class="cart-line cart-line--saved">
                                                    <span>{item.nombre.clone()}</span>
                                                    <span>{format_money(item.precio_unitario)}</span>
                                                </div>
                                            })
                                            .collect_view()}
                                    </div>
                                })}
                                <div class="cart-drawer__totals">
                                    <div><span>"Subtotal"</span><span>{format_money(cart.subtotal)}</span></div>
                                    {(cart.descuento > 0.0).then(|| view! {
                                        <div class="cart-drawer__discount">
                                            <span>
                                                "Descuento"
                                                {cart.codigo_descuento.clone().map(|c| format!(" ({})", c))}
                                            </span>
                                            <span>{format!("-{}", format_money(cart.descuento))}</span>
                                        </div>
                                    })}
                                    <div class="cart-drawer__total"><span>"Total"</span><span>{format_money(cart.total)}</span></div>
                                </div>
                            }
                            .into_any()
                        }
                        _ => view! { <div class="empty-state">"Tu carrito está vacío"</div> }.into_any(),
                    }
                }}

                <Show when=move || vm.cart.with(|c| c.as_ref().map(|c| !c.is_empty()).unwrap_or(false))>
                    <div class="cart-drawer__coupon">
                        <input
                            type="text"
                            placeholder="Código de cupón"
                            prop:value=move || vm.coupon_code.get()
                            on:input=move |ev| vm.coupon_code.set(event_target_value(&ev))
                        />
                        <button
                            class="btn-secondary"
                            disabled=move || vm.busy.get()
                            on:click=move |_| vm.apply_coupon_command()
                        >
                            "Aplicar"
                        </button>
                    </div>

                    <CheckoutForm vm=vm />

                    <div class="cart-drawer__actions">
                        <button class="btn-link" disabled=move || vm.busy.get() on:click=move |_| vm.clear_command()>
                            {icon("trash")} " Vaciar carrito"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || vm.busy.get()
                            on:click=move |_| vm.checkout_open.update(|open| *open = !*open)
                        >
                            {move || format!("Comprar · {}", format_money(vm.total()))}
                        </button>
                    </div>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartLine(item: CartItem, vm: CartDrawerViewModel) -> impl IntoView {
    let id = item.id;
    let qty = item.cantidad;

    view! {
        <div class="cart-line">
            <div class="cart-line__info">
                <span class="cart-line__name">{item.nombre.clone()}</span>
                <span class="cart-line__price">{format_money(item.precio_unitario)}</span>
            </div>
            <div class="cart-line__qty">
                <button disabled=move || vm.busy.get() on:click=move |_| vm.set_quantity_command(id, qty - 1)>"-"</button>
                <span>{qty}</span>
                <button disabled=move || vm.busy.get() on:click=move |_| vm.set_quantity_command(id, qty + 1)>"+"</button>
            </div>
            <span class="cart-line__subtotal">{format_money(item.subtotal)}</span>
            <div class="cart-line__actions">
                <button class="btn-link" title="Guardar para después" on:click=move |_| vm.save_for_later_command(id)>
                    "Después"
                </button>
                <button class="icon-btn" title="Eliminar" on:click=move |_| vm.remove_command(id)>
                    {icon("trash")}
                </button>
            </div>
        </div>
    }
}

#[component]
fn CheckoutForm(vm: CartDrawerViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.checkout_open.get()>
            <form
                class="checkout-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.checkout_command();
                }
            >
                <div class="form-group">
                    <label>"Método de pago"</label>
                    <select
                        prop:value=move || vm.checkout_form.with(|f| f.metodo_pago.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.checkout_form.update(|f| f.metodo_pago = value);
                        }
                    >
                        {PAYMENT_METHODS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Dirección de entrega"</label>
                    <input
                        type="text"
                        prop:value=move || vm.checkout_form.with(|f| f.direccion_entrega.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.checkout_form.update(|f| f.direccion_entrega = Some(value).filter(|v| !v.is_empty()));
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Notas"</label>
                    <textarea
                        prop:value=move || vm.checkout_form.with(|f| f.notas.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.checkout_form.update(|f| f.notas = Some(value).filter(|v| !v.is_empty()));
                        }
                    ></textarea>
                </div>
                <button type="submit" class="btn-primary" disabled=move || vm.busy.get()>
                    {move || if vm.busy.get() { "Procesando..." } else { "Confirmar compra" }}
                </button>
            </form>
        </Show>
    }
}
