use contracts::domain::a003_sale::{payment_method_label, SaleFilter, SaleRecord};
use contracts::shared::date_utils::{format_datetime_numeric, parse_timestamp};
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

use super::view_model::SalesHistoryViewModel;
use crate::shared::components::{PaginationControls, StatCard};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn sale_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| format_datetime_numeric(&dt))
        .unwrap_or_else(|| value.to_string())
}

#[component]
pub fn SalesHistory() -> impl IntoView {
    let vm = SalesHistoryViewModel::new();
    vm.load_options_command();

    Effect::new(move |_| {
        let filter = vm.filter.get();
        vm.load_command(filter);
    });

    let noun = move |admin: &'static str, client: &'static str| if vm.is_admin() { admin } else { client };

    view! {
        <PageFrame page_id="a003_sale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>{move || noun("Historial de Ventas", "Mis Compras")}</h2>
                <span class="badge">{move || noun("Administrador", "Cliente")}</span>
            </div>

            {move || vm.stats.get().map(|stats| {
                let is_admin = vm.is_admin();
                view! {
                    <div class="stats-row">
                        <StatCard
                            label={if is_admin { "Total Ventas" } else { "Total Compras" }}
                            value=stats.total_ventas.to_string()
                        />
                        <StatCard label="Monto Total" value=format_money(stats.total_monto) variant="info" />
                        <StatCard label="Completadas" value=stats.ventas_completadas.to_string() variant="success" />
                        <StatCard label="Pendientes" value=stats.ventas_pendientes.to_string() variant="warning" />
                        {(is_admin && stats.ventas_canceladas > 0).then(|| view! {
                            <StatCard label="Canceladas" value=stats.ventas_canceladas.to_string() variant="error" />
                        })}
                    </div>
                }
            })}

            <HistoryFilters vm=vm />

            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        return view! { <div class="loading">"Cargando historial..."</div> }.into_any();
                    }
                    let sales = vm.sales.get();
                    if sales.is_empty() {
                        if vm.error.with(Option::is_some) {
                            return ().into_any();
                        }
                        return view! {
                            <div class="empty-state">
                                <p>{format!("No se encontraron {} con los filtros seleccionados.", noun("ventas", "compras"))}</p>
                                <p class="empty-hint">"Intenta ajustar los filtros o verifica que existan registros."</p>
                            </div>
                        }
                        .into_any();
                    }
                    let is_admin = vm.is_admin();
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Fecha"</th>
                                    {is_admin.then(|| view! { <th>"Cliente"</th> })}
                                    <th>"Total"</th>
                                    <th>"Estado"</th>
                                    <th>"Método Pago"</th>
                                    <th>"Productos"</th>
                                    <th>"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {sales
                                    .into_iter()
                                    .map(|sale| view! { <SaleRow sale=sale vm=vm is_admin=is_admin /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}

                {move || vm.pagination.get().filter(|p| p.is_paged()).map(|p| {
                    let summary = p.summary();
                    view! {
                        <PaginationControls
                            current_page=p.page
                            total_pages=p.total_pages
                            has_previous=p.has_previous
                            has_next=p.has_next
                            summary=summary
                            on_page_change=Callback::new(move |page| vm.change_page_command(page))
                        />
                    }
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn HistoryFilters(vm: SalesHistoryViewModel) -> impl IntoView {
    let value_of = move |name: &'static str| {
        move || {
            vm.filter.with(|f: &SaleFilter| match name {
                "fecha_desde" => f.fecha_desde.clone(),
                "fecha_hasta" => f.fecha_hasta.clone(),
                "estado" => f.estado.clone(),
                "metodo_pago" => f.metodo_pago.clone(),
                "cliente_id" => f.cliente_id.clone(),
                "producto_id" => f.producto_id.clone(),
                "producto_nombre" => f.producto_nombre.clone(),
                "categoria_id" => f.categoria_id.clone(),
                _ => String::new(),
            })
        }
    };

    let select = move |name: &'static str,
                       label: &'static str,
                       all_label: &'static str,
                       choices: Vec<(String, String)>| {
        view! {
            <div class="filter-group">
                <label>{label}</label>
                <select
                    prop:value=value_of(name)
                    on:change=move |ev| vm.set_filter_command(name, event_target_value(&ev))
                >
                    <option value="">{all_label}</option>
                    {choices
                        .into_iter()
                        .map(|(value, text)| view! { <option value=value>{text}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel__header">
                <h3>"Filtros de búsqueda"</h3>
                <button class="btn-link" on:click=move |_| vm.clear_filters_command()>
                    {icon("trash")} " Limpiar filtros"
                </button>
            </div>
            <div class="filter-grid">
                <div class="filter-group">
                    <label>"Fecha desde"</label>
                    <input
                        type="date"
                        prop:value=value_of("fecha_desde")
                        on:change=move |ev| vm.set_filter_command("fecha_desde", event_target_value(&ev))
                    />
                </div>
                <div class="filter-group">
                    <label>"Fecha hasta"</label>
                    <input
                        type="date"
                        prop:value=value_of("fecha_hasta")
                        on:change=move |ev| vm.set_filter_command("fecha_hasta", event_target_value(&ev))
                    />
                </div>
                {move || {
                    let options = vm.options.get();
                    let estados = options.estados.iter().map(|e| (e.value.clone(), e.label.clone())).collect();
                    let metodos = options.metodos_pago.iter().map(|m| (m.value.clone(), m.label.clone())).collect();
                    let clientes: Vec<_> = options.clientes.iter().map(|c| (c.id.clone(), c.nombre.clone())).collect();
                    let categorias = options.categorias.iter().map(|c| (c.id.clone(), c.nombre.clone())).collect();
                    let productos = options.productos.iter().map(|p| (p.id.clone(), p.nombre.clone())).collect();
                    view! {
                        {select("estado", "Estado", "Todos", estados)}
                        {select("metodo_pago", "Método de pago", "Todos", metodos)}
                        {options.is_admin.then(|| select("cliente_id", "Cliente", "Todos los clientes", clientes))}
                        {select("categoria_id", "Categoría", "Todas las categorías", categorias)}
                        {select("producto_id", "Producto", "Todos los productos", productos)}
                    }
                }}
                <div class="filter-group">
                    <label>"Producto (nombre)"</label>
                    <input
                        type="text"
                        placeholder="Buscar por nombre de producto..."
                        prop:value=value_of("producto_nombre")
                        on:input=move |ev| vm.set_filter_command("producto_nombre", event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn SaleRow(sale: SaleRecord, vm: SalesHistoryViewModel, is_admin: bool) -> impl IntoView {
    let id = sale.id;
    let is_expanded = move || vm.expanded.get() == Some(id);
    let method = vm.options.with_untracked(|o| payment_method_label(&sale.metodo_pago, o));
    let columns = if is_admin { 8 } else { 7 };
    let has_receipt = sale.has_receipt();
    let detail = sale.clone();

    view! {
        <tr class:row-expanded=is_expanded on:click=move |_| vm.toggle_expanded(id) style="cursor: pointer">
            <td>{format!("#{}", id)}</td>
            <td>{sale_date(&sale.fecha)}</td>
            {is_admin.then(|| {
                let customer = sale.cliente.clone().unwrap_or_default();
                view! {
                    <td>
                        <div class="customer-name">{customer.nombre}</div>
                        <div class="customer-email">{customer.email}</div>
                    </td>
                }
            })}
            <td><strong>{format_money(sale.total)}</strong></td>
            <td><span class=format!("status-badge status-{}", sale.estado)>{sale.estado.clone()}</span></td>
            <td>{method}</td>
            <td>{sale.products_label()}</td>
            <td on:click=|ev| ev.stop_propagation()>
                <div class="row-actions">
                    {has_receipt.then(|| view! {
                        <button class="icon-btn" title="Descargar comprobante" on:click=move |_| vm.download_receipt_command(id)>
                            {icon("download")}
                        </button>
                    })}
                    {sale.pago_online.clone().filter(|p| p.existe).map(|p| view! {
                        <span class="payment-badge" title=format!("Pago: {}", p.estado)>"💳"</span>
                    })}
                    <button
                        class="icon-btn"
                        title=move || if is_expanded() { "Ocultar detalles" } else { "Ver detalles" }
                        on:click=move |_| vm.toggle_expanded(id)
                    >
                        {move || if is_expanded() { "▲" } else { "▼" }}
                    </button>
                </div>
            </td>
        </tr>
        <Show when=is_expanded>
            <SaleDetails sale=detail.clone() vm=vm is_admin=is_admin columns=columns />
        </Show>
    }
}

#[component]
fn SaleDetails(sale: SaleRecord, vm: SalesHistoryViewModel, is_admin: bool, columns: u32) -> impl IntoView {
    let id = sale.id;

    view! {
        <tr class="row-details">
            <td colspan={columns.to_string()}>
                <div class="details-section">
                    <h4>{if is_admin { "Productos de la venta" } else { "Productos de la compra" }}</h4>
                    {sale
                        .productos
                        .iter()
                        .map(|line| view! {
                            <div class="line-item">
                                <span class="line-item__name">{line.nombre.clone()}</span>
                                <span>{format!("Cantidad: {}", line.cantidad)}</span>
                                <span>{format!("{} c/u", format_money(line.precio_unitario))}</span>
                                <span>{format!("Subtotal: {}", format_money(line.subtotal))}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
                {sale.direccion_entrega.clone().filter(|d| !d.is_empty()).map(|address| view! {
                    <div class="details-section">
                        <h4>"Dirección de entrega"</h4>
                        <p>{address}</p>
                    </div>
                })}
                {sale.comprobante.clone().filter(|c| c.existe).map(|receipt| view! {
                    <div class="details-section">
                        <h4>"Comprobante"</h4>
                        <p><strong>"Número: "</strong>{receipt.numero.unwrap_or_default()}</p>
                        <button class="btn-secondary" on:click=move |_| vm.download_receipt_command(id)>
                            {icon("download")} " Descargar PDF"
                        </button>
                    </div>
                })}
                {sale.pago_online.clone().filter(|p| p.existe).map(|payment| view! {
                    <div class="details-section">
                        <h4>"Información de pago"</h4>
                        <p>
                            <strong>"Estado: "</strong>
                            <span class=format!("status-badge status-{}", payment.estado)>{payment.estado.clone()}</span>
                        </p>
                        {payment.referencia.map(|r| view! { <p><strong>"Referencia: "</strong>{r}</p> })}
                    </div>
                })}
            </td>
        </tr>
    }
}
