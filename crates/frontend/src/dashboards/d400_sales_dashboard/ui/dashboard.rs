use crate::dashboards::d400_sales_dashboard::api;
use crate::domain::a003_sale::api as sale_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_sales_dashboard::{
    line_points, top_product_shares, DashboardPeriod, DashboardStatsResponse, MetricValue,
    MonthlySeries, PeriodStats,
};
use contracts::domain::a007_prediction::HistoryPoint;
use contracts::shared::number_format::{format_change, format_locale, format_money};
use leptos::prelude::*;
use leptos::task::spawn_local;

const LINE_WIDTH: f64 = 800.0;
const LINE_HEIGHT: f64 = 300.0;

/// Sales dashboard component
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let (period, set_period) = signal(DashboardPeriod::default());
    let (stats, set_stats) = signal(None::<DashboardStatsResponse>);
    let (history, set_history) = signal(Vec::<HistoryPoint>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    // Load on mount, on period change and on "Actualizar"
    Effect::new(move |_| {
        period.track();
        reload.track();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::dashboard_stats().await {
                Ok(response) => {
                    set_stats.set(Some(response));
                    // Optional block: the dashboard renders without it
                    match sale_api::aggregated_history("mes", "12").await {
                        Ok(aggregated) => set_history
                            .set(aggregated.historial.iter().map(HistoryPoint::normalize).collect()),
                        Err(e) => {
                            log::warn!("aggregated history unavailable: {}", e);
                            set_history.set(Vec::new());
                        }
                    }
                }
                Err(e) => {
                    log::error!("dashboard stats failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let series = Memo::new(move |_| {
        stats.with(|s| {
            s.as_ref()
                .map(|s| period.get().window(&s.ventas_mensuales))
                .unwrap_or_default()
        })
    });
    let period_stats = Memo::new(move |_| series.with(|s| PeriodStats::compute(&s.values)));

    let export = move |formato: &'static str| {
        let current = period.get_untracked();
        spawn_local(async move {
            if let Err(e) = api::export_dashboard(formato, current).await {
                log::error!("dashboard export failed: {}", e);
                set_error.set(Some(
                    "Error al exportar el reporte. Por favor, intenta nuevamente.".into(),
                ));
            }
        });
    };

    view! {
        <PageFrame page_id="d400_sales_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div>
                    <h2>{icon("dashboard")} " Dashboard de Ventas"</h2>
                    <p class="page__subtitle">"Visualización de métricas e indicadores de ventas históricas"</p>
                </div>
                <div class="page__actions">
                    <select
                        prop:value=move || period.get().code()
                        on:change=move |ev| set_period.set(DashboardPeriod::from_code(&event_target_value(&ev)))
                    >
                        {DashboardPeriod::ALL
                            .iter()
                            .map(|p| view! { <option value=p.code()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn-secondary" on:click=move |_| set_reload.update(|n| *n += 1)>
                        {icon("refresh")} " Actualizar"
                    </button>
                    <button class="btn-export" title="Exportar a PDF" on:click=move |_| export("pdf")>
                        {icon("download")} " PDF"
                    </button>
                    <button class="btn-export" title="Exportar a Excel" on:click=move |_| export("excel")>
                        {icon("download")} " Excel"
                    </button>
                </div>
            </div>

            {move || {
                if loading.get() && stats.with(Option::is_none) {
                    return view! { <div class="loading">"Cargando dashboard de ventas..."</div> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <div class="error-panel">
                            <p>{format!("⚠️ {}", err)}</p>
                            <button class="btn-secondary" on:click=move |_| set_reload.update(|n| *n += 1)>
                                {icon("refresh")} " Reintentar"
                            </button>
                        </div>
                    }
                    .into_any();
                }
                let Some(data) = stats.get() else {
                    return ().into_any();
                };
                let summary = period_stats.get();
                view! {
                    <div class="stats-row">
                        <MetricCard
                            label="Ventas del Período"
                            value=format_money(summary.total_periodo)
                            change=Some(data.stats.ventas_mes.clone())
                        />
                        <MetricCard
                            label="Total Pedidos"
                            value=format_locale(data.stats.total_pedidos.value)
                            change=Some(data.stats.total_pedidos.clone())
                        />
                        <MetricCard label="Promedio Mensual" value=format_money(summary.promedio_mensual) change=None />
                        <MetricCard
                            label="Nuevos Clientes"
                            value=format_locale(data.stats.nuevos_clientes.value)
                            change=Some(data.stats.nuevos_clientes.clone())
                        />
                    </div>
                    <div class="chart-grid">
                        <MonthlyBars series=series />
                        <TrendLine series=series />
                        <TopProducts data=data.clone() />
                        <PeriodAnalysis summary=summary />
                        <HistoryCard history=history />
                    </div>
                }
                .into_any()
            }}
        </PageFrame>
    }
}

#[component]
fn MetricCard(label: &'static str, value: String, change: Option<MetricValue>) -> impl IntoView {
    view! {
        <div class="metric-card">
            <p class="metric-card__label">{label}</p>
            <p class="metric-card__value">{value}</p>
            {change.map(|c| {
                let class = if c.change >= 0.0 { "metric-card__change positive" } else { "metric-card__change negative" };
                view! { <div class=class>{format_change(c.change)}</div> }
            })}
        </div>
    }
}

#[component]
fn MonthlyBars(series: Memo<MonthlySeries>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3>"Ventas Mensuales"</h3>
            <p class="chart-card__subtitle">"Evolución de ventas por mes"</p>
            <div class="bar-chart">
                {move || series.with(|s| {
                    s.heights
                        .iter()
                        .enumerate()
                        .map(|(i, height)| {
                            let label = s.labels.get(i).cloned().unwrap_or_default();
                            let amount = format!("Bs. {}", format_locale(s.values.get(i).copied().unwrap_or(0.0)));
                            view! {
                                <div class="bar-chart__column">
                                    <div
                                        class="bar-chart__bar"
                                        style=format!("height: {}%", height)
                                        title=format!("{}: {}", label, amount)
                                    >
                                        <span class="bar-chart__value">{amount.clone()}</span>
                                    </div>
                                    <span class="bar-chart__label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                })}
            </div>
        </div>
    }
}

#[component]
fn TrendLine(series: Memo<MonthlySeries>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3>"Tendencia de Ventas"</h3>
            <p class="chart-card__subtitle">"Línea de tendencia temporal"</p>
            <svg class="line-chart" viewBox=format!("0 0 {} {}", LINE_WIDTH, LINE_HEIGHT)>
                <defs>
                    <linearGradient id="lineGradient" x1="0%" y1="0%" x2="0%" y2="100%">
                        <stop offset="0%" stop-color="#0066FF" stop-opacity="0.3" />
                        <stop offset="100%" stop-color="#0066FF" stop-opacity="0" />
                    </linearGradient>
                </defs>
                {move || series.with(|s| {
                    if s.values.is_empty() {
                        return ().into_any();
                    }
                    let points = line_points(&s.values, LINE_WIDTH, LINE_HEIGHT);
                    let polyline = points
                        .iter()
                        .map(|(x, y)| format!("{},{}", x, y))
                        .collect::<Vec<_>>()
                        .join(" ");
                    let area = format!("M{} L{},{} L0,{} Z", polyline, LINE_WIDTH, LINE_HEIGHT, LINE_HEIGHT);
                    view! {
                        <path d=area fill="url(#lineGradient)" />
                        <polyline
                            points=polyline
                            fill="none"
                            stroke="#0066FF"
                            stroke-width="3"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        />
                        {points
                            .into_iter()
                            .map(|(x, y)| view! {
                                <circle cx=x.to_string() cy=y.to_string() r="6" fill="#0066FF" stroke="#fff" stroke-width="2" />
                            })
                            .collect_view()}
                    }
                    .into_any()
                })}
            </svg>
            <div class="line-chart__labels">
                {move || series.with(|s| s.labels.iter().map(|l| view! { <span>{l.clone()}</span> }).collect_view())}
            </div>
        </div>
    }
}

#[component]
fn TopProducts(data: DashboardStatsResponse) -> impl IntoView {
    if data.top_products.is_empty() {
        return ().into_any();
    }
    let shares = top_product_shares(&data.top_products);

    view! {
        <div class="chart-card">
            <h3>"Productos Más Vendidos"</h3>
            <p class="chart-card__subtitle">"Top productos por cantidad vendida"</p>
            <div class="top-products">
                {data
                    .top_products
                    .into_iter()
                    .zip(shares)
                    .enumerate()
                    .map(|(i, (product, share))| view! {
                        <div class="top-product">
                            <span class="top-product__rank">{format!("#{}", i + 1)}</span>
                            <div class="top-product__details">
                                <p class="top-product__name">{product.name}</p>
                                <p class="top-product__sales">{format!("{} unidades vendidas", format_locale(product.sales))}</p>
                            </div>
                            <div class="top-product__bar-container">
                                <div class="top-product__bar" style=format!("width: {}%", share)></div>
                                <span class="top-product__revenue">{format_money(product.revenue)}</span>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn PeriodAnalysis(summary: PeriodStats) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3>"Análisis del Período"</h3>
            <p class="chart-card__subtitle">"Métricas comparativas"</p>
            <div class="analysis-grid">
                <div class="analysis-item">
                    <p class="analysis-item__label">"Mejor Mes"</p>
                    <p class="analysis-item__value">{format_money(summary.mes_mejor)}</p>
                </div>
                <div class="analysis-item">
                    <p class="analysis-item__label">"Peor Mes"</p>
                    <p class="analysis-item__value">{format_money(summary.mes_peor)}</p>
                </div>
                <div class="analysis-item">
                    <p class="analysis-item__label">"Diferencia"</p>
                    <p class="analysis-item__value">{format_money(summary.mes_mejor - summary.mes_peor)}</p>
                </div>
            </div>
        </div>
    }
}

/// Monthly totals from the aggregation endpoint, hidden when unavailable
#[component]
fn HistoryCard(history: ReadSignal<Vec<HistoryPoint>>) -> impl IntoView {
    move || {
        let points = history.get();
        (!points.is_empty()).then(|| view! {
            <div class="chart-card">
                <h3>"Historial Agregado"</h3>
                <p class="chart-card__subtitle">"Totales mensuales registrados"</p>
                <table class="data-table data-table--compact">
                    <thead>
                        <tr><th>"Mes"</th><th>"Total"</th></tr>
                    </thead>
                    <tbody>
                        {points
                            .into_iter()
                            .map(|p| view! { <tr><td>{p.fecha}</td><td>{format_money(p.total_ventas)}</td></tr> })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        })
    }
}
