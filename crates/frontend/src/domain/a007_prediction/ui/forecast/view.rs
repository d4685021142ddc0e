use contracts::domain::a007_prediction::{bar_heights, total_predicted, ChartPoint, ModelInfo};
use contracts::shared::date_utils::{format_date_es, format_month_es, parse_timestamp};
use contracts::shared::number_format::{
    format_change, format_money, format_number_with_decimals, CURRENCY_PREFIX,
};
use leptos::prelude::*;

use super::view_model::{max_periods, max_periods_hint, PredictionsViewModel};
use crate::shared::components::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

fn month_label(fecha: &str) -> String {
    parse_timestamp(fecha)
        .map(|dt| format_month_es(&dt))
        .unwrap_or_else(|| fecha.to_string())
}

fn bar_title(point: &ChartPoint) -> String {
    let value = format!("{} {}", CURRENCY_PREFIX, format_number_with_decimals(point.valor, 0));
    match point.confianza.filter(|_| point.is_prediction()) {
        Some(c) => format!("{}: {} (Confianza: {:.0}%)", month_label(&point.fecha), value, c * 100.0),
        None => format!("{}: {}", month_label(&point.fecha), value),
    }
}

#[component]
pub fn PredictionsPage() -> impl IntoView {
    let vm = PredictionsViewModel::new();
    vm.init_command();

    let has_predictions = move || vm.predictions.with(|p| !p.is_empty());

    view! {
        <PageFrame page_id="a007_prediction--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div>
                    <h2>{icon("predictions")} " Predicciones de Ventas"</h2>
                    <p class="page__subtitle">
                        "Genera proyecciones de ventas futuras usando inteligencia artificial"
                    </p>
                </div>
                <div class="page__actions">
                    <button class="btn-secondary" title="Actualizar predicciones" on:click=move |_| vm.load_existing_command()>
                        {icon("refresh")} " Actualizar"
                    </button>
                    <Show when=has_predictions>
                        <button class="btn-export" title="Exportar a PDF" on:click=move |_| vm.export_command("pdf")>
                            {icon("download")} " PDF"
                        </button>
                        <button class="btn-export" title="Exportar a Excel" on:click=move |_| vm.export_command("excel")>
                            {icon("download")} " Excel"
                        </button>
                    </Show>
                </div>
            </div>

            {move || vm.model.get().and_then(|status| status.modelo).map(|model| view! { <ModelCard model=model vm=vm /> })}

            <Show when=move || !vm.model_active()>
                <div class="alert alert--warning">
                    <p class="alert__title">"Modelo no disponible"</p>
                    <p>
                        "El modelo de predicción no está activo. Entrena el modelo para poder generar predicciones de ventas."
                    </p>
                </div>
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || vm.notice.get().map(|n| view! {
                <div class="success-message" on:click=move |_| vm.notice.set(None)>{n}</div>
            })}

            <Show when=move || vm.model_active()>
                <GenerationPanel vm=vm />
            </Show>

            {move || vm.summary.get().map(|summary| {
                let trends = vm.trends.get();
                view! {
                    <div class="section">
                        <h3>"Resumen de Predicciones"</h3>
                        <div class="stats-row">
                            <StatCard
                                label="Total Predicho"
                                value=format_money(summary.total_valor_predicho)
                                subtitle=Some(format!("{} períodos", summary.total_predicciones))
                            />
                            <StatCard
                                label="Confianza Promedio"
                                value=format!("{:.1}%", summary.confianza_promedio * 100.0)
                                subtitle=Some("Nivel de confianza del modelo".to_string())
                                variant="info"
                            />
                            {trends.map(|t| {
                                let growth = t.factor_crecimiento.unwrap_or(0.0);
                                view! {
                                    <StatCard
                                        label="Factor de Crecimiento"
                                        value=format_change(growth)
                                        subtitle=Some("Tendencias históricas".to_string())
                                        variant={if growth >= 0.0 { "success" } else { "error" }}
                                    />
                                    <StatCard
                                        label="Promedio Mensual"
                                        value=format_money(t.promedio_mensual_historico)
                                        subtitle=Some("Basado en últimos 3 meses".to_string())
                                    />
                                }
                            })}
                        </div>
                    </div>
                }
            })}

            <Show when=has_predictions>
                <ProjectionChart vm=vm />
                <PredictionTable vm=vm />
            </Show>

            <Show when=move || !has_predictions() && !vm.generating.get() && vm.model_active()>
                <div class="empty-state">
                    <h3>"No hay predicciones generadas"</h3>
                    <p>"Genera nuevas predicciones usando el panel de arriba para ver proyecciones de ventas futuras."</p>
                </div>
            </Show>
        </PageFrame>
    }
}

#[component]
fn ModelCard(model: ModelInfo, vm: PredictionsViewModel) -> impl IntoView {
    let version = model.version.clone().map(|v| format!(" v{}", v)).unwrap_or_default();

    view! {
        <div class="model-card">
            <div class="model-card__header">
                <div>
                    <h3>"Estado del Modelo de IA"</h3>
                    <p class="model-card__subtitle">{format!("{}{}", model.nombre, version)}</p>
                </div>
                <span class=format!("model-badge model-badge--{}", model.estado)>{model.estado.to_uppercase()}</span>
            </div>
            {model.metricas.is_some().then(|| view! {
                <div class="model-card__metrics">
                    <div class="metric">
                        <span class="metric__label">"R² Score"</span>
                        <span class="metric__value">{model.r2_label()}</span>
                        <span class="metric__hint">"Calidad del modelo"</span>
                    </div>
                    <div class="metric">
                        <span class="metric__label">"Registros"</span>
                        <span class="metric__value">{model.training_records()}</span>
                        <span class="metric__hint">"Ventas usadas"</span>
                    </div>
                </div>
            })}
            <div class="model-card__actions">
                <button class="btn-secondary" disabled=move || vm.model_busy.get() on:click=move |_| vm.train_command(true)>
                    {move || if vm.model_busy.get() { "Entrenando..." } else { "Entrenar modelo" }}
                </button>
                <button class="btn-secondary" disabled=move || vm.model_busy.get() on:click=move |_| vm.train_command(false)>
                    "Actualizar modelo"
                </button>
                <button class="btn-link" on:click=move |_| vm.toggle_training_runs_command()>
                    {icon("history")} " Historial de entrenamientos"
                </button>
            </div>
            {move || vm.training_runs.get().map(|runs| {
                if runs.is_empty() {
                    return view! { <p class="empty-hint">"Sin entrenamientos registrados"</p> }.into_any();
                }
                view! {
                    <table class="data-table data-table--compact">
                        <thead>
                            <tr><th>"Versión"</th><th>"Fecha"</th><th>"Estado"</th><th>"Registros"</th><th>"R²"</th></tr>
                        </thead>
                        <tbody>
                            {runs.into_iter().map(|run| {
                                let r2 = run
                                    .metricas
                                    .as_ref()
                                    .and_then(|m| m.r2_score)
                                    .map(|r| format!("{:.3}", r))
                                    .unwrap_or_else(|| "N/A".into());
                                let fecha = run
                                    .fecha
                                    .as_deref()
                                    .and_then(parse_timestamp)
                                    .map(|dt| format_date_es(&dt))
                                    .unwrap_or_else(|| "-".into());
                                view! {
                                    <tr>
                                        <td>{run.version.unwrap_or_else(|| "-".into())}</td>
                                        <td>{fecha}</td>
                                        <td>{run.estado.unwrap_or_default()}</td>
                                        <td>{run.registros_entrenamiento.unwrap_or(0)}</td>
                                        <td>{r2}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            })}
        </div>
    }
}

#[component]
fn GenerationPanel(vm: PredictionsViewModel) -> impl IntoView {
    let preset = move |periodo: &'static str, horizon: u32, label: &'static str| {
        view! {
            <button class="chip" on:click=move |_| vm.preset_command(periodo, horizon)>
                {icon("history")} {label}
            </button>
        }
    };

    view! {
        <div class="section generation-panel">
            <h3>{icon("sparkles")} " Generar Nuevas Predicciones"</h3>
            <div class="generation-panel__presets">
                <span>"Ejemplos rápidos:"</span>
                {preset("mes", 3, " Próximos 3 meses")}
                {preset("mes", 6, " Próximos 6 meses")}
                {preset("semana", 4, " Próximas 4 semanas")}
            </div>
            <div class="form-grid">
                <div class="form-group">
                    <label>"Período"</label>
                    <select
                        prop:value=move || vm.params.with(|p| p.periodo.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.params.update(|p| p.periodo = value);
                        }
                    >
                        <option value="mes">"Mensual"</option>
                        <option value="semana">"Semanal"</option>
                        <option value="dia">"Diario"</option>
                    </select>
                    <p class="form-hint">"Selecciona la frecuencia de las predicciones"</p>
                </div>
                <div class="form-group">
                    <label>"Períodos a Predecir"</label>
                    <input
                        type="number"
                        min="1"
                        max=move || vm.params.with(|p| max_periods(&p.periodo).to_string())
                        prop:value=move || vm.params.with(|p| p.meses_futuros.to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<u32>().unwrap_or(1).max(1);
                            vm.params.update(|p| p.meses_futuros = value);
                        }
                    />
                    <p class="form-hint">{move || vm.params.with(|p| max_periods_hint(&p.periodo))}</p>
                </div>
                <div class="form-group">
                    <label>"Categoría (Opcional)"</label>
                    <input
                        type="number"
                        placeholder="ID de categoría (dejar vacío para todas)"
                        prop:value=move || vm.params.with(|p| p.categoria_id.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.params.update(|p| p.categoria_id = Some(value).filter(|v| !v.trim().is_empty()));
                        }
                    />
                    <p class="form-hint">"Filtrar predicciones por categoría específica"</p>
                </div>
            </div>
            <div class="generation-panel__actions">
                <button class="btn-primary" disabled=move || vm.generating.get() on:click=move |_| vm.generate_command()>
                    {move || if vm.generating.get() { "Generando Predicciones..." } else { "Generar Predicciones" }}
                </button>
                {move || vm.predictions.with(|preds| (!preds.is_empty()).then(|| view! {
                    <div class="quick-summary">
                        <p><strong>{preds.len()}</strong>" predicciones generadas"</p>
                        <p class="quick-summary__total">{format!("Total: {}", format_money(total_predicted(preds)))}</p>
                    </div>
                }))}
            </div>
        </div>
    }
}

#[component]
fn ProjectionChart(vm: PredictionsViewModel) -> impl IntoView {
    view! {
        <div class="section chart-card">
            <div class="chart-card__header">
                <h3>"Proyección de Ventas"</h3>
                <div class="chart-legend">
                    <span class="chart-legend__item chart-legend__item--history">"Histórico"</span>
                    <span class="chart-legend__item chart-legend__item--prediction">"Predicción"</span>
                </div>
            </div>
            {move || {
                let points = vm.chart();
                if points.is_empty() {
                    return view! { <div class="empty-state">"No hay datos para mostrar"</div> }.into_any();
                }
                let heights = bar_heights(&points);
                view! {
                    <div class="bar-chart">
                        {points.into_iter().zip(heights).map(|(point, height)| {
                            let kind = if point.is_prediction() { "prediction" } else { "history" };
                            view! {
                                <div class="bar-chart__column">
                                    <div
                                        class=format!("bar-chart__bar bar-chart__bar--{}", kind)
                                        style=format!("height: {:.1}%", height)
                                        title=bar_title(&point)
                                    >
                                        {point.is_prediction().then(|| icon("sparkles"))}
                                    </div>
                                    <div class="bar-chart__label">{month_label(&point.fecha)}</div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn PredictionTable(vm: PredictionsViewModel) -> impl IntoView {
    view! {
        <div class="section">
            <div class="section__header">
                <h3>"Predicciones Generadas"</h3>
                <span class="badge">{move || format!("{} predicciones", vm.predictions.with(Vec::len))}</span>
            </div>
            <table class="data-table">
                <thead>
                    <tr><th>"Fecha"</th><th>"Valor Predicho"</th><th>"Confianza"</th></tr>
                </thead>
                <tbody>
                    {move || vm.predictions.get().into_iter().map(|p| {
                        let fecha = parse_timestamp(&p.fecha_prediccion)
                            .map(|dt| format_date_es(&dt))
                            .unwrap_or_else(|| "N/A".into());
                        view! {
                            <tr>
                                <td>{fecha}</td>
                                <td>{format_money(p.valor_predicho)}</td>
                                <td>
                                    <span
                                        class="confidence-badge"
                                        style=format!("background-color: rgba(0, 102, 255, {})", p.confianza)
                                    >
                                        {p.confidence_label()}
                                    </span>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
