use contracts::dashboards::d401_dynamic_report::example_prompts;
use contracts::dashboards::d401_dynamic_report::format::pretty_json;
use leptos::prelude::*;

use super::report_view::{DownloadButtons, ReportResult};
use super::view_model::DynamicReportViewModel;
use crate::dashboards::d401_dynamic_report::speech::{not_available, SpeechRecognizer};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

#[component]
pub fn DynamicReports() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let is_admin = auth_state.get_untracked().is_admin();
    let vm = DynamicReportViewModel::new();

    let recognizer = StoredValue::new_local(SpeechRecognizer::new(move |event| vm.handle_speech(event)));
    let speech_available = recognizer.with_value(Option::is_some);

    vm.load_history_command();
    if is_admin {
        vm.load_options_command();
    }

    let start_recording = move || {
        if !speech_available {
            vm.error.set(Some(not_available().to_string()));
            return;
        }
        vm.recording_started();
        let started = recognizer.with_value(|r| match r {
            Some(r) => r.start(),
            None => Err(not_available()),
        });
        if let Err(e) = started {
            vm.speech_failed(&e.to_string());
        }
    };
    let stop_recording = move || {
        if vm.recording.get_untracked() {
            recognizer.with_value(|r| {
                if let Some(r) = r {
                    r.stop();
                }
            });
            vm.recording_stopped();
        }
    };

    view! {
        <PageFrame page_id="d401_dynamic_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div>
                    <h2>{icon("reports")} " Reportes Dinámicos"</h2>
                    <p class="page__subtitle">
                        {if is_admin {
                            "Genera reportes personalizados de ventas, productos e inventario usando texto o voz"
                        } else {
                            "Consulta reportes de tus compras y pedidos usando texto o voz"
                        }}
                    </p>
                    <span class="badge">{if is_admin { "👑 Administrador" } else { "👤 Cliente" }}</span>
                </div>
                <div class="page__actions">
                    {is_admin.then(|| view! {
                        <button
                            class="btn-secondary"
                            class:active=move || vm.show_filters.get()
                            on:click=move |_| vm.show_filters.update(|v| *v = !*v)
                        >
                            {move || if vm.show_filters.get() { "🔽 Ocultar Filtros" } else { "🔍 Filtros Avanzados" }}
                        </button>
                    })}
                    <button
                        class="btn-secondary"
                        class:active=move || vm.show_history.get()
                        on:click=move |_| vm.show_history.update(|v| *v = !*v)
                    >
                        {move || if vm.show_history.get() { "📋 Ocultar Historial" } else { "📋 Ver Historial" }}
                    </button>
                </div>
            </div>

            {is_admin.then(|| view! {
                <Show when=move || vm.show_filters.get()>
                    <FiltersPanel vm=vm />
                </Show>
            })}

            <div class="report-request">
                <div class="report-request__header">
                    <h3>{move || if vm.voice_mode.get() { "🎤 Modo Voz" } else { "✍️ Modo Texto" }}</h3>
                    <span class="badge" class:badge-voice=move || vm.voice_mode.get()>
                        {move || if vm.voice_mode.get() { "Voz" } else { "Texto" }}
                    </span>
                </div>

                <div class="report-request__input">
                    <textarea
                        rows="4"
                        class:recording=move || vm.recording.get()
                        placeholder=move || {
                            if vm.voice_mode.get() {
                                "🎤 Habla ahora... El texto aparecerá aquí automáticamente"
                            } else if is_admin {
                                "Escribe tu solicitud aquí... Ejemplo: 'Reporte de ventas del último mes agrupado por categoría'"
                            } else {
                                "Escribe tu solicitud aquí... Ejemplo: 'Mis compras del último mes'"
                            }
                        }
                        disabled=move || vm.recording.get()
                        prop:value=move || vm.texto.get()
                        on:input=move |ev| vm.texto.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || vm.recording.get()>
                        <div class="recording-overlay">
                            <div class="pulse"></div>
                            <span>"Escuchando..."</span>
                        </div>
                    </Show>
                </div>

                <div class="report-examples">
                    <p>"💡 Ejemplos rápidos:"</p>
                    <div class="chips">
                        {example_prompts(is_admin)
                            .iter()
                            .map(|example| view! {
                                <button
                                    class="chip"
                                    disabled=move || vm.recording.get()
                                    on:click=move |_| vm.use_example(example)
                                >
                                    {*example}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="report-request__actions">
                    <div class="report-request__left">
                        <button
                            class="btn-secondary"
                            class:recording=move || vm.recording.get()
                            disabled=move || !speech_available || vm.loading.get()
                            title=move || if vm.recording.get() { "Detener grabación" } else { "Iniciar grabación de voz" }
                            on:click=move |_| {
                                if vm.recording.get_untracked() {
                                    stop_recording();
                                } else {
                                    start_recording();
                                }
                            }
                        >
                            {icon("mic")}
                            {move || if vm.recording.get() { " Detener" } else { " Usar Voz" }}
                        </button>
                        <button
                            class="btn-link"
                            disabled=move || vm.loading.get() || vm.recording.get()
                            on:click=move |_| {
                                stop_recording();
                                vm.clear_command();
                            }
                        >
                            {icon("trash")} " Limpiar"
                        </button>
                    </div>
                    <button
                        class="btn-primary"
                        disabled=move || !vm.can_submit()
                        on:click=move |_| vm.request_command(is_admin)
                    >
                        {move || if vm.loading.get() { "Generando..." } else { "🚀 Generar Reporte" }}
                    </button>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error-message">"⚠️ " {e}</div> })}
            </div>

            <Show when=move || vm.show_history.get()>
                <HistoryPanel vm=vm />
            </Show>

            {move || vm.report.get().map(|report| view! { <ReportResult report=report vm=vm is_admin=is_admin /> })}

            {move || vm.suggestions.get().map(|suggestions| view! {
                <div class="report-suggestions">
                    <h3>{icon("sparkles")} " Filtros sugeridos"</h3>
                    <pre class="report-json">{pretty_json(&suggestions)}</pre>
                </div>
            })}
        </PageFrame>
    }
}

#[component]
fn FiltersPanel(vm: DynamicReportViewModel) -> impl IntoView {
    let value_of = move |name: &'static str| {
        move || {
            vm.filters.with(|f| match name {
                "fecha_desde" => f.fecha_desde.clone(),
                "fecha_hasta" => f.fecha_hasta.clone(),
                "categoria" => f.categoria.clone(),
                "cliente" => f.cliente.clone(),
                "estado" => f.estado.clone(),
                "metodo_pago" => f.metodo_pago.clone(),
                "monto_minimo" => f.monto_minimo.clone(),
                "monto_maximo" => f.monto_maximo.clone(),
                _ => String::new(),
            })
        }
    };

    let input = move |name: &'static str, label: &'static str, kind: &'static str| {
        view! {
            <div class="filter-group">
                <label>{label}</label>
                <input
                    type=kind
                    placeholder={if kind == "number" { "0.00" } else { "" }}
                    step="0.01"
                    min="0"
                    prop:value=value_of(name)
                    on:change=move |ev| vm.set_filter(name, event_target_value(&ev))
                />
            </div>
        }
    };

    let select = move |name: &'static str,
                       label: &'static str,
                       all_label: &'static str,
                       choices: Vec<(String, String)>| {
        view! {
            <div class="filter-group">
                <label>{label}</label>
                <select prop:value=value_of(name) on:change=move |ev| vm.set_filter(name, event_target_value(&ev))>
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
                <h3>"🔍 Filtros Avanzados"</h3>
                <button class="btn-link" on:click=move |_| vm.clear_filters()>{icon("trash")} " Limpiar"</button>
            </div>
            <div class="filter-grid">
                {input("fecha_desde", "Fecha Desde", "date")}
                {input("fecha_hasta", "Fecha Hasta", "date")}
                {move || {
                    let options = vm.options.get();
                    let categorias = options.categorias.iter().map(|c| (c.id.clone(), c.nombre.clone())).collect();
                    let clientes = options.clientes.iter().map(|c| (c.id.clone(), c.nombre.clone())).collect();
                    let estados = options.estados.iter().map(|e| (e.value.clone(), e.label.clone())).collect();
                    let metodos = options.metodos_pago.iter().map(|m| (m.value.clone(), m.label.clone())).collect();
                    view! {
                        {select("categoria", "Categoría", "Todas las categorías", categorias)}
                        {select("cliente", "Cliente", "Todos los clientes", clientes)}
                        {select("estado", "Estado", "Todos los estados", estados)}
                        {select("metodo_pago", "Método de Pago", "Todos los métodos", metodos)}
                    }
                }}
                {input("monto_minimo", "Monto Mínimo (Bs.)", "number")}
                {input("monto_maximo", "Monto Máximo (Bs.)", "number")}
            </div>
            <p class="filter-panel__hint">
                "💡 Los filtros se aplicarán al generar el reporte. Puedes combinar múltiples filtros para refinar los resultados."
            </p>
        </div>
    }
}

#[component]
fn HistoryPanel(vm: DynamicReportViewModel) -> impl IntoView {
    view! {
        <div class="report-history">
            <h3>"📚 Historial de Reportes"</h3>
            {move || {
                let list = vm.history.get();
                if list.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <span class="empty-icon">"📭"</span>
                            <p>"No hay reportes generados aún"</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="report-history__list">
                        {list
                            .into_iter()
                            .map(|item| view! {
                                <div class="report-history__item">
                                    <div class="report-history__info">
                                        <div class="report-history__name">{item.nombre.clone()}</div>
                                        <div class="report-history__meta">
                                            <span>{item.tipo.clone()}</span>
                                            " • "
                                            <span>{item.date_label()}</span>
                                            {item.origin_label().map(|origin| view! { " • " <span>{origin}</span> })}
                                        </div>
                                    </div>
                                    <DownloadButtons report_id=item.id vm=vm />
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
