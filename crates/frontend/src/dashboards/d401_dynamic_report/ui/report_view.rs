use contracts::dashboards::d401_dynamic_report::{
    render, RenderedReport, ReportFormat, ReportRecord, ReportTable, StructuredField, SummaryItem,
};
use leptos::prelude::*;

use super::view_model::DynamicReportViewModel;
use crate::shared::icons::icon;

/// Generated report: header with downloads and the rendered payload
#[component]
pub fn ReportResult(report: ReportRecord, vm: DynamicReportViewModel, is_admin: bool) -> impl IntoView {
    let rendered = render(&report.datos, &report.tipo, is_admin);
    let id = report.id;

    view! {
        <div class="report-result">
            <div class="report-result__header">
                <div>
                    <h2>{report.title()}</h2>
                    <div class="report-result__meta">
                        {is_admin.then(|| view! { <span class="badge">{report.type_label()}</span> })}
                        <span class="report-result__date">{report.date_label()}</span>
                    </div>
                </div>
                {id.map(|id| view! { <DownloadButtons report_id=id vm=vm /> })}
            </div>
            <div class="report-result__data">{rendered_view(rendered)}</div>
        </div>
    }
}

#[component]
pub fn DownloadButtons(report_id: i64, vm: DynamicReportViewModel) -> impl IntoView {
    view! {
        <div class="report-downloads">
            <button class="btn-secondary" title="Descargar PDF" on:click=move |_| vm.download_command(report_id, ReportFormat::Pdf)>
                {icon("download")} " PDF"
            </button>
            <button class="btn-secondary" title="Descargar Excel" on:click=move |_| vm.download_command(report_id, ReportFormat::Excel)>
                {icon("download")} " Excel"
            </button>
        </div>
    }
}

fn rendered_view(rendered: RenderedReport) -> AnyView {
    match rendered {
        RenderedReport::Raw(json) => view! { <pre class="report-json">{json}</pre> }.into_any(),
        RenderedReport::Empty { summary } => view! {
            <div class="empty-state">
                <span class="empty-icon">"📭"</span>
                <p>"No hay datos para mostrar"</p>
            </div>
            {summary.map(|items| view! { <SummaryCard items=items /> })}
        }
        .into_any(),
        RenderedReport::Table(table) => view! { <DataTable table=table /> }.into_any(),
        RenderedReport::Structured(fields) => view! {
            <div class="report-structured">
                {fields.into_iter().map(structured_field).collect_view()}
            </div>
        }
        .into_any(),
    }
}

fn structured_field(field: StructuredField) -> impl IntoView {
    view! {
        <div class="report-field">
            <strong>{format!("{}:", field.label)}</strong>
            {if field.is_json {
                view! { <pre class="report-json">{field.text}</pre> }.into_any()
            } else {
                view! { <span>{field.text}</span> }.into_any()
            }}
        </div>
    }
}

#[component]
fn SummaryCard(items: Vec<SummaryItem>) -> impl IntoView {
    view! {
        <div class="report-summary">
            <h3>"📊 Resumen"</h3>
            <div class="report-summary__grid">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class="report-summary__item" data-key=item.key>
                            <span class="report-summary__label">{item.label}</span>
                            <span class="report-summary__value">{item.value}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DataTable(table: ReportTable) -> impl IntoView {
    let ReportTable { summary, headers, hidden, rows, .. } = table;
    let has_details = !hidden.is_empty();

    view! {
        {summary.map(|items| view! { <SummaryCard items=items /> })}
        <div class="report-table-container">
            <table class="data-table report-table">
                <thead>
                    <tr>
                        {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                        {has_details.then(|| view! { <th>"Detalles"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                {has_details.then(|| view! {
                                    <td>
                                        <details class="report-details">
                                            <summary>"Ver más"</summary>
                                            <div class="report-details__content">
                                                {row
                                                    .details
                                                    .into_iter()
                                                    .map(|detail| view! {
                                                        <div class="report-details__item">
                                                            <strong>{format!("{}:", detail.key)}</strong>
                                                            <pre>{detail.text}</pre>
                                                        </div>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </details>
                                    </td>
                                })}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
