//! Table inference for report payloads.
//!
//! The report service returns free-form JSON. Payloads with a `datos` array
//! are rendered as a table whose columns are inferred from the first row;
//! anything else is shown field by field.

use super::format::{format_cell, format_summary_value, is_composite, is_truthy, plain_string, pretty_json};
use crate::shared::text::{humanize_key, title_case};
use serde_json::{Map, Value};

/// Report types whose summary block is shown
const SUMMARY_REPORT_TYPES: [&str; 4] = ["mis_compras", "financiero", "ventas", "clientes"];

/// Summary keys that only repeat what the table shows
const SUMMARY_NOISE: [&str; 5] = [
    "compras_mostradas",
    "compras_totales",
    "categorias_analizadas",
    "clientes_mostrados",
    "por_metodo_pago",
];

/// Companion suffixes that mark alternative renderings of the same field
const TWIN_SUFFIXES: [&str; 4] = ["_display", "_formateado", "_iso", "_numero"];

const EXCLUDED_COLUMNS: [&str; 23] = [
    "cliente",
    "productos",
    "productos_mas_comprados",
    "categorias_incluidas",
    "cliente_info",
    "fecha_iso",
    "fecha_formateada",
    "fecha_ultima_compra",
    "fecha_primera_compra",
    "id",
    "id_venta",
    "id_reporte",
    "total_numero",
    "monto_total",
    "precio_unitario_promedio",
    "precio_numero",
    "display",
    "notas",
    "direccion_entrega",
    "productos_count",
    "total_productos_cantidad",
    "veces_comprado",
    "metodo_pago_key",
];

/// Customer contact data, hidden from non-admins
const CONTACT_COLUMNS: [&str; 3] = ["cliente_email", "cliente_telefono", "cliente_direccion"];

const CLIENT_COLUMNS: [&str; 7] = [
    "nombre",
    "email",
    "telefono",
    "direccion",
    "ciudad",
    "total_compras",
    "ultima_compra",
];

const FINANCIAL_COLUMNS: [&str; 5] = [
    "metodo_pago",
    "cantidad_ventas",
    "total_formateado",
    "total",
    "porcentaje",
];

const PRODUCT_COLUMNS: [&str; 7] = [
    "nombre",
    "precio",
    "categoria",
    "stock",
    "marca",
    "monto_total_vendido",
    "veces_vendido",
];

const PRIORITY_COLUMNS: [&str; 15] = [
    "nombre",
    "precio",
    "precio_total",
    "precio_unitario",
    "total",
    "cantidad",
    "categoria",
    "fecha",
    "stock",
    "marca",
    "estado",
    "estado_display",
    "metodo_pago",
    "metodo_pago_display",
    "cliente_nombre",
];

const ADMIN_PRIORITY_COLUMNS: [&str; 2] = ["cliente_email", "cliente_telefono"];

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Hidden columns: humanised label and pretty JSON of the value
    pub details: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub summary: Option<Vec<SummaryItem>>,
    pub columns: Vec<String>,
    pub headers: Vec<String>,
    pub hidden: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Top-level field of a payload without a `datos` array
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredField {
    pub label: String,
    pub text: String,
    /// Composite values are shown as a JSON block
    pub is_json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedReport {
    /// Non-object payload shown as pretty JSON
    Raw(String),
    Empty { summary: Option<Vec<SummaryItem>> },
    Table(ReportTable),
    Structured(Vec<StructuredField>),
}

/// Render a report payload.
///
/// `tipo` is the report type assigned by the service, `is_admin` decides
/// whether customer contact columns may be shown.
pub fn render(datos: &Value, tipo: &str, is_admin: bool) -> RenderedReport {
    let payload = match datos {
        Value::Object(map) => map,
        Value::Array(items) => {
            return RenderedReport::Structured(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| structured_field(&i.to_string(), v))
                    .collect(),
            )
        }
        other => return RenderedReport::Raw(pretty_json(other)),
    };

    let rows = match payload.get("datos") {
        Some(Value::Array(rows)) => rows,
        _ => {
            return RenderedReport::Structured(
                payload.iter().map(|(k, v)| structured_field(k, v)).collect(),
            )
        }
    };

    let summary = summary_items(payload, tipo);
    if rows.is_empty() {
        return RenderedReport::Empty { summary };
    }

    let empty = Map::new();
    let first = rows[0].as_object().unwrap_or(&empty);
    let tipo = if is_client_listing(first, tipo) { "clientes" } else { tipo };
    let columns = visible_columns(first, tipo, is_admin);
    let hidden: Vec<String> = first
        .keys()
        .filter(|k| !columns.contains(*k))
        .cloned()
        .collect();

    let rows = rows
        .iter()
        .map(|row| {
            let obj = row.as_object();
            let get = |key: &str| obj.and_then(|o| o.get(key));
            TableRow {
                cells: columns.iter().map(|c| format_cell(get(c.as_str()), c)).collect(),
                details: hidden
                    .iter()
                    .map(|h| TableCell {
                        key: humanize_key(h),
                        text: get(h.as_str()).map(pretty_json).unwrap_or_default(),
                    })
                    .collect(),
            }
        })
        .collect();

    RenderedReport::Table(ReportTable {
        summary,
        headers: columns.iter().map(|c| column_label(c)).collect(),
        columns,
        hidden,
        rows,
    })
}

fn structured_field(key: &str, value: &Value) -> StructuredField {
    StructuredField {
        label: humanize_key(key),
        text: plain_string(value),
        is_json: is_composite(value),
    }
}

/// Summary block (`resumen`, or `summary`), only for report types that
/// carry a meaningful one
pub fn summary_items(payload: &Map<String, Value>, tipo: &str) -> Option<Vec<SummaryItem>> {
    let resumen = ["resumen", "summary"]
        .iter()
        .filter_map(|k| payload.get(*k))
        .find(|v| is_truthy(v))?
        .as_object()?;
    if !SUMMARY_REPORT_TYPES.contains(&tipo) || resumen.is_empty() {
        return None;
    }

    let has_twin = |key: &str, suffix: &str| {
        resumen
            .get(&format!("{}{}", key, suffix))
            .is_some_and(is_truthy)
    };

    let items = resumen
        .iter()
        .filter(|(key, value)| {
            if is_composite(value) || SUMMARY_NOISE.contains(&key.as_str()) {
                return false;
            }
            let formatted = key.contains("_formateado") || key.contains("_display");
            let primary = !TWIN_SUFFIXES.iter().any(|s| key.contains(s));
            formatted
                || (primary
                    && !has_twin(key.as_str(), "_formateado")
                    && !has_twin(key.as_str(), "_display"))
        })
        .map(|(key, value)| {
            let shown = resumen
                .get(&format!("{}_formateado", key))
                .unwrap_or(value);
            SummaryItem {
                key: key.clone(),
                label: humanize_key(key)
                    .replacen(" Formateado", "", 1)
                    .replacen(" Display", "", 1),
                value: format_summary_value(shown, key),
            }
        })
        .collect();
    Some(items)
}

fn has(row: &Map<String, Value>, key: &str) -> bool {
    row.contains_key(key)
}

/// Customer listing: contact fields present, no price
fn is_client_listing(row: &Map<String, Value>, tipo: &str) -> bool {
    tipo == "clientes" || (has(row, "email") && has(row, "telefono") && !has(row, "precio"))
}

fn is_financial(row: &Map<String, Value>, tipo: &str) -> bool {
    tipo == "financiero"
        || (has(row, "metodo_pago") && has(row, "cantidad_ventas") && has(row, "total"))
}

fn is_product_listing(row: &Map<String, Value>, tipo: &str) -> bool {
    tipo == "productos"
        || (has(row, "precio") && (has(row, "stock") || has(row, "categoria") || has(row, "marca")))
}

fn is_scalar(row: &Map<String, Value>, key: &str) -> bool {
    row.get(key).is_some_and(|v| !is_composite(v))
}

fn present(row: &Map<String, Value>, layout: &[&str]) -> Vec<String> {
    layout
        .iter()
        .filter(|c| has(row, c))
        .map(|c| c.to_string())
        .collect()
}

fn excluded_for(is_admin: bool) -> Vec<&'static str> {
    let mut excluded = EXCLUDED_COLUMNS.to_vec();
    if !is_admin {
        excluded.extend(CONTACT_COLUMNS);
    }
    excluded
}

/// `a` is an alternative rendering of `b` or the other way round
fn is_twin(a: &str, b: &str) -> bool {
    TWIN_SUFFIXES.iter().any(|suffix| {
        a.strip_suffix(suffix) == Some(b) || b.strip_suffix(suffix) == Some(a)
    })
}

/// Columns shown for a row shaped like `row`
pub fn visible_columns(row: &Map<String, Value>, tipo: &str, is_admin: bool) -> Vec<String> {
    if is_client_listing(row, tipo) {
        return present(row, &CLIENT_COLUMNS);
    }

    if is_financial(row, tipo) {
        let mut columns = present(row, &FINANCIAL_COLUMNS);
        if columns.iter().any(|c| c == "total_formateado") {
            columns.retain(|c| c != "total");
        }
        return columns;
    }

    if is_product_listing(row, tipo) {
        return present(row, &PRODUCT_COLUMNS);
    }

    let excluded = excluded_for(is_admin);

    let mut columns: Vec<String> = Vec::new();
    if has(row, "nombre") {
        columns.push("nombre".to_string());
    }

    let admin_extra: &[&str] = if is_admin { &ADMIN_PRIORITY_COLUMNS } else { &[] };
    for &key in PRIORITY_COLUMNS.iter().chain(admin_extra) {
        if has(row, key)
            && !excluded.contains(&key)
            && !columns.iter().any(|c| c == key)
            && is_scalar(row, key)
        {
            columns.push(key.to_string());
        }
    }

    for key in row.keys() {
        if columns.contains(key) || excluded.contains(&key.as_str()) || !is_scalar(row, key) {
            continue;
        }
        if columns.iter().any(|c| is_twin(c, key)) {
            continue;
        }
        columns.push(key.clone());
    }

    columns
}

/// Header text for a column
pub fn column_label(key: &str) -> String {
    let known = match key {
        "nombre" => "Nombre",
        "precio" => "Precio",
        "categoria" => "Categoría",
        "stock" => "Stock",
        "marca" => "Marca",
        "cantidad_vendida" => "Cantidad Vendida",
        "monto_total_vendido" => "Monto Total Vendido",
        "veces_vendido" => "Veces Vendido",
        "email" => "Email",
        "telefono" => "Teléfono",
        "direccion" => "Dirección",
        "ciudad" => "Ciudad",
        "total_compras" => "Total Compras",
        "ultima_compra" => "Última Compra",
        "fecha" => "Fecha",
        "total" => "Total",
        "estado" => "Estado",
        "metodo_pago" => "Método de Pago",
        "cliente_nombre" => "Cliente",
        "cantidad_ventas" => "Cantidad de Ventas",
        "total_formateado" => "Total",
        "porcentaje" => "Porcentaje (%)",
        _ => "",
    };
    if !known.is_empty() {
        return known.to_string();
    }
    title_case(&key.replace('_', " "))
        .replacen("Formateado", "", 1)
        .replacen("Display", "", 1)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(report: RenderedReport) -> ReportTable {
        match report {
            RenderedReport::Table(t) => t,
            other => panic!("expected table, got {:?}", other),
        }
    }

    fn row(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_non_object_payloads() {
        assert_eq!(render(&Value::Null, "ventas", true), RenderedReport::Raw("null".into()));
        assert_eq!(render(&json!("texto"), "ventas", true), RenderedReport::Raw("\"texto\"".into()));
        assert_eq!(render(&json!(42), "", false), RenderedReport::Raw("42".into()));
    }

    #[test]
    fn test_structured_payload() {
        let report = render(&json!({ "total_ventas": 10, "detalle": { "a": 1 }, "nota": null }), "", true);
        match report {
            RenderedReport::Structured(fields) => {
                assert_eq!(fields.len(), 3);
                assert_eq!(fields[0].label, "Total Ventas");
                assert_eq!(fields[0].text, "10");
                assert!(!fields[0].is_json);
                assert!(fields[1].is_json);
                assert_eq!(fields[2].text, "null");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_rows_keep_summary() {
        let report = render(
            &json!({ "datos": [], "resumen": { "total_gastado": 0 } }),
            "mis_compras",
            false,
        );
        assert_eq!(
            report,
            RenderedReport::Empty {
                summary: Some(vec![SummaryItem {
                    key: "total_gastado".into(),
                    label: "Total Gastado".into(),
                    value: "0".into(),
                }])
            }
        );
    }

    #[test]
    fn test_summary_rules() {
        let payload = row(json!({
            "resumen": {
                "total_gastado": 1500.5,
                "total_gastado_formateado": "Bs. 1,500.50",
                "compras_mostradas": 10,
                "por_metodo_pago": { "efectivo": 3 },
                "categorias": ["a"],
                "promedio_compra": 250.75,
                "fecha_iso": "2024-10-01",
                "cantidad": 6,
                "estado_display": "Completada"
            }
        }));
        let items = summary_items(&payload, "mis_compras").unwrap();
        let keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["total_gastado_formateado", "promedio_compra", "cantidad", "estado_display"]);
        assert_eq!(items[0].label, "Total Gastado");
        assert_eq!(items[0].value, "Bs. 1,500.50");
        assert_eq!(items[1].value, "Bs. 250.75");
        assert_eq!(items[2].value, "6");
        assert_eq!(items[3].label, "Estado");

        assert!(summary_items(&payload, "productos").is_none());
        let summary_alias = row(json!({ "summary": { "clientes_activos": 3 } }));
        assert_eq!(summary_items(&summary_alias, "clientes").unwrap()[0].value, "3");
        assert!(summary_items(&row(json!({ "resumen": {} })), "ventas").is_none());
    }

    #[test]
    fn test_client_layout() {
        let data = json!({ "datos": [{
            "id": 3,
            "nombre": "Ana",
            "email": "ana@mail.com",
            "telefono": "777",
            "ciudad": "La Paz",
            "total_compras": 1200.5,
            "es_cliente_vip": true
        }]});
        let t = table(render(&data, "", false));
        assert_eq!(t.columns, vec!["nombre", "email", "telefono", "ciudad", "total_compras"]);
        assert_eq!(t.headers, vec!["Nombre", "Email", "Teléfono", "Ciudad", "Total Compras"]);
        assert_eq!(t.hidden, vec!["id", "es_cliente_vip"]);
        assert_eq!(t.rows[0].cells[4], "Bs. 1,200.50");
        assert_eq!(t.rows[0].details[1].key, "Es Cliente Vip");
        assert_eq!(t.rows[0].details[1].text, "true");
    }

    #[test]
    fn test_financial_layout_prefers_formatted_total() {
        let data = json!({ "datos": [
            { "metodo_pago": "efectivo", "cantidad_ventas": 12, "total": 500.25, "total_formateado": "Bs. 500.25", "porcentaje": 40.5 },
            { "metodo_pago": "qr", "cantidad_ventas": 3, "total": 100, "total_formateado": "Bs. 100.00", "porcentaje": 59.5 }
        ]});
        let t = table(render(&data, "", true));
        assert_eq!(t.columns, vec!["metodo_pago", "cantidad_ventas", "total_formateado", "porcentaje"]);
        assert_eq!(t.headers[2], "Total");
        assert_eq!(t.headers[3], "Porcentaje (%)");
        assert_eq!(t.hidden, vec!["total"]);
        assert_eq!(t.rows[1].cells, vec!["qr", "3", "Bs. 100.00", "59.50"]);
    }

    #[test]
    fn test_product_layout() {
        let first = row(json!({
            "id": 1, "nombre": "Mouse", "precio": 80.5, "stock": 12000,
            "categoria": "Accesorios", "veces_vendido": 4, "descripcion": "x"
        }));
        assert_eq!(
            visible_columns(&first, "", false),
            vec!["nombre", "precio", "categoria", "stock", "veces_vendido"]
        );
        let t = table(render(&json!({ "datos": [first] }), "productos", false));
        assert_eq!(t.rows[0].cells[1], "Bs. 80.50");
        assert_eq!(t.rows[0].cells[3], "12,000");
    }

    #[test]
    fn test_generic_layout_order_and_twins() {
        let first = row(json!({
            "id_venta": 9,
            "fecha": "2024-10-15T14:02:00Z",
            "total": 350.0,
            "estado": "completada",
            "estado_display": "Completada",
            "cliente": { "nombre": "Ana", "email": "ana@mail.com" },
            "cliente_nombre": "Ana",
            "cliente_email": "ana@mail.com",
            "productos": [{ "id": 1 }],
            "descuento": 0,
            "descuento_numero": 0,
            "notas": "entregar rápido"
        }));
        assert_eq!(
            visible_columns(&first, "ventas", false),
            vec!["total", "fecha", "estado", "estado_display", "cliente_nombre", "descuento"]
        );
        assert_eq!(
            visible_columns(&first, "ventas", true),
            vec!["total", "fecha", "estado", "estado_display", "cliente_nombre", "cliente_email", "descuento"]
        );
    }

    #[test]
    fn test_generic_nombre_first() {
        let first = row(json!({ "cantidad": 2, "nombre": "Teclado", "extra_info": null }));
        assert_eq!(visible_columns(&first, "", false), vec!["nombre", "cantidad", "extra_info"]);
    }

    #[test]
    fn test_generic_table_rendering() {
        let data = json!({ "datos": [
            { "fecha": "2024-10-15T14:02:00Z", "total": 350.75, "productos": [{ "id": 1 }, { "id": 2 }], "pagado": true },
            { "fecha": null, "total": 12 }
        ]});
        let t = table(render(&data, "mis_compras", false));
        assert_eq!(t.columns, vec!["total", "fecha", "pagado"]);
        assert_eq!(t.headers, vec!["Total", "Fecha", "Pagado"]);
        assert_eq!(t.rows[0].cells, vec!["Bs. 350.75", "15 oct 2024, 14:02", "Sí"]);
        assert_eq!(t.rows[1].cells, vec!["12", "N/A", "N/A"]);
        assert_eq!(t.hidden, vec!["productos"]);
        assert_eq!(t.rows[1].details[0].text, "");
        assert!(t.summary.is_none());
    }

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label("metodo_pago"), "Método de Pago");
        assert_eq!(column_label("estado_display"), "Estado");
        assert_eq!(column_label("fecha_entrega_formateado"), "Fecha Entrega");
        assert_eq!(column_label("subtotal"), "Subtotal");
    }

    #[test]
    fn test_twin_detection() {
        assert!(is_twin("total_numero", "total"));
        assert!(is_twin("estado", "estado_display"));
        assert!(!is_twin("estado", "estado_pago"));
    }
}
