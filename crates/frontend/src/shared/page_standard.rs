//! Page category constants.
//!
//! Every screen rendered by the shell declares:
//!   - HTML `id` in the format `{area}--{category}` (e.g. `"a003_sale--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the area searchable: copy the id from the DOM
//! inspector and it points at the matching `domain/` or `dashboards/` folder.

/// Records with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Creation / edit forms
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Charts and indicators
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Session and store administration
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form layout (storefront, report builder)
pub const PAGE_CAT_CUSTOM: &str = "custom";
