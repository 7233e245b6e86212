use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogSearchParams {
    /// Case-insensitive substring of the exercise name
    pub search: Option<String>,
    /// Exact category, case-insensitive
    pub category: Option<String>,
}
