use storage::{
    dto::exercise::CatalogSearchParams,
    models::{CatalogExercise, search_catalog},
};

/// Search the built-in exercise catalog
pub fn search_exercises(params: &CatalogSearchParams) -> Vec<CatalogExercise> {
    search_catalog(params.search.as_deref(), params.category.as_deref())
}
