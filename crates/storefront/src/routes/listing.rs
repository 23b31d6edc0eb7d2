//! Product listing page composer.
//!
//! Store, collection and category pages share one layout: a refinement
//! sidebar, a heading and a product grid behind a loading boundary. The page
//! itself only renders the skeleton; the grid arrives from the scope's
//! `/products` fragment endpoint.

use askama::Template;
use askama_web::WebTemplate;

use medusa_storefront_core::CountryCode;

use crate::components::{
    FacetData, ProductGrid, RefinementList, SideMenu, SkeletonProductGrid, Suspended,
};
use crate::filters;
use crate::listing::ListingParams;
use crate::medusa::{ProductQuery, StoreCollection, StoreProductCategory};
use crate::state::AppState;

/// What a listing shows.
#[derive(Debug, Clone, Copy)]
pub enum ListingScope<'a> {
    /// The whole catalog.
    Store,
    /// One collection.
    Collection(&'a StoreCollection),
    /// One category.
    Category(&'a StoreProductCategory),
}

impl ListingScope<'_> {
    /// Page path without the country prefix.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Store => "/store".to_string(),
            Self::Collection(collection) => collection.handle.collection_path(),
            Self::Category(category) => category.handle.category_path(),
        }
    }

    /// `<h1>` text. An empty title stays empty.
    #[must_use]
    pub fn heading(&self) -> String {
        match self {
            Self::Store => "All products".to_string(),
            Self::Collection(collection) => collection.title.clone(),
            Self::Category(category) => category.name.clone(),
        }
    }

    /// Advisory size of the loading skeleton.
    #[must_use]
    pub fn skeleton(&self) -> SkeletonProductGrid {
        match self {
            Self::Collection(collection) => {
                SkeletonProductGrid::new(collection.products.as_ref().map(Vec::len))
            }
            Self::Store | Self::Category(_) => SkeletonProductGrid::default(),
        }
    }

    /// Product query for the grid.
    #[must_use]
    pub fn product_query(
        &self,
        params: &ListingParams,
        product_type: Option<String>,
        country_code: &CountryCode,
    ) -> ProductQuery {
        let mut query = ProductQuery::new(country_code.clone());
        query.sort = params.sort;
        query.page = params.page;
        query.product_type = product_type;
        match self {
            Self::Store => {}
            Self::Collection(collection) => query.collection_id = Some(collection.id.clone()),
            Self::Category(category) => query.category_id = Some(category.id.clone()),
        }
        query
    }
}

/// A composed listing page, independent of the surrounding layout.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub heading: String,
    pub refinement: RefinementList,
    pub products: Suspended<ProductGrid>,
    /// Parameters the suspended grid is fetched with.
    pub grid_query: ProductQuery,
}

impl ListingPage {
    /// Compose a listing page.
    ///
    /// The grid's type filter comes from `facets`; sort and page come from
    /// `params`.
    #[must_use]
    pub fn compose(
        scope: ListingScope<'_>,
        params: &ListingParams,
        country_code: &CountryCode,
        facets: &FacetData,
    ) -> Self {
        let base_path = country_code.localize(&scope.path());
        let active_category = match scope {
            ListingScope::Category(category) => Some(&category.handle),
            ListingScope::Store | ListingScope::Collection(_) => None,
        };

        let grid_params = ListingParams {
            product_type: facets.product_type.clone(),
            ..params.clone()
        };
        let src = grid_params.href(&format!("{base_path}/products"));

        Self {
            heading: scope.heading(),
            refinement: RefinementList::new(
                facets,
                &grid_params,
                &base_path,
                country_code,
                active_category,
            ),
            products: Suspended::pending(src, scope.skeleton()),
            grid_query: scope.product_query(params, facets.product_type.clone(), country_code),
        }
    }
}

/// Full listing page.
#[derive(Template, WebTemplate)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    pub menu: SideMenu,
    pub heading: String,
    pub refinement: RefinementList,
    pub products: Suspended<ProductGrid>,
}

impl ListingTemplate {
    #[must_use]
    pub fn new(menu: SideMenu, page: ListingPage) -> Self {
        Self {
            menu,
            heading: page.heading,
            refinement: page.refinement,
            products: page.products,
        }
    }
}

/// Resolved grid fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Suspended<ProductGrid>,
}

/// Load category and product type facets concurrently.
///
/// A failed list is logged and treated as absent.
pub async fn load_facets(state: &AppState, product_type: Option<String>) -> FacetData {
    let medusa = state.medusa();
    let (categories, types) = tokio::join!(medusa.list_categories(), medusa.list_product_types());

    let categories = categories
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to load categories for facets"))
        .ok();
    let types = types
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to load product types for facets"))
        .ok();

    FacetData::from_catalog(categories.as_deref(), types.as_deref(), product_type)
}

/// Fetch and render one page of the grid for `scope`.
///
/// # Errors
///
/// Returns an error if no region sells to `country_code` or the Store API
/// request fails.
pub async fn render_grid(
    state: &AppState,
    scope: ListingScope<'_>,
    params: &ListingParams,
    country_code: &CountryCode,
) -> crate::error::Result<ProductGridTemplate> {
    let query = scope.product_query(params, params.product_type.clone(), country_code);
    let page = state
        .medusa()
        .list_products_with_sort(&query, state.config().products_per_page)
        .await?;

    let base_path = country_code.localize(&scope.path());
    let grid = ProductGrid::new(&page, params, &base_path, country_code);

    Ok(ProductGridTemplate {
        products: Suspended::Resolved(grid),
    })
}
