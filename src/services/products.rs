use crate::domain::product::{NewProduct, Product};
use crate::domain::query::{PAGE_SIZE, QuerySpec, SearchRequest};
use crate::pagination::PageResult;
use crate::repository::{ProductReader, ProductWriter};
use crate::seed::generate_products;
use crate::services::{ServiceError, ServiceResult};

/// Runs a filtered, sorted and paginated product search.
///
/// `total` and `last_page` are computed from the unpaginated count.
pub fn search_products<R>(repo: &R, request: &SearchRequest) -> ServiceResult<PageResult<Product>>
where
    R: ProductReader + ?Sized,
{
    let spec = QuerySpec::from_request(request);

    spec.filter.validate().map_err(|err| {
        log::warn!("Rejected search pattern {:?}: {err}", request.term);
        ServiceError::from(err)
    })?;

    let total = repo.count_products(&spec.filter).map_err(|err| {
        log::error!("Failed to count products: {err}");
        ServiceError::from(err)
    })?;

    let items = repo.find_products(&spec).map_err(|err| {
        log::error!("Failed to load products: {err}");
        ServiceError::from(err)
    })?;

    Ok(PageResult::new(items, total as i64, request.page, PAGE_SIZE))
}

/// Returns every product without filtering or pagination.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(|err| {
        log::error!("Failed to list products: {err}");
        ServiceError::from(err)
    })
}

/// Persists the provided products.
pub fn create_products<R>(repo: &R, new_products: &[NewProduct]) -> ServiceResult<usize>
where
    R: ProductWriter + ?Sized,
{
    repo.create_products(new_products)
        .map_err(ServiceError::from)
}

/// Seeds `count` randomly generated products.
pub fn populate_products<R>(repo: &R, count: usize) -> ServiceResult<usize>
where
    R: ProductWriter + ?Sized,
{
    let inserted = create_products(repo, &generate_products(count)).map_err(|err| {
        log::error!("Failed to populate products: {err}");
        err
    })?;
    log::info!("Inserted {inserted} generated products");
    Ok(inserted)
}
