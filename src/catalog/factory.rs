use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::errors::ServiceResult;

// create_catalog_service builds the catalog and seeds it before it is shared.
pub async fn create_catalog_service(config: &Configuration) -> ServiceResult<Arc<dyn CatalogService>> {
    let book_repo = factory::create_book_repository();
    let svc = CatalogServiceImpl::new(config, book_repo);
    svc.init().await?;
    Ok(Arc::new(svc))
}
