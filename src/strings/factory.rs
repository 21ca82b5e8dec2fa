use std::sync::Arc;
use crate::strings::domain::service::StringServiceImpl;
use crate::strings::domain::StringService;

pub fn create_string_service() -> Arc<dyn StringService> {
    Arc::new(StringServiceImpl::new())
}
