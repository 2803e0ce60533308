pub mod award;
pub mod list;
pub mod user_badges;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct BadgeService {
    storage: Option<Arc<dyn Storage>>,
}

impl BadgeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 徽章目录
    pub async fn list_badges(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_badges(self, request).await
    }

    // 当前用户已获得的徽章
    pub async fn list_my_badges(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        user_badges::list_my_badges(self, request).await
    }
}
