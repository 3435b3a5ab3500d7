use crate::domain::dispatch::Dispatch;
use crate::infrastructure::web::models::DispatchPayload;
use crate::infrastructure::web::request::Resource;

use super::errors::{fetched, Scope, TransformError};

pub fn transform_dispatches(
    dispatches: &Option<Vec<DispatchPayload>>,
) -> Result<Vec<Dispatch>, TransformError> {
    fetched(dispatches, Resource::Dispatches)?
        .iter()
        .enumerate()
        .map(|(i, dispatch)| {
            let scope = Scope::item(Resource::Dispatches, i);
            Ok(Dispatch::new(
                *scope.required(&dispatch.id, "id")?,
                *scope.required(&dispatch.published, "published")?,
                *scope.required(&dispatch.dispatch_type, "type")?,
                scope.required(&dispatch.message, "message")?,
            ))
        })
        .collect()
}
