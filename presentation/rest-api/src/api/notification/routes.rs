use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::notification::errors::NotificationError;
use business::domain::notification::model::NotificationInbox;
use business::domain::notification::use_cases::clear::{
    ClearNotificationsParams, ClearNotificationsUseCase,
};
use business::domain::notification::use_cases::delete::{
    DeleteNotificationParams, DeleteNotificationUseCase,
};
use business::domain::notification::use_cases::get_all::GetNotificationsUseCase;
use business::domain::notification::use_cases::mark_all_read::MarkAllNotificationsReadUseCase;
use business::domain::notification::use_cases::mark_read::{
    MarkNotificationReadParams, MarkNotificationReadUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::notification::dto::{NotificationInboxResponse, NotificationKindDto};
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    get_all_use_case: Arc<dyn GetNotificationsUseCase>,
    mark_read_use_case: Arc<dyn MarkNotificationReadUseCase>,
    mark_all_read_use_case: Arc<dyn MarkAllNotificationsReadUseCase>,
    delete_use_case: Arc<dyn DeleteNotificationUseCase>,
    clear_use_case: Arc<dyn ClearNotificationsUseCase>,
}

impl NotificationApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetNotificationsUseCase>,
        mark_read_use_case: Arc<dyn MarkNotificationReadUseCase>,
        mark_all_read_use_case: Arc<dyn MarkAllNotificationsReadUseCase>,
        delete_use_case: Arc<dyn DeleteNotificationUseCase>,
        clear_use_case: Arc<dyn ClearNotificationsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            mark_read_use_case,
            mark_all_read_use_case,
            delete_use_case,
            clear_use_case,
        }
    }
}

fn respond(result: Result<NotificationInbox, NotificationError>) -> NotificationApiResponse {
    match result {
        Ok(inbox) => NotificationApiResponse::Ok(Json(inbox.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                404 => NotificationApiResponse::NotFound(json),
                _ => NotificationApiResponse::InternalError(json),
            }
        }
    }
}

/// Unknown or malformed ids are reported the same way as missing ones.
fn parse_id(raw: &str) -> Result<Uuid, NotificationError> {
    Uuid::parse_str(raw).map_err(|_| NotificationError::NotFound)
}

/// Notification inbox API
#[OpenApi]
impl NotificationApi {
    /// Get the inbox
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn get_notifications(&self) -> NotificationApiResponse {
        respond(self.get_all_use_case.execute().await)
    }

    /// Clear notifications
    ///
    /// Removes every notification, or only those of the given type.
    #[oai(path = "/notifications", method = "delete", tag = "ApiTags::Notifications")]
    async fn clear_notifications(
        &self,
        #[oai(name = "type")] kind: Query<Option<NotificationKindDto>>,
    ) -> NotificationApiResponse {
        let params = ClearNotificationsParams {
            kind: kind.0.map(|k| k.into()),
        };
        respond(self.clear_use_case.execute(params).await)
    }

    /// Mark every notification as read
    #[oai(
        path = "/notifications/read-all",
        method = "post",
        tag = "ApiTags::Notifications"
    )]
    async fn mark_all_read(&self) -> NotificationApiResponse {
        respond(self.mark_all_read_use_case.execute().await)
    }

    /// Mark one notification as read
    #[oai(
        path = "/notifications/:id/read",
        method = "post",
        tag = "ApiTags::Notifications"
    )]
    async fn mark_read(&self, id: Path<String>) -> NotificationApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(err) => return respond(Err(err)),
        };
        respond(
            self.mark_read_use_case
                .execute(MarkNotificationReadParams { id })
                .await,
        )
    }

    /// Delete one notification
    #[oai(
        path = "/notifications/:id",
        method = "delete",
        tag = "ApiTags::Notifications"
    )]
    async fn delete_notification(&self, id: Path<String>) -> NotificationApiResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(err) => return respond(Err(err)),
        };
        respond(
            self.delete_use_case
                .execute(DeleteNotificationParams { id })
                .await,
        )
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum NotificationApiResponse {
    #[oai(status = 200)]
    Ok(Json<NotificationInboxResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
