//! Controlador del formulario de contacto

use validator::Validate;

use crate::dto::contact_dto::ContactMessageRequest;
use crate::models::message::ContactMessage;
use crate::repositories::message_repository::MessageRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ContactController {
    messages: MessageRepository,
}

impl ContactController {
    pub fn new(state: &AppState) -> Self {
        Self {
            messages: MessageRepository::new(state.pool.clone()),
        }
    }

    pub async fn submit(&self, request: ContactMessageRequest) -> Result<ContactMessage, AppError> {
        request.validate()?;
        self.messages
            .create(request.name, request.email, request.message)
            .await
    }
}
