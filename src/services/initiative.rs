use crate::errors::CivicError;
use crate::requests::initiative::{GetInitiative, ListInitiatives};
use crate::responses::types::initiative::Initiative;
use crate::services::execute;
use crate::transport::Transport;

pub struct InitiativeService<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> InitiativeService<'a, T> {

    pub fn new(transport: &'a T) -> Self {
        InitiativeService { transport }
    }

    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Initiative>, CivicError> {
        execute(self.transport, ListInitiatives { page, limit }).await
    }

    pub async fn get(&self, id: &str) -> Result<Initiative, CivicError> {
        execute(self.transport, GetInitiative { id }).await
    }

}
