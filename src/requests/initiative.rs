use crate::requests::{ApiRequest, Operation};
use crate::responses::types::initiative::Initiative;
use crate::utils::encode_segment;

pub const BASE_PATH: &str = "/api/v1/initiative";

#[derive(Clone, Copy, Debug)]
pub struct ListInitiatives {
    pub page: u32,
    pub limit: u32,
}

impl Operation for ListInitiatives {
    type Output = Vec<Initiative>;

    fn into_request(self) -> ApiRequest {
        ApiRequest::get(BASE_PATH)
            .query("page", self.page)
            .query("limit", self.limit)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GetInitiative<'a> {
    pub id: &'a str,
}

impl Operation for GetInitiative<'_> {
    type Output = Initiative;

    fn into_request(self) -> ApiRequest {
        ApiRequest::get(format!("{BASE_PATH}/{}", encode_segment(self.id)))
    }
}
