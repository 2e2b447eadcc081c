//! One service per backend resource.
//!
//! Every method issues exactly one request and settles into either the
//! decoded `data` payload or a [`CivicError`]. Nothing is cached or retried.

pub mod auth;
pub mod bookmark;
pub mod comment;
pub mod initiative;
pub mod like;
pub mod post;

pub use auth::AuthService;
pub use bookmark::BookmarkService;
pub use comment::CommentService;
pub use initiative::InitiativeService;
pub use like::LikeService;
pub use post::PostService;

use crate::errors::CivicError;
use crate::requests::Operation;
use crate::responses::normalize;
use crate::transport::Transport;

pub async fn execute<T, O>(transport: &T, operation: O) -> Result<O::Output, CivicError>
where
    T: Transport + ?Sized,
    O: Operation,
{
    let request = operation.into_request();
    log::debug!("Calling {} {}", request.method, request.path);
    normalize(transport.send(request).await)
}
